//! GraphQL documents for every remote operation.

pub const ALL_RECIPES: &str = "query GetAllRecipes {
  allRecipes {
    id title description prepTime cookTime servings category difficulty createdAt
  }
}";

pub const RECIPE_BY_ID: &str = "query GetRecipeById($id: ID!) {
  recipeById(id: $id) {
    id title description prepTime cookTime servings category difficulty
    ingredients { id name amount unit }
    instructions { id stepNumber description }
    createdAt updatedAt
  }
}";

pub const RECIPES_BY_CATEGORY: &str = "query GetRecipesByCategory($category: String!) {
  recipesByCategory(category: $category) {
    id title description prepTime cookTime difficulty
  }
}";

pub const CREATE_RECIPE: &str = "mutation CreateRecipe($input: RecipeInput!) {
  createRecipe(input: $input) {
    id title description category difficulty
  }
}";

pub const UPDATE_RECIPE: &str = "mutation UpdateRecipe($id: ID!, $input: RecipeInput!) {
  updateRecipe(id: $id, input: $input) {
    id title description prepTime cookTime servings category difficulty
    ingredients { id name amount unit }
    instructions { id stepNumber description }
  }
}";

pub const DELETE_RECIPE: &str = "mutation DeleteRecipe($id: ID!) {
  deleteRecipe(id: $id)
}";

pub const ADD_INGREDIENT: &str =
    "mutation AddIngredient($recipeId: ID!, $ingredientInput: IngredientInput!) {
  addIngredientToRecipe(recipeId: $recipeId, ingredientInput: $ingredientInput) {
    id
    ingredients { id name amount unit }
  }
}";

pub const ADD_INSTRUCTION: &str =
    "mutation AddInstruction($recipeId: ID!, $instructionInput: InstructionInput!) {
  addInstructionToRecipe(recipeId: $recipeId, instructionInput: $instructionInput) {
    id
    instructions { id stepNumber description }
  }
}";
