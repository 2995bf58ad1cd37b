//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{Category, RecipeSummary};

/// Newtype wrapper for displaying a list of recipe summaries.
///
/// Holds borrowed summaries so a filtered view can be shown without cloning.
///
/// # Examples
///
/// ```rust
/// use ladle_core::{
///     display::RecipeSummaries,
///     models::{Difficulty, RecipeId, RecipeSummary},
/// };
///
/// let recipe = RecipeSummary {
///     id: RecipeId::from("1"),
///     title: "Pancakes".to_string(),
///     description: String::new(),
///     prep_time: 5,
///     cook_time: 10,
///     servings: None,
///     category: None,
///     difficulty: Difficulty::Easy,
///     created_at: None,
/// };
///
/// let output = RecipeSummaries(vec![&recipe]).to_string();
/// assert!(output.contains("Pancakes"));
/// ```
pub struct RecipeSummaries<'a>(pub Vec<&'a RecipeSummary>);

impl RecipeSummaries<'_> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for RecipeSummaries<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No recipes found.");
        }
        for recipe in &self.0 {
            write!(f, "{recipe}")?;
        }
        Ok(())
    }
}

/// The facet set as a bullet list.
pub struct Categories(pub Vec<Category>);

impl fmt::Display for Categories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No categories found.");
        }
        for category in &self.0 {
            writeln!(f, "- {} (`{}`)", category.label(), category.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, RecipeId};

    fn summary(id: &str, title: &str) -> RecipeSummary {
        RecipeSummary {
            id: RecipeId::from(id),
            title: title.to_string(),
            description: String::new(),
            prep_time: 0,
            cook_time: 0,
            servings: Some(1),
            category: Some(Category::Lunch),
            difficulty: Difficulty::Hard,
            created_at: None,
        }
    }

    #[test]
    fn test_recipe_summaries_display() {
        let soup = summary("1", "Soup");
        let salad = summary("2", "Salad");
        let output = RecipeSummaries(vec![&soup, &salad]).to_string();
        assert!(output.find("Soup").unwrap() < output.find("Salad").unwrap());

        let empty = RecipeSummaries(vec![]);
        assert!(empty.is_empty());
        assert_eq!(empty.to_string(), "No recipes found.\n");
    }

    #[test]
    fn test_categories_display() {
        let output = Categories(vec![Category::Dessert, Category::Snack]).to_string();
        assert_eq!(output, "- Dessert (`DESSERT`)\n- Snack (`SNACK`)\n");
        assert_eq!(Categories(vec![]).to_string(), "No categories found.\n");
    }
}
