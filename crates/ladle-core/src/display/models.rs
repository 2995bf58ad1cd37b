//! Display implementations for domain models.
//!
//! All output is markdown for the terminal renderer.

use std::fmt;

use super::datetime::ServerTime;
use crate::models::{Category, Difficulty, Ingredient, Instruction, Recipe, RecipeSummary};

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats an amount without a trailing `.0` for whole numbers.
pub(crate) fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        format!("{amount}")
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = format_amount(self.amount);
        match self.unit.as_deref().filter(|unit| !unit.is_empty()) {
            Some(unit) => write!(f, "{} ({amount} {unit})", self.name),
            None => write!(f, "{} ({amount})", self.name),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.step_number, self.description)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Category: {}", self.category)?;
        writeln!(f, "- Difficulty: {}", self.difficulty)?;
        writeln!(f, "- Prep Time: {} minutes", self.prep_time)?;
        writeln!(f, "- Cook Time: {} minutes", self.cook_time)?;
        writeln!(f, "- Servings: {}", self.servings)?;
        if let Some(created) = &self.created_at {
            writeln!(f, "- Created: {}", ServerTime(created))?;
        }
        if let Some(updated) = &self.updated_at {
            writeln!(f, "- Updated: {}", ServerTime(updated))?;
        }

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        writeln!(f, "\n## Ingredients")?;
        writeln!(f)?;
        if self.ingredients.is_empty() {
            writeln!(f, "No ingredients listed.")?;
        }
        for ingredient in &self.ingredients {
            writeln!(f, "- {ingredient}")?;
        }

        writeln!(f, "\n## Instructions")?;
        writeln!(f)?;
        let steps = self.sorted_instructions();
        if steps.is_empty() {
            writeln!(f, "No instructions listed.")?;
        }
        for step in steps {
            writeln!(f, "{step}")?;
        }

        Ok(())
    }
}

impl fmt::Display for RecipeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.title, self.id)?;
        writeln!(f)?;

        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }

        if let Some(category) = self.category {
            writeln!(f, "- **Category**: {category}")?;
        }
        writeln!(f, "- **Difficulty**: {}", self.difficulty)?;
        writeln!(f, "- **Total Time**: {} minutes", self.total_time())?;
        if let Some(servings) = self.servings {
            writeln!(f, "- **Servings**: {servings}")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeId;

    fn create_test_recipe() -> Recipe {
        Recipe {
            id: RecipeId::from("7"),
            title: "Shakshuka".to_string(),
            description: "Eggs in spiced tomato.".to_string(),
            prep_time: 10,
            cook_time: 20,
            servings: 2,
            category: Category::Breakfast,
            difficulty: Difficulty::Medium,
            ingredients: vec![
                Ingredient {
                    id: Some("a".to_string()),
                    name: "Egg".to_string(),
                    amount: 4.0,
                    unit: None,
                },
                Ingredient {
                    id: Some("b".to_string()),
                    name: "Paprika".to_string(),
                    amount: 1.5,
                    unit: Some("tsp".to_string()),
                },
            ],
            instructions: vec![
                Instruction {
                    id: None,
                    step_number: 2,
                    description: "Crack in the eggs.".to_string(),
                },
                Instruction {
                    id: None,
                    step_number: 1,
                    description: "Simmer the sauce.".to_string(),
                },
            ],
            created_at: Some("not a date".to_string()),
            updated_at: None,
        }
    }

    #[test]
    fn test_recipe_display_orders_steps() {
        let output = create_test_recipe().to_string();

        assert!(output.starts_with("# Shakshuka\n"));
        assert!(output.contains("- Category: Breakfast"));
        assert!(output.contains("- Egg (4)"));
        assert!(output.contains("- Paprika (1.5 tsp)"));
        assert!(output.contains("- Created: not a date"));

        let first = output.find("1. Simmer").unwrap();
        let second = output.find("2. Crack").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_summary_without_optional_fields() {
        let mut summary = RecipeSummary::from(&create_test_recipe());
        summary.category = None;
        summary.servings = None;

        let output = summary.to_string();
        assert!(output.contains("## Shakshuka (ID: 7)"));
        assert!(output.contains("- **Total Time**: 30 minutes"));
        assert!(!output.contains("Category"));
        assert!(!output.contains("Servings"));
    }
}
