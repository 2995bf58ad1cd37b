//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{
    models::RecipeId,
    pipeline::{CreationReport, PhaseReport},
};

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

fn write_phase<T>(f: &mut fmt::Formatter<'_>, label: &str, phase: &PhaseReport<T>) -> fmt::Result {
    write!(f, "- {label}: {} of {} attached", phase.attached, phase.issued)?;
    if phase.skipped > 0 {
        write!(f, ", {} empty row(s) skipped", phase.skipped)?;
    }
    writeln!(f)
}

impl fmt::Display for CreateResult<CreationReport> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = &self.resource;
        writeln!(
            f,
            "Created recipe '{}' with ID: {}",
            report.recipe.title, report.recipe.id
        )?;
        writeln!(f)?;
        write_phase(f, "Ingredients", &report.ingredients)?;
        write_phase(f, "Instructions", &report.instructions)?;

        if !report.is_complete() {
            writeln!(f)?;
            writeln!(f, "Some details could not be saved:")?;
            for failure in report.failures() {
                writeln!(f, "- {}: {}", failure.label, failure.message)?;
            }
        }
        Ok(())
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

/// A deleted recipe's title and identifier.
pub struct DeletedRecipe {
    pub id: RecipeId,
    pub title: String,
}

impl fmt::Display for DeleteResult<DeletedRecipe> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted recipe '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        gateway::CreatedRecipe,
        models::{Category, Difficulty},
        pipeline::AttachFailure,
        views::Route,
    };

    fn report() -> CreationReport {
        CreationReport {
            recipe: CreatedRecipe {
                id: RecipeId::from("9"),
                title: "Flatbread".to_string(),
                description: String::new(),
                category: Category::Lunch,
                difficulty: Difficulty::Easy,
            },
            ingredients: PhaseReport {
                issued: 2,
                attached: 1,
                skipped: 1,
                failures: vec![AttachFailure {
                    label: "Yeast".to_string(),
                    message: "Server error during add ingredient: boom".to_string(),
                }],
                latest: None,
            },
            instructions: PhaseReport {
                issued: 1,
                attached: 1,
                skipped: 0,
                failures: Vec::new(),
                latest: None,
            },
            next: Route::Collection,
        }
    }

    #[test]
    fn test_create_result_lists_failures() {
        let output = CreateResult::new(report()).to_string();
        assert!(output.starts_with("Created recipe 'Flatbread' with ID: 9\n"));
        assert!(output.contains("- Ingredients: 1 of 2 attached, 1 empty row(s) skipped"));
        assert!(output.contains("- Instructions: 1 of 1 attached\n"));
        assert!(output.contains("- Yeast: Server error"));
    }

    #[test]
    fn test_delete_result_display() {
        let output = DeleteResult::new(DeletedRecipe {
            id: RecipeId::from("3"),
            title: "Pasta".to_string(),
        })
        .to_string();
        assert_eq!(output, "Deleted recipe 'Pasta' (ID: 3)\n");
    }
}
