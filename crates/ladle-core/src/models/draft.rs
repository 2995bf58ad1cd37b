//! Client-side draft of a recipe under construction.
//!
//! A draft mirrors the creation form: scalar numeric fields are held as the
//! text the user entered and only coerced when the draft is submitted, and
//! the ingredient and instruction row lists are never empty.

use super::{Category, Difficulty};
use crate::{
    error::{LadleError, Result},
    params::{IngredientInput, InstructionInput, RecipeInput},
};

/// One ingredient row of a draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftIngredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

impl DraftIngredient {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }

    /// Rows with a blank name or a non-positive amount are placeholders and
    /// are skipped at submission.
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && self.amount.is_finite() && self.amount > 0.0
    }

    fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.amount == 0.0 && self.unit.trim().is_empty()
    }
}

/// One instruction row of a draft. The step number is owned by the draft.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftInstruction {
    step_number: u32,
    pub description: String,
}

impl DraftInstruction {
    pub fn step_number(&self) -> u32 {
        self.step_number
    }

    pub fn is_submittable(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

/// A recipe that exists only in client memory.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftRecipe {
    pub title: String,
    pub description: String,
    /// Minutes, as entered
    pub prep_time: String,
    /// Minutes, as entered
    pub cook_time: String,
    pub servings: String,
    /// Unset until the user picks one
    pub category: Option<Category>,
    pub difficulty: Difficulty,
    ingredients: Vec<DraftIngredient>,
    instructions: Vec<DraftInstruction>,
}

impl Default for DraftRecipe {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftRecipe {
    /// An empty form with one blank ingredient row and one blank step.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            prep_time: "0".to_string(),
            cook_time: "0".to_string(),
            servings: "1".to_string(),
            category: None,
            difficulty: Difficulty::default(),
            ingredients: vec![DraftIngredient::default()],
            instructions: vec![DraftInstruction {
                step_number: 1,
                description: String::new(),
            }],
        }
    }

    pub fn ingredients(&self) -> &[DraftIngredient] {
        &self.ingredients
    }

    pub fn instructions(&self) -> &[DraftInstruction] {
        &self.instructions
    }

    /// Appends a blank ingredient row and returns it for editing.
    pub fn add_ingredient(&mut self) -> &mut DraftIngredient {
        self.ingredients.push(DraftIngredient::default());
        let last = self.ingredients.len() - 1;
        &mut self.ingredients[last]
    }

    /// Fills the trailing blank row, or appends when the last row is in use.
    pub fn with_ingredient(mut self, ingredient: DraftIngredient) -> Self {
        match self.ingredients.last_mut() {
            Some(last) if last.is_blank() => *last = ingredient,
            _ => self.ingredients.push(ingredient),
        }
        self
    }

    /// Removes an ingredient row. The last remaining row cannot be removed.
    pub fn remove_ingredient(&mut self, index: usize) {
        if self.ingredients.len() > 1 && index < self.ingredients.len() {
            self.ingredients.remove(index);
        }
    }

    /// Appends a blank step numbered after the current last one.
    pub fn add_instruction(&mut self) -> &mut DraftInstruction {
        let step_number = self.instructions.len() as u32 + 1;
        self.instructions.push(DraftInstruction {
            step_number,
            description: String::new(),
        });
        let last = self.instructions.len() - 1;
        &mut self.instructions[last]
    }

    /// Replaces the text of step `index` (0-based).
    pub fn set_instruction(&mut self, index: usize, description: impl Into<String>) {
        if let Some(instruction) = self.instructions.get_mut(index) {
            instruction.step_number = index as u32 + 1;
            instruction.description = description.into();
        }
    }

    /// Fills the trailing blank step, or appends a new one.
    ///
    /// A blank description only ever fills the trailing row, so use
    /// [`add_instruction`](Self::add_instruction) and
    /// [`set_instruction`](Self::set_instruction) when blank steps must keep
    /// their position.
    pub fn with_instruction(mut self, description: impl Into<String>) -> Self {
        match self.instructions.last_mut() {
            Some(last) if !last.is_submittable() => last.description = description.into(),
            _ => self.add_instruction().description = description.into(),
        }
        self
    }

    /// Removes step `index` and renumbers the rest to stay contiguous from 1.
    /// The last remaining step cannot be removed.
    pub fn remove_instruction(&mut self, index: usize) {
        if self.instructions.len() <= 1 || index >= self.instructions.len() {
            return;
        }
        self.instructions.remove(index);
        for (position, instruction) in self.instructions.iter_mut().enumerate() {
            instruction.step_number = position as u32 + 1;
        }
    }

    /// Validates the scalar fields and coerces them to their wire types.
    pub fn to_input(&self) -> Result<RecipeInput> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(LadleError::invalid_input("title").with_reason("must not be empty"));
        }
        let category = self.category.ok_or_else(|| {
            LadleError::invalid_input("category").with_reason("a category must be selected")
        })?;
        let servings = parse_minutes("servings", &self.servings)?;
        if servings == 0 {
            return Err(LadleError::invalid_input("servings").with_reason("must be at least 1"));
        }

        Ok(RecipeInput {
            title: title.to_string(),
            description: self.description.clone(),
            prep_time: parse_minutes("prep_time", &self.prep_time)?,
            cook_time: parse_minutes("cook_time", &self.cook_time)?,
            servings,
            category,
            difficulty: self.difficulty,
        })
    }

    /// Ingredient rows that will be attached, in row order.
    pub fn ingredient_inputs(&self) -> Vec<IngredientInput> {
        self.ingredients
            .iter()
            .filter(|row| row.is_submittable())
            .map(|row| IngredientInput {
                name: row.name.trim().to_string(),
                amount: row.amount,
                unit: row.unit.trim().to_string(),
            })
            .collect()
    }

    /// Instruction rows that will be attached, carrying their current step
    /// numbers.
    pub fn instruction_inputs(&self) -> Vec<InstructionInput> {
        self.instructions
            .iter()
            .filter(|row| row.is_submittable())
            .map(|row| InstructionInput {
                step_number: row.step_number,
                description: row.description.trim().to_string(),
            })
            .collect()
    }
}

fn parse_minutes(field: &str, raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse::<u32>().map_err(|_| {
        LadleError::invalid_input(field).with_reason(format!(
            "expected a non-negative whole number, got '{trimmed}'"
        ))
    })
}
