//! Creation pipeline states and transitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which child collection is being attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildPhase {
    Ingredients,
    Instructions,
    /// Both at once, under [`PhaseOrdering::Concurrent`]
    Both,
}

/// Lifecycle of one submission.
///
/// ```text
/// Idle -> SubmittingRecipe -> AttachingChildren(..) -> Done
///                       \-> Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineState {
    #[default]
    Idle,
    SubmittingRecipe,
    AttachingChildren(ChildPhase),
    /// Terminal. The recipe exists, possibly with only some children.
    Done,
    /// Terminal. The base recipe was not created.
    Failed,
}

impl PipelineState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Failed)
    }

    /// Whether moving from `self` to `next` follows the state machine.
    pub fn can_transition_to(&self, next: PipelineState) -> bool {
        use ChildPhase::*;
        use PipelineState::*;

        matches!(
            (self, next),
            (Idle, SubmittingRecipe)
                | (SubmittingRecipe, Failed)
                | (SubmittingRecipe, AttachingChildren(Ingredients | Both))
                | (AttachingChildren(Ingredients), AttachingChildren(Instructions))
                | (AttachingChildren(Instructions | Both), Done)
        )
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineState::Idle => write!(f, "idle"),
            PipelineState::SubmittingRecipe => write!(f, "submitting recipe"),
            PipelineState::AttachingChildren(ChildPhase::Ingredients) => {
                write!(f, "attaching ingredients")
            }
            PipelineState::AttachingChildren(ChildPhase::Instructions) => {
                write!(f, "attaching instructions")
            }
            PipelineState::AttachingChildren(ChildPhase::Both) => {
                write!(f, "attaching ingredients and instructions")
            }
            PipelineState::Done => write!(f, "done"),
            PipelineState::Failed => write!(f, "failed"),
        }
    }
}

/// Scheduling of the two attach phases.
///
/// Both orderings leave the server in the same final state; they differ only
/// in how many writes are in flight at once and in which order failures are
/// observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseOrdering {
    /// Ingredients fully resolve before any instruction is sent
    #[default]
    Sequential,
    /// Ingredients and instructions are sent together
    Concurrent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_path_is_valid() {
        let path = [
            PipelineState::Idle,
            PipelineState::SubmittingRecipe,
            PipelineState::AttachingChildren(ChildPhase::Ingredients),
            PipelineState::AttachingChildren(ChildPhase::Instructions),
            PipelineState::Done,
        ];
        assert!(path.windows(2).all(|w| w[0].can_transition_to(w[1])));
    }

    #[test]
    fn test_failed_is_only_reachable_from_submitting() {
        assert!(PipelineState::SubmittingRecipe.can_transition_to(PipelineState::Failed));
        assert!(!PipelineState::AttachingChildren(ChildPhase::Ingredients)
            .can_transition_to(PipelineState::Failed));
        assert!(!PipelineState::Idle.can_transition_to(PipelineState::Failed));
    }

    #[test]
    fn test_instructions_cannot_precede_ingredients() {
        assert!(!PipelineState::SubmittingRecipe
            .can_transition_to(PipelineState::AttachingChildren(ChildPhase::Instructions)));
        assert!(!PipelineState::AttachingChildren(ChildPhase::Ingredients)
            .can_transition_to(PipelineState::Done));
    }

    #[test]
    fn test_terminal_states() {
        assert!(PipelineState::Done.is_terminal());
        assert!(PipelineState::Failed.is_terminal());
        assert!(!PipelineState::SubmittingRecipe.is_terminal());
    }
}
