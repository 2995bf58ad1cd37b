//! Status messages for operation feedback.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Nothing went wrong and nothing changed
    Notice,
    Failure,
}

/// A one-line notice or failure message.
pub struct OperationStatus {
    pub message: String,
    pub kind: StatusKind,
}

impl OperationStatus {
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Notice,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Failure,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            StatusKind::Notice => writeln!(f, "{}", self.message),
            StatusKind::Failure => writeln!(f, "Error: {}", self.message),
        }
    }
}
