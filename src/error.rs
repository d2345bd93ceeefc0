use std::fmt;

use thiserror::Error;

use crate::identity::IdentityKey;

/// Render-data operation that was attempted on a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Record,
    Apply,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Record => f.write_str("record"),
            Operation::Apply => f.write_str("apply"),
        }
    }
}

/// Protocol violations raised while computing transitions.
///
/// Both kinds point at a defect (in the caller's node filtering, or in a
/// component that breaks its declared capability), never at bad runtime data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error(
        "trying to {operation} previous render data to component `{component}` ({key}) that doesn't support it"
    )]
    UnsupportedCapability {
        operation: Operation,
        component: String,
        key: IdentityKey,
    },
    #[error("component `{component}` ({key}) supports render data but recorded none")]
    MissingRenderData { component: String, key: IdentityKey },
}

impl TransitionError {
    /// Identity of the creator that raised the error.
    pub fn key(&self) -> &IdentityKey {
        match self {
            TransitionError::UnsupportedCapability { key, .. }
            | TransitionError::MissingRenderData { key, .. } => key,
        }
    }
}

pub type Result<T> = std::result::Result<T, TransitionError>;
