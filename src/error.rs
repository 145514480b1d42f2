//! Error handling module for costwiz
//!
//! Provides centralized error types using thiserror. The selection core
//! only ever produces [`SelectionError`]; the other enums cover the tree
//! definition, the wizard step flow, and catalog file I/O.

use thiserror::Error;

/// What kind of node an unresolved reference pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum NodeKind {
    Group,
    Item,
}

/// Errors raised by the strict selection mutators.
///
/// The default mutators swallow these and report `false` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// An id that is not part of the tree, or an item named under a group
    /// that does not own it
    #[error("{kind} '{id}' not found")]
    ReferenceNotFound { kind: NodeKind, id: String },

    /// A textual toggle command that could not be parsed
    #[error("Invalid toggle '{0}' (expected group:<id> or item:<id>@<group>)")]
    InvalidAction(String),
}

impl SelectionError {
    /// Create a not-found error for a group id
    pub fn group_not_found(id: impl Into<String>) -> Self {
        Self::ReferenceNotFound {
            kind: NodeKind::Group,
            id: id.into(),
        }
    }

    /// Create a not-found error for an item id
    pub fn item_not_found(id: impl Into<String>) -> Self {
        Self::ReferenceNotFound {
            kind: NodeKind::Item,
            id: id.into(),
        }
    }
}

/// Structural problems in a tree definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Group at position {0} has an empty id")]
    EmptyGroupId(usize),

    #[error("Item at position {position} of group '{group}' has an empty id")]
    EmptyItemId { group: String, position: usize },

    #[error("Duplicate group id '{0}'")]
    DuplicateGroup(String),

    #[error("Duplicate item id '{0}'")]
    DuplicateItem(String),

    #[error("Item '{item}' declares parent '{declared}' but is listed under '{group}'")]
    ParentMismatch {
        item: String,
        declared: String,
        group: String,
    },
}

/// Wizard navigation refusals.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// "Next" is disabled on the selection step until an option is picked
    #[error("Select at least one option before continuing")]
    NothingSelected,

    #[error("Already at the last step")]
    AtLastStep,
}

/// Main error type for costwiz
#[derive(Error, Debug)]
pub enum CostWizError {
    /// IO errors (catalog files, stdout)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tree definition rejected by validation
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Result type alias for costwiz operations
pub type Result<T> = std::result::Result<T, CostWizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SelectionError::item_not_found("nonexistent");
        assert_eq!(err.to_string(), "item 'nonexistent' not found");

        let err = SelectionError::group_not_found("ghost");
        assert_eq!(err.to_string(), "group 'ghost' not found");

        let err = WizardError::NothingSelected;
        assert_eq!(
            err.to_string(),
            "Select at least one option before continuing"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: CostWizError = CatalogError::DuplicateGroup("x".into()).into();
        assert!(matches!(err, CostWizError::Catalog(_)));

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CostWizError = io_err.into();
        assert!(matches!(err, CostWizError::Io(_)));
    }

    #[test]
    fn test_parent_mismatch_message() {
        let err = CatalogError::ParentMismatch {
            item: "ec2".into(),
            declared: "resource-cleanup".into(),
            group: "start-stop-resources".into(),
        };
        assert!(err.to_string().contains("declares parent 'resource-cleanup'"));
    }
}
