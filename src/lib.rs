//! Costwiz Library
//!
//! Selection core for the cost optimizer account setup wizard: a two-level
//! tree of cost-saving actions (groups) and their options (items) with
//! tri-state group selection, plus the wizard step flow that consumes it.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod policy;
pub mod render;
pub mod selection;
pub mod wizard;

// Re-export main types for convenience
pub use catalog::{Catalog, Group, Item};
pub use error::{CatalogError, CostWizError, NodeKind, SelectionError, WizardError};
pub use selection::{
    GroupStatus, SelectionAction, SelectionSnapshot, SelectionState, SelectionTree, ToggleOutcome,
};
pub use wizard::{WizardSession, WizardStep};
