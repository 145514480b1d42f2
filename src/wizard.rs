//! Account setup wizard step flow.
//!
//! The wizard is the collaborator around the selection core. It owns a
//! [`SelectionTree`] for the session, moves between steps, and decides
//! when "Next" is enabled. It only reads the selection; every change goes
//! through the tree's toggles.
//!
//! # Step Sequence
//!
//! ```text
//! Start -> SelectActions -> LinkAccount -> Fetch
//! ```
//!
//! # Gating
//!
//! - "Next" is disabled on `SelectActions` while no option is selected
//! - "Next" is disabled on `Fetch` (last step)
//! - "Back" is disabled on `Start`
//!
//! Clicking a tab jumps directly to that step without gating.

use strum::{Display, EnumIter, EnumString};

use crate::error::WizardError;
use crate::selection::{SelectionSnapshot, SelectionTree};

/// Wizard steps, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
pub enum WizardStep {
    /// Account information and introduction.
    #[strum(serialize = "start")]
    Start,
    /// Cost-saving action selection (the tri-state tree).
    #[default]
    #[strum(serialize = "select-actions")]
    SelectActions,
    /// Link the cloud account; consumes the selection snapshot.
    #[strum(serialize = "link-aws-api")]
    LinkAccount,
    /// Fetch and analyze resources.
    #[strum(serialize = "fetch")]
    Fetch,
}

impl WizardStep {
    /// Get the next step in the sequence.
    ///
    /// Returns `None` at the final step.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Start => Some(Self::SelectActions),
            Self::SelectActions => Some(Self::LinkAccount),
            Self::LinkAccount => Some(Self::Fetch),
            Self::Fetch => None,
        }
    }

    /// Get the previous step in the sequence.
    ///
    /// Returns `None` at the first step.
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Start => None,
            Self::SelectActions => Some(Self::Start),
            Self::LinkAccount => Some(Self::SelectActions),
            Self::Fetch => Some(Self::LinkAccount),
        }
    }

    /// Get the tab label for this step.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::SelectActions => "Select Actions",
            Self::LinkAccount => "Link AWS A/c",
            Self::Fetch => "Fetch",
        }
    }

    /// Get the body text shown for this step.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Start => {
                "This wizard will guide you through setting up cost optimization for your AWS account."
            }
            Self::SelectActions => "Choose the cost-saving actions to enable.",
            Self::LinkAccount => {
                "Connect your AWS account to enable the selected cost-saving actions."
            }
            Self::Fetch => {
                "Fetch and analyze your AWS resources to identify cost-saving opportunities."
            }
        }
    }

    /// Get the step number (1-indexed for display).
    pub fn step_number(&self) -> usize {
        match self {
            Self::Start => 1,
            Self::SelectActions => 2,
            Self::LinkAccount => 3,
            Self::Fetch => 4,
        }
    }

    /// Total number of steps.
    pub const TOTAL_STEPS: usize = 4;
}

/// One wizard session: current step plus the selection made in it.
#[derive(Debug, Clone)]
pub struct WizardSession {
    step: WizardStep,
    tree: SelectionTree,
}

impl WizardSession {
    /// Start a session on the selection step with nothing selected.
    pub fn new(tree: SelectionTree) -> Self {
        Self {
            step: WizardStep::default(),
            tree,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn tree(&self) -> &SelectionTree {
        &self.tree
    }

    /// Mutable access for the selection step's toggles.
    pub fn tree_mut(&mut self) -> &mut SelectionTree {
        &mut self.tree
    }

    /// Whether "Next" is enabled.
    pub fn can_advance(&self) -> bool {
        self.check_advance().is_ok()
    }

    /// Whether "Back" is enabled.
    pub fn can_go_back(&self) -> bool {
        self.step.previous().is_some()
    }

    /// Move to the next step.
    ///
    /// # Errors
    ///
    /// - `NothingSelected` on the selection step with an empty selection
    /// - `AtLastStep` on the final step
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        let next = self.check_advance()?;
        tracing::info!(
            "Wizard step {} -> {} ({} options selected)",
            self.step,
            next,
            self.tree.selection_count()
        );
        self.step = next;
        Ok(next)
    }

    /// Move to the previous step, if there is one.
    pub fn go_back(&mut self) -> Option<WizardStep> {
        let previous = self.step.previous()?;
        tracing::info!("Wizard step {} -> {}", self.step, previous);
        self.step = previous;
        Some(previous)
    }

    /// Switch steps directly, as a tab click does.
    pub fn jump_to(&mut self, step: WizardStep) {
        tracing::debug!("Wizard tab switch {} -> {}", self.step, step);
        self.step = step;
    }

    /// Selection handed to the link-account step.
    pub fn handoff(&self) -> SelectionSnapshot {
        self.tree.snapshot()
    }

    fn check_advance(&self) -> Result<WizardStep, WizardError> {
        let next = self.step.next().ok_or(WizardError::AtLastStep)?;
        if self.step == WizardStep::SelectActions && self.tree.selection_count() == 0 {
            return Err(WizardError::NothingSelected);
        }
        Ok(next)
    }
}
