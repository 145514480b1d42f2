use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::selection::SelectionAction;

/// Costwiz - cost optimizer account setup, selection step
#[derive(Parser)]
#[command(name = "costwiz")]
#[command(about = "Pick cost-saving actions and options for the account setup wizard")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply toggles to a fresh selection and print the result
    Show {
        /// Tree definition file (JSON). Uses the built-in actions when omitted.
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Toggle to apply, in order: group:<id> or item:<id>@<group>
        #[arg(short, long = "toggle", value_name = "ACTION")]
        toggles: Vec<SelectionAction>,

        /// Print the selection snapshot as JSON instead of the tree
        #[arg(long)]
        json: bool,

        /// Fail on toggles that name unknown groups or items
        #[arg(long)]
        strict: bool,
    },
    /// Walk the wizard steps with the given selection
    Steps {
        /// Tree definition file (JSON). Uses the built-in actions when omitted.
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Toggle to apply before walking: group:<id> or item:<id>@<group>
        #[arg(short, long = "toggle", value_name = "ACTION")]
        toggles: Vec<SelectionAction>,

        /// Number of times to press "Next"
        #[arg(short, long, default_value_t = 2)]
        next: usize,
    },
    /// Validate a tree definition file
    Validate {
        /// Path to the tree definition file
        path: PathBuf,
    },
    /// Write the built-in tree definition to a file as a starting template
    Init {
        /// Destination path
        path: PathBuf,
    },
    /// Print the sample IAM policy
    Policy {
        /// Only list the granted actions
        #[arg(long)]
        actions: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
