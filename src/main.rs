//! Costwiz - command line entry point
//!
//! Loads the tree definition, drives the selection core and the wizard
//! step flow, and renders the result as plain text or JSON.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use costwiz::cli::{Cli, Commands};
use costwiz::{policy, render};
use costwiz::{Catalog, SelectionAction, SelectionTree, WizardSession, WizardStep};

/// Initialize tracing. Logs go to stderr so JSON output on stdout stays clean.
fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "costwiz=debug" } else { "costwiz=warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("Invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose)?;
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::Show {
            catalog,
            toggles,
            json,
            strict,
        }) => {
            let tree = load_tree(catalog.as_deref())?;
            run_show(tree, &toggles, json, strict)?;
        }
        Some(Commands::Steps {
            catalog,
            toggles,
            next,
        }) => {
            let tree = load_tree(catalog.as_deref())?;
            run_steps(tree, &toggles, next);
        }
        Some(Commands::Validate { path }) => {
            let catalog = Catalog::load_from_file(&path)
                .with_context(|| format!("Invalid tree definition {:?}", path))?;
            println!(
                "✓ Tree definition is valid: {} groups, {} items",
                catalog.groups.len(),
                catalog.item_count()
            );
        }
        Some(Commands::Init { path }) => {
            Catalog::builtin()
                .save_to_file(&path)
                .with_context(|| format!("Failed to write tree definition to {:?}", path))?;
            info!("Wrote built-in tree definition to {:?}", path);
            println!("✓ Wrote {}", path.display());
        }
        Some(Commands::Policy { actions }) => {
            if actions {
                for action in policy::granted_actions().context("Sample policy is not valid JSON")? {
                    println!("{action}");
                }
            } else {
                println!("{}", policy::SAMPLE_POLICY);
            }
        }
        None => {
            run_show(SelectionTree::builtin(), &[], false, false)?;
        }
    }

    Ok(())
}

/// Build the selection tree from a file, or the built-in actions
fn load_tree(path: Option<&Path>) -> Result<SelectionTree> {
    let Some(path) = path else {
        return Ok(SelectionTree::builtin());
    };

    let catalog = Catalog::load_from_file(path)
        .with_context(|| format!("Failed to load tree definition from {:?}", path))?;
    info!("Using tree definition {:?}", path);
    Ok(SelectionTree::new(catalog)?)
}

/// Apply toggles in order. Unknown references are skipped unless `strict`.
fn apply_toggles(tree: &mut SelectionTree, toggles: &[SelectionAction], strict: bool) -> Result<()> {
    for action in toggles {
        if strict {
            tree.try_apply(action)
                .with_context(|| format!("Toggle '{action}' failed"))?;
        } else if !tree.apply(action) {
            debug!("Toggle '{}' had no effect", action);
        }
    }
    Ok(())
}

fn run_show(
    mut tree: SelectionTree,
    toggles: &[SelectionAction],
    json: bool,
    strict: bool,
) -> Result<()> {
    apply_toggles(&mut tree, toggles, strict)?;

    if json {
        let snapshot = serde_json::to_string_pretty(&tree.snapshot())
            .context("Failed to serialize selection")?;
        println!("{snapshot}");
    } else {
        print!("{}", render::render_tree(&tree));
    }
    Ok(())
}

fn run_steps(mut tree: SelectionTree, toggles: &[SelectionAction], presses: usize) {
    for action in toggles {
        tree.apply(action);
    }

    let mut session = WizardSession::new(tree);
    println!("{}", render::render_step(&session));

    for _ in 0..presses {
        match session.advance() {
            Ok(_) => println!("{}", render::render_step(&session)),
            Err(e) => {
                println!("  Next disabled: {e}");
                break;
            }
        }
    }

    if session.step() == WizardStep::LinkAccount || session.step() == WizardStep::Fetch {
        let handoff = session.handoff();
        if handoff.is_empty() {
            println!("  Selected options: none");
        } else {
            println!("  Selected options: {}", handoff.items.join(", "));
        }
    }
}
