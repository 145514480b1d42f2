//! Tests for the wizard step flow
//!
//! These tests verify:
//! - "Next" gating on the selection step
//! - Back/Next navigation across all steps
//! - Tab jumps
//! - The selection handoff to the link-account step

use costwiz::{SelectionTree, WizardError, WizardSession, WizardStep};
use strum::IntoEnumIterator;

fn session_with_ec2() -> WizardSession {
    let mut session = WizardSession::new(SelectionTree::builtin());
    session.tree_mut().toggle_item("ec2", "start-stop-resources");
    session
}

// =============================================================================
// WizardStep Tests
// =============================================================================

#[test]
fn test_step_numbers_are_sequential() {
    for (index, step) in WizardStep::iter().enumerate() {
        assert_eq!(step.step_number(), index + 1);
    }
}

#[test]
fn test_step_bounds() {
    assert_eq!(WizardStep::Start.previous(), None);
    assert_eq!(WizardStep::Fetch.next(), None);
}

#[test]
fn test_step_titles_non_empty() {
    for step in WizardStep::iter() {
        assert!(!step.title().is_empty());
        assert!(!step.description().is_empty());
    }
}

#[test]
fn test_step_parse_roundtrip() {
    for step in WizardStep::iter() {
        assert_eq!(step.to_string().parse::<WizardStep>(), Ok(step));
    }
}

// =============================================================================
// Gating Tests
// =============================================================================

#[test]
fn test_next_enabled_after_selection() {
    let mut session = session_with_ec2();
    assert!(session.can_advance());
    assert_eq!(session.advance(), Ok(WizardStep::LinkAccount));
}

#[test]
fn test_next_disabled_again_after_clearing_selection() {
    let mut session = session_with_ec2();
    session.tree_mut().toggle_item("ec2", "start-stop-resources");
    assert!(!session.can_advance());
    assert_eq!(session.advance(), Err(WizardError::NothingSelected));
}

#[test]
fn test_next_disabled_on_last_step() {
    let mut session = session_with_ec2();
    session.advance().unwrap();
    session.advance().unwrap();
    assert_eq!(session.step(), WizardStep::Fetch);
    assert!(!session.can_advance());
    assert_eq!(session.advance(), Err(WizardError::AtLastStep));
}

#[test]
fn test_later_steps_do_not_need_selection() {
    let mut session = WizardSession::new(SelectionTree::builtin());
    session.jump_to(WizardStep::LinkAccount);
    assert!(session.can_advance());
    assert_eq!(session.advance(), Ok(WizardStep::Fetch));
}

// =============================================================================
// Navigation Tests
// =============================================================================

#[test]
fn test_back_walks_to_start() {
    let mut session = session_with_ec2();
    session.jump_to(WizardStep::Fetch);

    assert_eq!(session.go_back(), Some(WizardStep::LinkAccount));
    assert_eq!(session.go_back(), Some(WizardStep::SelectActions));
    assert_eq!(session.go_back(), Some(WizardStep::Start));
    assert_eq!(session.go_back(), None);
    assert_eq!(session.step(), WizardStep::Start);
}

#[test]
fn test_navigation_keeps_selection() {
    let mut session = session_with_ec2();
    session.advance().unwrap();
    session.go_back();

    assert_eq!(session.step(), WizardStep::SelectActions);
    assert_eq!(session.tree().selected_items(), ["ec2"]);
}

#[test]
fn test_handoff_carries_selection() {
    let mut session = session_with_ec2();
    session.tree_mut().toggle_group("pause-resume-resource");
    session.advance().unwrap();

    let handoff = session.handoff();
    assert_eq!(handoff.items, ["ec2", "redshift-clusters", "aurora-serverless-v2"]);
    assert_eq!(handoff.groups, ["pause-resume-resource"]);
    assert!(!handoff.is_empty());
}
