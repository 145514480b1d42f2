//! Plain-text rendering of the selection tree and wizard steps.

use crate::selection::SelectionTree;
use crate::wizard::{WizardSession, WizardStep};

/// Render the tree with check-box markers under the "N options selected" badge.
///
/// ```text
/// 1 options selected
/// [-] Start/Stop Resources (start-stop-resources)
///     [x] EC2 (ec2)
///     [ ] RDS (rds)
/// ```
pub fn render_tree(tree: &SelectionTree) -> String {
    let mut out = format!("{} options selected\n", tree.selection_count());

    for group in &tree.catalog().groups {
        let status = tree.group_status(&group.id).unwrap_or_default();
        out.push_str(&format!("{} {} ({})\n", status.marker(), group.name, group.id));

        for item in &group.items {
            let marker = if tree.is_item_selected(&item.id) { "[x]" } else { "[ ]" };
            out.push_str(&format!("    {} {} ({})\n", marker, item.name, item.id));
        }
    }
    out
}

/// One-line header for the session's current step.
pub fn render_step(session: &WizardSession) -> String {
    let step = session.step();
    format!(
        "Step {}/{}: {} - {}",
        step.step_number(),
        WizardStep::TOTAL_STEPS,
        step.title(),
        step.description()
    )
}
