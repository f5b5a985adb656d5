//! Return-type annotations for the framework's lifecycle functions.

use tree_sitter::Node;

use super::edits::EditSet;
use crate::syntax;

/// The Sapphire command lifecycle hooks this tool recognizes.
pub(super) const LIFECYCLE_NAMES: [&str; 2] = ["registerApplicationCommands", "chatInputRun"];

const RETURN_TYPE: &str = ": Promise<void>";

/// Forces `Promise<void>` on top-level functions named after the
/// lifecycle hooks. Functions with any other name are left alone.
pub(super) fn apply(root: &Node, source: &str, edits: &mut EditSet) {
    for i in 0..root.child_count() {
        let Some(statement) = root.child(i) else {
            continue;
        };
        let func = syntax::exported_declaration(&statement);
        if func.kind() != "function_declaration" {
            continue;
        }
        let Some(name) = func.child_by_field_name("name") else {
            continue;
        };
        if !LIFECYCLE_NAMES.contains(&syntax::node_text(&name, source)) {
            continue;
        }

        if let Some(existing) = func.child_by_field_name("return_type") {
            edits.replace(existing.start_byte(), existing.end_byte(), RETURN_TYPE);
        } else if let Some(params) = func.child_by_field_name("parameters") {
            edits.insert(params.end_byte(), RETURN_TYPE);
        }
    }
}
