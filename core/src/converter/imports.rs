//! Decorator import injection.

use tree_sitter::Node;

use super::edits::EditSet;

const IMPORT: &str = r#"import { ApplyOptions } from "@sapphire/decorators";"#;

/// Adds the decorator import after the last existing top-level import,
/// or at the very top of the file when there is none. Only invoked once
/// a decorator was actually attached.
pub(super) fn apply(root: &Node, edits: &mut EditSet) {
    let last_import = (0..root.child_count())
        .filter_map(|i| root.child(i))
        .filter(|child| child.kind() == "import_statement")
        .next_back();

    match last_import {
        Some(import) => edits.insert(import.end_byte(), format!("\n{IMPORT}")),
        None => edits.insert_first(0, format!("{IMPORT}\n")),
    }
}
