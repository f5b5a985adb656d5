//! Class rename, constructor elision, and decorator synthesis.

use std::sync::OnceLock;

use regex::Regex;
use tree_sitter::Node;

use super::edits::EditSet;
use crate::syntax;

/// Every command class ends up with this name, collisions included.
const CLASS_NAME: &str = "UserCommand";

/// First quoted string following `description:`. Matched against the
/// constructor's raw text (tabs stripped) rather than its literal
/// nodes, to keep the exact `\s*` / first-match semantics.
fn description_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"description:\s*['"](.+?)['"]"#).expect("description pattern is valid")
    })
}

/// Renames every top-level class, removes its first constructor, and
/// queues an `@ApplyOptions` decorator when the constructor carried a
/// recognizable `description`. Returns whether any decorator was added.
pub(super) fn apply(root: &Node, source: &str, edits: &mut EditSet) -> bool {
    let mut decorated = false;

    for (statement, class) in top_level_classes(root) {
        if let Some(name) = class.child_by_field_name("name") {
            edits.replace(name.start_byte(), name.end_byte(), CLASS_NAME);
            rename_references(root, source, syntax::node_text(&name, source), name.start_byte(), edits);
        }

        let Some(body) = class.child_by_field_name("body") else {
            continue;
        };
        let Some(ctor) = first_constructor(&body, source) else {
            continue;
        };

        if let Some(description) = extract_description(&ctor, source) {
            queue_decorator(&statement, source, &description, edits);
            decorated = true;
        }
        // Removed whether or not a description matched; an unmatched
        // constructor's data is silently lost.
        remove_with_line(&ctor, source, edits);
    }

    decorated
}

/// Node kinds through which a class name can be referenced: plain
/// identifiers, type positions, and object/destructuring shorthand
/// (`module.exports = { PingCommand }`).
const REFERENCE_KINDS: &[&str] = &[
    "identifier",
    "type_identifier",
    "shorthand_property_identifier",
    "shorthand_property_identifier_pattern",
];

/// Rewrites every reference to a renamed class so they follow the
/// declaration, the way a rename refactor would. Matching is by text;
/// the declaration's own name node is excluded since it is already
/// replaced.
fn rename_references(
    root: &Node,
    source: &str,
    old_name: &str,
    declaration_at: usize,
    edits: &mut EditSet,
) {
    for node in syntax::descendants_of_kinds(root, REFERENCE_KINDS) {
        if node.start_byte() == declaration_at {
            continue;
        }
        if syntax::node_text(&node, source) == old_name {
            edits.replace(node.start_byte(), node.end_byte(), CLASS_NAME);
        }
    }
}

/// Top-level class declarations, paired with the statement carrying
/// them (the `export` statement when present) so the decorator lands
/// above the `export` keyword. Anonymous `export default class` bodies
/// parse as a `class` expression under the export's value; they get the
/// constructor and method treatment, just nothing to rename.
pub(super) fn top_level_classes<'tree>(root: &Node<'tree>) -> Vec<(Node<'tree>, Node<'tree>)> {
    let mut classes = Vec::new();
    for i in 0..root.child_count() {
        let Some(statement) = root.child(i) else {
            continue;
        };
        let decl = syntax::exported_declaration(&statement);
        if decl.kind() == "class_declaration" || decl.kind() == "class" {
            classes.push((statement, decl));
        }
    }
    classes
}

fn first_constructor<'tree>(body: &Node<'tree>, source: &str) -> Option<Node<'tree>> {
    syntax::children_of_kind(body, "method_definition")
        .into_iter()
        .find(|method| {
            method
                .child_by_field_name("name")
                .is_some_and(|name| syntax::node_text(&name, source) == "constructor")
        })
}

fn extract_description(ctor: &Node, source: &str) -> Option<String> {
    let text = syntax::node_text(ctor, source).replace('\t', "");
    description_pattern()
        .captures(&text)
        .map(|caps| caps[1].to_string())
}

fn queue_decorator(statement: &Node, source: &str, description: &str, edits: &mut EditSet) {
    let indent = line_indent(source, statement.start_byte());
    edits.insert(
        statement.start_byte(),
        format!("@ApplyOptions<Command.Options>({{ description: \"{description}\" }})\n{indent}"),
    );
}

/// Deletes a class member together with its leading indentation and
/// trailing newline.
fn remove_with_line(node: &Node, source: &str, edits: &mut EditSet) {
    let bytes = source.as_bytes();

    let mut start = node.start_byte();
    while start > 0 && matches!(bytes[start - 1], b' ' | b'\t') {
        start -= 1;
    }

    let mut end = node.end_byte();
    if bytes.get(end) == Some(&b'\r') {
        end += 1;
    }
    if bytes.get(end) == Some(&b'\n') {
        end += 1;
    }

    edits.delete(start, end);
}

fn line_indent(source: &str, at: usize) -> String {
    let line_start = source[..at].rfind('\n').map_or(0, |i| i + 1);
    source[line_start..at].to_string()
}
