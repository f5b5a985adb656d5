//! Method-signature normalization on the renamed command classes.

use tree_sitter::Node;

use super::classes;
use super::edits::EditSet;
use super::functions::LIFECYCLE_NAMES;
use crate::syntax;

/// Parameter names with a known nominal type in the framework.
const PARAM_TYPES: [(&str, &str); 2] = [
    ("registry", "Command.Registry"),
    ("interaction", "Command.ChatInputCommandInteraction"),
];

/// Marks the lifecycle methods `public override` and pins the types of
/// their well-known parameters; other parameter names stay untyped.
pub(super) fn apply(root: &Node, source: &str, edits: &mut EditSet) {
    for (_, class) in classes::top_level_classes(root) {
        let Some(body) = class.child_by_field_name("body") else {
            continue;
        };
        for method in syntax::children_of_kind(&body, "method_definition") {
            let Some(name) = method.child_by_field_name("name") else {
                continue;
            };
            if !LIFECYCLE_NAMES.contains(&syntax::node_text(&name, source)) {
                continue;
            }

            // Lands before an `async` keyword when there is one.
            edits.insert(method.start_byte(), "public override ");
            type_parameters(&method, source, edits);
        }
    }
}

fn type_parameters(method: &Node, source: &str, edits: &mut EditSet) {
    let Some(params) = method.child_by_field_name("parameters") else {
        return;
    };
    for param in syntax::children_of_kind(&params, "required_parameter") {
        let Some(pattern) = param.child_by_field_name("pattern") else {
            continue;
        };
        if pattern.kind() != "identifier" {
            continue;
        }
        let name = syntax::node_text(&pattern, source);
        let Some((_, nominal)) = PARAM_TYPES.iter().find(|(known, _)| *known == name) else {
            continue;
        };

        if let Some(existing) = param.child_by_field_name("type") {
            edits.replace(
                existing.start_byte(),
                existing.end_byte(),
                format!(": {nominal}"),
            );
        } else {
            edits.insert(pattern.end_byte(), format!(": {nominal}"));
        }
    }
}
