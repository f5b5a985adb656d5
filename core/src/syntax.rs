//! Thin layer over the tree-sitter TypeScript grammar.
//!
//! The TypeScript grammar is a strict superset of JavaScript, so plain
//! `.js` command files parse with it unchanged. The rewrite rules only
//! ever read the tree; all mutation happens as byte-span edits against
//! the original source text.

use sapconv_common::error::ConvertError;
use tree_sitter::{Node, Parser, Tree};

/// Parses source text with the TypeScript grammar.
///
/// tree-sitter is error-tolerant: malformed input yields a tree with
/// ERROR nodes rather than a failure, which is exactly what the rules
/// want — they simply find nothing to match on.
pub fn parse(source: &str) -> Result<Tree, ConvertError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_typescript::language_typescript())
        .map_err(|e| ConvertError::Grammar(e.to_string()))?;
    parser.parse(source, None).ok_or(ConvertError::Parse)
}

/// Source text covered by a node.
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// Direct children of the given kind.
pub fn children_of_kind<'tree>(node: &Node<'tree>, kind: &str) -> Vec<Node<'tree>> {
    let mut result = Vec::new();
    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            if child.kind() == kind {
                result.push(child);
            }
        }
    }
    result
}

/// All descendants whose kind is one of `kinds`, depth-first.
pub fn descendants_of_kinds<'tree>(node: &Node<'tree>, kinds: &[&str]) -> Vec<Node<'tree>> {
    let mut result = Vec::new();
    let mut stack = vec![*node];
    while let Some(current) = stack.pop() {
        if kinds.contains(&current.kind()) {
            result.push(current);
        }
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                stack.push(child);
            }
        }
    }
    result
}

/// Unwraps `export …` / `export default …` down to the declaration it
/// carries; any other node is returned as-is.
pub fn exported_declaration<'tree>(node: &Node<'tree>) -> Node<'tree> {
    if node.kind() == "export_statement" {
        if let Some(decl) = node.child_by_field_name("declaration") {
            return decl;
        }
        if let Some(value) = node.child_by_field_name("value") {
            return value;
        }
    }
    *node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_javascript() {
        let tree = parse("class Foo extends Command {}\n").unwrap();
        let root = tree.root_node();
        assert_eq!(root.kind(), "program");
        assert_eq!(children_of_kind(&root, "class_declaration").len(), 1);
    }

    #[test]
    fn unwraps_exported_class() {
        let tree = parse("export class Foo extends Command {}\n").unwrap();
        let root = tree.root_node();
        let statement = root.child(0).unwrap();
        assert_eq!(statement.kind(), "export_statement");
        let decl = exported_declaration(&statement);
        assert_eq!(decl.kind(), "class_declaration");
    }
}
