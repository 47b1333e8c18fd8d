//! Human-readable tree dumps, for debugging masks.

use super::ast::*;

impl Mask {
    /// Render the tree, one node per line, indented two spaces per level.
    ///
    /// ```text
    /// Root "#[-#]"
    ///   Digit "#"
    ///   Optional "[-#]"
    ///     Group "-#"
    ///       Literal "-"
    ///       Digit "#"
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        line(&mut out, 0, "Root", &self.source);
        for node in &self.nodes {
            dump_node(&mut out, 1, node);
        }
        out
    }
}

fn dump_node(out: &mut String, depth: usize, node: &Node) {
    match &node.kind {
        NodeKind::Repeat { count, child } => {
            line(out, depth, &format!("Repeat({count})"), &node.source);
            dump_node(out, depth + 1, child);
        }
        NodeKind::Optional(groups) | NodeKind::Grouping(groups) => {
            line(out, depth, node.kind.name(), &node.source);
            for group in groups {
                line(out, depth + 1, "Group", &group.source);
                for child in &group.nodes {
                    dump_node(out, depth + 2, child);
                }
            }
        }
        kind => line(out, depth, kind.name(), &node.source),
    }
}

fn line(out: &mut String, depth: usize, name: &str, source: &str) {
    out.push_str(&format!("{:indent$}{name} {source:?}\n", "", indent = depth * 2));
}
