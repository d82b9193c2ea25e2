// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Thicket demos.

use std::fmt::Write as _;

use thicket_query_tree::{Node, Query};

/// Renders a query as an indented text outline, one node per line.
///
/// Ghost nodes are marked so the drag demos can show the preview moving
/// around the tree.
pub fn render(query: &Query) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", query.title());
    if query.is_empty() {
        out.push_str("  (no entities yet)\n");
        return out;
    }
    for node in query.roots() {
        render_node(&mut out, node, 1);
    }
    out
}

fn render_node(out: &mut String, node: &Node, depth: usize) {
    let kind = if node.is_group() { "GROUP" } else { "CONDITION" };
    let ghost = if node.id().is_preview() { "  [preview]" } else { "" };
    let _ = writeln!(
        out,
        "{:indent$}{} - {}  {}{}",
        "",
        kind,
        node.id(),
        node.display_label(),
        ghost,
        indent = depth * 2
    );
    for child in node.children() {
        render_node(out, child, depth + 1);
    }
}
