//! Tree traversal utilities for the post-extraction passes.

use crate::model::{DocNode, Role};

use super::Node;

/// Rebuild a top-level sequence, applying `visitor` to every wrapping scope.
///
/// A scope is the child list of a table cell or the top-level sequence
/// itself. Scopes are visited bottom-up, so a cell nested in another cell is
/// handled before its ancestor, and the top level comes last.
pub fn map_scopes<F>(nodes: Vec<DocNode>, visitor: &F) -> Vec<DocNode>
where
    F: Fn(Vec<DocNode>) -> Vec<DocNode>,
{
    let nodes = nodes
        .into_iter()
        .map(|node| map_cells(node, visitor))
        .collect();
    visitor(nodes)
}

fn map_cells<F>(node: DocNode, visitor: &F) -> DocNode
where
    F: Fn(Vec<DocNode>) -> Vec<DocNode>,
{
    let Node {
        data,
        state,
        children,
    } = node;

    // 1. Rebuild children first (bottom-up)
    let children: Vec<DocNode> = children
        .into_iter()
        .map(|child| map_cells(child, visitor))
        .collect();

    // 2. Then the cell's own scope
    let children = if data.role == Role::TableCell {
        visitor(children)
    } else {
        children
    };

    Node {
        data,
        state,
        children,
    }
}
