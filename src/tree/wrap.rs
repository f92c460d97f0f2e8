//! Wrap inline runs in anonymous blocks.

use log::trace;

use crate::error::{Error, Result};
use crate::model::DocNode;

use super::pass::map_scopes;
use super::ranges::{find_runs, replace_runs};

/// Wrap every run of consecutive inline nodes in a synthetic block.
///
/// Applies to the top-level sequence and, independently, to the children of
/// every table cell: both only accept block-level content.
///
/// Before: [Inline "a", Inline "b", Paragraph, Inline "c"]
/// After:  [#block > [Inline "a", Inline "b"], Paragraph, #block > [Inline "c"]]
pub fn wrap_top_level(nodes: Vec<DocNode>) -> Vec<DocNode> {
    map_scopes(nodes, &wrap_inline_runs)
}

/// Wrap inline runs of a single scope.
pub fn wrap_inline_runs(nodes: Vec<DocNode>) -> Vec<DocNode> {
    let runs = find_runs(&nodes, |node| node.role().is_inline());
    if !runs.is_empty() {
        trace!("wrapping {} inline run(s)", runs.len());
    }
    replace_runs(nodes, &runs, |run| vec![DocNode::synthetic_block(run)])
}

/// Fail if an inline node is still present at the top level.
pub fn ensure_no_top_level_inline(
    nodes: &[DocNode],
    label: impl Fn(&DocNode) -> String,
) -> Result<()> {
    match nodes.iter().position(|node| node.role().is_inline()) {
        Some(index) => Err(Error::UnresolvedTopLevelInline {
            index,
            path: label(&nodes[index]),
        }),
        None => Ok(()),
    }
}
