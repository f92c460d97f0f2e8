//! Structural whitespace culling.

use std::collections::HashSet;

use log::trace;

use crate::dom::{ArenaDom, ArenaNodeId};
use crate::model::{DocNode, Source};

use super::pass::map_scopes;
use super::ranges::{find_runs, replace_runs};

/// Remove inline runs that would only produce empty paragraphs.
///
/// Indentation between block tags survives extraction as whitespace text,
/// and every extracted block leaves a childless copy of its ancestors behind:
/// ```html
/// <div>
///     <p>Text</p>
/// </div>
/// ```
/// yields `[div (empty), p, div > ["\n"]]` at the top level. Each run of
/// inline nodes in a wrapping scope (top level, table cell) is dropped when
/// every node in it is blank; a run with any content is kept whole, so
/// spaces between inline content are never lost.
///
/// A block split around an extracted descendant reappears after it; those
/// continuation copies are dropped too when blank. The first copy of every
/// block stays, so an authored empty paragraph survives.
pub fn vacuum(nodes: Vec<DocNode>, dom: &ArenaDom) -> Vec<DocNode> {
    map_scopes(nodes, &|scope: Vec<DocNode>| vacuum_scope(scope, dom))
}

fn vacuum_scope(nodes: Vec<DocNode>, dom: &ArenaDom) -> Vec<DocNode> {
    let nodes = drop_blank_continuations(nodes, dom);
    let runs = find_runs(&nodes, |node| node.role().is_inline());
    replace_runs(nodes, &runs, |run| {
        if run.iter().all(|node| is_blank(node, dom)) {
            trace!("vacuumed blank inline run of {} node(s)", run.len());
            Vec::new()
        } else {
            run
        }
    })
}

fn drop_blank_continuations(nodes: Vec<DocNode>, dom: &ArenaDom) -> Vec<DocNode> {
    let mut seen = HashSet::new();
    nodes
        .into_iter()
        .filter(|node| {
            if node.role().is_inline() {
                return true;
            }
            match node.element_id() {
                Some(id) if !seen.insert(id) && is_blank(node, dom) => {
                    trace!("vacuumed blank continuation of {}", node.label(dom));
                    false
                }
                _ => true,
            }
        })
        .collect()
}

/// Check if a subtree carries nothing visible: no non-whitespace text and
/// no content leaf element.
pub fn is_blank(node: &DocNode, dom: &ArenaDom) -> bool {
    match &node.data.source {
        Source::Text(text) => text.trim().is_empty(),
        Source::Element(id) if node.is_leaf() => !is_content_leaf(dom, *id),
        Source::Element(_) | Source::Synthetic => {
            node.children.iter().all(|child| is_blank(child, dom))
        }
    }
}

/// Childless elements that still produce output or anchor links.
fn is_content_leaf(dom: &ArenaDom, id: ArenaNodeId) -> bool {
    if dom.element_id(id).is_some() {
        return true;
    }
    dom.element_name(id)
        .is_some_and(|name| matches!(name.as_ref(), "br" | "img" | "hr"))
}
