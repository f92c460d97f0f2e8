//! Bottom-up serialization of the wrapped top-level sequence.

use std::cell::RefCell;
use std::collections::HashSet;

use log::{debug, warn};

use super::{Element, SerializeContext, SerializerRegistry};
use crate::document::{Block, Inline};
use crate::dom::{ArenaDom, ElementRef};
use crate::error::Result;
use crate::model::{DocNode, Source};
use crate::style::TextStyle;
use crate::tree::cascade_opt;

/// Drives the registry over a classified tree.
pub struct TreeSerializer<'a> {
    registry: &'a SerializerRegistry,
    dom: &'a ArenaDom,
    bookmarks: RefCell<HashSet<String>>,
}

impl<'a> TreeSerializer<'a> {
    pub fn new(registry: &'a SerializerRegistry, dom: &'a ArenaDom) -> Self {
        Self {
            registry,
            dom,
            bookmarks: RefCell::new(HashSet::new()),
        }
    }

    /// Serialize every top-level node and keep the resulting blocks.
    ///
    /// Top-level nodes start from an empty cascade: extraction already merged
    /// ancestor state into each of them.
    pub fn serialize_top_level(&self, nodes: &[DocNode]) -> Result<Vec<Block>> {
        let mut blocks = Vec::with_capacity(nodes.len());
        let mut path = Vec::new();

        for node in nodes {
            for element in self.serialize_node(node, None, &mut path)? {
                match element {
                    Element::Block(block) => blocks.push(block),
                    other => warn!(
                        "discarding top-level {} element from {}",
                        other.kind(),
                        node.label(self.dom)
                    ),
                }
            }
        }

        debug!(
            "serialized {} top-level nodes into {} blocks",
            nodes.len(),
            blocks.len()
        );
        Ok(blocks)
    }

    /// Serialize one node with the style inherited from its ancestors.
    ///
    /// Children are serialized first with the cascaded style, then every
    /// matching fallthrough rewrites them, then the primary serializer (or
    /// the fallback) produces the node's output.
    pub fn serialize_node(
        &self,
        node: &DocNode,
        inherited: Option<&TextStyle>,
        path: &mut Vec<String>,
    ) -> Result<Vec<Element>> {
        let cascaded = cascade_opt(inherited, node.state.as_ref()).unwrap_or_default();

        if let Source::Text(text) = &node.data.source {
            return Ok(vec![Element::Inline(Inline::run(text.as_str(), cascaded))]);
        }

        path.push(node.label(self.dom));
        let result = self.serialize_children(node, &cascaded, path);
        path.pop();
        result
    }

    fn serialize_children(
        &self,
        node: &DocNode,
        cascaded: &TextStyle,
        path: &mut Vec<String>,
    ) -> Result<Vec<Element>> {
        let mut children = Vec::new();
        for child in &node.children {
            children.extend(self.serialize_node(child, Some(cascaded), path)?);
        }

        let ctx = SerializeContext::new(
            self.dom,
            node.element_id(),
            node.role(),
            cascaded,
            path.as_slice(),
        )
        .with_bookmarks(&self.bookmarks);

        let primary = match ctx.source() {
            Some(elem) => {
                children = self.apply_fallthroughs(&ctx, elem, children)?;
                self.registry
                    .resolve(elem)
                    .unwrap_or_else(|| self.registry.fallback())
            }
            None => self.registry.fallback(),
        };

        primary.serialize(&ctx, children)
    }

    fn apply_fallthroughs(
        &self,
        ctx: &SerializeContext<'_>,
        elem: ElementRef<'_>,
        children: Vec<Element>,
    ) -> Result<Vec<Element>> {
        self.registry
            .fallthroughs(elem)
            .try_fold(children, |children, fallthrough| {
                fallthrough.serialize(ctx, children)
            })
    }
}
