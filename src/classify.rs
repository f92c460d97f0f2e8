//! Node classification: parsed DOM → classified [`DocNode`] tree.

use log::trace;

use crate::dom::{ArenaDom, ArenaNodeData, ArenaNodeId, ElementRef};
use crate::error::{Error, Result};
use crate::model::{DocNode, Role};
use crate::serializer::SerializerRegistry;
use crate::tree::is_structural_container;

/// Elements whose subtrees never carry document content.
const SKIPPED_ELEMENTS: &[&str] = &["head", "script", "style", "template", "noscript"];

/// Builds the classified tree, asking the registry for each element's role
/// and style modifiers.
///
/// Comments, doctypes and processing instructions are dropped here, so
/// later passes only ever see text and element nodes.
pub struct Classifier<'a> {
    dom: &'a ArenaDom,
    registry: &'a SerializerRegistry,
    max_depth: usize,
}

impl<'a> Classifier<'a> {
    pub fn new(dom: &'a ArenaDom, registry: &'a SerializerRegistry, max_depth: usize) -> Self {
        Self {
            dom,
            registry,
            max_depth,
        }
    }

    /// Classify the subtree rooted at `root`.
    ///
    /// Returns `None` if the root itself is dropped. Fails with
    /// [`Error::NestingTooDeep`] when an element sits deeper than the limit
    /// below `root`.
    pub fn classify(&self, root: ArenaNodeId) -> Result<Option<DocNode>> {
        self.classify_node(root, 0, Role::Inline)
    }

    fn classify_node(
        &self,
        id: ArenaNodeId,
        depth: usize,
        parent: Role,
    ) -> Result<Option<DocNode>> {
        let Some(node) = self.dom.get(id) else {
            return Ok(None);
        };

        match &node.data {
            ArenaNodeData::Text(text) => {
                if is_structural_container(parent) && text.trim().is_empty() {
                    trace!("dropping whitespace inside {parent:?}");
                    return Ok(None);
                }
                Ok(Some(DocNode::text(text.as_str())))
            }
            ArenaNodeData::Element { .. } => self.classify_element(id, depth),
            ArenaNodeData::Comment(_) | ArenaNodeData::Doctype(_) | ArenaNodeData::Document => {
                trace!("dropping non-content node {id:?}");
                Ok(None)
            }
        }
    }

    fn classify_element(&self, id: ArenaNodeId, depth: usize) -> Result<Option<DocNode>> {
        let elem = ElementRef::new(self.dom, id);
        if SKIPPED_ELEMENTS.contains(&elem.tag_name()) {
            trace!("dropping <{}> subtree", elem.tag_name());
            return Ok(None);
        }
        if depth > self.max_depth {
            return Err(Error::NestingTooDeep {
                depth,
                limit: self.max_depth,
            });
        }

        let serializer = self.registry.resolve(elem);
        let role = serializer.map(|s| s.role()).unwrap_or_default();
        let modifiers = serializer.and_then(|s| s.modifiers(elem));

        let mut children = Vec::new();
        for child in self.dom.children(id) {
            if let Some(node) = self.classify_node(child, depth + 1, role)? {
                children.push(node);
            }
        }

        let mut node = DocNode::element(role, id).with_children(children);
        node.state = modifiers;
        Ok(Some(node))
    }
}
