//! Classified tree: structural roles and per-node payload.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::dom::{ArenaDom, ArenaNodeId};
use crate::style::TextStyle;
use crate::tree::Node;

/// Structural role of a classified node.
///
/// Assigned once, at classification, from the first serializer whose
/// selector matches the element. Unmatched elements and text are `Inline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Role {
    Block,
    #[default]
    Inline,
    Table,
    /// `thead`, `tbody` or `tfoot` directly inside a table.
    TableChild,
    TableRow,
    TableCell,
}

impl Role {
    /// Roles that may stand at the top level of a section.
    pub fn is_block_level(self) -> bool {
        matches!(self, Role::Block | Role::Table)
    }

    pub fn is_inline(self) -> bool {
        self == Role::Inline
    }
}

/// Where a classified node came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A text leaf.
    Text(String),
    /// An element of the parsed document.
    Element(ArenaNodeId),
    /// A wrapper created by the pipeline; has no originating element.
    Synthetic,
}

/// Payload of a classified node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    pub role: Role,
    pub source: Source,
}

/// A classified node: role and source as data, [`TextStyle`] as state.
pub type DocNode = Node<NodeData, TextStyle>;

impl DocNode {
    pub fn text(text: impl Into<String>) -> Self {
        Node::new(NodeData {
            role: Role::Inline,
            source: Source::Text(text.into()),
        })
    }

    pub fn element(role: Role, id: ArenaNodeId) -> Self {
        Node::new(NodeData {
            role,
            source: Source::Element(id),
        })
    }

    pub fn synthetic(role: Role) -> Self {
        Node::new(NodeData {
            role,
            source: Source::Synthetic,
        })
    }

    /// Anonymous block holding a run of inline nodes.
    pub fn synthetic_block(children: Vec<DocNode>) -> Self {
        Self::synthetic(Role::Block).with_children(children)
    }

    pub fn role(&self) -> Role {
        self.data.role
    }

    pub fn element_id(&self) -> Option<ArenaNodeId> {
        match self.data.source {
            Source::Element(id) => Some(id),
            _ => None,
        }
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.data.source {
            Source::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Concatenated text of all text leaves, in order.
    pub fn collect_text(&self) -> String {
        self.leaves()
            .into_iter()
            .filter_map(DocNode::text_content)
            .collect()
    }

    /// Short label for paths in diagnostics: tag name, `#text` or `#block`.
    pub fn label(&self, dom: &ArenaDom) -> String {
        match &self.data.source {
            Source::Text(_) => "#text".to_string(),
            Source::Element(id) => dom
                .element_name(*id)
                .map(|name| name.to_string())
                .unwrap_or_else(|| "#element".to_string()),
            Source::Synthetic => match self.data.role {
                Role::Block => "#block".to_string(),
                role => format!("#{role:?}").to_lowercase(),
            },
        }
    }
}
