//! Serializer capabilities, registry and the tree walk that drives them.
//!
//! A [`TagSerializer`] claims elements through a CSS selector, declares the
//! [`Role`] they classify as and the [`TextStyle`] they contribute, and turns
//! a node's serialized children into output [`Element`]s. A
//! [`FallthroughSerializer`] rewrites the children of every element its
//! selector matches before the primary serializer sees them.
//!
//! ## Dispatch
//!
//! Primary dispatch is first match in registry order; elements nothing
//! matches, and synthetic wrappers, go to the fallback serializer. Every
//! matching fallthrough runs, in registry order, each one fed the output of
//! the previous.

mod fallthrough;
mod registry;
pub mod tags;
mod walk;

pub use fallthrough::BookmarkSerializer;
pub use registry::SerializerRegistry;
pub use walk::TreeSerializer;

use std::cell::RefCell;
use std::collections::HashSet;

use log::warn;

use crate::document::{Block, Inline, TableCell, TableRow};
use crate::dom::{ArenaDom, ArenaNodeId, ElementRef};
use crate::error::{Error, Result};
use crate::model::Role;
use crate::style::TextStyle;

/// Output exchanged between serializers.
///
/// Each owner keeps only the kinds it can hold: tables keep rows, rows keep
/// cells, cells keep blocks and paragraphs keep inlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Inline(Inline),
    Block(Block),
    Row(TableRow),
    Cell(TableCell),
}

impl Element {
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Inline(_) => "inline",
            Element::Block(_) => "block",
            Element::Row(_) => "row",
            Element::Cell(_) => "cell",
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, Element::Inline(_))
    }

    fn into_inline(self) -> std::result::Result<Inline, Element> {
        match self {
            Element::Inline(inline) => Ok(inline),
            other => Err(other),
        }
    }

    fn into_block(self) -> std::result::Result<Block, Element> {
        match self {
            Element::Block(block) => Ok(block),
            other => Err(other),
        }
    }

    fn into_row(self) -> std::result::Result<TableRow, Element> {
        match self {
            Element::Row(row) => Ok(row),
            other => Err(other),
        }
    }

    fn into_cell(self) -> std::result::Result<TableCell, Element> {
        match self {
            Element::Cell(cell) => Ok(cell),
            other => Err(other),
        }
    }
}

fn retain<T>(
    children: Vec<Element>,
    ctx: &SerializeContext<'_>,
    accepted: &str,
    convert: fn(Element) -> std::result::Result<T, Element>,
) -> Vec<T> {
    children
        .into_iter()
        .filter_map(|child| match convert(child) {
            Ok(kept) => Some(kept),
            Err(other) => {
                warn!(
                    "discarding {} element under {}: only {} accepted",
                    other.kind(),
                    ctx.path(),
                    accepted
                );
                None
            }
        })
        .collect()
}

/// Keep the inline children, discarding anything else with a warning.
pub fn inline_children(children: Vec<Element>, ctx: &SerializeContext<'_>) -> Vec<Inline> {
    retain(children, ctx, "inline", Element::into_inline)
}

pub fn block_children(children: Vec<Element>, ctx: &SerializeContext<'_>) -> Vec<Block> {
    retain(children, ctx, "block", Element::into_block)
}

pub fn row_children(children: Vec<Element>, ctx: &SerializeContext<'_>) -> Vec<TableRow> {
    retain(children, ctx, "row", Element::into_row)
}

pub fn cell_children(children: Vec<Element>, ctx: &SerializeContext<'_>) -> Vec<TableCell> {
    retain(children, ctx, "cell", Element::into_cell)
}

/// What a serializer knows about the node it is serializing.
pub struct SerializeContext<'a> {
    dom: &'a ArenaDom,
    source: Option<ArenaNodeId>,
    role: Role,
    style: &'a TextStyle,
    path: &'a [String],
    bookmarks: Option<&'a RefCell<HashSet<String>>>,
}

impl<'a> SerializeContext<'a> {
    pub fn new(
        dom: &'a ArenaDom,
        source: Option<ArenaNodeId>,
        role: Role,
        style: &'a TextStyle,
        path: &'a [String],
    ) -> Self {
        Self {
            dom,
            source,
            role,
            style,
            path,
            bookmarks: None,
        }
    }

    /// Share the set of bookmark names already emitted in this conversion.
    pub fn with_bookmarks(mut self, bookmarks: &'a RefCell<HashSet<String>>) -> Self {
        self.bookmarks = Some(bookmarks);
        self
    }

    /// The originating element, if the node is not a synthetic wrapper.
    pub fn source(&self) -> Option<ElementRef<'a>> {
        self.source.map(|id| ElementRef::new(self.dom, id))
    }

    /// The originating element, or [`Error::MissingElement`] for a synthetic
    /// wrapper.
    pub fn element(&self, serializer: &'static str) -> Result<ElementRef<'a>> {
        self.source().ok_or_else(|| Error::MissingElement {
            serializer,
            path: self.path(),
        })
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Style cascaded from the root through this node.
    pub fn style(&self) -> &TextStyle {
        self.style
    }

    /// Reserve a bookmark name. `false` if it was already emitted; always
    /// `true` without a shared set.
    pub fn claim_bookmark(&self, id: &str) -> bool {
        match self.bookmarks {
            Some(bookmarks) => bookmarks.borrow_mut().insert(id.to_string()),
            None => true,
        }
    }

    /// Ancestor path of the node, root first: `body > div > #block`.
    pub fn path(&self) -> String {
        self.path.join(" > ")
    }
}

/// A primary serializer for the elements matched by [`selector`](Self::selector).
pub trait TagSerializer: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// CSS selector list of the elements this serializer claims.
    fn selector(&self) -> &str;

    fn role(&self) -> Role;

    /// Style contributed to the element's subtree.
    fn modifiers(&self, _elem: ElementRef<'_>) -> Option<TextStyle> {
        None
    }

    /// Turn already-serialized children into this node's output.
    fn serialize(
        &self,
        ctx: &SerializeContext<'_>,
        children: Vec<Element>,
    ) -> Result<Vec<Element>>;
}

/// A secondary serializer applied to children before primary dispatch,
/// independent of role.
pub trait FallthroughSerializer: Send + Sync {
    fn name(&self) -> &'static str;

    fn selector(&self) -> &str;

    fn serialize(
        &self,
        ctx: &SerializeContext<'_>,
        children: Vec<Element>,
    ) -> Result<Vec<Element>>;
}
