//! # quire
//!
//! Convert HTML into a structured word-processing document: sections of
//! paragraphs made of styled runs, hyperlinks and bookmarks, and tables whose
//! cells hold further blocks.
//!
//! ## Quick Start
//!
//! ```
//! use quire::{Inline, TextStyle, convert_html};
//!
//! let doc = convert_html("<p>Hello <b>World</b></p>").unwrap();
//! assert_eq!(doc.plain_text(), "Hello World");
//!
//! let quire::Block::Paragraph(p) = &doc.sections[0].children[0] else {
//!     panic!("expected a paragraph");
//! };
//! assert_eq!(p.children[1], Inline::run("World", TextStyle::bold()));
//! ```
//!
//! ## How it works
//!
//! The parsed DOM is classified into a tree of [`DocNode`]s, each with a
//! [`Role`] and the [`TextStyle`] its element contributes. Block-level nodes
//! are then lifted to the top level with their ancestors' style cascaded
//! onto them, leaving copies of those ancestors around the remaining inline
//! content. Stray inline runs are wrapped in anonymous blocks, and the
//! result is serialized bottom-up through a [`SerializerRegistry`].
//!
//! Custom serializers implement [`TagSerializer`] or
//! [`FallthroughSerializer`] and are registered ahead of, or instead of, the
//! standard ones.

pub mod classify;
pub mod convert;
pub mod document;
pub mod dom;
pub mod error;
pub mod model;
pub mod serializer;
pub mod style;
pub mod tree;
pub(crate) mod util;

pub use classify::Classifier;
pub use convert::{ConvertOptions, Converter, DEFAULT_MAX_DEPTH, convert_html};
pub use document::{
    Block, Document, HyperlinkTarget, Inline, ListMarker, Paragraph, Section, Table, TableCell,
    TableRow,
};
pub use dom::{ArenaDom, ElementRef, Selector, parse_html, parse_html_bytes};
pub use error::{Error, Result};
pub use model::{DocNode, NodeData, Role, Source};
pub use serializer::{
    Element, FallthroughSerializer, SerializeContext, SerializerRegistry, TagSerializer,
};
pub use style::TextStyle;
