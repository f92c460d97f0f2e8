//! Conversion pipeline and its configuration.
//!
//! ```text
//! parse → classify → extract → vacuum → wrap → serialize → Document
//! ```

use log::debug;

use crate::classify::Classifier;
use crate::document::{Document, Section};
use crate::dom::{ArenaDom, parse_html, parse_html_bytes};
use crate::error::Result;
use crate::model::DocNode;
use crate::serializer::{SerializerRegistry, TreeSerializer};
use crate::tree::{
    ensure_no_top_level_inline, extract_to_top_level, should_extract, vacuum, wrap_top_level,
};

/// Default nesting bound, deep enough for any real document.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options for a [`Converter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Maximum element nesting below `<body>`. Deeper input is rejected with
    /// [`Error::NestingTooDeep`](crate::Error::NestingTooDeep).
    pub max_depth: usize,
    /// Drop whitespace-only inline runs and blank continuation blocks before
    /// wrapping.
    pub vacuum: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            vacuum: true,
        }
    }
}

impl ConvertOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_vacuum(mut self, vacuum: bool) -> Self {
        self.vacuum = vacuum;
        self
    }
}

/// HTML to [`Document`] converter.
///
/// Holds the compiled serializer registry, so one converter can be reused
/// across many documents.
///
/// ```
/// use quire::{Block, Converter};
///
/// let converter = Converter::new().unwrap();
/// let doc = converter.convert("<h1>Title</h1><p>Body <b>text</b></p>").unwrap();
///
/// let blocks: Vec<_> = doc.blocks().collect();
/// assert!(matches!(blocks[0], Block::Paragraph(p) if p.heading == Some(1)));
/// assert_eq!(doc.plain_text(), "Title\nBody text");
/// ```
pub struct Converter {
    registry: SerializerRegistry,
    options: ConvertOptions,
}

impl Converter {
    /// Converter with the standard registry and default options.
    pub fn new() -> Result<Self> {
        Ok(Self::with_config(
            SerializerRegistry::standard()?,
            ConvertOptions::default(),
        ))
    }

    pub fn with_config(registry: SerializerRegistry, options: ConvertOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &SerializerRegistry {
        &self.registry
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert an HTML document or fragment.
    pub fn convert(&self, html: &str) -> Result<Document> {
        self.convert_dom(&parse_html(html))
    }

    /// Convert HTML bytes of unknown encoding.
    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<Document> {
        self.convert_dom(&parse_html_bytes(bytes))
    }

    /// Convert an already parsed document.
    pub fn convert_dom(&self, dom: &ArenaDom) -> Result<Document> {
        let nodes = self.build_tree(dom)?;
        let blocks = TreeSerializer::new(&self.registry, dom).serialize_top_level(&nodes)?;
        Ok(Document {
            sections: vec![Section { children: blocks }],
        })
    }

    /// Run every pass up to serialization and return the top-level sequence.
    ///
    /// Every returned node is block-level; each table cell's children are
    /// block-level too.
    pub fn build_tree(&self, dom: &ArenaDom) -> Result<Vec<DocNode>> {
        let Some(root) = dom.body() else {
            debug!("document has no root element");
            return Ok(Vec::new());
        };

        let classifier = Classifier::new(dom, &self.registry, self.options.max_depth);
        let Some(root) = classifier.classify(root)? else {
            return Ok(Vec::new());
        };
        debug!("classified {} nodes", root.subtree_len());

        let mut nodes = extract_to_top_level(&root, &should_extract, None);
        debug!("extracted {} top-level nodes", nodes.len());

        if self.options.vacuum {
            nodes = vacuum(nodes, dom);
            debug!("{} top-level nodes after vacuum", nodes.len());
        }

        let nodes = wrap_top_level(nodes);
        ensure_no_top_level_inline(&nodes, |node| node.label(dom))?;
        debug!("wrapped into {} top-level blocks", nodes.len());

        Ok(nodes)
    }
}

/// Convert HTML with the standard registry and default options.
pub fn convert_html(html: &str) -> Result<Document> {
    Converter::new()?.convert(html)
}
