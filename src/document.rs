//! Output document model.
//!
//! This is the contract handed to a document writer: sections of block-level
//! elements, each either a paragraph of inline content or a table whose
//! cells hold further blocks.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::style::TextStyle;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Document {
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Section {
    pub children: Vec<Block>,
}

/// Block-level element: may stand at the top level of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Paragraph {
    /// Heading level 1-6.
    pub heading: Option<u8>,
    pub list: Option<ListMarker>,
    pub children: Vec<Inline>,
}

/// List membership of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ListMarker {
    pub ordered: bool,
    /// Zero-based nesting level.
    pub level: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Table {
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TableCell {
    pub header: bool,
    pub children: Vec<Block>,
}

/// Inline content of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Inline {
    Run { text: String, style: TextStyle },
    Break,
    Hyperlink {
        target: HyperlinkTarget,
        children: Vec<Inline>,
    },
    /// Named anchor that internal hyperlinks can point at.
    Bookmark { id: String, children: Vec<Inline> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum HyperlinkTarget {
    External(String),
    /// Bookmark id, without the leading `#`.
    Internal(String),
}

impl Inline {
    pub fn run(text: impl Into<String>, style: TextStyle) -> Self {
        Inline::Run {
            text: text.into(),
            style,
        }
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Inline::Run { text, .. } => out.push_str(text),
            Inline::Break => out.push('\n'),
            Inline::Hyperlink { children, .. } | Inline::Bookmark { children, .. } => {
                for child in children {
                    child.push_text(out);
                }
            }
        }
    }
}

impl Paragraph {
    pub fn new(children: Vec<Inline>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    /// Concatenated text of all runs; breaks become newlines.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.push_text(&mut out);
        }
        out
    }
}

impl Block {
    fn push_lines(&self, out: &mut Vec<String>) {
        match self {
            Block::Paragraph(p) => out.push(p.text()),
            Block::Table(table) => {
                for row in &table.rows {
                    let cells: Vec<String> = row
                        .cells
                        .iter()
                        .map(|cell| {
                            let mut lines = Vec::new();
                            for block in &cell.children {
                                block.push_lines(&mut lines);
                            }
                            lines.join(" ")
                        })
                        .collect();
                    out.push(cells.join(" | "));
                }
            }
        }
    }
}

impl Document {
    /// Render the document as plain text: one line per paragraph and one
    /// line per table row, cells separated by ` | `.
    pub fn plain_text(&self) -> String {
        let mut lines = Vec::new();
        for section in &self.sections {
            for block in &section.children {
                block.push_lines(&mut lines);
            }
        }
        lines.join("\n")
    }

    /// All top-level blocks across sections.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.sections.iter().flat_map(|s| s.children.iter())
    }
}
