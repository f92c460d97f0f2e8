//! Parsed HTML document and selector matching.
//!
//! HTML is parsed with html5ever into an [`ArenaDom`]; serializer selectors
//! are compiled into [`Selector`]s and matched through [`ElementRef`].

mod arena;
mod element_ref;
mod selector;
mod tree_sink;

pub use arena::{ArenaDom, ArenaNode, ArenaNodeData, ArenaNodeId, Attribute, ChildrenIter};
pub use element_ref::{ElementRef, QuireSelectors};
pub use selector::Selector;
pub use tree_sink::ArenaSink;

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

use crate::util::{decode_text, extract_meta_charset};

/// Parse an HTML document or fragment.
///
/// Parsing never fails: malformed markup is recovered the way browsers
/// recover it, and fragments are placed inside an implied `<body>`.
pub fn parse_html(html: &str) -> ArenaDom {
    parse_document(ArenaSink::new(), ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
        .into_dom()
}

/// Parse HTML from raw bytes of unknown encoding.
///
/// Bytes are decoded as UTF-8 when valid, otherwise with the charset named
/// by a `<meta>` tag, falling back to Windows-1252.
pub fn parse_html_bytes(bytes: &[u8]) -> ArenaDom {
    let hint = extract_meta_charset(bytes);
    let text = decode_text(bytes, hint);
    parse_html(&text)
}
