//! Built-in serializers for HTML elements.

mod anchor;
mod fallback;
mod inline;
mod list;
mod paragraph;
mod table;

pub use anchor::{AnchorSerializer, hyperlink_target};
pub use fallback::DefaultSerializer;
pub use inline::{InlineStyleSerializer, LineBreakSerializer};
pub use list::{ListItemSerializer, list_marker};
pub use paragraph::{HeadingSerializer, ParagraphSerializer, heading_level};
pub use table::{
    TableCellSerializer, TableChildSerializer, TableRowSerializer, TableSerializer,
};
