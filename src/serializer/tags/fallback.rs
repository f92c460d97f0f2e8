//! Serializer for nodes no selector claims.

use crate::document::{Block, Paragraph};
use crate::error::Result;
use crate::model::Role;
use crate::serializer::{Element, SerializeContext, TagSerializer, inline_children};

/// Anonymous block containers become paragraphs of their inline children;
/// every other node is transparent.
///
/// Synthetic wrappers built around stray inline runs are the usual block
/// case; unmatched elements (`div`, `span`, `body`, ...) classify inline and
/// pass their children up.
pub struct DefaultSerializer;

impl TagSerializer for DefaultSerializer {
    fn name(&self) -> &'static str {
        "default"
    }

    fn selector(&self) -> &str {
        "*"
    }

    fn role(&self) -> Role {
        Role::Inline
    }

    fn serialize(
        &self,
        ctx: &SerializeContext<'_>,
        children: Vec<Element>,
    ) -> Result<Vec<Element>> {
        if ctx.role() != Role::Block {
            return Ok(children);
        }
        let paragraph = Paragraph::new(inline_children(children, ctx));
        Ok(vec![Element::Block(Block::Paragraph(paragraph))])
    }
}
