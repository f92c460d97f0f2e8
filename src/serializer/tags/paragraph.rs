//! Paragraph-like blocks.

use crate::document::{Block, Paragraph};
use crate::dom::ElementRef;
use crate::error::Result;
use crate::model::Role;
use crate::serializer::{Element, SerializeContext, TagSerializer, inline_children};

pub struct ParagraphSerializer;

impl TagSerializer for ParagraphSerializer {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn selector(&self) -> &str {
        "p"
    }

    fn role(&self) -> Role {
        Role::Block
    }

    fn serialize(
        &self,
        ctx: &SerializeContext<'_>,
        children: Vec<Element>,
    ) -> Result<Vec<Element>> {
        let paragraph = Paragraph::new(inline_children(children, ctx));
        Ok(vec![Element::Block(Block::Paragraph(paragraph))])
    }
}

/// `h1`..`h6` → paragraph with a heading level.
pub struct HeadingSerializer;

impl TagSerializer for HeadingSerializer {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn selector(&self) -> &str {
        "h1, h2, h3, h4, h5, h6"
    }

    fn role(&self) -> Role {
        Role::Block
    }

    fn serialize(
        &self,
        ctx: &SerializeContext<'_>,
        children: Vec<Element>,
    ) -> Result<Vec<Element>> {
        let heading = heading_level(ctx.element(self.name())?);
        let paragraph = Paragraph {
            heading,
            ..Paragraph::new(inline_children(children, ctx))
        };
        Ok(vec![Element::Block(Block::Paragraph(paragraph))])
    }
}

/// Level of an `h1`..`h6` element.
pub fn heading_level(elem: ElementRef<'_>) -> Option<u8> {
    let level = elem.tag_name().strip_prefix('h')?.parse::<u8>().ok()?;
    (1..=6).contains(&level).then_some(level)
}
