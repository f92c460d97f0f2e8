//! List items.
//!
//! Lists themselves are not blocks: `ul`/`ol` classify inline and vanish
//! once their items are extracted. Each `li` becomes a paragraph carrying
//! the list kind and nesting depth read from its ancestors.

use crate::document::{Block, ListMarker, Paragraph};
use crate::dom::ElementRef;
use crate::error::Result;
use crate::model::Role;
use crate::serializer::{Element, SerializeContext, TagSerializer, inline_children};

pub struct ListItemSerializer;

impl TagSerializer for ListItemSerializer {
    fn name(&self) -> &'static str {
        "list-item"
    }

    fn selector(&self) -> &str {
        "li"
    }

    fn role(&self) -> Role {
        Role::Block
    }

    fn serialize(
        &self,
        ctx: &SerializeContext<'_>,
        children: Vec<Element>,
    ) -> Result<Vec<Element>> {
        let list = list_marker(ctx.element(self.name())?);
        let paragraph = Paragraph {
            list,
            ..Paragraph::new(inline_children(children, ctx))
        };
        Ok(vec![Element::Block(Block::Paragraph(paragraph))])
    }
}

/// Marker of a list item: kind of the nearest enclosing list, and how many
/// lists enclose that one. `None` for an item outside any list.
pub fn list_marker(elem: ElementRef<'_>) -> Option<ListMarker> {
    let mut lists = elem
        .dom
        .ancestors(elem.id)
        .filter_map(|id| elem.dom.element_name(id))
        .map(|name| &**name)
        .filter(|name| matches!(*name, "ul" | "ol"));

    let ordered = lists.next()? == "ol";
    let level = u8::try_from(lists.count()).unwrap_or(u8::MAX);
    Some(ListMarker { ordered, level })
}
