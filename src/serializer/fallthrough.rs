//! Fallthrough serializers.

use crate::document::Inline;
use crate::error::Result;
use crate::serializer::{Element, FallthroughSerializer, SerializeContext};

/// Wrap the inline content of any element with an `id` in a bookmark, so
/// internal hyperlinks can target it.
///
/// Children are left alone when there is nothing to wrap or when they are
/// not all inline (the bookmark would have nowhere to live, e.g. on a table
/// cell holding paragraphs). Each name is emitted once per document: later
/// copies of a split element, and repeated ids, are not bookmarked again.
pub struct BookmarkSerializer;

impl FallthroughSerializer for BookmarkSerializer {
    fn name(&self) -> &'static str {
        "bookmark"
    }

    fn selector(&self) -> &str {
        "*[id]"
    }

    fn serialize(
        &self,
        ctx: &SerializeContext<'_>,
        children: Vec<Element>,
    ) -> Result<Vec<Element>> {
        let elem = ctx.element(self.name())?;
        let Some(id) = elem.element_id() else {
            return Ok(children);
        };
        if children.is_empty() || !children.iter().all(Element::is_inline) {
            return Ok(children);
        }
        if !ctx.claim_bookmark(id) {
            return Ok(children);
        }

        let children = children
            .into_iter()
            .filter_map(|child| match child {
                Element::Inline(inline) => Some(inline),
                _ => None,
            })
            .collect();

        Ok(vec![Element::Inline(Inline::Bookmark {
            id: id.to_string(),
            children,
        })])
    }
}
