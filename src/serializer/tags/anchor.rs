//! Hyperlinks.

use percent_encoding::percent_decode_str;

use crate::document::{HyperlinkTarget, Inline};
use crate::error::Result;
use crate::model::Role;
use crate::serializer::{Element, SerializeContext, TagSerializer, inline_children};

/// `a` → [`Inline::Hyperlink`] when it has an `href`.
///
/// A fragment-only `href` (`#intro`) links to the bookmark of that id in
/// the same document; anything else is an external target. Anchors without
/// an `href` are transparent.
pub struct AnchorSerializer;

impl TagSerializer for AnchorSerializer {
    fn name(&self) -> &'static str {
        "anchor"
    }

    fn selector(&self) -> &str {
        "a"
    }

    fn role(&self) -> Role {
        Role::Inline
    }

    fn serialize(
        &self,
        ctx: &SerializeContext<'_>,
        children: Vec<Element>,
    ) -> Result<Vec<Element>> {
        let elem = ctx.element(self.name())?;
        let Some(target) = elem.attr("href").and_then(hyperlink_target) else {
            return Ok(children);
        };

        Ok(vec![Element::Inline(Inline::Hyperlink {
            target,
            children: inline_children(children, ctx),
        })])
    }
}

/// Classify an `href`. `None` for an empty one or a bare `#`.
pub fn hyperlink_target(href: &str) -> Option<HyperlinkTarget> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    match href.strip_prefix('#') {
        Some("") => None,
        Some(fragment) => {
            let decoded = percent_decode_str(fragment).decode_utf8_lossy();
            Some(HyperlinkTarget::Internal(decoded.into_owned()))
        }
        None => Some(HyperlinkTarget::External(href.to_string())),
    }
}
