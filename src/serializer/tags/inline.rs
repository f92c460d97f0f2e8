//! Inline formatting elements.

use crate::document::Inline;
use crate::dom::ElementRef;
use crate::error::Result;
use crate::model::Role;
use crate::serializer::{Element, SerializeContext, TagSerializer};
use crate::style::TextStyle;

/// An inline element whose only effect is the style it contributes to the
/// runs below it. Children pass through unchanged.
pub struct InlineStyleSerializer {
    name: &'static str,
    selector: &'static str,
    style: TextStyle,
}

impl InlineStyleSerializer {
    pub fn new(name: &'static str, selector: &'static str, style: TextStyle) -> Self {
        Self {
            name,
            selector,
            style,
        }
    }

    pub fn bold() -> Self {
        Self::new("bold", "b, strong", TextStyle::bold())
    }

    pub fn italic() -> Self {
        Self::new("italic", "em, i", TextStyle::italics())
    }

    pub fn underline() -> Self {
        Self::new("underline", "u, ins", TextStyle::underline())
    }

    pub fn strike() -> Self {
        Self::new("strike", "s, strike, del", TextStyle::strike())
    }

    pub fn superscript() -> Self {
        Self::new("superscript", "sup", TextStyle::superscript())
    }

    pub fn subscript() -> Self {
        Self::new("subscript", "sub", TextStyle::subscript())
    }

    pub fn code() -> Self {
        Self::new("code", "code, kbd, samp, tt", TextStyle::monospace())
    }
}

impl TagSerializer for InlineStyleSerializer {
    fn name(&self) -> &'static str {
        self.name
    }

    fn selector(&self) -> &str {
        self.selector
    }

    fn role(&self) -> Role {
        Role::Inline
    }

    fn modifiers(&self, _elem: ElementRef<'_>) -> Option<TextStyle> {
        Some(self.style.clone())
    }

    fn serialize(
        &self,
        _ctx: &SerializeContext<'_>,
        children: Vec<Element>,
    ) -> Result<Vec<Element>> {
        Ok(children)
    }
}

/// `br` → [`Inline::Break`].
pub struct LineBreakSerializer;

impl TagSerializer for LineBreakSerializer {
    fn name(&self) -> &'static str {
        "line-break"
    }

    fn selector(&self) -> &str {
        "br"
    }

    fn role(&self) -> Role {
        Role::Inline
    }

    fn serialize(
        &self,
        _ctx: &SerializeContext<'_>,
        _children: Vec<Element>,
    ) -> Result<Vec<Element>> {
        Ok(vec![Element::Inline(Inline::Break)])
    }
}
