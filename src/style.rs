//! Text style modifiers carried through the tree.
//!
//! A [`TextStyle`] is sparse: `None` means "not set here", so an ancestor's
//! value shows through. [`TextStyle::cascade`] implements the merge used for
//! both extraction and serialization: fields set on the descendant win, unset
//! fields are inherited.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::tree::Cascade;

/// Run-level formatting flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TextStyle {
    pub bold: Option<bool>,
    pub italics: Option<bool>,
    pub underline: Option<bool>,
    pub strike: Option<bool>,
    pub superscript: Option<bool>,
    pub subscript: Option<bool>,
    /// Fixed-width font (`code`, `kbd`, ...).
    pub monospace: Option<bool>,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bold() -> Self {
        Self {
            bold: Some(true),
            ..Self::default()
        }
    }

    pub fn italics() -> Self {
        Self {
            italics: Some(true),
            ..Self::default()
        }
    }

    pub fn underline() -> Self {
        Self {
            underline: Some(true),
            ..Self::default()
        }
    }

    pub fn strike() -> Self {
        Self {
            strike: Some(true),
            ..Self::default()
        }
    }

    pub fn superscript() -> Self {
        Self {
            superscript: Some(true),
            ..Self::default()
        }
    }

    pub fn subscript() -> Self {
        Self {
            subscript: Some(true),
            ..Self::default()
        }
    }

    pub fn monospace() -> Self {
        Self {
            monospace: Some(true),
            ..Self::default()
        }
    }

    pub fn with_bold(mut self, value: bool) -> Self {
        self.bold = Some(value);
        self
    }

    pub fn with_italics(mut self, value: bool) -> Self {
        self.italics = Some(value);
        self
    }

    /// True if no modifier is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn is_bold(&self) -> bool {
        self.bold.unwrap_or(false)
    }

    pub fn is_italics(&self) -> bool {
        self.italics.unwrap_or(false)
    }

    pub fn is_underline(&self) -> bool {
        self.underline.unwrap_or(false)
    }

    pub fn is_strike(&self) -> bool {
        self.strike.unwrap_or(false)
    }

    pub fn is_monospace(&self) -> bool {
        self.monospace.unwrap_or(false)
    }
}

impl Cascade for TextStyle {
    fn cascade(&self, descendant: &Self) -> Self {
        Self {
            bold: descendant.bold.or(self.bold),
            italics: descendant.italics.or(self.italics),
            underline: descendant.underline.or(self.underline),
            strike: descendant.strike.or(self.strike),
            superscript: descendant.superscript.or(self.superscript),
            subscript: descendant.subscript.or(self.subscript),
            monospace: descendant.monospace.or(self.monospace),
        }
    }
}
