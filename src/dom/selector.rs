//! Compiled CSS selector lists.

use std::fmt;

use cssparser::{Parser, ParserInput};
use selectors::context::{MatchingContext, SelectorCaches};
use selectors::matching::{MatchingForInvalidation, MatchingMode, NeedsSelectorFlags};
use selectors::parser::{ParseRelative, SelectorList};

use super::element_ref::{ElementRef, QuireSelectors};
use crate::error::{Error, Result};

/// A comma-separated selector list, compiled once and matched many times.
#[derive(Clone)]
pub struct Selector {
    source: String,
    selectors: Vec<selectors::parser::Selector<QuireSelectors>>,
}

impl Selector {
    /// Compile a selector list.
    ///
    /// Returns [`Error::InvalidSelector`] with the parser's diagnostic if the
    /// text is not a valid selector list.
    pub fn parse(source: &str) -> Result<Self> {
        let mut input = ParserInput::new(source);
        let mut parser = Parser::new(&mut input);

        let list = SelectorList::parse(&QuireSelectors, &mut parser, ParseRelative::No)
            .map_err(|err| Error::InvalidSelector {
                selector: source.to_string(),
                message: format!("{:?} at column {}", err.kind, err.location.column),
            })?;

        Ok(Self {
            source: source.to_string(),
            selectors: list.slice().to_vec(),
        })
    }

    /// The selector text this was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Check if any selector in the list matches the element.
    pub fn matches(&self, elem: ElementRef<'_>) -> bool {
        let mut caches = SelectorCaches::default();
        let mut context = MatchingContext::new(
            MatchingMode::Normal,
            None,
            &mut caches,
            selectors::context::QuirksMode::NoQuirks,
            NeedsSelectorFlags::No,
            MatchingForInvalidation::No,
        );

        self.selectors.iter().any(|selector| {
            selectors::matching::matches_selector(selector, 0, None, &elem, &mut context)
        })
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Selector").field(&self.source).finish()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
