//! Ordered serializer registry.

use log::trace;

use super::fallthrough::BookmarkSerializer;
use super::tags::{
    AnchorSerializer, DefaultSerializer, HeadingSerializer, InlineStyleSerializer,
    LineBreakSerializer, ListItemSerializer, ParagraphSerializer, TableCellSerializer,
    TableChildSerializer, TableRowSerializer, TableSerializer,
};
use super::{FallthroughSerializer, TagSerializer};
use crate::dom::{ElementRef, Selector};
use crate::error::Result;

struct Entry<T: ?Sized> {
    selector: Selector,
    serializer: Box<T>,
}

impl<T: ?Sized> Entry<T> {
    fn matches(&self, elem: ElementRef<'_>) -> bool {
        self.selector.matches(elem)
    }
}

/// Serializers in resolution order, plus the fallback for unmatched nodes.
///
/// Selectors are compiled when a serializer is registered, so an invalid
/// selector is reported once, up front.
pub struct SerializerRegistry {
    serializers: Vec<Entry<dyn TagSerializer>>,
    fallthroughs: Vec<Entry<dyn FallthroughSerializer>>,
    fallback: Box<dyn TagSerializer>,
}

impl SerializerRegistry {
    /// An empty registry: every element classifies inline and goes to
    /// [`DefaultSerializer`].
    pub fn new() -> Self {
        Self {
            serializers: Vec::new(),
            fallthroughs: Vec::new(),
            fallback: Box::new(DefaultSerializer),
        }
    }

    /// The built-in HTML serializers.
    pub fn standard() -> Result<Self> {
        let mut registry = Self::new();
        registry.register_standard()?;
        Ok(registry)
    }

    /// Append the built-in serializers after whatever is registered already,
    /// so earlier custom serializers take precedence.
    pub fn register_standard(&mut self) -> Result<&mut Self> {
        self.register(TableSerializer)?
            .register(TableChildSerializer)?
            .register(TableRowSerializer)?
            .register(TableCellSerializer)?
            .register(ParagraphSerializer)?
            .register(HeadingSerializer)?
            .register(ListItemSerializer)?
            .register(InlineStyleSerializer::bold())?
            .register(InlineStyleSerializer::italic())?
            .register(InlineStyleSerializer::underline())?
            .register(InlineStyleSerializer::strike())?
            .register(InlineStyleSerializer::superscript())?
            .register(InlineStyleSerializer::subscript())?
            .register(InlineStyleSerializer::code())?
            .register(AnchorSerializer)?
            .register(LineBreakSerializer)?
            .register_fallthrough(BookmarkSerializer)
    }

    /// Append a primary serializer. Earlier registrations win.
    pub fn register<S: TagSerializer + 'static>(&mut self, serializer: S) -> Result<&mut Self> {
        let selector = Selector::parse(serializer.selector())?;
        self.serializers.push(Entry {
            selector,
            serializer: Box::new(serializer),
        });
        Ok(self)
    }

    /// Append a fallthrough serializer. Fallthroughs run in registration order.
    pub fn register_fallthrough<S: FallthroughSerializer + 'static>(
        &mut self,
        serializer: S,
    ) -> Result<&mut Self> {
        let selector = Selector::parse(serializer.selector())?;
        self.fallthroughs.push(Entry {
            selector,
            serializer: Box::new(serializer),
        });
        Ok(self)
    }

    /// Replace the serializer used for unmatched elements and synthetic
    /// wrappers.
    pub fn set_fallback<S: TagSerializer + 'static>(&mut self, serializer: S) -> &mut Self {
        self.fallback = Box::new(serializer);
        self
    }

    /// First registered serializer whose selector matches.
    pub fn resolve(&self, elem: ElementRef<'_>) -> Option<&dyn TagSerializer> {
        let found = self
            .serializers
            .iter()
            .find(|entry| entry.matches(elem))
            .map(|entry| entry.serializer.as_ref());
        if let Some(serializer) = found {
            trace!("<{}> resolved to {}", elem.tag_name(), serializer.name());
        }
        found
    }

    /// Every fallthrough serializer whose selector matches, in order.
    pub fn fallthroughs<'r, 'e>(
        &'r self,
        elem: ElementRef<'e>,
    ) -> impl Iterator<Item = &'r dyn FallthroughSerializer> {
        self.fallthroughs
            .iter()
            .filter(move |entry| entry.matches(elem))
            .map(|entry| entry.serializer.as_ref())
    }

    pub fn fallback(&self) -> &dyn TagSerializer {
        self.fallback.as_ref()
    }

    pub fn len(&self) -> usize {
        self.serializers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.serializers.is_empty()
    }
}

impl Default for SerializerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
