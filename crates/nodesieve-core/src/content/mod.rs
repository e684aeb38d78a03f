//! Minimal tree-structured content model.
//!
//! This module provides the node types that filters select over:
//! - [`Content`]: the heterogeneous node enum (the candidate type of most
//!   filters)
//! - [`ContentKind`]: the discriminant, used by kind-mask filters
//! - [`Element`], [`Text`], [`Comment`], [`ProcessingInstruction`],
//!   [`EntityRef`]: the node payloads
//! - [`Attribute`]: a named value attached to an element (not itself
//!   content)
//!
//! The model is deliberately small: nodes carry no parent links, no
//! namespaces, and no document container. Names and character data are
//! validated at construction time; nothing in this crate mutates a node
//! after that.

mod element;
mod nodes;
pub(crate) mod verify;

#[cfg(test)]
mod tests;

pub use element::{Attribute, Element};
pub use nodes::{Comment, EntityRef, ProcessingInstruction, Text};

/// The kind of a content node.
///
/// # Example
///
/// ```
/// use nodesieve_core::content::{Content, ContentKind, Text};
///
/// let node = Content::Text(Text::new("hello"));
/// assert_eq!(node.kind(), ContentKind::Text);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentKind {
    /// An element node.
    Element,
    /// A text node.
    Text,
    /// A CDATA section.
    CData,
    /// A comment.
    Comment,
    /// A processing instruction.
    ProcessingInstruction,
    /// An unexpanded entity reference.
    EntityRef,
}

impl ContentKind {
    /// All kinds, in declaration order.
    pub const ALL: [ContentKind; 6] = [
        ContentKind::Element,
        ContentKind::Text,
        ContentKind::CData,
        ContentKind::Comment,
        ContentKind::ProcessingInstruction,
        ContentKind::EntityRef,
    ];

    /// The mask bit for this kind (see `KindFilter`).
    pub(crate) const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A node of the document tree.
///
/// `Content` is the candidate type that document-level filters evaluate.
/// Each variant wraps the corresponding payload type; [`kind`](Content::kind)
/// exposes the discriminant for mask-based filtering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Content {
    /// An element node.
    Element(Element),
    /// A text node.
    Text(Text),
    /// A CDATA section. Shares the [`Text`] payload.
    CData(Text),
    /// A comment.
    Comment(Comment),
    /// A processing instruction.
    ProcessingInstruction(ProcessingInstruction),
    /// An unexpanded entity reference.
    EntityRef(EntityRef),
}

impl Content {
    /// Returns this node's kind.
    pub fn kind(&self) -> ContentKind {
        match self {
            Content::Element(_) => ContentKind::Element,
            Content::Text(_) => ContentKind::Text,
            Content::CData(_) => ContentKind::CData,
            Content::Comment(_) => ContentKind::Comment,
            Content::ProcessingInstruction(_) => ContentKind::ProcessingInstruction,
            Content::EntityRef(_) => ContentKind::EntityRef,
        }
    }

    /// Returns the element payload, if this node is an element.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Content::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns the text payload for text and CDATA nodes.
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Content::Text(text) | Content::CData(text) => Some(text),
            _ => None,
        }
    }
}

impl From<Element> for Content {
    fn from(element: Element) -> Self {
        Content::Element(element)
    }
}

impl From<Text> for Content {
    fn from(text: Text) -> Self {
        Content::Text(text)
    }
}

impl From<Comment> for Content {
    fn from(comment: Comment) -> Self {
        Content::Comment(comment)
    }
}

impl From<ProcessingInstruction> for Content {
    fn from(pi: ProcessingInstruction) -> Self {
        Content::ProcessingInstruction(pi)
    }
}

impl From<EntityRef> for Content {
    fn from(entity: EntityRef) -> Self {
        Content::EntityRef(entity)
    }
}
