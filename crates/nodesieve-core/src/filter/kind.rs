//! Content-kind mask filter.

use std::any::Any;
use std::fmt;

use super::{leaf_hash, Filter};
use crate::content::{Content, ContentKind};

/// Matches content whose kind is in a mask, passing it through unnarrowed.
///
/// This is the glue for heterogeneous alternatives: where the typed leaf
/// filters narrow to a specific payload, a `KindFilter` stays at the
/// [`Content`] level, so kinds with nothing in common can still be
/// `or`-combined.
///
/// # Example
///
/// ```
/// use nodesieve_core::content::{Comment, Content, ContentKind, Element};
/// use nodesieve_core::filter::{Filter, KindFilter};
///
/// let visible = KindFilter::of(&[ContentKind::Element, ContentKind::Text]);
///
/// assert!(visible.test(&Content::Element(Element::new("entry")?)));
/// assert!(!visible.test(&Content::Comment(Comment::new("aside")?)));
/// # Ok::<(), nodesieve_core::error::NodeSieveError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KindFilter {
    mask: u8,
}

impl KindFilter {
    /// Matches content of any of the given kinds.
    pub fn of(kinds: &[ContentKind]) -> Self {
        KindFilter {
            mask: kinds.iter().fold(0, |mask, kind| mask | kind.bit()),
        }
    }

    /// Matches content of every kind.
    pub fn any() -> Self {
        KindFilter::of(&ContentKind::ALL)
    }

    /// Whether this filter's mask includes the given kind.
    pub fn includes(&self, kind: ContentKind) -> bool {
        self.mask & kind.bit() != 0
    }
}

impl Filter for KindFilter {
    type Input = Content;
    type Output = Content;

    fn narrow<'a>(&self, candidate: &'a Content) -> Option<&'a Content> {
        self.includes(candidate.kind()).then_some(candidate)
    }

    fn structural_eq(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<Self>().is_some_and(|other| self == other)
    }

    fn structural_hash(&self) -> u64 {
        leaf_hash(self)
    }

    fn describe(&self) -> String {
        let kinds: Vec<String> = ContentKind::ALL
            .iter()
            .filter(|kind| self.includes(**kind))
            .map(|kind| format!("{kind:?}"))
            .collect();
        format!("[KindFilter: {}]", kinds.join("|"))
    }
}

impl fmt::Display for KindFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
