//! nodesieve - composable typed node filters
//!
//! A filter is an immutable predicate-with-narrowing over the nodes of a
//! tree-structured document: it rejects a candidate or accepts it while
//! refining its type. Filters combine with `and`, `or`, and `negate` into
//! new filters that are themselves comparable, hashable, first-class
//! values.
//!
//! # Example
//!
//! ```rust
//! use nodesieve::prelude::*;
//!
//! let doc = Element::new("feed")?
//!     .with_child(Element::new("entry")?)
//!     .with_child(Comment::new("generated")?)
//!     .with_child(Element::new("entry")?);
//!
//! let entries = filters::element().and(filters::name("entry")?);
//! let count = doc.children().iter().filter(|c| entries.test(c)).count();
//! assert_eq!(count, 2);
//! # Ok::<(), nodesieve::NodeSieveError>(())
//! ```

// Content model
pub use nodesieve_core::content::{
    Attribute, Comment, Content, ContentKind, Element, EntityRef, ProcessingInstruction, Text,
};

// Filter contract and combinators
pub use nodesieve_core::filter::{
    leaf_hash, AndFilter, BoxedFilter, ElementFilter, Filter, KindFilter, NameFilter,
    NegateFilter, OrFilter, PassFilter, TextFilter,
};

// Errors
pub use nodesieve_core::error::{NodeSieveError, Result};

/// Convenience constructors for the shipped leaf filters.
///
/// # Example
///
/// ```rust
/// use nodesieve::prelude::*;
///
/// let visible = filters::kinds(&[ContentKind::Element, ContentKind::Text]);
/// let node: Content = Text::new("body").into();
/// assert!(visible.test(&node));
/// ```
pub mod filters {
    use super::{ContentKind, ElementFilter, KindFilter, NameFilter, PassFilter, Result, TextFilter};

    /// Matches any element, narrowing to it.
    pub fn element() -> ElementFilter {
        ElementFilter::new()
    }

    /// Matches elements with the given name.
    pub fn element_named(name: impl Into<String>) -> Result<ElementFilter> {
        ElementFilter::named(name)
    }

    /// Refines an already-narrowed element by name; the second stage of an
    /// `and` chain.
    pub fn name(name: impl Into<String>) -> Result<NameFilter> {
        NameFilter::new(name)
    }

    /// Matches text and CDATA content, narrowing to the text payload.
    pub fn text() -> TextFilter {
        TextFilter::new()
    }

    /// Matches content of any of the given kinds.
    pub fn kinds(kinds: &[ContentKind]) -> KindFilter {
        KindFilter::of(kinds)
    }

    /// Matches content of every kind.
    pub fn any_content() -> KindFilter {
        KindFilter::any()
    }

    /// Accepts every candidate of type `T`.
    pub fn pass<T: 'static>() -> PassFilter<T> {
        PassFilter::new()
    }
}

pub mod prelude {
    //! Single-line import for the common surface.
    pub use super::filters;
    pub use super::{
        Attribute, BoxedFilter, Comment, Content, ContentKind, Element, Filter, NodeSieveError,
        Text,
    };
}
