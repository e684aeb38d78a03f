//! nodesieve core - content model and composable node filters
//!
//! This crate provides the fundamental abstractions for nodesieve:
//! - A minimal tree-structured content model (elements, text, comments,
//!   processing instructions, entity references)
//! - The [`Filter`] contract: typed predicates that narrow a candidate on
//!   acceptance
//! - Combinators (`and`, `or`, `negate`) that compose filters into new
//!   first-class filters with commutative structural equality
//! - [`BoxedFilter`] handles for runtime composition, operand sharing, and
//!   hash-based collections
//!
//! Filters hold no mutable state and perform no I/O; a filter tree of any
//! depth may be evaluated concurrently from any number of threads.

pub mod content;
pub mod error;
pub mod filter;

pub use content::{
    Attribute, Comment, Content, ContentKind, Element, EntityRef, ProcessingInstruction, Text,
};
pub use error::{NodeSieveError, Result};
pub use filter::{
    AndFilter, BoxedFilter, ElementFilter, Filter, KindFilter, NameFilter, NegateFilter, OrFilter,
    PassFilter, TextFilter,
};
