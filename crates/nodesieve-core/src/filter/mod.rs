//! Composable node filters.
//!
//! A [`Filter`] is an immutable predicate-with-narrowing: given a candidate
//! value it either rejects it or accepts it, and on acceptance returns the
//! candidate refined to the filter's output type. Filters compose into new
//! filters with [`AndFilter`], [`OrFilter`], and [`NegateFilter`], and the
//! composed values are themselves comparable, hashable, and shareable.
//!
//! # Overview
//!
//! - **Staged narrowing**: `and` feeds the left filter's narrowed output to
//!   the right filter, so type information flows left to right through a
//!   chain. `or` and `negate` always see the raw candidate.
//! - **Commutative equality**: `and`/`or` filters compare equal under
//!   operand swap, and hash accordingly, so logically identical trees
//!   deduplicate in hash-based collections.
//! - **Erasure at the edges**: composition is fully generic; [`BoxedFilter`]
//!   erases a finished filter behind an `Arc` for runtime-assembled trees,
//!   operand sharing, and collections.
//!
//! # Example
//!
//! ```
//! use nodesieve_core::content::{Content, Element};
//! use nodesieve_core::filter::{ElementFilter, Filter, NameFilter};
//!
//! let entries = ElementFilter::new().and(NameFilter::new("entry")?);
//!
//! let entry: Content = Element::new("entry")?.into();
//! let other: Content = Element::new("other")?.into();
//! assert!(entries.test(&entry));
//! assert!(!entries.test(&other));
//! # Ok::<(), nodesieve_core::error::NodeSieveError>(())
//! ```

mod and;
mod boxed;
mod element;
mod kind;
mod negate;
mod or;
mod pass;
mod text;


pub use and::AndFilter;
pub use boxed::BoxedFilter;
pub use element::{ElementFilter, NameFilter};
pub use kind::KindFilter;
pub use negate::NegateFilter;
pub use or::OrFilter;
pub use pass::PassFilter;
pub use text::TextFilter;

use std::any::{Any, TypeId};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A typed predicate over candidate values, with narrowing.
///
/// Implementers must be total and side-effect-free: evaluation never fails
/// for any candidate (a mismatched shape yields `None`, not an error), and
/// the same filter always produces the same outcome for the same candidate.
/// `test(c)` must agree with `narrow(c).is_some()`; the default `test`
/// guarantees this.
///
/// Structural identity is carried by [`structural_eq`](Filter::structural_eq)
/// and [`structural_hash`](Filter::structural_hash) rather than by
/// `PartialEq` alone, because commutative equality must hold across
/// *differently typed* combinators: `AndFilter<P, Q>` and `AndFilter<Q, P>`
/// are distinct Rust types, and only a `&dyn Any` comparison can bridge
/// them. The `PartialEq`/`Hash` impls on the shipped filter types delegate
/// to the structural operations, so the two never disagree.
pub trait Filter: Any + Send + Sync {
    /// The candidate type this filter evaluates.
    type Input;

    /// The narrowed type produced on acceptance.
    type Output;

    /// Evaluates the candidate, returning the narrowed value on acceptance
    /// and `None` on rejection.
    fn narrow<'a>(&self, candidate: &'a Self::Input) -> Option<&'a Self::Output>;

    /// Pure predicate form of [`narrow`](Filter::narrow).
    fn test(&self, candidate: &Self::Input) -> bool {
        self.narrow(candidate).is_some()
    }

    /// Structural equality, usable across arbitrary filter types.
    ///
    /// Returns true iff `other` is a filter of equivalent shape: same
    /// combinator kind and equal operands, where `and`/`or` operand pairs
    /// match in either order.
    fn structural_eq(&self, other: &dyn Any) -> bool;

    /// A hash consistent with [`structural_eq`](Filter::structural_eq):
    /// structurally equal filters hash equal, including swapped `and`/`or`
    /// operand pairs.
    fn structural_hash(&self) -> u64;

    /// Human-readable nested representation, for diagnostics only.
    fn describe(&self) -> String;

    /// Chains `other` after this filter with logical **and** semantics.
    ///
    /// The combined filter accepts iff this filter accepts the candidate
    /// and `other` accepts the value this filter narrowed it to.
    fn and<G>(self, other: G) -> AndFilter<Self, G>
    where
        Self: Sized,
        G: Filter<Input = Self::Output>,
    {
        AndFilter::new(self, other)
    }

    /// Combines this filter with `other` under logical **or** semantics.
    ///
    /// Both filters evaluate the raw candidate; the combined filter accepts
    /// iff either accepts.
    fn or<G>(self, other: G) -> OrFilter<Self, G>
    where
        Self: Sized,
        G: Filter<Input = Self::Input, Output = Self::Output>,
    {
        OrFilter::new(self, other)
    }

    /// Inverts this filter's outcome. The negation accepts exactly the
    /// candidates this filter rejects, re-emitting them unnarrowed.
    fn negate(self) -> NegateFilter<Self>
    where
        Self: Sized,
    {
        NegateFilter::new(self)
    }

    /// Erases this filter behind a shareable, collection-ready handle.
    fn boxed(self) -> BoxedFilter<Self::Input, Self::Output>
    where
        Self: Sized,
        Self::Input: 'static,
        Self::Output: 'static,
    {
        BoxedFilter::new(self)
    }
}

/// Hashes a leaf filter's identity: its concrete type plus its state.
///
/// Intended for [`Filter::structural_hash`] implementations on leaf
/// filters, in this crate and in external ones. Folding in the `TypeId`
/// keeps distinct leaf types with identical state from colliding.
pub fn leaf_hash<F: Hash + Any>(filter: &F) -> u64 {
    let mut hasher = DefaultHasher::new();
    TypeId::of::<F>().hash(&mut hasher);
    filter.hash(&mut hasher);
    hasher.finish()
}
