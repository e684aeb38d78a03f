//! Type-erased, shareable filter handles.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::{AndFilter, Filter, NegateFilter, OrFilter};

/// A reference-counted, type-erased [`Filter`] handle.
///
/// Generic composition produces a new concrete type per combination, which
/// is ideal for statically assembled pipelines but useless for trees built
/// at runtime. `BoxedFilter` erases a finished filter behind an `Arc`:
/// handles are cheap to clone, the same sub-tree can appear as an operand
/// of any number of parent combinators, and filters of the same
/// input/output types share one handle type, so they can live together in
/// hash-based collections. Filter trees are built bottom-up and never
/// reference an ancestor, so plain `Arc` sharing suffices — no cycles, no
/// weak references.
///
/// Two handles are equal iff their inner filters are structurally equal;
/// sharing is irrelevant to identity.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
///
/// use nodesieve_core::content::{Content, ContentKind};
/// use nodesieve_core::filter::{BoxedFilter, Filter, KindFilter};
///
/// let comments = KindFilter::of(&[ContentKind::Comment]).boxed();
/// let text = KindFilter::of(&[ContentKind::Text]).boxed();
///
/// // Swapped operands build the same logical filter...
/// let a = comments.clone().or(text.clone());
/// let b = text.or(comments);
///
/// // ...so a set keeps only one of them.
/// let mut filters: HashSet<BoxedFilter<Content, Content>> = HashSet::new();
/// filters.insert(a);
/// filters.insert(b);
/// assert_eq!(filters.len(), 1);
/// ```
pub struct BoxedFilter<I: 'static, O: 'static> {
    inner: Arc<dyn Filter<Input = I, Output = O>>,
}

impl<I: 'static, O: 'static> BoxedFilter<I, O> {
    /// Erases a filter behind a shareable handle.
    pub fn new<F>(filter: F) -> Self
    where
        F: Filter<Input = I, Output = O>,
    {
        BoxedFilter {
            inner: Arc::new(filter),
        }
    }

    /// Chains `other` after this filter with logical **and** semantics,
    /// re-boxing the result.
    pub fn and<P: 'static>(self, other: BoxedFilter<O, P>) -> BoxedFilter<I, P> {
        BoxedFilter::new(AndFilter::new(self, other))
    }

    /// Combines this filter with `other` under logical **or** semantics,
    /// re-boxing the result.
    pub fn or(self, other: BoxedFilter<I, O>) -> BoxedFilter<I, O> {
        BoxedFilter::new(OrFilter::new(self, other))
    }

    /// Inverts this filter's outcome, re-boxing the result.
    pub fn negate(self) -> BoxedFilter<I, I> {
        BoxedFilter::new(NegateFilter::new(self))
    }
}

impl<I: 'static, O: 'static> Clone for BoxedFilter<I, O> {
    fn clone(&self) -> Self {
        BoxedFilter {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I: 'static, O: 'static> Filter for BoxedFilter<I, O> {
    type Input = I;
    type Output = O;

    fn narrow<'a>(&self, candidate: &'a I) -> Option<&'a O> {
        self.inner.narrow(candidate)
    }

    fn structural_eq(&self, other: &dyn Any) -> bool {
        match other.downcast_ref::<Self>() {
            Some(other) => {
                let other_inner: &dyn Any = &*other.inner;
                self.inner.structural_eq(other_inner)
            }
            None => false,
        }
    }

    fn structural_hash(&self) -> u64 {
        self.inner.structural_hash()
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }
}

impl<I: 'static, O: 'static> PartialEq for BoxedFilter<I, O> {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}

impl<I: 'static, O: 'static> Eq for BoxedFilter<I, O> {}

impl<I: 'static, O: 'static> Hash for BoxedFilter<I, O> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}

impl<I: 'static, O: 'static> fmt::Debug for BoxedFilter<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoxedFilter").field(&self.describe()).finish()
    }
}

impl<I: 'static, O: 'static> fmt::Display for BoxedFilter<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
