//! The negating combinator.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::Filter;

const KIND_SEED: u64 = 0x6e6f_74;

/// Inverts a filter's outcome.
///
/// Accepts exactly the candidates the wrapped filter rejects. Negation does
/// not narrow: acceptance means the operand found nothing, so there is no
/// refined type to return and the raw candidate is re-emitted. Together
/// with [`AndFilter`](super::AndFilter) and [`OrFilter`](super::OrFilter)
/// this closes the algebra: filters combine recursively with no depth limit
/// other than memory.
#[derive(Debug, Clone)]
pub struct NegateFilter<F> {
    inner: F,
}

impl<F> NegateFilter<F> {
    /// Wraps a filter, inverting its outcome.
    pub fn new(inner: F) -> Self {
        NegateFilter { inner }
    }

    /// The wrapped filter.
    pub fn inner(&self) -> &F {
        &self.inner
    }
}

impl<F> Filter for NegateFilter<F>
where
    F: Filter,
{
    type Input = F::Input;
    type Output = F::Input;

    fn narrow<'a>(&self, candidate: &'a Self::Input) -> Option<&'a Self::Output> {
        if self.inner.test(candidate) {
            None
        } else {
            Some(candidate)
        }
    }

    fn structural_eq(&self, other: &dyn Any) -> bool {
        match other.downcast_ref::<NegateFilter<F>>() {
            Some(other) => self.inner.structural_eq(&other.inner),
            None => false,
        }
    }

    fn structural_hash(&self) -> u64 {
        KIND_SEED ^ self.inner.structural_hash()
    }

    fn describe(&self) -> String {
        format!("[NegateFilter: {}]", self.inner.describe())
    }
}

impl<F: Filter> PartialEq for NegateFilter<F> {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}

impl<F: Filter> Eq for NegateFilter<F> {}

impl<F: Filter> Hash for NegateFilter<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}

impl<F: Filter> fmt::Display for NegateFilter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
