//! Call-counting filter wrapper.

use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use nodesieve_core::filter::Filter;

/// Wraps a filter and counts how often it is evaluated.
///
/// The counter is shared through an `Arc`, so a handle taken with
/// [`counter`](SpyFilter::counter) keeps reporting after the spy has moved
/// into a combinator. Counting is a deliberate breach of the contract's
/// no-side-effects rule; the spy exists to observe evaluation order in
/// tests and has no place in production filter trees.
///
/// # Example
///
/// ```
/// use nodesieve_core::content::{Content, ContentKind, Text};
/// use nodesieve_core::filter::{Filter, KindFilter};
/// use nodesieve_test::SpyFilter;
///
/// let spy = SpyFilter::new(KindFilter::of(&[ContentKind::Text]));
/// let calls = spy.counter();
/// let either = KindFilter::of(&[ContentKind::Comment]).or(spy);
///
/// // Left accepts, so the spy on the right is never consulted.
/// assert!(either.test(&Content::Text(Text::new("t"))));
/// # drop(calls);
/// ```
#[derive(Debug, Clone)]
pub struct SpyFilter<F> {
    inner: F,
    calls: Arc<AtomicUsize>,
}

impl<F> SpyFilter<F> {
    /// Wraps a filter with a fresh counter.
    pub fn new(inner: F) -> Self {
        SpyFilter {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A shared handle to the call counter.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    /// How often the spy has been evaluated so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl<F: Filter> Filter for SpyFilter<F> {
    type Input = F::Input;
    type Output = F::Output;

    fn narrow<'a>(&self, candidate: &'a F::Input) -> Option<&'a F::Output> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.narrow(candidate)
    }

    fn structural_eq(&self, other: &dyn Any) -> bool {
        match other.downcast_ref::<Self>() {
            Some(other) => self.inner.structural_eq(&other.inner),
            None => false,
        }
    }

    fn structural_hash(&self) -> u64 {
        self.inner.structural_hash()
    }

    fn describe(&self) -> String {
        format!("[SpyFilter: {}]", self.inner.describe())
    }
}
