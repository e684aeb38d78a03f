//! Pass-through leaf filter.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::{leaf_hash, Filter};

/// Accepts every candidate of type `T`, unchanged.
///
/// Useful as the identity of the algebra: a neutral stage in an `and`
/// chain, or (negated) a reject-everything leaf.
pub struct PassFilter<T> {
    _marker: PhantomData<fn(&T)>,
}

impl<T> PassFilter<T> {
    /// A filter that accepts everything.
    pub fn new() -> Self {
        PassFilter {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for PassFilter<T> {
    fn default() -> Self {
        PassFilter::new()
    }
}

impl<T> Clone for PassFilter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PassFilter<T> {}

impl<T> fmt::Debug for PassFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PassFilter")
    }
}

impl<T> PartialEq for PassFilter<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for PassFilter<T> {}

impl<T> Hash for PassFilter<T> {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

impl<T: 'static> Filter for PassFilter<T> {
    type Input = T;
    type Output = T;

    fn narrow<'a>(&self, candidate: &'a T) -> Option<&'a T> {
        Some(candidate)
    }

    fn structural_eq(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<Self>().is_some()
    }

    fn structural_hash(&self) -> u64 {
        leaf_hash(self)
    }

    fn describe(&self) -> String {
        "[PassFilter]".to_string()
    }
}

impl<T: 'static> fmt::Display for PassFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
