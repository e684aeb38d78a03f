//! Integer leaf filters.
//!
//! The filter contract is generic over its candidate type; these fixtures
//! exercise it over plain `i32`s, away from the document content model.

use std::any::Any;

use nodesieve_core::filter::{leaf_hash, Filter};

/// Accepts even integers, narrowing to themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsEven;

impl Filter for IsEven {
    type Input = i32;
    type Output = i32;

    fn narrow<'a>(&self, candidate: &'a i32) -> Option<&'a i32> {
        (candidate % 2 == 0).then_some(candidate)
    }

    fn structural_eq(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<Self>().is_some()
    }

    fn structural_hash(&self) -> u64 {
        leaf_hash(self)
    }

    fn describe(&self) -> String {
        "[IsEven]".to_string()
    }
}

/// Accepts positive integers, narrowing to themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsPositive;

impl Filter for IsPositive {
    type Input = i32;
    type Output = i32;

    fn narrow<'a>(&self, candidate: &'a i32) -> Option<&'a i32> {
        (*candidate > 0).then_some(candidate)
    }

    fn structural_eq(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<Self>().is_some()
    }

    fn structural_hash(&self) -> u64 {
        leaf_hash(self)
    }

    fn describe(&self) -> String {
        "[IsPositive]".to_string()
    }
}
