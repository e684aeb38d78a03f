//! The disjunctive combinator.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::Filter;

/// Folded into the hash so an `or` tree never collides with an `and` tree
/// over the same operands.
const KIND_SEED: u64 = 0x6f72;

/// Combines two filters with logical **or** semantics.
///
/// Unlike [`AndFilter`](super::AndFilter), `or` does not chain narrowed
/// values: both operands evaluate the *original* candidate, since only one
/// of them needs to match. `left` is evaluated first; if it accepts, `right`
/// is never evaluated. The operands must agree on their narrowed type, and
/// the successful operand's narrowed value is the combined result.
///
/// Equality and hashing follow the same commutative rule as `and`, with
/// wrapping addition as the (symmetric) hash combiner.
///
/// # Example
///
/// ```
/// use nodesieve_core::content::{Comment, Content, ContentKind, Text};
/// use nodesieve_core::filter::{Filter, KindFilter, OrFilter};
///
/// let notes = OrFilter::new(
///     KindFilter::of(&[ContentKind::Comment]),
///     KindFilter::of(&[ContentKind::Text]),
/// );
///
/// assert!(notes.test(&Content::Comment(Comment::new("aside")?)));
/// assert!(notes.test(&Content::Text(Text::new("body"))));
/// assert!(!notes.test(&Content::CData(Text::new("raw"))));
/// # Ok::<(), nodesieve_core::error::NodeSieveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OrFilter<L, R> {
    left: L,
    right: R,
}

impl<L, R> OrFilter<L, R> {
    /// Combines two filters. Either operand accepting accepts the
    /// candidate.
    pub fn new(left: L, right: R) -> Self {
        OrFilter { left, right }
    }

    /// The left operand.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// The right operand.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Filter for OrFilter<L, R>
where
    L: Filter,
    R: Filter<Input = L::Input, Output = L::Output>,
{
    type Input = L::Input;
    type Output = L::Output;

    fn narrow<'a>(&self, candidate: &'a Self::Input) -> Option<&'a Self::Output> {
        self.left
            .narrow(candidate)
            .or_else(|| self.right.narrow(candidate))
    }

    fn structural_eq(&self, other: &dyn Any) -> bool {
        if let Some(other) = other.downcast_ref::<OrFilter<L, R>>() {
            if (self.left.structural_eq(&other.left) && self.right.structural_eq(&other.right))
                || (self.left.structural_eq(&other.right) && self.right.structural_eq(&other.left))
            {
                return true;
            }
        }
        // The swapped operand order is a distinct type when L != R.
        if let Some(other) = other.downcast_ref::<OrFilter<R, L>>() {
            return (self.left.structural_eq(&other.right)
                && self.right.structural_eq(&other.left))
                || (self.left.structural_eq(&other.left)
                    && self.right.structural_eq(&other.right));
        }
        false
    }

    fn structural_hash(&self) -> u64 {
        KIND_SEED
            ^ self
                .left
                .structural_hash()
                .wrapping_add(self.right.structural_hash())
    }

    fn describe(&self) -> String {
        format!(
            "[OrFilter: {}, {}]",
            self.left.describe(),
            self.right.describe()
        )
    }
}

impl<L, R> PartialEq for OrFilter<L, R>
where
    L: Filter,
    R: Filter<Input = L::Input, Output = L::Output>,
{
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}

impl<L, R> Eq for OrFilter<L, R>
where
    L: Filter,
    R: Filter<Input = L::Input, Output = L::Output>,
{
}

impl<L, R> Hash for OrFilter<L, R>
where
    L: Filter,
    R: Filter<Input = L::Input, Output = L::Output>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}

impl<L, R> fmt::Display for OrFilter<L, R>
where
    L: Filter,
    R: Filter<Input = L::Input, Output = L::Output>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
