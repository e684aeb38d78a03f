//! The conjunctive combinator.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::Filter;

/// Folded into the hash so an `and` tree never collides with an `or` tree
/// over the same operands.
const KIND_SEED: u64 = 0x616e_64;

/// Chains two filters with logical **and** semantics.
///
/// Evaluation is a staged narrowing pipeline, not a boolean conjunction
/// over the raw candidate: `left` narrows the candidate first, and `right`
/// evaluates the *narrowed* value. If `left` rejects, `right` is never
/// evaluated. This is what lets a refinement filter such as
/// [`NameFilter`](super::NameFilter) take an already-narrowed
/// [`Element`](crate::content::Element) as its input.
///
/// Equality treats the operand pair as unordered — logical **and** is
/// commutative even though the narrowing pipeline is not — and the hash
/// combines the operand hashes with XOR, which is invariant under swap.
///
/// # Example
///
/// ```
/// use nodesieve_core::content::{Content, Element};
/// use nodesieve_core::filter::{AndFilter, ElementFilter, Filter, NameFilter};
///
/// let entries = AndFilter::new(ElementFilter::new(), NameFilter::new("entry")?);
///
/// let entry: Content = Element::new("entry")?.into();
/// assert_eq!(entries.narrow(&entry).map(|e| e.name()), Some("entry"));
/// # Ok::<(), nodesieve_core::error::NodeSieveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AndFilter<L, R> {
    left: L,
    right: R,
}

impl<L, R> AndFilter<L, R> {
    /// Combines two filters. `right` evaluates `left`'s narrowed output.
    pub fn new(left: L, right: R) -> Self {
        AndFilter { left, right }
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

impl<L, R> Filter for AndFilter<L, R>
where
    L: Filter,
    R: Filter<Input = L::Output>,
{
    type Input = L::Input;
    type Output = R::Output;

    fn narrow<'a>(&self, candidate: &'a Self::Input) -> Option<&'a Self::Output> {
        let narrowed = self.left.narrow(candidate)?;
        self.right.narrow(narrowed)
    }

    fn structural_eq(&self, other: &dyn Any) -> bool {
        if let Some(other) = other.downcast_ref::<AndFilter<L, R>>() {
            if (self.left.structural_eq(&other.left) && self.right.structural_eq(&other.right))
                || (self.left.structural_eq(&other.right) && self.right.structural_eq(&other.left))
            {
                return true;
            }
        }
        // The swapped operand order is a distinct type when L != R.
        if let Some(other) = other.downcast_ref::<AndFilter<R, L>>() {
            return (self.left.structural_eq(&other.right)
                && self.right.structural_eq(&other.left))
                || (self.left.structural_eq(&other.left)
                    && self.right.structural_eq(&other.right));
        }
        false
    }

    fn structural_hash(&self) -> u64 {
        KIND_SEED ^ self.left.structural_hash() ^ self.right.structural_hash()
    }

    fn describe(&self) -> String {
        format!(
            "[AndFilter: {}, {}]",
            self.left.describe(),
            self.right.describe()
        )
    }
}

impl<L, R> PartialEq for AndFilter<L, R>
where
    L: Filter,
    R: Filter<Input = L::Output>,
{
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}

impl<L, R> Eq for AndFilter<L, R>
where
    L: Filter,
    R: Filter<Input = L::Output>,
{
}

impl<L, R> Hash for AndFilter<L, R>
where
    L: Filter,
    R: Filter<Input = L::Output>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}

impl<L, R> fmt::Display for AndFilter<L, R>
where
    L: Filter,
    R: Filter<Input = L::Output>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
