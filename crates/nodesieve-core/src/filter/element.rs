//! Element leaf filters.

use std::any::Any;
use std::fmt;

use super::{leaf_hash, Filter};
use crate::content::{verify, Content, Element};
use crate::error::Result;

/// Matches element content, optionally constrained by name, narrowing to
/// [`Element`].
///
/// # Example
///
/// ```
/// use nodesieve_core::content::{Content, Element, Text};
/// use nodesieve_core::filter::{ElementFilter, Filter};
///
/// let elements = ElementFilter::new();
/// let entries = ElementFilter::named("entry")?;
///
/// let entry: Content = Element::new("entry")?.into();
/// let text: Content = Text::new("loose").into();
///
/// assert!(elements.test(&entry));
/// assert!(entries.test(&entry));
/// assert!(!elements.test(&text));
/// # Ok::<(), nodesieve_core::error::NodeSieveError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ElementFilter {
    name: Option<String>,
}

impl ElementFilter {
    /// Matches any element.
    pub fn new() -> Self {
        ElementFilter { name: None }
    }

    /// Matches elements with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`NodeSieveError::InvalidName`](crate::error::NodeSieveError)
    /// if the name is malformed; a filter that can never match anything is
    /// almost certainly an assembly bug.
    pub fn named(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        verify::check_name(&name)?;
        Ok(ElementFilter { name: Some(name) })
    }
}

impl Filter for ElementFilter {
    type Input = Content;
    type Output = Element;

    fn narrow<'a>(&self, candidate: &'a Content) -> Option<&'a Element> {
        let element = candidate.as_element()?;
        match &self.name {
            Some(name) if element.name() != name => None,
            _ => Some(element),
        }
    }

    fn structural_eq(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<Self>().is_some_and(|other| self == other)
    }

    fn structural_hash(&self) -> u64 {
        leaf_hash(self)
    }

    fn describe(&self) -> String {
        match &self.name {
            Some(name) => format!("[ElementFilter: name {name:?}]"),
            None => "[ElementFilter: *]".to_string(),
        }
    }
}

impl fmt::Display for ElementFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Refines an already-narrowed element by name.
///
/// The input type is [`Element`], not [`Content`]: a `NameFilter` is meant
/// to run as the second stage of an `and` chain, against the element the
/// first stage produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameFilter {
    name: String,
}

impl NameFilter {
    /// Matches elements with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`NodeSieveError::InvalidName`](crate::error::NodeSieveError)
    /// if the name is malformed.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        verify::check_name(&name)?;
        Ok(NameFilter { name })
    }

    /// The name this filter matches.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Filter for NameFilter {
    type Input = Element;
    type Output = Element;

    fn narrow<'a>(&self, candidate: &'a Element) -> Option<&'a Element> {
        (candidate.name() == self.name).then_some(candidate)
    }

    fn structural_eq(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<Self>().is_some_and(|other| self == other)
    }

    fn structural_hash(&self) -> u64 {
        leaf_hash(self)
    }

    fn describe(&self) -> String {
        format!("[NameFilter: {:?}]", self.name)
    }
}

impl fmt::Display for NameFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
