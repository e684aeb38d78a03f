//! Element and attribute nodes.

use super::verify;
use super::Content;
use crate::error::Result;

/// An element node: a validated name, attributes, and ordered child content.
///
/// # Example
///
/// ```
/// use nodesieve_core::content::{Attribute, Element, Text};
///
/// let element = Element::new("entry")?
///     .with_attribute(Attribute::new("id", "e1")?)
///     .with_child(Text::new("payload"));
///
/// assert_eq!(element.name(), "entry");
/// assert_eq!(element.attribute_value("id"), Some("e1"));
/// assert_eq!(element.children().len(), 1);
/// # Ok::<(), nodesieve_core::error::NodeSieveError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<Content>,
}

impl Element {
    /// Creates an element with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`NodeSieveError::InvalidName`](crate::error::NodeSieveError)
    /// if the name is empty or contains a character not allowed in names.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        verify::check_name(&name)?;
        Ok(Element {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        })
    }

    /// Returns the element's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the element's attributes, in insertion order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Returns the element's child content, in document order.
    pub fn children(&self) -> &[Content] {
        &self.children
    }

    /// Adds an attribute, replacing any existing attribute with the same
    /// name.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        match self
            .attributes
            .iter_mut()
            .find(|existing| existing.name() == attribute.name())
        {
            Some(existing) => *existing = attribute,
            None => self.attributes.push(attribute),
        }
        self
    }

    /// Appends a child node.
    pub fn with_child(mut self, child: impl Into<Content>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Returns the value of the named attribute, if present.
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name() == name)
            .map(Attribute::value)
    }
}

/// An attribute: a validated name and a value.
///
/// Attributes belong to an element but are not themselves content nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    /// Creates an attribute.
    ///
    /// # Errors
    ///
    /// Returns [`NodeSieveError::InvalidName`](crate::error::NodeSieveError)
    /// if the name is malformed.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let name = name.into();
        verify::check_name(&name)?;
        Ok(Attribute {
            name,
            value: value.into(),
        })
    }

    /// Returns the attribute's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attribute's value.
    pub fn value(&self) -> &str {
        &self.value
    }
}
