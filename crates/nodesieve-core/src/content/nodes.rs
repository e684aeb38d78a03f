//! Leaf content nodes: text, comments, processing instructions, and entity
//! references.

use super::verify;
use crate::error::Result;

/// A run of character data. Shared by the `Text` and `CData` content kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Text {
    value: String,
}

impl Text {
    /// Creates a text node.
    pub fn new(value: impl Into<String>) -> Self {
        Text {
            value: value.into(),
        }
    }

    /// Returns the character data.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A comment node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comment {
    text: String,
}

impl Comment {
    /// Creates a comment.
    ///
    /// # Errors
    ///
    /// Returns [`NodeSieveError::InvalidComment`](crate::error::NodeSieveError)
    /// if the text contains `--` or ends with `-`.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        verify::check_comment(&text)?;
        Ok(Comment { text })
    }

    /// Returns the comment text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A processing instruction: a validated target and raw data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessingInstruction {
    target: String,
    data: String,
}

impl ProcessingInstruction {
    /// Creates a processing instruction.
    ///
    /// # Errors
    ///
    /// Returns [`NodeSieveError::InvalidTarget`](crate::error::NodeSieveError)
    /// if the target is malformed or is the reserved target `xml`.
    pub fn new(target: impl Into<String>, data: impl Into<String>) -> Result<Self> {
        let target = target.into();
        verify::check_pi_target(&target)?;
        Ok(ProcessingInstruction {
            target,
            data: data.into(),
        })
    }

    /// Returns the instruction target.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the instruction data.
    pub fn data(&self) -> &str {
        &self.data
    }
}

/// An unexpanded entity reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityRef {
    name: String,
}

impl EntityRef {
    /// Creates an entity reference.
    ///
    /// # Errors
    ///
    /// Returns [`NodeSieveError::InvalidName`](crate::error::NodeSieveError)
    /// if the name is malformed.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        verify::check_name(&name)?;
        Ok(EntityRef { name })
    }

    /// Returns the referenced entity's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
