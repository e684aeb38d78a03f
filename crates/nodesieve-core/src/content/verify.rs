//! Well-formedness checks for names and character data.
//!
//! A trimmed-down rendition of the XML 1.0 rules: enough to reject the
//! inputs that would make a document unserializable, without dragging in the
//! full Unicode production tables.

use crate::error::{NodeSieveError, Result};

/// Checks an element, attribute, or entity name.
pub(crate) fn check_name(name: &str) -> Result<()> {
    if let Some(reason) = name_problem(name) {
        return Err(NodeSieveError::InvalidName {
            name: name.to_string(),
            reason,
        });
    }
    Ok(())
}

/// Checks a comment's text. `--` never appears inside a well-formed comment,
/// and a trailing `-` would produce `--->` on output.
pub(crate) fn check_comment(text: &str) -> Result<()> {
    if text.contains("--") {
        return Err(NodeSieveError::InvalidComment {
            reason: "comment must not contain \"--\"",
        });
    }
    if text.ends_with('-') {
        return Err(NodeSieveError::InvalidComment {
            reason: "comment must not end with \"-\"",
        });
    }
    Ok(())
}

/// Checks a processing-instruction target. The target `xml` in any casing is
/// reserved for the document declaration.
pub(crate) fn check_pi_target(target: &str) -> Result<()> {
    if let Some(reason) = name_problem(target) {
        return Err(NodeSieveError::InvalidTarget {
            target: target.to_string(),
            reason,
        });
    }
    if target.eq_ignore_ascii_case("xml") {
        return Err(NodeSieveError::InvalidTarget {
            target: target.to_string(),
            reason: "target \"xml\" is reserved",
        });
    }
    Ok(())
}

fn name_problem(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Some("name is empty");
    };
    if !is_name_start(first) {
        return Some("name must start with a letter, underscore, or colon");
    }
    if !chars.all(is_name_char) {
        return Some("name contains a character not allowed in names");
    }
    None
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == ':'
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_numeric() || c == '-' || c == '.'
}
