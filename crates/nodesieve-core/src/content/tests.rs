//! Tests for the content model and its construction-time validation.

use super::*;
use crate::error::NodeSieveError;

#[test]
fn element_valid_names() {
    for name in ["entry", "_private", "ns:local", "a-b.c2"] {
        assert!(Element::new(name).is_ok(), "expected {name:?} to be valid");
    }
}

#[test]
fn element_rejects_empty_name() {
    assert!(matches!(
        Element::new(""),
        Err(NodeSieveError::InvalidName { .. })
    ));
}

#[test]
fn element_rejects_leading_digit() {
    assert!(matches!(
        Element::new("1st"),
        Err(NodeSieveError::InvalidName { .. })
    ));
}

#[test]
fn element_rejects_embedded_space() {
    assert!(matches!(
        Element::new("two words"),
        Err(NodeSieveError::InvalidName { .. })
    ));
}

#[test]
fn attribute_replaces_same_name() {
    let element = Element::new("entry")
        .unwrap()
        .with_attribute(Attribute::new("id", "first").unwrap())
        .with_attribute(Attribute::new("id", "second").unwrap());
    assert_eq!(element.attributes().len(), 1);
    assert_eq!(element.attribute_value("id"), Some("second"));
}

#[test]
fn attribute_lookup_misses() {
    let element = Element::new("entry").unwrap();
    assert_eq!(element.attribute_value("id"), None);
}

#[test]
fn comment_rejects_double_hyphen() {
    assert!(matches!(
        Comment::new("a -- b"),
        Err(NodeSieveError::InvalidComment { .. })
    ));
}

#[test]
fn comment_rejects_trailing_hyphen() {
    assert!(matches!(
        Comment::new("trailing-"),
        Err(NodeSieveError::InvalidComment { .. })
    ));
}

#[test]
fn pi_rejects_reserved_target() {
    for target in ["xml", "XML", "Xml"] {
        assert!(matches!(
            ProcessingInstruction::new(target, ""),
            Err(NodeSieveError::InvalidTarget { .. })
        ));
    }
}

#[test]
fn pi_rejects_malformed_target() {
    assert!(matches!(
        ProcessingInstruction::new("9pins", ""),
        Err(NodeSieveError::InvalidTarget { .. })
    ));
}

#[test]
fn kind_reports_every_variant() {
    let nodes: Vec<Content> = vec![
        Element::new("e").unwrap().into(),
        Text::new("t").into(),
        Content::CData(Text::new("c")),
        Comment::new("note").unwrap().into(),
        ProcessingInstruction::new("app", "data").unwrap().into(),
        EntityRef::new("amp").unwrap().into(),
    ];
    let kinds: Vec<ContentKind> = nodes.iter().map(Content::kind).collect();
    assert_eq!(kinds, ContentKind::ALL.to_vec());
}

#[test]
fn kind_bits_are_distinct() {
    let mut seen = 0u8;
    for kind in ContentKind::ALL {
        assert_eq!(seen & kind.bit(), 0, "duplicate bit for {kind:?}");
        seen |= kind.bit();
    }
}

#[test]
fn as_text_covers_cdata() {
    let text = Content::Text(Text::new("a"));
    let cdata = Content::CData(Text::new("b"));
    let comment = Content::Comment(Comment::new("c").unwrap());
    assert_eq!(text.as_text().map(Text::value), Some("a"));
    assert_eq!(cdata.as_text().map(Text::value), Some("b"));
    assert!(comment.as_text().is_none());
}
