use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use super::decoder::decode_value_checked;
use super::tags::{self, TagCount};
use super::types::{ByteOrder, PropertyRecord, TypeCode};

/// Decoded tag values keyed by tag id, in first-seen order.
pub type TagMap = IndexMap<u16, String>;

/// Something odd about a record, reported in lint mode.
///
/// None of these stop decoding; they only explain what was dropped or
/// where a file disagrees with the tag registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The payload ended in a partial element that was not rendered.
    TrailingBytes {
        tag: u16,
        type_code: TypeCode,
        dropped: usize,
    },
    /// The declared byte length does not match the payload that was supplied.
    LengthMismatch {
        tag: u16,
        declared: u32,
        actual: usize,
    },
    /// The tag appeared more than once; the later value was kept.
    DuplicateTag { tag: u16 },
    /// The record type differs from the registry's expected type.
    UnexpectedType {
        tag: u16,
        expected: TypeCode,
        found: TypeCode,
    },
    /// The element count differs from the registry's expected count.
    UnexpectedCount {
        tag: u16,
        expected: u32,
        found: u32,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrailingBytes { tag, type_code, dropped } => write!(
                f,
                "{}: dropped {dropped} trailing byte(s) of {type_code} payload",
                tags::tag_name(*tag)
            ),
            Self::LengthMismatch { tag, declared, actual } => write!(
                f,
                "{}: declared {declared} byte(s) but payload has {actual}",
                tags::tag_name(*tag)
            ),
            Self::DuplicateTag { tag } => {
                write!(f, "{}: duplicate tag, later value kept", tags::tag_name(*tag))
            }
            Self::UnexpectedType { tag, expected, found } => write!(
                f,
                "{}: expected {expected}, found {found}",
                tags::tag_name(*tag)
            ),
            Self::UnexpectedCount { tag, expected, found } => write!(
                f,
                "{}: expected {expected} element(s), found {found}",
                tags::tag_name(*tag)
            ),
        }
    }
}

/// Decode every record into a tag map.
///
/// Records are decoded with their own type code. Unknown tag ids are kept.
/// When a tag id repeats, the later record's value replaces the earlier one.
///
/// # Example
///
/// ```rust
/// use exif_dump::exif::{build_tags, ByteOrder, PropertyRecord, TypeCode};
///
/// let records = vec![
///     PropertyRecord::new(0x010F, TypeCode::Ascii, b"Canon\0".to_vec()),
///     PropertyRecord::new(0x0112, TypeCode::Short, vec![0x01, 0x00]),
/// ];
/// let tags = build_tags(&records, ByteOrder::Little);
/// assert_eq!(tags[&0x010F], "Canon");
/// assert_eq!(tags[&0x0112], "[1]");
/// ```
pub fn build_tags(records: &[PropertyRecord], order: ByteOrder) -> TagMap {
    build(records, order, None)
}

/// Same as [`build_tags`], also collecting [`Diagnostic`]s for each record.
pub fn build_tags_with_diagnostics(
    records: &[PropertyRecord],
    order: ByteOrder,
) -> (TagMap, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let tags = build(records, order, Some(&mut diagnostics));
    (tags, diagnostics)
}

fn build(
    records: &[PropertyRecord],
    order: ByteOrder,
    mut diagnostics: Option<&mut Vec<Diagnostic>>,
) -> TagMap {
    let mut tags = TagMap::with_capacity(records.len());

    for record in records {
        let decoded = decode_value_checked(
            record.type_code,
            &record.payload,
            record.byte_length,
            order,
        );

        if let Some(found) = diagnostics.as_deref_mut() {
            lint_record(record, decoded.dropped_bytes, found);
            if tags.contains_key(&record.tag_id) {
                found.push(Diagnostic::DuplicateTag { tag: record.tag_id });
            }
        }

        if let Some(previous) = tags.insert(record.tag_id, decoded.text) {
            log::debug!(
                "Tag {} repeated, replacing {previous:?}",
                tags::tag_name(record.tag_id)
            );
        }
    }

    tags
}

fn lint_record(record: &PropertyRecord, dropped: usize, found: &mut Vec<Diagnostic>) {
    let tag = record.tag_id;

    if dropped > 0 {
        found.push(Diagnostic::TrailingBytes {
            tag,
            type_code: record.type_code,
            dropped,
        });
    }

    if record.byte_length as usize != record.payload.len() {
        found.push(Diagnostic::LengthMismatch {
            tag,
            declared: record.byte_length,
            actual: record.payload.len(),
        });
    }

    let Some(desc) = tags::lookup(tag) else {
        return;
    };

    if let Some(expected) = desc.expected_type {
        if expected != record.type_code {
            found.push(Diagnostic::UnexpectedType {
                tag,
                expected,
                found: record.type_code,
            });
            // Counts only make sense against the expected element width.
            return;
        }
    }

    if let (TagCount::Fixed(expected), Some(width)) =
        (desc.expected_count, record.type_code.element_width())
    {
        let count = (record.payload.len() / width) as u32;
        if count != expected {
            found.push(Diagnostic::UnexpectedCount {
                tag,
                expected,
                found: count,
            });
        }
    }
}
