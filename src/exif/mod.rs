//! EXIF property record decoding.
//!
//! - [`decode_value`]: render one payload according to its declared type
//! - [`build_tags`]: decode a whole record sequence into an ordered tag map
//! - [`tags`]: static registry of known tag ids
//! - [`MetadataSource`] / [`ContainerReader`]: get records out of an image file
//!
//! Decoding never fails. Short or malformed payloads lose their incomplete
//! trailing element; [`build_tags_with_diagnostics`] reports what was dropped.

mod builder;
mod decoder;
mod reader;
pub mod tags;
mod types;

pub use builder::{Diagnostic, TagMap, build_tags, build_tags_with_diagnostics};
pub use decoder::{DecodedValue, decode_value, decode_value_checked};
pub use reader::{ContainerReader, ImageMetadata, MetadataSource, parse_tiff_records};
pub use tags::{TagCount, TagDescriptor, tag_name};
pub use types::{ByteOrder, PropertyRecord, TypeCode};
