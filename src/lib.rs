//! # exif-dump
//!
//! Decode the EXIF property records embedded in images into readable
//! tag/value pairs.
//!
//! ## Quick Start
//!
//! The pipeline module handles the full read → decode flow:
//!
//! ```rust,no_run
//! use exif_dump::config::Config;
//! use exif_dump::display::{summary_line, visible_rows};
//! use exif_dump::exif::ContainerReader;
//! use exif_dump::pipeline::{collect_images, read_image};
//! use std::path::PathBuf;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load(Some("config.json".as_ref()))?;
//!
//!     for path in collect_images(&[PathBuf::from("./photos")]) {
//!         let report = read_image(&path, &ContainerReader, &config);
//!         if let Some(ref err) = report.error {
//!             eprintln!("Error reading {}: {err}", path.display());
//!             continue;
//!         }
//!         println!("{}", summary_line(&report, &config.display.date_tags));
//!         for row in visible_rows(&report.tags, &config.display.hidden_tags) {
//!             println!("\t{row}");
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Lower-Level Usage
//!
//! Records from any container decoder can be fed straight to the tag builder:
//!
//! ```rust
//! use exif_dump::exif::{build_tags, ByteOrder, PropertyRecord, TypeCode};
//!
//! let records = vec![
//!     PropertyRecord::new(0x9003, TypeCode::Ascii, b"2023:01:01 12:00:00\0".to_vec()),
//!     PropertyRecord::new(0x829D, TypeCode::Rational, vec![28, 0, 0, 0, 10, 0, 0, 0]),
//! ];
//! let tags = build_tags(&records, ByteOrder::Little);
//! assert_eq!(tags[&0x9003], "2023:01:01 12:00:00");
//! assert_eq!(tags[&0x829D], "[28/10]");
//! ```
//!
//! ## Type Rendering
//!
//! | Type | Rendering |
//! |------|-----------|
//! | ASCII | text, one trailing NUL removed |
//! | Short, Long, SLong | `[v1,v2,...]` |
//! | Rational, SRational | `[n/d,...]` |
//! | Byte, Undefined, others | `Type[declared length]` |
//!
//! ## Modules
//!
//! - [`config`]: Configuration types and loading/saving
//! - [`display`]: Presentation rules (hidden tags, capture date, unit names)
//! - [`exif`]: Record decoding, tag registry and container reading
//! - [`pipeline`]: Image collection, format detection and per-file decoding

pub mod config;
pub mod display;
pub mod exif;
pub mod pipeline;
