//! Presentation rules for decoded tags.
//!
//! Decoding keeps every tag; these helpers decide what a reader sees.

use std::borrow::Cow;

use crate::exif::tags::{
    TAG_CHROMINANCE_TABLE, TAG_DATE_TIME, TAG_EXIF_DT_DIGITIZED, TAG_EXIF_DT_ORIG,
    TAG_LUMINANCE_TABLE, TAG_RESOLUTION_UNIT, TAG_THUMBNAIL_COMPRESSION, TAG_THUMBNAIL_DATA,
    TAG_THUMBNAIL_RESOLUTION_UNIT, TAG_THUMBNAIL_RESOLUTION_X, TAG_THUMBNAIL_RESOLUTION_Y,
};
use crate::exif::{TagMap, tag_name};
use crate::pipeline::ImageReport;

/// Tags that are bulky or only describe the thumbnail.
pub const DEFAULT_HIDDEN_TAGS: [u16; 7] = [
    TAG_LUMINANCE_TABLE,
    TAG_CHROMINANCE_TABLE,
    TAG_THUMBNAIL_DATA,
    TAG_THUMBNAIL_COMPRESSION,
    TAG_THUMBNAIL_RESOLUTION_X,
    TAG_THUMBNAIL_RESOLUTION_Y,
    TAG_THUMBNAIL_RESOLUTION_UNIT,
];

/// Date tags in order of preference.
pub const DEFAULT_DATE_TAGS: [u16; 3] = [TAG_DATE_TIME, TAG_EXIF_DT_ORIG, TAG_EXIF_DT_DIGITIZED];

/// The first of `preferred` present in `tags`.
pub fn capture_date<'a>(tags: &'a TagMap, preferred: &[u16]) -> Option<&'a str> {
    preferred
        .iter()
        .find_map(|tag| tags.get(tag))
        .map(String::as_str)
}

pub fn is_hidden(tag: u16, hidden: &[u16]) -> bool {
    hidden.contains(&tag)
}

/// Value as shown to a reader. Only ResolutionUnit gets a friendlier form.
pub fn display_value(tag: u16, value: &str) -> Cow<'_, str> {
    match (tag, value) {
        (TAG_RESOLUTION_UNIT, "[2]") => Cow::Borrowed("inch"),
        (TAG_RESOLUTION_UNIT, "[3]") => Cow::Borrowed("centimeter"),
        _ => Cow::Borrowed(value),
    }
}

/// `Name=value` for one tag.
pub fn format_row(tag: u16, value: &str) -> String {
    format!("{}={}", tag_name(tag), display_value(tag, value))
}

/// One-line summary: path, kind, date, size, resolution and depth.
pub fn summary_line(report: &ImageReport, date_tags: &[u16]) -> String {
    let kind = report.kind.map_or("Unknown Image", |k| k.label());
    let date = capture_date(&report.tags, date_tags).unwrap_or("unknown");
    let res = report
        .resolution
        .map_or_else(|| "unknown".to_string(), |r| r.to_string());
    format!(
        "{} {kind} Date={date} size={}x{} res={res} bpp={}",
        report.path.display(),
        report.width,
        report.height,
        report.bits_per_pixel
    )
}

/// Rows for every tag not in `hidden`, in map order.
pub fn visible_rows(tags: &TagMap, hidden: &[u16]) -> Vec<String> {
    tags.iter()
        .filter(|(tag, _)| !is_hidden(**tag, hidden))
        .map(|(tag, value)| format_row(*tag, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exif::ByteOrder;
    use crate::pipeline::ImageKind;
    use std::path::PathBuf;

    fn tags(entries: &[(u16, &str)]) -> TagMap {
        entries.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    fn report(tags: TagMap) -> ImageReport {
        ImageReport {
            path: PathBuf::from("photos/a.jpg"),
            kind: Some(ImageKind::Jpeg),
            width: 4000,
            height: 3000,
            resolution: Some(72.0),
            bits_per_pixel: 24,
            byte_order: ByteOrder::Little,
            tags,
            diagnostics: Vec::new(),
            error: None,
        }
    }

    // ── capture_date ─────────────────────────────────────────────────

    #[test]
    fn capture_date_prefers_first_listed() {
        let t = tags(&[
            (TAG_EXIF_DT_ORIG, "2023:01:01 12:00:00"),
            (TAG_DATE_TIME, "2023:02:02 08:00:00"),
        ]);
        assert_eq!(capture_date(&t, &DEFAULT_DATE_TAGS), Some("2023:02:02 08:00:00"));
    }

    #[test]
    fn capture_date_falls_back() {
        let t = tags(&[(TAG_EXIF_DT_DIGITIZED, "2021:05:05 10:10:10")]);
        assert_eq!(capture_date(&t, &DEFAULT_DATE_TAGS), Some("2021:05:05 10:10:10"));
    }

    #[test]
    fn capture_date_absent() {
        let t = tags(&[(0x010F, "Canon")]);
        assert_eq!(capture_date(&t, &DEFAULT_DATE_TAGS), None);
        assert_eq!(capture_date(&t, &[]), None);
    }

    // ── display_value ────────────────────────────────────────────────

    #[test]
    fn resolution_unit_names() {
        assert_eq!(display_value(TAG_RESOLUTION_UNIT, "[2]"), "inch");
        assert_eq!(display_value(TAG_RESOLUTION_UNIT, "[3]"), "centimeter");
        assert_eq!(display_value(TAG_RESOLUTION_UNIT, "[1]"), "[1]");
    }

    #[test]
    fn other_tags_unchanged() {
        assert_eq!(display_value(0x0112, "[2]"), "[2]");
    }

    // ── rows ─────────────────────────────────────────────────────────

    #[test]
    fn format_row_uses_names() {
        assert_eq!(format_row(0x010F, "Canon"), "EquipMake=Canon");
        assert_eq!(format_row(TAG_RESOLUTION_UNIT, "[2]"), "ResolutionUnit=inch");
        assert_eq!(format_row(0xBEEF, "[1]"), "0xBEEF=[1]");
    }

    #[test]
    fn visible_rows_skips_hidden() {
        let t = tags(&[
            (0x010F, "Canon"),
            (TAG_LUMINANCE_TABLE, "[1,2,3]"),
            (0x829D, "[28/10]"),
        ]);
        let rows = visible_rows(&t, &DEFAULT_HIDDEN_TAGS);
        assert_eq!(rows, vec!["EquipMake=Canon", "ExifFNumber=[28/10]"]);
    }

    // ── summary_line ─────────────────────────────────────────────────

    #[test]
    fn summary_with_date() {
        let r = report(tags(&[(TAG_EXIF_DT_ORIG, "2023:01:01 12:00:00")]));
        let line = summary_line(&r, &DEFAULT_DATE_TAGS);
        assert_eq!(
            line,
            format!(
                "{} JPEG Image Date=2023:01:01 12:00:00 size=4000x3000 res=72 bpp=24",
                PathBuf::from("photos/a.jpg").display()
            )
        );
    }

    #[test]
    fn summary_without_date_or_kind() {
        let mut r = report(TagMap::new());
        r.kind = None;
        r.resolution = None;
        let line = summary_line(&r, &DEFAULT_DATE_TAGS);
        assert!(line.contains("Unknown Image Date=unknown"), "{line}");
        assert!(line.contains("res=unknown"), "{line}");
    }
}
