use anyhow::{Context, Result};
use image::ImageFormat;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::exif::{
    ByteOrder, Diagnostic, ImageMetadata, MetadataSource, TagMap, build_tags,
    build_tags_with_diagnostics,
};

/// Supported image extensions.
const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "jpe",
    "png",
    "gif",
    "tif", "tiff",
    "webp",
];

/// The container format of an image.
///
/// # Example
///
/// ```rust
/// use exif_dump::pipeline::ImageKind;
/// use std::path::Path;
///
/// let kind = ImageKind::from_path(Path::new("photo.JPG"));
/// assert_eq!(kind, Some(ImageKind::Jpeg));
/// assert_eq!(kind.unwrap().label(), "JPEG Image");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImageKind {
    Jpeg,
    Gif,
    Tiff,
    Png,
    WebP,
}

impl ImageKind {
    /// Determine the image kind from a file path extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" | "jpe" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "gif" => Some(Self::Gif),
            "tif" | "tiff" => Some(Self::Tiff),
            "webp" => Some(Self::WebP),
            _ => None,
        }
    }

    /// Map a format detected by the `image` crate.
    pub fn from_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Jpeg => Some(Self::Jpeg),
            ImageFormat::Png => Some(Self::Png),
            ImageFormat::Gif => Some(Self::Gif),
            ImageFormat::Tiff => Some(Self::Tiff),
            ImageFormat::WebP => Some(Self::WebP),
            _ => None,
        }
    }

    /// Human-readable label, e.g. `"JPEG Image"`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG Image",
            Self::Gif => "GIF Image",
            Self::Tiff => "TIFF Image",
            Self::Png => "PNG Image",
            Self::WebP => "WebP Image",
        }
    }
}

/// The result of decoding one image's metadata.
///
/// Decoding failures are recorded in `error` so a batch can carry on.
#[derive(Debug, Clone)]
pub struct ImageReport {
    pub path: PathBuf,
    pub kind: Option<ImageKind>,
    pub width: u32,
    pub height: u32,
    pub resolution: Option<f32>,
    pub bits_per_pixel: u16,
    /// The byte order the payloads were decoded with.
    pub byte_order: ByteOrder,
    pub tags: TagMap,
    /// Only filled when lint mode is on.
    pub diagnostics: Vec<Diagnostic>,
    pub error: Option<String>,
}

impl ImageReport {
    fn empty(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            kind: None,
            width: 0,
            height: 0,
            resolution: None,
            bits_per_pixel: 0,
            byte_order: ByteOrder::default(),
            tags: TagMap::new(),
            diagnostics: Vec::new(),
            error: None,
        }
    }
}

/// Collect supported image files from the given paths.
///
/// Accepts a mix of file paths and directory paths. Directories are walked
/// recursively (following symlinks). Only files with supported image extensions
/// are included.
///
/// # Example
///
/// ```rust,no_run
/// use exif_dump::pipeline::collect_images;
/// use std::path::PathBuf;
///
/// let images = collect_images(&[
///     PathBuf::from("photo.jpg"),       // single file
///     PathBuf::from("./photos/"),        // entire directory
/// ]);
/// println!("Found {} images", images.len());
/// ```
pub fn collect_images(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut images = Vec::new();

    for path in paths {
        if path.is_file() {
            if is_supported_image(path) {
                images.push(path.clone());
            } else {
                log::warn!("Skipping unsupported file: {}", path.display());
            }
        } else if path.is_dir() {
            for entry in WalkDir::new(path)
                .follow_links(true)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let p = entry.path();
                if p.is_file() && is_supported_image(p) {
                    images.push(p.to_path_buf());
                }
            }
        } else {
            log::warn!("Path does not exist: {}", path.display());
        }
    }

    images
}

/// Check if a file has a supported image extension.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Read one image and decode its property records.
///
/// # Example
///
/// ```rust,no_run
/// use exif_dump::config::Config;
/// use exif_dump::exif::ContainerReader;
/// use exif_dump::pipeline::read_image;
///
/// let report = read_image("photo.jpg".as_ref(), &ContainerReader, &Config::default());
/// if report.error.is_none() {
///     for (tag, value) in &report.tags {
///         println!("{tag:#06x} = {value}");
///     }
/// }
/// ```
pub fn read_image(path: &Path, source: &dyn MetadataSource, config: &Config) -> ImageReport {
    let mut report = ImageReport::empty(path);

    let metadata = match load_metadata(path, source) {
        Ok(m) => m,
        Err(e) => {
            report.error = Some(format!("{e:#}"));
            return report;
        }
    };

    let order = config.decode.byte_order.resolve(metadata.byte_order);
    if order != metadata.byte_order {
        log::debug!(
            "Decoding {} as {order:?} (file declares {:?})",
            path.display(),
            metadata.byte_order
        );
    }

    if config.decode.lint {
        let (tags, diagnostics) = build_tags_with_diagnostics(&metadata.records, order);
        for diagnostic in &diagnostics {
            log::warn!("{}: {diagnostic}", path.display());
        }
        report.tags = tags;
        report.diagnostics = diagnostics;
    } else {
        report.tags = build_tags(&metadata.records, order);
    }

    log::debug!(
        "{}: {} record(s), {} tag(s)",
        path.display(),
        metadata.records.len(),
        report.tags.len()
    );

    report.kind = metadata.kind;
    report.width = metadata.width;
    report.height = metadata.height;
    report.resolution = metadata.resolution;
    report.bits_per_pixel = metadata.bits_per_pixel;
    report.byte_order = order;
    report
}

fn load_metadata(path: &Path, source: &dyn MetadataSource) -> Result<ImageMetadata> {
    let bytes = std::fs::read(path).context("Failed to read image file")?;
    source.read_metadata(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ByteOrderSetting;
    use crate::exif::{ContainerReader, PropertyRecord, TypeCode};
    use std::fs;
    use tempfile::TempDir;

    /// Hands back fixed metadata regardless of the bytes.
    struct FixedSource(ImageMetadata);

    impl MetadataSource for FixedSource {
        fn read_metadata(&self, _bytes: &[u8]) -> Result<ImageMetadata> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl MetadataSource for FailingSource {
        fn read_metadata(&self, _bytes: &[u8]) -> Result<ImageMetadata> {
            anyhow::bail!("Unreadable image")
        }
    }

    fn sample_metadata() -> ImageMetadata {
        ImageMetadata {
            kind: Some(ImageKind::Jpeg),
            width: 640,
            height: 480,
            resolution: Some(72.0),
            bits_per_pixel: 24,
            byte_order: ByteOrder::Big,
            records: vec![
                PropertyRecord::new(0x0112, TypeCode::Short, vec![0x00, 0x06]),
                PropertyRecord::new(0xBEEF, TypeCode::Short, vec![0x00, 0x01, 0xFF]),
                PropertyRecord::new(0xBEEF, TypeCode::Short, vec![0x00, 0x02]),
            ],
        }
    }

    fn fake_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("photo.jpg");
        fs::write(&path, b"fake").unwrap();
        path
    }

    // ── ImageKind ────────────────────────────────────────────────────

    #[test]
    fn image_kind_jpeg() {
        assert_eq!(ImageKind::from_path(Path::new("photo.jpg")), Some(ImageKind::Jpeg));
        assert_eq!(ImageKind::from_path(Path::new("photo.jpeg")), Some(ImageKind::Jpeg));
        assert_eq!(ImageKind::from_path(Path::new("PHOTO.JPG")), Some(ImageKind::Jpeg));
    }

    #[test]
    fn image_kind_others() {
        assert_eq!(ImageKind::from_path(Path::new("a.png")), Some(ImageKind::Png));
        assert_eq!(ImageKind::from_path(Path::new("a.GIF")), Some(ImageKind::Gif));
        assert_eq!(ImageKind::from_path(Path::new("scan.tif")), Some(ImageKind::Tiff));
        assert_eq!(ImageKind::from_path(Path::new("scan.tiff")), Some(ImageKind::Tiff));
        assert_eq!(ImageKind::from_path(Path::new("a.webp")), Some(ImageKind::WebP));
    }

    #[test]
    fn image_kind_unsupported() {
        assert_eq!(ImageKind::from_path(Path::new("doc.pdf")), None);
        assert_eq!(ImageKind::from_path(Path::new("photo.heic")), None);
        assert_eq!(ImageKind::from_path(Path::new("noext")), None);
    }

    #[test]
    fn image_kind_from_format() {
        assert_eq!(ImageKind::from_format(ImageFormat::Jpeg), Some(ImageKind::Jpeg));
        assert_eq!(ImageKind::from_format(ImageFormat::Tiff), Some(ImageKind::Tiff));
        assert_eq!(ImageKind::from_format(ImageFormat::Bmp), None);
    }

    #[test]
    fn image_kind_labels() {
        assert_eq!(ImageKind::Jpeg.label(), "JPEG Image");
        assert_eq!(ImageKind::Gif.label(), "GIF Image");
        assert_eq!(ImageKind::Tiff.label(), "TIFF Image");
        assert_eq!(ImageKind::Png.label(), "PNG Image");
    }

    // ── is_supported_image ───────────────────────────────────────────

    #[test]
    fn supported_image_extensions() {
        assert!(is_supported_image(Path::new("photo.jpg")));
        assert!(is_supported_image(Path::new("photo.JPEG")));
        assert!(is_supported_image(Path::new("photo.png")));
        assert!(is_supported_image(Path::new("anim.gif")));
        assert!(is_supported_image(Path::new("photo.tif")));
        assert!(is_supported_image(Path::new("photo.webp")));
    }

    #[test]
    fn unsupported_image_extensions() {
        assert!(!is_supported_image(Path::new("doc.pdf")));
        assert!(!is_supported_image(Path::new("readme.txt")));
        assert!(!is_supported_image(Path::new("noext")));
    }

    // ── collect_images ───────────────────────────────────────────────

    #[test]
    fn collect_images_single_file() {
        let dir = TempDir::new().unwrap();
        let jpg = fake_file(&dir);

        let images = collect_images(&[jpg.clone()]);
        assert_eq!(images, vec![jpg]);
    }

    #[test]
    fn collect_images_skips_unsupported() {
        let dir = TempDir::new().unwrap();
        let txt = dir.path().join("readme.txt");
        fs::write(&txt, b"hello").unwrap();

        assert!(collect_images(&[txt]).is_empty());
    }

    #[test]
    fn collect_images_directory_recursive() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();

        fs::write(dir.path().join("a.jpg"), b"fake").unwrap();
        fs::write(sub.join("b.png"), b"fake").unwrap();
        fs::write(sub.join("c.txt"), b"fake").unwrap();

        let images = collect_images(&[dir.path().to_path_buf()]);
        assert_eq!(images.len(), 2);
    }

    #[test]
    fn collect_images_nonexistent_path() {
        assert!(collect_images(&[PathBuf::from("/nonexistent/path")]).is_empty());
    }

    // ── read_image ───────────────────────────────────────────────────

    #[test]
    fn read_image_uses_declared_byte_order() {
        let dir = TempDir::new().unwrap();
        let path = fake_file(&dir);

        let report = read_image(&path, &FixedSource(sample_metadata()), &Config::default());
        assert!(report.error.is_none());
        assert_eq!(report.kind, Some(ImageKind::Jpeg));
        assert_eq!((report.width, report.height), (640, 480));
        assert_eq!(report.byte_order, ByteOrder::Big);
        assert_eq!(report.tags[&0x0112], "[6]");
        assert_eq!(report.tags[&0xBEEF], "[2]");
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn read_image_byte_order_override() {
        let dir = TempDir::new().unwrap();
        let path = fake_file(&dir);
        let mut config = Config::default();
        config.decode.byte_order = ByteOrderSetting::Little;

        let report = read_image(&path, &FixedSource(sample_metadata()), &config);
        assert_eq!(report.byte_order, ByteOrder::Little);
        assert_eq!(report.tags[&0x0112], "[1536]");
    }

    #[test]
    fn read_image_lint_collects_diagnostics() {
        let dir = TempDir::new().unwrap();
        let path = fake_file(&dir);
        let mut config = Config::default();
        config.decode.lint = true;

        let report = read_image(&path, &FixedSource(sample_metadata()), &config);
        assert_eq!(
            report.diagnostics,
            vec![
                Diagnostic::TrailingBytes {
                    tag: 0xBEEF,
                    type_code: TypeCode::Short,
                    dropped: 1,
                },
                Diagnostic::DuplicateTag { tag: 0xBEEF },
            ]
        );
    }

    #[test]
    fn read_image_source_error_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = fake_file(&dir);

        let report = read_image(&path, &FailingSource, &Config::default());
        assert_eq!(report.error.as_deref(), Some("Unreadable image"));
        assert!(report.tags.is_empty());
    }

    #[test]
    fn read_image_missing_file() {
        let report = read_image(
            Path::new("/nonexistent/photo.jpg"),
            &ContainerReader,
            &Config::default(),
        );
        let err = report.error.unwrap();
        assert!(err.starts_with("Failed to read image file"), "{err}");
    }

    #[test]
    fn read_image_real_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tiny.png");
        image::RgbaImage::new(4, 4).save(&path).unwrap();

        let report = read_image(&path, &ContainerReader, &Config::default());
        assert!(report.error.is_none(), "{:?}", report.error);
        assert_eq!(report.kind, Some(ImageKind::Png));
        assert_eq!(report.bits_per_pixel, 32);
        assert!(report.tags.is_empty());
    }
}
