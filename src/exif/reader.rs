use anyhow::{Context, Result};
use image::{ImageDecoder, ImageReader};
use img_parts::jpeg::{Jpeg, markers};
use img_parts::png::Png;
use img_parts::{Bytes, DynImage, ImageEXIF};
use std::borrow::Cow;
use std::collections::{HashSet, VecDeque};
use std::io::Cursor;

use super::tags::{TAG_EXIF_IFD, TAG_GPS_IFD, TAG_X_RESOLUTION};
use super::types::{ByteOrder, PropertyRecord, TypeCode};
use crate::pipeline::ImageKind;

const IFD_ENTRY_SIZE: usize = 12;
const TIFF_MAGIC: u16 = 42;

/// Everything a container decoder reports about one image.
#[derive(Debug, Clone, Default)]
pub struct ImageMetadata {
    pub kind: Option<ImageKind>,
    pub width: u32,
    pub height: u32,
    /// Horizontal resolution in dots per inch: XResolution if present,
    /// otherwise the container's own density (JFIF or pHYs).
    pub resolution: Option<f32>,
    pub bits_per_pixel: u16,
    pub byte_order: ByteOrder,
    pub records: Vec<PropertyRecord>,
}

/// Turns raw image bytes into [`ImageMetadata`].
///
/// The tag decoder only depends on this trait, so any image library can
/// stand behind it.
pub trait MetadataSource {
    fn read_metadata(&self, bytes: &[u8]) -> Result<ImageMetadata>;
}

/// Default [`MetadataSource`]: `image` for format and pixel layout,
/// `img-parts` for the EXIF segment, and a TIFF IFD walker for the records.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerReader;

impl MetadataSource for ContainerReader {
    fn read_metadata(&self, bytes: &[u8]) -> Result<ImageMetadata> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .context("Failed to probe image format")?;
        let kind = reader.format().and_then(ImageKind::from_format);
        let decoder = reader.into_decoder().context("Unreadable image")?;
        let (width, height) = decoder.dimensions();
        let bits_per_pixel = decoder.color_type().bits_per_pixel();

        let container = match inspect_container(bytes, kind) {
            Ok(container) => container,
            Err(e) => {
                log::warn!("Could not locate EXIF block: {e:#}");
                Container::default()
            }
        };

        let (byte_order, records) = match container.exif.as_deref().map(parse_tiff_records) {
            Some(Ok(parsed)) => parsed,
            Some(Err(e)) => {
                log::warn!("Ignoring corrupt EXIF block: {e:#}");
                (ByteOrder::default(), Vec::new())
            }
            None => {
                log::debug!("No EXIF block found");
                (ByteOrder::default(), Vec::new())
            }
        };

        let resolution = horizontal_resolution(&records, byte_order).or(container.density);

        Ok(ImageMetadata {
            kind,
            width,
            height,
            resolution,
            bits_per_pixel,
            byte_order,
            records,
        })
    }
}

/// What the container itself says, apart from the pixels.
#[derive(Default)]
struct Container<'a> {
    /// TIFF-structured EXIF block.
    exif: Option<Cow<'a, [u8]>>,
    /// Horizontal density in dots per inch.
    density: Option<f32>,
}

/// Locate the EXIF block and density. TIFF files are their own block.
fn inspect_container(bytes: &[u8], kind: Option<ImageKind>) -> Result<Container<'_>> {
    match kind {
        Some(ImageKind::Tiff) => Ok(Container {
            exif: Some(Cow::Borrowed(bytes)),
            density: None,
        }),
        Some(ImageKind::Gif) | None => Ok(Container::default()),
        Some(ImageKind::Jpeg | ImageKind::Png | ImageKind::WebP) => {
            let Some(parsed) = DynImage::from_bytes(Bytes::copy_from_slice(bytes))
                .map_err(|e| anyhow::anyhow!("Failed to parse image container: {e}"))?
            else {
                return Ok(Container::default());
            };
            let density = match &parsed {
                DynImage::Jpeg(jpeg) => jfif_density(jpeg),
                DynImage::Png(png) => png_density(png),
                DynImage::WebP(_) => None,
            };
            let exif = parsed.exif().map(|exif| Cow::Owned(exif.to_vec()));
            Ok(Container { exif, density })
        }
    }
}

/// X density from the JFIF APP0 segment. Aspect-ratio-only headers give `None`.
fn jfif_density(jpeg: &Jpeg) -> Option<f32> {
    jpeg.segments_by_marker(markers::APP0)
        .find_map(|segment| parse_jfif_density(segment.contents()))
}

fn parse_jfif_density(app0: &[u8]) -> Option<f32> {
    let rest = app0.strip_prefix(b"JFIF\0")?;
    // version (2), units (1), x density (2), y density (2)
    let units = *rest.get(2)?;
    let x = u16::from_be_bytes([*rest.get(3)?, *rest.get(4)?]);
    if x == 0 {
        return None;
    }
    match units {
        1 => Some(f32::from(x)),
        2 => Some(f32::from(x) * 2.54),
        _ => None,
    }
}

/// X density from the pHYs chunk, converted from pixels per metre.
fn png_density(png: &Png) -> Option<f32> {
    png.chunk_by_type(*b"pHYs")
        .and_then(|chunk| parse_phys_density(chunk.contents()))
}

fn parse_phys_density(phys: &[u8]) -> Option<f32> {
    let x = u32::from_be_bytes(phys.get(..4)?.try_into().ok()?);
    let unit = *phys.get(8)?;
    if unit != 1 || x == 0 {
        return None;
    }
    Some(x as f32 * 0.0254)
}

fn horizontal_resolution(records: &[PropertyRecord], order: ByteOrder) -> Option<f32> {
    let record = records
        .iter()
        .rev()
        .find(|r| r.tag_id == TAG_X_RESOLUTION && r.type_code == TypeCode::Rational)?;
    let p = record.payload.get(..8)?;
    let num = order.u32_from([p[0], p[1], p[2], p[3]]);
    let den = order.u32_from([p[4], p[5], p[6], p[7]]);
    if den == 0 {
        return None;
    }
    Some(num as f32 / den as f32)
}

/// Bounds-checked reads in the block's byte order.
struct TiffData<'a> {
    data: &'a [u8],
    order: ByteOrder,
}

impl TiffData<'_> {
    fn u16_at(&self, offset: usize) -> Option<u16> {
        let b = self.data.get(offset..offset.checked_add(2)?)?;
        Some(self.order.u16_from([b[0], b[1]]))
    }

    fn u32_at(&self, offset: usize) -> Option<u32> {
        let b = self.data.get(offset..offset.checked_add(4)?)?;
        Some(self.order.u32_from([b[0], b[1], b[2], b[3]]))
    }
}

/// Size in bytes of one element of a TIFF field type.
fn field_width(raw_type: u16) -> Option<usize> {
    match raw_type {
        1 | 2 | 6 | 7 => Some(1),
        3 | 8 => Some(2),
        4 | 9 | 11 => Some(4),
        5 | 10 | 12 => Some(8),
        _ => None,
    }
}

/// Read the property records of a TIFF-structured EXIF block.
///
/// Walks IFD0, then the EXIF and GPS directories it points to, returning
/// their entries in that order. The IFD1 (thumbnail) chain is not followed.
/// Payloads that run past the end of the block are cut to what is there;
/// the record keeps its declared length.
///
/// Fails only when the header or IFD0 itself is unusable.
pub fn parse_tiff_records(block: &[u8]) -> Result<(ByteOrder, Vec<PropertyRecord>)> {
    if block.len() < 8 {
        anyhow::bail!("TIFF data too short");
    }
    let order = ByteOrder::from_tiff_marker(&block[0..2]).context("Invalid TIFF byte order")?;
    let tiff = TiffData { data: block, order };

    if tiff.u16_at(2) != Some(TIFF_MAGIC) {
        anyhow::bail!("Missing TIFF magic number");
    }

    let ifd0 = tiff.u32_at(4).context("Missing IFD0 offset")? as usize;
    if tiff.u16_at(ifd0).is_none() {
        anyhow::bail!("IFD0 offset out of bounds");
    }

    let mut records = Vec::new();
    let mut visited = HashSet::new();
    let mut pending = VecDeque::from([ifd0]);

    while let Some(offset) = pending.pop_front() {
        if !visited.insert(offset) {
            log::debug!("Skipping already visited IFD at {offset}");
            continue;
        }
        read_ifd(&tiff, offset, &mut records, &mut pending);
    }

    Ok((order, records))
}

fn read_ifd(
    tiff: &TiffData<'_>,
    offset: usize,
    records: &mut Vec<PropertyRecord>,
    pending: &mut VecDeque<usize>,
) {
    let Some(count) = tiff.u16_at(offset) else {
        log::warn!("IFD offset {offset} out of bounds");
        return;
    };

    for i in 0..count as usize {
        let entry = offset + 2 + i * IFD_ENTRY_SIZE;
        let (Some(tag_id), Some(raw_type), Some(elements)) = (
            tiff.u16_at(entry),
            tiff.u16_at(entry + 2),
            tiff.u32_at(entry + 4),
        ) else {
            log::warn!("IFD at {offset} truncated after {i} of {count} entries");
            return;
        };

        if matches!(tag_id, TAG_EXIF_IFD | TAG_GPS_IFD) {
            if let Some(target) = tiff.u32_at(entry + 8) {
                pending.push_back(target as usize);
            }
        }

        records.push(read_entry(tiff, entry, tag_id, raw_type, elements));
    }
}

fn read_entry(
    tiff: &TiffData<'_>,
    entry: usize,
    tag_id: u16,
    raw_type: u16,
    elements: u32,
) -> PropertyRecord {
    let type_code = TypeCode::from_raw(raw_type.into());

    let Some(width) = field_width(raw_type) else {
        // Unknown width: nothing to locate, keep the element count as the length.
        return PropertyRecord {
            tag_id,
            type_code,
            byte_length: elements,
            payload: Vec::new(),
        };
    };

    let declared = (elements as usize).saturating_mul(width);
    let start = if declared <= 4 {
        entry + 8
    } else {
        tiff.u32_at(entry + 8).map_or(tiff.data.len(), |o| o as usize)
    };
    let end = start.saturating_add(declared).min(tiff.data.len());
    let payload = tiff.data.get(start..end).unwrap_or_default().to_vec();

    if payload.len() < declared {
        log::debug!(
            "Tag 0x{tag_id:04X}: payload clamped to {} of {declared} bytes",
            payload.len()
        );
    }

    PropertyRecord {
        tag_id,
        type_code,
        byte_length: u32::try_from(declared).unwrap_or(u32::MAX),
        payload,
    }
}
