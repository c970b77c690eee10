//! Static registry of known property tag ids.
//!
//! The table is descriptive only. Decoding never consults it; it supplies
//! display names and the expected type/count used by lint diagnostics.

use serde::Serialize;
use std::borrow::Cow;

use super::types::TypeCode;

pub const TAG_GPS_IFD: u16 = 0x8825;
pub const TAG_EXIF_IFD: u16 = 0x8769;
pub const TAG_X_RESOLUTION: u16 = 0x011A;
pub const TAG_RESOLUTION_UNIT: u16 = 0x0128;
pub const TAG_DATE_TIME: u16 = 0x0132;
pub const TAG_EXIF_DT_ORIG: u16 = 0x9003;
pub const TAG_EXIF_DT_DIGITIZED: u16 = 0x9004;
pub const TAG_THUMBNAIL_DATA: u16 = 0x501B;
pub const TAG_THUMBNAIL_COMPRESSION: u16 = 0x5023;
pub const TAG_THUMBNAIL_RESOLUTION_X: u16 = 0x502D;
pub const TAG_THUMBNAIL_RESOLUTION_Y: u16 = 0x502E;
pub const TAG_THUMBNAIL_RESOLUTION_UNIT: u16 = 0x5030;
pub const TAG_LUMINANCE_TABLE: u16 = 0x5090;
pub const TAG_CHROMINANCE_TABLE: u16 = 0x5091;

/// How many elements a tag is expected to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TagCount {
    Fixed(u32),
    Variable,
}

/// Documentation for one known tag id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagDescriptor {
    pub id: u16,
    pub name: &'static str,
    /// `None` when the tag legitimately appears with more than one type
    /// (e.g. Short or Long dimensions).
    pub expected_type: Option<TypeCode>,
    pub expected_count: TagCount,
    pub description: &'static str,
}

const fn tag(
    id: u16,
    name: &'static str,
    expected_type: Option<TypeCode>,
    expected_count: TagCount,
    description: &'static str,
) -> TagDescriptor {
    TagDescriptor {
        id,
        name,
        expected_type,
        expected_count,
        description,
    }
}

const BYTE: Option<TypeCode> = Some(TypeCode::Byte);
const ASCII: Option<TypeCode> = Some(TypeCode::Ascii);
const SHORT: Option<TypeCode> = Some(TypeCode::Short);
const LONG: Option<TypeCode> = Some(TypeCode::Long);
const RATIONAL: Option<TypeCode> = Some(TypeCode::Rational);
const UNDEFINED: Option<TypeCode> = Some(TypeCode::Undefined);
const SRATIONAL: Option<TypeCode> = Some(TypeCode::SRational);
const MIXED: Option<TypeCode> = None;

const ANY: TagCount = TagCount::Variable;
const ONE: TagCount = TagCount::Fixed(1);
const TWO: TagCount = TagCount::Fixed(2);
const THREE: TagCount = TagCount::Fixed(3);
const FOUR: TagCount = TagCount::Fixed(4);
const SIX: TagCount = TagCount::Fixed(6);

// Sorted by id; `lookup` binary-searches it.
#[rustfmt::skip]
static TAGS: &[TagDescriptor] = &[
    tag(0x0000, "GpsVer", BYTE, FOUR, "Version of the GPS IFD, given as 2.0.0.0"),
    tag(0x0001, "GpsLatitudeRef", ASCII, TWO, "Whether the latitude is north (N) or south (S)"),
    tag(0x0002, "GpsLatitude", RATIONAL, THREE, "Latitude as degrees, minutes and seconds"),
    tag(0x0003, "GpsLongitudeRef", ASCII, TWO, "Whether the longitude is east (E) or west (W)"),
    tag(0x0004, "GpsLongitude", RATIONAL, THREE, "Longitude as degrees, minutes and seconds"),
    tag(0x0005, "GpsAltitudeRef", BYTE, ONE, "Reference altitude: 0 above sea level, 1 below"),
    tag(0x0006, "GpsAltitude", RATIONAL, ONE, "Altitude in meters relative to the reference"),
    tag(0x0007, "GpsGpsTime", RATIONAL, THREE, "UTC time as hour, minute and second"),
    tag(0x0008, "GpsGpsSatellites", ASCII, ANY, "Satellites used for the measurement"),
    tag(0x0009, "GpsGpsStatus", ASCII, TWO, "Receiver status: A in progress, V interoperability"),
    tag(0x000A, "GpsGpsMeasureMode", ASCII, TWO, "Measurement mode: 2 two-dimensional, 3 three-dimensional"),
    tag(0x000B, "GpsGpsDop", RATIONAL, ONE, "Data degree of precision"),
    tag(0x000C, "GpsSpeedRef", ASCII, TWO, "Unit of receiver speed: K, M or N"),
    tag(0x000D, "GpsSpeed", RATIONAL, ONE, "Speed of the receiver"),
    tag(0x000E, "GpsTrackRef", ASCII, TWO, "Reference for the direction of movement: T true, M magnetic"),
    tag(0x000F, "GpsTrack", RATIONAL, ONE, "Direction of receiver movement"),
    tag(0x0010, "GpsImgDirRef", ASCII, TWO, "Reference for the image direction: T true, M magnetic"),
    tag(0x0011, "GpsImgDir", RATIONAL, ONE, "Direction of the image when captured"),
    tag(0x0012, "GpsMapDatum", ASCII, ANY, "Geodetic survey data used by the receiver"),
    tag(0x0013, "GpsDestLatRef", ASCII, TWO, "Whether the destination latitude is north or south"),
    tag(0x0014, "GpsDestLat", RATIONAL, THREE, "Latitude of the destination point"),
    tag(0x0015, "GpsDestLongRef", ASCII, TWO, "Whether the destination longitude is east or west"),
    tag(0x0016, "GpsDestLong", RATIONAL, THREE, "Longitude of the destination point"),
    tag(0x0017, "GpsDestBearRef", ASCII, TWO, "Reference for the bearing to the destination"),
    tag(0x0018, "GpsDestBear", RATIONAL, ONE, "Bearing to the destination point"),
    tag(0x0019, "GpsDestDistRef", ASCII, TWO, "Unit of the distance to the destination"),
    tag(0x001A, "GpsDestDist", RATIONAL, ONE, "Distance to the destination point"),
    tag(0x00FE, "NewSubfileType", LONG, ONE, "Type of data in a subfile"),
    tag(0x00FF, "SubfileType", SHORT, ONE, "Type of data in a subfile (superseded)"),
    tag(0x0100, "ImageWidth", MIXED, ONE, "Number of pixels per row"),
    tag(0x0101, "ImageHeight", MIXED, ONE, "Number of pixel rows"),
    tag(0x0102, "BitsPerSample", SHORT, ANY, "Bits per color component"),
    tag(0x0103, "Compression", SHORT, ONE, "Compression scheme used for the image data"),
    tag(0x0106, "PhotometricInterp", SHORT, ONE, "How pixel data is interpreted"),
    tag(0x0107, "ThreshHolding", SHORT, ONE, "Technique used to convert gray to black and white"),
    tag(0x0108, "CellWidth", SHORT, ONE, "Width of the dithering or halftoning matrix"),
    tag(0x0109, "CellHeight", SHORT, ONE, "Height of the dithering or halftoning matrix"),
    tag(0x010A, "FillOrder", SHORT, ONE, "Logical order of bits in a byte"),
    tag(0x010D, "DocumentName", ASCII, ANY, "Name of the document the image was scanned from"),
    tag(0x010E, "ImageDescription", ASCII, ANY, "Title of the image"),
    tag(0x010F, "EquipMake", ASCII, ANY, "Manufacturer of the recording equipment"),
    tag(0x0110, "EquipModel", ASCII, ANY, "Model name of the recording equipment"),
    tag(0x0111, "StripOffsets", MIXED, ANY, "Byte offset of each strip"),
    tag(0x0112, "Orientation", SHORT, ONE, "Orientation. 1=Top,Left"),
    tag(0x0115, "SamplesPerPixel", SHORT, ONE, "Number of color components per pixel"),
    tag(0x0116, "RowsPerStrip", MIXED, ONE, "Number of rows per strip"),
    tag(0x0117, "StripBytesCount", MIXED, ANY, "Byte count of each strip"),
    tag(0x0118, "MinSampleValue", SHORT, ANY, "Minimum value of a color component"),
    tag(0x0119, "MaxSampleValue", SHORT, ANY, "Maximum value of a color component"),
    tag(0x011A, "XResolution", RATIONAL, ONE, "Pixels per resolution unit, horizontal"),
    tag(0x011B, "YResolution", RATIONAL, ONE, "Pixels per resolution unit, vertical"),
    tag(0x011C, "PlanarConfig", SHORT, ONE, "Chunky (1) or planar (2) component storage"),
    tag(0x011D, "PageName", ASCII, ANY, "Name of the page the image was scanned from"),
    tag(0x011E, "XPosition", RATIONAL, ONE, "Horizontal offset of the image"),
    tag(0x011F, "YPosition", RATIONAL, ONE, "Vertical offset of the image"),
    tag(0x0120, "FreeOffset", LONG, ANY, "Byte offsets of unused strings"),
    tag(0x0121, "FreeByteCounts", LONG, ANY, "Byte counts of unused strings"),
    tag(0x0122, "GrayResponseUnit", SHORT, ONE, "Precision of the gray response curve"),
    tag(0x0123, "GrayResponseCurve", SHORT, ANY, "Optical density of each possible pixel value"),
    tag(0x0124, "T4Option", LONG, ONE, "Options for T.4 (Group 3 fax) compression"),
    tag(0x0125, "T6Option", LONG, ONE, "Options for T.6 (Group 4 fax) compression"),
    tag(0x0128, "ResolutionUnit", SHORT, ONE, "Unit of XResolution and YResolution: 2 inch, 3 centimeter"),
    tag(0x0129, "PageNumber", SHORT, TWO, "Page number and total page count"),
    tag(0x012D, "TransferFunction", SHORT, ANY, "Transfer function for the image"),
    tag(0x0131, "SoftwareUsed", ASCII, ANY, "Software used to generate the image"),
    tag(0x0132, "DateTime", ASCII, TagCount::Fixed(20), "Date and time the image was created"),
    tag(0x013B, "Artist", ASCII, ANY, "Person who created the image"),
    tag(0x013C, "HostComputer", ASCII, ANY, "Computer and operating system used"),
    tag(0x013D, "Predictor", SHORT, ONE, "Prediction scheme applied before LZW compression"),
    tag(0x013E, "WhitePoint", RATIONAL, TWO, "Chromaticity of the white point"),
    tag(0x013F, "PrimaryChromaticities", RATIONAL, SIX, "Chromaticities of the primaries"),
    tag(0x0140, "ColorMap", SHORT, ANY, "Color palette lookup table"),
    tag(0x0141, "HalftoneHints", SHORT, TWO, "Highlight and shadow values for halftoning"),
    tag(0x0142, "TileWidth", MIXED, ONE, "Number of pixel columns in each tile"),
    tag(0x0143, "TileLength", MIXED, ONE, "Number of pixel rows in each tile"),
    tag(0x0144, "TileOffset", LONG, ANY, "Byte offset of each tile"),
    tag(0x0145, "TileByteCounts", MIXED, ANY, "Byte count of each tile"),
    tag(0x014C, "InkSet", SHORT, ONE, "Set of inks used in a separated image"),
    tag(0x014D, "InkNames", ASCII, ANY, "Names of the inks in a separated image"),
    tag(0x014E, "NumberOfInks", SHORT, ONE, "Number of inks"),
    tag(0x0150, "DotRange", MIXED, ANY, "Component values for 0% and 100% dot"),
    tag(0x0151, "TargetPrinter", ASCII, ANY, "Intended printing environment"),
    tag(0x0152, "ExtraSamples", SHORT, ANY, "Meaning of extra components per pixel"),
    tag(0x0153, "SampleFormat", SHORT, ANY, "How to interpret each data sample"),
    tag(0x0154, "SMinSampleValue", MIXED, ANY, "Minimum sample value"),
    tag(0x0155, "SMaxSampleValue", MIXED, ANY, "Maximum sample value"),
    tag(0x0156, "TransferRange", SHORT, SIX, "Table of values extending the transfer function range"),
    tag(0x0200, "JPEGProc", SHORT, ONE, "JPEG compression process"),
    tag(0x0201, "JPEGInterFormat", LONG, ONE, "Offset to the start of JPEG interchange data"),
    tag(0x0202, "JPEGInterLength", LONG, ONE, "Length of the JPEG interchange data"),
    tag(0x0203, "JPEGRestartInterval", SHORT, ONE, "Length of the restart interval"),
    tag(0x0205, "JPEGLosslessPredictors", SHORT, ANY, "Lossless predictor selection values"),
    tag(0x0206, "JPEGPointTransforms", SHORT, ANY, "Point transformation values"),
    tag(0x0207, "JPEGQTables", LONG, ANY, "Offsets to the quantization tables"),
    tag(0x0208, "JPEGDCTables", LONG, ANY, "Offsets to the DC Huffman tables"),
    tag(0x0209, "JPEGACTables", LONG, ANY, "Offsets to the AC Huffman tables"),
    tag(0x0211, "YCbCrCoefficients", RATIONAL, THREE, "Coefficients for RGB to YCbCr conversion"),
    tag(0x0212, "YCbCrSubsampling", SHORT, TWO, "Chroma subsampling factors"),
    tag(0x0213, "YCbCrPositioning", SHORT, ONE, "Position of chroma relative to luma samples"),
    tag(0x0214, "REFBlackWhite", RATIONAL, SIX, "Reference black and white point values"),
    tag(0x0301, "Gamma", RATIONAL, ONE, "Gamma value attached to the image"),
    tag(0x0302, "ICCProfileDescriptor", ASCII, ANY, "Identifier of the ICC profile"),
    tag(0x0303, "SRGBRenderingIntent", BYTE, ONE, "sRGB rendering intent"),
    tag(0x0320, "ImageTitle", ASCII, ANY, "Title of the image"),
    tag(0x5001, "ResolutionXUnit", SHORT, ONE, "Units for horizontal resolution display"),
    tag(0x5002, "ResolutionYUnit", SHORT, ONE, "Units for vertical resolution display"),
    tag(0x5003, "ResolutionXLengthUnit", SHORT, ONE, "Units for image width display"),
    tag(0x5004, "ResolutionYLengthUnit", SHORT, ONE, "Units for image height display"),
    tag(0x5005, "PrintFlags", ASCII, ANY, "Print flags"),
    tag(0x5006, "PrintFlagsVersion", SHORT, ONE, "Print flags version"),
    tag(0x5007, "PrintFlagsCrop", BYTE, ONE, "Print flags center crop marks"),
    tag(0x5008, "PrintFlagsBleedWidth", LONG, ONE, "Print flags bleed width"),
    tag(0x5009, "PrintFlagsBleedWidthScale", SHORT, ONE, "Print flags bleed width scale"),
    tag(0x500A, "HalftoneLPI", RATIONAL, ONE, "Ink lines per inch"),
    tag(0x500B, "HalftoneLPIUnit", SHORT, ONE, "Unit of the lines per inch value"),
    tag(0x500C, "HalftoneDegree", RATIONAL, ONE, "Halftone screen angle"),
    tag(0x500D, "HalftoneShape", SHORT, ONE, "Halftone dot shape"),
    tag(0x500E, "HalftoneMisc", LONG, ONE, "Miscellaneous halftone information"),
    tag(0x500F, "HalftoneScreen", BYTE, ONE, "Whether to use the printer's default screens"),
    tag(0x5010, "JPEGQuality", LONG, ANY, "Private quality tag"),
    tag(0x5011, "GridSize", UNDEFINED, ANY, "Block of information about grids and guides"),
    tag(0x5012, "ThumbnailFormat", LONG, ONE, "Format of the thumbnail image"),
    tag(0x5013, "ThumbnailWidth", LONG, ONE, "Width of the thumbnail in pixels"),
    tag(0x5014, "ThumbnailHeight", LONG, ONE, "Height of the thumbnail in pixels"),
    tag(0x5015, "ThumbnailColorDepth", SHORT, ONE, "Bits per pixel of the thumbnail"),
    tag(0x5016, "ThumbnailPlanes", SHORT, ONE, "Number of color planes in the thumbnail"),
    tag(0x5017, "ThumbnailRawBytes", LONG, ONE, "Byte count of one row of the thumbnail"),
    tag(0x5018, "ThumbnailSize", LONG, ONE, "Total size of the thumbnail in bytes"),
    tag(0x5019, "ThumbnailCompressedSize", LONG, ONE, "Compressed size of the thumbnail in bytes"),
    tag(0x501A, "ColorTransferFunction", BYTE, ANY, "Table of transfer function values"),
    tag(0x501B, "ThumbnailData", BYTE, ANY, "Raw thumbnail bits"),
    tag(0x5020, "ThumbnailImageWidth", MIXED, ONE, "Number of pixels per row in the thumbnail"),
    tag(0x5021, "ThumbnailImageHeight", MIXED, ONE, "Number of pixel rows in the thumbnail"),
    tag(0x5022, "ThumbnailBitsPerSample", SHORT, ANY, "Bits per color component in the thumbnail"),
    tag(0x5023, "ThumbnailCompression", SHORT, ONE, "Compression scheme of the thumbnail"),
    tag(0x5024, "ThumbnailPhotometricInterp", SHORT, ONE, "How thumbnail pixel data is interpreted"),
    tag(0x5025, "ThumbnailImageDescription", ASCII, ANY, "Title of the thumbnail"),
    tag(0x5026, "ThumbnailEquipMake", ASCII, ANY, "Manufacturer of the thumbnail equipment"),
    tag(0x5027, "ThumbnailEquipModel", ASCII, ANY, "Model of the thumbnail equipment"),
    tag(0x5028, "ThumbnailStripOffsets", MIXED, ANY, "Byte offset of each thumbnail strip"),
    tag(0x5029, "ThumbnailOrientation", SHORT, ONE, "Orientation of the thumbnail"),
    tag(0x502A, "ThumbnailSamplesPerPixel", SHORT, ONE, "Color components per thumbnail pixel"),
    tag(0x502B, "ThumbnailRowsPerStrip", MIXED, ONE, "Rows per thumbnail strip"),
    tag(0x502C, "ThumbnailStripBytesCount", MIXED, ANY, "Byte count of each thumbnail strip"),
    tag(0x502D, "ThumbnailResolutionX", RATIONAL, ONE, "Thumbnail pixels per unit, horizontal"),
    tag(0x502E, "ThumbnailResolutionY", RATIONAL, ONE, "Thumbnail pixels per unit, vertical"),
    tag(0x502F, "ThumbnailPlanarConfig", SHORT, ONE, "Thumbnail component storage layout"),
    tag(0x5030, "ThumbnailResolutionUnit", SHORT, ONE, "Unit of the thumbnail resolution"),
    tag(0x5031, "ThumbnailTransferFunction", SHORT, ANY, "Transfer function of the thumbnail"),
    tag(0x5032, "ThumbnailSoftwareUsed", ASCII, ANY, "Software used to create the thumbnail"),
    tag(0x5033, "ThumbnailDateTime", ASCII, TagCount::Fixed(20), "Date and time the thumbnail was created"),
    tag(0x5034, "ThumbnailArtist", ASCII, ANY, "Person who created the thumbnail"),
    tag(0x5035, "ThumbnailWhitePoint", RATIONAL, TWO, "White point chromaticity of the thumbnail"),
    tag(0x5036, "ThumbnailPrimaryChromaticities", RATIONAL, SIX, "Primary chromaticities of the thumbnail"),
    tag(0x5037, "ThumbnailYCbCrCoefficients", RATIONAL, THREE, "RGB to YCbCr coefficients of the thumbnail"),
    tag(0x5038, "ThumbnailYCbCrSubsampling", SHORT, TWO, "Chroma subsampling of the thumbnail"),
    tag(0x5039, "ThumbnailYCbCrPositioning", SHORT, ONE, "Chroma positioning of the thumbnail"),
    tag(0x503A, "ThumbnailRefBlackWhite", RATIONAL, SIX, "Reference black and white of the thumbnail"),
    tag(0x503B, "ThumbnailCopyRight", ASCII, ANY, "Copyright notice of the thumbnail"),
    tag(0x5090, "LuminanceTable", SHORT, TagCount::Fixed(64), "Luminance quantization table"),
    tag(0x5091, "ChrominanceTable", SHORT, TagCount::Fixed(64), "Chrominance quantization table"),
    tag(0x5100, "FrameDelay", LONG, ANY, "Delay between GIF frames in hundredths of a second"),
    tag(0x5101, "LoopCount", SHORT, ONE, "Number of times an animated GIF loops"),
    tag(0x5102, "GlobalPalette", BYTE, ANY, "Global GIF palette"),
    tag(0x5103, "IndexBackground", BYTE, ONE, "Palette index of the background color"),
    tag(0x5104, "IndexTransparent", BYTE, ONE, "Palette index of the transparent color"),
    tag(0x5110, "PixelUnit", BYTE, ONE, "Unit of PixelPerUnitX and PixelPerUnitY"),
    tag(0x5111, "PixelPerUnitX", LONG, ONE, "Pixels per unit, horizontal"),
    tag(0x5112, "PixelPerUnitY", LONG, ONE, "Pixels per unit, vertical"),
    tag(0x5113, "PaletteHistogram", BYTE, ANY, "Palette histogram"),
    tag(0x8298, "Copyright", ASCII, ANY, "Copyright notice"),
    tag(0x829A, "ExifExposureTime", RATIONAL, ONE, "Exposure time in seconds"),
    tag(0x829D, "ExifFNumber", RATIONAL, ONE, "F Number (F-Stop?)"),
    tag(0x8769, "ExifIFD", LONG, ONE, "Offset of the EXIF IFD"),
    tag(0x8773, "ICCProfile", BYTE, ANY, "Embedded ICC color profile"),
    tag(0x8822, "ExifExposureProg", SHORT, ONE, "Class of program used to set exposure"),
    tag(0x8824, "ExifSpectralSense", ASCII, ANY, "Spectral sensitivity of each channel"),
    tag(0x8825, "GpsIFD", LONG, ONE, "Offset of the GPS IFD"),
    tag(0x8827, "ExifISOSpeed", SHORT, ANY, "ISO speed and ISO latitude of the camera or input device as specified in ISO 12232"),
    tag(0x8828, "ExifOECF", UNDEFINED, ANY, "Opto-electronic conversion function"),
    tag(0x9000, "ExifVer", UNDEFINED, FOUR, "Version of the EXIF standard supported"),
    tag(0x9003, "ExifDTOrig", ASCII, TagCount::Fixed(20), "Date and time when the original image data was generated/taken"),
    tag(0x9004, "ExifDTDigitized", ASCII, TagCount::Fixed(20), "Date and time when the image was stored as digital data."),
    tag(0x9101, "ExifCompConfig", UNDEFINED, FOUR, "Information specific to compressed data."),
    tag(0x9102, "ExifCompBPP", RATIONAL, ONE, "Information specific to compressed data."),
    tag(0x9201, "ExifShutterSpeed", SRATIONAL, ONE, "Shutter speed. The unit is the Additive System of Photographic Exposure (APEX) value."),
    tag(0x9202, "ExifAperture", RATIONAL, ONE, "Lens aperture. The unit is the APEX value."),
    tag(0x9203, "ExifBrightness", SRATIONAL, ONE, "Brightness value in APEX units"),
    tag(0x9204, "ExifExposureBias", SRATIONAL, ONE, "Exposure bias in APEX units"),
    tag(0x9205, "ExifMaxAperture", RATIONAL, ONE, "Smallest F number of the lens in APEX units"),
    tag(0x9206, "ExifSubjectDist", RATIONAL, ONE, "Distance to the subject in meters"),
    tag(0x9207, "ExifMeteringMode", SHORT, ONE, "Metering mode"),
    tag(0x9208, "ExifLightSource", SHORT, ONE, "Type of light source"),
    tag(0x9209, "ExifFlash", SHORT, ONE, "0x0000 - flash did not fire 0x0001 - flash fired 0x0005 - strobe return light not detected"),
    tag(0x920A, "ExifFocalLength", RATIONAL, ONE, "Actual focal length, in millimeters, of the lens. Conversion is not made to the focal length of a 35 millimeter film camera."),
    tag(0x927C, "ExifMakerNote", UNDEFINED, ANY, "Note tag. A tag used by manufacturers of EXIF writers to record information. The contents are up to the manufacturer."),
    tag(0x9286, "ExifUserComment", UNDEFINED, ANY, "Comments from the user"),
    tag(0x9290, "ExifDTSubsec", ASCII, ANY, "Fractions of a second for DateTime"),
    tag(0x9291, "ExifDTOrigSS", ASCII, ANY, "Fractions of a second for ExifDTOrig"),
    tag(0x9292, "ExifDTDigSS", ASCII, ANY, "Fractions of a second for ExifDTDigitized"),
    tag(0xA000, "ExifFPXVer", UNDEFINED, FOUR, "FlashPix format version"),
    tag(0xA001, "ExifColorSpace", SHORT, ONE, "Color space: 1 sRGB, 0xFFFF uncalibrated"),
    tag(0xA002, "ExifPixXDim", MIXED, ONE, "Valid width of the compressed image"),
    tag(0xA003, "ExifPixYDim", MIXED, ONE, "Valid height of the compressed image"),
    tag(0xA004, "ExifRelatedWav", ASCII, TagCount::Fixed(13), "Name of a related audio file"),
    tag(0xA005, "ExifInterop", LONG, ONE, "Offset of the interoperability IFD"),
    tag(0xA20B, "ExifFlashEnergy", RATIONAL, ONE, "Strobe energy in beam candle power seconds"),
    tag(0xA20C, "ExifSpatialFR", UNDEFINED, ANY, "Spatial frequency table"),
    tag(0xA20E, "ExifFocalXRes", RATIONAL, ONE, "Focal plane pixels per unit, horizontal"),
    tag(0xA20F, "ExifFocalYRes", RATIONAL, ONE, "Focal plane pixels per unit, vertical"),
    tag(0xA210, "ExifFocalResUnit", SHORT, ONE, "Unit of the focal plane resolution"),
    tag(0xA214, "ExifSubjectLoc", SHORT, TWO, "Location of the main subject"),
    tag(0xA215, "ExifExposureIndex", RATIONAL, ONE, "Exposure index selected on the camera"),
    tag(0xA217, "ExifSensingMethod", SHORT, ONE, "Image sensor type on the camera or input device."),
    tag(0xA300, "ExifFileSource", UNDEFINED, ONE, "The image source. If a DSC recorded the image, the value of this tag is 3."),
    tag(0xA301, "ExifSceneType", UNDEFINED, ONE, "The type of scene. If a DSC recorded the image, the value of this tag must be set to 1, indicating that the image was directly photographed."),
    tag(0xA302, "ExifCfaPattern", UNDEFINED, ANY, "The color filter array (CFA) geometric pattern of the image sensor when a one-chip color area sensor is used. It does not apply to all sensing methods."),
];

/// Look up the descriptor for a tag id.
pub fn lookup(id: u16) -> Option<&'static TagDescriptor> {
    TAGS.binary_search_by_key(&id, |t| t.id)
        .ok()
        .map(|idx| &TAGS[idx])
}

/// Human-readable name for a tag id, or `0xNNNN` when the id is not registered.
///
/// ```rust
/// use exif_dump::exif::tag_name;
///
/// assert_eq!(tag_name(0x010F), "EquipMake");
/// assert_eq!(tag_name(0xC4A5), "0xC4A5");
/// ```
pub fn tag_name(id: u16) -> Cow<'static, str> {
    match lookup(id) {
        Some(desc) => Cow::Borrowed(desc.name),
        None => Cow::Owned(format!("0x{id:04X}")),
    }
}

/// All registered tags, sorted by id.
pub fn descriptors() -> &'static [TagDescriptor] {
    TAGS
}
