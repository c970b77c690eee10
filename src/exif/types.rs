use serde::{Serialize, Serializer};
use std::fmt;

/// The value type declared by a property record.
///
/// Numeric codes follow the TIFF/EXIF field types, plus the GDI+ pixel-format
/// code that some encoders emit. Any other code is kept as [`TypeCode::Unknown`]
/// so it can still be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    /// Array of bytes.
    Byte,
    /// NUL-terminated ASCII string. The length includes the terminator.
    Ascii,
    /// Array of unsigned 16-bit integers.
    Short,
    /// Array of unsigned 32-bit integers.
    Long,
    /// Array of unsigned 32-bit numerator/denominator pairs.
    Rational,
    /// Array of bytes that can hold values of any type.
    Undefined,
    /// Array of signed 32-bit integers.
    SLong,
    /// Array of signed 32-bit numerator/denominator pairs.
    SRational,
    /// 4 bits per pixel, indexed.
    PixelFormat4bppIndexed,
    /// Any code not listed above.
    Unknown(u32),
}

impl TypeCode {
    /// Map a raw type code to its variant.
    pub fn from_raw(code: u32) -> Self {
        match code {
            1 => Self::Byte,
            2 => Self::Ascii,
            3 => Self::Short,
            4 => Self::Long,
            5 => Self::Rational,
            7 => Self::Undefined,
            9 => Self::SLong,
            10 => Self::SRational,
            197634 => Self::PixelFormat4bppIndexed,
            other => Self::Unknown(other),
        }
    }

    /// The raw numeric code.
    pub fn raw(self) -> u32 {
        match self {
            Self::Byte => 1,
            Self::Ascii => 2,
            Self::Short => 3,
            Self::Long => 4,
            Self::Rational => 5,
            Self::Undefined => 7,
            Self::SLong => 9,
            Self::SRational => 10,
            Self::PixelFormat4bppIndexed => 197634,
            Self::Unknown(code) => code,
        }
    }

    /// Size in bytes of one element, if the type has a fixed element width.
    pub fn element_width(self) -> Option<usize> {
        match self {
            Self::Byte | Self::Ascii | Self::Undefined => Some(1),
            Self::Short => Some(2),
            Self::Long | Self::SLong => Some(4),
            Self::Rational | Self::SRational => Some(8),
            Self::PixelFormat4bppIndexed | Self::Unknown(_) => None,
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte => f.write_str("Byte"),
            Self::Ascii => f.write_str("ASCII"),
            Self::Short => f.write_str("Short"),
            Self::Long => f.write_str("Long"),
            Self::Rational => f.write_str("Rational"),
            Self::Undefined => f.write_str("Undefined"),
            Self::SLong => f.write_str("SLong"),
            Self::SRational => f.write_str("SRational"),
            Self::PixelFormat4bppIndexed => f.write_str("PixelFormat4bppIndexed"),
            Self::Unknown(code) => write!(f, "{code}"),
        }
    }
}

impl Serialize for TypeCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Byte order of multi-byte values inside a record payload.
///
/// EXIF data carries its order in the TIFF header (`II` little, `MM` big).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

impl ByteOrder {
    /// Detect the byte order from a TIFF header marker.
    pub fn from_tiff_marker(marker: &[u8]) -> Option<Self> {
        match marker {
            b"II" => Some(Self::Little),
            b"MM" => Some(Self::Big),
            _ => None,
        }
    }

    pub fn u16_from(self, bytes: [u8; 2]) -> u16 {
        match self {
            Self::Little => u16::from_le_bytes(bytes),
            Self::Big => u16::from_be_bytes(bytes),
        }
    }

    pub fn u32_from(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::Little => u32::from_le_bytes(bytes),
            Self::Big => u32::from_be_bytes(bytes),
        }
    }

    pub fn i32_from(self, bytes: [u8; 4]) -> i32 {
        match self {
            Self::Little => i32::from_le_bytes(bytes),
            Self::Big => i32::from_be_bytes(bytes),
        }
    }
}

/// One raw property record as handed over by a container decoder.
///
/// `byte_length` is what the container declared; `payload` is what was
/// actually available. Only `payload` is ever indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRecord {
    pub tag_id: u16,
    pub type_code: TypeCode,
    pub byte_length: u32,
    pub payload: Vec<u8>,
}

impl PropertyRecord {
    /// Build a record whose declared length matches its payload.
    pub fn new(tag_id: u16, type_code: TypeCode, payload: Vec<u8>) -> Self {
        let byte_length = u32::try_from(payload.len()).unwrap_or(u32::MAX);
        Self {
            tag_id,
            type_code,
            byte_length,
            payload,
        }
    }
}
