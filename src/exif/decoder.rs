use super::types::{ByteOrder, TypeCode};

/// A decoded payload plus the number of trailing bytes that did not form a
/// complete element and were dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedValue {
    pub text: String,
    pub dropped_bytes: usize,
}

impl DecodedValue {
    fn complete(text: String) -> Self {
        Self {
            text,
            dropped_bytes: 0,
        }
    }
}

/// Render a record payload as text.
///
/// Numeric arrays come out as `[a,b,...]`, rationals as `[n/d,...]`, ASCII as
/// plain text with one trailing NUL removed. Byte, Undefined and unrecognized
/// types are not decoded and render as `Label[declared_len]`.
///
/// # Example
///
/// ```rust
/// use exif_dump::exif::{decode_value, ByteOrder, TypeCode};
///
/// let text = decode_value(TypeCode::Short, &[0x02, 0x00, 0x03, 0x00], 4, ByteOrder::Little);
/// assert_eq!(text, "[2,3]");
/// ```
pub fn decode_value(
    type_code: TypeCode,
    payload: &[u8],
    declared_len: u32,
    order: ByteOrder,
) -> String {
    decode_value_checked(type_code, payload, declared_len, order).text
}

/// Same as [`decode_value`] but also reports how many trailing bytes were dropped.
pub fn decode_value_checked(
    type_code: TypeCode,
    payload: &[u8],
    declared_len: u32,
    order: ByteOrder,
) -> DecodedValue {
    match type_code {
        TypeCode::Ascii => DecodedValue::complete(decode_ascii(payload)),
        TypeCode::Short => join_elements(payload, 2, |c| order.u16_from([c[0], c[1]]).to_string()),
        TypeCode::Long => join_elements(payload, 4, |c| {
            order.u32_from([c[0], c[1], c[2], c[3]]).to_string()
        }),
        TypeCode::SLong => join_elements(payload, 4, |c| {
            order.i32_from([c[0], c[1], c[2], c[3]]).to_string()
        }),
        TypeCode::Rational => join_elements(payload, 8, |c| {
            let num = order.u32_from([c[0], c[1], c[2], c[3]]);
            let den = order.u32_from([c[4], c[5], c[6], c[7]]);
            format!("{num}/{den}")
        }),
        TypeCode::SRational => join_elements(payload, 8, |c| {
            let num = order.i32_from([c[0], c[1], c[2], c[3]]);
            let den = order.i32_from([c[4], c[5], c[6], c[7]]);
            format!("{num}/{den}")
        }),
        TypeCode::Byte
        | TypeCode::Undefined
        | TypeCode::PixelFormat4bppIndexed
        | TypeCode::Unknown(_) => DecodedValue::complete(format!("{type_code}[{declared_len}]")),
    }
}

/// One character per byte. Non-ASCII bytes become `?`.
fn decode_ascii(payload: &[u8]) -> String {
    let text = match payload.split_last() {
        Some((&0, rest)) => rest,
        _ => payload,
    };
    text.iter()
        .map(|&b| if b.is_ascii() { b as char } else { '?' })
        .collect()
}

fn join_elements<F>(payload: &[u8], width: usize, render: F) -> DecodedValue
where
    F: Fn(&[u8]) -> String,
{
    let chunks = payload.chunks_exact(width);
    let dropped_bytes = chunks.remainder().len();
    let parts: Vec<String> = chunks.map(render).collect();
    DecodedValue {
        text: format!("[{}]", parts.join(",")),
        dropped_bytes,
    }
}
