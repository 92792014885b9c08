//! Packed 24-bit color helpers.

use rgb::RGB8;

use crate::error::BitmapError;

pub const BLACK: u32 = 0x000000;
pub const RED: u32 = 0xff0000;
pub const WHITE: u32 = 0xffffff;

/// Split a packed `0xRRGGBB` value into its channels.
///
/// Bits above 23 are ignored.
pub fn hex_to_rgb(packed: u32) -> RGB8 {
    RGB8::new((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
}

/// Parse a hex color string such as `"b342f5"`, `"#b342f5"` or `"0xB342F5"`.
///
/// Values wider than 24 bits are masked the same way [`hex_to_rgb`] masks them.
pub fn parse_hex_color(text: &str) -> Result<RGB8, BitmapError> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(BitmapError::InvalidColor(format!(
            "{text:?} is not a hex color code"
        )));
    }
    // Leading digits beyond the low 24 bits don't matter.
    let low = &digits[digits.len().saturating_sub(6)..];
    let packed = u32::from_str_radix(low, 16)
        .map_err(|e| BitmapError::InvalidColor(format!("{text:?}: {e}")))?;
    Ok(hex_to_rgb(packed))
}

/// Validate loose integer channels, as accepted by `set_pixel`.
pub(crate) fn checked_rgb(red: i32, green: i32, blue: i32) -> Result<RGB8, BitmapError> {
    match (u8::try_from(red), u8::try_from(green), u8::try_from(blue)) {
        (Ok(r), Ok(g), Ok(b)) => Ok(RGB8::new(r, g, b)),
        _ => Err(BitmapError::InvalidColor(format!(
            "({red}, {green}, {blue}) is not a valid RGB color"
        ))),
    }
}
