use rgb::RGB8;

use crate::bmp::InfoBlock;
use crate::error::BitmapError;

/// Caps checked by [`DecodeRequest`](crate::DecodeRequest) before any pixel
/// memory is allocated.
///
/// Every field defaults to `None` (unlimited).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    /// Largest accepted input, in bytes, checked before the headers are read.
    pub max_input_bytes: Option<u64>,
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Maximum `width * height`.
    pub max_pixels: Option<u64>,
    /// Bytes held by the decoded grid, one [`RGB8`] per pixel. Row padding
    /// is not stored, so this is `3 * width * height`.
    pub max_grid_bytes: Option<u64>,
}

impl Limits {
    pub(crate) fn check_input(&self, len: usize) -> Result<(), BitmapError> {
        within("input size", len as u64, self.max_input_bytes)
    }

    /// Check the declared dimensions of `info` and the grid they would need.
    pub(crate) fn check_image(&self, info: &InfoBlock) -> Result<(), BitmapError> {
        within("width", info.width.into(), self.max_width.map(u64::from))?;
        within("height", info.height.into(), self.max_height.map(u64::from))?;
        let pixels = u64::from(info.width) * u64::from(info.height);
        within("pixel count", pixels, self.max_pixels)?;
        within(
            "decoded grid size",
            grid_bytes(pixels),
            self.max_grid_bytes,
        )
    }
}

fn grid_bytes(pixels: u64) -> u64 {
    pixels.saturating_mul(size_of::<RGB8>() as u64)
}

fn within(what: &str, value: u64, limit: Option<u64>) -> Result<(), BitmapError> {
    match limit {
        Some(max) if value > max => Err(BitmapError::LimitExceeded(format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}
