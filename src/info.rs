use crate::bmp::{self, BitDepth};
use crate::error::BitmapError;

/// Image metadata read from the headers alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub bit_depth: BitDepth,
    /// Where the pixel array starts.
    pub pixel_data_offset: u32,
}

impl ImageInfo {
    /// Probe a BMP's headers without decoding pixels.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        let (header, info) = bmp::probe(data)?;
        Ok(Self {
            width: info.width,
            height: info.height,
            bit_depth: info.bit_depth,
            pixel_data_offset: header.pixel_data_offset,
        })
    }
}
