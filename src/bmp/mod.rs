//! Uncompressed 24-bit BMP decoder and encoder.
//!
//! Use [`crate::Bitmap`] or [`crate::DecodeRequest`] for the public API.

mod decode;
mod encode;
mod header;
mod utils;

pub use header::{
    BitDepth, Compression, DEFAULT_PIXEL_DATA_OFFSET, FILE_HEADER_SIZE, FileHeader,
    INFO_BLOCK_SIZE, InfoBlock, SIGNATURE,
};

use crate::error::BitmapError;
use crate::grid::PixelGrid;
use crate::limits::Limits;

/// Parse only the file header and info block.
pub(crate) fn probe(data: &[u8]) -> Result<(FileHeader, InfoBlock), BitmapError> {
    decode::parse_headers(data)
}

/// Decode BMP data. Pixels come back in storage order as RGB.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
) -> Result<(FileHeader, InfoBlock, PixelGrid), BitmapError> {
    decode::decode_bmp(data, limits)
}

/// Encode to BMP.
pub(crate) fn encode(
    header: &FileHeader,
    info: &InfoBlock,
    grid: &PixelGrid,
) -> Result<Vec<u8>, BitmapError> {
    encode::encode_bmp(header, info, grid)
}
