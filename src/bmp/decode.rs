//! BMP decoder for uncompressed 24-bit bitmaps.

use log::{trace, warn};
use rgb::RGB8;

use super::header::{
    BitDepth, Compression, DEFAULT_PIXEL_DATA_OFFSET, FileHeader, INFO_BLOCK_SIZE, InfoBlock,
    SIGNATURE,
};
use super::utils::checked_row_stride;
use crate::error::BitmapError;
use crate::grid::{PixelGrid, checked_len};
use crate::limits::Limits;

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    fn set_position(&mut self, pos: usize) -> Result<(), BitmapError> {
        if pos > self.data.len() {
            return Err(BitmapError::UnexpectedEof);
        }
        self.pos = pos;
        Ok(())
    }

    fn skip(&mut self, n: usize) -> Result<(), BitmapError> {
        let new_pos = self.pos.checked_add(n).ok_or(BitmapError::UnexpectedEof)?;
        self.set_position(new_pos)
    }

    fn read_slice(&mut self, n: usize) -> Result<&'a [u8], BitmapError> {
        let end = self.pos.checked_add(n).ok_or(BitmapError::UnexpectedEof)?;
        let slice = self
            .data
            .get(self.pos..end)
            .ok_or(BitmapError::UnexpectedEof)?;
        self.pos = end;
        Ok(slice)
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BitmapError> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.read_slice(N)?);
        Ok(buf)
    }

    fn get_u16_le(&mut self) -> Result<u16, BitmapError> {
        self.read_fixed_bytes().map(u16::from_le_bytes)
    }

    fn get_u32_le(&mut self) -> Result<u32, BitmapError> {
        self.read_fixed_bytes().map(u32::from_le_bytes)
    }
}

// ── Header parsing ──────────────────────────────────────────────────

/// Parse the file header and info block without touching pixel data.
pub(crate) fn parse_headers(data: &[u8]) -> Result<(FileHeader, InfoBlock), BitmapError> {
    read_headers(&mut Cursor::new(data))
}

fn read_headers(cursor: &mut Cursor<'_>) -> Result<(FileHeader, InfoBlock), BitmapError> {
    let signature: [u8; 2] = cursor.read_fixed_bytes()?;
    if signature != SIGNATURE {
        return Err(BitmapError::UnrecognizedFormat { found: signature });
    }
    let header = FileHeader {
        signature,
        file_size: cursor.get_u32_le()?,
        reserved: cursor.get_u32_le()?,
        pixel_data_offset: cursor.get_u32_le()?,
    };

    let info_block_size = cursor.get_u32_le()?;
    if info_block_size < INFO_BLOCK_SIZE {
        return Err(BitmapError::UnsupportedVariant(format!(
            "BMP info header size {info_block_size}, need at least {INFO_BLOCK_SIZE}"
        )));
    }
    let width = cursor.get_u32_le()?;
    let height = cursor.get_u32_le()?;
    let planes = cursor.get_u16_le()?;
    let bits = cursor.get_u16_le()?;
    let compression = cursor.get_u32_le()?;
    let image_data_size = cursor.get_u32_le()?;
    let x_pixels_per_meter = cursor.get_u32_le()?;
    let y_pixels_per_meter = cursor.get_u32_le()?;
    let colors_used = cursor.get_u32_le()?;
    let colors_important = cursor.get_u32_le()?;

    trace!("Width: {width}");
    trace!("Height: {height}");
    trace!("Bit depth: {bits}");
    trace!("Compression: {compression}");
    trace!("Pixel data offset: {}", header.pixel_data_offset);

    if width == 0 {
        return Err(BitmapError::InvalidHeader("BMP width is zero".into()));
    }
    if height == 0 {
        return Err(BitmapError::InvalidHeader("BMP height is zero".into()));
    }
    if (width as i32) < 0 {
        return Err(BitmapError::InvalidHeader(format!(
            "BMP width is negative ({})",
            width as i32
        )));
    }
    if (height as i32) < 0 {
        return Err(BitmapError::UnsupportedVariant(
            "top-down BMP (negative height)".into(),
        ));
    }

    let bit_depth = BitDepth::from_bits(bits).ok_or_else(|| {
        BitmapError::UnsupportedVariant(format!("BMP bit depth {bits} unsupported"))
    })?;
    let compression = Compression::from_u32(compression).ok_or_else(|| {
        BitmapError::UnsupportedVariant(format!("BMP compression {compression} unsupported"))
    })?;

    if header.pixel_data_offset != DEFAULT_PIXEL_DATA_OFFSET {
        warn!(
            "non-standard pixel data offset {} (info block size {info_block_size})",
            header.pixel_data_offset
        );
    }

    let info = InfoBlock {
        info_block_size,
        width,
        height,
        planes,
        bit_depth,
        compression,
        image_data_size,
        x_pixels_per_meter,
        y_pixels_per_meter,
        colors_used,
        colors_important,
    };
    Ok((header, info))
}

// ── Full decode ─────────────────────────────────────────────────────

/// Decode headers and pixels. Pixels are returned in storage order, RGB.
pub(crate) fn decode_bmp(
    data: &[u8],
    limits: Option<&Limits>,
) -> Result<(FileHeader, InfoBlock, PixelGrid), BitmapError> {
    if let Some(limits) = limits {
        limits.check_input(data.len())?;
    }
    let mut cursor = Cursor::new(data);
    let (header, info) = read_headers(&mut cursor)?;
    if let Some(limits) = limits {
        limits.check_image(&info)?;
    }

    if header.file_size != 0 && header.file_size as usize != data.len() {
        warn!(
            "BMP file size field ({}) doesn't match actual size ({})",
            header.file_size,
            data.len()
        );
    }

    let (width, height) = (info.width, info.height);
    let pixel_count = checked_len(width, height)?;
    let bpp = info.bit_depth.bytes_per_pixel();

    let w = width as usize;
    let h = height as usize;
    let row_bytes = w
        .checked_mul(bpp)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    let stride = checked_row_stride(w, bpp)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    let pad = stride - row_bytes;

    cursor.set_position(header.pixel_data_offset as usize)?;

    // Reject before allocating: every row but the last needs its padding.
    let needed = stride
        .checked_mul(h - 1)
        .and_then(|n| n.checked_add(row_bytes))
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    if cursor.remaining() < needed {
        return Err(BitmapError::UnexpectedEof);
    }

    let mut pixels = Vec::with_capacity(pixel_count);
    for row in 0..h {
        let raw = cursor.read_slice(row_bytes)?;
        pixels.extend(raw.chunks_exact(bpp).map(|bgr| RGB8::new(bgr[2], bgr[1], bgr[0])));

        if row + 1 < h {
            cursor.skip(pad)?;
        } else if cursor.remaining() < pad {
            warn!("BMP is missing the padding after its final row");
        }
    }

    Ok((header, info, PixelGrid::from_storage(width, height, pixels)))
}
