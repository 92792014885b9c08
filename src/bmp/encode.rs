//! BMP encoder: uncompressed 24-bit BMP.

use super::header::{FileHeader, InfoBlock};
use super::utils::checked_row_stride;
use crate::error::BitmapError;
use crate::grid::PixelGrid;

/// Growable output buffer with seek-then-write semantics.
///
/// Writing past the end zero-fills the gap; writing before the end
/// overwrites, like a file opened for writing.
struct Writer {
    out: Vec<u8>,
    pos: usize,
}

impl Writer {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
            pos: 0,
        }
    }

    fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        if self.pos > self.out.len() {
            self.out.resize(self.pos, 0);
        }
        let end = self.pos + bytes.len();
        let overlap = end.min(self.out.len()) - self.pos;
        self.out[self.pos..self.pos + overlap].copy_from_slice(&bytes[..overlap]);
        self.out.extend_from_slice(&bytes[overlap..]);
        self.pos = end;
    }

    fn write_u16_le(&mut self, v: u16) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u32_le(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn into_inner(self) -> Vec<u8> {
        self.out
    }
}

/// Serialize a bitmap. Header fields are written exactly as given.
pub(crate) fn encode_bmp(
    header: &FileHeader,
    info: &InfoBlock,
    grid: &PixelGrid,
) -> Result<Vec<u8>, BitmapError> {
    let (width, height) = (grid.width(), grid.height());
    if (info.width, info.height) != (width, height) {
        return Err(BitmapError::InvalidHeader(format!(
            "info block says {}x{} but the pixel grid is {width}x{height}",
            info.width, info.height
        )));
    }

    let w = width as usize;
    let bpp = info.bit_depth.bytes_per_pixel();
    let stride = checked_row_stride(w, bpp)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    let pad_bytes = stride - w * bpp;
    let pixel_data_size = stride
        .checked_mul(height as usize)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    let offset = header.pixel_data_offset as usize;

    let mut out = Writer::with_capacity(offset.max(54).saturating_add(pixel_data_size));
    write_headers(&mut out, header, info);

    out.set_position(offset);
    let mut row_buf = Vec::with_capacity(stride);
    for row in grid.rows() {
        row_buf.clear();
        for px in row {
            row_buf.extend_from_slice(&[px.b, px.g, px.r]);
        }
        row_buf.extend(core::iter::repeat_n(0u8, pad_bytes));
        out.write_bytes(&row_buf);
    }

    Ok(out.into_inner())
}

fn write_headers(out: &mut Writer, header: &FileHeader, info: &InfoBlock) {
    // File header (14 bytes)
    out.write_bytes(&header.signature);
    out.write_u32_le(header.file_size);
    out.write_u32_le(header.reserved);
    out.write_u32_le(header.pixel_data_offset);

    // DIB header (BITMAPINFOHEADER, 40 bytes)
    out.write_u32_le(info.info_block_size);
    out.write_u32_le(info.width);
    out.write_u32_le(info.height);
    out.write_u16_le(info.planes);
    out.write_u16_le(info.bit_depth.bits());
    out.write_u32_le(info.compression.to_u32());
    out.write_u32_le(info.image_data_size);
    out.write_u32_le(info.x_pixels_per_meter);
    out.write_u32_le(info.y_pixels_per_meter);
    out.write_u32_le(info.colors_used);
    out.write_u32_le(info.colors_important);
}
