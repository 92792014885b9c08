//! File header and `BITMAPINFOHEADER` records.

use super::utils::{row_padding, row_stride};

/// Size of the `BITMAPFILEHEADER` in bytes.
pub const FILE_HEADER_SIZE: u32 = 14;
/// Size of the `BITMAPINFOHEADER` this crate reads and writes.
pub const INFO_BLOCK_SIZE: u32 = 40;
/// Offset of the pixel array for a plain 14 + 40 byte header.
pub const DEFAULT_PIXEL_DATA_OFFSET: u32 = FILE_HEADER_SIZE + INFO_BLOCK_SIZE;
/// Magic bytes at the start of a Windows bitmap.
pub const SIGNATURE: [u8; 2] = *b"BM";

/// Bits per pixel. Only uncompressed 24-bit RGB is supported.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// 8 bits each of blue, green, red.
    #[default]
    Rgb24,
}

impl BitDepth {
    pub fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            24 => Some(Self::Rgb24),
            _ => None,
        }
    }

    pub fn bits(self) -> u16 {
        match self {
            Self::Rgb24 => 24,
        }
    }

    pub fn bytes_per_pixel(self) -> usize {
        usize::from(self.bits() / 8)
    }
}

/// Compression method of the pixel array.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Compression {
    /// `BI_RGB`, no compression.
    #[default]
    Rgb,
}

impl Compression {
    pub fn from_u32(num: u32) -> Option<Self> {
        match num {
            0 => Some(Self::Rgb),
            _ => None,
        }
    }

    pub fn to_u32(self) -> u32 {
        match self {
            Self::Rgb => 0,
        }
    }
}

/// The 14-byte header at the start of every BMP file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FileHeader {
    pub signature: [u8; 2],
    /// Declared file size. Informational only; may be zero or stale.
    pub file_size: u32,
    /// Preserved verbatim.
    pub reserved: u32,
    /// Byte offset of the pixel array from the start of the file.
    pub pixel_data_offset: u32,
}

impl Default for FileHeader {
    fn default() -> Self {
        Self {
            signature: SIGNATURE,
            file_size: 0,
            reserved: 0,
            pixel_data_offset: DEFAULT_PIXEL_DATA_OFFSET,
        }
    }
}

/// The DIB info block describing geometry and pixel format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InfoBlock {
    pub info_block_size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bit_depth: BitDepth,
    pub compression: Compression,
    /// Declared pixel array size. Not validated or recomputed.
    pub image_data_size: u32,
    pub x_pixels_per_meter: u32,
    pub y_pixels_per_meter: u32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoBlock {
    /// Info block for a freshly created `width` x `height` bitmap.
    ///
    /// `image_data_size` counts pixel bytes without row padding.
    pub fn new(width: u32, height: u32) -> Self {
        let bit_depth = BitDepth::Rgb24;
        let image_data_size = (bit_depth.bytes_per_pixel() as u64)
            .saturating_mul(u64::from(width))
            .saturating_mul(u64::from(height));
        Self {
            info_block_size: INFO_BLOCK_SIZE,
            width,
            height,
            planes: 1,
            bit_depth,
            compression: Compression::Rgb,
            image_data_size: u32::try_from(image_data_size).unwrap_or(u32::MAX),
            x_pixels_per_meter: 0,
            y_pixels_per_meter: 0,
            colors_used: 0,
            colors_important: 0,
        }
    }

    /// Bytes of zero padding after each stored row.
    pub fn row_padding(&self) -> usize {
        row_padding(self.width as usize * self.bit_depth.bytes_per_pixel())
    }

    /// Bytes per stored row, padding included.
    pub fn row_stride(&self) -> usize {
        row_stride(self.width as usize * self.bit_depth.bytes_per_pixel())
    }
}
