//! # bmpdraw
//!
//! Uncompressed 24-bit Windows bitmap (BMP) decoder and encoder, with simple
//! filled-shape drawing on the decoded pixels.
//!
//! ## Supported Format
//!
//! - `BITMAPINFOHEADER` (or larger) info block, 24 bits per pixel, `BI_RGB`
//! - Rows padded to 4-byte boundaries, pixel array at any declared offset
//! - Header fields are kept verbatim across a load/save cycle
//!
//! ## Non-Goals
//!
//! - RLE or bitfield compression
//! - Palettes and bit depths other than 24
//! - Other image formats
//!
//! ## Coordinates
//!
//! Pixel coordinates are 1-based. `(1, 1)` is the top-left pixel of the
//! displayed image and `(width, height)` the bottom-right. Rows returned by
//! [`Bitmap::get_pixels`] are in file order, which for BMP is bottom-up.
//!
//! ## Usage
//!
//! ```
//! use bmpdraw::{Bitmap, Half, hex_to_rgb};
//!
//! let mut bitmap = Bitmap::new(64, 48)?;
//! bitmap.draw_pokeball(32, 24, 20)?;
//! bitmap.draw_half_circle(10, 40, 5, Half::Lower, 0x9ba322)?;
//! bitmap.set_pixel(1, 1, 179, 66, 245)?;
//! assert_eq!(bitmap.get_pixel(1, 1)?, hex_to_rgb(0xb342f5));
//!
//! let bytes = bitmap.to_bytes()?;
//! assert_eq!(Bitmap::from_bytes(&bytes)?, bitmap);
//! # Ok::<(), bmpdraw::BitmapError>(())
//! ```

#![forbid(unsafe_code)]

mod bitmap;
mod color;
mod error;
mod grid;
mod info;
mod limits;

pub mod bmp;
pub mod draw;

mod decode;

// Re-exports
pub use bitmap::Bitmap;
pub use color::{hex_to_rgb, parse_hex_color};
pub use decode::DecodeRequest;
pub use draw::{Canvas, Half};
pub use error::BitmapError;
pub use grid::PixelGrid;
pub use info::ImageInfo;
pub use limits::Limits;
pub use rgb::RGB8;
