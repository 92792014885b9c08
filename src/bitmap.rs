//! A 24-bit bitmap: headers plus pixel grid.

use std::io::{Read, Write};
use std::path::Path;

use imgref::ImgRef;
use log::debug;
use rgb::RGB8;

use crate::bmp::{self, FileHeader, InfoBlock};
use crate::decode::DecodeRequest;
use crate::draw::{self, Canvas, Half};
use crate::error::BitmapError;
use crate::grid::PixelGrid;

/// An uncompressed 24-bit BMP image.
///
/// The headers are fixed once the bitmap is created or loaded; only pixels
/// change afterwards.
///
/// ```no_run
/// use bmpdraw::{Bitmap, Half};
///
/// let mut bitmap = Bitmap::load("LoadTest.bmp")?;
/// bitmap.draw_pokeball(400, 200, 100)?;
/// bitmap.draw_circle(100, 200, 50, 0xb342f5)?;
/// bitmap.draw_rectangle(600, 300, 100, 10, 0x42f5bf)?;
/// bitmap.draw_half_circle(100, 500, 50, Half::Lower, 0x9ba322)?;
/// bitmap.save("LoadTestCopy.bmp")?;
/// # Ok::<(), bmpdraw::BitmapError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    header: FileHeader,
    info: InfoBlock,
    pixels: PixelGrid,
}

impl Bitmap {
    /// A black `width` x `height` bitmap with default headers.
    pub fn new(width: u32, height: u32) -> Result<Self, BitmapError> {
        Ok(Self {
            header: FileHeader::default(),
            info: InfoBlock::new(width, height),
            pixels: PixelGrid::new(width, height)?,
        })
    }

    /// Assemble a bitmap from explicit parts.
    ///
    /// The info block's dimensions must match the grid.
    pub fn from_parts(
        header: FileHeader,
        info: InfoBlock,
        pixels: PixelGrid,
    ) -> Result<Self, BitmapError> {
        if (info.width, info.height) != (pixels.width(), pixels.height()) {
            return Err(BitmapError::InvalidHeader(format!(
                "info block says {}x{} but the pixel grid is {}x{}",
                info.width,
                info.height,
                pixels.width(),
                pixels.height()
            )));
        }
        Ok(Self::from_decoded(header, info, pixels))
    }

    pub(crate) fn from_decoded(header: FileHeader, info: InfoBlock, pixels: PixelGrid) -> Self {
        Self {
            header,
            info,
            pixels,
        }
    }

    /// Read and decode the BMP file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BitmapError> {
        let path = path.as_ref();
        debug!("loading bitmap from {}", path.display());
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Encode and write to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), BitmapError> {
        let path = path.as_ref();
        debug!(
            "saving {}x{} bitmap to {}",
            self.width(),
            self.height(),
            path.display()
        );
        let data = self.to_bytes()?;
        std::fs::write(path, data)?;
        Ok(())
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        DecodeRequest::new(data).decode()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, BitmapError> {
        bmp::encode(&self.header, &self.info, &self.pixels)
    }

    /// Decode from a reader, consuming it to the end.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, BitmapError> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Encode into a writer.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), BitmapError> {
        writer.write_all(&self.to_bytes()?)?;
        writer.flush()?;
        Ok(())
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    pub fn info(&self) -> &InfoBlock {
        &self.info
    }

    pub fn width(&self) -> u32 {
        self.info.width
    }

    pub fn height(&self) -> u32 {
        self.info.height
    }

    /// The pixel grid, rows in storage order.
    pub fn get_pixels(&self) -> ImgRef<'_, RGB8> {
        self.pixels.as_imgref()
    }

    pub fn pixels(&self) -> &PixelGrid {
        &self.pixels
    }

    /// Pixel at 1-based `(x, y)`, `y = 1` being the top row.
    pub fn get_pixel(&self, x: i32, y: i32) -> Result<RGB8, BitmapError> {
        self.pixels.get(x, y)
    }

    /// See [`PixelGrid::set`].
    pub fn set_pixel(
        &mut self,
        x: i32,
        y: i32,
        red: i32,
        green: i32,
        blue: i32,
    ) -> Result<(), BitmapError> {
        self.pixels.set(x, y, red, green, blue)
    }

    pub fn put_pixel(&mut self, x: i32, y: i32, color: RGB8) -> Result<(), BitmapError> {
        self.plot(x.into(), y.into(), color)
    }

    pub fn draw_rectangle(
        &mut self,
        x0: i32,
        y0: i32,
        width: i32,
        height: i32,
        color: u32,
    ) -> Result<(), BitmapError> {
        draw::rectangle(self, x0, y0, width, height, color)
    }

    pub fn draw_circle(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        color: u32,
    ) -> Result<(), BitmapError> {
        draw::circle(self, cx, cy, radius, color)
    }

    pub fn draw_half_circle(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        half: Half,
        color: u32,
    ) -> Result<(), BitmapError> {
        draw::half_circle(self, cx, cy, radius, half, color)
    }

    pub fn draw_pokeball(&mut self, cx: i32, cy: i32, radius: i32) -> Result<(), BitmapError> {
        draw::pokeball(self, cx, cy, radius)
    }
}

impl Canvas for Bitmap {
    fn plot(&mut self, x: i64, y: i64, color: RGB8) -> Result<(), BitmapError> {
        self.pixels.put_wide(x, y, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bitmap_defaults() {
        let bitmap = Bitmap::new(100, 50).unwrap();
        assert_eq!(bitmap.header(), &FileHeader::default());
        assert_eq!(bitmap.info(), &InfoBlock::new(100, 50));
        assert_eq!(bitmap.get_pixels().height(), 50);
        assert_eq!(bitmap.get_pixels().width(), 100);
        assert_eq!(bitmap.get_pixel(100, 50).unwrap(), RGB8::default());
    }

    #[test]
    fn from_parts_checks_dimensions() {
        let grid = PixelGrid::new(3, 3).unwrap();
        let err = Bitmap::from_parts(FileHeader::default(), InfoBlock::new(3, 4), grid)
            .unwrap_err();
        assert!(matches!(err, BitmapError::InvalidHeader(_)));
    }

    #[test]
    fn reader_writer_roundtrip() {
        let mut bitmap = Bitmap::new(3, 2).unwrap();
        bitmap.set_pixel(2, 1, 1, 2, 3).unwrap();
        let mut buf = Vec::new();
        bitmap.write_to(&mut buf).unwrap();
        let back = Bitmap::read_from(buf.as_slice()).unwrap();
        assert_eq!(back, bitmap);
    }

    #[test]
    fn draw_methods_go_through_the_grid() {
        let mut bitmap = Bitmap::new(10, 10).unwrap();
        bitmap.draw_rectangle(1, 1, 3, 2, 0xFFFFFF).unwrap();
        bitmap.draw_circle(8, 8, 0, 0xFF0000).unwrap();
        bitmap.draw_half_circle(5, 5, 1, Half::Upper, 0x00FF00).unwrap();
        assert_eq!(bitmap.get_pixel(3, 2).unwrap(), RGB8::new(255, 255, 255));
        assert_eq!(bitmap.get_pixel(8, 8).unwrap(), RGB8::new(255, 0, 0));
        assert_eq!(bitmap.get_pixel(5, 5).unwrap(), RGB8::new(0, 255, 0));
        assert_eq!(bitmap.get_pixel(6, 5).unwrap(), RGB8::new(0, 255, 0));
        assert_eq!(bitmap.get_pixel(4, 4).unwrap(), RGB8::default());
    }
}
