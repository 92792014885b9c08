//! Owned 2D grid of RGB pixels with 1-based coordinate access.

use core::fmt;

use imgref::{ImgRef, ImgVec};
use rgb::RGB8;

use crate::color::checked_rgb;
use crate::error::BitmapError;

/// Pixels of a bitmap, stored row by row in file order.
///
/// Public coordinates are 1-based. `x` selects column `x - 1`; `y` counts
/// from the top of the displayed image, so `y = 1` is the last stored row
/// (BMP rows are stored bottom-up).
#[derive(Clone)]
pub struct PixelGrid {
    pixels: ImgVec<RGB8>,
}

impl PixelGrid {
    /// A `width` x `height` grid of black pixels.
    pub fn new(width: u32, height: u32) -> Result<Self, BitmapError> {
        let len = checked_len(width, height)?;
        Ok(Self::from_storage(width, height, vec![RGB8::default(); len]))
    }

    /// Wrap pixels already in storage order. `buf.len()` must be `width * height`.
    pub(crate) fn from_storage(width: u32, height: u32, buf: Vec<RGB8>) -> Self {
        debug_assert_eq!(buf.len(), width as usize * height as usize);
        Self {
            pixels: ImgVec::new(buf, width as usize, height as usize),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width() as u32
    }

    pub fn height(&self) -> u32 {
        self.pixels.height() as u32
    }

    /// Pixel at 1-based `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Result<RGB8, BitmapError> {
        let idx = self.storage_index(i64::from(x), i64::from(y))?;
        Ok(self.pixels.buf()[idx])
    }

    /// Set the pixel at 1-based `(x, y)` from loose channel values.
    ///
    /// Coordinates are checked first, then each channel must be in `0..=255`.
    /// The grid is untouched on error.
    pub fn set(
        &mut self,
        x: i32,
        y: i32,
        red: i32,
        green: i32,
        blue: i32,
    ) -> Result<(), BitmapError> {
        let idx = self.storage_index(i64::from(x), i64::from(y))?;
        let color = checked_rgb(red, green, blue)?;
        self.pixels.buf_mut()[idx] = color;
        Ok(())
    }

    /// Set the pixel at 1-based `(x, y)`.
    pub fn put(&mut self, x: i32, y: i32, color: RGB8) -> Result<(), BitmapError> {
        self.put_wide(i64::from(x), i64::from(y), color)
    }

    pub(crate) fn put_wide(&mut self, x: i64, y: i64, color: RGB8) -> Result<(), BitmapError> {
        let idx = self.storage_index(x, y)?;
        self.pixels.buf_mut()[idx] = color;
        Ok(())
    }

    pub fn fill(&mut self, color: RGB8) {
        self.pixels.buf_mut().fill(color);
    }

    /// Rows in storage (file) order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[RGB8]> + '_ {
        self.pixels.buf().chunks_exact(self.pixels.stride())
    }

    /// Borrow as an [`imgref::ImgRef`], rows in storage order.
    pub fn as_imgref(&self) -> ImgRef<'_, RGB8> {
        self.pixels.as_ref()
    }

    pub(crate) fn as_slice(&self) -> &[RGB8] {
        self.pixels.buf()
    }

    fn storage_index(&self, x: i64, y: i64) -> Result<usize, BitmapError> {
        let width = i64::from(self.width());
        let height = i64::from(self.height());
        if !(1..=width).contains(&x) || !(1..=height).contains(&y) {
            return Err(BitmapError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        let row = (height - y) as usize;
        let col = (x - 1) as usize;
        Ok(row * self.pixels.stride() + col)
    }
}

impl PartialEq for PixelGrid {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.as_slice() == other.as_slice()
    }
}

impl Eq for PixelGrid {}

impl fmt::Debug for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelGrid")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

pub(crate) fn checked_len(width: u32, height: u32) -> Result<usize, BitmapError> {
    if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(BitmapError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_black() {
        let grid = PixelGrid::new(3, 2).unwrap();
        assert_eq!(grid.rows().len(), 2);
        for row in grid.rows() {
            assert_eq!(row, &[RGB8::default(); 3]);
        }
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(matches!(
            PixelGrid::new(0, 5),
            Err(BitmapError::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(matches!(
            PixelGrid::new(5, 0),
            Err(BitmapError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn y_counts_from_the_displayed_top() {
        let mut grid = PixelGrid::new(4, 3).unwrap();
        grid.put(1, 1, RGB8::new(1, 2, 3)).unwrap();
        grid.put(4, 3, RGB8::new(4, 5, 6)).unwrap();

        let rows: Vec<&[RGB8]> = grid.rows().collect();
        // y = 1 is the last stored row
        assert_eq!(rows[2][0], RGB8::new(1, 2, 3));
        // y = height is the first stored row
        assert_eq!(rows[0][3], RGB8::new(4, 5, 6));

        assert_eq!(grid.get(1, 1).unwrap(), RGB8::new(1, 2, 3));
        assert_eq!(grid.get(4, 3).unwrap(), RGB8::new(4, 5, 6));
    }

    #[test]
    fn upper_bounds_are_inclusive() {
        let mut grid = PixelGrid::new(5, 7).unwrap();
        grid.set(5, 7, 9, 9, 9).unwrap();
        assert_eq!(grid.get(5, 7).unwrap(), RGB8::new(9, 9, 9));
    }

    #[test]
    fn out_of_bounds_rejected() {
        let mut grid = PixelGrid::new(5, 7).unwrap();
        for (x, y) in [(0, 1), (1, 0), (6, 1), (1, 8), (-3, -3)] {
            match grid.set(x, y, 1, 1, 1) {
                Err(BitmapError::OutOfBounds { width: 5, height: 7, .. }) => {}
                other => panic!("({x}, {y}): expected OutOfBounds, got {other:?}"),
            }
            assert!(matches!(grid.get(x, y), Err(BitmapError::OutOfBounds { .. })));
        }
        assert_eq!(grid, PixelGrid::new(5, 7).unwrap());
    }

    #[test]
    fn invalid_channel_leaves_grid_unchanged() {
        let mut grid = PixelGrid::new(2, 2).unwrap();
        grid.set(1, 1, 10, 20, 30).unwrap();
        let before = grid.clone();
        assert!(matches!(
            grid.set(1, 1, 256, 0, 0),
            Err(BitmapError::InvalidColor(_))
        ));
        assert!(matches!(
            grid.set(2, 2, 0, 0, -1),
            Err(BitmapError::InvalidColor(_))
        ));
        assert_eq!(grid, before);
    }

    #[test]
    fn bounds_checked_before_color() {
        let mut grid = PixelGrid::new(2, 2).unwrap();
        assert!(matches!(
            grid.set(3, 1, 999, 0, 0),
            Err(BitmapError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn imgref_view_matches_rows() {
        let mut grid = PixelGrid::new(2, 2).unwrap();
        grid.fill(RGB8::new(7, 7, 7));
        let view = grid.as_imgref();
        assert_eq!(view.width(), 2);
        assert_eq!(view.height(), 2);
        assert!(view.buf().iter().all(|p| *p == RGB8::new(7, 7, 7)));
    }
}
