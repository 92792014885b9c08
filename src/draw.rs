//! Filled shape drawing on anything that can set a pixel.
//!
//! Every operation unpacks its color once and then sets pixels one by one.
//! The first out-of-bounds pixel aborts the operation; pixels set before
//! it stay set.

use core::ops::RangeInclusive;

use rgb::RGB8;

use crate::color::{BLACK, RED, WHITE, hex_to_rgb};
use crate::error::BitmapError;
use crate::grid::PixelGrid;

/// A pixel sink addressed with 1-based coordinates.
pub trait Canvas {
    /// Set one pixel. Coordinates outside the canvas are `OutOfBounds`.
    fn plot(&mut self, x: i64, y: i64, color: RGB8) -> Result<(), BitmapError>;
}

impl Canvas for PixelGrid {
    fn plot(&mut self, x: i64, y: i64, color: RGB8) -> Result<(), BitmapError> {
        self.put_wide(x, y, color)
    }
}

/// Which half of a disk [`half_circle`] fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Half {
    /// Rows `y <= cy`.
    Upper,
    /// Rows `y > cy`.
    Lower,
}

/// Fill the `width` x `height` box whose top-left corner is `(x0, y0)`.
pub fn rectangle<C: Canvas + ?Sized>(
    canvas: &mut C,
    x0: i32,
    y0: i32,
    width: i32,
    height: i32,
    color: u32,
) -> Result<(), BitmapError> {
    fill_rect(
        canvas,
        i64::from(x0),
        i64::from(y0),
        i64::from(width),
        i64::from(height),
        hex_to_rgb(color),
    )
}

/// Fill every pixel within `radius` of `(cx, cy)`.
///
/// Scans `cx - radius + 1 ..= cx + radius - 1` (same for `y`), widened to
/// always include the center, so a radius of 0 sets exactly one pixel.
pub fn circle<C: Canvas + ?Sized>(
    canvas: &mut C,
    cx: i32,
    cy: i32,
    radius: i32,
    color: u32,
) -> Result<(), BitmapError> {
    fill_circle(canvas, cx.into(), cy.into(), radius.into(), hex_to_rgb(color))
}

/// Fill one half of the disk of `radius` around `(cx, cy)`.
pub fn half_circle<C: Canvas + ?Sized>(
    canvas: &mut C,
    cx: i32,
    cy: i32,
    radius: i32,
    half: Half,
    color: u32,
) -> Result<(), BitmapError> {
    fill_half_circle(canvas, cx.into(), cy.into(), radius.into(), half, hex_to_rgb(color))
}

/// Draw a pokeball icon of `radius` centered on `(cx, cy)`.
pub fn pokeball<C: Canvas + ?Sized>(
    canvas: &mut C,
    cx: i32,
    cy: i32,
    radius: i32,
) -> Result<(), BitmapError> {
    let (x, y, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
    let rf = f64::from(radius);
    let black = hex_to_rgb(BLACK);
    let white = hex_to_rgb(WHITE);

    fill_circle(canvas, x, y, r, black)?;

    let shell = scaled(rf, 0.93);
    fill_half_circle(canvas, x, y, shell, Half::Upper, hex_to_rgb(RED))?;
    fill_half_circle(canvas, x, y, shell, Half::Lower, white)?;

    // Band height is `trunc(r * 0.1)`, not `2 * floor(r * 0.05)`: a radius
    // of 10..=19 gets a one-row band instead of none.
    let band_top = (f64::from(cy) - rf * 0.05) as i64;
    let band_height = (rf * 0.05 * 2.0) as i64;
    fill_rect(canvas, x - r + 1, band_top, r * 2, band_height, black)?;

    fill_circle(canvas, x, y, scaled(rf, 0.3), black)?;
    fill_circle(canvas, x, y, scaled(rf, 0.23), white)
}

/// `radius * factor`, truncated toward zero.
fn scaled(radius: f64, factor: f64) -> i64 {
    (radius * factor) as i64
}

fn fill_rect<C: Canvas + ?Sized>(
    canvas: &mut C,
    x0: i64,
    y0: i64,
    width: i64,
    height: i64,
    color: RGB8,
) -> Result<(), BitmapError> {
    for x in x0..x0 + width {
        for y in y0..y0 + height {
            canvas.plot(x, y, color)?;
        }
    }
    Ok(())
}

fn fill_circle<C: Canvas + ?Sized>(
    canvas: &mut C,
    cx: i64,
    cy: i64,
    radius: i64,
    color: RGB8,
) -> Result<(), BitmapError> {
    if radius < 0 {
        return Ok(());
    }
    let xs = (cx - radius + 1).min(cx)..=(cx + radius - 1).max(cx);
    let ys = (cy - radius + 1).min(cy)..=(cy + radius - 1).max(cy);
    fill_disk(canvas, cx, cy, radius, xs, ys, color)
}

fn fill_half_circle<C: Canvas + ?Sized>(
    canvas: &mut C,
    cx: i64,
    cy: i64,
    radius: i64,
    half: Half,
    color: RGB8,
) -> Result<(), BitmapError> {
    if radius < 0 {
        return Ok(());
    }
    let xs = cx - radius + 1..=cx + radius;
    let ys = match half {
        Half::Upper => cy - radius + 1..=cy,
        Half::Lower => cy + 1..=cy + radius,
    };
    fill_disk(canvas, cx, cy, radius, xs, ys, color)
}

/// Set each pixel of `xs` x `ys` whose squared distance to the center is
/// at most `radius²`. Columns are the outer loop.
fn fill_disk<C: Canvas + ?Sized>(
    canvas: &mut C,
    cx: i64,
    cy: i64,
    radius: i64,
    xs: RangeInclusive<i64>,
    ys: RangeInclusive<i64>,
    color: RGB8,
) -> Result<(), BitmapError> {
    let limit = radius * radius;
    for x in xs {
        for y in ys.clone() {
            let (dx, dy) = (cx - x, cy - y);
            if dx * dx + dy * dy <= limit {
                canvas.plot(x, y, color)?;
            }
        }
    }
    Ok(())
}
