use crate::bitmap::Bitmap;
use crate::bmp;
use crate::error::BitmapError;
use crate::limits::Limits;

/// Decode configuration for BMP bytes already in memory.
///
/// ```
/// use bmpdraw::{Bitmap, DecodeRequest, Limits};
///
/// let bytes = Bitmap::new(8, 8)?.to_bytes()?;
/// let limits = Limits { max_pixels: Some(1 << 20), ..Default::default() };
/// let bitmap = DecodeRequest::new(&bytes).with_limits(&limits).decode()?;
/// assert_eq!(bitmap.width(), 8);
/// # Ok::<(), bmpdraw::BitmapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject input whose size, dimensions or decoded grid exceed `limits`.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self) -> Result<Bitmap, BitmapError> {
        let (header, info, pixels) = bmp::decode(self.data, self.limits)?;
        Ok(Bitmap::from_decoded(header, info, pixels))
    }
}
