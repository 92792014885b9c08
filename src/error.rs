/// Errors from BMP decoding, encoding, and pixel access.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("unrecognized BMP signature {found:?}, expected \"BM\"")]
    UnrecognizedFormat { found: [u8; 2] },

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("pixel ({x}, {y}) does not fit into the bitmap of size {width}x{height}")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BitmapError {
    /// Whether the input bytes are not a readable bitmap at all
    /// (wrong signature, truncated, or a nonsensical header).
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::UnrecognizedFormat { .. } | Self::UnexpectedEof | Self::InvalidHeader(_)
        )
    }
}
