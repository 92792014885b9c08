//! Row alignment helpers.

/// Zero bytes needed after `row_bytes` to reach the next 4-byte boundary.
pub(crate) fn row_padding(row_bytes: usize) -> usize {
    row_bytes.next_multiple_of(4) - row_bytes
}

/// `row_bytes` rounded up to a multiple of 4.
pub(crate) fn row_stride(row_bytes: usize) -> usize {
    row_bytes.next_multiple_of(4)
}

/// Checked stride for `width` pixels of `bytes_per_pixel` bytes.
pub(crate) fn checked_row_stride(width: usize, bytes_per_pixel: usize) -> Option<usize> {
    width
        .checked_mul(bytes_per_pixel)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_matches_ceil_formula() {
        for width in 1..64usize {
            let row = 3 * width;
            let expected = row.div_ceil(4) * 4 - row;
            assert_eq!(row_padding(row), expected, "width {width}");
            assert_eq!(row_stride(row), row + expected);
            assert_eq!(checked_row_stride(width, 3), Some(row + expected));
        }
    }

    #[test]
    fn checked_stride_overflow() {
        assert_eq!(checked_row_stride(usize::MAX, 3), None);
        assert_eq!(checked_row_stride(usize::MAX / 3, 3), None);
    }
}
