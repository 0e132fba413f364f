//! Cell addressing for row-major buffers.
//!
//! Addresses are flat cell offsets into the buffer, never pointers. Neither
//! function checks that the result lies inside any buffer.

/// Offset of cell `(x, y)` in a buffer whose rows are `stride` cells apart.
#[inline]
pub fn locate(stride: u32, x: u32, y: u32) -> usize {
    stride as usize * y as usize + x as usize
}

/// Recover the buffer origin from the offset of cell `(x, y)`.
///
/// Inverse of [`locate`]: `delocate(base + locate(stride, x, y), stride, x, y) == base`.
/// `offset` must have been produced for that same cell.
#[inline]
pub fn delocate(offset: usize, stride: u32, x: u32, y: u32) -> usize {
    let cell = locate(stride, x, y);
    debug_assert!(offset >= cell, "offset {offset} does not address ({x}, {y})");
    offset - cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_row_major() {
        assert_eq!(locate(500, 0, 0), 0);
        assert_eq!(locate(500, 499, 0), 499);
        assert_eq!(locate(500, 0, 1), 500);
        assert_eq!(locate(500, 20, 3), 1520);
    }

    #[test]
    fn test_locate_uses_stride_not_width() {
        // 10 cells wide, rows padded to 16
        assert_eq!(locate(16, 9, 2), 41);
    }

    #[test]
    fn test_delocate_inverts_locate() {
        let base = 1000;
        for (x, y) in [(0, 0), (3, 0), (0, 7), (12, 9)] {
            let offset = base + locate(64, x, y);
            assert_eq!(delocate(offset, 64, x, y), base);
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_locate_wide_surface_no_u32_overflow() {
        assert_eq!(locate(70_000, 0, 70_000), 4_900_000_000usize);
    }
}
