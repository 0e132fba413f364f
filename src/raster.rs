//! Unchecked bulk operations over flat pixel buffers.
//!
//! Nothing here clips. Callers (the [`Surface`](crate::Surface) layer) clamp
//! every rect against the buffer before calling in; the preconditions are only
//! verified by `debug_assert!`s, release builds index without bounds checks.

use crate::addressing::locate;
use crate::convert::PixelConverter;
use crate::rect::{Point, Rect};

/// Offset one past the last cell of `area`, or `None` for an empty area.
fn end_offset(stride: u32, area: Rect) -> Option<usize> {
    if area.is_empty() {
        return None;
    }
    Some(locate(stride, area.right() - 1, area.bottom() - 1) + 1)
}

fn debug_check_area(len: usize, stride: u32, area: Rect) {
    if let Some(end) = end_offset(stride, area) {
        debug_assert!(
            area.right() <= stride,
            "area {area} wraps past row stride {stride}"
        );
        debug_assert!(
            end <= len,
            "area {area} (stride {stride}) ends at cell {end}, buffer holds {len}"
        );
    }
}

/// Copy `src_area` of `src` to `dst` at `dst_origin`, converting every pixel.
///
/// Every cell `(i, j)` of the area is read once from
/// `(src_area.x + i, src_area.y + j)` and written to
/// `(dst_origin.x + i, dst_origin.y + j)`.
///
/// # Safety
///
/// `src_area` must lie inside `src` under `src_stride`, and the same-sized
/// area at `dst_origin` must lie inside `dst` under `dst_stride`.
pub(crate) unsafe fn copy<C: PixelConverter>(
    src: &[u32],
    src_stride: u32,
    src_area: Rect,
    dst: &mut [u32],
    dst_stride: u32,
    dst_origin: Point,
    converter: &C,
) {
    if src_area.is_empty() {
        return;
    }
    let dst_area = Rect::new(dst_origin.x, dst_origin.y, src_area.width, src_area.height);
    debug_check_area(src.len(), src_stride, src_area);
    debug_check_area(dst.len(), dst_stride, dst_area);

    let width = src_area.width as usize;
    for row in 0..src_area.height {
        let src_row = locate(src_stride, src_area.x, src_area.y + row);
        let dst_row = locate(dst_stride, dst_area.x, dst_area.y + row);
        for col in 0..width {
            // SAFETY: both rows lie inside their buffers per the caller's contract.
            unsafe {
                let pixel = *src.get_unchecked(src_row + col);
                *dst.get_unchecked_mut(dst_row + col) = converter.convert(pixel);
            }
        }
    }
}

/// Set every cell of `area` to `color`.
///
/// # Safety
///
/// `area` must lie inside `dst` under `stride`.
pub(crate) unsafe fn fill_rect(dst: &mut [u32], stride: u32, area: Rect, color: u32) {
    if area.is_empty() {
        return;
    }
    debug_check_area(dst.len(), stride, area);

    let width = area.width as usize;
    for row in 0..area.height {
        let start = locate(stride, area.x, area.y + row);
        // SAFETY: the row lies inside `dst` per the caller's contract.
        unsafe { dst.get_unchecked_mut(start..start + width) }.fill(color);
    }
}

/// The one-cell-thick rect covered by a horizontal or vertical line.
///
/// The span starts at the smaller endpoint and is `|to - from|` cells long:
/// the far endpoint itself is not included, so `(0, 0) -> (0, 5)` covers rows
/// 0 to 4 and a line from a point to itself covers nothing.
///
/// # Panics
///
/// Panics when the line is diagonal. Only axis-aligned lines are supported.
pub(crate) fn line_span(from: Point, to: Point) -> Rect {
    if from.x == to.x {
        Rect::new(from.x, from.y.min(to.y), 1, from.y.abs_diff(to.y))
    } else if from.y == to.y {
        Rect::new(from.x.min(to.x), from.y, from.x.abs_diff(to.x), 1)
    } else {
        panic!(
            "diagonal lines are not supported: ({}, {}) -> ({}, {})",
            from.x, from.y, to.x, to.y
        );
    }
}

/// Draw an axis-aligned line as a one-cell-thick [`fill_rect`].
///
/// # Safety
///
/// [`line_span`] of the endpoints must lie inside `dst` under `stride`.
///
/// # Panics
///
/// Panics when the line is diagonal.
pub(crate) unsafe fn draw_line(dst: &mut [u32], stride: u32, from: Point, to: Point, color: u32) {
    let span = line_span(from, to);
    // SAFETY: forwarded from the caller.
    unsafe { fill_rect(dst, stride, span, color) }
}
