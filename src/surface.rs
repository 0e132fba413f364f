use std::fmt;

use crate::addressing::locate;
use crate::convert::{Identity, PixelConverter};
use crate::raster;
use crate::{Error, Point, Rect, Result, SurfaceOptions};

/// A clipped view over a caller-owned buffer of `u32` pixels.
///
/// The surface borrows the buffer for its whole lifetime and never reallocates
/// or frees it. All drawing goes through the clip rect: requests are
/// intersected with it first, and whatever falls outside is dropped.
pub struct Surface<'buf> {
    pixels: &'buf mut [u32],
    width: u32,
    height: u32,
    stride: u32,
    clip: Rect,
}

impl<'buf> Surface<'buf> {
    /// Wrap a packed row-major buffer of at least `width * height` pixels.
    pub fn new(pixels: &'buf mut [u32], width: u32, height: u32) -> Result<Self> {
        Self::new_with_options(pixels, width, height, SurfaceOptions::default())
    }

    pub fn new_with_options(
        pixels: &'buf mut [u32],
        width: u32,
        height: u32,
        options: SurfaceOptions,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidSurfaceSize { width, height });
        }

        let stride = options.stride.unwrap_or(width);
        if stride < width {
            return Err(Error::InvalidStride { stride, width });
        }

        let actual = pixels.len();
        let required = (stride as usize)
            .checked_mul(height as usize)
            .ok_or(Error::BufferTooSmall {
                required: usize::MAX,
                actual,
            })?;
        if actual < required {
            return Err(Error::BufferTooSmall { required, actual });
        }

        let bounds = Rect::full(width, height);
        let clip = options.clip.map_or(bounds, |clip| bounds.intersect(clip));
        log::debug!("surface {width}x{height}, stride {stride}, clip {clip}");

        Ok(Self {
            pixels,
            width,
            height,
            stride,
            clip,
        })
    }

    /// Wrap a host byte buffer, e.g. the pixels of a window's backing store.
    ///
    /// The bytes must be aligned for `u32` and a whole number of pixels long.
    pub fn from_bytes(bytes: &'buf mut [u8], width: u32, height: u32) -> Result<Self> {
        Self::from_bytes_with_options(bytes, width, height, SurfaceOptions::default())
    }

    pub fn from_bytes_with_options(
        bytes: &'buf mut [u8],
        width: u32,
        height: u32,
        options: SurfaceOptions,
    ) -> Result<Self> {
        let pixels = bytemuck::try_cast_slice_mut(bytes).map_err(Error::Cast)?;
        Self::new_with_options(pixels, width, height, options)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Distance between the starts of two rows, in pixels.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// The full extent, `[0, width) x [0, height)`.
    pub fn bounds(&self) -> Rect {
        Rect::full(self.width, self.height)
    }

    pub fn clip(&self) -> Rect {
        self.clip
    }

    pub fn pixels(&self) -> &[u32] {
        &*self.pixels
    }

    /// Read one pixel. `None` outside the surface; the clip does not apply.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(locate(self.stride, x, y)).copied()
    }

    /// Restrict drawing to `rect`, clamped to the surface bounds.
    pub fn set_clip(&mut self, rect: Rect) {
        self.clip = self.bounds().intersect(rect);
        log::debug!("clip set to {} (requested {rect})", self.clip);
    }

    pub fn reset_clip(&mut self) {
        self.clip = self.bounds();
        log::debug!("clip reset to {}", self.clip);
    }

    /// Fill the part of `rect` inside the clip with `color`.
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let area = self.clip.intersect(rect);
        if area.is_empty() {
            log::trace!("fill {rect} lies outside clip {}", self.clip);
            return;
        }
        // SAFETY: `area` is inside the clip, which is inside the bounds, and
        // the buffer holds `stride * height` pixels with `stride >= width`.
        unsafe { raster::fill_rect(self.pixels, self.stride, area, color) };
    }

    pub fn fill(&mut self, x: u32, y: u32, width: u32, height: u32, color: u32) {
        self.fill_rect(Rect::new(x, y, width, height), color);
    }

    /// Fill the whole clip.
    pub fn clear(&mut self, color: u32) {
        self.fill_rect(self.clip, color);
    }

    /// Copy `area` of `source` to `(dst_x, dst_y)`, converting each pixel.
    ///
    /// `area` is first clamped to the source clip. A rect of that size at
    /// `(dst_x, dst_y)` is then clamped to this surface's clip, and the source
    /// extent shrinks to match. The copy starts at the clamped origin of each
    /// side and both sides advance together over the common extent.
    pub fn copy_from<C: PixelConverter>(
        &mut self,
        source: &Surface<'_>,
        area: Rect,
        dst_x: u32,
        dst_y: u32,
        converter: C,
    ) {
        let mut src_area = source.clip.intersect(area);
        let dst_area =
            self.clip
                .intersect(Rect::new(dst_x, dst_y, src_area.width, src_area.height));
        src_area.width = dst_area.width;
        src_area.height = dst_area.height;

        if src_area.is_empty() {
            log::trace!("copy of {area} to ({dst_x}, {dst_y}) clipped away");
            return;
        }
        log::trace!("copy {src_area} to ({}, {})", dst_area.x, dst_area.y);

        // SAFETY: `src_area` is inside the source clip and `dst_area` (same
        // extent) is inside ours; both clips are inside their buffers.
        unsafe {
            raster::copy(
                &*source.pixels,
                source.stride,
                src_area,
                self.pixels,
                self.stride,
                Point::new(dst_area.x, dst_area.y),
                &converter,
            )
        };
    }

    /// [`copy_from`](Self::copy_from) without pixel conversion.
    pub fn copy_from_at(&mut self, source: &Surface<'_>, area: Rect, at: Point) {
        self.copy_from(source, area, at.x, at.y, Identity);
    }

    /// Draw a horizontal or vertical line, clipped.
    ///
    /// The line covers `|to - from|` pixels starting at the smaller endpoint;
    /// the far endpoint is not drawn.
    ///
    /// # Panics
    ///
    /// Panics when `from` and `to` differ in both coordinates.
    pub fn draw_line(&mut self, from: Point, to: Point, color: u32) {
        let span = raster::line_span(from, to);
        let area = self.clip.intersect(span);
        if area.is_empty() {
            return;
        }
        // SAFETY: either the whole span or its clipped part is inside the clip.
        unsafe {
            if area == span {
                raster::draw_line(self.pixels, self.stride, from, to, color);
            } else {
                raster::fill_rect(self.pixels, self.stride, area, color);
            }
        }
    }
}

impl fmt::Debug for Surface<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .field("clip", &self.clip)
            .finish_non_exhaustive()
    }
}
