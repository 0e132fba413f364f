//! Clipped raster surfaces over caller-owned `u32` pixel buffers.
//!
//! A [`Surface`] borrows a flat, row-major pixel buffer and keeps a clip
//! rectangle. Every fill, copy and line request is intersected with the clip
//! before any pixel is touched, so out-of-range geometry degrades to drawing
//! less (or nothing) instead of writing outside the buffer.

mod addressing;
mod convert;
mod options;
mod raster;
mod rect;
mod surface;

pub use addressing::{delocate, locate};
pub use convert::{Identity, PixelConverter};
pub use options::SurfaceOptions;
pub use rect::{Point, Rect};
pub use surface::Surface;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid surface size: {width}x{height}")]
    InvalidSurfaceSize { width: u32, height: u32 },
    #[error("row stride {stride} is smaller than surface width {width}")]
    InvalidStride { stride: u32, width: u32 },
    #[error("pixel buffer too small: {required} cells required, {actual} provided")]
    BufferTooSmall { required: usize, actual: usize },
    #[error("pixel buffer cannot be viewed as u32 cells: {0:?}")]
    Cast(bytemuck::PodCastError),
}
