use crate::Rect;

/// Options for constructing a [`Surface`](crate::Surface).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SurfaceOptions {
    /// Row stride in cells. `None` means rows are packed (stride = width).
    pub stride: Option<u32>,
    /// Initial clip. `None` means the full extent.
    pub clip: Option<Rect>,
}

impl SurfaceOptions {
    /// Use a row stride larger than the width, for hosts whose backing store
    /// pads each row.
    pub fn with_stride(mut self, stride: u32) -> Self {
        self.stride = Some(stride);
        self
    }

    pub fn with_clip(mut self, clip: Rect) -> Self {
        self.clip = Some(clip);
        self
    }
}
