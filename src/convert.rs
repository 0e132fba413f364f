/// Maps one packed pixel value to another while copying between surfaces.
///
/// The host's color model supplies implementations, e.g. a translation
/// between two channel orders. Converters are called once per copied cell.
pub trait PixelConverter {
    fn convert(&self, pixel: u32) -> u32;
}

/// Copies pixels unchanged.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Identity;

impl PixelConverter for Identity {
    #[inline]
    fn convert(&self, pixel: u32) -> u32 {
        pixel
    }
}

impl<F> PixelConverter for F
where
    F: Fn(u32) -> u32,
{
    #[inline]
    fn convert(&self, pixel: u32) -> u32 {
        self(pixel)
    }
}
