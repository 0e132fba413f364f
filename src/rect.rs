use std::fmt;

/// A point on a surface, in cells.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

/// Half-open axis-aligned region `[x, x + width) x [y, y + height)`.
///
/// A rect with zero width or height is empty. Empty rects are ordinary values
/// and every consumer treats them as a no-op.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The rect covering a whole `width` x `height` surface.
    pub const fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Convert a signed host rectangle.
    ///
    /// Returns `None` for negative components and for empty rects.
    pub fn from_signed(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            return None;
        }
        Some(Self::new(
            u32::try_from(x).ok()?,
            u32::try_from(y).ok()?,
            width as u32,
            height as u32,
        ))
    }

    pub fn right(self) -> u32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(self) -> u32 {
        self.y.saturating_add(self.height)
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn contains_point(self, x: u32, y: u32) -> bool {
        x >= self.x && y >= self.y && x < self.right() && y < self.bottom()
    }

    pub fn contains_rect(self, other: Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Overlap of `self` and `other`.
    ///
    /// The origin is the component-wise maximum of both origins, even when the
    /// rects are disjoint; the extent is clamped at zero. Far edges are computed
    /// in `i64` so `x + width` can neither overflow nor underflow.
    pub fn intersect(self, other: Rect) -> Rect {
        let min_x = i64::from(self.x.max(other.x));
        let min_y = i64::from(self.y.max(other.y));
        let max_x = (i64::from(self.x) + i64::from(self.width))
            .min(i64::from(other.x) + i64::from(other.width));
        let max_y = (i64::from(self.y) + i64::from(self.height))
            .min(i64::from(other.y) + i64::from(other.height));

        // Both extents are bounded by one of the input widths/heights.
        Rect {
            x: min_x as u32,
            y: min_y as u32,
            width: (max_x - min_x).max(0) as u32,
            height: (max_y - min_y).max(0) as u32,
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_intersect_overlapping() {
        let a = Rect::new(10, 10, 20, 20);
        let b = Rect::new(20, 5, 30, 10);
        assert_eq!(a.intersect(b), Rect::new(20, 10, 10, 5));
        assert_eq!(b.intersect(a), Rect::new(20, 10, 10, 5));
    }

    #[test]
    fn test_intersect_zero_height_below_surface() {
        // origin is the max of both origins even when nothing overlaps
        let r = Rect::new(20, 500, 500, 400).intersect(Rect::new(0, 0, 500, 400));
        assert_eq!(r, Rect::new(20, 500, 480, 0));
        assert!(r.is_empty());
    }

    #[test]
    fn test_intersect_disjoint_keeps_max_origin() {
        let r = Rect::new(0, 0, 10, 10).intersect(Rect::new(50, 60, 5, 5));
        assert_eq!(r, Rect::new(50, 60, 0, 0));
    }

    #[test]
    fn test_intersect_touching_edges_is_empty() {
        let r = Rect::new(0, 0, 10, 10).intersect(Rect::new(10, 0, 10, 10));
        assert_eq!(r.width, 0);
        assert_eq!(r.height, 10);
        assert!(r.is_empty());
    }

    #[test]
    fn test_intersect_near_u32_max_does_not_overflow() {
        let a = Rect::new(u32::MAX - 5, u32::MAX - 5, u32::MAX, u32::MAX);
        let b = Rect::new(0, 0, u32::MAX, u32::MAX);
        assert_eq!(a.intersect(b), Rect::new(u32::MAX - 5, u32::MAX - 5, 5, 5));
    }

    #[test]
    fn test_from_signed() {
        assert_eq!(Rect::from_signed(1, 2, 3, 4), Some(Rect::new(1, 2, 3, 4)));
        assert_eq!(Rect::from_signed(-1, 2, 3, 4), None);
        assert_eq!(Rect::from_signed(1, 2, 0, 4), None);
        assert_eq!(Rect::from_signed(1, 2, 3, -4), None);
    }

    #[test]
    fn test_contains() {
        let r = Rect::new(10, 10, 5, 5);
        assert!(r.contains_point(10, 10));
        assert!(r.contains_point(14, 14));
        assert!(!r.contains_point(15, 14));
        assert!(r.contains_rect(Rect::new(11, 11, 4, 4)));
        assert!(!r.contains_rect(Rect::new(11, 11, 5, 4)));
    }

    #[test]
    fn test_area() {
        assert_eq!(Rect::new(3, 4, 5, 6).area(), 30);
        assert_eq!(Rect::new(3, 4, 0, 6).area(), 0);
        assert_eq!(Rect::full(u32::MAX, 2).area(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_point_from_tuple() {
        assert_eq!(Point::from((7, 9)), Point::new(7, 9));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rect::new(1, 2, 3, 4).to_string(), "1,2,3,4");
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (0u32..2000, 0u32..2000, 0u32..2000, 0u32..2000)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn test_intersect_stays_inside_both(a in rect_strategy(), b in rect_strategy()) {
            let r = a.intersect(b);
            if !r.is_empty() {
                prop_assert!(a.contains_rect(r));
                prop_assert!(b.contains_rect(r));
            }
        }

        #[test]
        fn test_intersect_commutes_on_overlap(a in rect_strategy(), b in rect_strategy()) {
            let ab = a.intersect(b);
            if !ab.is_empty() {
                prop_assert_eq!(ab, b.intersect(a));
            }
        }

        #[test]
        fn test_intersect_self_is_identity(a in rect_strategy()) {
            prop_assert_eq!(a.intersect(a), a);
        }

        #[test]
        fn test_intersect_disjoint_is_empty(a in rect_strategy(), b in rect_strategy()) {
            let disjoint = a.right() <= b.x
                || b.right() <= a.x
                || a.bottom() <= b.y
                || b.bottom() <= a.y;
            if disjoint {
                prop_assert!(a.intersect(b).is_empty());
            }
        }
    }
}
