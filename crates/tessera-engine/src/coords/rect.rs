/// Axis-aligned integer rectangle.
///
/// The coordinate space is implied by the owner: platforms store block space,
/// cameras world space, and draw calls screen space.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// A rectangle with no area covers nothing, even if its origin is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    #[inline]
    pub const fn right(self) -> i32 {
        self.x.saturating_add(self.w)
    }

    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Multiplies every component by `factor`.
    #[inline]
    pub const fn scaled(self, factor: i32) -> Self {
        Self::new(
            self.x.saturating_mul(factor),
            self.y.saturating_mul(factor),
            self.w.saturating_mul(factor),
            self.h.saturating_mul(factor),
        )
    }

    /// Returns `true` if `other` lies entirely inside `self`.
    #[inline]
    pub fn contains_rect(self, other: Rect) -> bool {
        !other.is_empty()
            && other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Overlapping region of two rectangles.
    ///
    /// Returns `None` when either input is empty or the overlap has no area;
    /// rectangles that only share an edge do not intersect.
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        if self.is_empty() || other.is_empty() {
            return None;
        }

        // Edges computed in i64 so large world coordinates cannot overflow.
        let x0 = i64::from(self.x).max(i64::from(other.x));
        let y0 = i64::from(self.y).max(i64::from(other.y));
        let x1 = (i64::from(self.x) + i64::from(self.w)).min(i64::from(other.x) + i64::from(other.w));
        let y1 = (i64::from(self.y) + i64::from(self.h)).min(i64::from(other.y) + i64::from(other.h));

        let w = x1 - x0;
        let h = y1 - y0;
        if w <= 0 || h <= 0 {
            return None;
        }

        Some(Rect::new(
            x0 as i32,
            y0 as i32,
            w.min(i64::from(i32::MAX)) as i32,
            h.min(i64::from(i32::MAX)) as i32,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: i32, y: i32, w: i32, h: i32) -> Rect { Rect::new(x, y, w, h) }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_or_negative_size() {
        assert!(r(0, 0, 0, 5).is_empty());
        assert!(r(0, 0, 5, 0).is_empty());
        assert!(r(0, 0, -3, 5).is_empty());
        assert!(!r(0, 0, 1, 1).is_empty());
    }

    // ── scaled ────────────────────────────────────────────────────────────

    #[test]
    fn scaled_multiplies_every_component() {
        assert_eq!(r(2, 3, 1, 4).scaled(32), r(64, 96, 32, 128));
    }

    #[test]
    fn scaled_saturates_instead_of_overflowing() {
        let big = r(i32::MAX / 2, 0, 1, 1).scaled(4);
        assert_eq!(big.x, i32::MAX);
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let a = r(0, 0, 10, 10);
        let b = r(5, 5, 10, 10);
        assert_eq!(a.intersect(b), Some(r(5, 5, 5, 5)));
    }

    #[test]
    fn intersect_contained_is_identity() {
        let outer = r(0, 0, 800, 600);
        let inner = r(64, 96, 32, 32);
        assert_eq!(outer.intersect(inner), Some(inner));
        assert_eq!(inner.intersect(outer), Some(inner));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        let a = r(0, 0, 10, 10);
        let b = r(10, 0, 10, 10);
        assert!(a.intersect(b).is_none());
    }

    #[test]
    fn intersect_disjoint_returns_none() {
        assert!(r(0, 0, 5, 5).intersect(r(20, 20, 5, 5)).is_none());
        assert!(r(0, 0, 5, 5).intersect(r(-20, -20, 5, 5)).is_none());
    }

    #[test]
    fn intersect_with_empty_returns_none() {
        assert!(r(0, 0, 10, 10).intersect(r(2, 2, 0, 4)).is_none());
    }

    #[test]
    fn intersect_negative_origin() {
        let a = r(-16, -16, 32, 32);
        let b = r(0, 0, 100, 100);
        assert_eq!(a.intersect(b), Some(r(0, 0, 16, 16)));
    }

    // ── contains_rect ─────────────────────────────────────────────────────

    #[test]
    fn contains_rect_inclusive_edges() {
        let outer = r(0, 0, 100, 100);
        assert!(outer.contains_rect(r(0, 0, 100, 100)));
        assert!(outer.contains_rect(r(10, 10, 5, 5)));
        assert!(!outer.contains_rect(r(90, 90, 20, 5)));
    }
}
