use crate::coords::Rect;

/// A solid block of level geometry, stored in block units.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Platform {
    rect: Rect,
}

impl Platform {
    #[inline]
    pub const fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Shorthand for a platform at block `(x, y)` spanning `w`×`h` blocks.
    #[inline]
    pub const fn at(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self::new(Rect::new(x, y, w, h))
    }

    /// Bounds in block units.
    #[inline]
    pub const fn rect(&self) -> Rect {
        self.rect
    }
}

impl From<Rect> for Platform {
    fn from(rect: Rect) -> Self {
        Self::new(rect)
    }
}

/// Read-only view of the platforms to draw, in draw order.
pub trait Scene {
    fn platforms(&self) -> &[Platform];
}

impl Scene for [Platform] {
    fn platforms(&self) -> &[Platform] {
        self
    }
}

impl Scene for Vec<Platform> {
    fn platforms(&self) -> &[Platform] {
        self
    }
}

impl<S: Scene + ?Sized> Scene for &S {
    fn platforms(&self) -> &[Platform] {
        (**self).platforms()
    }
}
