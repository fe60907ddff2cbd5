use crate::coords::Rect;

/// The visible region of the world, in world pixels.
pub trait Camera {
    fn rect(&self) -> Rect;
}

/// A bare rectangle acts as a fixed camera.
impl Camera for Rect {
    fn rect(&self) -> Rect {
        *self
    }
}

impl<C: Camera + ?Sized> Camera for &C {
    fn rect(&self) -> Rect {
        (**self).rect()
    }
}
