use super::Rect;

/// Block → world → screen conversions for one display.
///
/// World space has +Y pointing up from the ground; the screen has +Y pointing
/// down from the top. The vertical flip offsets by one block so a block
/// resting on world row 0 lands on the bottom row of the display.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ViewTransform {
    pub display_height: i32,
    pub block_scale: i32,
}

impl ViewTransform {
    #[inline]
    pub const fn new(display_height: i32, block_scale: i32) -> Self {
        Self {
            display_height,
            block_scale,
        }
    }

    /// Scales a block-grid rectangle into world pixels.
    #[inline]
    pub const fn block_to_world(self, rect: Rect) -> Rect {
        rect.scaled(self.block_scale)
    }

    /// Flips the vertical axis of a world rectangle into screen space.
    #[inline]
    pub const fn world_to_screen(self, rect: Rect) -> Rect {
        Rect::new(rect.x, self.flip_y(rect.y), rect.w, rect.h)
    }

    /// Inverse of [`world_to_screen`](Self::world_to_screen). The flip is an
    /// involution, so this applies the same mapping.
    #[inline]
    pub const fn screen_to_world(self, rect: Rect) -> Rect {
        self.world_to_screen(rect)
    }

    /// Maps a block rectangle to the part of the screen it occupies inside
    /// `camera` (world space).
    ///
    /// Clipping happens in world space before the flip. Returns `None` when
    /// nothing of the block is visible.
    pub fn project(self, block: Rect, camera: Rect) -> Option<Rect> {
        let world = self.block_to_world(block);
        let visible = world.intersect(camera)?;
        Some(self.world_to_screen(visible))
    }

    #[inline]
    const fn flip_y(self, y: i32) -> i32 {
        self.display_height
            .saturating_sub(y)
            .saturating_sub(self.block_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: ViewTransform = ViewTransform::new(600, 32);
    const CAMERA: Rect = Rect::new(0, 0, 800, 600);

    #[test]
    fn block_to_world_scales_all_components() {
        assert_eq!(VIEW.block_to_world(Rect::new(2, 3, 1, 1)), Rect::new(64, 96, 32, 32));
    }

    #[test]
    fn world_to_screen_flips_y_only() {
        let s = VIEW.world_to_screen(Rect::new(64, 96, 32, 32));
        assert_eq!(s, Rect::new(64, 472, 32, 32));
    }

    #[test]
    fn flip_is_an_involution() {
        for y in [-64, 0, 1, 96, 300, 599, 1200] {
            let world = Rect::new(10, y, 32, 64);
            assert_eq!(VIEW.screen_to_world(VIEW.world_to_screen(world)), world);
        }
    }

    #[test]
    fn ground_row_lands_on_bottom_of_display() {
        let s = VIEW.project(Rect::new(0, 0, 1, 1), CAMERA).unwrap();
        assert_eq!(s.y, 600 - 32);
    }

    #[test]
    fn project_inside_camera_keeps_size() {
        let s = VIEW.project(Rect::new(2, 3, 4, 2), CAMERA).unwrap();
        assert_eq!(s, Rect::new(64, 600 - 96 - 32, 128, 64));
    }

    #[test]
    fn project_outside_camera_is_none() {
        assert!(VIEW.project(Rect::new(30, 0, 1, 1), CAMERA).is_none());
        assert!(VIEW.project(Rect::new(-1, 0, 1, 1), CAMERA).is_none());
        assert!(VIEW.project(Rect::new(0, 19, 1, 1), CAMERA).is_none());
    }

    #[test]
    fn project_clips_before_flipping() {
        // Block straddles the right camera edge: half of it is visible.
        let camera = Rect::new(0, 0, 80, 600);
        let s = VIEW.project(Rect::new(2, 0, 1, 1), camera).unwrap();
        assert_eq!(s, Rect::new(64, 568, 16, 32));
    }
}
