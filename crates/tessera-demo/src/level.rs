use std::path::PathBuf;

use tessera_engine::backend::Backend;
use tessera_engine::coords::Rect;
use tessera_engine::core::{App, AppControl};
use tessera_engine::render::ViewportRenderer;
use tessera_engine::scene::{Camera, Platform};

/// Width of the demo level in blocks.
pub const LEVEL_WIDTH: i32 = 64;

/// Ground strip, a staircase and a few floating ledges.
pub fn build_level() -> Vec<Platform> {
    let mut platforms = vec![Platform::at(0, 0, LEVEL_WIDTH, 1)];

    for step in 0..5 {
        platforms.push(Platform::at(8 + step * 2, 1, 2, step + 1));
    }

    platforms.extend([
        Platform::at(22, 4, 4, 1),
        Platform::at(29, 7, 3, 1),
        Platform::at(35, 5, 5, 1),
        Platform::at(43, 9, 2, 1),
        Platform::at(48, 3, 6, 1),
        Platform::at(57, 6, 1, 4),
    ]);

    platforms
}

/// Camera that sweeps back and forth across the level.
#[derive(Debug, Clone)]
pub struct PanningCamera {
    view: Rect,
    min_x: i32,
    max_x: i32,
    x: f32,
    speed: f32,
}

impl PanningCamera {
    /// `speed` is in world pixels per second.
    pub fn new(view_w: i32, view_h: i32, world_w: i32, speed: f32) -> Self {
        Self {
            view: Rect::new(0, 0, view_w, view_h),
            min_x: 0,
            max_x: (world_w - view_w).max(0),
            x: 0.0,
            speed,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        if self.max_x == self.min_x {
            return;
        }

        self.x += self.speed * dt;
        let (lo, hi) = (self.min_x as f32, self.max_x as f32);
        if self.x >= hi {
            self.x = hi - (self.x - hi);
            self.speed = -self.speed.abs();
        } else if self.x <= lo {
            self.x = lo + (lo - self.x);
            self.speed = self.speed.abs();
        }
        self.x = self.x.clamp(lo, hi);
        self.view.x = self.x.round() as i32;
    }
}

impl Camera for PanningCamera {
    fn rect(&self) -> Rect {
        self.view
    }
}

/// Demo application: static level, panning camera, optional texture.
pub struct Demo {
    platforms: Vec<Platform>,
    camera: PanningCamera,
    texture: Option<PathBuf>,
}

impl Demo {
    pub fn new(view_w: u32, view_h: u32, block_scale: i32, texture: Option<PathBuf>) -> Self {
        let view_w = i32::try_from(view_w).unwrap_or(i32::MAX);
        let view_h = i32::try_from(view_h).unwrap_or(i32::MAX);
        let world_w = LEVEL_WIDTH.saturating_mul(block_scale);
        Self {
            platforms: build_level(),
            camera: PanningCamera::new(view_w, view_h, world_w, 4.0 * block_scale as f32),
            texture,
        }
    }
}

impl App for Demo {
    type Scene = Vec<Platform>;
    type Camera = PanningCamera;

    fn on_ready<B: Backend>(&mut self, renderer: &mut ViewportRenderer<B>) {
        let Some(path) = self.texture.as_ref() else { return };
        // The texture only proves the upload path; it is released right away.
        if renderer.load_texture(path).is_ok() {
            log::info!("loaded texture {}", path.display());
        }
    }

    fn update(&mut self, dt: f32) -> AppControl {
        self.camera.advance(dt);
        AppControl::Continue
    }

    fn scene(&self) -> &Vec<Platform> {
        &self.platforms
    }

    fn camera(&self) -> &PanningCamera {
        &self.camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_has_ground_across_full_width() {
        let level = build_level();
        assert_eq!(level[0].rect(), Rect::new(0, 0, LEVEL_WIDTH, 1));
        assert!(level.iter().all(|p| !p.rect().is_empty()));
        assert!(level.iter().all(|p| p.rect().right() <= LEVEL_WIDTH));
    }

    #[test]
    fn camera_bounces_between_level_edges() {
        let mut cam = PanningCamera::new(800, 600, 2048, 500.0);
        for _ in 0..100 {
            cam.advance(0.1);
            let r = cam.rect();
            assert!(r.x >= 0 && r.right() <= 2048, "{r:?}");
        }
    }

    #[test]
    fn camera_turns_around_at_the_far_edge() {
        let mut cam = PanningCamera::new(800, 600, 1000, 100.0);
        cam.advance(2.5); // 250 px, past the 200 px limit
        assert_eq!(cam.rect().x, 150);
        cam.advance(0.5);
        assert_eq!(cam.rect().x, 100);
    }

    #[test]
    fn camera_wider_than_level_stays_put() {
        let mut cam = PanningCamera::new(800, 600, 400, 100.0);
        cam.advance(1.0);
        assert_eq!(cam.rect().x, 0);
    }
}
