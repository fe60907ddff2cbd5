use crate::coords::{Color, ViewTransform};
use crate::time::DEFAULT_FPS_WINDOW;

/// Renderer configuration.
///
/// Fixed for the lifetime of a `ViewportRenderer`.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    /// Display width in pixels.
    pub width: u32,
    /// Display height in pixels.
    pub height: u32,

    /// World pixels per block unit.
    pub block_scale: i32,

    /// Frames averaged by the FPS measurement.
    pub fps_window: usize,

    /// Log the FPS every this many frames. `0` disables the report.
    pub report_every: u64,

    pub fullscreen: bool,

    pub background: Color,
    pub accent: Color,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            block_scale: 32,
            fps_window: DEFAULT_FPS_WINDOW,
            report_every: DEFAULT_FPS_WINDOW as u64,
            fullscreen: true,
            background: Color::BLACK,
            accent: Color::SKY,
        }
    }
}

impl RendererConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_block_scale(mut self, block_scale: i32) -> Self {
        self.block_scale = block_scale;
        self
    }

    pub fn with_fps_window(mut self, frames: usize) -> Self {
        self.fps_window = frames;
        self
    }

    pub fn with_report_every(mut self, frames: u64) -> Self {
        self.report_every = frames;
        self
    }

    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    pub fn with_colors(mut self, background: Color, accent: Color) -> Self {
        self.background = background;
        self.accent = accent;
        self
    }

    /// Coordinate transform for this display.
    pub fn transform(&self) -> ViewTransform {
        let height = i32::try_from(self.height).unwrap_or(i32::MAX);
        ViewTransform::new(height, self.block_scale)
    }
}
