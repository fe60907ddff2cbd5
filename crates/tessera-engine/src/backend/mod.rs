//! Backend capabilities.
//!
//! The renderer never talks to a windowing or graphics library directly. A
//! [`Backend`] names the resource types a platform produces, a [`Host`]
//! acquires them, and the acquired [`DrawSurface`] executes draw calls.
//!
//! Every resource is an owned value that releases itself on drop, so the
//! renderer controls teardown order purely through ownership.

mod codecs;
pub mod headless;

use std::path::Path;

use anyhow::Result;
use image::RgbaImage;

use crate::coords::{Color, Rect};

pub use codecs::ImageCodecs;

/// Resource family of one platform backend.
pub trait Backend {
    /// Process-wide video/graphics subsystem.
    type Video;
    /// Image decoding subsystem.
    type Images: ImageDecoder;
    /// Native window.
    type Window;
    /// Drawing surface bound to a window.
    type Surface: DrawSurface;
}

/// Acquires backend resources.
///
/// Errors carry the backend's own message; the caller adds which stage failed.
pub trait Host<B: Backend> {
    fn init_video(&mut self) -> Result<B::Video>;

    fn init_images(&mut self, video: &B::Video) -> Result<B::Images>;

    fn create_window(&mut self, video: &B::Video, desc: &WindowDesc) -> Result<B::Window>;

    fn create_surface(
        &mut self,
        video: &B::Video,
        window: &B::Window,
        kind: SurfaceKind,
    ) -> Result<B::Surface>;
}

/// Immediate-mode drawing target.
pub trait DrawSurface {
    /// Texture handle owned by the caller; dropping it releases the texture.
    type Texture;

    /// Fills the whole target with `color`.
    fn clear(&mut self, color: Color);

    /// Color used by subsequent primitive draws.
    fn set_draw_color(&mut self, color: Color);

    /// Draws the one-pixel outline of `rect` (screen pixels).
    fn draw_rect(&mut self, rect: Rect);

    /// Shows everything drawn since the last present.
    fn present(&mut self);

    fn create_texture(&mut self, image: &RgbaImage) -> Result<Self::Texture>;
}

/// Decodes image files into RGBA pixels.
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> Result<RgbaImage>;
}

/// Window request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDesc {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub resizable: bool,
}

/// Drawing surface flavor.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SurfaceKind {
    /// GPU-accelerated rendering.
    #[default]
    Accelerated,
    /// CPU rasterizer fallback.
    Software,
}

impl SurfaceKind {
    #[inline]
    pub const fn from_software_flag(software: bool) -> Self {
        if software { Self::Software } else { Self::Accelerated }
    }
}
