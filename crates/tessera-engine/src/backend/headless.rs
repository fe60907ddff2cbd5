//! Headless backend.
//!
//! Acquires nothing from the OS. The surface records every draw call so frames
//! can be inspected, which is what tests and the demo's headless mode use.

use anyhow::Result;
use image::RgbaImage;

use crate::coords::{Color, Rect};

use super::{Backend, DrawSurface, Host, ImageCodecs, SurfaceKind, WindowDesc};

/// Largest texture edge the recording surface accepts, matching the wgpu
/// default `max_texture_dimension_2d`.
pub const MAX_TEXTURE_SIZE: u32 = 8192;

/// Resource family for [`HeadlessHost`].
#[derive(Debug)]
pub enum Headless {}

impl Backend for Headless {
    type Video = HeadlessVideo;
    type Images = ImageCodecs;
    type Window = HeadlessWindow;
    type Surface = RecordingSurface;
}

/// Host that hands out in-memory resources.
#[derive(Debug, Default)]
pub struct HeadlessHost;

impl HeadlessHost {
    pub fn new() -> Self {
        Self
    }
}

impl Host<Headless> for HeadlessHost {
    fn init_video(&mut self) -> Result<HeadlessVideo> {
        Ok(HeadlessVideo { _private: () })
    }

    fn init_images(&mut self, _video: &HeadlessVideo) -> Result<ImageCodecs> {
        ImageCodecs::new()
    }

    fn create_window(&mut self, _video: &HeadlessVideo, desc: &WindowDesc) -> Result<HeadlessWindow> {
        anyhow::ensure!(
            desc.width > 0 && desc.height > 0,
            "window size {}x{} is invalid",
            desc.width,
            desc.height
        );
        Ok(HeadlessWindow { desc: desc.clone() })
    }

    fn create_surface(
        &mut self,
        _video: &HeadlessVideo,
        window: &HeadlessWindow,
        kind: SurfaceKind,
    ) -> Result<RecordingSurface> {
        Ok(RecordingSurface::new(window.desc.width, window.desc.height, kind))
    }
}

/// Placeholder for the video subsystem.
#[derive(Debug)]
pub struct HeadlessVideo {
    _private: (),
}

/// Remembers what was requested.
#[derive(Debug, Clone)]
pub struct HeadlessWindow {
    desc: WindowDesc,
}

impl HeadlessWindow {
    pub fn desc(&self) -> &WindowDesc {
        &self.desc
    }
}

/// One recorded surface call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Clear(Color),
    SetColor(Color),
    Rect(Rect),
    Present,
}

/// Surface that records draw calls instead of rasterizing them.
#[derive(Debug)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    kind: SurfaceKind,
    color: Color,
    commands: Vec<DrawCommand>,
    frames_presented: u64,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32, kind: SurfaceKind) -> Self {
        Self {
            width,
            height,
            kind,
            color: Color::BLACK,
            commands: Vec::new(),
            frames_presented: 0,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    /// Current draw color.
    pub fn draw_color(&self) -> Color {
        self.color
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Every call recorded since creation or the last [`take_commands`](Self::take_commands).
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Outline rectangles among the recorded commands, in call order.
    pub fn rects(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect(r) => Some(*r),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    type Texture = HeadlessTexture;

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn set_draw_color(&mut self, color: Color) {
        self.color = color;
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn draw_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Rect(rect));
    }

    fn present(&mut self) {
        self.frames_presented += 1;
        self.commands.push(DrawCommand::Present);
    }

    fn create_texture(&mut self, image: &RgbaImage) -> Result<HeadlessTexture> {
        let (width, height) = image.dimensions();
        anyhow::ensure!(
            width > 0 && height > 0,
            "cannot create a texture from an empty image"
        );
        anyhow::ensure!(
            width <= MAX_TEXTURE_SIZE && height <= MAX_TEXTURE_SIZE,
            "texture {width}x{height} exceeds the maximum size {MAX_TEXTURE_SIZE}"
        );
        Ok(HeadlessTexture { width, height })
    }
}

/// Texture created by [`RecordingSurface`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HeadlessTexture {
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desc(width: u32, height: u32) -> WindowDesc {
        WindowDesc {
            title: "test".into(),
            width,
            height,
            fullscreen: true,
            resizable: false,
        }
    }

    #[test]
    fn host_creates_surface_of_window_size() {
        let mut host = HeadlessHost::new();
        let video = host.init_video().unwrap();
        let window = host.create_window(&video, &desc(320, 240)).unwrap();
        let surface = host.create_surface(&video, &window, SurfaceKind::Software).unwrap();
        assert_eq!(surface.size(), (320, 240));
        assert_eq!(surface.kind(), SurfaceKind::Software);
    }

    #[test]
    fn zero_sized_window_is_rejected() {
        let mut host = HeadlessHost::new();
        let video = host.init_video().unwrap();
        assert!(host.create_window(&video, &desc(0, 240)).is_err());
    }

    #[test]
    fn surface_records_calls_in_order() {
        let mut s = RecordingSurface::new(10, 10, SurfaceKind::Accelerated);
        s.clear(Color::BLACK);
        s.set_draw_color(Color::SKY);
        s.draw_rect(Rect::new(1, 2, 3, 4));
        s.present();

        assert_eq!(
            s.commands(),
            &[
                DrawCommand::Clear(Color::BLACK),
                DrawCommand::SetColor(Color::SKY),
                DrawCommand::Rect(Rect::new(1, 2, 3, 4)),
                DrawCommand::Present,
            ]
        );
        assert_eq!(s.frames_presented(), 1);
        assert_eq!(s.draw_color(), Color::SKY);
        assert_eq!(s.take_commands().len(), 4);
        assert!(s.commands().is_empty());
    }

    #[test]
    fn texture_limits_are_enforced() {
        let mut s = RecordingSurface::new(10, 10, SurfaceKind::Accelerated);
        let ok = s.create_texture(&RgbaImage::new(16, 8)).unwrap();
        assert_eq!(ok, HeadlessTexture { width: 16, height: 8 });
        assert!(s.create_texture(&RgbaImage::new(0, 0)).is_err());
        assert!(s.create_texture(&RgbaImage::new(MAX_TEXTURE_SIZE + 1, 1)).is_err());
    }
}
