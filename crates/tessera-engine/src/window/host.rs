use std::sync::Arc;

use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, Window};

use crate::backend::{Backend, Host, ImageCodecs, SurfaceKind, WindowDesc};
use crate::device::{GpuInit, GpuInstance, WgpuSurface};

/// Resource family of the winit + wgpu backend.
#[derive(Debug)]
pub enum Wgpu {}

impl Backend for Wgpu {
    type Video = GpuInstance;
    type Images = ImageCodecs;
    type Window = GameWindow;
    type Surface = WgpuSurface;
}

/// Window plus the request it was created from.
pub struct GameWindow {
    window: Arc<Window>,
    desc: WindowDesc,
}

impl GameWindow {
    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn desc(&self) -> &WindowDesc {
        &self.desc
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Acquires wgpu resources while the event loop is active.
///
/// Windows can only be created from inside the event loop, so a host lives for
/// the duration of one callback.
pub struct WinitHost<'a> {
    event_loop: &'a ActiveEventLoop,
    gpu_init: GpuInit,
}

impl<'a> WinitHost<'a> {
    pub fn new(event_loop: &'a ActiveEventLoop) -> Self {
        Self {
            event_loop,
            gpu_init: GpuInit::default(),
        }
    }

    pub fn with_gpu_init(mut self, gpu_init: GpuInit) -> Self {
        self.gpu_init = gpu_init;
        self
    }
}

impl Host<Wgpu> for WinitHost<'_> {
    fn init_video(&mut self) -> Result<GpuInstance> {
        GpuInstance::new()
    }

    fn init_images(&mut self, _video: &GpuInstance) -> Result<ImageCodecs> {
        ImageCodecs::new()
    }

    fn create_window(&mut self, _video: &GpuInstance, desc: &WindowDesc) -> Result<GameWindow> {
        anyhow::ensure!(
            desc.width > 0 && desc.height > 0,
            "window size {}x{} is invalid",
            desc.width,
            desc.height
        );

        let fullscreen = desc.fullscreen.then_some(Fullscreen::Borderless(None));
        let attrs = Window::default_attributes()
            .with_title(desc.title.clone())
            .with_inner_size(PhysicalSize::new(desc.width, desc.height))
            .with_resizable(desc.resizable)
            .with_fullscreen(fullscreen);

        let window = self
            .event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        Ok(GameWindow {
            window: Arc::new(window),
            desc: desc.clone(),
        })
    }

    fn create_surface(
        &mut self,
        video: &GpuInstance,
        window: &GameWindow,
        kind: SurfaceKind,
    ) -> Result<WgpuSurface> {
        pollster::block_on(WgpuSurface::new(
            video.instance(),
            window.window.clone(),
            (window.desc.width, window.desc.height),
            kind,
            self.gpu_init.clone(),
        ))
    }
}
