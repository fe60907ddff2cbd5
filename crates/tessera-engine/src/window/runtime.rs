use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::core::{App, AppControl};
use crate::device::GpuInit;
use crate::render::{InitError, RendererConfig, ViewportRenderer};

use super::host::{Wgpu, WinitHost};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,

    /// Use the software (fallback) adapter instead of a hardware GPU.
    pub software: bool,

    /// Exit after this many rendered frames.
    pub max_frames: Option<u64>,

    pub gpu: GpuInit,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "tessera".to_string(),
            software: false,
            max_frames: None,
            gpu: GpuInit::default(),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, initializes the renderer and runs `app` until it
    /// exits, the window closes, or the frame limit is reached.
    ///
    /// Renderer initialization failure ends the loop and is returned.
    pub fn run<A>(config: RuntimeConfig, renderer: RendererConfig, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, renderer, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.init_error.take() {
            Some(err) => Err(err).context("renderer initialization failed"),
            None => Ok(()),
        }
    }
}

struct AppState<A: App> {
    config: RuntimeConfig,
    renderer: ViewportRenderer<Wgpu>,
    app: A,

    init_error: Option<InitError>,
    last_dt: f32,
    exit_requested: bool,
}

impl<A: App> AppState<A> {
    fn new(config: RuntimeConfig, renderer: RendererConfig, app: A) -> Self {
        Self {
            config,
            renderer: ViewportRenderer::new(renderer),
            app,
            init_error: None,
            last_dt: 0.0,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn owns(&self, id: WindowId) -> bool {
        self.renderer
            .window()
            .is_some_and(|w| w.window().id() == id)
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.update(self.last_dt) == AppControl::Exit {
            self.request_exit(event_loop);
            return;
        }

        let Some(ft) = self.renderer.render_frame(self.app.scene(), self.app.camera()) else {
            return;
        };
        self.last_dt = ft.dt;

        if let Some(limit) = self.config.max_frames {
            if ft.frame_index + 1 >= limit {
                log::info!("frame limit {limit} reached");
                self.request_exit(event_loop);
            }
        }
    }
}

impl<A: App> ApplicationHandler for AppState<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_initialized() || self.exit_requested {
            return;
        }

        let mut host = WinitHost::new(event_loop).with_gpu_init(self.config.gpu.clone());
        if let Err(err) = self
            .renderer
            .initialize(&mut host, &self.config.title, self.config.software)
        {
            self.init_error = Some(err);
            self.request_exit(event_loop);
            return;
        }

        self.app.on_ready(&mut self.renderer);

        if let Some(w) = self.renderer.window() {
            w.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: one frame per loop iteration.
        if let Some(w) = self.renderer.window() {
            w.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.exit_requested || !self.owns(window_id) {
            return;
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.request_exit(event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => self.request_exit(event_loop),

            WindowEvent::Resized(new_size) => {
                if let Some(surface) = self.renderer.surface_mut() {
                    surface.resize(new_size);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Release GPU resources while the event loop (and display) still exist.
        self.renderer.shutdown();
    }
}
