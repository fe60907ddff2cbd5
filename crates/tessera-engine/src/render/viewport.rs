use std::path::Path;

use crate::backend::{Backend, DrawSurface, Host, ImageDecoder, SurfaceKind, WindowDesc};
use crate::coords::ViewTransform;
use crate::scene::{Camera, Scene};
use crate::time::{FrameTime, FrameTimer};

use super::{InitError, InitStage, RendererConfig, TextureError};

/// Texture type produced by backend `B`.
pub type TextureOf<B> = <<B as Backend>::Surface as DrawSurface>::Texture;

/// Resources held while initialized.
///
/// Fields drop in declaration order, which is the reverse of acquisition.
struct Resources<B: Backend> {
    timer: FrameTimer,
    surface: B::Surface,
    window: B::Window,
    images: B::Images,
    video: B::Video,
}

/// Draws a camera-clipped view of a block scene.
///
/// Lifecycle:
/// - `new` stores configuration only
/// - `initialize` acquires backend resources and starts the frame timer
/// - `render_frame` once per frame
/// - `shutdown` (or drop) releases everything in reverse acquisition order
pub struct ViewportRenderer<B: Backend> {
    config: RendererConfig,
    transform: ViewTransform,
    resources: Option<Resources<B>>,
    last_fps: Option<f64>,
    warned_uninitialized: bool,
}

impl<B: Backend> ViewportRenderer<B> {
    pub fn new(config: RendererConfig) -> Self {
        let transform = config.transform();
        Self {
            config,
            transform,
            resources: None,
            last_fps: None,
            warned_uninitialized: false,
        }
    }

    /// Acquires video subsystem, image subsystem, window and drawing surface,
    /// then starts the frame timer.
    ///
    /// On failure everything acquired so far is released before returning and
    /// the renderer stays uninitialized. Calling this on an initialized
    /// renderer tears the old resources down first.
    pub fn initialize<H>(&mut self, host: &mut H, title: &str, software: bool) -> Result<(), InitError>
    where
        H: Host<B> + ?Sized,
    {
        self.shutdown();

        let desc = WindowDesc {
            title: title.to_owned(),
            width: self.config.width,
            height: self.config.height,
            fullscreen: self.config.fullscreen,
            resizable: false,
        };
        let kind = SurfaceKind::from_software_flag(software);

        // Locals drop in reverse order if a later stage bails out.
        let video = acquire(InitStage::Video, host.init_video())?;
        let images = acquire(InitStage::Images, host.init_images(&video))?;
        let window = acquire(InitStage::Window, host.create_window(&video, &desc))?;
        let surface = acquire(InitStage::Surface, host.create_surface(&video, &window, kind))?;

        let mut timer = FrameTimer::new(self.config.fps_window);
        timer.start();

        self.resources = Some(Resources {
            timer,
            surface,
            window,
            images,
            video,
        });
        self.last_fps = None;
        self.warned_uninitialized = false;

        log::debug!(
            "renderer initialized: {}x{} block_scale={} surface={kind:?}",
            self.config.width,
            self.config.height,
            self.config.block_scale
        );
        Ok(())
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.resources.is_some()
    }

    /// Draws one frame and advances the frame timer.
    ///
    /// Every platform is scaled to world space, clipped against the camera,
    /// flipped to screen space and outlined. Platforms with no visible part
    /// produce no draw call. Returns `None` (and draws nothing) when the
    /// renderer is not initialized.
    pub fn render_frame<S, C>(&mut self, scene: &S, camera: &C) -> Option<FrameTime>
    where
        S: Scene + ?Sized,
        C: Camera + ?Sized,
    {
        let Some(res) = self.resources.as_mut() else {
            if !self.warned_uninitialized {
                log::warn!("render_frame called before initialize; frame skipped");
                self.warned_uninitialized = true;
            }
            return None;
        };

        let view = camera.rect();

        res.surface.clear(self.config.background);
        res.surface.set_draw_color(self.config.accent);

        for platform in scene.platforms() {
            if let Some(screen) = self.transform.project(platform.rect(), view) {
                res.surface.draw_rect(screen);
            }
        }

        res.surface.present();

        let ft = res.timer.tick();

        let every = self.config.report_every;
        if every > 0 && res.timer.frame_count() % every == 0 {
            let fps = res.timer.fps();
            log::info!("fps: {fps:.1}");
            self.last_fps = Some(fps);
        }

        Some(ft)
    }

    /// Decodes the image at `path` and uploads it as a texture.
    ///
    /// The caller owns the returned texture. Failures are logged and returned;
    /// nothing else changes.
    pub fn load_texture(&mut self, path: impl AsRef<Path>) -> Result<TextureOf<B>, TextureError> {
        let path = path.as_ref();
        let res = self.resources.as_mut().ok_or(TextureError::NotInitialized)?;

        let image = res.images.decode(path).map_err(|reason| {
            let err = TextureError::Decode {
                path: path.to_path_buf(),
                reason,
            };
            log::error!("{err}");
            err
        })?;

        res.surface.create_texture(&image).map_err(|reason| {
            let err = TextureError::Upload {
                path: path.to_path_buf(),
                reason,
            };
            log::error!("{err}");
            err
        })
    }

    /// Releases timer, surface, window, image subsystem and video subsystem,
    /// in that order. No-op when not initialized.
    pub fn shutdown(&mut self) {
        if let Some(res) = self.resources.take() {
            drop(res);
            log::debug!("renderer resources released");
        }
    }

    #[inline]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    #[inline]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn timer(&self) -> Option<&FrameTimer> {
        self.resources.as_ref().map(|r| &r.timer)
    }

    pub fn surface(&self) -> Option<&B::Surface> {
        self.resources.as_ref().map(|r| &r.surface)
    }

    pub fn surface_mut(&mut self) -> Option<&mut B::Surface> {
        self.resources.as_mut().map(|r| &mut r.surface)
    }

    pub fn window(&self) -> Option<&B::Window> {
        self.resources.as_ref().map(|r| &r.window)
    }

    pub fn video(&self) -> Option<&B::Video> {
        self.resources.as_ref().map(|r| &r.video)
    }

    /// FPS value from the most recent periodic report.
    pub fn last_reported_fps(&self) -> Option<f64> {
        self.last_fps
    }
}

impl<B: Backend> Drop for ViewportRenderer<B> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn acquire<T>(stage: InitStage, result: anyhow::Result<T>) -> Result<T, InitError> {
    result.map_err(|e| {
        let err = InitError::at(stage, e);
        log::error!("{err}");
        err
    })
}
