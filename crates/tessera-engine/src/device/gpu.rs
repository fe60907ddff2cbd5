use std::sync::Arc;

use anyhow::{Context, Result};
use image::RgbaImage;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::backend::{DrawSurface, SurfaceKind};
use crate::coords::{Color, Rect};

use super::outline::{push_outline, OutlineRenderer, OutlineVertex};
use super::surface::{self, SurfaceErrorAction};
use super::texture::GpuTexture;

/// Initialization parameters for the GPU layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior). FIFO is supported everywhere.
    pub present_mode: wgpu::PresentMode,

    /// Desired maximum frame latency for the surface. This value is a hint.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            desired_maximum_frame_latency: 2,
        }
    }
}

/// Drawing surface bound to a window.
///
/// Draw calls between `clear` and `present` are batched on the CPU; `present`
/// acquires the swapchain image, clears it, rasterizes the batch and shows it.
/// Logical coordinates span the display size requested at creation and are
/// stretched to the actual swapchain size.
pub struct WgpuSurface {
    /// Declared first so it is dropped before the window it refers to.
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    window: Arc<Window>,
    logical_size: (u32, u32),
    kind: SurfaceKind,

    outlines: OutlineRenderer,
    clear_color: Color,
    draw_color: Color,
    pending: Vec<OutlineVertex>,
}

impl WgpuSurface {
    /// Creates a surface for `window`.
    ///
    /// `SurfaceKind::Software` requests wgpu's fallback (CPU) adapter.
    /// Adapter/device acquisition is asynchronous under wgpu.
    pub async fn new(
        instance: &wgpu::Instance,
        window: Arc<Window>,
        logical_size: (u32, u32),
        kind: SurfaceKind,
        init: GpuInit,
    ) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        let surface = instance
            .create_surface(window.clone())
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: kind == SurfaceKind::Software,
            })
            .await
            .with_context(|| format!("failed to find a suitable {kind:?} GPU adapter"))?;

        let info = adapter.get_info();
        log::info!("using adapter {} ({:?}, {:?})", info.name, info.device_type, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("tessera device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults().using_resolution(adapter.limits()),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let caps = surface.get_capabilities(&adapter);
        let format = surface::choose_surface_format(&caps, init.prefer_srgb)
            .context("no supported surface formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: init.present_mode,
            alpha_mode: surface::choose_alpha_mode(&caps),
            view_formats: vec![],
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };
        surface.configure(&device, &config);

        let outlines = OutlineRenderer::new(&device, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            window,
            logical_size,
            kind,
            outlines,
            clear_color: Color::BLACK,
            draw_color: Color::rgb(0xff, 0xff, 0xff),
            pending: Vec::new(),
        })
    }

    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    /// Returns the active surface format.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Current swapchain size in physical pixels.
    pub fn size(&self) -> PhysicalSize<u32> {
        PhysicalSize::new(self.config.width, self.config.height)
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Reconfigures the swapchain after the window was resized.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        surface::apply_resize(&self.surface, &self.device, &mut self.config, new_size);
    }

    /// Converts a `SurfaceError` into a higher-level action.
    pub fn handle_surface_error(&mut self, err: wgpu::SurfaceError) -> SurfaceErrorAction {
        surface::map_surface_error(&self.surface, &self.device, &self.config, err)
    }

    fn target_color(&self, c: Color) -> [f32; 4] {
        let [r, g, b, a] = c.to_f32();
        if self.config.format.is_srgb() {
            [
                surface::srgb_to_linear(r),
                surface::srgb_to_linear(g),
                surface::srgb_to_linear(b),
                a,
            ]
        } else {
            [r, g, b, a]
        }
    }

    fn render_pending(&mut self) {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(err) => {
                let reason = err.to_string();
                match self.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => log::error!("surface lost permanently: {reason}"),
                    action => log::debug!("frame skipped after {reason}: {action:?}"),
                }
                return;
            }
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("tessera frame encoder"),
            });

        let [r, g, b, a] = self.target_color(self.clear_color);

        // Clear pass, dropped before the outline pass borrows the encoder.
        {
            let _rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("tessera clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: f64::from(r),
                            g: f64::from(g),
                            b: f64::from(b),
                            a: f64::from(a),
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        self.outlines.render(
            &self.device,
            &self.queue,
            &mut encoder,
            &view,
            self.logical_size,
            &self.pending,
        );

        self.queue.submit(std::iter::once(encoder.finish()));
        self.window.pre_present_notify();
        frame.present();
    }
}

impl DrawSurface for WgpuSurface {
    type Texture = GpuTexture;

    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.pending.clear();
    }

    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    fn draw_rect(&mut self, rect: Rect) {
        let color = self.target_color(self.draw_color);
        push_outline(&mut self.pending, rect, color);
    }

    fn present(&mut self) {
        self.render_pending();
        self.pending.clear();
    }

    fn create_texture(&mut self, image: &RgbaImage) -> Result<GpuTexture> {
        GpuTexture::upload(&self.device, &self.queue, image)
    }
}
