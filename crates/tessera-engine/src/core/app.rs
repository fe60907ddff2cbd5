use winit::event::WindowEvent;

use crate::backend::Backend;
use crate::render::ViewportRenderer;
use crate::scene::{Camera, Scene};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by the runtime.
///
/// Per frame the runtime calls `update` with the previous frame's duration,
/// then renders `scene()` through `camera()`.
pub trait App {
    type Scene: Scene + ?Sized;
    type Camera: Camera + ?Sized;

    /// Called once after the renderer initialized, e.g. to load textures.
    fn on_ready<B: Backend>(&mut self, renderer: &mut ViewportRenderer<B>) {
        let _ = renderer;
    }

    /// Called for window events before the runtime handles them.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Advances game state by `dt` seconds.
    fn update(&mut self, dt: f32) -> AppControl {
        let _ = dt;
        AppControl::Continue
    }

    fn scene(&self) -> &Self::Scene;

    fn camera(&self) -> &Self::Camera;
}
