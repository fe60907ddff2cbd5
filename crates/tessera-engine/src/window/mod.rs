//! Window + runtime loop.
//!
//! `WinitHost` acquires the wgpu-backed resources for a `ViewportRenderer`;
//! `Runtime` owns the winit event loop and drives an `App` one frame per redraw.

mod host;
mod runtime;

pub use host::{GameWindow, Wgpu, WinitHost};
pub use runtime::{Runtime, RuntimeConfig};
