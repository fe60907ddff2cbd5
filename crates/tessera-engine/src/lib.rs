//! Tessera engine crate.
//!
//! Renders a camera-clipped view of a block scene through a pluggable backend
//! (winit + wgpu, or headless), with frame timing and FPS reporting.

pub mod backend;
pub mod coords;
pub mod core;
pub mod device;
pub mod logging;
pub mod render;
pub mod scene;
pub mod time;
pub mod window;
