//! Viewport rendering.
//!
//! `ViewportRenderer` owns the backend resources for one display and turns a
//! block scene plus a camera into outline draw calls once per frame.
//!
//! Convention:
//! - scene geometry is in block units, +Y up
//! - the camera rectangle is in world pixels, +Y up
//! - draw calls are in screen pixels, top-left origin, +Y down

mod config;
mod error;
mod viewport;

pub use config::RendererConfig;
pub use error::{InitError, InitStage, TextureError};
pub use viewport::{TextureOf, ViewportRenderer};
