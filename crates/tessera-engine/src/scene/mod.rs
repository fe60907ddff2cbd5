//! Scene-side capabilities consumed by the renderer.
//!
//! The renderer only reads through these traits; scene and camera state stay
//! owned by the application.

mod camera;
mod platform;

pub use camera::Camera;
pub use platform::{Platform, Scene};
