//! GPU device + surface management.
//!
//! This module is responsible for:
//! - the wgpu `Instance` that stands in for the video subsystem
//! - creating and configuring the Surface (swapchain) for a window
//! - rasterizing outline rectangles and uploading textures

mod gpu;
mod instance;
mod outline;
mod surface;
mod texture;

pub use gpu::{GpuInit, WgpuSurface};
pub use instance::GpuInstance;
pub use surface::SurfaceErrorAction;
pub use texture::GpuTexture;
