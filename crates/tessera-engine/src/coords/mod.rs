//! Coordinate and geometry types shared by the renderer and its backends.
//!
//! Three spaces use the same integer `Rect` shape:
//! - block space: level grid units, +Y up from the ground
//! - world space: block space scaled by the block size, still +Y up
//! - screen space: display pixels, origin top-left, +Y down
//!
//! `ViewTransform` converts between them.

mod color;
mod rect;
mod transform;

pub use color::Color;
pub use rect::Rect;
pub use transform::ViewTransform;
