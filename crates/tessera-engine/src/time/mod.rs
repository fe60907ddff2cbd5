//! Time subsystem.
//!
//! Frame timing without coupling to the runtime. Intended usage:
//! - one `FrameTimer` per renderer
//! - `start()` once the drawing surface exists
//! - `tick()` once per presented frame

mod frame_timer;

pub use frame_timer::{FrameTime, FrameTimer, DEFAULT_FPS_WINDOW};
