//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the game
//! built on top of it.

mod app;

pub use app::{App, AppControl};
