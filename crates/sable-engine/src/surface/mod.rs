//! The drawing surface.
//!
//! Responsibilities:
//! - own the RGBA8 pixel buffer and its dimensions
//! - hold the coordinate-origin convention and map sketch coordinates to
//!   buffer coordinates
//! - expose the [`Canvas`] handle that callbacks draw through
//!
//! All mutation happens from within the active frame callback; the runtime
//! never touches the buffer concurrently (see `runtime`).

mod buffer;
mod canvas;

pub use buffer::{OriginMode, Surface};
pub use canvas::Canvas;
