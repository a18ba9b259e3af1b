//! Coordinate and geometry types shared across the surface and raster layers.
//!
//! Canonical buffer space:
//! - Pixels, origin top-left
//! - +X right, +Y down
//!
//! Sketch-facing coordinates pass through the surface's origin convention
//! before reaching this space (see `surface`).

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
