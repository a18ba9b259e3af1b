//! Font loading.
//!
//! Owns parsed fonts and hands out opaque ids; the glyph rasterization that
//! consumes them lives in `raster::text`.

mod store;

pub use store::{FontId, FontStore};
