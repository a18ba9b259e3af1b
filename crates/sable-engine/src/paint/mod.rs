//! Paint model shared between the canvas API and the rasterizer.
//!
//! Scope:
//! - color representation (straight-alpha sRGB bytes)
//! - hex-literal parsing
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
