//! Stateless raster painters.
//!
//! Responsibilities:
//! - paint shapes directly into a [`Surface`](crate::surface::Surface)
//!   pixel buffer, immediately, with no retained draw list
//! - clip silently at the buffer edge
//! - keep shape-specific code isolated per shape file
//!
//! Everything here works in buffer coordinates (top-left origin); the
//! origin-convention mapping happens in `surface::Canvas` before calls
//! arrive.

pub mod circle;
pub mod line;
pub mod rect;
pub mod text;
