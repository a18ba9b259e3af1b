//! Sable engine crate.
//!
//! This crate owns the sketch runtime pieces: the frame loop, the CPU pixel
//! surface, and the raster primitives that paint into it. Presentation of
//! finished frames is delegated to a [`runtime::Presenter`] supplied by the
//! host.

pub mod runtime;
pub mod surface;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod raster;
pub mod paint;
pub mod text;

pub mod error;
