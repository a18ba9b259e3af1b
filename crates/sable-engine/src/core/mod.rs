//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the runtime (frame loop)
//! and sketches: the [`App`] lifecycle trait, the per-frame context, and the
//! [`Sketch`] callback-slot registration type for closures-only sketches.

mod app;
mod ctx;
mod sketch;

pub use app::{App, LoopControl};
pub use ctx::FrameCtx;
pub use sketch::Sketch;
