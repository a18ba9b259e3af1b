use crate::error::SketchError;
use crate::surface::Canvas;

use super::ctx::FrameCtx;

/// Control directive returned by frame callbacks and presenters.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Application contract implemented by sketches.
///
/// The runtime calls [`setup`](Self::setup) exactly once, to completion,
/// before the first [`frame`](Self::frame); frames then run strictly one
/// after another, never overlapping.
pub trait App {
    /// Called once before the first frame. Expected to establish the surface
    /// (`background`, `center`); the default does nothing.
    fn setup(&mut self, canvas: &mut Canvas) -> Result<(), SketchError> {
        let _ = canvas;
        Ok(())
    }

    /// Called once per scheduled frame tick.
    fn frame(&mut self, ctx: &mut FrameCtx<'_>) -> Result<LoopControl, SketchError>;
}
