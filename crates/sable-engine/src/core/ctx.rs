use crate::runtime::RuntimeCtx;
use crate::surface::Canvas;
use crate::time::FrameTime;

/// Per-frame context passed to [`App::frame`](super::App::frame).
///
/// `canvas` is the only route to the pixel buffer, so all surface mutation
/// stays inside the single frame-callback execution context.
pub struct FrameCtx<'a> {
    pub canvas: &'a mut Canvas,
    pub time: FrameTime,
    pub runtime: &'a mut RuntimeCtx,
}
