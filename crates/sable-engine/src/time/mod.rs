//! Frame timing.
//!
//! One `FrameClock` per loop; `tick()` once per frame yields the `FrameTime`
//! snapshot handed to the update callback. Kept free of runtime coupling so
//! it stays testable on its own.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
