//! Frame timing.
//!
//! One `FrameClock` per window; call `tick()` once per presented frame to obtain
//! a `FrameTime` whose `dt` drives `CameraState::advance`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
