//! Camera subsystem.
//!
//! `CameraState` owns the view transform (pan offset, zoom accumulator, frame time).
//! `CameraController` turns platform-agnostic input events into camera operations.
//!
//! Intended usage per frame:
//! - feed the frame's input events to the controller
//! - call `CameraState::advance` once
//! - snapshot the state into the grid pass

mod config;
mod controller;
mod state;

pub use config::{CameraConfig, PanIntegration};
pub use controller::{CameraController, ControllerConfig};
pub use state::{effective_zoom, CameraState, ZOOM_FLOOR, ZOOM_PERIOD};
