use crate::coords::Vec2;

use super::config::{CameraConfig, PanIntegration};

/// Period of the effective zoom in raw-accumulator units.
pub const ZOOM_PERIOD: f64 = 1.4;

/// Lower bound of the effective zoom.
pub const ZOOM_FLOOR: f64 = 0.5;

/// Maps the unbounded zoom accumulator into `[0.5, 1.9)`.
///
/// `%` is the truncated remainder (sign follows `zoom_raw`); the absolute value
/// folds negative accumulators back into range.
#[inline]
pub fn effective_zoom(zoom_raw: f64) -> f64 {
    (zoom_raw % ZOOM_PERIOD).abs() + ZOOM_FLOOR
}

/// The single mutable view transform.
///
/// Invariants:
/// - `pan_velocity` is zero whenever no drag is active
/// - `time` never decreases
/// - the effective zoom is always derived from `zoom_raw`, never stored
#[derive(Debug, Clone)]
pub struct CameraState {
    config: CameraConfig,

    position: Vec2,
    zoom_raw: f64,
    pan_velocity: Vec2,
    time: f64,

    /// Screen point where the active drag started. `None` when not panning.
    drag_anchor: Option<Vec2>,
}

impl CameraState {
    pub fn new() -> Self {
        Self::with_config(CameraConfig::default())
    }

    pub fn with_config(config: CameraConfig) -> Self {
        Self {
            config,
            position: Vec2::zero(),
            zoom_raw: config.initial_zoom_raw,
            pan_velocity: Vec2::zero(),
            time: 0.0,
            drag_anchor: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn zoom_raw(&self) -> f64 {
        self.zoom_raw
    }

    #[inline]
    pub fn pan_velocity(&self) -> Vec2 {
        self.pan_velocity
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[inline]
    pub fn is_panning(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Records `screen_point` as the drag anchor and enters panning mode.
    ///
    /// Velocity is left untouched until the first move.
    pub fn on_drag_start(&mut self, screen_point: Vec2) {
        self.drag_anchor = Some(screen_point);
    }

    /// Updates pan velocity from the offset between `screen_point` and the anchor.
    ///
    /// Horizontal drag is inverted, vertical is not. No-op when not panning.
    pub fn on_drag_move(&mut self, screen_point: Vec2) {
        let Some(anchor) = self.drag_anchor else { return };
        let delta = screen_point - anchor;
        let c = self.config.pan_sensitivity;
        self.pan_velocity = Vec2::new(-delta.x * c, delta.y * c);
    }

    /// Leaves panning mode and stops the camera.
    pub fn on_drag_end(&mut self) {
        self.drag_anchor = None;
        self.pan_velocity = Vec2::zero();
    }

    /// Accumulates a scroll delta into the raw zoom. Unclamped.
    pub fn on_scroll(&mut self, delta_y: f64) {
        self.zoom_raw += delta_y * self.config.scroll_step;
    }

    /// Steps the camera by one frame.
    pub fn advance(&mut self, dt: f64) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.time += dt;

        match self.config.pan_integration {
            PanIntegration::PerFrame => self.position += self.pan_velocity,
            PanIntegration::TimeScaled => self.position += self.pan_velocity * dt,
        }
    }

    /// Zoom value consumed by the grid pass; always in `[0.5, 1.9)`.
    #[inline]
    pub fn effective_zoom(&self) -> f64 {
        effective_zoom(self.zoom_raw)
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new()
    }
}
