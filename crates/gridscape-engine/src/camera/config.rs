/// How pan velocity is applied during `CameraState::advance`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum PanIntegration {
    /// `position += velocity` once per frame, independent of delta time.
    ///
    /// Pan speed therefore scales with the display refresh rate.
    #[default]
    PerFrame,

    /// `position += velocity * dt`.
    ///
    /// Frame-rate independent. Velocities are then per second, so
    /// `pan_sensitivity` usually needs retuning.
    TimeScaled,
}

/// Camera tuning parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraConfig {
    /// World units of velocity per screen pixel of drag distance.
    pub pan_sensitivity: f64,

    /// Zoom accumulator change per unit of scroll delta.
    pub scroll_step: f64,

    /// Starting value of the unbounded zoom accumulator.
    pub initial_zoom_raw: f64,

    pub pan_integration: PanIntegration,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            pan_sensitivity: 0.00006,
            scroll_step: 0.001,
            initial_zoom_raw: 100000.0,
            pan_integration: PanIntegration::PerFrame,
        }
    }
}
