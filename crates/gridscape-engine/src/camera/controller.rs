use crate::coords::Vec2;
use crate::input::{InputEvent, MouseButtonState, MouseWheelDelta, PointerButtonEvent, PointerMoveEvent};

use super::state::CameraState;

/// Input-to-camera mapping parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ControllerConfig {
    /// Pixel-equivalent scroll distance of one wheel line (notch).
    pub line_scroll_pixels: f64,

    /// End an active drag when the window loses focus.
    ///
    /// A button released while another window has focus is not reported to
    /// this one, so the drag would otherwise never end.
    pub end_drag_on_focus_loss: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            line_scroll_pixels: 100.0,
            end_drag_on_focus_loss: true,
        }
    }
}

/// Applies pointer and wheel events to a `CameraState`.
///
/// Any mouse button drags. Events are applied in arrival order, so the last
/// move of a frame determines that frame's velocity.
#[derive(Debug, Clone, Default)]
pub struct CameraController {
    config: ControllerConfig,
}

impl CameraController {
    pub fn new(config: ControllerConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Applies a batch of events in order.
    pub fn apply_all<'e, I>(&self, camera: &mut CameraState, events: I)
    where
        I: IntoIterator<Item = &'e InputEvent>,
    {
        for ev in events {
            self.apply(camera, ev);
        }
    }

    /// Applies a single event.
    pub fn apply(&self, camera: &mut CameraState, event: &InputEvent) {
        match event {
            InputEvent::PointerButton(PointerButtonEvent { state, x, y, .. }) => match state {
                MouseButtonState::Pressed => camera.on_drag_start(Vec2::from((*x, *y))),
                MouseButtonState::Released => camera.on_drag_end(),
            },

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                camera.on_drag_move(Vec2::from((*x, *y)));
            }

            InputEvent::MouseWheel { delta } => {
                camera.on_scroll(self.scroll_delta_y(*delta));
            }

            InputEvent::Focused(false) if self.config.end_drag_on_focus_loss => {
                camera.on_drag_end();
            }

            InputEvent::Focused(_) | InputEvent::PointerLeft => {}
        }
    }

    /// Converts a wheel delta to a browser-style `deltaY` (pixels, positive = scroll down).
    pub fn scroll_delta_y(&self, delta: MouseWheelDelta) -> f64 {
        match delta {
            MouseWheelDelta::Line { y, .. } => -(y as f64) * self.config.line_scroll_pixels,
            MouseWheelDelta::Pixel { y, .. } => -(y as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButton;

    fn press(button: MouseButton, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state: MouseButtonState::Pressed,
            x,
            y,
        })
    }

    fn release(button: MouseButton, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state: MouseButtonState::Released,
            x,
            y,
        })
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    // ── drag ──────────────────────────────────────────────────────────────

    #[test]
    fn press_move_sets_velocity() {
        let ctl = CameraController::default();
        let mut cam = CameraState::new();
        ctl.apply_all(&mut cam, &[press(MouseButton::Left, 100.0, 100.0), moved(150.0, 100.0)]);
        assert!(cam.is_panning());
        assert!((cam.pan_velocity().x - (-50.0 * 0.00006)).abs() < 1e-12);
        assert_eq!(cam.pan_velocity().y, 0.0);
    }

    #[test]
    fn any_button_drags() {
        let ctl = CameraController::default();
        for button in [MouseButton::Right, MouseButton::Middle, MouseButton::Other(7)] {
            let mut cam = CameraState::new();
            ctl.apply_all(&mut cam, &[press(button, 0.0, 0.0), moved(0.0, 10.0)]);
            assert!(cam.pan_velocity().y > 0.0);
        }
    }

    #[test]
    fn release_stops_pan() {
        let ctl = CameraController::default();
        let mut cam = CameraState::new();
        ctl.apply_all(
            &mut cam,
            &[press(MouseButton::Left, 0.0, 0.0), moved(30.0, 30.0), release(MouseButton::Left, 30.0, 30.0)],
        );
        assert!(!cam.is_panning());
        assert!(cam.pan_velocity().is_zero());
    }

    #[test]
    fn hover_without_press_does_nothing() {
        let ctl = CameraController::default();
        let mut cam = CameraState::new();
        ctl.apply_all(&mut cam, &[moved(10.0, 10.0), moved(400.0, 20.0)]);
        assert!(cam.pan_velocity().is_zero());
    }

    #[test]
    fn last_move_of_batch_wins() {
        let ctl = CameraController::default();
        let mut cam = CameraState::new();
        ctl.apply_all(
            &mut cam,
            &[press(MouseButton::Left, 0.0, 0.0), moved(100.0, 0.0), moved(-20.0, 0.0)],
        );
        assert!(cam.pan_velocity().x > 0.0);
    }

    #[test]
    fn focus_loss_ends_drag() {
        let ctl = CameraController::default();
        let mut cam = CameraState::new();
        ctl.apply_all(&mut cam, &[press(MouseButton::Left, 0.0, 0.0), moved(5.0, 5.0)]);
        ctl.apply(&mut cam, &InputEvent::Focused(false));
        assert!(!cam.is_panning());
        assert!(cam.pan_velocity().is_zero());
    }

    #[test]
    fn focus_loss_can_keep_drag() {
        let ctl = CameraController::new(ControllerConfig {
            end_drag_on_focus_loss: false,
            ..ControllerConfig::default()
        });
        let mut cam = CameraState::new();
        ctl.apply_all(&mut cam, &[press(MouseButton::Left, 0.0, 0.0), moved(5.0, 5.0)]);
        ctl.apply(&mut cam, &InputEvent::Focused(false));
        assert!(cam.is_panning());
    }

    // ── wheel ─────────────────────────────────────────────────────────────

    #[test]
    fn wheel_line_down_increases_zoom_raw() {
        let ctl = CameraController::default();
        let mut cam = CameraState::new();
        let before = cam.zoom_raw();
        ctl.apply(&mut cam, &InputEvent::MouseWheel { delta: MouseWheelDelta::Line { x: 0.0, y: -1.0 } });
        assert!((cam.zoom_raw() - (before + 0.1)).abs() < 1e-9);
    }

    #[test]
    fn wheel_pixel_delta_is_negated() {
        let ctl = CameraController::default();
        assert_eq!(ctl.scroll_delta_y(MouseWheelDelta::Pixel { x: 3.0, y: 40.0 }), -40.0);
        assert_eq!(ctl.scroll_delta_y(MouseWheelDelta::Line { x: 0.0, y: 2.0 }), -200.0);
    }

    #[test]
    fn wheel_does_not_touch_pan() {
        let ctl = CameraController::default();
        let mut cam = CameraState::new();
        ctl.apply(&mut cam, &InputEvent::MouseWheel { delta: MouseWheelDelta::Pixel { x: 0.0, y: 12.0 } });
        assert!(cam.pan_velocity().is_zero());
        assert!(!cam.is_panning());
    }
}
