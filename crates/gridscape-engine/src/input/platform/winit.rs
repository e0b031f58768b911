use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::window::Window;

use crate::input::{
    InputEvent, InputState, MouseButton, MouseButtonState, MouseWheelDelta, PointerButtonEvent,
    PointerMoveEvent,
};

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// Returns `None` for events not represented by the input subsystem.
pub(crate) fn translate_window_event(
    window: &Window,
    state: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical_f32(window, *position);
            Some(InputEvent::PointerMoved(PointerMoveEvent { x, y }))
        }

        WindowEvent::MouseInput { state: st, button, .. } => {
            let st = match st {
                ElementState::Pressed => MouseButtonState::Pressed,
                ElementState::Released => MouseButtonState::Released,
            };
            pointer_button(state, map_mouse_button(*button), st)
        }

        WindowEvent::MouseWheel { delta, .. } => {
            let delta = match delta {
                MouseScrollDelta::LineDelta(x, y) => MouseWheelDelta::Line { x: *x, y: *y },
                MouseScrollDelta::PixelDelta(p) => {
                    let (x, y) = to_logical_f32(window, *p);
                    MouseWheelDelta::Pixel { x, y }
                }
            };
            Some(InputEvent::MouseWheel { delta })
        }

        _ => None,
    }
}

/// Builds a button event at the tracked pointer position.
///
/// winit 0.30 has no cursor query, so a press before the first `CursorMoved`
/// has no position to anchor a drag and is dropped. Releases always pass
/// through so a drag can end.
fn pointer_button(
    state: &InputState,
    button: MouseButton,
    st: MouseButtonState,
) -> Option<InputEvent> {
    let (x, y) = match (state.pointer_pos, st) {
        (Some(pos), _) => pos,
        (None, MouseButtonState::Released) => (0.0, 0.0),
        (None, MouseButtonState::Pressed) => {
            log::debug!("{button:?} pressed before the cursor position is known; ignored");
            return None;
        }
    };

    Some(InputEvent::PointerButton(PointerButtonEvent { button, state: st, x, y }))
}

fn to_logical_f32(window: &Window, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let scale = window.scale_factor();
    let logical = pos.to_logical::<f64>(scale);
    (logical.x as f32, logical.y as f32)
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraController, CameraState};
    use crate::input::InputFrame;

    #[test]
    fn press_without_cursor_position_is_dropped() {
        let state = InputState::default();
        assert_eq!(pointer_button(&state, MouseButton::Left, MouseButtonState::Pressed), None);
    }

    #[test]
    fn release_without_cursor_position_still_passes() {
        let state = InputState::default();
        let ev = pointer_button(&state, MouseButton::Left, MouseButtonState::Released);
        assert!(matches!(
            ev,
            Some(InputEvent::PointerButton(PointerButtonEvent { state: MouseButtonState::Released, .. }))
        ));
    }

    #[test]
    fn press_uses_tracked_position() {
        let state = InputState { pointer_pos: Some((120.0, 80.0)) };
        let ev = pointer_button(&state, MouseButton::Right, MouseButtonState::Pressed);
        assert_eq!(
            ev,
            Some(InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Right,
                state: MouseButtonState::Pressed,
                x: 120.0,
                y: 80.0,
            }))
        );
    }

    #[test]
    fn first_click_at_launch_does_not_fling_the_camera() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        // Window opened under the cursor: click before any move.
        if let Some(ev) = pointer_button(&state, MouseButton::Left, MouseButtonState::Pressed) {
            state.apply_event(&mut frame, ev);
        }
        state.apply_event(&mut frame, InputEvent::PointerMoved(PointerMoveEvent { x: 900.0, y: 700.0 }));

        let mut cam = CameraState::new();
        CameraController::default().apply_all(&mut cam, &frame.events);
        assert!(cam.pan_velocity().is_zero());
    }
}
