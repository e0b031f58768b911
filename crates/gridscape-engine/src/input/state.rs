use super::frame::InputFrame;
use super::types::{InputEvent, PointerMoveEvent};

/// Pointer tracking for the view window.
///
/// winit reports button presses without a position, so the last cursor
/// position is kept here and attached to button events during translation.
#[derive(Debug, Default)]
pub struct InputState {
    /// Pointer position in logical pixels; `None` until the cursor has been
    /// seen over the window, and again after it leaves.
    pub pointer_pos: Option<(f32, f32)>,
}

impl InputState {
    /// Tracks the cursor from move/leave events, then buffers `ev` into `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::PointerButton(_) | InputEvent::MouseWheel { .. } | InputEvent::Focused(_) => {}
        }

        frame.push_event(ev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{MouseButton, MouseButtonState, PointerButtonEvent};

    fn button(state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button: MouseButton::Left, state, x, y })
    }

    #[test]
    fn only_moves_set_the_pointer() {
        let mut st = InputState::default();
        let mut frame = InputFrame::default();

        st.apply_event(&mut frame, button(MouseButtonState::Released, 0.0, 0.0));
        assert_eq!(st.pointer_pos, None);

        st.apply_event(&mut frame, InputEvent::PointerMoved(PointerMoveEvent { x: 10.0, y: 20.0 }));
        st.apply_event(&mut frame, button(MouseButtonState::Pressed, 10.0, 20.0));
        assert_eq!(st.pointer_pos, Some((10.0, 20.0)));
        assert_eq!(frame.events.len(), 3);
    }

    #[test]
    fn focus_and_wheel_leave_pointer_alone() {
        let mut st = InputState::default();
        let mut frame = InputFrame::default();
        st.apply_event(&mut frame, InputEvent::PointerMoved(PointerMoveEvent { x: 5.0, y: 6.0 }));
        st.apply_event(&mut frame, InputEvent::Focused(false));
        assert_eq!(st.pointer_pos, Some((5.0, 6.0)));
        assert_eq!(frame.events[1], InputEvent::Focused(false));
    }

    #[test]
    fn events_keep_arrival_order() {
        let mut st = InputState::default();
        let mut frame = InputFrame::default();
        st.apply_event(&mut frame, InputEvent::PointerMoved(PointerMoveEvent { x: 1.0, y: 1.0 }));
        st.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(frame.events[1], InputEvent::PointerLeft);
        assert_eq!(st.pointer_pos, None);

        frame.clear();
        assert!(frame.events.is_empty());
    }
}
