use winit::event::{ElementState, MouseButton, WindowEvent};

/// Tracks the primary mouse button and the last cursor position (physical pixels).
#[derive(Debug, Default)]
pub struct InputHandler {
    primary_pressed: bool,
    cursor: Option<(f64, f64)>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates pointer state from a window event. Returns `true` when the event
    /// was a pointer event and needs no further handling.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some((position.x, position.y));
                true
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.primary_pressed = *state == ElementState::Pressed;
                true
            }
            WindowEvent::Focused(false) => {
                // Release events are lost once focus moves elsewhere
                self.primary_pressed = false;
                false
            }
            _ => false,
        }
    }

    pub fn is_primary_pressed(&self) -> bool {
        self.primary_pressed
    }

    /// Cursor position while the primary button is held.
    pub fn primary_position(&self) -> Option<(f64, f64)> {
        if self.primary_pressed {
            self.cursor
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;
    use winit::event::DeviceId;

    #[allow(deprecated)]
    fn cursor_moved(x: f64, y: f64) -> WindowEvent<'static> {
        WindowEvent::CursorMoved {
            device_id: unsafe { DeviceId::dummy() },
            position: PhysicalPosition::new(x, y),
            modifiers: Default::default(),
        }
    }

    #[allow(deprecated)]
    fn left_button(state: ElementState) -> WindowEvent<'static> {
        WindowEvent::MouseInput {
            device_id: unsafe { DeviceId::dummy() },
            state,
            button: MouseButton::Left,
            modifiers: Default::default(),
        }
    }

    #[test]
    fn no_position_until_pressed() {
        let mut input = InputHandler::new();
        assert!(input.handle_window_event(&cursor_moved(10.0, 20.0)));
        assert!(!input.is_primary_pressed());
        assert_eq!(input.primary_position(), None);
    }

    #[test]
    fn held_button_reports_last_cursor() {
        let mut input = InputHandler::new();
        input.handle_window_event(&cursor_moved(10.0, 20.0));
        input.handle_window_event(&left_button(ElementState::Pressed));
        assert_eq!(input.primary_position(), Some((10.0, 20.0)));

        input.handle_window_event(&cursor_moved(30.0, 40.0));
        assert_eq!(input.primary_position(), Some((30.0, 40.0)));

        input.handle_window_event(&left_button(ElementState::Released));
        assert_eq!(input.primary_position(), None);
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut input = InputHandler::new();
        #[allow(deprecated)]
        let right = WindowEvent::MouseInput {
            device_id: unsafe { DeviceId::dummy() },
            state: ElementState::Pressed,
            button: MouseButton::Right,
            modifiers: Default::default(),
        };
        assert!(!input.handle_window_event(&right));
        assert!(!input.is_primary_pressed());
    }

    #[test]
    fn losing_focus_releases_button() {
        let mut input = InputHandler::new();
        input.handle_window_event(&left_button(ElementState::Pressed));
        assert!(input.is_primary_pressed());
        assert!(!input.handle_window_event(&WindowEvent::Focused(false)));
        assert!(!input.is_primary_pressed());
    }
}
