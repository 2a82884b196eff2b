//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns all transient input state (cursor
//! position, which button started the grab, modifier keys). It is the
//! only thing that sits between raw window events and
//! [`CameraController::execute`](crate::CameraController::execute).

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::camera::controller::CameraCommand;

/// Converts raw window events into [`CameraCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = processor.handle_event(event) {
///     controller.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Last known cursor position in physical pixels.
    cursor: Vec2,
    /// Which button is currently holding a grab, if any.
    grab_button: Option<MouseButton>,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
}

impl InputProcessor {
    /// Create a processor with no active grab.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cursor: Vec2::ZERO,
            grab_button: None,
            shift_pressed: false,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub const fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Whether a button-driven grab is in progress.
    #[must_use]
    pub const fn is_grabbing(&self) -> bool {
        self.grab_button.is_some()
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub const fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Release any held grab without emitting a command.
    ///
    /// For consumers that intercept mouse events mid-drag (e.g. when a
    /// GUI overlay takes focus) and need the processor back in a clean
    /// state.
    pub fn release_grab_state(&mut self) {
        self.grab_button = None;
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
    ) -> Option<CameraCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Vec2::new(x, y);
                self.grab_button
                    .map(|_| CameraCommand::GrabUpdate { x, y })
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => Some(CameraCommand::Zoom {
                x: self.cursor.x,
                y: self.cursor.y,
                delta,
            }),
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
        }
    }

    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<CameraCommand> {
        if pressed {
            // First button wins; a second press mid-grab is ignored.
            if self.grab_button.is_some() {
                return None;
            }
            self.grab_button = Some(button);
            let strafe = button != MouseButton::Left || self.shift_pressed;
            return Some(CameraCommand::GrabBegin {
                x: self.cursor.x,
                y: self.cursor.y,
                strafe,
            });
        }

        // Only the button that started the grab may end it.
        if self.grab_button == Some(button) {
            self.grab_button = None;
            return Some(CameraCommand::GrabEnd);
        }
        None
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_drag_release_produces_grab_sequence() {
        let mut processor = InputProcessor::new();
        assert!(processor
            .handle_event(InputEvent::CursorMoved { x: 10.0, y: 20.0 })
            .is_none());
        let begin = processor.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        assert_eq!(
            begin,
            Some(CameraCommand::GrabBegin {
                x: 10.0,
                y: 20.0,
                strafe: false
            })
        );
        let update = processor
            .handle_event(InputEvent::CursorMoved { x: 30.0, y: 40.0 });
        assert_eq!(
            update,
            Some(CameraCommand::GrabUpdate { x: 30.0, y: 40.0 })
        );
        let end = processor.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        });
        assert_eq!(end, Some(CameraCommand::GrabEnd));
        assert!(!processor.is_grabbing());
    }

    #[test]
    fn shift_left_drag_strafes() {
        let mut processor = InputProcessor::new();
        assert!(processor
            .handle_event(InputEvent::ModifiersChanged { shift: true })
            .is_none());
        let begin = processor.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        assert_eq!(
            begin,
            Some(CameraCommand::GrabBegin {
                x: 0.0,
                y: 0.0,
                strafe: true
            })
        );
    }

    #[test]
    fn right_button_strafes_without_modifier() {
        let mut processor = InputProcessor::new();
        let begin = processor.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        assert_eq!(
            begin,
            Some(CameraCommand::GrabBegin {
                x: 0.0,
                y: 0.0,
                strafe: true
            })
        );
    }

    #[test]
    fn scroll_zooms_at_last_cursor_position() {
        let mut processor = InputProcessor::new();
        let _ = processor
            .handle_event(InputEvent::CursorMoved { x: 320.0, y: 240.0 });
        let zoom =
            processor.handle_event(InputEvent::Scroll { delta: 2.0 });
        assert_eq!(
            zoom,
            Some(CameraCommand::Zoom {
                x: 320.0,
                y: 240.0,
                delta: 2.0
            })
        );
    }

    #[test]
    fn second_button_mid_grab_is_ignored() {
        let mut processor = InputProcessor::new();
        let _ = processor.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        assert!(processor
            .handle_event(InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed: true,
            })
            .is_none());
        // Releasing the other button does not end the grab either.
        assert!(processor
            .handle_event(InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed: false,
            })
            .is_none());
        assert!(processor.is_grabbing());
    }

    #[test]
    fn release_grab_state_resets_silently() {
        let mut processor = InputProcessor::new();
        let _ = processor.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        processor.release_grab_state();
        assert!(!processor.is_grabbing());
        // The stale release produces nothing.
        assert!(processor
            .handle_event(InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: false,
            })
            .is_none());
    }
}
