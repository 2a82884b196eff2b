/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor)
/// which converts them into
/// [`CameraCommand`](crate::CameraCommand) values.
///
/// # Example
///
/// ```
/// use gimbal::input::{InputEvent, InputProcessor};
///
/// let mut processor = InputProcessor::new();
/// let cmd = processor
///     .handle_event(InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// assert!(cmd.is_none()); // not dragging yet
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels, origin at the left.
        x: f32,
        /// Vertical position in physical pixels, origin at the top.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button: drag in map mode, rotate in orbit
    /// mode.
    Left,
    /// Secondary (right) mouse button: strafe.
    Right,
    /// Middle mouse button (wheel click): strafe.
    Middle,
}
