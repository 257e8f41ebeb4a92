/// Mouse buttons the state machine distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary button: split tracking, modifier-click seeking.
    Left,
    /// Secondary button: pan dragging.
    Right,
}

/// Physical keys with a binding.
///
/// Backends fold keypad plus/minus into [`Key::Plus`]/[`Key::Minus`]; the
/// remaining keypad keys are distinct because they pan and center the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Request shutdown.
    Escape,
    /// Toggle playback.
    Space,
    /// Toggle subtraction mode.
    Num0,
    /// Toggle the left source.
    Num1,
    /// Toggle the right source.
    Num2,
    /// Toggle the HUD.
    Num3,
    /// Step the frame offset forward.
    A,
    /// Step the frame offset backward.
    D,
    /// Swap the left and right streams.
    S,
    /// Seek back one unit.
    Left,
    /// Seek forward one unit.
    Right,
    /// Seek forward ten units.
    Up,
    /// Seek back ten units.
    Down,
    /// Seek forward six hundred units.
    PageUp,
    /// Seek back six hundred units.
    PageDown,
    /// Zoom in one step.
    Plus,
    /// Zoom out one step.
    Minus,
    /// Pan down.
    Kp2,
    /// Pan left.
    Kp4,
    /// Reset the pan center to the video midpoint.
    Kp5,
    /// Pan right.
    Kp6,
    /// Pan up.
    Kp8,
}

/// One raw input event in logical window coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer moved.
    MouseMotion {
        /// Window-space x.
        x: f64,
        /// Window-space y.
        y: f64,
    },
    /// Button pressed at the given pointer position.
    MouseButtonDown {
        /// Which button.
        button: MouseButton,
        /// Window-space x.
        x: f64,
        /// Window-space y.
        y: f64,
        /// A control modifier was held.
        ctrl: bool,
    },
    /// Button released.
    MouseButtonUp {
        /// Which button.
        button: MouseButton,
    },
    /// Scroll wheel tick; positive is away from the operator.
    Wheel {
        /// Vertical wheel delta.
        delta_y: i32,
    },
    /// Key pressed (edge-triggered; repeats arrive as further events).
    KeyDown {
        /// Which key.
        key: Key,
    },
    /// Window-close or equivalent shutdown signal.
    Quit,
}
