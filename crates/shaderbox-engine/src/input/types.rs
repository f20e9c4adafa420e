/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

/// Pointer event in physical pixels, origin top-left.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    /// A button was pressed at the given position.
    Down { button: MouseButton, x: f32, y: f32 },
    /// The pointer moved to the given position.
    Move { x: f32, y: f32 },
    /// A button was released at the given position.
    Up { button: MouseButton, x: f32, y: f32 },
    /// The pointer left the window surface.
    Left,
}
