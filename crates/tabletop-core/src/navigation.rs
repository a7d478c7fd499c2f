//! Discrete navigation and display events.

/// A single navigation or display-mode input event.
///
/// Events are queued by the embedding input layer and applied only at frame
/// boundaries, so the eye and display options never change mid-frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Rotate the eye left by one longitude step.
    RotateLeft,
    /// Rotate the eye right by one longitude step.
    RotateRight,
    /// Raise the eye by one latitude step.
    RotateUp,
    /// Lower the eye by one latitude step.
    RotateDown,
    /// Move the eye closer to the look-at point.
    ZoomIn,
    /// Move the eye further from the look-at point.
    ZoomOut,
    /// Reset the eye to the initial view.
    Reset,
    /// Toggle wireframe rendering.
    ToggleWireframe,
    /// Toggle texture mapping.
    ToggleTexturing,
    /// Toggle the axes overlay.
    ToggleAxes,
    /// Request application exit.
    Quit,
}
