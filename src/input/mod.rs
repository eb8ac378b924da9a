//! Input handling: platform-agnostic event types and the tracker that turns
//! raw window events into pointer gestures.

/// Platform-agnostic input events.
pub mod event;
/// Button/touch state machine producing down/drag/up gestures.
pub mod pointer;

pub use event::{
    InputEvent, MouseButton, PointerEvent, PointerGesture, TouchPhase,
};
pub use pointer::PointerTracker;
