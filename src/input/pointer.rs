use super::event::{
    InputEvent, MouseButton, PointerEvent, PointerGesture, TouchPhase,
};

/// Tracks cursor position and button/touch state, emitting pointer
/// gestures.
///
/// Only the left mouse button drives gestures, and no gesture is emitted
/// before the first cursor position arrives. Touch input is dropped
/// unless multi-touch is enabled, in which case the first finger down acts
/// as the pointer until it lifts.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    cursor: Option<(f32, f32)>,
    button_held: bool,
    active_touch: Option<u64>,
    multi_touch: bool,
}

impl PointerTracker {
    /// Create a tracker with no known cursor position and nothing held.
    #[must_use]
    pub fn new(multi_touch: bool) -> Self {
        Self {
            cursor: None,
            button_held: false,
            active_touch: None,
            multi_touch,
        }
    }

    /// Whether the left button is currently held.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.button_held
    }

    /// Feed one raw event, returning the gesture it produces, if any.
    pub fn handle(&mut self, event: InputEvent) -> Option<PointerGesture> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Some((x, y));
                let at = PointerEvent::from_position(x, y);
                self.button_held.then_some(PointerGesture::Drag(at))
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            } => {
                // a press with no known position cannot anchor a drag
                let at = self.pointer()?;
                self.button_held = pressed;
                Some(if pressed {
                    PointerGesture::Down(at)
                } else {
                    PointerGesture::Up(at)
                })
            }
            InputEvent::MouseButton { .. } => None,
            InputEvent::Touch { id, phase, x, y } => {
                self.handle_touch(id, phase, x, y)
            }
        }
    }

    fn handle_touch(
        &mut self,
        id: u64,
        phase: TouchPhase,
        x: f32,
        y: f32,
    ) -> Option<PointerGesture> {
        if !self.multi_touch {
            return None;
        }
        let at = PointerEvent::from_position(x, y);
        match (phase, self.active_touch) {
            (TouchPhase::Started, None) => {
                self.active_touch = Some(id);
                Some(PointerGesture::Down(at))
            }
            (TouchPhase::Moved, Some(active)) if active == id => {
                Some(PointerGesture::Drag(at))
            }
            (TouchPhase::Ended | TouchPhase::Cancelled, Some(active))
                if active == id =>
            {
                self.active_touch = None;
                Some(PointerGesture::Up(at))
            }
            _ => None,
        }
    }

    fn pointer(&self) -> Option<PointerEvent> {
        self.cursor.map(|(x, y)| PointerEvent::from_position(x, y))
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    fn left(pressed: bool) -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        }
    }

    fn touch(id: u64, phase: TouchPhase, x: f32) -> InputEvent {
        InputEvent::Touch {
            id,
            phase,
            x,
            y: 0.0,
        }
    }

    fn at(x: i32, y: i32) -> PointerEvent {
        PointerEvent { x, y }
    }

    #[test]
    fn press_move_release_is_down_drag_up() {
        let mut tracker = PointerTracker::default();
        assert_eq!(tracker.handle(moved(100.0, 50.0)), None);
        assert_eq!(
            tracker.handle(left(true)),
            Some(PointerGesture::Down(at(100, 50)))
        );
        assert!(tracker.is_pressed());
        assert_eq!(
            tracker.handle(moved(140.4, 52.6)),
            Some(PointerGesture::Drag(at(140, 53)))
        );
        assert_eq!(
            tracker.handle(left(false)),
            Some(PointerGesture::Up(at(140, 53)))
        );
        assert!(!tracker.is_pressed());
        assert_eq!(tracker.handle(moved(200.0, 50.0)), None);
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut tracker = PointerTracker::default();
        let right = InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        };
        assert_eq!(tracker.handle(right), None);
        assert_eq!(tracker.handle(moved(10.0, 10.0)), None);
    }

    #[test]
    fn release_without_press_still_reports_up() {
        let mut tracker = PointerTracker::default();
        let _ = tracker.handle(moved(7.0, 3.0));
        assert_eq!(
            tracker.handle(left(false)),
            Some(PointerGesture::Up(at(7, 3)))
        );
    }

    #[test]
    fn press_before_any_cursor_position_is_ignored() {
        let mut tracker = PointerTracker::default();
        assert_eq!(tracker.handle(left(true)), None);
        assert!(!tracker.is_pressed());
        // the first real position must not become a drag from x = 0
        assert_eq!(tracker.handle(moved(320.0, 240.0)), None);
        assert_eq!(
            tracker.handle(left(false)),
            Some(PointerGesture::Up(at(320, 240)))
        );
        assert_eq!(
            tracker.handle(left(true)),
            Some(PointerGesture::Down(at(320, 240)))
        );
        assert_eq!(
            tracker.handle(moved(330.0, 240.0)),
            Some(PointerGesture::Drag(at(330, 240)))
        );
    }

    #[test]
    fn touch_is_dropped_when_multi_touch_disabled() {
        let mut tracker = PointerTracker::new(false);
        assert_eq!(tracker.handle(touch(1, TouchPhase::Started, 5.0)), None);
        assert_eq!(tracker.handle(touch(1, TouchPhase::Ended, 5.0)), None);
    }

    #[test]
    fn first_touch_drives_the_pointer() {
        let mut tracker = PointerTracker::new(true);
        assert_eq!(
            tracker.handle(touch(1, TouchPhase::Started, 10.0)),
            Some(PointerGesture::Down(at(10, 0)))
        );
        // a second finger is ignored while the first is down
        assert_eq!(tracker.handle(touch(2, TouchPhase::Started, 90.0)), None);
        assert_eq!(tracker.handle(touch(2, TouchPhase::Moved, 95.0)), None);
        assert_eq!(
            tracker.handle(touch(1, TouchPhase::Moved, 30.0)),
            Some(PointerGesture::Drag(at(30, 0)))
        );
        assert_eq!(
            tracker.handle(touch(1, TouchPhase::Cancelled, 31.0)),
            Some(PointerGesture::Up(at(31, 0)))
        );
        assert_eq!(
            tracker.handle(touch(2, TouchPhase::Started, 50.0)),
            Some(PointerGesture::Down(at(50, 0)))
        );
    }
}
