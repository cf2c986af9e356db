//! Raw input events delivered to widgets.

use crate::geometry::{Point, Vector};

bitflags::bitflags! {
    /// Keyboard modifiers held while an event occurred.
    #[derive(Default)]
    pub struct Modifiers: u32 {
        const SHIFT = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT = 1 << 2;
        const SUPER = 1 << 3;
    }
}

/// Keys that have no character representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    Left,
    Up,
    Right,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
    Shift,
    Control,
    Alt,
    Super,
}

/// A character key was pressed or released.
///
/// `key` is the character's code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub press: bool,
    pub key: u32,
}

/// A mouse button was pressed or released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub button: u32,
    pub press: bool,
    pub pos: Point,
}

/// The pointer moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionEvent {
    pub pos: Point,
}

/// A scroll wheel or touchpad scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub pos: Point,
    pub delta: Vector,
}

/// A special (non-character) key was pressed or released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialEvent {
    pub press: bool,
    pub key: Key,
}

/// Any input event a window can dispatch to its widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Keyboard(KeyboardEvent),
    Mouse(MouseEvent),
    Motion(MotionEvent),
    Scroll(ScrollEvent),
    Special(SpecialEvent),
}

impl InputEvent {
    /// Pointer position of the event, if it carries one.
    pub fn pos(&self) -> Option<Point> {
        match self {
            InputEvent::Mouse(ev) => Some(ev.pos),
            InputEvent::Motion(ev) => Some(ev.pos),
            InputEvent::Scroll(ev) => Some(ev.pos),
            InputEvent::Keyboard(_) | InputEvent::Special(_) => None,
        }
    }

    /// Returns a copy of the event with its pointer position moved by `-offset`.
    ///
    /// Mouse-button and scroll positions that do not fit in `i32` lie outside
    /// any widget, so those events yield `None`. Motion positions saturate.
    pub fn translated(&self, offset: Point) -> Option<Self> {
        let shift = |pos: Point| -> Option<Point> {
            Some(Point::new(
                pos.x.checked_sub(offset.x)?,
                pos.y.checked_sub(offset.y)?,
            ))
        };
        let saturate = |pos: Point| {
            Point::new(
                pos.x.saturating_sub(offset.x),
                pos.y.saturating_sub(offset.y),
            )
        };

        Some(match *self {
            InputEvent::Mouse(ev) => InputEvent::Mouse(MouseEvent {
                pos: shift(ev.pos)?,
                ..ev
            }),
            InputEvent::Motion(ev) => InputEvent::Motion(MotionEvent {
                pos: saturate(ev.pos),
            }),
            InputEvent::Scroll(ev) => InputEvent::Scroll(ScrollEvent {
                pos: shift(ev.pos)?,
                ..ev
            }),
            other => other,
        })
    }
}

/// Input state captured alongside an event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EventContext {
    /// Platform timestamp of the event, in milliseconds.
    pub time: u32,
    pub mods: Modifiers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translated_moves_pointer_events_only() {
        let mouse = InputEvent::Mouse(MouseEvent {
            button: 1,
            press: true,
            pos: Point::new(15, 30),
        });
        let key = InputEvent::Keyboard(KeyboardEvent {
            press: true,
            key: 'a' as u32,
        });

        assert_eq!(
            mouse.translated(Point::new(10, 20)).and_then(|ev| ev.pos()),
            Some(Point::new(5, 10))
        );
        assert_eq!(key.translated(Point::new(10, 20)), Some(key));
        assert_eq!(key.pos(), None);
    }

    #[test]
    fn test_translated_out_of_range() {
        let far = Point::new(i32::MAX, 0);
        let mouse = InputEvent::Mouse(MouseEvent {
            button: 1,
            press: true,
            pos: Point::new(-10, 0),
        });
        let motion = InputEvent::Motion(MotionEvent {
            pos: Point::new(-10, 0),
        });

        assert_eq!(mouse.translated(far), None);
        assert_eq!(
            motion.translated(far),
            Some(InputEvent::Motion(MotionEvent {
                pos: Point::new(i32::MIN, 0)
            }))
        );
    }

    #[test]
    fn test_modifiers_default_empty() {
        let mods = Modifiers::default();
        assert!(mods.is_empty());
        assert!((Modifiers::SHIFT | Modifiers::ALT).contains(Modifiers::ALT));
    }
}
