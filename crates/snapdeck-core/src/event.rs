#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the standard event types the recognizer consumes.
//! All events derive `Clone`, `PartialEq` for use in tests and pattern
//! matching.
//!
//! # Design Notes
//!
//! - Coordinates are viewport-relative, in pixels, with y growing downward.
//! - Wheel deltas follow the host convention: positive `delta_y` means the
//!   user scrolled forward (content should move up).
//! - Touch and pointer ids are opaque; the recognizer only compares them.

/// Canonical input event.
///
/// This enum represents all input the paginator can receive from the host
/// viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A wheel (or trackpad scroll) event.
    Wheel(WheelEvent),

    /// A touch event.
    Touch(TouchEvent),

    /// A pointer event (mouse/pen drag surface).
    Pointer(PointerEvent),

    /// Focus gained or lost.
    ///
    /// `true` = focus gained, `false` = focus lost.
    Focus(bool),
}

/// A wheel event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    /// Horizontal scroll delta in pixels.
    pub delta_x: f32,

    /// Vertical scroll delta in pixels. Positive = scrolled forward.
    pub delta_y: f32,
}

impl WheelEvent {
    /// Create a new wheel event.
    #[must_use]
    pub const fn new(delta_x: f32, delta_y: f32) -> Self {
        Self { delta_x, delta_y }
    }

    /// Create a purely vertical wheel event (the common case).
    #[must_use]
    pub const fn vertical(delta_y: f32) -> Self {
        Self::new(0.0, delta_y)
    }

    /// Whether the vertical delta dominates the horizontal one.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.delta_y.abs() >= self.delta_x.abs()
    }
}

/// Identifier of one finger within a touch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TouchId(pub u32);

/// A touch event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    /// Phase of the touch within its sequence.
    pub phase: TouchPhase,

    /// Which finger this event belongs to.
    pub id: TouchId,

    /// X coordinate in viewport pixels.
    pub x: f32,

    /// Y coordinate in viewport pixels.
    pub y: f32,
}

impl TouchEvent {
    /// Create a new touch event.
    #[must_use]
    pub const fn new(phase: TouchPhase, id: TouchId, x: f32, y: f32) -> Self {
        Self { phase, id, x, y }
    }
}

/// The phase of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Finger made contact.
    Start,

    /// Finger moved while in contact.
    Move,

    /// Finger lifted normally.
    End,

    /// Sequence aborted by the host (e.g. system gesture stole it).
    Cancel,
}

/// Identifier of a pointer (mouse, pen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u32);

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The kind of pointer event.
    pub kind: PointerKind,

    /// Which pointer this event belongs to.
    pub id: PointerId,

    /// X coordinate in viewport pixels.
    pub x: f32,

    /// Y coordinate in viewport pixels.
    pub y: f32,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerKind, id: PointerId, x: f32, y: f32) -> Self {
        Self { kind, id, x, y }
    }
}

/// The kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Button pressed down.
    Down,

    /// Pointer moved while down.
    Move,

    /// Button released.
    Up,

    /// Pointer sequence aborted by the host.
    Cancel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_vertical_constructor() {
        let w = WheelEvent::vertical(42.0);
        assert_eq!(w.delta_x, 0.0);
        assert_eq!(w.delta_y, 42.0);
    }

    #[test]
    fn wheel_is_vertical() {
        assert!(WheelEvent::new(1.0, 5.0).is_vertical());
        assert!(WheelEvent::new(-1.0, -5.0).is_vertical());
        assert!(!WheelEvent::new(5.0, 1.0).is_vertical());
        // Tie goes to vertical: the paginator owns the vertical axis.
        assert!(WheelEvent::new(3.0, 3.0).is_vertical());
    }

    #[test]
    fn touch_event_construction() {
        let t = TouchEvent::new(TouchPhase::Start, TouchId(7), 10.0, 20.0);
        assert_eq!(t.phase, TouchPhase::Start);
        assert_eq!(t.id, TouchId(7));
        assert_eq!((t.x, t.y), (10.0, 20.0));
    }

    #[test]
    fn pointer_event_construction() {
        let p = PointerEvent::new(PointerKind::Down, PointerId(1), 0.0, 0.0);
        assert_eq!(p.kind, PointerKind::Down);
        assert_eq!(p.id, PointerId(1));
    }

    #[test]
    fn event_is_clone_and_eq() {
        let event = Event::Wheel(WheelEvent::vertical(-3.0));
        let cloned = event;
        assert_eq!(event, cloned);
    }

    #[test]
    fn event_variants() {
        let _wheel = Event::Wheel(WheelEvent::vertical(1.0));
        let _touch = Event::Touch(TouchEvent::new(TouchPhase::Move, TouchId(0), 1.0, 2.0));
        let _pointer = Event::Pointer(PointerEvent::new(PointerKind::Up, PointerId(0), 1.0, 2.0));
        let _focus = Event::Focus(false);
    }
}
