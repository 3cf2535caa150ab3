#![forbid(unsafe_code)]

//! Gesture recognition: transforms raw viewport events into paging intents.
//!
//! [`GestureRecognizer`] is a stateful processor that condenses raw
//! [`Event`] streams (wheel bursts, touch swipes, pointer drags) into at
//! most one directional [`Intent`] per physical gesture, together with a
//! [`Response`] telling the host which platform default actions to
//! suppress.
//!
//! # State Machine
//!
//! The recognizer tracks two independent machines:
//!
//! - **Wheel burst detector**: consecutive wheel events closer together
//!   than the settle window belong to the same physical gesture (trackpad
//!   inertia produces dozens of decaying deltas per flick). Only the first
//!   above-threshold delta of a burst emits an intent.
//! - **Drag tracker**: touch and pointer sequences share one tracker.
//!   The axis is decided once, after `axis_slop` of travel, and locked for
//!   the rest of the gesture. A vertically locked drag emits its intent
//!   once accumulated travel passes `drag_threshold`; everything after
//!   that is ignored until the finger/button lifts.
//!
//! # Invariants
//!
//! 1. A single physical gesture produces at most one `Intent`.
//! 2. A horizontally locked drag never produces an intent, and never asks
//!    the host to suppress the default action.
//! 3. Secondary touches or pointers while a drag is live are ignored, not
//!    queued.
//! 4. After `reset()`, both machines return to idle.
//!
//! # Failure Modes
//!
//! - End/cancel events without a live gesture are ignored.
//! - Focus loss aborts a live drag and clears wheel burst state; no intent
//!   is emitted for the aborted gesture.

use web_time::Instant;

use bitflags::bitflags;
use std::time::Duration;

use crate::event::{Event, PointerEvent, PointerId, PointerKind, TouchEvent, TouchId, TouchPhase};

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Directional paging intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Move to the next section.
    Advance,

    /// Move back to the previous section.
    Retreat,
}

bitflags! {
    /// Actions the host should take in response to a processed event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Response: u8 {
        /// No host action requested.
        const NONE            = 0b00;
        /// Suppress the platform's native scroll/overscroll behavior.
        const PREVENT_DEFAULT = 0b01;
        /// Capture the pointer so follow-up events route to the viewport.
        const CAPTURE         = 0b10;
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::NONE
    }
}

/// Result of processing one raw event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recognition {
    /// Directional intent, if this event completed a gesture's threshold.
    pub intent: Option<Intent>,

    /// Host actions requested for this event.
    pub response: Response,
}

impl Recognition {
    /// No intent, no host action.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            intent: None,
            response: Response::NONE,
        }
    }

    const fn respond(response: Response) -> Self {
        Self {
            intent: None,
            response,
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds and timeouts for gesture recognition.
#[derive(Debug, Clone)]
pub struct GestureConfig {
    /// Minimum vertical travel (px) before a drag emits an intent
    /// (default: 48.0). Keeps accidental taps from firing a transition.
    pub drag_threshold: f32,

    /// Travel (px) before the gesture's axis is decided and locked
    /// (default: 8.0).
    pub axis_slop: f32,

    /// Minimum absolute vertical wheel delta (px) that counts as input
    /// (default: 0.5).
    pub wheel_min_delta: f32,

    /// Gap after which a wheel event starts a new physical gesture
    /// (default: 300ms). Events inside the window are the inertial tail of
    /// the current burst.
    pub wheel_settle: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 48.0,
            axis_slop: 8.0,
            wheel_min_delta: 0.5,
            wheel_settle: Duration::from_millis(300),
        }
    }
}

// ---------------------------------------------------------------------------
// Internal state
// ---------------------------------------------------------------------------

/// Which input surface a drag arrived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragSource {
    Touch(TouchId),
    Pointer(PointerId),
}

/// The axis a drag is locked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Vertical,
    Horizontal,
}

/// Tracks an ongoing touch/pointer drag.
#[derive(Debug, Clone, Copy)]
struct DragTracker {
    source: DragSource,
    start_x: f32,
    start_y: f32,
    axis: Option<Axis>,
    fired: bool,
}

// ---------------------------------------------------------------------------
// GestureRecognizer
// ---------------------------------------------------------------------------

/// Stateful recognizer that condenses raw events into paging intents.
///
/// Call [`process`](GestureRecognizer::process) for each incoming
/// [`Event`], forwarding the returned [`Recognition`] to the scheduler
/// (intent) and the host (response).
pub struct GestureRecognizer {
    config: GestureConfig,

    // Drag tracking
    drag: Option<DragTracker>,

    // Wheel burst tracking
    last_wheel: Option<Instant>,
    burst_fired: bool,
}

impl std::fmt::Debug for GestureRecognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureRecognizer")
            .field("tracking", &self.is_tracking())
            .field("burst_fired", &self.burst_fired)
            .finish()
    }
}

impl GestureRecognizer {
    /// Create a new gesture recognizer with the given configuration.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            drag: None,
            last_wheel: None,
            burst_fired: false,
        }
    }

    /// Process a raw event.
    pub fn process(&mut self, event: &Event, now: Instant) -> Recognition {
        match event {
            Event::Wheel(wheel) => {
                if !wheel.is_vertical() {
                    // Horizontal wheel motion is not ours to consume.
                    return Recognition::idle();
                }
                self.on_wheel(wheel.delta_y, now)
            }
            Event::Touch(touch) => self.on_touch(touch),
            Event::Pointer(pointer) => self.on_pointer(pointer),
            Event::Focus(false) => {
                self.reset();
                Recognition::idle()
            }
            Event::Focus(true) => Recognition::idle(),
        }
    }

    /// Whether a touch/pointer gesture is currently being tracked.
    #[inline]
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.drag.is_some()
    }

    /// Reset all gesture state to initial idle.
    pub fn reset(&mut self) {
        self.drag = None;
        self.last_wheel = None;
        self.burst_fired = false;
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Update the configuration.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }
}

// ---------------------------------------------------------------------------
// Internal event handlers
// ---------------------------------------------------------------------------

impl GestureRecognizer {
    fn on_wheel(&mut self, delta_y: f32, now: Instant) -> Recognition {
        // Vertical wheel motion always belongs to the paginator; the page
        // must never scroll natively underneath it.
        let response = Response::PREVENT_DEFAULT;

        let continuing = self
            .last_wheel
            .is_some_and(|t| now.duration_since(t) < self.config.wheel_settle);
        self.last_wheel = Some(now);

        if !continuing {
            self.burst_fired = false;
        }

        if self.burst_fired || delta_y.abs() < self.config.wheel_min_delta {
            return Recognition::respond(response);
        }

        self.burst_fired = true;
        let intent = if delta_y > 0.0 {
            Intent::Advance
        } else {
            Intent::Retreat
        };
        Recognition {
            intent: Some(intent),
            response,
        }
    }

    fn on_touch(&mut self, touch: &TouchEvent) -> Recognition {
        let source = DragSource::Touch(touch.id);
        match touch.phase {
            TouchPhase::Start => self.on_drag_start(source, touch.x, touch.y),
            TouchPhase::Move => self.on_drag_move(source, touch.x, touch.y),
            TouchPhase::End | TouchPhase::Cancel => self.on_drag_end(source),
        }
    }

    fn on_pointer(&mut self, pointer: &PointerEvent) -> Recognition {
        let source = DragSource::Pointer(pointer.id);
        match pointer.kind {
            PointerKind::Down => self.on_drag_start(source, pointer.x, pointer.y),
            PointerKind::Move => self.on_drag_move(source, pointer.x, pointer.y),
            PointerKind::Up | PointerKind::Cancel => self.on_drag_end(source),
        }
    }

    fn on_drag_start(&mut self, source: DragSource, x: f32, y: f32) -> Recognition {
        if self.drag.is_some() {
            // A gesture is live; overlapping contacts are ignored.
            return Recognition::idle();
        }
        self.drag = Some(DragTracker {
            source,
            start_x: x,
            start_y: y,
            axis: None,
            fired: false,
        });
        Recognition::idle()
    }

    fn on_drag_move(&mut self, source: DragSource, x: f32, y: f32) -> Recognition {
        let Some(ref mut drag) = self.drag else {
            // Move without a tracked start (gesture already ended): ignore.
            return Recognition::idle();
        };
        if drag.source != source {
            return Recognition::idle();
        }

        let dx = x - drag.start_x;
        let dy = y - drag.start_y;

        if drag.axis.is_none() && dx.abs().max(dy.abs()) >= self.config.axis_slop {
            drag.axis = Some(if dy.abs() >= dx.abs() {
                Axis::Vertical
            } else {
                Axis::Horizontal
            });
        }

        match drag.axis {
            None => Recognition::idle(),
            Some(Axis::Horizontal) => Recognition::idle(),
            Some(Axis::Vertical) => {
                let mut response = Response::PREVENT_DEFAULT;
                if matches!(source, DragSource::Pointer(_)) {
                    response |= Response::CAPTURE;
                }

                if drag.fired {
                    return Recognition::respond(response);
                }

                // Travel is measured against the start point; direction is
                // the sign of the vertical pull.
                let travel = drag.start_y - y;
                if travel.abs() < self.config.drag_threshold {
                    return Recognition::respond(response);
                }

                drag.fired = true;
                let intent = if travel > 0.0 {
                    // Content pushed up: move forward.
                    Intent::Advance
                } else {
                    Intent::Retreat
                };
                Recognition {
                    intent: Some(intent),
                    response,
                }
            }
        }
    }

    fn on_drag_end(&mut self, source: DragSource) -> Recognition {
        if self.drag.is_some_and(|d| d.source == source) {
            self.drag = None;
        }
        Recognition::idle()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
