#![forbid(unsafe_code)]

//! Transition scheduling: one animated section change at a time.
//!
//! [`TransitionScheduler`] is a two-state machine (Idle / Animating) that
//! accepts directional intents, enforces mutual exclusion and cooldown,
//! and drives panel offsets through a [`Tween`].
//!
//! # State Machine
//!
//! - **Idle → Animating** on an intent whose guards all pass: the target
//!   index is in bounds, no flight is in progress, and the cooldown since
//!   the last transition start has elapsed.
//! - **Animating → Idle** when the tween completes: offsets are snapped
//!   exact, the new active index commits, and the caller is handed a
//!   [`Commit`] to trigger mount re-evaluation and publishing.
//! - Intents arriving while Animating, on a boundary section, or inside
//!   the cooldown window are **dropped**, never queued. The next gesture
//!   after returning to Idle is required to move further.
//!
//! # Panel choreography
//!
//! Advancing slides the incoming panel from its parked position down at
//! 100 up over the current one; on commit the covered panel is parked
//! again, invisibly, beneath the new active panel. Retreating first snaps
//! the target panel to 0 beneath the still-covering current panel, then
//! slides the current panel down to 100, revealing it. Either way the
//! rest-state invariant holds: exactly the active panel sits at offset 0.
//!
//! # Failure Modes
//!
//! - `abort()` kills an in-flight animation without committing; panel
//!   offsets are left mid-flight because the owner is being torn down.

use web_time::Instant;

use snapdeck_core::animation::{Animation, EasingFn, Tween, ease_out};
use snapdeck_core::gesture::Intent;
use std::time::Duration;

use crate::panels::{ACTIVE_OFFSET, PARKED_OFFSET, PanelStack};

/// Default minimum time between the start of two transitions.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(1000);

/// Default duration of one transition animation.
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(550);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Scheduler phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No transition in flight; intents are accepted.
    Idle,

    /// A transition is animating; intents are dropped.
    Animating,
}

/// What happened to a requested intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A transition started.
    Started,

    /// Dropped: a transition is already in flight.
    DroppedAnimating,

    /// Dropped: the cooldown window since the last start is still open.
    DroppedCooldown,

    /// Dropped: the active index is already at the relevant boundary.
    DroppedAtEdge,
}

impl RequestOutcome {
    /// Whether the intent started a transition.
    #[inline]
    #[must_use]
    pub const fn started(&self) -> bool {
        matches!(self, Self::Started)
    }
}

/// A committed transition, reported exactly once per completed animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    /// The newly active section index.
    pub index: usize,
}

/// One in-flight transition.
#[derive(Debug, Clone, Copy)]
struct Flight {
    /// Panel whose offset the tween drives.
    moving: usize,
    /// Index that becomes active on commit.
    target: usize,
    /// Panel to park on commit (the one covered during an advance).
    vacated: Option<usize>,
    tween: Tween,
}

// ---------------------------------------------------------------------------
// TransitionScheduler
// ---------------------------------------------------------------------------

/// Accepts intents, enforces one-at-a-time transitions, drives offsets.
///
/// All timing state lives on the instance, so multiple paginators can
/// coexist without interference.
#[derive(Debug)]
pub struct TransitionScheduler {
    len: usize,
    active: usize,
    cooldown: Duration,
    duration: Duration,
    easing: EasingFn,
    last_started: Option<Instant>,
    flight: Option<Flight>,
}

impl TransitionScheduler {
    /// Create a scheduler over `len` sections, starting at index 0.
    ///
    /// # Panics
    ///
    /// Panics if `len == 0`.
    #[must_use]
    pub fn new(len: usize, cooldown: Duration, duration: Duration) -> Self {
        assert!(len > 0, "TransitionScheduler requires at least one section");
        Self {
            len,
            active: 0,
            cooldown,
            duration,
            easing: ease_out,
            last_started: None,
            flight: None,
        }
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// The committed active index. Never reflects an in-flight target.
    #[inline]
    #[must_use]
    pub const fn active(&self) -> usize {
        self.active
    }

    /// Number of sections.
    #[inline]
    #[must_use]
    pub const fn section_count(&self) -> usize {
        self.len
    }

    /// Current phase.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.flight.is_some() {
            Phase::Animating
        } else {
            Phase::Idle
        }
    }

    /// Whether a transition is in flight (the transition lock).
    #[inline]
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.flight.is_some()
    }

    /// Submit a directional intent.
    ///
    /// Starts a transition when all guards pass; otherwise reports why the
    /// intent was dropped. Dropped intents are gone; there is no queue.
    pub fn request(
        &mut self,
        intent: Intent,
        now: Instant,
        panels: &mut PanelStack,
    ) -> RequestOutcome {
        if self.flight.is_some() {
            self.log_drop(intent, "animating");
            return RequestOutcome::DroppedAnimating;
        }
        if self
            .last_started
            .is_some_and(|t| now.duration_since(t) < self.cooldown)
        {
            self.log_drop(intent, "cooldown");
            return RequestOutcome::DroppedCooldown;
        }

        let flight = match intent {
            Intent::Advance => {
                if self.active + 1 >= self.len {
                    self.log_drop(intent, "edge");
                    return RequestOutcome::DroppedAtEdge;
                }
                let moving = self.active + 1;
                Flight {
                    moving,
                    target: moving,
                    vacated: Some(self.active),
                    tween: Tween::new(panels.offset(moving), ACTIVE_OFFSET, self.duration)
                        .easing(self.easing),
                }
            }
            Intent::Retreat => {
                if self.active == 0 {
                    self.log_drop(intent, "edge");
                    return RequestOutcome::DroppedAtEdge;
                }
                let target = self.active - 1;
                // The revealed panel snaps back under the current one
                // while it is still fully covered.
                panels.set_offset(target, ACTIVE_OFFSET);
                Flight {
                    moving: self.active,
                    target,
                    vacated: None,
                    tween: Tween::new(panels.offset(self.active), PARKED_OFFSET, self.duration)
                        .easing(self.easing),
                }
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            from = self.active,
            to = flight.target,
            "transition started"
        );

        self.flight = Some(flight);
        self.last_started = Some(now);
        RequestOutcome::Started
    }

    /// Advance the in-flight animation by `dt`, writing the moving panel's
    /// offset. Returns a [`Commit`] exactly once, when the animation
    /// completes.
    pub fn tick(&mut self, dt: Duration, panels: &mut PanelStack) -> Option<Commit> {
        let done = {
            let flight = self.flight.as_mut()?;
            flight.tween.tick(dt);
            panels.set_offset(flight.moving, flight.tween.position());
            flight.tween.is_complete()
        };
        if !done {
            return None;
        }

        let flight = self.flight.take()?;
        panels.set_offset(flight.moving, flight.tween.target());
        if let Some(vacated) = flight.vacated {
            panels.park(vacated);
        }
        self.active = flight.target;

        #[cfg(feature = "tracing")]
        tracing::debug!(index = flight.target, "transition committed");

        Some(Commit {
            index: flight.target,
        })
    }

    /// Kill any in-flight animation without committing.
    ///
    /// Panel offsets are left where the animation stopped; the caller is
    /// tearing the paginator down and will not render them again.
    pub fn abort(&mut self) {
        if self.flight.take().is_some() {
            #[cfg(feature = "tracing")]
            tracing::debug!("in-flight transition aborted");
        }
    }

    #[cfg(feature = "tracing")]
    fn log_drop(&self, intent: Intent, reason: &'static str) {
        tracing::trace!(?intent, reason, active = self.active, "intent dropped");
    }

    #[cfg(not(feature = "tracing"))]
    #[allow(clippy::unused_self)]
    fn log_drop(&self, _intent: Intent, _reason: &'static str) {}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
