#![forbid(unsafe_code)]

//! The paginator facade.
//!
//! [`Pager`] owns the whole controller: gesture recognition, transition
//! scheduling, panel positions, the mount window, and the throttled
//! section publisher. The host feeds it raw events and a per-frame tick;
//! the render layer reads frames and content back out.
//!
//! # Concurrency model
//!
//! Single-threaded and cooperative. `tick` never blocks; while a
//! transition animates, new intents are rejected by the scheduler until
//! the completing tick commits. At most one animation is ever in flight.
//!
//! # Teardown
//!
//! [`shutdown`](Pager::shutdown) (also run on drop) synchronously aborts
//! any in-flight animation, resets the recognizer, and drops pending
//! publishes. The alive flag it clears is consulted before any state
//! commit, so a stray `tick` after teardown can never fire callbacks or
//! mutate state.

use web_time::Instant;

use snapdeck_core::animation::{EasingFn, ease_out};
use snapdeck_core::event::Event;
use snapdeck_core::gesture::{GestureConfig, GestureRecognizer, Response};
use std::time::Duration;

use crate::panels::PanelStack;
use crate::publisher::{DEFAULT_THROTTLE, IndexPublisher};
use crate::scheduler::{DEFAULT_COOLDOWN, DEFAULT_TRANSITION_DURATION, TransitionScheduler};
use crate::window::MountWindow;

pub use crate::scheduler::Commit;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration surface for [`Pager`].
#[derive(Debug, Clone)]
pub struct PagerConfig {
    /// Labels for the navigation display, index-aligned with sections.
    pub section_names: Vec<String>,

    /// Label published for indices outside `section_names`.
    pub fallback_label: String,

    /// Sections kept mounted on either side of the active one
    /// (default: 1).
    pub mount_radius: usize,

    /// Minimum time between the start of two transitions
    /// (default: 1000ms).
    pub cooldown: Duration,

    /// Duration of one transition animation (default: 550ms).
    pub transition_duration: Duration,

    /// Easing curve for transitions (default: ease-out).
    pub easing: EasingFn,

    /// Spacing enforced on navigation notifications (default: 100ms).
    pub publish_throttle: Duration,

    /// Gesture recognition thresholds.
    pub gesture: GestureConfig,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            section_names: Vec::new(),
            fallback_label: String::new(),
            mount_radius: 1,
            cooldown: DEFAULT_COOLDOWN,
            transition_duration: DEFAULT_TRANSITION_DURATION,
            easing: ease_out,
            publish_throttle: DEFAULT_THROTTLE,
            gesture: GestureConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Render boundary
// ---------------------------------------------------------------------------

/// Per-section render state.
///
/// The animation layer translates this into
/// `transform: translateY(offset_percent%)` and `z-index: z_index`;
/// `mounted == false` means the section renders its placeholder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelFrame {
    /// Vertical offset in percent of viewport height.
    pub offset_percent: f32,

    /// Stacking order.
    pub z_index: u16,

    /// Whether the section's real content is mounted.
    pub mounted: bool,
}

// ---------------------------------------------------------------------------
// Pager
// ---------------------------------------------------------------------------

/// Full-viewport section paginator.
///
/// Generic over the opaque section content `S`, which is supplied at
/// construction and immutable for the pager's lifetime.
pub struct Pager<S> {
    sections: Vec<S>,
    panels: PanelStack,
    recognizer: GestureRecognizer,
    scheduler: TransitionScheduler,
    window: MountWindow,
    publisher: IndexPublisher,
    mounted: Vec<bool>,
    alive: bool,
}

impl<S> std::fmt::Debug for Pager<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("sections", &self.sections.len())
            .field("active", &self.scheduler.active())
            .field("phase", &self.scheduler.phase())
            .field("alive", &self.alive)
            .finish_non_exhaustive()
    }
}

impl<S> Pager<S> {
    /// Create a pager over `sections`.
    ///
    /// `on_section_change` receives the section label on every committed
    /// transition, throttled per the config.
    ///
    /// # Panics
    ///
    /// Panics if `sections` is empty; a paginator over zero sections is a
    /// caller bug, not a runtime condition.
    #[must_use]
    pub fn new(
        sections: Vec<S>,
        config: PagerConfig,
        on_section_change: impl FnMut(&str) + 'static,
    ) -> Self {
        assert!(!sections.is_empty(), "Pager requires at least one section");
        let len = sections.len();
        let window = MountWindow::new(config.mount_radius);
        let mounted = window.compute(0, len);
        Self {
            sections,
            panels: PanelStack::new(len),
            recognizer: GestureRecognizer::new(config.gesture),
            scheduler: TransitionScheduler::new(
                len,
                config.cooldown,
                config.transition_duration,
            )
            .easing(config.easing),
            window,
            publisher: IndexPublisher::new(config.section_names, on_section_change)
                .fallback(config.fallback_label)
                .throttle(config.publish_throttle),
            mounted,
            alive: true,
        }
    }

    /// Number of sections.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false; the constructor rejects empty section lists.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The committed active index.
    #[inline]
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.scheduler.active()
    }

    /// Whether a transition is currently animating.
    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.scheduler.is_locked()
    }

    /// Whether the pager has been shut down.
    #[inline]
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Feed one raw input event.
    ///
    /// Returns the host actions to take (default-action suppression,
    /// pointer capture). Recognized intents are routed into the scheduler;
    /// whatever the scheduler drops is gone, never queued.
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> Response {
        if !self.alive {
            return Response::NONE;
        }
        let recognition = self.recognizer.process(event, now);
        if let Some(intent) = recognition.intent {
            let _outcome = self.scheduler.request(intent, now, &mut self.panels);
        }
        recognition.response
    }

    /// Advance the animation clock by `dt`.
    ///
    /// The offset write-back each call is the high-frequency path; mount
    /// recomputation and publishing happen only on the tick that commits,
    /// so structural re-render work stays off the per-frame path.
    pub fn tick(&mut self, dt: Duration, now: Instant) -> Option<Commit> {
        if !self.alive {
            return None;
        }
        let commit = self.scheduler.tick(dt, &mut self.panels);
        if let Some(commit) = commit {
            self.window.recompute(commit.index, &mut self.mounted);
            self.publisher.publish(commit.index, now);
        }
        self.publisher.flush(now);
        commit
    }

    /// Render state for section `index`, or `None` out of range.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<PanelFrame> {
        if index >= self.sections.len() {
            return None;
        }
        Some(PanelFrame {
            offset_percent: self.panels.offset(index),
            z_index: self.panels.z_order(index),
            mounted: self.mounted[index],
        })
    }

    /// Iterate render state for every section in order.
    pub fn frames(&self) -> impl Iterator<Item = PanelFrame> + '_ {
        (0..self.sections.len()).filter_map(|i| self.frame(i))
    }

    /// The section's content, or `None` when the section is unmounted
    /// (render a placeholder of identical dimensions instead).
    #[must_use]
    pub fn content(&self, index: usize) -> Option<&S> {
        if *self.mounted.get(index)? {
            self.sections.get(index)
        } else {
            None
        }
    }

    /// Shut the pager down.
    ///
    /// Synchronously aborts any in-flight animation without committing,
    /// resets gesture state, and discards pending publishes. Subsequent
    /// `handle_event`/`tick` calls are no-ops. Idempotent; also run on
    /// drop.
    pub fn shutdown(&mut self) {
        if !self.alive {
            return;
        }
        self.alive = false;
        self.scheduler.abort();
        self.recognizer.reset();
        self.publisher.clear_pending();

        #[cfg(feature = "tracing")]
        tracing::debug!("pager shut down");
    }
}

impl<S> Drop for Pager<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
