#![forbid(unsafe_code)]

//! Throttled section-name notifications.
//!
//! The external navigation display re-renders on every notification, so
//! rapid successive commits are collapsed: publishes landing inside the
//! throttle window keep only the latest index, delivered once the window
//! elapses. Indices outside the name list fall back to a default label
//! rather than erroring.

use web_time::Instant;

use std::time::Duration;

/// Default spacing enforced between outward notifications.
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(100);

/// Forwards section labels to an external subscriber, throttled.
pub struct IndexPublisher {
    names: Vec<String>,
    fallback: String,
    throttle: Duration,
    last_sent: Option<Instant>,
    pending: Option<usize>,
    subscriber: Box<dyn FnMut(&str)>,
}

impl std::fmt::Debug for IndexPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexPublisher")
            .field("names", &self.names.len())
            .field("throttle", &self.throttle)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl IndexPublisher {
    /// Create a publisher over an index-aligned name list.
    #[must_use]
    pub fn new(names: Vec<String>, subscriber: impl FnMut(&str) + 'static) -> Self {
        Self {
            names,
            fallback: String::new(),
            throttle: DEFAULT_THROTTLE,
            last_sent: None,
            pending: None,
            subscriber: Box::new(subscriber),
        }
    }

    /// Set the label used for indices outside the name list (builder
    /// pattern).
    #[must_use]
    pub fn fallback(mut self, label: impl Into<String>) -> Self {
        self.fallback = label.into();
        self
    }

    /// Set the throttle window (builder pattern).
    #[must_use]
    pub fn throttle(mut self, window: Duration) -> Self {
        self.throttle = window;
        self
    }

    /// Publish the label for `index`.
    ///
    /// Delivers immediately when outside the throttle window; otherwise
    /// the index is held as pending (latest wins) until [`flush`] runs
    /// past the window.
    ///
    /// [`flush`]: IndexPublisher::flush
    pub fn publish(&mut self, index: usize, now: Instant) {
        if self.within_window(now) {
            self.pending = Some(index);
        } else {
            self.send(index, now);
        }
    }

    /// Deliver a pending value once the throttle window has elapsed.
    ///
    /// Call once per host tick; a no-op when nothing is pending or the
    /// window is still open.
    pub fn flush(&mut self, now: Instant) {
        if let Some(index) = self.pending
            && !self.within_window(now)
        {
            self.send(index, now);
        }
    }

    /// Whether a collapsed value is waiting for the window to elapse.
    #[inline]
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Discard any pending value without delivering it (teardown path).
    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    fn within_window(&self, now: Instant) -> bool {
        self.last_sent
            .is_some_and(|t| now.duration_since(t) < self.throttle)
    }

    fn send(&mut self, index: usize, now: Instant) {
        let label = self
            .names
            .get(index)
            .map_or(self.fallback.as_str(), String::as_str);
        (self.subscriber)(label);
        self.last_sent = Some(now);
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const MS_50: Duration = Duration::from_millis(50);
    const MS_150: Duration = Duration::from_millis(150);

    fn names() -> Vec<String> {
        ["Home", "Story", "Collection", "Contact"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn capture() -> (Rc<RefCell<Vec<String>>>, impl FnMut(&str)) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |label: &str| sink.borrow_mut().push(label.to_string()))
    }

    #[test]
    fn first_publish_is_immediate() {
        let (log, sink) = capture();
        let mut p = IndexPublisher::new(names(), sink);

        p.publish(0, Instant::now());
        assert_eq!(*log.borrow(), vec!["Home"]);
    }

    #[test]
    fn spaced_publishes_each_deliver() {
        let (log, sink) = capture();
        let mut p = IndexPublisher::new(names(), sink);
        let t = Instant::now();

        p.publish(0, t);
        p.publish(1, t + MS_150);
        p.publish(2, t + MS_150 + MS_150);
        assert_eq!(*log.borrow(), vec!["Home", "Story", "Collection"]);
    }

    #[test]
    fn rapid_publishes_collapse_to_latest() {
        let (log, sink) = capture();
        let mut p = IndexPublisher::new(names(), sink);
        let t = Instant::now();

        p.publish(0, t);
        p.publish(1, t + Duration::from_millis(20));
        p.publish(2, t + Duration::from_millis(40));
        assert_eq!(*log.borrow(), vec!["Home"]);
        assert!(p.has_pending());

        // Window elapses: only the latest value goes out.
        p.flush(t + MS_150);
        assert_eq!(*log.borrow(), vec!["Home", "Collection"]);
        assert!(!p.has_pending());
    }

    #[test]
    fn flush_inside_window_is_noop() {
        let (log, sink) = capture();
        let mut p = IndexPublisher::new(names(), sink);
        let t = Instant::now();

        p.publish(0, t);
        p.publish(1, t + Duration::from_millis(10));
        p.flush(t + MS_50);
        assert_eq!(*log.borrow(), vec!["Home"]);
        assert!(p.has_pending());
    }

    #[test]
    fn flush_without_pending_is_noop() {
        let (log, sink) = capture();
        let mut p = IndexPublisher::new(names(), sink);
        let t = Instant::now();

        p.publish(0, t);
        p.flush(t + MS_150);
        p.flush(t + MS_150 + MS_150);
        assert_eq!(*log.borrow(), vec!["Home"]);
    }

    #[test]
    fn out_of_bounds_index_uses_fallback() {
        let (log, sink) = capture();
        let mut p = IndexPublisher::new(names(), sink).fallback("…");

        p.publish(17, Instant::now());
        assert_eq!(*log.borrow(), vec!["…"]);
    }

    #[test]
    fn empty_name_list_uses_fallback() {
        let (log, sink) = capture();
        let mut p = IndexPublisher::new(Vec::new(), sink).fallback("section");

        p.publish(0, Instant::now());
        assert_eq!(*log.borrow(), vec!["section"]);
    }

    #[test]
    fn default_fallback_is_empty() {
        let (log, sink) = capture();
        let mut p = IndexPublisher::new(names(), sink);

        p.publish(99, Instant::now());
        assert_eq!(*log.borrow(), vec![""]);
    }

    #[test]
    fn clear_pending_discards_value() {
        let (log, sink) = capture();
        let mut p = IndexPublisher::new(names(), sink);
        let t = Instant::now();

        p.publish(0, t);
        p.publish(3, t + Duration::from_millis(10));
        p.clear_pending();
        p.flush(t + MS_150);
        assert_eq!(*log.borrow(), vec!["Home"]);
    }

    #[test]
    fn custom_throttle_window() {
        let (log, sink) = capture();
        let mut p = IndexPublisher::new(names(), sink).throttle(Duration::from_millis(500));
        let t = Instant::now();

        p.publish(0, t);
        p.publish(1, t + MS_150);
        assert_eq!(*log.borrow(), vec!["Home"]);
        p.flush(t + Duration::from_millis(600));
        assert_eq!(*log.borrow(), vec!["Home", "Story"]);
    }

    #[test]
    fn pending_keeps_latest_value() {
        let (log, sink) = capture();
        let mut p = IndexPublisher::new(names(), sink);
        let t = Instant::now();

        p.publish(0, t);
        for i in [1usize, 2, 3, 1, 2] {
            p.publish(i, t + Duration::from_millis(5));
        }
        p.flush(t + MS_150);
        assert_eq!(*log.borrow(), vec!["Home", "Collection"]);
    }
}
