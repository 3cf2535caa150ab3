//! Property-based invariant tests for gesture recognition.
//!
//! These tests verify the one-intent-per-gesture contract:
//!
//! 1. A wheel burst (events inside the settle window) emits at most one
//!    intent, and its direction matches the first firing delta
//! 2. A single drag (start → moves → end) emits at most one intent
//! 3. A horizontally locked drag emits nothing
//! 4. Vertical wheel events always request default-action suppression
//! 5. Determinism: same event script yields the same intents

use proptest::prelude::*;
use snapdeck_core::event::{Event, TouchEvent, TouchId, TouchPhase, WheelEvent};
use snapdeck_core::gesture::{GestureConfig, GestureRecognizer, Intent, Response};
use std::time::Duration;
use web_time::Instant;

// ── Strategies ──────────────────────────────────────────────────────────

fn delta_strategy() -> impl Strategy<Value = f32> {
    (-200i32..=200).prop_map(|d| d as f32)
}

fn burst_strategy() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(delta_strategy(), 1..20)
}

fn drag_moves_strategy() -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec(((-150i32..=150), (-300i32..=300)), 1..20)
}

fn run_burst(deltas: &[f32]) -> Vec<Intent> {
    let mut gr = GestureRecognizer::new(GestureConfig::default());
    let base = Instant::now();
    let mut intents = Vec::new();

    for (i, &delta) in deltas.iter().enumerate() {
        // 30ms spacing keeps every event inside the settle window.
        let now = base + Duration::from_millis(i as u64 * 30);
        let rec = gr.process(&Event::Wheel(WheelEvent::vertical(delta)), now);
        assert!(
            rec.response.contains(Response::PREVENT_DEFAULT),
            "vertical wheel input always suppresses native scroll"
        );
        intents.extend(rec.intent);
    }
    intents
}

fn run_drag(moves: &[(i32, i32)]) -> Vec<Intent> {
    let mut gr = GestureRecognizer::new(GestureConfig::default());
    let t = Instant::now();
    let (start_x, start_y) = (500.0, 500.0);
    let mut intents = Vec::new();

    let start = TouchEvent::new(TouchPhase::Start, TouchId(0), start_x, start_y);
    gr.process(&Event::Touch(start), t);
    for &(dx, dy) in moves {
        let event = TouchEvent::new(
            TouchPhase::Move,
            TouchId(0),
            start_x + dx as f32,
            start_y + dy as f32,
        );
        intents.extend(gr.process(&Event::Touch(event), t).intent);
    }
    let end = TouchEvent::new(TouchPhase::End, TouchId(0), start_x, start_y);
    gr.process(&Event::Touch(end), t);
    intents
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn wheel_burst_emits_at_most_one_intent(deltas in burst_strategy()) {
        let intents = run_burst(&deltas);
        prop_assert!(intents.len() <= 1);
    }

    #[test]
    fn wheel_intent_matches_first_firing_delta(deltas in burst_strategy()) {
        let intents = run_burst(&deltas);
        let first_firing = deltas.iter().find(|d| d.abs() >= 0.5);
        match (first_firing, intents.first()) {
            (Some(delta), Some(intent)) => {
                let expected = if *delta > 0.0 { Intent::Advance } else { Intent::Retreat };
                prop_assert_eq!(*intent, expected);
            }
            (None, None) => {}
            (Some(_), None) => prop_assert!(false, "firing delta produced no intent"),
            (None, Some(_)) => prop_assert!(false, "intent without a firing delta"),
        }
    }

    #[test]
    fn single_drag_emits_at_most_one_intent(moves in drag_moves_strategy()) {
        let intents = run_drag(&moves);
        prop_assert!(intents.len() <= 1);
    }

    #[test]
    fn horizontal_lead_drag_emits_nothing(
        dx in 20i32..150,
        follow_dy in -300i32..300,
    ) {
        // First move is decisively horizontal, so the axis locks there.
        let intents = run_drag(&[(dx, dx / 4), (dx, follow_dy)]);
        prop_assert!(intents.is_empty());
    }

    #[test]
    fn drag_intent_matches_pull_direction(dy in -300i32..300) {
        let intents = run_drag(&[(0, dy)]);
        if dy.unsigned_abs() as f32 >= 48.0 {
            let expected = if dy < 0 { Intent::Advance } else { Intent::Retreat };
            prop_assert_eq!(intents, vec![expected]);
        } else {
            prop_assert!(intents.is_empty());
        }
    }

    #[test]
    fn gesture_recognition_is_deterministic(
        deltas in burst_strategy(),
        moves in drag_moves_strategy(),
    ) {
        prop_assert_eq!(run_burst(&deltas), run_burst(&deltas));
        prop_assert_eq!(run_drag(&moves), run_drag(&moves));
    }
}
