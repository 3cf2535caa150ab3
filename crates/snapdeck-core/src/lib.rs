#![forbid(unsafe_code)]

//! Core: viewport input normalization and animation primitives.
//!
//! # Role in snapdeck
//! `snapdeck-core` is the input layer. It owns the canonical event types for
//! a full-viewport gesture surface and the recognizer that condenses raw
//! wheel/touch/pointer streams into discrete paging intents.
//!
//! # Primary responsibilities
//! - **Event**: canonical input events (wheel, touch, pointer, focus).
//! - **GestureRecognizer**: at most one [`Intent`](gesture::Intent) per
//!   physical gesture, with axis locking and default-action suppression.
//! - **Animation**: the [`Animation`](animation::Animation) trait, easing
//!   functions, and the [`Tween`](animation::Tween) interpolator.
//!
//! # How it fits in the system
//! The pager (`snapdeck-pager`) consumes `snapdeck_core` intents and drives
//! panel offsets with `Tween`s. Rendering is independent of input, so this
//! crate is the clean bridge between host events and the paging state
//! machine.

pub mod animation;
pub mod event;
pub mod gesture;
