#![forbid(unsafe_code)]

//! Full-viewport section paginator.
//!
//! # Role in snapdeck
//! `snapdeck-pager` turns the discrete paging intents produced by
//! `snapdeck-core` into animated transitions over a stack of full-viewport
//! panels, and decides which panels carry real content versus a cheap
//! placeholder.
//!
//! # Primary responsibilities
//! - **TransitionScheduler**: one-at-a-time transition state machine with
//!   cooldown gating.
//! - **PanelStack**: per-panel offset/z-order bookkeeping for the render
//!   layer.
//! - **MountWindow**: which panels are mounted around the active index.
//! - **IndexPublisher**: throttled section-name notifications for an
//!   external navigation display.
//! - **Pager**: the facade wiring all of the above to a host event loop.
//!
//! # How it fits in the system
//! The host feeds raw events into [`Pager::handle_event`] and calls
//! [`Pager::tick`] once per frame. The render layer reads
//! [`Pager::frame`]/[`Pager::content`] and translates offsets into
//! `translateY(..%)` transforms and z-indices; it never mutates pager
//! state.

pub mod pager;
pub mod panels;
pub mod publisher;
pub mod scheduler;
pub mod window;

pub use pager::{Commit, Pager, PagerConfig, PanelFrame};
pub use panels::PanelStack;
pub use publisher::IndexPublisher;
pub use scheduler::{Phase, RequestOutcome, TransitionScheduler};
pub use window::MountWindow;
