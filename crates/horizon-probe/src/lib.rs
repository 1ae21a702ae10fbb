//! Horizon Probe - headless interaction simulation for widget trees.
//!
//! Horizon Probe locates elements in a component tree under test by a
//! human-meaningful label (title, placeholder, accessibility label) and
//! simulates user interactions with them: presses go through the same
//! registered callbacks the application wired, text entry mutates the
//! element's value, and list/grid selection delivers a position to the
//! container's selection callback. No input pipeline, no rendering, no
//! waiting: everything runs synchronously on the calling thread.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! use horizon_probe::widget::widgets::{Panel, PushButton};
//! use horizon_probe::widget::{Control, ControlEvent, Simulate};
//!
//! // Fixture tree, built the way the application builds it.
//! let root = Panel::new();
//! let button = PushButton::new("Submit");
//! root.add_child(button.clone()).unwrap();
//!
//! // Application wiring.
//! let submitted = Arc::new(AtomicBool::new(false));
//! let submitted_clone = submitted.clone();
//! button.on(ControlEvent::Clicked, move |_| {
//!     submitted_clone.store(true, Ordering::SeqCst);
//! });
//!
//! // The test drives the UI by label and asserts on the effect.
//! root.click_by_title("Submit");
//! assert!(submitted.load(Ordering::SeqCst));
//! ```
//!
//! Misses are silent by design: clicking a title that matches nothing, a
//! disabled control, or a recycled cell performs no interaction and raises
//! no error. Enable the `tracing` targets in
//! [`horizon_probe_core::logging::targets`] to see them while debugging.

pub use horizon_probe_core::*;

pub mod widget;
