//! Core systems for Horizon Probe.
//!
//! This crate provides the foundational components of the Horizon Probe
//! interaction simulation toolkit:
//!
//! - **Object Model**: Unique identity and naming for components under test
//! - **Signal/Slot System**: Type-safe, synchronous change notification
//! - **Property System**: Reactive state with change detection
//! - **Logging**: `tracing` targets for per-subsystem filtering
//!
//! Everything here is synchronous: there is no event loop, no queued
//! delivery, and no timers. Signals fire inline on the caller's thread, in
//! connection order.
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_probe_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//!
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use horizon_probe_core::{Property, Signal};
//!
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn increment(&self) {
//!         let new_value = self.value.get() + 1;
//!         if self.value.set(new_value) {
//!             self.value_changed.emit(new_value);
//!         }
//!     }
//! }
//! ```

pub mod logging;
pub mod object;
pub mod property;
pub mod signal;

pub use object::{ObjectBase, ObjectError, ObjectId, ObjectResult};
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
