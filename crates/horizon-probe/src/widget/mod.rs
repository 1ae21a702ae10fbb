//! Widget system for Horizon Probe.
//!
//! This module provides the component model the interaction simulator
//! operates on:
//!
//! - [`Component`] trait: the base trait for all tree nodes
//! - [`ComponentBase`]: common implementation for component functionality
//! - Capability traits ([`Titled`], [`Pressable`], [`TextEditable`], …)
//!   expressing what a component can do
//! - [`ControlBindings`]: the per-control callback registration ledger
//! - [`locator`]: pre-order tree search filtered by capability shape
//! - [`Simulate`]: the interaction surface test code calls
//! - [`widgets`]: the built-in widget set
//!
//! # Overview
//!
//! Components form a tree through parent-child ownership. Capability
//! membership is structural: each concrete widget overrides the `as_*`
//! accessors on [`Component`] for the capabilities it implements, and the
//! locator checks conformance through those accessors before a caller
//! predicate ever runs.
//!
//! Interactions are wired by application/test code through the same API the
//! widgets expose for real use ([`Control::on`], [`ToolItem::set_action`],
//! container selection signals) and delivered by the simulator through
//! [`Simulate`].
//!
//! # Creating a Custom Component
//!
//! 1. Define a struct with a [`ComponentBase`] field
//! 2. Implement [`Component`], overriding the capability accessors
//! 3. Implement the capability traits the component supports
//!
//! ```
//! use std::any::Any;
//! use std::sync::Arc;
//!
//! use horizon_probe::widget::{Component, ComponentBase, Titled};
//!
//! struct Badge {
//!     base: ComponentBase,
//!     caption: String,
//! }
//!
//! impl Badge {
//!     fn new(caption: impl Into<String>) -> Arc<Self> {
//!         Arc::new(Self {
//!             base: ComponentBase::new::<Self>(),
//!             caption: caption.into(),
//!         })
//!     }
//! }
//!
//! impl Component for Badge {
//!     fn base(&self) -> &ComponentBase { &self.base }
//!     fn as_any(&self) -> &dyn Any { self }
//!     fn as_titled(&self) -> Option<&dyn Titled> { Some(self) }
//! }
//!
//! impl Titled for Badge {
//!     fn title(&self) -> Option<String> {
//!         Some(self.caption.clone()).filter(|caption| !caption.is_empty())
//!     }
//! }
//!
//! let badge = Badge::new("Inbox");
//! assert_eq!(badge.title().as_deref(), Some("Inbox"));
//! ```
//!
//! [`ToolItem::set_action`]: widgets::ToolItem::set_action

pub mod base;
pub mod control;
pub mod debug;
pub mod locator;
pub mod simulate;
pub mod traits;
pub mod widgets;

pub use base::ComponentBase;
pub use control::{BindingId, Control, ControlBindings, ControlEvent, EventFilter};
pub use debug::ComponentTreeDebug;
pub use locator::{Shape, find_element, find_element_in, shape};
pub use simulate::Simulate;
pub use traits::{
    Accessible, CellContainer, CellPosition, Component, ComponentRef, Placeholdered, Pressable,
    TextEditable, Titled,
};
