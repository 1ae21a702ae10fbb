//! Built-in widget set.
//!
//! These widgets implement the component data model and serve as the
//! reference mapping from capability traits to concrete types. Tests build
//! fixture trees out of them; applications with their own widget types
//! implement [`Component`](crate::widget::Component) and the capability
//! traits the same way these do.
//!
//! Constructors return `Arc<Self>` so an instance can be attached to a tree
//! and kept as a typed handle for wiring callbacks at the same time.

mod check_box;
mod grid_view;
mod label;
mod line_edit;
mod list_view;
mod panel;
mod push_button;
mod tool_item;

pub use check_box::CheckBox;
pub use grid_view::{GridCell, GridView};
pub use label::Label;
pub use line_edit::LineEdit;
pub use list_view::{ListRow, ListView};
pub use panel::Panel;
pub use push_button::PushButton;
pub use tool_item::ToolItem;
