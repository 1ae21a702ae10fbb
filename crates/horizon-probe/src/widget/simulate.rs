//! The interaction simulation surface.
//!
//! [`Simulate`] is the entry point test code uses against a fixture tree:
//! locate an element by a human-meaningful label and deliver the
//! interaction a user would have performed, through the same callbacks the
//! application wired. Every method degrades to a silent no-op when the
//! target cannot be resolved; tests assert on the *effect* of the
//! interaction (a captured flag, a recorded position), not on whether
//! location succeeded.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! use horizon_probe::widget::{Control, ControlEvent, Simulate};
//! use horizon_probe::widget::widgets::{Panel, PushButton};
//!
//! let root = Panel::new();
//! let button = PushButton::new("Save");
//! root.add_child(button.clone()).unwrap();
//!
//! let saved = Arc::new(AtomicBool::new(false));
//! let saved_clone = saved.clone();
//! button.on(ControlEvent::Clicked, move |_| {
//!     saved_clone.store(true, Ordering::SeqCst);
//! });
//!
//! root.click_by_title("Save");
//! assert!(saved.load(Ordering::SeqCst));
//! ```

use std::sync::Arc;

use horizon_probe_core::logging::targets;

use super::control::ControlEvent;
use super::locator::{self, Shape, shape};
use super::traits::{
    Accessible, CellContainer, Component, ComponentRef, Placeholdered, Pressable, TextEditable,
    Titled,
};
use super::widgets::{GridView, ListView};

/// Simulated user interactions against a component tree.
///
/// Implemented for any shared component handle; the receiver is the root
/// of the search. All methods are total: a miss (no match, disabled
/// target, stale cell) performs nothing and raises nothing.
pub trait Simulate {
    /// This handle as a shared tree root.
    fn as_component(&self) -> ComponentRef;

    /// Find the first element conforming to `S` and satisfying `predicate`,
    /// in pre-order. See [`locator::find_element`].
    fn find_element<S, P>(&self, predicate: P) -> Option<ComponentRef>
    where
        S: Shape,
        P: for<'a> Fn(S::View<'a>) -> bool,
    {
        locator::find_element::<S, P>(&self.as_component(), predicate)
    }

    /// Press the first pressable element with the given title, using the
    /// primary activation kind.
    fn click_by_title(&self, title: &str) {
        self.press_by_title(title, ControlEvent::Clicked);
    }

    /// Press the first pressable element with the given title, for a
    /// specific interaction kind.
    fn press_by_title(&self, title: &str, event: ControlEvent) {
        let root = self.as_component();
        let Some(target) = locator::find_element::<(shape::Titled, shape::Pressable), _>(
            &root,
            |(titled, _): (&dyn Titled, &dyn Pressable)| titled.title().as_deref() == Some(title),
        ) else {
            tracing::trace!(target: targets::DISPATCH, title, "no pressable element with title");
            return;
        };
        if let Some(pressable) = target.as_pressable() {
            pressable.press(event);
        }
    }

    /// Press the first pressable element with the given accessibility
    /// label, using the primary activation kind.
    fn click_by_accessibility_label(&self, label: &str) {
        self.press_by_accessibility_label(label, ControlEvent::Clicked);
    }

    /// Press the first pressable element with the given accessibility
    /// label, for a specific interaction kind.
    fn press_by_accessibility_label(&self, label: &str, event: ControlEvent) {
        let root = self.as_component();
        let Some(target) = locator::find_element::<(shape::Accessible, shape::Pressable), _>(
            &root,
            |(accessible, _): (&dyn Accessible, &dyn Pressable)| {
                accessible.accessibility_label().as_deref() == Some(label)
            },
        ) else {
            tracing::trace!(target: targets::DISPATCH, label, "no pressable element with label");
            return;
        };
        if let Some(pressable) = target.as_pressable() {
            pressable.press(event);
        }
    }

    /// Set the text of the first editable element with the given
    /// placeholder.
    fn enter_text_by_placeholder(&self, text: &str, placeholder: &str) {
        let root = self.as_component();
        let Some(target) = locator::find_element::<(shape::Placeholdered, shape::Editable), _>(
            &root,
            |(placeholdered, _): (&dyn Placeholdered, &dyn TextEditable)| {
                placeholdered.placeholder().as_deref() == Some(placeholder)
            },
        ) else {
            tracing::trace!(
                target: targets::DISPATCH,
                placeholder,
                "no editable element with placeholder"
            );
            return;
        };
        if let Some(editable) = target.as_text_editable() {
            editable.set_text(text);
        }
    }

    /// Set the text of the first editable element with the given
    /// accessibility label.
    fn enter_text_by_accessibility_label(&self, text: &str, label: &str) {
        let root = self.as_component();
        let Some(target) = locator::find_element::<(shape::Accessible, shape::Editable), _>(
            &root,
            |(accessible, _): (&dyn Accessible, &dyn TextEditable)| {
                accessible.accessibility_label().as_deref() == Some(label)
            },
        ) else {
            tracing::trace!(target: targets::DISPATCH, label, "no editable element with label");
            return;
        };
        if let Some(editable) = target.as_text_editable() {
            editable.set_text(text);
        }
    }

    /// Select the first visible list row with the given title, delivering
    /// the row's position to the list view's selection callback.
    fn select_list_row_by_title(&self, title: &str) {
        select_cell_by_title::<ListView>(&self.as_component(), title);
    }

    /// Select the first visible grid item with the given title, delivering
    /// the item's position to the grid view's selection callback.
    fn select_grid_item_by_title(&self, title: &str) {
        select_cell_by_title::<GridView>(&self.as_component(), title);
    }
}

impl Simulate for ComponentRef {
    fn as_component(&self) -> ComponentRef {
        self.clone()
    }
}

impl<T: Component + 'static> Simulate for Arc<T> {
    fn as_component(&self) -> ComponentRef {
        self.clone()
    }
}

/// Shared cell-selection path for both container flavors.
///
/// Each step is an early exit to a no-op: locate the container (first one
/// in traversal order), match a title among the currently materialized
/// cells only, resolve the cell's logical position, deliver the selection.
fn select_cell_by_title<C>(root: &ComponentRef, title: &str)
where
    C: Component + CellContainer + 'static,
{
    let Some(container) = locator::find_element::<shape::OfType<C>, _>(root, |_: &C| true) else {
        tracing::trace!(target: targets::SELECTION, title, "no container in tree");
        return;
    };
    let Some(view) = container.as_any().downcast_ref::<C>() else {
        return;
    };

    let cells = view.visible_cells();
    let Some(cell) = locator::find_element_in::<shape::Titled, _>(&cells, |titled: &dyn Titled| {
        titled.title().as_deref() == Some(title)
    }) else {
        tracing::trace!(target: targets::SELECTION, title, "no visible cell with title");
        return;
    };

    let Some(position) = view.position_of(cell.as_ref()) else {
        tracing::trace!(
            target: targets::SELECTION,
            title,
            cell = %cell.base().id(),
            "cell has no resolvable position"
        );
        return;
    };

    view.select(position);
}
