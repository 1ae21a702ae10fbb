//! Component base implementation.
//!
//! This module provides [`ComponentBase`], the common implementation details
//! for all components under test. It handles identity, enabled state, the
//! accessibility label, and child ownership.
//!
//! Widget implementations include this as a field and delegate common
//! operations to it:
//!
//! ```ignore
//! use horizon_probe::widget::{Component, ComponentBase};
//!
//! struct MyWidget {
//!     base: ComponentBase,
//! }
//!
//! impl Component for MyWidget {
//!     fn base(&self) -> &ComponentBase { &self.base }
//!     fn as_any(&self) -> &dyn std::any::Any { self }
//! }
//! ```

use std::fmt;

use horizon_probe_core::{ObjectBase, ObjectError, ObjectId, ObjectResult, Property, Signal};
use parking_lot::{Mutex, RwLock};

use super::traits::ComponentRef;

/// The common state embedded in every component.
///
/// This struct provides the functionality all components need:
/// - Unique identity and a debug name
/// - Enabled/disabled state with change notification
/// - An optional accessibility label
/// - Ordered child ownership (the tree is acyclic and rooted; depth is
///   unbounded)
///
/// All mutators take `&self`: components are shared as `Arc<dyn Component>`
/// and rely on interior mutability.
pub struct ComponentBase {
    /// The underlying object identity.
    object: ObjectBase,

    /// The parent's ID, if attached.
    parent: Mutex<Option<ObjectId>>,

    /// Owned children, in attachment order.
    children: RwLock<Vec<ComponentRef>>,

    /// Whether the component can receive simulated interactions.
    enabled: Property<bool>,

    /// The accessibility label, if any.
    accessibility_label: Property<Option<String>>,

    /// Signal emitted when the enabled state changes.
    pub enabled_changed: Signal<bool>,
}

impl ComponentBase {
    /// Create a new component base for the concrete type `T`.
    pub fn new<T: 'static>() -> Self {
        Self {
            object: ObjectBase::new::<T>(),
            parent: Mutex::new(None),
            children: RwLock::new(Vec::new()),
            enabled: Property::new(true),
            accessibility_label: Property::new(None),
            enabled_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// The component's unique object ID.
    #[inline]
    pub fn id(&self) -> ObjectId {
        self.object.id()
    }

    /// The component's debug name. Empty if never set.
    pub fn name(&self) -> String {
        self.object.name()
    }

    /// Set the component's debug name.
    pub fn set_name(&self, name: impl Into<String>) {
        self.object.set_name(name);
    }

    /// The concrete type name this base was created for.
    pub fn type_name(&self) -> &'static str {
        self.object.type_name()
    }

    /// The short type name, without module path.
    pub fn short_type_name(&self) -> &'static str {
        self.object.short_type_name()
    }

    // =========================================================================
    // Enabled State
    // =========================================================================

    /// Whether the component can receive simulated interactions.
    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Set the enabled state, emitting [`enabled_changed`](Self::enabled_changed)
    /// on change.
    pub fn set_enabled(&self, enabled: bool) {
        if self.enabled.set(enabled) {
            self.enabled_changed.emit(enabled);
        }
    }

    // =========================================================================
    // Accessibility
    // =========================================================================

    /// The accessibility label, if set.
    pub fn accessibility_label(&self) -> Option<String> {
        self.accessibility_label.get()
    }

    /// Set or clear the accessibility label.
    pub fn set_accessibility_label(&self, label: Option<String>) {
        self.accessibility_label.set(label);
    }

    // =========================================================================
    // Tree Structure
    // =========================================================================

    /// The parent's ID, if this component is attached.
    pub fn parent_id(&self) -> Option<ObjectId> {
        *self.parent.lock()
    }

    /// The children, in attachment order.
    pub fn children(&self) -> Vec<ComponentRef> {
        self.children.read().clone()
    }

    /// The number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.read().len()
    }

    /// Attach a child at the end of the child list.
    ///
    /// Fails with [`ObjectError::AlreadyParented`] if the child is attached
    /// elsewhere, and with [`ObjectError::CircularParentage`] if attaching
    /// would make a component its own ancestor.
    pub fn add_child(&self, child: ComponentRef) -> ObjectResult<()> {
        if child.base().id() == self.id() || subtree_contains(&child, self.id()) {
            return Err(ObjectError::CircularParentage);
        }

        {
            let mut parent = child.base().parent.lock();
            if parent.is_some() {
                return Err(ObjectError::AlreadyParented);
            }
            *parent = Some(self.id());
        }

        self.children.write().push(child);
        Ok(())
    }

    /// Detach and return the child with the given ID.
    pub fn remove_child(&self, id: ObjectId) -> Option<ComponentRef> {
        let mut children = self.children.write();
        let index = children.iter().position(|child| child.base().id() == id)?;
        let child = children.remove(index);
        *child.base().parent.lock() = None;
        Some(child)
    }
}

/// Whether `root` or any of its descendants has the given ID.
fn subtree_contains(root: &ComponentRef, id: ObjectId) -> bool {
    if root.base().id() == id {
        return true;
    }
    root.children()
        .iter()
        .any(|child| subtree_contains(child, id))
}

impl fmt::Debug for ComponentBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentBase")
            .field("id", &self.id())
            .field("type_name", &self.short_type_name())
            .field("name", &self.name())
            .field("enabled", &self.is_enabled())
            .field("child_count", &self.child_count())
            .finish()
    }
}

static_assertions::assert_impl_all!(ComponentBase: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::traits::Component;
    use crate::widget::widgets::Panel;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_enabled_change_notification() {
        let base = ComponentBase::new::<Panel>();
        let notified = Arc::new(AtomicBool::new(false));

        let notified_clone = notified.clone();
        base.enabled_changed.connect(move |&enabled| {
            assert!(!enabled);
            notified_clone.store(true, Ordering::SeqCst);
        });

        base.set_enabled(true); // no change, no emit
        assert!(!notified.load(Ordering::SeqCst));
        base.set_enabled(false);
        assert!(notified.load(Ordering::SeqCst));
    }

    #[test]
    fn test_add_and_remove_child() {
        let parent = Panel::new();
        let child = Panel::new();
        let child_id = child.base().id();

        parent.base().add_child(child.clone()).unwrap();
        assert_eq!(parent.base().child_count(), 1);
        assert_eq!(child.base().parent_id(), Some(parent.base().id()));

        let removed = parent.base().remove_child(child_id).unwrap();
        assert_eq!(removed.base().id(), child_id);
        assert_eq!(parent.base().child_count(), 0);
        assert_eq!(child.base().parent_id(), None);
    }

    #[test]
    fn test_double_attach_is_rejected() {
        let first = Panel::new();
        let second = Panel::new();
        let child = Panel::new();

        first.base().add_child(child.clone()).unwrap();
        assert_eq!(
            second.base().add_child(child.clone()),
            Err(ObjectError::AlreadyParented)
        );
    }

    #[test]
    fn test_cycles_are_rejected() {
        let root = Panel::new();
        let middle = Panel::new();
        let leaf = Panel::new();

        root.base().add_child(middle.clone()).unwrap();
        middle.base().add_child(leaf.clone()).unwrap();

        assert_eq!(
            leaf.base().add_child(root.clone()),
            Err(ObjectError::CircularParentage)
        );
        assert_eq!(
            root.base().add_child(root.clone()),
            Err(ObjectError::CircularParentage)
        );
    }
}
