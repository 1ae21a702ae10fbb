//! Control events and the callback registration ledger.
//!
//! Application code wires interactions onto a control by registering
//! callbacks in the control's [`ControlBindings`] ledger, scoped to a
//! [`ControlEvent`] kind or registered kind-agnostically. The interaction
//! simulator reads the same ledger at dispatch time: a simulated press fires
//! every binding whose filter matches the requested kind, synchronously, in
//! registration order.
//!
//! Each control owns its ledger. There is no process-wide registration
//! table: what fires for a press is fully visible on the component instance.

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use super::traits::Component;

/// Semantic category of a simulated user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlEvent {
    /// Primary activation: the canonical "the user pressed this" event.
    #[default]
    Clicked,
    /// A two-state control was toggled.
    Toggled,
    /// The control's value changed.
    ValueChanged,
    /// Text editing ended.
    EditingFinished,
}

/// Which control events a binding responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFilter {
    /// Respond to every event kind. Used by closure-style registrations
    /// that are not scoped to a kind.
    Any,
    /// Respond to exactly one event kind.
    Only(ControlEvent),
}

impl EventFilter {
    /// Whether a dispatch for `event` should invoke a binding with this
    /// filter.
    pub fn matches(self, event: ControlEvent) -> bool {
        match self {
            Self::Any => true,
            Self::Only(bound) => bound == event,
        }
    }
}

new_key_type! {
    /// A unique identifier for a registered binding.
    ///
    /// Use this ID to remove a specific binding via
    /// [`ControlBindings::unbind`].
    pub struct BindingId;
}

type BoundSlot = Arc<dyn Fn(&dyn Component) + Send + Sync>;

struct Binding {
    filter: EventFilter,
    slot: BoundSlot,
}

/// Slot storage. The slot map provides stable binding keys; the order
/// vector preserves registration order, which is the order bindings fire in.
struct Entries {
    slots: SlotMap<BindingId, Binding>,
    order: Vec<BindingId>,
}

/// The per-control callback registration ledger.
///
/// A control may carry any number of bindings, for the same event kind or
/// for several. Binding lifecycle is owned by the application code that
/// registered them; the simulator only reads the ledger at dispatch time.
///
/// # Reentrancy
///
/// [`dispatch`](Self::dispatch) snapshots the matching slots before
/// invoking any of them, so a running slot may bind or unbind on the same
/// control without deadlocking.
pub struct ControlBindings {
    entries: Mutex<Entries>,
}

impl Default for ControlBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlBindings {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Entries {
                slots: SlotMap::with_key(),
                order: Vec::new(),
            }),
        }
    }

    /// Register a callback scoped to one event kind.
    pub fn bind<F>(&self, event: ControlEvent, slot: F) -> BindingId
    where
        F: Fn(&dyn Component) + Send + Sync + 'static,
    {
        self.insert(EventFilter::Only(event), Arc::new(slot))
    }

    /// Register a kind-agnostic callback that fires for every event kind.
    pub fn bind_any<F>(&self, slot: F) -> BindingId
    where
        F: Fn(&dyn Component) + Send + Sync + 'static,
    {
        self.insert(EventFilter::Any, Arc::new(slot))
    }

    fn insert(&self, filter: EventFilter, slot: BoundSlot) -> BindingId {
        let mut entries = self.entries.lock();
        let id = entries.slots.insert(Binding { filter, slot });
        entries.order.push(id);
        id
    }

    /// Remove a specific binding.
    ///
    /// Returns `true` if the binding existed and was removed.
    pub fn unbind(&self, id: BindingId) -> bool {
        let mut entries = self.entries.lock();
        if entries.slots.remove(id).is_some() {
            entries.order.retain(|&entry| entry != id);
            true
        } else {
            false
        }
    }

    /// Remove every binding.
    pub fn unbind_all(&self) {
        let mut entries = self.entries.lock();
        entries.slots.clear();
        entries.order.clear();
    }

    /// The number of registered bindings, across all event kinds.
    pub fn binding_count(&self) -> usize {
        self.entries.lock().order.len()
    }

    /// Invoke every binding matching `event`, in registration order,
    /// passing `sender` as the originating component.
    ///
    /// Returns the number of bindings invoked.
    pub fn dispatch(&self, event: ControlEvent, sender: &dyn Component) -> usize {
        let matching: Vec<BoundSlot> = {
            let entries = self.entries.lock();
            entries
                .order
                .iter()
                .filter_map(|&id| entries.slots.get(id))
                .filter(|binding| binding.filter.matches(event))
                .map(|binding| binding.slot.clone())
                .collect()
        };

        tracing::trace!(
            target: horizon_probe_core::logging::targets::DISPATCH,
            ?event,
            sender = %sender.base().id(),
            fired = matching.len(),
            "dispatching control event"
        );

        for slot in &matching {
            slot(sender);
        }
        matching.len()
    }
}

/// Interface of widgets that carry a [`ControlBindings`] ledger.
///
/// Provides the registration sugar application code uses to wire
/// interactions; the simulator goes through [`press_via_bindings`] instead.
pub trait Control: Component {
    /// The control's registration ledger.
    fn bindings(&self) -> &ControlBindings;

    /// Register a callback for one event kind.
    fn on<F>(&self, event: ControlEvent, slot: F) -> BindingId
    where
        F: Fn(&dyn Component) + Send + Sync + 'static,
    {
        self.bindings().bind(event, slot)
    }

    /// Register a kind-agnostic callback.
    fn on_any<F>(&self, slot: F) -> BindingId
    where
        F: Fn(&dyn Component) + Send + Sync + 'static,
    {
        self.bindings().bind_any(slot)
    }

    /// Remove a previously registered callback.
    fn unbind(&self, id: BindingId) -> bool {
        self.bindings().unbind(id)
    }
}

/// Shared press path for ledger-carrying controls.
///
/// A disabled control swallows the press: nothing fires, nothing is raised.
pub(crate) fn press_via_bindings(
    sender: &dyn Component,
    bindings: &ControlBindings,
    event: ControlEvent,
) {
    if !sender.base().is_enabled() {
        tracing::trace!(
            target: horizon_probe_core::logging::targets::DISPATCH,
            ?event,
            sender = %sender.base().id(),
            "target disabled, ignoring press"
        );
        return;
    }
    bindings.dispatch(event, sender);
}

static_assertions::assert_impl_all!(ControlBindings: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::widgets::PushButton;
    use std::sync::Arc;

    #[test]
    fn test_bindings_fire_in_registration_order() {
        let button = PushButton::new("Fixture Title");
        let order = Arc::new(Mutex::new(Vec::new()));

        for tag in 0..3 {
            let order_clone = order.clone();
            button.bindings().bind(ControlEvent::Clicked, move |_| {
                order_clone.lock().push(tag);
            });
        }

        let fired = button
            .bindings()
            .dispatch(ControlEvent::Clicked, button.as_ref());
        assert_eq!(fired, 3);
        assert_eq!(*order.lock(), vec![0, 1, 2]);
    }

    #[test]
    fn test_kind_scoping() {
        let button = PushButton::new("Fixture Title");
        let hits = Arc::new(Mutex::new(Vec::new()));

        let hits_clone = hits.clone();
        button.bindings().bind(ControlEvent::Clicked, move |_| {
            hits_clone.lock().push("clicked");
        });
        let hits_clone = hits.clone();
        button.bindings().bind(ControlEvent::ValueChanged, move |_| {
            hits_clone.lock().push("value");
        });
        let hits_clone = hits.clone();
        button.bindings().bind_any(move |_| {
            hits_clone.lock().push("any");
        });

        button
            .bindings()
            .dispatch(ControlEvent::Clicked, button.as_ref());
        assert_eq!(*hits.lock(), vec!["clicked", "any"]);
    }

    #[test]
    fn test_unbind() {
        let button = PushButton::new("Fixture Title");
        let hits = Arc::new(Mutex::new(0));

        let hits_clone = hits.clone();
        let id = button.bindings().bind(ControlEvent::Clicked, move |_| {
            *hits_clone.lock() += 1;
        });

        assert!(button.unbind(id));
        assert!(!button.unbind(id));
        button
            .bindings()
            .dispatch(ControlEvent::Clicked, button.as_ref());
        assert_eq!(*hits.lock(), 0);
    }

    #[test]
    fn test_sender_is_the_dispatching_component() {
        let button = PushButton::new("Fixture Title");
        let expected = button.base().id();
        let seen = Arc::new(Mutex::new(None));

        let seen_clone = seen.clone();
        button.bindings().bind(ControlEvent::Clicked, move |sender| {
            *seen_clone.lock() = Some(sender.base().id());
        });

        button
            .bindings()
            .dispatch(ControlEvent::Clicked, button.as_ref());
        assert_eq!(*seen.lock(), Some(expected));
    }

    #[test]
    fn test_event_filter_matches() {
        assert!(EventFilter::Any.matches(ControlEvent::Clicked));
        assert!(EventFilter::Any.matches(ControlEvent::Toggled));
        assert!(EventFilter::Only(ControlEvent::Clicked).matches(ControlEvent::Clicked));
        assert!(!EventFilter::Only(ControlEvent::Clicked).matches(ControlEvent::Toggled));
    }
}
