//! Toolbar-style action item.

use std::any::Any;
use std::sync::Arc;

use horizon_probe_core::{ObjectResult, Property};
use parking_lot::{Mutex, RwLock};

use crate::widget::base::ComponentBase;
use crate::widget::control::ControlEvent;
use crate::widget::traits::{Accessible, Component, ComponentRef, Pressable, Titled};

type ToolAction = Arc<dyn Fn(&dyn Component) + Send + Sync>;

/// A single-action item, as found on toolbars.
///
/// Unlike ledger-carrying controls, a tool item stores at most one action
/// closure. A simulated press resolves in a fixed fallback order:
///
/// 1. the direct action, if set (the event kind is not consulted: a tool
///    item has exactly one activation);
/// 2. otherwise, if the item wraps an embedded component, the press is
///    forwarded to that component's [`Pressable`];
/// 3. otherwise the press is a no-op.
///
/// A disabled item no-ops before any of the above.
pub struct ToolItem {
    base: ComponentBase,
    text: Property<String>,
    action: Mutex<Option<ToolAction>>,
    embedded: RwLock<Option<ComponentRef>>,
}

impl ToolItem {
    /// Create a new tool item with the given label text and no action.
    pub fn new(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            base: ComponentBase::new::<Self>(),
            text: Property::new(text.into()),
            action: Mutex::new(None),
            embedded: RwLock::new(None),
        })
    }

    /// The label text.
    pub fn text(&self) -> String {
        self.text.get()
    }

    /// Set the label text.
    pub fn set_text(&self, text: impl Into<String>) {
        self.text.set(text.into());
    }

    /// Set the direct action, replacing any previous one.
    pub fn set_action<F>(&self, action: F)
    where
        F: Fn(&dyn Component) + Send + Sync + 'static,
    {
        *self.action.lock() = Some(Arc::new(action));
    }

    /// Remove the direct action.
    pub fn clear_action(&self) {
        *self.action.lock() = None;
    }

    /// Whether a direct action is set.
    pub fn has_action(&self) -> bool {
        self.action.lock().is_some()
    }

    /// Embed a component, replacing any previous one.
    ///
    /// The embedded component becomes a child of the item, so it is part of
    /// the searchable tree; presses fall back to it when no direct action
    /// is set.
    pub fn set_widget(&self, widget: ComponentRef) -> ObjectResult<()> {
        self.base.add_child(widget.clone())?;
        if let Some(old) = self.embedded.write().replace(widget) {
            self.base.remove_child(old.base().id());
        }
        Ok(())
    }

    /// The embedded component, if any.
    pub fn widget(&self) -> Option<ComponentRef> {
        self.embedded.read().clone()
    }

    /// Enable or disable the item.
    pub fn set_enabled(&self, enabled: bool) {
        self.base.set_enabled(enabled);
    }
}

impl Component for ToolItem {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_titled(&self) -> Option<&dyn Titled> {
        Some(self)
    }

    fn as_pressable(&self) -> Option<&dyn Pressable> {
        Some(self)
    }

    fn as_accessible(&self) -> Option<&dyn Accessible> {
        Some(self)
    }
}

impl Titled for ToolItem {
    fn title(&self) -> Option<String> {
        Some(self.text.get()).filter(|text| !text.is_empty())
    }
}

impl Pressable for ToolItem {
    fn press(&self, event: ControlEvent) {
        if !self.base.is_enabled() {
            tracing::trace!(
                target: horizon_probe_core::logging::targets::DISPATCH,
                item = %self.base.id(),
                "tool item disabled, ignoring press"
            );
            return;
        }

        let action = self.action.lock().clone();
        if let Some(action) = action {
            action(self);
            return;
        }

        let embedded = self.embedded.read().clone();
        if let Some(embedded) = embedded {
            if let Some(pressable) = embedded.as_pressable() {
                pressable.press(event);
                return;
            }
        }

        tracing::trace!(
            target: horizon_probe_core::logging::targets::DISPATCH,
            item = %self.base.id(),
            "tool item has no action and no pressable widget"
        );
    }
}

impl Accessible for ToolItem {
    fn accessibility_label(&self) -> Option<String> {
        self.base.accessibility_label()
    }

    fn set_accessibility_label(&self, label: Option<String>) {
        self.base.set_accessibility_label(label);
    }
}
