//! Plain container widget.

use std::any::Any;
use std::sync::Arc;

use horizon_probe_core::{ObjectId, ObjectResult};

use crate::widget::base::ComponentBase;
use crate::widget::traits::{Accessible, Component, ComponentRef};

/// A container with no behavior of its own.
///
/// Panels group children and give fixture trees their structure. They
/// conform to no capability beyond [`Accessible`], so locator queries pass
/// through them without matching.
pub struct Panel {
    base: ComponentBase,
}

impl Panel {
    /// Create a new empty panel.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            base: ComponentBase::new::<Self>(),
        })
    }

    /// Attach a child at the end of the child list.
    pub fn add_child(&self, child: ComponentRef) -> ObjectResult<()> {
        self.base.add_child(child)
    }

    /// Detach and return the child with the given ID.
    pub fn remove_child(&self, id: ObjectId) -> Option<ComponentRef> {
        self.base.remove_child(id)
    }
}

impl Component for Panel {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_accessible(&self) -> Option<&dyn Accessible> {
        Some(self)
    }
}

impl Accessible for Panel {
    fn accessibility_label(&self) -> Option<String> {
        self.base.accessibility_label()
    }

    fn set_accessibility_label(&self, label: Option<String>) {
        self.base.set_accessibility_label(label);
    }
}
