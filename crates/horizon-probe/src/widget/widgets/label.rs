//! Static text widget.

use std::any::Any;
use std::sync::Arc;

use horizon_probe_core::Property;

use crate::widget::base::ComponentBase;
use crate::widget::traits::{Accessible, Component, Titled};

/// A non-interactive text display.
///
/// Labels conform to [`Titled`] through their text, which makes them
/// locatable, but they carry no bindings and cannot receive presses.
pub struct Label {
    base: ComponentBase,
    text: Property<String>,
}

impl Label {
    /// Create a new label with the given text.
    pub fn new(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            base: ComponentBase::new::<Self>(),
            text: Property::new(text.into()),
        })
    }

    /// The label's text.
    pub fn text(&self) -> String {
        self.text.get()
    }

    /// Set the label's text.
    pub fn set_text(&self, text: impl Into<String>) {
        self.text.set(text.into());
    }
}

impl Component for Label {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_titled(&self) -> Option<&dyn Titled> {
        Some(self)
    }

    fn as_accessible(&self) -> Option<&dyn Accessible> {
        Some(self)
    }
}

impl Titled for Label {
    fn title(&self) -> Option<String> {
        Some(self.text.get()).filter(|text| !text.is_empty())
    }
}

impl Accessible for Label {
    fn accessibility_label(&self) -> Option<String> {
        self.base.accessibility_label()
    }

    fn set_accessibility_label(&self, label: Option<String>) {
        self.base.set_accessibility_label(label);
    }
}
