//! Check box widget.

use std::any::Any;
use std::sync::Arc;

use horizon_probe_core::{Property, Signal};

use crate::widget::base::ComponentBase;
use crate::widget::control::{Control, ControlBindings, ControlEvent, press_via_bindings};
use crate::widget::traits::{Accessible, Component, Pressable, Titled};

/// A two-state toggle with a text label.
///
/// The checked state is plain component state: a simulated press dispatches
/// the registered bindings (typically for [`ControlEvent::Toggled`]) and
/// leaves the state to whatever those callbacks decide, the same way the
/// real input pipeline would go through the application's handler.
pub struct CheckBox {
    base: ComponentBase,
    bindings: ControlBindings,
    text: Property<String>,
    checked: Property<bool>,

    /// Signal emitted when the checked state changes.
    pub toggled: Signal<bool>,
}

impl CheckBox {
    /// Create a new unchecked check box with the given label text.
    pub fn new(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            base: ComponentBase::new::<Self>(),
            bindings: ControlBindings::new(),
            text: Property::new(text.into()),
            checked: Property::new(false),
            toggled: Signal::new(),
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

    /// Whether the box is checked.
    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }

    /// Set the checked state, emitting [`toggled`](Self::toggled) on change.
    pub fn set_checked(&self, checked: bool) {
        if self.checked.set(checked) {
            self.toggled.emit(checked);
        }
    }

    /// Enable or disable the check box.
    pub fn set_enabled(&self, enabled: bool) {
        self.base.set_enabled(enabled);
    }
}

impl Component for CheckBox {
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

impl Titled for CheckBox {
    fn title(&self) -> Option<String> {
        Some(self.text.get()).filter(|text| !text.is_empty())
    }
}

impl Control for CheckBox {
    fn bindings(&self) -> &ControlBindings {
        &self.bindings
    }
}

impl Pressable for CheckBox {
    fn press(&self, event: ControlEvent) {
        press_via_bindings(self, &self.bindings, event);
    }
}

impl Accessible for CheckBox {
    fn accessibility_label(&self) -> Option<String> {
        self.base.accessibility_label()
    }

    fn set_accessibility_label(&self, label: Option<String>) {
        self.base.set_accessibility_label(label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_toggled_signal_on_change() {
        let check = CheckBox::new("Fixture Title");
        let states = Arc::new(Mutex::new(Vec::new()));

        let states_clone = states.clone();
        check.toggled.connect(move |&checked| {
            states_clone.lock().push(checked);
        });

        check.set_checked(true);
        check.set_checked(true); // no change, no emit
        check.set_checked(false);
        assert_eq!(*states.lock(), vec![true, false]);
    }

    #[test]
    fn test_press_drives_application_toggle_handler() {
        let check = CheckBox::new("Fixture Title");

        // Application-style wiring: the Toggled handler flips the state.
        let handle = check.clone();
        check.on(ControlEvent::Toggled, move |_| {
            handle.set_checked(!handle.is_checked());
        });

        check.press(ControlEvent::Toggled);
        assert!(check.is_checked());
        check.press(ControlEvent::Toggled);
        assert!(!check.is_checked());

        // A Clicked press does not match the Toggled binding.
        check.press(ControlEvent::Clicked);
        assert!(!check.is_checked());
    }
}
