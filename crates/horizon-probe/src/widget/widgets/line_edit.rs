//! Single-line text input widget.

use std::any::Any;
use std::sync::Arc;

use horizon_probe_core::{Property, Signal};

use crate::widget::base::ComponentBase;
use crate::widget::control::{Control, ControlBindings, ControlEvent, press_via_bindings};
use crate::widget::traits::{Accessible, Component, Placeholdered, Pressable, TextEditable};

/// An editable text field with placeholder text.
///
/// Simulated text entry replaces the value directly through
/// [`TextEditable::set_text`]: it is state mutation, not keystroke
/// simulation, so no control events are dispatched. The
/// [`text_changed`](Self::text_changed) signal still fires when the value
/// actually changed.
pub struct LineEdit {
    base: ComponentBase,
    bindings: ControlBindings,
    text: Property<String>,
    placeholder: Property<String>,

    /// Signal emitted when the text value changes.
    pub text_changed: Signal<String>,
}

impl LineEdit {
    /// Create a new empty line edit.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            base: ComponentBase::new::<Self>(),
            bindings: ControlBindings::new(),
            text: Property::new(String::new()),
            placeholder: Property::new(String::new()),
            text_changed: Signal::new(),
        })
    }

    /// The current text value.
    pub fn text(&self) -> String {
        self.text.get()
    }

    /// Set the text value, emitting [`text_changed`](Self::text_changed) on
    /// change.
    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        if self.text.set(text.clone()) {
            self.text_changed.emit(text);
        }
    }

    /// The placeholder text.
    pub fn placeholder(&self) -> String {
        self.placeholder.get()
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&self, text: impl Into<String>) {
        self.placeholder.set(text.into());
    }

    /// Enable or disable the field.
    pub fn set_enabled(&self, enabled: bool) {
        self.base.set_enabled(enabled);
    }
}

impl Component for LineEdit {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_placeholdered(&self) -> Option<&dyn Placeholdered> {
        Some(self)
    }

    fn as_text_editable(&self) -> Option<&dyn TextEditable> {
        Some(self)
    }

    fn as_pressable(&self) -> Option<&dyn Pressable> {
        Some(self)
    }

    fn as_accessible(&self) -> Option<&dyn Accessible> {
        Some(self)
    }
}

impl Placeholdered for LineEdit {
    fn placeholder(&self) -> Option<String> {
        Some(self.placeholder.get()).filter(|text| !text.is_empty())
    }
}

impl TextEditable for LineEdit {
    fn text(&self) -> String {
        self.text.get()
    }

    fn set_text(&self, text: &str) {
        LineEdit::set_text(self, text);
    }
}

impl Control for LineEdit {
    fn bindings(&self) -> &ControlBindings {
        &self.bindings
    }
}

impl Pressable for LineEdit {
    fn press(&self, event: ControlEvent) {
        press_via_bindings(self, &self.bindings, event);
    }
}

impl Accessible for LineEdit {
    fn accessibility_label(&self) -> Option<String> {
        self.base.accessibility_label()
    }

    fn set_accessibility_label(&self, label: Option<String>) {
        self.base.set_accessibility_label(label);
    }
}
