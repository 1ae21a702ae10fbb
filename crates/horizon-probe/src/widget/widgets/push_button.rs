//! Push button widget.

use std::any::Any;
use std::sync::Arc;

use horizon_probe_core::Property;

use crate::widget::base::ComponentBase;
use crate::widget::control::{Control, ControlBindings, ControlEvent, press_via_bindings};
use crate::widget::traits::{Accessible, Component, Pressable, Titled};

/// A clickable button.
///
/// The button's displayed title resolves from two sources, in priority
/// order: an explicitly configured display title, then the plain label
/// text. The first non-empty one wins. Buttons commonly carry both with
/// only one meaningfully populated, so the ordering matters.
///
/// # Example
///
/// ```
/// use horizon_probe::widget::Control;
/// use horizon_probe::widget::widgets::PushButton;
///
/// let button = PushButton::new("Save");
/// button.on_any(|_| println!("pressed"));
/// ```
pub struct PushButton {
    base: ComponentBase,
    bindings: ControlBindings,

    /// The plain label text.
    text: Property<String>,

    /// An explicitly configured display title, overriding the label text.
    display_title: Property<Option<String>>,
}

impl PushButton {
    /// Create a new button with the given label text.
    pub fn new(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            base: ComponentBase::new::<Self>(),
            bindings: ControlBindings::new(),
            text: Property::new(text.into()),
            display_title: Property::new(None),
        })
    }

    /// The plain label text.
    pub fn text(&self) -> String {
        self.text.get()
    }

    /// Set the plain label text.
    pub fn set_text(&self, text: impl Into<String>) {
        self.text.set(text.into());
    }

    /// The explicitly configured display title, if any.
    pub fn display_title(&self) -> Option<String> {
        self.display_title.get()
    }

    /// Set or clear the configured display title.
    pub fn set_display_title(&self, title: Option<String>) {
        self.display_title.set(title);
    }

    /// Whether the button accepts presses.
    pub fn is_enabled(&self) -> bool {
        self.base.is_enabled()
    }

    /// Enable or disable the button.
    pub fn set_enabled(&self, enabled: bool) {
        self.base.set_enabled(enabled);
    }
}

impl Component for PushButton {
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

impl Titled for PushButton {
    fn title(&self) -> Option<String> {
        self.display_title
            .get()
            .filter(|title| !title.is_empty())
            .or_else(|| Some(self.text.get()).filter(|text| !text.is_empty()))
    }
}

impl Control for PushButton {
    fn bindings(&self) -> &ControlBindings {
        &self.bindings
    }
}

impl Pressable for PushButton {
    fn press(&self, event: ControlEvent) {
        press_via_bindings(self, &self.bindings, event);
    }
}

impl Accessible for PushButton {
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
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_title_prefers_configured_display_title() {
        let button = PushButton::new("Label Text");
        assert_eq!(button.title().as_deref(), Some("Label Text"));

        button.set_display_title(Some("Configured".into()));
        assert_eq!(button.title().as_deref(), Some("Configured"));

        // An empty configured title falls back to the label text.
        button.set_display_title(Some(String::new()));
        assert_eq!(button.title().as_deref(), Some("Label Text"));
    }

    #[test]
    fn test_untitled_when_both_sources_empty() {
        let button = PushButton::new("");
        assert_eq!(button.title(), None);
    }

    #[test]
    fn test_press_fires_matching_bindings() {
        let button = PushButton::new("Fixture Title");
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = count.clone();
        button.on(ControlEvent::Clicked, move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        let count_clone = count.clone();
        button.on(ControlEvent::ValueChanged, move |_| {
            count_clone.fetch_add(100, Ordering::SeqCst);
        });

        button.click();
        assert_eq!(count.load(Ordering::SeqCst), 1);

        button.press(ControlEvent::ValueChanged);
        assert_eq!(count.load(Ordering::SeqCst), 101);
    }

    #[test]
    fn test_disabled_button_swallows_press() {
        let button = PushButton::new("Fixture Title");
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = count.clone();
        button.on(ControlEvent::Clicked, move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        button.set_enabled(false);
        button.click();
        assert_eq!(count.load(Ordering::SeqCst), 0);

        button.set_enabled(true);
        button.click();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
