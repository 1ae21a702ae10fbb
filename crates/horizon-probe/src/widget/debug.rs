//! Debug visualization for component trees.
//!
//! [`ComponentTreeDebug`] renders an indented dump of a fixture tree,
//! useful when a locator query matches the wrong element or nothing at all:
//!
//! ```text
//! Panel#1
//!   PushButton#2 "save" title="Save"
//!   LineEdit#3 [disabled] label="Search field"
//! ```

use std::fmt::{self, Write as FmtWrite};

use super::traits::{Component, ComponentRef};

/// Formats a component tree for debug output.
pub struct ComponentTreeDebug {
    root: ComponentRef,
}

impl ComponentTreeDebug {
    /// Create a formatter rooted at `root`.
    pub fn new(root: ComponentRef) -> Self {
        Self { root }
    }

    /// Render the tree, one indented line per component.
    pub fn format_tree(&self) -> String {
        let mut out = String::new();
        format_node(&self.root, 0, &mut out);
        out
    }
}

fn format_node(component: &ComponentRef, depth: usize, out: &mut String) {
    let base = component.base();
    let _ = write!(
        out,
        "{:indent$}{}{}",
        "",
        base.short_type_name(),
        base.id(),
        indent = depth * 2
    );
    if !base.name().is_empty() {
        let _ = write!(out, " {:?}", base.name());
    }
    if !base.is_enabled() {
        out.push_str(" [disabled]");
    }
    if let Some(title) = component.as_titled().and_then(|titled| titled.title()) {
        let _ = write!(out, " title={title:?}");
    }
    if let Some(label) = base.accessibility_label() {
        let _ = write!(out, " label={label:?}");
    }
    out.push('\n');

    for child in component.children() {
        format_node(&child, depth + 1, out);
    }
}

impl fmt::Display for ComponentTreeDebug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_tree())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::widgets::{Panel, PushButton};

    #[test]
    fn test_tree_dump_shows_structure() {
        let root = Panel::new();
        let button = PushButton::new("Fixture Title");
        button.base().set_name("fixture-button");
        button.set_enabled(false);
        root.add_child(button).unwrap();

        let dump = ComponentTreeDebug::new(root).format_tree();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Panel#"));
        assert!(lines[1].starts_with("  PushButton#"));
        assert!(lines[1].contains("\"fixture-button\""));
        assert!(lines[1].contains("[disabled]"));
        assert!(lines[1].contains("title=\"Fixture Title\""));
    }
}
