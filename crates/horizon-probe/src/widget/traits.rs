//! Component and capability traits.
//!
//! The component tree under test is made of [`Component`] trait objects.
//! What a component can *do* is expressed through small capability traits
//! ([`Titled`], [`Pressable`], …) rather than an inheritance hierarchy:
//! each concrete widget implements the capabilities it supports and
//! advertises them through the `as_*` accessors on [`Component`].
//!
//! The locator only ever sees `&dyn Component`; the accessors are how it
//! checks structural conformance before a caller predicate runs.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::base::ComponentBase;
use super::control::ControlEvent;

/// Shared handle to a component in the tree.
///
/// Parents own their children as `ComponentRef`s; tests keep typed
/// `Arc<PushButton>` handles to the same instances for wiring callbacks.
pub type ComponentRef = Arc<dyn Component>;

/// A node in the component tree under test.
///
/// Every component exposes its [`ComponentBase`] (identity, enabled state,
/// accessibility label, children) and overrides the capability accessors for
/// the shapes it conforms to. The default for every accessor is `None`:
/// a plain container conforms to nothing beyond [`Accessible`].
pub trait Component: Send + Sync {
    /// The common state embedded in every component.
    fn base(&self) -> &ComponentBase;

    /// Upcast for concrete-type lookup (see `shape::OfType`).
    fn as_any(&self) -> &dyn Any;

    /// The component's children, in declaration order.
    fn children(&self) -> Vec<ComponentRef> {
        self.base().children()
    }

    /// This component as a titled element, if it has a displayed title.
    fn as_titled(&self) -> Option<&dyn Titled> {
        None
    }

    /// This component as a placeholdered element.
    fn as_placeholdered(&self) -> Option<&dyn Placeholdered> {
        None
    }

    /// This component as an editable text element.
    fn as_text_editable(&self) -> Option<&dyn TextEditable> {
        None
    }

    /// This component as an accessibility-labeled element.
    fn as_accessible(&self) -> Option<&dyn Accessible> {
        None
    }

    /// This component as a press target.
    fn as_pressable(&self) -> Option<&dyn Pressable> {
        None
    }

    /// This component as a selectable cell container.
    fn as_cell_container(&self) -> Option<&dyn CellContainer> {
        None
    }
}

impl fmt::Debug for dyn Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = self.base();
        write!(f, "{}{}", base.short_type_name(), base.id())
    }
}

/// Has a displayed title.
///
/// Title resolution tries the component's title sources in priority order
/// and returns the first non-empty one; components commonly carry several
/// sources of which only one is meaningfully populated. An empty resolved
/// title reads as "untitled" and yields `None`.
pub trait Titled {
    /// The resolved display title.
    fn title(&self) -> Option<String>;
}

/// Has placeholder text.
pub trait Placeholdered {
    /// The placeholder, or `None` if empty.
    fn placeholder(&self) -> Option<String>;
}

/// Has a mutable text value.
pub trait TextEditable {
    /// The current text value.
    fn text(&self) -> String;

    /// Replace the text value.
    ///
    /// This is direct state mutation, not simulated keystrokes: no control
    /// events are dispatched. The widget's change-notification signal still
    /// fires if the value actually changed.
    fn set_text(&self, text: &str);
}

/// Has an accessibility label.
pub trait Accessible {
    /// The accessibility label, if set.
    fn accessibility_label(&self) -> Option<String>;

    /// Set or clear the accessibility label.
    fn set_accessibility_label(&self, label: Option<String>);
}

/// Can receive a simulated activation.
///
/// The press is delivered straight to the callbacks registered on the
/// component; no input pipeline is involved. A disabled component ignores
/// the press entirely.
pub trait Pressable {
    /// Simulate a press for the given interaction kind.
    fn press(&self, event: ControlEvent);

    /// Simulate a press for the primary activation kind.
    fn click(&self) {
        self.press(ControlEvent::Clicked);
    }
}

/// Identifies a cell's location within a [`CellContainer`].
///
/// One shape serves both container flavors: `row` reads as the item index
/// for grid containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPosition {
    /// The section the cell belongs to.
    pub section: usize,
    /// The row (or item) index within the section.
    pub row: usize,
}

impl CellPosition {
    /// Create a new position.
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }

    /// The row index under its grid-flavored name.
    pub const fn item(self) -> usize {
        self.row
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(section {}, row {})", self.section, self.row)
    }
}

/// Owns child cells and a selection callback keyed by position.
///
/// Conformance means the container can enumerate its currently materialized
/// cells, map a cell back to its logical position, and deliver a selection
/// at a position to whatever callback the application registered.
pub trait CellContainer {
    /// The currently materialized cells, in attachment order.
    ///
    /// This is deliberately not the full logical cell count: cells that are
    /// not materialized do not exist as components and cannot be matched.
    fn visible_cells(&self) -> Vec<ComponentRef>;

    /// Map a materialized cell back to its logical position.
    ///
    /// Returns `None` when the cell is no longer associated with a position,
    /// e.g. it was handed back to a reuse pool.
    fn position_of(&self, cell: &dyn Component) -> Option<CellPosition>;

    /// Invoke the container's registered selection callback for `position`.
    fn select(&self, position: CellPosition);
}
