//! Grid container and its cells.

use std::any::Any;
use std::sync::Arc;

use horizon_probe_core::{ObjectResult, Property, Signal};
use parking_lot::RwLock;

use crate::widget::base::ComponentBase;
use crate::widget::traits::{
    Accessible, CellContainer, CellPosition, Component, ComponentRef, Titled,
};

/// A cell inside a [`GridView`].
///
/// Grid cells have no built-in text element; they carry an explicit title
/// for selection matching.
pub struct GridCell {
    base: ComponentBase,
    title: Property<String>,
}

impl GridCell {
    /// Create a new cell with the given title.
    pub fn new(title: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            base: ComponentBase::new::<Self>(),
            title: Property::new(title.into()),
        })
    }

    /// Set the cell's title.
    pub fn set_title(&self, title: impl Into<String>) {
        self.title.set(title.into());
    }
}

impl Component for GridCell {
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

impl Titled for GridCell {
    fn title(&self) -> Option<String> {
        Some(self.title.get()).filter(|title| !title.is_empty())
    }
}

impl Accessible for GridCell {
    fn accessibility_label(&self) -> Option<String> {
        self.base.accessibility_label()
    }

    fn set_accessibility_label(&self, label: Option<String>) {
        self.base.set_accessibility_label(label);
    }
}

/// A sectioned grid of cells with a selection callback.
///
/// Structurally identical to [`ListView`](super::ListView) apart from the
/// cell type and the grid-flavored selection signal; the position's `row`
/// reads as the item index. The logical model and materialization are
/// tracked separately, see the list view documentation for the
/// consequences.
pub struct GridView {
    base: ComponentBase,
    sections: RwLock<Vec<Vec<Arc<GridCell>>>>,

    /// Signal emitted when an item is selected.
    pub item_selected: Signal<CellPosition>,
}

impl GridView {
    /// Create a new empty grid view.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            base: ComponentBase::new::<Self>(),
            sections: RwLock::new(Vec::new()),
            item_selected: Signal::new(),
        })
    }

    /// Append an item to the given section, creating intermediate sections
    /// as needed. The cell is attached as a child (materialized).
    pub fn add_item(&self, section: usize, cell: Arc<GridCell>) -> ObjectResult<()> {
        self.base.add_child(cell.clone())?;
        let mut sections = self.sections.write();
        if sections.len() <= section {
            sections.resize_with(section + 1, Vec::new);
        }
        sections[section].push(cell);
        Ok(())
    }

    /// The number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.read().len()
    }

    /// The number of items in a section.
    pub fn item_count(&self, section: usize) -> usize {
        self.sections.read().get(section).map_or(0, |cells| cells.len())
    }

    /// The item at a position, if any.
    pub fn item(&self, position: CellPosition) -> Option<Arc<GridCell>> {
        self.sections
            .read()
            .get(position.section)?
            .get(position.item())
            .cloned()
    }

    /// Remove an item from the model and detach it from the tree.
    pub fn remove_item(&self, position: CellPosition) -> Option<Arc<GridCell>> {
        let cell = {
            let mut sections = self.sections.write();
            let section = sections.get_mut(position.section)?;
            if position.item() >= section.len() {
                return None;
            }
            section.remove(position.item())
        };
        self.base.remove_child(cell.base().id());
        Some(cell)
    }

    /// Remove an item from the model but leave it attached; it stays
    /// visible with no resolvable position until reused.
    pub fn recycle_item(&self, position: CellPosition) -> Option<Arc<GridCell>> {
        let mut sections = self.sections.write();
        let section = sections.get_mut(position.section)?;
        if position.item() >= section.len() {
            return None;
        }
        Some(section.remove(position.item()))
    }
}

impl Component for GridView {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_cell_container(&self) -> Option<&dyn CellContainer> {
        Some(self)
    }

    fn as_accessible(&self) -> Option<&dyn Accessible> {
        Some(self)
    }
}

impl CellContainer for GridView {
    fn visible_cells(&self) -> Vec<ComponentRef> {
        self.base.children()
    }

    fn position_of(&self, cell: &dyn Component) -> Option<CellPosition> {
        let id = cell.base().id();
        let sections = self.sections.read();
        for (section, items) in sections.iter().enumerate() {
            for (item, candidate) in items.iter().enumerate() {
                if candidate.base().id() == id {
                    return Some(CellPosition::new(section, item));
                }
            }
        }
        None
    }

    fn select(&self, position: CellPosition) {
        tracing::trace!(
            target: horizon_probe_core::logging::targets::SELECTION,
            container = %self.base.id(),
            %position,
            "delivering item selection"
        );
        self.item_selected.emit(position);
    }
}

impl Accessible for GridView {
    fn accessibility_label(&self) -> Option<String> {
        self.base.accessibility_label()
    }

    fn set_accessibility_label(&self, label: Option<String>) {
        self.base.set_accessibility_label(label);
    }
}
