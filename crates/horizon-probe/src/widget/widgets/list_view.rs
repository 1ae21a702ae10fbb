//! Linear list container and its rows.

use std::any::Any;
use std::sync::Arc;

use horizon_probe_core::{ObjectResult, Property, Signal};
use parking_lot::RwLock;

use crate::widget::base::ComponentBase;
use crate::widget::traits::{
    Accessible, CellContainer, CellPosition, Component, ComponentRef, Titled,
};

/// A row inside a [`ListView`].
///
/// Rows conform to [`Titled`] through their text, which is what
/// title-based cell selection matches against.
pub struct ListRow {
    base: ComponentBase,
    text: Property<String>,
}

impl ListRow {
    /// Create a new row with the given text.
    pub fn new(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            base: ComponentBase::new::<Self>(),
            text: Property::new(text.into()),
        })
    }

    /// The row's text.
    pub fn text(&self) -> String {
        self.text.get()
    }

    /// Set the row's text.
    pub fn set_text(&self, text: impl Into<String>) {
        self.text.set(text.into());
    }
}

impl Component for ListRow {
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

impl Titled for ListRow {
    fn title(&self) -> Option<String> {
        Some(self.text.get()).filter(|text| !text.is_empty())
    }
}

impl Accessible for ListRow {
    fn accessibility_label(&self) -> Option<String> {
        self.base.accessibility_label()
    }

    fn set_accessibility_label(&self, label: Option<String>) {
        self.base.set_accessibility_label(label);
    }
}

/// A sectioned, linear list of rows with a selection callback.
///
/// The logical model (which row sits at which position) and materialization
/// (which rows exist as attached components) are tracked separately, the
/// way a recycling list does it: [`CellContainer::visible_cells`] returns
/// the attached children, while [`CellContainer::position_of`] consults the
/// model. A row that is attached but no longer in the model, e.g. one
/// handed back to the reuse pool via [`recycle_row`](Self::recycle_row),
/// has no resolvable position.
///
/// # Example
///
/// ```
/// use horizon_probe::widget::widgets::{ListRow, ListView};
///
/// let list = ListView::new();
/// for row in 0..5 {
///     list.add_row(0, ListRow::new(format!("Fixture Text {row}"))).unwrap();
/// }
/// list.row_selected.connect(|position| {
///     println!("selected {position}");
/// });
/// ```
pub struct ListView {
    base: ComponentBase,
    sections: RwLock<Vec<Vec<Arc<ListRow>>>>,

    /// Signal emitted when a row is selected. This is the selection
    /// callback cell selection dispatches to.
    pub row_selected: Signal<CellPosition>,
}

impl ListView {
    /// Create a new empty list view.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            base: ComponentBase::new::<Self>(),
            sections: RwLock::new(Vec::new()),
            row_selected: Signal::new(),
        })
    }

    /// Append a row to the given section, creating intermediate sections
    /// as needed. The row is attached as a child (materialized).
    pub fn add_row(&self, section: usize, row: Arc<ListRow>) -> ObjectResult<()> {
        self.base.add_child(row.clone())?;
        let mut sections = self.sections.write();
        if sections.len() <= section {
            sections.resize_with(section + 1, Vec::new);
        }
        sections[section].push(row);
        Ok(())
    }

    /// The number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.read().len()
    }

    /// The number of rows in a section.
    pub fn row_count(&self, section: usize) -> usize {
        self.sections.read().get(section).map_or(0, |cells| cells.len())
    }

    /// The row at a position, if any.
    pub fn row(&self, position: CellPosition) -> Option<Arc<ListRow>> {
        self.sections
            .read()
            .get(position.section)?
            .get(position.row)
            .cloned()
    }

    /// Remove a row from the model and detach it from the tree.
    pub fn remove_row(&self, position: CellPosition) -> Option<Arc<ListRow>> {
        let row = {
            let mut sections = self.sections.write();
            let section = sections.get_mut(position.section)?;
            if position.row >= section.len() {
                return None;
            }
            section.remove(position.row)
        };
        self.base.remove_child(row.base().id());
        Some(row)
    }

    /// Remove a row from the model but leave it attached, mirroring a cell
    /// handed back to the reuse pool that has not been reused yet. Such a
    /// row stays visible but has no resolvable position.
    pub fn recycle_row(&self, position: CellPosition) -> Option<Arc<ListRow>> {
        let mut sections = self.sections.write();
        let section = sections.get_mut(position.section)?;
        if position.row >= section.len() {
            return None;
        }
        Some(section.remove(position.row))
    }
}

impl Component for ListView {
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

impl CellContainer for ListView {
    fn visible_cells(&self) -> Vec<ComponentRef> {
        self.base.children()
    }

    fn position_of(&self, cell: &dyn Component) -> Option<CellPosition> {
        let id = cell.base().id();
        let sections = self.sections.read();
        for (section, rows) in sections.iter().enumerate() {
            for (row, candidate) in rows.iter().enumerate() {
                if candidate.base().id() == id {
                    return Some(CellPosition::new(section, row));
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
            "delivering row selection"
        );
        self.row_selected.emit(position);
    }
}

impl Accessible for ListView {
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

    fn fixture_list() -> Arc<ListView> {
        let list = ListView::new();
        for row in 0..5 {
            list.add_row(0, ListRow::new(format!("Fixture Text {row}")))
                .unwrap();
        }
        list
    }

    #[test]
    fn test_rows_are_materialized_in_order() {
        let list = fixture_list();
        assert_eq!(list.section_count(), 1);
        assert_eq!(list.row_count(0), 5);

        let cells = list.visible_cells();
        assert_eq!(cells.len(), 5);
        for (index, cell) in cells.iter().enumerate() {
            let position = list.position_of(cell.as_ref()).unwrap();
            assert_eq!(position, CellPosition::new(0, index));
        }
    }

    #[test]
    fn test_select_emits_position() {
        let list = fixture_list();
        let selected = Arc::new(Mutex::new(Vec::new()));

        let selected_clone = selected.clone();
        list.row_selected.connect(move |&position| {
            selected_clone.lock().push(position);
        });

        list.select(CellPosition::new(0, 3));
        assert_eq!(*selected.lock(), vec![CellPosition::new(0, 3)]);
    }

    #[test]
    fn test_recycled_row_has_no_position() {
        let list = fixture_list();
        let row = list.recycle_row(CellPosition::new(0, 2)).unwrap();

        // Still attached, so still visible.
        assert_eq!(list.visible_cells().len(), 5);
        // No longer in the model, so unresolvable.
        assert_eq!(list.position_of(row.as_ref()), None);
        // Later rows shifted up.
        assert_eq!(list.row_count(0), 4);
    }

    #[test]
    fn test_remove_row_detaches() {
        let list = fixture_list();
        let removed = list.remove_row(CellPosition::new(0, 0)).unwrap();
        assert_eq!(removed.text(), "Fixture Text 0");
        assert_eq!(list.visible_cells().len(), 4);
        assert_eq!(removed.base().parent_id(), None);
    }

    #[test]
    fn test_sections_are_independent() {
        let list = ListView::new();
        list.add_row(1, ListRow::new("Fixture Text")).unwrap();
        assert_eq!(list.section_count(), 2);
        assert_eq!(list.row_count(0), 0);
        assert_eq!(list.row_count(1), 1);

        let row = list.row(CellPosition::new(1, 0)).unwrap();
        assert_eq!(
            list.position_of(row.as_ref()),
            Some(CellPosition::new(1, 0))
        );
    }
}
