//! List Rendering
//!
//! Pure item-list rendering as a sequence of DOM edits.

use crate::models::{Item, ItemId};

/// One row of the item list
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: ItemId,
    pub title: String,
    pub checked: bool,
    /// "done" for completed items, empty otherwise
    pub label_class: &'static str,
    pub checkbox_label: String,
    pub delete_label: String,
}

impl RowView {
    fn from_item(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            checked: item.done,
            label_class: if item.done { "done" } else { "" },
            checkbox_label: format!("Mark {}", item.title),
            delete_label: format!("Delete {}", item.title),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DomEdit {
    ClearList,
    SetEmptyVisible(bool),
    AppendRow(RowView),
}

/// Replace the list with `items`, in order
pub fn render_list(items: &[Item]) -> Vec<DomEdit> {
    let mut edits = Vec::with_capacity(items.len() + 2);
    edits.push(DomEdit::ClearList);
    edits.push(DomEdit::SetEmptyVisible(items.is_empty()));
    edits.extend(items.iter().map(|item| DomEdit::AppendRow(RowView::from_item(item))));
    edits
}

/// What the list view currently shows
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListSnapshot {
    pub rows: Vec<RowView>,
    pub empty_visible: bool,
}

impl ListSnapshot {
    pub fn apply(&mut self, edits: &[DomEdit]) {
        for edit in edits {
            match edit {
                DomEdit::ClearList => self.rows.clear(),
                DomEdit::SetEmptyVisible(visible) => self.empty_visible = *visible,
                DomEdit::AppendRow(row) => self.rows.push(row.clone()),
            }
        }
    }
}
