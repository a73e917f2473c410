//! UI Components
//!
//! Reusable Leptos components.

mod create_form;
mod item_list;
mod item_row;
mod search_box;
mod theme_toggle;

pub use create_form::CreateForm;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use search_box::SearchBox;
pub use theme_toggle::ThemeToggle;
