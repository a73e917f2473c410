//! View-Sync Controller
//!
//! Every mutation is a round trip followed by a full list reload.
//! There are no retries, no optimistic updates and no sequencing between
//! overlapping reloads: whichever response lands last wins.

use leptos::logging::{error, log};

use crate::api::{ApiError, TodoApi, Transport};
use crate::models::ItemId;
use crate::render::{render_list, DomEdit};

/// Where the controller writes its results
pub trait ViewSink {
    fn render(&self, edits: Vec<DomEdit>);
    fn show_error(&self, message: &str);
    fn clear_error(&self);
    fn clear_title(&self);
}

pub struct SyncController<T, V> {
    api: TodoApi<T>,
    view: V,
}

impl<T: Transport, V: ViewSink> SyncController<T, V> {
    pub fn new(transport: T, view: V) -> Self {
        Self {
            api: TodoApi::new(transport),
            view,
        }
    }

    /// Fetch with the current search text and replace the rendered list.
    ///
    /// On failure the previous render stays on screen.
    pub async fn load_items(&self, query: &str) -> Result<(), ApiError> {
        let result = self.reload(query).await;
        self.surface("load", result)
    }

    pub async fn create(&self, title: &str, query: &str) -> Result<(), ApiError> {
        self.view.clear_error();
        let result = async {
            self.api.create_item(title).await?;
            self.view.clear_title();
            self.reload(query).await
        }
        .await;
        // Input keeps its text when the create fails
        self.surface("create", result)
    }

    pub async fn toggle(&self, id: &ItemId, query: &str) -> Result<(), ApiError> {
        let result = async {
            self.api.toggle_item(id).await?;
            self.reload(query).await
        }
        .await;
        self.surface("toggle", result)
    }

    pub async fn delete(&self, id: &ItemId, query: &str) -> Result<(), ApiError> {
        let result = async {
            self.api.delete_item(id).await?;
            self.reload(query).await
        }
        .await;
        self.surface("delete", result)
    }

    async fn reload(&self, query: &str) -> Result<(), ApiError> {
        self.view.clear_error();
        let items = self.api.list_items(query).await?;
        log!("[SYNC] Loaded {} items (q={:?})", items.len(), query.trim());
        self.view.render(render_list(&items));
        Ok(())
    }

    fn surface(&self, action: &str, result: Result<(), ApiError>) -> Result<(), ApiError> {
        if let Err(e) = &result {
            error!("[SYNC] {} failed: {}", action, e);
            self.view.show_error(&e.to_string());
        }
        result
    }
}
