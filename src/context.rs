//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::FetchTransport;
use crate::models::ItemId;
use crate::render::{DomEdit, ListSnapshot};
use crate::sync::{SyncController, ViewSink};

/// Writes controller output into the view's signals
#[derive(Clone, Copy)]
pub struct SignalSink {
    set_list: WriteSignal<ListSnapshot>,
    set_error: WriteSignal<String>,
    set_title: WriteSignal<String>,
}

impl ViewSink for SignalSink {
    fn render(&self, edits: Vec<DomEdit>) {
        self.set_list.update(|list| list.apply(&edits));
    }

    fn show_error(&self, message: &str) {
        self.set_error.set(message.to_string());
    }

    fn clear_error(&self) {
        self.set_error.set(String::new());
    }

    fn clear_title(&self) {
        self.set_title.set(String::new());
    }
}

pub type AppController = SyncController<FetchTransport, SignalSink>;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<Rc<AppController>, LocalStorage>,
    /// Current search box text
    pub query: ReadSignal<String>,
    pub set_query: WriteSignal<String>,
    /// Create form input
    pub title: ReadSignal<String>,
    pub set_title: WriteSignal<String>,
    /// Status line text, empty when there is nothing to report
    pub error: ReadSignal<String>,
    /// Last successful render
    pub list: ReadSignal<ListSnapshot>,
}

impl AppContext {
    pub fn new(transport: FetchTransport) -> Self {
        let (query, set_query) = signal(String::new());
        let (title, set_title) = signal(String::new());
        let (error, set_error) = signal(String::new());
        let (list, set_list) = signal(ListSnapshot::default());

        let sink = SignalSink { set_list, set_error, set_title };
        let controller = Rc::new(SyncController::new(transport, sink));

        Self {
            controller: StoredValue::new_local(controller),
            query,
            set_query,
            title,
            set_title,
            error,
            list,
        }
    }

    fn controller(&self) -> Rc<AppController> {
        self.controller.get_value()
    }

    // Failures are already shown in the status line by the controller

    /// Re-fetch with the current search text
    pub fn reload(&self) {
        let ctrl = self.controller();
        let q = self.query.get_untracked();
        spawn_local(async move {
            let _ = ctrl.load_items(&q).await;
        });
    }

    pub fn create(&self, title: String) {
        let ctrl = self.controller();
        let q = self.query.get_untracked();
        spawn_local(async move {
            let _ = ctrl.create(&title, &q).await;
        });
    }

    pub fn toggle(&self, id: ItemId) {
        let ctrl = self.controller();
        let q = self.query.get_untracked();
        spawn_local(async move {
            let _ = ctrl.toggle(&id, &q).await;
        });
    }

    pub fn delete(&self, id: ItemId) {
        let ctrl = self.controller();
        let q = self.query.get_untracked();
        spawn_local(async move {
            let _ = ctrl.delete(&id, &q).await;
        });
    }
}
