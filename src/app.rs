//! Todo Sync Frontend App
//!
//! Wires the context, applies the persisted theme and loads the list once.

use leptos::logging::error;
use leptos::prelude::*;

use crate::api::FetchTransport;
use crate::components::{CreateForm, ItemList, SearchBox, ThemeToggle};
use crate::context::AppContext;
use crate::theme::{apply_theme, restore_theme, LocalStorageThemeStore};

#[component]
pub fn App() -> impl IntoView {
    let theme_store = LocalStorageThemeStore;
    let (theme, set_theme) = signal(restore_theme(&theme_store, apply_theme));

    let transport = FetchTransport::from_window().unwrap_or_else(|e| {
        error!("[APP] Cannot resolve API origin: {}", e);
        FetchTransport::new("")
    });
    let ctx = AppContext::new(transport);
    provide_context(ctx);

    // Initial load
    ctx.reload();

    view! {
        <main class="app">
            <header class="app-header">
                <h1>"To-do"</h1>
                <ThemeToggle store=theme_store theme=theme set_theme=set_theme />
            </header>

            <CreateForm />
            <p id="error" class="error" role="status">{move || ctx.error.get()}</p>

            <SearchBox />
            <ItemList />

            <footer>
                <small id="buildInfo">{format!("Build: leptos csr v{}", env!("CARGO_PKG_VERSION"))}</small>
            </footer>
        </main>
    }
}
