//! Search Box Component
//!
//! Filters the list server-side; keystrokes are debounced.

use leptos::prelude::*;
use leptos::logging::log;
use leptos_debounce::use_debouncer;

use crate::context::AppContext;

/// Quiet period before a search is sent
pub const SEARCH_DEBOUNCE_MS: u32 = 200;

#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let debouncer = use_debouncer(SEARCH_DEBOUNCE_MS);

    let on_input = move |ev: web_sys::Event| {
        ctx.set_query.set(event_target_value(&ev));
        // Each keystroke restarts the timer; requests already in flight are not cancelled
        debouncer.update_value(|d| {
            d.schedule(move || {
                log!("[SEARCH] q={:?}", ctx.query.get_untracked());
                ctx.reload();
            })
        });
    };

    view! {
        <div class="search-row">
            <input
                id="searchInput"
                type="search"
                placeholder="Search..."
                prop:value=move || ctx.query.get()
                on:input=on_input
            />
            <button id="refreshBtn" type="button" on:click=move |_| ctx.reload()>
                "Refresh"
            </button>
        </div>
    }
}
