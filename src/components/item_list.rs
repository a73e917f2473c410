//! Item List Component
//!
//! Renders the last fetched snapshot, or the empty state.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::context::AppContext;

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <ul id="itemsList" class="items">
            {move || {
                ctx.list
                    .get()
                    .rows
                    .into_iter()
                    .map(|row| view! { <ItemRow row=row /> })
                    .collect_view()
            }}
        </ul>
        <p
            id="empty"
            class="empty"
            style:display=move || if ctx.list.get().empty_visible { "block" } else { "none" }
        >
            "Nothing here yet."
        </p>
    }
}
