//! Item Row Component
//!
//! Single list entry: checkbox, label, delete button.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::render::RowView;

#[component]
pub fn ItemRow(row: RowView) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let toggle_id = row.id.clone();
    let delete_id = row.id.clone();

    view! {
        <li class="item" data-id=row.id.to_string()>
            <div class="left">
                <input
                    type="checkbox"
                    prop:checked=row.checked
                    aria-label=row.checkbox_label
                    on:change=move |_| ctx.toggle(toggle_id.clone())
                />
                <span class=row.label_class>{row.title}</span>
            </div>
            <button
                class="delete-btn"
                aria-label=row.delete_label
                on:click=move |_| ctx.delete(delete_id.clone())
            >
                "🗑️"
            </button>
        </li>
    }
}
