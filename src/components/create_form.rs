//! Create Form Component
//!
//! Form for adding a new item.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn CreateForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Blank titles go to the server, which answers with a validation detail
        ctx.create(ctx.title.get_untracked());
    };

    view! {
        <form id="createForm" class="create-form" on:submit=on_submit>
            <input
                id="titleInput"
                type="text"
                placeholder="New item..."
                autocomplete="off"
                prop:value=move || ctx.title.get()
                on:input=move |ev| ctx.set_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
