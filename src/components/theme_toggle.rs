//! Theme Toggle Component
//!
//! Switches between light and dark and persists the choice.

use leptos::prelude::*;
use leptos::logging::log;

use crate::models::Theme;
use crate::theme::{apply_theme, toggle_theme, ThemeStore};

#[component]
pub fn ThemeToggle<S>(
    store: S,
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
) -> impl IntoView
where
    S: ThemeStore + Copy + Send + Sync + 'static,
{
    let on_click = move |_| {
        let next = toggle_theme(&store, theme.get_untracked());
        apply_theme(next);
        log!("[THEME] {}", next.as_str());
        set_theme.set(next);
    };

    view! {
        <button
            id="themeBtn"
            type="button"
            class="theme-btn"
            title=move || format!("Theme: {}", theme.get().as_str())
            on:click=on_click
        >
            {move || if theme.get() == Theme::Light { "🌙" } else { "☀️" }}
        </button>
    }
}
