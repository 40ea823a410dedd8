//! Landing page with the click counter and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server rendering always produces the default (dark) page. Once hydrated,
//! a one-shot effect restores the persisted theme; the toggle handler applies
//! and persists every change.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::state::theme::Theme;
use crate::state::ui::UiState;
use crate::util::theme_sync;

const FOOTER_TEXT: &str = concat!("v", env!("CARGO_PKG_VERSION"), " • minimal");

/// Landing page: title, counter button, theme toggle.
#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Restore the persisted theme. Reads no signals, so it runs once on mount.
    Effect::new(move || {
        ui.update(|u| {
            theme_sync::restore_browser(u);
        });
    });

    let on_primary = move |_| ui.update(UiState::increment);

    let on_toggle = move |_| {
        ui.update(|u| {
            theme_sync::toggle_browser(u);
        });
    };

    let primary_text = move || primary_label(ui.with(|u| u.click_count));
    let toggle_text = move || toggle_label(ui.with(|u| u.theme));

    view! {
        <main class="page">
            <header class="page__header">
                <h1 class="page__title">"Aegis Cognitive Mesh"</h1>
                <span class="page__badge">"Day 7"</span>
            </header>

            <p class="page__subtitle">"Minimal UI baseline"</p>

            <div class="page__row">
                <button class="btn btn--primary" on:click=on_primary>
                    {primary_text}
                </button>

                <button class="btn btn--secondary" on:click=on_toggle aria-label="Toggle theme">
                    {toggle_text}
                </button>
            </div>

            <footer class="page__footer">
                <code>{FOOTER_TEXT}</code>
            </footer>
        </main>
    }
}

fn primary_label(count: u64) -> String {
    format!("Primary Action (clicked {count})")
}

fn toggle_label(theme: Theme) -> String {
    format!("Toggle {} Mode", theme.toggle_label())
}
