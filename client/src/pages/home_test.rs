use super::*;

#[test]
fn primary_label_shows_click_count() {
    assert_eq!(primary_label(0), "Primary Action (clicked 0)");
    assert_eq!(primary_label(3), "Primary Action (clicked 3)");
}

#[test]
fn primary_label_tracks_increments() {
    let mut state = UiState::default();
    for n in 1..=5_u64 {
        state.increment();
        assert_eq!(primary_label(state.click_count), format!("Primary Action (clicked {n})"));
    }
}

#[test]
fn toggle_label_offers_the_other_mode() {
    assert_eq!(toggle_label(Theme::Dark), "Toggle Light Mode");
    assert_eq!(toggle_label(Theme::Light), "Toggle Dark Mode");
}

#[test]
fn footer_text_carries_crate_version() {
    assert!(FOOTER_TEXT.starts_with('v'));
    assert!(FOOTER_TEXT.ends_with("• minimal"));
    assert!(FOOTER_TEXT.contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================
// Server rendering
// =============================================================

#[cfg(feature = "ssr")]
fn render_with(state: UiState) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RwSignal::new(state));
        view! { <HomePage/> }.to_html()
    })
}

#[cfg(feature = "ssr")]
#[test]
fn ssr_renders_default_page() {
    let html = render_with(UiState::default());
    assert!(html.contains("Aegis Cognitive Mesh"));
    assert!(html.contains("Day 7"));
    assert!(html.contains("Minimal UI baseline"));
    assert!(html.contains("Primary Action (clicked 0)"));
    assert!(html.contains(r#"aria-label="Toggle theme""#));
    assert!(html.contains("Toggle Light Mode"));
    assert!(html.contains(FOOTER_TEXT));
}

#[cfg(feature = "ssr")]
#[test]
fn ssr_renders_provided_state() {
    let html = render_with(UiState { click_count: 3, theme: Theme::Light });
    assert!(html.contains("Primary Action (clicked 3)"));
    assert!(html.contains("Toggle Dark Mode"));
}
