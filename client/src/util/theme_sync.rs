//! Theme persistence and document attribute sync.
//!
//! Reads the preference from client storage under [`STORAGE_KEY`] and mirrors
//! the active theme onto the `<html>` element as a [`THEME_ATTRIBUTE`]
//! attribute so stylesheet rules keyed on it take effect. Commit writes both.
//! [`restore`] and [`toggle`] are the page's mount and click handlers.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior. Storage and DOM failures
//! are logged and swallowed; the in-memory theme stays authoritative for the
//! session, and SSR paths fall back to the default theme.

#[cfg(test)]
#[path = "theme_sync_test.rs"]
mod theme_sync_test;

use crate::state::theme::Theme;
use crate::state::ui::UiState;
use crate::util::preferences::{PreferenceError, PreferenceStore, browser_store};

/// Client storage key holding the theme preference.
pub const STORAGE_KEY: &str = "theme";

/// Attribute set on the document root element.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Target for the document-level theme attribute.
pub trait DocumentRoot {
    /// Set `name` to `value` on the root element.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError`] if the element rejects the attribute.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Root for contexts without a document. Attribute writes are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct Detached;

impl DocumentRoot for Detached {
    fn set_attribute(&self, _name: &str, _value: &str) -> Result<(), PreferenceError> {
        Ok(())
    }
}

/// `document.documentElement` binding.
#[cfg(feature = "hydrate")]
pub struct HtmlRoot {
    element: web_sys::Element,
}

#[cfg(feature = "hydrate")]
impl HtmlRoot {
    /// Resolve the `<html>` element, if a document is present.
    pub fn open() -> Option<Self> {
        let element = web_sys::window()?.document()?.document_element()?;
        Some(Self { element })
    }
}

#[cfg(feature = "hydrate")]
impl DocumentRoot for HtmlRoot {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), PreferenceError> {
        self.element
            .set_attribute(name, value)
            .map_err(|e| PreferenceError::from_js(&e))
    }
}

/// Read the theme preference from `store`.
///
/// Returns [`Theme::Dark`] when nothing is stored, the store fails, or the
/// stored value is not a known theme.
pub fn read_preference(store: &dyn PreferenceStore) -> Theme {
    match store.read(STORAGE_KEY) {
        Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|e| {
            log::warn!("ignoring stored theme preference: {e}");
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(PreferenceError::Unavailable) => Theme::default(),
        Err(e) => {
            log::warn!("theme preference read failed: {e}");
            Theme::default()
        }
    }
}

/// Set the theme attribute on the document root.
pub fn apply(root: &dyn DocumentRoot, theme: Theme) {
    if let Err(e) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
        log::warn!("failed to apply {THEME_ATTRIBUTE}={theme}: {e}");
    }
}

/// Apply `theme` to the document root and persist it to `store`.
///
/// The two halves are independent: a storage failure does not prevent the
/// attribute update.
pub fn commit(store: &dyn PreferenceStore, root: &dyn DocumentRoot, theme: Theme) {
    apply(root, theme);
    match store.write(STORAGE_KEY, theme.as_str()) {
        Ok(()) | Err(PreferenceError::Unavailable) => {}
        Err(e) => log::warn!("theme preference write failed: {e}"),
    }
}

/// The document root for the current build and environment.
pub fn browser_root() -> Box<dyn DocumentRoot> {
    #[cfg(feature = "hydrate")]
    {
        match HtmlRoot::open() {
            Some(root) => Box::new(root),
            None => Box::new(Detached),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Box::new(Detached)
    }
}

/// Restore the stored theme into `ui` and mirror it onto the document root.
///
/// Runs once when the page mounts. The counter is left untouched.
pub fn restore(ui: &mut UiState, store: &dyn PreferenceStore, root: &dyn DocumentRoot) -> Theme {
    let theme = read_preference(store);
    apply(root, theme);
    ui.theme = theme;
    theme
}

/// Flip the theme in `ui`, then apply and persist the new value.
pub fn toggle(ui: &mut UiState, store: &dyn PreferenceStore, root: &dyn DocumentRoot) -> Theme {
    let next = ui.toggle_theme();
    commit(store, root, next);
    next
}

/// [`restore`] against the live browser storage and document.
pub fn restore_browser(ui: &mut UiState) -> Theme {
    restore(ui, browser_store().as_ref(), browser_root().as_ref())
}

/// [`toggle`] against the live browser storage and document.
pub fn toggle_browser(ui: &mut UiState) -> Theme {
    toggle(ui, browser_store().as_ref(), browser_root().as_ref())
}
