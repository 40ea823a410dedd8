use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert_eq!(store.read("theme"), Ok(None));
}

#[test]
fn memory_store_write_then_read() {
    let store = MemoryStore::new();
    store.write("theme", "light").unwrap();
    assert_eq!(store.read("theme"), Ok(Some("light".to_owned())));
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn memory_store_write_replaces_previous_value() {
    let store = MemoryStore::with_entry("theme", "dark");
    store.write("theme", "light").unwrap();
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn memory_store_keys_are_independent() {
    let store = MemoryStore::with_entry("theme", "dark");
    assert_eq!(store.read("other"), Ok(None));
}

// =============================================================
// Unavailable
// =============================================================

#[test]
fn unavailable_read_fails() {
    assert_eq!(Unavailable.read("theme"), Err(PreferenceError::Unavailable));
}

#[test]
fn unavailable_write_fails() {
    assert_eq!(Unavailable.write("theme", "dark"), Err(PreferenceError::Unavailable));
}

#[test]
fn preference_error_messages() {
    assert_eq!(PreferenceError::Unavailable.to_string(), "client storage unavailable");
    assert_eq!(
        PreferenceError::Access("QuotaExceededError".to_owned()).to_string(),
        "client storage access failed: QuotaExceededError"
    );
}

// =============================================================
// browser_store outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_unavailable_without_hydrate() {
    let store = browser_store();
    assert_eq!(store.read("theme"), Err(PreferenceError::Unavailable));
}
