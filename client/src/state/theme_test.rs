use super::*;

// =============================================================
// Defaults and string forms
// =============================================================

#[test]
fn theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn theme_as_str_matches_stored_values() {
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Light.as_str(), "light");
}

#[test]
fn theme_display_matches_as_str() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.to_string(), "light");
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggled_switches_between_variants() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
}

#[test]
fn toggled_twice_is_identity() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn toggle_label_names_the_target_mode() {
    assert_eq!(Theme::Dark.toggle_label(), "Light");
    assert_eq!(Theme::Light.toggle_label(), "Dark");
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_accepts_known_values() {
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
}

#[test]
fn parse_ignores_case_and_whitespace() {
    assert_eq!(" Light\n".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("DARK".parse::<Theme>(), Ok(Theme::Dark));
}

#[test]
fn parse_rejects_unknown_values() {
    assert_eq!("blue".parse::<Theme>(), Err(ParseThemeError("blue".to_owned())));
    assert!("".parse::<Theme>().is_err());
}

#[test]
fn parse_round_trips_as_str() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
    }
}
