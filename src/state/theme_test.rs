use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_theme_is_cosmic() {
    assert_eq!(Theme::default(), Theme::Cosmic);
}

#[test]
fn all_lists_four_distinct_themes() {
    for (i, a) in Theme::ALL.iter().enumerate() {
        for (j, b) in Theme::ALL.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

// =============================================================
// Marker strings
// =============================================================

#[test]
fn markers_are_lowercase_names() {
    assert_eq!(Theme::Dark.marker(), "dark");
    assert_eq!(Theme::Light.marker(), "light");
    assert_eq!(Theme::Cosmic.marker(), "cosmic");
    assert_eq!(Theme::Aurora.marker(), "aurora");
}

#[test]
fn from_marker_round_trips_every_theme() {
    for t in Theme::ALL {
        assert_eq!(Theme::from_marker(t.marker()), t);
    }
}

#[test]
fn from_marker_falls_back_to_default_for_unknown() {
    assert_eq!(Theme::from_marker("solarized"), Theme::Cosmic);
    assert_eq!(Theme::from_marker(""), Theme::Cosmic);
    assert_eq!(Theme::from_marker("DARK"), Theme::Cosmic);
}

// =============================================================
// Display metadata
// =============================================================

#[test]
fn display_names_match_variants() {
    assert_eq!(Theme::Dark.display_name(), "Dark");
    assert_eq!(Theme::Light.display_name(), "Light");
    assert_eq!(Theme::Cosmic.display_name(), "Cosmic");
    assert_eq!(Theme::Aurora.display_name(), "Aurora");
}

#[test]
fn every_theme_has_an_icon_glyph() {
    for t in Theme::ALL {
        assert!(!t.icon().is_empty());
    }
}
