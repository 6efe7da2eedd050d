#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Named color palettes the visitor can switch between.
///
/// Exactly one theme is active at a time. Switching replaces the marker
/// class on the document root (see [`crate::util::theme_marker`]); nothing
/// else about the page changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
    #[default]
    Cosmic,
    Aurora,
}

impl Theme {
    /// All selectable themes, in switcher display order.
    pub const ALL: [Theme; 4] = [Theme::Dark, Theme::Light, Theme::Cosmic, Theme::Aurora];

    /// Marker string written to the document root and matched by CSS rules.
    pub fn marker(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Cosmic => "cosmic",
            Theme::Aurora => "aurora",
        }
    }

    /// Human-readable name shown as the control tooltip.
    pub fn display_name(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Cosmic => "Cosmic",
            Theme::Aurora => "Aurora",
        }
    }

    /// Icon glyph rendered on the switcher control.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "\u{263e}",
            Theme::Light => "\u{2600}",
            Theme::Cosmic => "\u{2728}",
            Theme::Aurora => "\u{26a1}",
        }
    }

    /// Parse a marker string back into a theme.
    ///
    /// Anything outside the known set falls back to the default, so a
    /// hand-edited or stale root class can never leave the page themeless.
    pub fn from_marker(marker: &str) -> Theme {
        Theme::ALL
            .into_iter()
            .find(|t| t.marker() == marker)
            .unwrap_or_default()
    }
}
