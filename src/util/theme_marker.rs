//! Theme marker application on the document root.
//!
//! The active theme is expressed as a single class on the `<html>` element
//! (`dark`, `light`, `cosmic`, or `aurora`). Stylesheet rules key off that
//! marker; components never branch on the theme themselves. Requires a
//! browser environment.

use crate::state::theme::Theme;

/// Replace the marker class on `<html>` with the given theme's marker.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                el.set_class_name(theme.marker());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Read the marker currently on the document root.
///
/// The host document seeds the marker (`index.html` ships `class="cosmic"`),
/// so this is how the controller picks up its initial value. Missing or
/// unknown markers fall back to the default theme.
pub fn read() -> Theme {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map_or_else(Theme::default, |el| Theme::from_marker(el.class_name().trim()))
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::default()
    }
}
