//! Browser-boundary helpers.

pub mod theme_marker;
