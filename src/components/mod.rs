//! Page components.
//!
//! Every section renders static content; only [`navbar`] reads or writes
//! state (the shared theme signal and the mobile menu flag).

pub mod background;
pub mod cta;
pub mod features;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod theme_switcher;
