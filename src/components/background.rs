//! Fixed decorative background behind all sections.

use leptos::prelude::*;

/// Blurred gradient orbs. Purely presentational; colors come from the
/// active theme's palette variables.
#[component]
pub fn Background() -> impl IntoView {
    view! {
        <div class="background">
            <div class="background__orb background__orb--top"></div>
            <div class="background__orb background__orb--bottom"></div>
            <div class="background__orb background__orb--center"></div>
        </div>
    }
}
