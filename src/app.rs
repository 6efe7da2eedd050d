//! Root application component with shared state and the theme side effect.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::background::Background;
use crate::components::cta::CallToAction;
use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::state::ui::UiState;
use crate::util::theme_marker;

/// Root application component.
///
/// Owns the two pieces of page state — the active [`Theme`] and the mobile
/// menu flag — and provides them via context so both the desktop nav and the
/// mobile panel mutate the same signals. The theme marker on `<html>` is
/// re-applied reactively whenever the selection changes, starting with the
/// value already seeded on the host document.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(theme_marker::read());
    let ui = RwSignal::new(UiState::default());

    provide_context(theme);
    provide_context(ui);

    Effect::new(move |_| {
        theme_marker::apply(theme.get());
    });

    view! {
        <Title text="Astel"/>

        <div class="page">
            <Background/>
            <Navbar/>
            <main>
                <Hero/>
                <Features/>
                <CallToAction/>
            </main>
            <Footer/>
        </div>
    }
}
