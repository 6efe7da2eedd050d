//! Theme switcher rendered in both the desktop nav and the mobile menu.

use leptos::prelude::*;

use crate::state::theme::Theme;

/// Row of one control per theme, highlighting the active selection.
///
/// The desktop nav and the mobile menu each render one of these. Both read
/// and write the same shared signal, so the two control sets always agree;
/// selecting the already-active theme re-applies the same marker with no
/// visible change.
#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    view! {
        <div class="theme-switcher">
            {Theme::ALL
                .into_iter()
                .map(|t| {
                    let select = move |_| theme.set(t);
                    view! {
                        <button
                            class="theme-switcher__option"
                            class:theme-switcher__option--active=move || theme.get() == t
                            on:click=select
                            title=t.display_name()
                        >
                            {t.icon()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
