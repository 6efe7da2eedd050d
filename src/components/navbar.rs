//! Top navigation bar with brand, links, theme switcher, and mobile menu.

use leptos::prelude::*;

use crate::components::theme_switcher::ThemeSwitcher;
use crate::content::NAV_LINKS;
use crate::state::ui::UiState;

/// Navigation bar for the page.
///
/// On wide viewports the links and theme switcher render inline; on narrow
/// viewports they collapse behind a toggle button into the mobile panel.
/// The panel duplicates the links and switcher but shares their state, and
/// stays open after a selection until toggled closed.
#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let menu_open = move || ui.get().menu_open;
    let on_toggle = move |_| {
        ui.update(UiState::toggle_menu);
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href="#" class="navbar__brand">
                    <span class="navbar__logo">"\u{2605}"</span>
                    <span class="navbar__name">"Astel"</span>
                </a>

                <div class="navbar__links">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=href class="navbar__link">
                                    {label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="navbar__controls">
                    <div class="navbar__switcher">
                        <ThemeSwitcher/>
                    </div>
                    <button
                        class="navbar__menu-toggle"
                        title=move || if menu_open() { "Close menu" } else { "Open menu" }
                        on:click=on_toggle
                    >
                        {move || if menu_open() { "\u{2715}" } else { "\u{2630}" }}
                    </button>
                </div>
            </div>

            <Show when=menu_open>
                <div class="mobile-menu">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=href class="mobile-menu__link">
                                    {label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <div class="mobile-menu__themes">
                        <span class="mobile-menu__themes-label">"Theme:"</span>
                        <ThemeSwitcher/>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
