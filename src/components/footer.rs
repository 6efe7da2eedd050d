//! Page footer with brand mark and secondary links.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="contact" class="footer">
            <div class="footer__brand">
                <span class="footer__logo">"\u{2605}"</span>
                <span class="footer__name">"Astel"</span>
            </div>
            <p class="footer__tagline">"Enhanced with love using modern web technologies"</p>
            <div class="footer__links">
                <a href="#">"Privacy"</a>
                <a href="#">"Terms"</a>
                <a href="#">"Support"</a>
            </div>
        </footer>
    }
}
