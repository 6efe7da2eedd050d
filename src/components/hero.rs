//! Hero section with headline and primary calls to action.

use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__badge">
                <span class="hero__badge-icon">"\u{2728}"</span>
                <span>"Enhanced Experience"</span>
            </div>

            <h1 class="hero__title">
                <span class="hero__title-gradient">"Stellar Design"</span>
                <br/>
                <span>"Reimagined"</span>
            </h1>

            <p class="hero__subtitle">
                "Experience the next generation of web design with dynamic themes, \
                 beautiful animations, and premium aesthetics that adapt to your style."
            </p>

            <div class="hero__actions">
                <button class="btn btn--primary">
                    <span>"\u{1f680}"</span>
                    <span>"Get Started"</span>
                </button>
                <button class="btn btn--ghost">"Learn More"</button>
            </div>
        </section>
    }
}
