//! Feature grid driven by the static descriptors in [`crate::content`].

use leptos::prelude::*;

use crate::content::{FEATURES, Feature};

/// One card in the feature grid.
#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="feature-card">
            <span class="feature-card__icon">{feature.icon}</span>
            <h3 class="feature-card__title">{feature.title}</h3>
            <p class="feature-card__description">{feature.description}</p>
        </div>
    }
}

/// Feature grid section. Content never varies with the theme.
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="features__header">
                <h2>"Powerful Features"</h2>
                <p>"Built with modern technologies and designed for the future"</p>
            </div>
            <div class="features__grid">
                {FEATURES
                    .into_iter()
                    .map(|feature| view! { <FeatureCard feature=feature/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
