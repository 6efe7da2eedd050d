//! Call-to-action block above the footer.

use leptos::prelude::*;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta">
            <div class="cta__card">
                <h2 class="cta__title">
                    "Ready to Experience"
                    <br/>
                    <span class="cta__title-gradient">"The Future?"</span>
                </h2>
                <p class="cta__subtitle">
                    "Join thousands of users who have already discovered the power of modern design"
                </p>
                <button class="btn btn--primary btn--large">
                    <span>"Start Your Journey"</span>
                    <span>"\u{1f680}"</span>
                </button>
            </div>
        </section>
    }
}
