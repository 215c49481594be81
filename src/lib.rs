pub mod components;
pub mod pages;
pub mod store;
pub mod theme;

use components::footer::Footer;
use components::navbar::Navbar;
use decourcey_core::{Page, BUSINESS};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use pages::about::AboutPage;
use pages::contact::ContactPage;
use pages::home::HomePage;
use pages::projects::ProjectsPage;
use pages::services::ServicesPage;
use pages::testimonials::TestimonialsPage;
use store::provide_store;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let store = provide_store();

    view! {
        <Title text=move || BUSINESS.document_title(store.page().title()) />
        <div class=format!(
            "min-h-screen {} font-sans selection:bg-brand selection:text-white",
            theme::BG,
        )>
            <Navbar />
            <main class="pt-20">
                {move || store.shown_pages().into_iter().map(content_block).collect_view()}
            </main>
            <Footer />
        </div>
    }
}

/// Markup for one page's content block. Only pages in
/// `ViewState::shown_pages` are passed in; the rest are not rendered at all.
fn content_block(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::About => view! { <AboutPage /> }.into_any(),
        Page::Services => view! { <ServicesPage /> }.into_any(),
        Page::Projects => view! { <ProjectsPage /> }.into_any(),
        Page::Testimonials => view! { <TestimonialsPage /> }.into_any(),
        Page::Contact => view! { <ContactPage /> }.into_any(),
    }
}
