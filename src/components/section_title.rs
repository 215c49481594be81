use leptos::prelude::*;

use crate::theme;

#[component]
pub fn SectionTitle(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="mb-12">
            <h2 class="text-3xl md:text-4xl font-bold mb-4 text-white uppercase tracking-wider">
                {title}
            </h2>
            <div class="h-1 w-20 bg-brand mb-4"></div>
            {subtitle.map(|subtitle| view! {
                <p class=format!("text-lg {} max-w-2xl", theme::TEXT_MUTED)>{subtitle}</p>
            })}
        </div>
    }
}
