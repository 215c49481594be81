use decourcey_core::BUSINESS;
use leptos::prelude::*;

/// Logo mark with the two-line company name
#[component]
pub fn Logo(
    src: &'static str,
    /// Classes for the name block (the navbar hides it on small screens)
    #[prop(optional)]
    name_class: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-brand p-1 rounded-sm">
            <img
                src=src
                alt=format!("{} logo", BUSINESS.name)
                class="w-10 h-10 object-contain"
            />
        </div>
        <div class=name_class>
            <span class="block text-white font-bold text-lg leading-none">
                {BUSINESS.short_name}
            </span>
            <span class="block text-gray-400 text-xs tracking-widest uppercase">
                {BUSINESS.suffix}
            </span>
        </div>
    }
}
