use decourcey_core::content::{ABOUT_PHOTO, ABOUT_VALUES};
use decourcey_core::BUSINESS;
use leptos::prelude::*;

use crate::components::section_title::SectionTitle;
use crate::theme;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class=theme::PAGE>
            <div class="max-w-4xl mx-auto">
                <SectionTitle
                    title="About DeCourcey Construction"
                    subtitle="Built on Trust. Driven by Craftsmanship."
                />

                <div class="grid md:grid-cols-2 gap-12 mb-16">
                    <div class="space-y-6 text-gray-300 leading-relaxed">
                        <p>
                            "Founded in Charlottetown, DeCourcey Construction Ltd. has become a trusted name in \
                             residential construction and renovations across PEI. With years of hands-on experience \
                             and a customer-first approach, we take pride in completing every job \u{2014} big or small \
                             \u{2014} with precision and integrity."
                        </p>
                        <p>"Our team believes in:"</p>
                        <ul class="space-y-4 mt-4">
                            {ABOUT_VALUES.into_iter().map(|value| view! {
                                <li class="flex items-start gap-3 pl-4 border-l-2 border-brand">
                                    <span>{value}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                        <p class="font-semibold text-white pt-4">
                            "From concept to completion, you can count on us to deliver results you\u{2019}ll be proud of."
                        </p>
                    </div>

                    <div class="space-y-6">
                        <img
                            src=ABOUT_PHOTO.src
                            alt=ABOUT_PHOTO.alt
                            class="w-full h-64 object-cover rounded-sm shadow-lg"
                        />
                        <div class=format!("{} p-6 border border-gray-600", theme::BG_LIGHT)>
                            <h4 class="text-white font-bold mb-2">"Our Location"</h4>
                            <p class="text-gray-300">{BUSINESS.address()}</p>
                            <p class="text-brand mt-2 font-medium">{BUSINESS.service_area}</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
