use decourcey_core::content::testimonials;
use leptos::prelude::*;

use crate::components::section_title::SectionTitle;
use crate::theme;

#[component]
pub fn TestimonialsPage() -> impl IntoView {
    view! {
        <div class=theme::PAGE>
            <div class="max-w-5xl mx-auto">
                <SectionTitle
                    title="Client Testimonials"
                    subtitle="See what our neighbors across PEI are saying."
                />

                <div class="grid md:grid-cols-2 gap-8">
                    {testimonials().into_iter().map(|review| {
                        let initial = review.initial().to_string();
                        view! {
                            <div class=format!("{} p-8 rounded-sm relative", theme::BG_LIGHT)>
                                <div class="text-brand absolute top-4 left-4 text-6xl opacity-20 font-serif">
                                    "\u{201C}"
                                </div>
                                <p class="text-gray-200 text-lg italic mb-6 relative z-10">{review.quote}</p>
                                <div class="flex items-center gap-3">
                                    <div class="w-10 h-10 bg-brand rounded-full flex items-center justify-center text-white font-bold">
                                        {initial}
                                    </div>
                                    <div>
                                        <h4 class="font-bold text-white">{review.author}</h4>
                                        <span class="text-gray-400 text-sm">{review.location}</span>
                                    </div>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
