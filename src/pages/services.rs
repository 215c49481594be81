use decourcey_core::content::{featured_services, renovation_groups};
use decourcey_core::Page;
use leptos::prelude::*;

use crate::components::button::Button;
use crate::components::icons::House;
use crate::components::section_title::SectionTitle;
use crate::theme;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div class=theme::PAGE>
            <div class="max-w-6xl mx-auto">
                <SectionTitle
                    title="Our Services"
                    subtitle="Transform your home with renovations that add beauty, value, and functionality."
                />

                // Home Renovations Group
                <div class="mb-20">
                    <div class="flex items-center gap-4 mb-8">
                        <div class="p-3 bg-brand rounded-sm">
                            <House class="text-white w-6 h-6" />
                        </div>
                        <h2 class="text-3xl font-bold text-white">"Home Renovations"</h2>
                    </div>

                    <div class="grid md:grid-cols-3 gap-6">
                        {renovation_groups().into_iter().map(|group| view! {
                            <div class=format!("{} p-6 border border-gray-600", theme::BG_LIGHT)>
                                <h3 class="text-xl font-bold text-white mb-4 border-b border-gray-600 pb-2">
                                    {group.title}
                                </h3>
                                <p class="text-gray-300 mb-4 text-sm">{group.blurb}</p>
                                <ul class="space-y-2 text-gray-400 text-sm">
                                    {group.items.iter().map(|item| view! {
                                        <li>{format!("\u{2022} {item}")}</li>
                                    }).collect_view()}
                                </ul>
                            </div>
                        }).collect_view()}
                    </div>
                </div>

                // Other Services Grid
                <div class="grid md:grid-cols-3 gap-8">
                    {featured_services().into_iter().map(|service| view! {
                        <div class="relative group">
                            <div class="h-64 overflow-hidden rounded-sm mb-4">
                                <img
                                    src=service.image
                                    alt=service.image_alt
                                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                                />
                            </div>
                            <h3 class="text-2xl font-bold text-white mb-3">{service.title}</h3>
                            <p class="text-gray-300 mb-4">{service.blurb}</p>
                            <ul class="text-gray-400 space-y-1 mb-4 text-sm">
                                {service.items.iter().map(|item| view! {
                                    <li>{format!("\u{2022} {item}")}</li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>

                <div class="mt-16 flex justify-center">
                    <Button to=Page::Contact>"Request a Quote Today"</Button>
                </div>
            </div>
        </div>
    }
}
