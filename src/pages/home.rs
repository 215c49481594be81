use decourcey_core::content::{service_previews, ServiceIcon, HERO_PHOTO, HOME_HIGHLIGHTS, INTRO_PHOTO};
use decourcey_core::Page;
use leptos::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::icons::{ArrowRight, CheckCircle, Hammer, House, Shield};
use crate::components::section_title::SectionTitle;
use crate::store::use_store;
use crate::theme;

fn service_icon(icon: ServiceIcon) -> AnyView {
    match icon {
        ServiceIcon::Home => view! { <House class="w-10 h-10" /> }.into_any(),
        ServiceIcon::Hammer => view! { <Hammer class="w-10 h-10" /> }.into_any(),
        ServiceIcon::Shield => view! { <Shield class="w-10 h-10" /> }.into_any(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_store();

    view! {
        <div class="animate-fade-in">
            // Hero Section
            <section class="relative h-[80vh] flex items-center justify-center overflow-hidden">
                <div class="absolute inset-0 z-0">
                    <img src=HERO_PHOTO.src alt=HERO_PHOTO.alt class="w-full h-full object-cover opacity-40" />
                    <div class="absolute inset-0 bg-gradient-to-t from-[#3c3a37] via-transparent to-transparent"></div>
                </div>

                <div class="relative z-10 text-center px-4 max-w-4xl mx-auto">
                    <h1 class="text-4xl md:text-6xl font-bold text-white mb-6 leading-tight">
                        "Quality Craftsmanship." <br />
                        "Honest Work." <br />
                        <span class="text-brand">"Local Expertise."</span>
                    </h1>
                    <p class="text-xl md:text-2xl text-gray-200 mb-8 font-light">
                        "Specializing in new home builds, renovations, and roofing services across Prince Edward Island."
                    </p>
                    <div class="flex flex-col md:flex-row gap-4 justify-center">
                        <Button to=Page::Contact>"Get a Free Estimate"</Button>
                        <Button variant=ButtonVariant::Outline to=Page::Projects>
                            "View Our Projects"
                        </Button>
                    </div>
                </div>
            </section>

            // Intro Section
            <section class=format!("py-20 px-4 {}", theme::BG)>
                <div class="max-w-6xl mx-auto grid md:grid-cols-2 gap-12 items-center">
                    <div>
                        <h3 class="text-brand font-bold tracking-widest mb-2">"FULL SERVICE CONTRACTOR"</h3>
                        <h2 class="text-3xl font-bold text-white mb-6">"Bringing Your Vision to Life"</h2>
                        <p class=format!("{} mb-6 leading-relaxed", theme::TEXT_MUTED)>
                            "At DeCourcey Construction Ltd., we handle everything from upgrading a kitchen and \
                             adding space for your growing family, to protecting your home with a durable new roof. \
                             We are dedicated to delivering reliable service, transparent communication, and \
                             results that stand the test of time."
                        </p>
                        <div class="space-y-3">
                            {HOME_HIGHLIGHTS.into_iter().map(|item| view! {
                                <div class="flex items-center gap-3">
                                    <CheckCircle class="text-brand w-5 h-5" />
                                    <span class="text-white font-medium">{item}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                    <div class="relative h-80 rounded-sm overflow-hidden shadow-2xl">
                        <img
                            src=INTRO_PHOTO.src
                            alt=INTRO_PHOTO.alt
                            class="w-full h-full object-cover hover:scale-105 transition-transform duration-700"
                        />
                    </div>
                </div>
            </section>

            // Quick Services Preview
            <section class=format!("py-20 px-4 {}", theme::BG_DARK)>
                <div class="max-w-7xl mx-auto">
                    <SectionTitle title="Our Core Services" />
                    <div class="grid md:grid-cols-3 gap-8">
                        {service_previews().into_iter().map(|service| view! {
                            <div class=format!(
                                "{} p-8 hover:-translate-y-2 transition-transform duration-300 border-b-4 border-brand",
                                theme::BG_LIGHT,
                            )>
                                <div class="text-brand mb-4">{service_icon(service.icon)}</div>
                                <h3 class="text-xl font-bold text-white mb-3">{service.title}</h3>
                                <p class=format!("{} mb-4", theme::TEXT_MUTED)>{service.desc}</p>
                                <button
                                    type="button"
                                    on:click=move |_| store.navigate(Page::Services)
                                    class="text-brand font-semibold flex items-center gap-2 hover:gap-3 transition-all"
                                >
                                    "Learn More" <ArrowRight class="w-4 h-4" />
                                </button>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>
        </div>
    }
}
