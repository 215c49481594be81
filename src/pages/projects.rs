use decourcey_core::content::projects;
use leptos::prelude::*;

use crate::components::section_title::SectionTitle;
use crate::theme;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <div class=theme::PAGE>
            <div class="max-w-6xl mx-auto">
                <SectionTitle
                    title="Recent Work"
                    subtitle="A sample of the types of projects we complete across PEI."
                />

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {projects().into_iter().map(|project| view! {
                        <div class="group cursor-pointer">
                            <div class="relative overflow-hidden h-72 rounded-sm mb-4">
                                <div class="absolute inset-0 bg-black/40 group-hover:bg-black/0 transition-colors duration-300 z-10"></div>
                                <img
                                    src=project.image
                                    alt=project.title
                                    class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                                />
                            </div>
                            <h3 class="text-xl font-bold text-white">{project.title}</h3>
                            <span class="text-brand text-sm font-medium tracking-wider uppercase">
                                {project.location}
                            </span>
                            <p class="text-gray-400 mt-1 text-sm">{project.desc}</p>
                        </div>
                    }).collect_view()}
                </div>

                <div class="mt-12 p-8 border border-dashed border-gray-600 rounded text-center">
                    <p class="text-gray-400">"More project photos coming soon as our portfolio grows."</p>
                </div>
            </div>
        </div>
    }
}
