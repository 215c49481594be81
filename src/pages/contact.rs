use decourcey_core::content::{opening_hours, SERVICE_OPTIONS};
use decourcey_core::BUSINESS;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::button::Button;
use crate::components::copy_text::CopyText;
use crate::components::icons::{Mail, MapPin, Phone};
use crate::components::section_title::SectionTitle;
use crate::theme;

const ICON_BOX: &str = "p-3 bg-brand/20 text-brand rounded-sm";

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class=theme::PAGE>
            <div class="max-w-6xl mx-auto">
                <SectionTitle
                    title="Contact Us"
                    subtitle="Get a free estimate for your upcoming project."
                />

                <div class="grid lg:grid-cols-2 gap-16">
                    <div class="space-y-10">
                        <div class="space-y-6">
                            <div class="flex items-start gap-4">
                                <div class=ICON_BOX>
                                    <Phone class="w-6 h-6" />
                                </div>
                                <div>
                                    <h4 class="text-white font-bold mb-1">"Call or Text"</h4>
                                    <CopyText text=BUSINESS.phone />
                                </div>
                            </div>

                            <div class="flex items-start gap-4">
                                <div class=ICON_BOX>
                                    <Mail class="w-6 h-6" />
                                </div>
                                <div>
                                    <h4 class="text-white font-bold mb-1">"Email Us"</h4>
                                    <CopyText text=BUSINESS.email />
                                </div>
                            </div>

                            <div class="flex items-start gap-4">
                                <div class=ICON_BOX>
                                    <MapPin class="w-6 h-6" />
                                </div>
                                <div>
                                    <h4 class="text-white font-bold mb-1">"Our Location"</h4>
                                    <p class="text-gray-300">{BUSINESS.address()}</p>
                                </div>
                            </div>
                        </div>

                        <BusinessHours />
                    </div>

                    <ContactForm />
                </div>
            </div>
        </div>
    }
}

#[component]
fn BusinessHours() -> impl IntoView {
    view! {
        <div class=format!("{} p-8 rounded-sm", theme::BG_LIGHT)>
            <h4 class="text-white font-bold mb-4 border-b border-gray-600 pb-2">"Business Hours"</h4>
            <ul class="space-y-2 text-gray-300">
                {opening_hours().into_iter().map(|slot| view! {
                    <li class={if slot.limited {
                        "flex justify-between text-gray-500"
                    } else {
                        "flex justify-between"
                    }}>
                        <span>{slot.days}</span>
                        <span>{slot.hours}</span>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}

/// Estimate request form. Nothing is sent anywhere.
#[component]
fn ContactForm() -> impl IntoView {
    let on_submit = |ev: SubmitEvent| {
        ev.prevent_default();
        log::debug!("contact form submitted; delivery is not wired up");
    };

    view! {
        <div class=format!("{} p-8 rounded-sm shadow-xl", theme::BG_LIGHT)>
            <form class="space-y-6" on:submit=on_submit>
                <div class="grid md:grid-cols-2 gap-6">
                    <div>
                        <label for="first-name" class=theme::FORM_LABEL>"First Name"</label>
                        <input id="first-name" name="first_name" type="text" class=theme::FORM_FIELD />
                    </div>
                    <div>
                        <label for="last-name" class=theme::FORM_LABEL>"Last Name"</label>
                        <input id="last-name" name="last_name" type="text" class=theme::FORM_FIELD />
                    </div>
                </div>

                <div>
                    <label for="email" class=theme::FORM_LABEL>"Email Address"</label>
                    <input id="email" name="email" type="email" class=theme::FORM_FIELD />
                </div>

                <div>
                    <label for="service" class=theme::FORM_LABEL>"Service Needed"</label>
                    <select id="service" name="service" class=theme::FORM_FIELD>
                        {SERVICE_OPTIONS.into_iter().map(|option| view! {
                            <option>{option}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div>
                    <label for="details" class=theme::FORM_LABEL>"Project Details"</label>
                    <textarea id="details" name="details" rows="4" class=theme::FORM_FIELD></textarea>
                </div>

                <Button class="w-full" submit=true>"Send Message"</Button>
            </form>
        </div>
    }
}
