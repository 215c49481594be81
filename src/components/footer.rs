use decourcey_core::page::quick_links;
use decourcey_core::{assets, BUSINESS};
use leptos::prelude::*;

use super::icons::{Facebook, Instagram, Mail, MapPin, Phone};
use super::logo::Logo;
use crate::store::use_store;
use crate::theme;

const SOCIAL: &str = "w-10 h-10 bg-[#3c3a37] flex items-center justify-center text-gray-400 hover:text-brand hover:bg-white transition-all cursor-pointer rounded-sm";

fn current_year() -> u32 {
    web_sys::js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn Footer() -> impl IntoView {
    let store = use_store();

    view! {
        <footer class=format!("{} border-t border-gray-800 pt-16 pb-8", theme::BG_DARK)>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid md:grid-cols-4 gap-12 mb-12">
                <div class="col-span-1 md:col-span-2">
                    <div class="flex items-center gap-2 mb-4">
                        <Logo src=assets::LOGO />
                    </div>
                    <p class="text-gray-400 max-w-sm mb-6">{BUSINESS.tagline}</p>
                    // Social placeholders
                    <div class="flex gap-4">
                        <div class=SOCIAL>
                            <Facebook class="w-5 h-5" />
                        </div>
                        <div class=SOCIAL>
                            <Instagram class="w-5 h-5" />
                        </div>
                    </div>
                </div>

                <div>
                    <h4 class="text-white font-bold uppercase tracking-wider mb-6">"Quick Links"</h4>
                    <ul class="space-y-3">
                        {quick_links().into_iter().map(|(label, page)| {
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        on:click=move |_| store.navigate(page)
                                        class="text-gray-400 hover:text-brand transition-colors"
                                    >
                                        {label}
                                    </button>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </div>

                <div>
                    <h4 class="text-white font-bold uppercase tracking-wider mb-6">"Contact Info"</h4>
                    <ul class="space-y-4 text-gray-400">
                        <li class="flex gap-3 items-start">
                            <MapPin class="w-5 h-5 text-brand shrink-0" />
                            <span>{BUSINESS.street}<br />{BUSINESS.city}</span>
                        </li>
                        <li class="flex gap-3 items-center">
                            <Phone class="w-5 h-5 text-brand shrink-0" />
                            <a href=BUSINESS.phone_href() class="hover:text-white transition-colors">{BUSINESS.phone}</a>
                        </li>
                        <li class="flex gap-3 items-center">
                            <Mail class="w-5 h-5 text-brand shrink-0" />
                            <a href=BUSINESS.email_href() class="hover:text-white transition-colors break-all">{BUSINESS.email}</a>
                        </li>
                    </ul>
                </div>
            </div>
            <div class="max-w-7xl mx-auto px-4 border-t border-gray-800 pt-8 text-center text-gray-600 text-sm">
                {BUSINESS.copyright(current_year())}
            </div>
        </footer>
    }
}
