use decourcey_core::{assets, Page};
use leptos::prelude::*;

use super::button::Button;
use super::icons::{Close, Menu};
use super::logo::Logo;
use crate::store::use_store;
use crate::theme;

#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_store();

    view! {
        <nav class=format!(
            "fixed w-full z-50 transition-all duration-300 {} shadow-lg border-b border-[#3c3a37]",
            theme::BG_DARK,
        )>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-20">
                    <div
                        class="flex-shrink-0 cursor-pointer flex items-center gap-2"
                        on:click=move |_| store.navigate(Page::Home)
                    >
                        <Logo src=assets::LOGO_TRANSPARENT name_class="hidden md:block" />
                    </div>

                    // Desktop Menu
                    <div class="hidden md:block">
                        <div class="ml-10 flex items-baseline space-x-8">
                            {Page::ALL.into_iter().map(|page| {
                                view! {
                                    <button
                                        type="button"
                                        on:click=move |_| store.navigate(page)
                                        class=move || theme::nav_link_class(store.is_active(page))
                                    >
                                        {page.label()}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="hidden md:block">
                        <Button to=Page::Contact>"Free Estimate"</Button>
                    </div>

                    // Mobile menu button
                    <div class="-mr-2 flex md:hidden">
                        <button
                            type="button"
                            aria-label="Toggle navigation"
                            on:click=move |_| store.toggle_menu()
                            class="bg-[#4a4845] inline-flex items-center justify-center p-2 rounded-md text-gray-400 hover:text-white hover:bg-gray-700 focus:outline-none"
                        >
                            {move || {
                                if store.menu_open() {
                                    view! { <Close class="block h-6 w-6" /> }.into_any()
                                } else {
                                    view! { <Menu class="block h-6 w-6" /> }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || store.menu_open()>
                <MobileMenu />
            </Show>
        </nav>
    }
}

#[component]
fn MobileMenu() -> impl IntoView {
    let store = use_store();

    view! {
        <div class="md:hidden bg-[#2c2a27] border-t border-gray-700">
            <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3">
                {Page::ALL.into_iter().map(|page| {
                    view! {
                        <button
                            type="button"
                            on:click=move |_| store.navigate(page)
                            class=move || theme::mobile_link_class(store.is_active(page))
                        >
                            {page.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
