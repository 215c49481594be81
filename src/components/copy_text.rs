use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::icons::{Check, Copy};

const RESET_AFTER_MS: i32 = 2000;

/// Clickable text that copies itself to the clipboard.
#[component]
pub fn CopyText(text: &'static str) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let handle_copy = move |_| {
        leptos::task::spawn_local(async move {
            let Some(window) = web_sys::window() else {
                log::warn!("no window available, cannot copy {text:?}");
                return;
            };
            let promise = window.navigator().clipboard().write_text(text);
            if let Err(err) = JsFuture::from(promise).await {
                log::warn!("clipboard write rejected: {err:?}");
                return;
            }
            set_copied.set(true);

            let reset = Closure::once(move || set_copied.set(false));
            if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                reset.as_ref().unchecked_ref(),
                RESET_AFTER_MS,
            ) {
                log::warn!("failed to schedule copy indicator reset: {err:?}");
                set_copied.set(false);
            }
            reset.forget();
        });
    };

    view! {
        <button
            type="button"
            on:click=handle_copy
            title="Click to copy"
            class="group flex items-center gap-2 text-left text-gray-300 hover:text-white transition-colors cursor-pointer"
        >
            <span>{text}</span>
            {move || {
                if copied.get() {
                    view! { <Check class="w-4 h-4 text-brand" /> }.into_any()
                } else {
                    view! { <Copy class="w-4 h-4 opacity-0 group-hover:opacity-60 transition-opacity" /> }.into_any()
                }
            }}
        </button>
    }
}
