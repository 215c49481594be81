use decourcey_core::Page;
use leptos::prelude::*;

use crate::store::use_store;

const BASE: &str = "px-6 py-3 font-semibold transition-all duration-300 rounded-sm flex items-center justify-center gap-2";

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Text,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-brand text-white hover:bg-brand/90",
            ButtonVariant::Outline => "border-2 border-gray-600 text-white hover:bg-white hover:text-[#3c3a37]",
            ButtonVariant::Text => "text-white hover:text-brand p-0",
        }
    }
}

fn button_class(variant: ButtonVariant, extra: &str) -> String {
    format!("{BASE} {} {extra}", variant.class())
}

/// Call-to-action button. Navigates to `to` when given; with `submit` it
/// submits the enclosing form instead.
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] to: Option<Page>,
    #[prop(optional)] submit: bool,
) -> impl IntoView {
    let store = use_store();
    let on_click = move |_| {
        if let Some(page) = to {
            store.navigate(page);
        }
    };

    view! {
        <button
            type={if submit { "submit" } else { "button" }}
            on:click=on_click
            class=button_class(variant, class)
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_variant_is_primary() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn test_button_class_appends_extra() {
        let class = button_class(ButtonVariant::Primary, "w-full");
        assert!(class.starts_with(BASE));
        assert!(class.contains("bg-brand"));
        assert!(class.ends_with("w-full"));
    }

    #[test]
    fn test_outline_has_border() {
        assert!(button_class(ButtonVariant::Outline, "").contains("border-2"));
    }
}
