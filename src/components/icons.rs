//! Inline SVG icons (Lucide outlines, 24x24 viewBox)

use leptos::prelude::*;

#[component]
fn Lucide(class: &'static str, children: Children) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn Menu(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Lucide class=class>
            <line x1="4" x2="20" y1="12" y2="12" />
            <line x1="4" x2="20" y1="6" y2="6" />
            <line x1="4" x2="20" y1="18" y2="18" />
        </Lucide>
    }
}

#[component]
pub fn Close(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Lucide class=class>
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        </Lucide>
    }
}

#[component]
pub fn Phone(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Lucide class=class>
            <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
        </Lucide>
    }
}

#[component]
pub fn Mail(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Lucide class=class>
            <rect width="20" height="16" x="2" y="4" rx="2" />
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        </Lucide>
    }
}

#[component]
pub fn MapPin(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Lucide class=class>
            <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
            <circle cx="12" cy="10" r="3" />
        </Lucide>
    }
}

#[component]
pub fn House(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Lucide class=class>
            <path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" />
            <polyline points="9 22 9 12 15 12 15 22" />
        </Lucide>
    }
}

#[component]
pub fn Hammer(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Lucide class=class>
            <path d="m15 12-8.5 8.5c-.83.83-2.17.83-3 0a2.12 2.12 0 0 1 0-3L12 9" />
            <path d="M17.64 15 22 10.64" />
            <path d="m20.91 11.7-1.25-1.25c-.6-.6-.93-1.4-.93-2.25v-.86L16.01 4.6a5.56 5.56 0 0 0-3.94-1.64H9l.92.82A6.18 6.18 0 0 1 12 8.4v1.56l2 2h2.47l2.26 1.91" />
        </Lucide>
    }
}

#[component]
pub fn Shield(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Lucide class=class>
            <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" />
        </Lucide>
    }
}

#[component]
pub fn ArrowRight(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Lucide class=class>
            <path d="M5 12h14" />
            <path d="m12 5 7 7-7 7" />
        </Lucide>
    }
}

#[component]
pub fn CheckCircle(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Lucide class=class>
            <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
            <path d="m9 11 3 3L22 4" />
        </Lucide>
    }
}

#[component]
pub fn Check(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Lucide class=class>
            <path d="M20 6 9 17l-5-5" />
        </Lucide>
    }
}

#[component]
pub fn Copy(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Lucide class=class>
            <rect width="14" height="14" x="8" y="8" rx="2" ry="2" />
            <path d="M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2" />
        </Lucide>
    }
}

#[component]
pub fn Facebook(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Lucide class=class>
            <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" />
        </Lucide>
    }
}

#[component]
pub fn Instagram(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Lucide class=class>
            <rect width="20" height="20" x="2" y="2" rx="5" ry="5" />
            <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
            <line x1="17.5" x2="17.51" y1="6.5" y2="6.5" />
        </Lucide>
    }
}
