//! Reactive wrapper around the view selector state
//!
//! Components reach the store through context and only ever change state by
//! dispatching a [`Message`]. Side effects requested by [`update`] run here.

use decourcey_core::prelude::*;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SiteStore {
    state: RwSignal<ViewState>,
}

impl SiteStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ViewState::new()),
        }
    }

    pub fn dispatch(&self, message: Message) {
        let action = self
            .state
            .try_update(|state| update(state, message))
            .unwrap_or_default();

        match action {
            UpdateAction::ScrollToTop => scroll_to_top(),
            UpdateAction::None => {}
        }
    }

    pub fn navigate(&self, page: Page) {
        self.dispatch(Message::Navigate(page));
    }

    pub fn toggle_menu(&self) {
        self.dispatch(Message::ToggleMenu);
    }

    pub fn page(&self) -> Page {
        self.state.get().current_page()
    }

    pub fn shown_pages(&self) -> Vec<Page> {
        self.state.with(ViewState::shown_pages)
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.state.with(|state| state.is_active(page))
    }

    pub fn menu_open(&self) -> bool {
        self.state.with(|state| state.is_menu_open())
    }
}

impl Default for SiteStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_store() -> SiteStore {
    let store = SiteStore::new();
    provide_context(store);
    store
}

pub fn use_store() -> SiteStore {
    expect_context::<SiteStore>()
}

fn scroll_to_top() {
    match web_sys::window() {
        Some(window) => window.scroll_to_with_x_and_y(0.0, 0.0),
        None => log::warn!("no window available, scroll position not reset"),
    }
}
