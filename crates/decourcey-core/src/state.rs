//! View selector state and its update function (TEA pattern)
//!
//! The site holds exactly two pieces of state: which page is showing and
//! whether the mobile menu overlay is open. Every user interaction is a
//! [`Message`]; [`update`] applies it and tells the view layer which side
//! effect, if any, it has to perform.

use tracing::{debug, trace};

use crate::page::Page;

/// Transient UI state for one browsing session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    current_page: Page,
    menu_open: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Whether `page` is the one highlighted in the navigation
    pub fn is_active(&self, page: Page) -> bool {
        self.current_page == page
    }

    /// Whether the content block for `page` is rendered.
    ///
    /// Exactly one page satisfies this at any time.
    pub fn shows(&self, page: Page) -> bool {
        self.is_active(page)
    }

    /// Pages whose content block is rendered, in navigation order.
    ///
    /// The renderer draws exactly these blocks and omits the rest.
    pub fn shown_pages(&self) -> Vec<Page> {
        Page::ALL.into_iter().filter(|page| self.shows(*page)).collect()
    }

    /// Select `target` and close the mobile menu.
    ///
    /// Returns `true` when the page actually changed.
    pub fn navigate(&mut self, target: Page) -> bool {
        let changed = self.current_page != target;
        self.current_page = target;
        self.menu_open = false;
        changed
    }

    /// Flip the mobile menu and return the new visibility
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }
}

/// All user interactions the site reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A nav link, button or logo was clicked
    Navigate(Page),
    /// The mobile menu button was clicked
    ToggleMenu,
}

/// Side effect the view layer performs after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateAction {
    #[default]
    None,
    /// Reset the window scroll position
    ScrollToTop,
}

/// Process a message and update state
pub fn update(state: &mut ViewState, message: Message) -> UpdateAction {
    match message {
        Message::Navigate(target) => {
            let from = state.current_page;
            if state.navigate(target) {
                debug!(%from, to = %target, "navigate");
                UpdateAction::ScrollToTop
            } else {
                trace!(page = %target, "navigate to current page");
                UpdateAction::None
            }
        }

        Message::ToggleMenu => {
            let open = state.toggle_menu();
            debug!(open, "toggle menu");
            UpdateAction::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert_eq!(state.current_page(), Page::Home);
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_navigate_closes_menu() {
        let mut state = ViewState::new();
        state.toggle_menu();
        assert!(state.is_menu_open());

        state.navigate(Page::Services);
        assert!(!state.is_menu_open());
        assert_eq!(state.current_page(), Page::Services);
    }

    #[test]
    fn test_navigate_reports_change() {
        let mut state = ViewState::new();
        assert!(state.navigate(Page::About));
        assert!(!state.navigate(Page::About));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut state = ViewState::new();
        assert!(state.toggle_menu());
        assert!(!state.toggle_menu());
    }

    #[test]
    fn test_update_navigate_scrolls_on_change() {
        let mut state = ViewState::new();
        let action = update(&mut state, Message::Navigate(Page::Contact));
        assert_eq!(action, UpdateAction::ScrollToTop);
        assert_eq!(state.current_page(), Page::Contact);
    }

    #[test]
    fn test_update_navigate_same_page_no_scroll() {
        let mut state = ViewState::new();
        let action = update(&mut state, Message::Navigate(Page::Home));
        assert_eq!(action, UpdateAction::None);
    }

    #[test]
    fn test_update_navigate_same_page_still_closes_menu() {
        let mut state = ViewState::new();
        update(&mut state, Message::ToggleMenu);
        update(&mut state, Message::Navigate(Page::Home));
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_update_toggle_has_no_action() {
        let mut state = ViewState::new();
        assert_eq!(update(&mut state, Message::ToggleMenu), UpdateAction::None);
        assert!(state.is_menu_open());
    }

    #[test]
    fn test_shown_pages_is_current_only() {
        let mut state = ViewState::new();
        assert_eq!(state.shown_pages(), vec![Page::Home]);
        state.navigate(Page::Testimonials);
        assert_eq!(state.shown_pages(), vec![Page::Testimonials]);
    }

    #[test]
    fn test_is_active_only_current() {
        let mut state = ViewState::new();
        state.navigate(Page::Projects);
        assert!(state.is_active(Page::Projects));
        assert!(!state.is_active(Page::Home));
    }
}
