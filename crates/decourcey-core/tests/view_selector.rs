//! Integration tests for page selection and the mobile menu

use decourcey_core::page::quick_links;
use decourcey_core::prelude::*;

#[test]
fn test_exactly_one_block_per_page() {
    for page in Page::ALL {
        let mut state = ViewState::new();
        update(&mut state, Message::Navigate(page));
        assert_eq!(state.shown_pages(), vec![page], "selecting {page}");
    }
}

#[test]
fn test_default_state() {
    let state = ViewState::default();
    assert_eq!(state.current_page(), Page::Home);
    assert!(!state.is_menu_open());
    assert_eq!(state.shown_pages(), vec![Page::Home]);
}

#[test]
fn test_navigate_always_closes_menu() {
    for page in Page::ALL {
        for menu_open in [false, true] {
            let mut state = ViewState::new();
            if menu_open {
                update(&mut state, Message::ToggleMenu);
            }
            update(&mut state, Message::Navigate(page));
            assert!(!state.is_menu_open(), "menu open after navigating to {page}");
        }
    }
}

#[test]
fn test_toggle_twice_is_identity() {
    let mut state = ViewState::new();
    for _ in 0..2 {
        let before = state;
        update(&mut state, Message::ToggleMenu);
        update(&mut state, Message::ToggleMenu);
        assert_eq!(state, before);
        update(&mut state, Message::ToggleMenu);
    }
}

#[test]
fn test_home_to_contact() {
    let mut state = ViewState::new();
    let action = update(&mut state, Message::Navigate(Page::Contact));

    assert_eq!(action, UpdateAction::ScrollToTop);
    assert_eq!(state.current_page(), Page::Contact);
    assert_eq!(state.shown_pages(), vec![Page::Contact]);
    assert!(!state.shown_pages().contains(&Page::Home));
}

#[test]
fn test_open_menu_then_navigate_to_services() {
    let mut state = ViewState::new();
    update(&mut state, Message::ToggleMenu);
    assert!(state.is_menu_open());

    update(&mut state, Message::Navigate(Page::Services));
    assert!(!state.is_menu_open());
    assert_eq!(state.current_page(), Page::Services);
}

#[test]
fn test_every_page_reachable_from_every_page() {
    for from in Page::ALL {
        for to in Page::ALL {
            let mut state = ViewState::new();
            update(&mut state, Message::Navigate(from));
            let action = update(&mut state, Message::Navigate(to));
            assert_eq!(state.current_page(), to);
            let expected = if from == to {
                UpdateAction::None
            } else {
                UpdateAction::ScrollToTop
            };
            assert_eq!(action, expected, "{from} -> {to}");
        }
    }
}

#[test]
fn test_quick_links_navigate_to_their_pages() {
    for (label, page) in quick_links() {
        let mut state = ViewState::new();
        update(&mut state, Message::ToggleMenu);
        update(&mut state, Message::Navigate(page));
        assert_eq!(state.current_page().label(), label);
        assert_eq!(state.shown_pages(), vec![page]);
        assert!(!state.is_menu_open());
    }
}

#[test]
fn test_unknown_target_rejected() {
    let err = "gallery".parse::<Page>().unwrap_err();
    assert!(matches!(err, Error::UnknownPage { ref id } if id == "gallery"));
}
