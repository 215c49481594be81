//! Tailwind class strings shared across the site
//!
//! `brand` is the accent colour configured in `index.html`.

pub const BG: &str = "bg-[#3c3a37]";
/// Cards
pub const BG_LIGHT: &str = "bg-[#4a4845]";
/// Navbar and footer
pub const BG_DARK: &str = "bg-[#2c2a27]";
pub const TEXT_MUTED: &str = "text-gray-300";

/// Wrapper for every content block except Home
pub const PAGE: &str = "py-20 px-4 bg-[#3c3a37] min-h-screen animate-fade-in";

pub const FORM_FIELD: &str = "w-full bg-[#3c3a37] border border-gray-600 rounded p-3 text-white focus:outline-none focus:border-brand";
pub const FORM_LABEL: &str = "block text-gray-400 text-sm mb-2";

pub fn nav_link_class(active: bool) -> &'static str {
    if active {
        "text-brand px-3 py-2 text-sm font-medium transition-colors uppercase tracking-wide"
    } else {
        "text-gray-300 hover:text-white px-3 py-2 text-sm font-medium transition-colors uppercase tracking-wide"
    }
}

pub fn mobile_link_class(active: bool) -> &'static str {
    if active {
        "text-brand bg-black/20 block w-full text-left px-3 py-3 rounded-md text-base font-medium"
    } else {
        "text-gray-300 block w-full text-left px-3 py-3 rounded-md text-base font-medium"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_links_use_brand() {
        assert!(nav_link_class(true).starts_with("text-brand"));
        assert!(mobile_link_class(true).contains("bg-black/20"));
    }

    #[test]
    fn test_inactive_links_are_muted() {
        assert!(!nav_link_class(false).contains("text-brand"));
        assert!(!mobile_link_class(false).contains("text-brand"));
    }

    #[test]
    fn test_page_wrapper_uses_background() {
        assert!(PAGE.contains(BG));
        assert!(FORM_FIELD.contains(BG));
    }
}
