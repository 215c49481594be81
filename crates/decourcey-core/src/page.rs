//! Page identifiers for the single-page site

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::{Error, Result};

/// Labels listed under "Quick Links" in the footer
pub const QUICK_LINK_LABELS: [&str; 4] = ["About", "Services", "Projects", "Contact"];

/// One of the six content blocks the site can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Services,
    Projects,
    Testimonials,
    Contact,
}

impl Page {
    /// Every page, in navigation order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Projects,
        Page::Testimonials,
        Page::Contact,
    ];

    /// Stable lowercase identifier
    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Services => "services",
            Page::Projects => "projects",
            Page::Testimonials => "testimonials",
            Page::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Services => "Services",
            Page::Projects => "Projects",
            Page::Testimonials => "Testimonials",
            Page::Contact => "Contact",
        }
    }

    /// Heading used for the browser tab title
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Quality Craftsmanship. Honest Work. Local Expertise.",
            Page::About => "About DeCourcey Construction",
            Page::Services => "Our Services",
            Page::Projects => "Recent Work",
            Page::Testimonials => "Client Testimonials",
            Page::Contact => "Contact Us",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = Error;

    /// Accepts ids and labels alike ("contact", "Contact", " CONTACT ").
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Page::ALL
            .into_iter()
            .find(|page| page.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::unknown_page(s))
    }
}

/// Resolve footer link labels to pages, skipping (and logging) any label
/// that names no page.
pub fn resolve_links(labels: &[&str]) -> Vec<(&'static str, Page)> {
    labels
        .iter()
        .filter_map(|label| match label.parse::<Page>() {
            Ok(page) => Some((page.label(), page)),
            Err(err) => {
                warn!(%err, "dropping footer link");
                None
            }
        })
        .collect()
}

/// Footer quick links as (label, page)
pub fn quick_links() -> Vec<(&'static str, Page)> {
    resolve_links(&QUICK_LINK_LABELS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in Page::ALL.iter().enumerate() {
            for b in &Page::ALL[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn test_parse_label() {
        assert_eq!("Services".parse::<Page>(), Ok(Page::Services));
        assert_eq!(" TESTIMONIALS ".parse::<Page>(), Ok(Page::Testimonials));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "blog".parse::<Page>(),
            Err(Error::UnknownPage {
                id: "blog".to_string()
            })
        );
        assert!("".parse::<Page>().is_err());
    }

    #[test]
    fn test_label_matches_id() {
        for page in Page::ALL {
            assert_eq!(page.label().to_lowercase(), page.id());
        }
    }

    #[test]
    fn test_display_uses_id() {
        assert_eq!(Page::Projects.to_string(), "projects");
    }

    #[test]
    fn test_quick_links_resolve_every_label() {
        let pages: Vec<Page> = quick_links().into_iter().map(|(_, page)| page).collect();
        assert_eq!(
            pages,
            vec![Page::About, Page::Services, Page::Projects, Page::Contact]
        );
    }

    #[test]
    fn test_resolve_links_skips_unknown_label() {
        let links = resolve_links(&["About", "Gallery", "contact"]);
        assert_eq!(
            links,
            vec![("About", Page::About), ("Contact", Page::Contact)]
        );
    }

    #[test]
    fn test_home_title_is_hero_headline() {
        assert_eq!(
            Page::Home.title(),
            "Quality Craftsmanship. Honest Work. Local Expertise."
        );
    }
}
