//! Static copy for the six content blocks

use crate::assets;

/// Icon shown on a service card. The website maps each to an SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceIcon {
    Home,
    Hammer,
    Shield,
}

/// Core service teaser on the home page
pub struct ServicePreview {
    pub icon: ServiceIcon,
    pub title: &'static str,
    pub desc: &'static str,
}

/// Renovation card with a bullet list (bathroom, kitchen, basement)
pub struct RenovationGroup {
    pub title: &'static str,
    pub blurb: &'static str,
    pub items: &'static [&'static str],
}

/// Photo-led service card (additions, barrier-free, roofing)
pub struct FeaturedService {
    pub title: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub blurb: &'static str,
    pub items: &'static [&'static str],
}

/// Standalone image with its alt text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Photo {
    pub src: &'static str,
    pub alt: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub location: &'static str,
    pub desc: &'static str,
    pub image: &'static str,
}

pub struct Testimonial {
    pub author: &'static str,
    pub location: &'static str,
    pub quote: &'static str,
}

impl Testimonial {
    /// Letter shown in the avatar bubble
    pub fn initial(&self) -> char {
        self.author.chars().next().unwrap_or('?')
    }
}

pub struct OpeningHours {
    pub days: &'static str,
    pub hours: &'static str,
    /// Rendered muted (appointment-only or closed)
    pub limited: bool,
}

/// Home hero background
pub const HERO_PHOTO: Photo = Photo { src: assets::HERO, alt: "Construction Site" };
/// Home intro section
pub const INTRO_PHOTO: Photo = Photo { src: assets::ROOF_INSTALLATION, alt: "Worker on roof" };
/// About block, above the location card
pub const ABOUT_PHOTO: Photo = Photo { src: assets::CREW_ON_SITE, alt: "Construction Planning" };

pub const HOME_HIGHLIGHTS: [&str; 3] = [
    "Free Estimates",
    "Fully Insured & Licensed",
    "Locally Owned & Operated",
];

pub fn service_previews() -> Vec<ServicePreview> {
    vec![
        ServicePreview {
            icon: ServiceIcon::Home,
            title: "Home Renovations",
            desc: "Kitchens, bathrooms, basements, and full remodels.",
        },
        ServicePreview {
            icon: ServiceIcon::Hammer,
            title: "Home Additions",
            desc: "Expand your living space with seamless additions.",
        },
        ServicePreview {
            icon: ServiceIcon::Shield,
            title: "Roofing",
            desc: "Installation, repair, and replacement for PEI weather.",
        },
    ]
}

pub const ABOUT_VALUES: [&str; 4] = [
    "Clear timelines and honest quotes",
    "Quality work done right the first time",
    "Respect for your home, property, and budget",
    "Lasting relationships with our clients",
];

pub fn renovation_groups() -> Vec<RenovationGroup> {
    vec![
        RenovationGroup {
            title: "Bathroom Renovations",
            blurb: "Create a clean, modern, and efficient bathroom you\u{2019}ll love.",
            items: &[
                "Custom tile work",
                "Shower and tub installs",
                "Vanity and fixture upgrades",
                "Flooring and waterproofing",
                "Full reconfigurations",
            ],
        },
        RenovationGroup {
            title: "Kitchen Renovations",
            blurb: "From modern makeovers to functional redesigns.",
            items: &[
                "Custom cabinetry",
                "Countertop installs",
                "Layout improvements",
                "Backsplashes & lighting",
                "Appliance fitting",
            ],
        },
        RenovationGroup {
            title: "Basement Renovations",
            blurb: "Turn unused space into something great.",
            items: &[
                "Family / TV rooms",
                "Rental suites",
                "Home gyms",
                "Offices & hobby rooms",
                "Dry, insulated living spaces",
            ],
        },
    ]
}

pub fn featured_services() -> Vec<FeaturedService> {
    vec![
        FeaturedService {
            title: "Home Additions",
            image: assets::HOME_ADDITION,
            image_alt: "Home Addition",
            blurb: "Need more space? We design and build additions that blend seamlessly with your existing home.",
            items: &[
                "Bedroom & living extensions",
                "Sunrooms & seasonal rooms",
                "Attached garages",
                "Second-level additions",
            ],
        },
        FeaturedService {
            title: "Barrier-Free Renovations",
            image: assets::ACCESSIBLE_BATHROOM,
            image_alt: "Barrier Free",
            blurb: "We believe every home should be accessible, safe, and comfortable.",
            items: &[
                "Wheelchair-accessible bathrooms",
                "Walk-in showers",
                "Ramps and widened doorways",
                "Grip rails & stair mods",
            ],
        },
        FeaturedService {
            title: "Roofing Services",
            image: assets::ROOF_REPLACEMENT_ASPHALT,
            image_alt: "Roofing",
            blurb: "Get unbeatable pricing and reliable workmanship with DeCourcey Construction Ltd.",
            items: &[
                "Asphalt shingle roofs",
                "Metal roofing",
                "Full tear-offs & Repairs",
                "Storm damage replacements",
            ],
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Full Kitchen Remodel",
            location: "Stratford",
            desc: "New cabinetry, flooring, and layout redesign",
            image: assets::KITCHEN_REMODEL,
        },
        Project {
            title: "Roof Replacement",
            location: "Charlottetown",
            desc: "30-year architectural shingles",
            image: assets::ROOF_REPLACEMENT,
        },
        Project {
            title: "Bathroom Upgrade",
            location: "Cornwall",
            desc: "Custom tile shower + modern fixtures",
            image: assets::BATHROOM_UPGRADE,
        },
        Project {
            title: "Garage Addition",
            location: "West Royalty",
            desc: "Foundation, framing, siding, electrical",
            image: assets::GARAGE_ADDITION,
        },
        Project {
            title: "Basement Suite",
            location: "PEI",
            desc: "Added bedroom, bathroom, and living space",
            image: assets::BASEMENT_SUITE,
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            author: "Mark L.",
            location: "Charlottetown",
            quote: "The DeCourcey team replaced our roof in just two days. Great price, clean worksite, and professional communication from start to finish.",
        },
        Testimonial {
            author: "Heather & Allan",
            location: "Stratford",
            quote: "Our new kitchen is exactly what we hoped for. They stayed on budget and helped guide us through design decisions.",
        },
        Testimonial {
            author: "Susan M.",
            location: "Cornwall",
            quote: "We needed a barrier-free bathroom for mobility reasons. The work was outstanding \u{2014} safe, modern, and beautifully finished.",
        },
        Testimonial {
            author: "Kevin R.",
            location: "PEI",
            quote: "Reliable, honest, and easy to work with. We\u{2019}ll be hiring them again for our basement renovation.",
        },
    ]
}

pub fn opening_hours() -> Vec<OpeningHours> {
    vec![
        OpeningHours { days: "Monday - Friday", hours: "8:00 AM \u{2013} 6:00 PM", limited: false },
        OpeningHours { days: "Saturday", hours: "By appointment", limited: true },
        OpeningHours { days: "Sunday", hours: "Closed", limited: true },
    ]
}

/// Placeholder first, then the selectable services
pub const SERVICE_OPTIONS: [&str; 6] = [
    "Select a service...",
    "Home Renovation",
    "New Build / Addition",
    "Roofing",
    "Barrier-Free Upgrade",
    "Other",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testimonial_initial() {
        let reviews = testimonials();
        let initials: String = reviews.iter().map(Testimonial::initial).collect();
        assert_eq!(initials, "MHSK");
    }

    #[test]
    fn test_initial_of_empty_author() {
        let t = Testimonial { author: "", location: "", quote: "" };
        assert_eq!(t.initial(), '?');
    }

    #[test]
    fn test_block_sizes() {
        assert_eq!(service_previews().len(), 3);
        assert_eq!(renovation_groups().len(), 3);
        assert_eq!(featured_services().len(), 3);
        assert_eq!(projects().len(), 5);
        assert_eq!(testimonials().len(), 4);
    }

    #[test]
    fn test_weekdays_not_limited() {
        let hours = opening_hours();
        assert!(!hours[0].limited);
        assert!(hours[1..].iter().all(|h| h.limited));
    }

    #[test]
    fn test_service_options_start_with_placeholder() {
        assert_eq!(SERVICE_OPTIONS[0], "Select a service...");
    }

    /// Every image path the content records point at
    fn content_images() -> Vec<&'static str> {
        let mut images: Vec<&str> = [HERO_PHOTO, INTRO_PHOTO, ABOUT_PHOTO]
            .iter()
            .map(|photo| photo.src)
            .collect();
        images.extend(featured_services().iter().map(|s| s.image));
        images.extend(projects().iter().map(|p| p.image));
        images
    }

    #[test]
    fn test_content_images_are_catalogued() {
        let images = content_images();
        assert_eq!(images.len(), 11);
        for image in images {
            assert!(assets::ALL.contains(&image), "{image} missing from catalogue");
        }
    }
}
