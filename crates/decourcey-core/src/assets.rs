//! Catalogue of static image assets
//!
//! Images are served by the static host as-is. Content refers to them only
//! through these constants so a missing or renamed file is caught in one place.

pub const LOGO: &str = "/small-logo.png";
pub const LOGO_TRANSPARENT: &str = "/small-logo-transparent.png";

pub const HERO: &str = "/construction-site-with-heavy-equipment-and-buildin.jpg";
pub const ROOF_INSTALLATION: &str = "/roof-installation-new-shingles.jpg";
pub const CREW_ON_SITE: &str = "/construction-workers-on-job-site-building-home.jpg";

pub const HOME_ADDITION: &str = "/home-addition-with-new-windows.jpg";
pub const ACCESSIBLE_BATHROOM: &str = "/accessible-bathroom-design.jpg";
pub const ROOF_REPLACEMENT_ASPHALT: &str = "/roof-replacement-asphalt-shingles.jpg";

pub const KITCHEN_REMODEL: &str = "/modern-kitchen-renovation.png";
pub const ROOF_REPLACEMENT: &str = "/roof-replacement-shingles.jpg";
pub const BATHROOM_UPGRADE: &str = "/modern-bathroom-renovation.png";
pub const GARAGE_ADDITION: &str = "/attached-garage-addition.jpg";
pub const BASEMENT_SUITE: &str = "/finished-basement-suite.jpg";

/// Every image the site references
pub const ALL: [&str; 13] = [
    LOGO,
    LOGO_TRANSPARENT,
    HERO,
    ROOF_INSTALLATION,
    CREW_ON_SITE,
    HOME_ADDITION,
    ACCESSIBLE_BATHROOM,
    ROOF_REPLACEMENT_ASPHALT,
    KITCHEN_REMODEL,
    ROOF_REPLACEMENT,
    BATHROOM_UPGRADE,
    GARAGE_ADDITION,
    BASEMENT_SUITE,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_absolute_images() {
        for path in ALL {
            assert!(path.starts_with('/'), "{path} is not absolute");
            assert!(
                path.ends_with(".jpg") || path.ends_with(".png"),
                "{path} is not an image"
            );
        }
    }

    #[test]
    fn test_no_duplicates() {
        for (i, a) in ALL.iter().enumerate() {
            assert!(!ALL[i + 1..].contains(a), "{a} listed twice");
        }
    }
}
