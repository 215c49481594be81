//! Business profile shared by the navbar, footer, about and contact blocks

/// Contact and branding details for the company
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Business {
    /// Full legal name
    pub name: &'static str,
    /// Name shown on the logo's first line
    pub short_name: &'static str,
    /// Shown under the short name ("Construction Ltd.")
    pub suffix: &'static str,
    pub street: &'static str,
    pub city: &'static str,
    pub service_area: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    /// One-line pitch used in the footer
    pub tagline: &'static str,
}

pub const BUSINESS: Business = Business {
    name: "DeCourcey Construction Ltd.",
    short_name: "DeCourcey",
    suffix: "Construction Ltd.",
    street: "48 Thorndale Drive",
    city: "Charlottetown, PE",
    service_area: "Serving all of Prince Edward Island",
    phone: "(782) 377-5247",
    email: "DeCourceyConstructionLtd@gmail.com",
    tagline: "Quality craftsmanship and honest work across Prince Edward Island. Fully insured, licensed, and locally owned.",
};

impl Business {
    /// Single-line postal address
    pub fn address(&self) -> String {
        format!("{}, {}", self.street, self.city)
    }

    /// `tel:` link for the phone number (digits only)
    pub fn phone_href(&self) -> String {
        let digits: String = self.phone.chars().filter(char::is_ascii_digit).collect();
        format!("tel:{digits}")
    }

    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Footer copyright line. `name` already ends in "Ltd." so no period is added.
    pub fn copyright(&self, year: u32) -> String {
        format!("\u{00A9} {year} {} All Rights Reserved.", self.name)
    }

    /// Browser tab title for a page heading
    pub fn document_title(&self, heading: &str) -> String {
        format!("{heading} | {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address() {
        assert_eq!(BUSINESS.address(), "48 Thorndale Drive, Charlottetown, PE");
    }

    #[test]
    fn test_phone_href_strips_punctuation() {
        assert_eq!(BUSINESS.phone_href(), "tel:7823775247");
    }

    #[test]
    fn test_email_href() {
        assert_eq!(
            BUSINESS.email_href(),
            "mailto:DeCourceyConstructionLtd@gmail.com"
        );
    }

    #[test]
    fn test_copyright_line() {
        let line = BUSINESS.copyright(2026);
        assert_eq!(line, "\u{00A9} 2026 DeCourcey Construction Ltd. All Rights Reserved.");
        assert!(!line.contains(".."));
    }

    #[test]
    fn test_document_title() {
        assert_eq!(
            BUSINESS.document_title("Contact Us"),
            "Contact Us | DeCourcey Construction Ltd."
        );
    }
}
