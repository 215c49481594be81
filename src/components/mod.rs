pub mod button;
pub mod copy_text;
pub mod footer;
pub mod icons;
pub mod logo;
pub mod navbar;
pub mod section_title;
