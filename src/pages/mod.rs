pub mod about;
pub mod contact;
pub mod home;
pub mod projects;
pub mod services;
pub mod testimonials;
