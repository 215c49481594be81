//! # decourcey-core - Site State and Content
//!
//! Target-independent half of the DeCourcey Construction website. Everything
//! here builds and tests natively; the Leptos front end only renders it.
//!
//! ## Public API
//!
//! ### Pages (`page`)
//! - [`Page`] - The six content blocks, with ids, nav labels and titles
//!
//! ### View Selector (`state`)
//! - [`ViewState`] - Current page and mobile menu visibility
//! - [`Message`] - User interactions (`Navigate`, `ToggleMenu`)
//! - [`update()`] - Applies a message, returns an [`UpdateAction`]
//!
//! ### Content (`content`, `business`, `assets`)
//! - Static copy for every block, the [`Business`] profile, image paths
//!
//! ### Error Handling (`error`)
//! - [`Error`] / [`Result`]

pub mod assets;
pub mod business;
pub mod content;
pub mod error;
pub mod page;
pub mod state;

pub use business::{Business, BUSINESS};
pub use error::{Error, Result};
pub use page::Page;
pub use state::{update, Message, UpdateAction, ViewState};

/// Prelude for common imports used by the website crate
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::page::Page;
    pub use crate::state::{update, Message, UpdateAction, ViewState};
    pub use crate::BUSINESS;
}
