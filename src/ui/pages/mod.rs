//! Application pages
//!
//! - Home page (every section of the site)
//! - Not found page

mod home;
mod not_found;

pub use home::{CanonicalUrl, HomePage};
pub use not_found::NotFoundPage;
