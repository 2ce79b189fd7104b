//! Atrium Content
//!
//! Read-only access to the studio's categories and projects, and the page
//! loaders that turn every query outcome into a terminal [`PageState`].
//!
//! # Example
//!
//! ```rust
//! use atrium_content::{load_category, ContentClient, PageState, StaticContent};
//!
//! let client = ContentClient::new(StaticContent::studio().unwrap());
//! let page = load_category(&client, "hospitality");
//! assert!(matches!(page, PageState::Empty { .. }));
//! ```

pub mod client;
pub mod error;
pub mod fixture;
pub mod model;
pub mod page;
pub mod source;

pub use client::{with_fallback, ContentClient};
pub use error::{ContentError, Result};
pub use fixture::{ContentExport, StaticContent};
pub use model::{Category, CategoryRef, GalleryImage, Project};
pub use page::{
    load_category, load_project, load_work_index, CategoryPage, PageState, ProjectPage,
};
pub use source::ContentSource;
