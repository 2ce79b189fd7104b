//! Content source abstraction

use crate::error::Result;
use crate::model::{Category, GalleryImage, Project};

/// Read-only queries against a content repository
///
/// Lookups of a single document return [`ContentError::NotFound`] when it
/// doesn't exist; list queries return an empty list.
///
/// [`ContentError::NotFound`]: crate::error::ContentError::NotFound
pub trait ContentSource: Send + Sync {
    /// All categories, ordered
    fn list_categories(&self) -> Result<Vec<Category>>;

    fn category_by_uid(&self, uid: &str) -> Result<Category>;

    /// Projects in a category, ordered
    fn projects_by_category(&self, category_uid: &str) -> Result<Vec<Project>>;

    /// A project with its category expanded
    fn project_by_uid(&self, uid: &str) -> Result<Project>;

    /// A project by its document id, with its category expanded
    fn project_by_id(&self, id: &str) -> Result<Project>;

    /// Gallery images stored under `key`
    fn gallery(&self, key: &str) -> Result<Vec<GalleryImage>>;
}
