//! Content documents
//!
//! Field names follow the JSON the content repository exports.

use serde::{Deserialize, Serialize};

/// A work category, e.g. "hospitality"
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub uid: String,
    pub title: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub summary: Option<String>,
}

/// The category fields expanded onto a project
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub uid: String,
    pub title: String,
}

impl From<&Category> for CategoryRef {
    fn from(category: &Category) -> Self {
        Self {
            uid: category.uid.clone(),
            title: category.title.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub url: String,
    #[serde(default)]
    pub alt: String,
}

/// A single project
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub uid: String,
    pub title: String,
    #[serde(default)]
    pub order: i32,
    pub category_uid: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
    /// Filled in by lookups that expand the related category
    #[serde(default)]
    pub category: Option<CategoryRef>,
}

/// Order by the authored `order`, then title
pub(crate) fn sort_key_category(category: &Category) -> (i32, String) {
    (category.order, category.title.to_lowercase())
}

pub(crate) fn sort_key_project(project: &Project) -> (i32, String) {
    (project.order, project.title.to_lowercase())
}
