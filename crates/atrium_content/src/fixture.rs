//! In-memory content source backed by a JSON export

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};
use crate::model::{
    sort_key_category, sort_key_project, Category, CategoryRef, GalleryImage, Project,
};
use crate::source::ContentSource;

/// The export bundled with the site, used when no fixture path is configured
const STUDIO_FIXTURE: &str = include_str!("../fixtures/studio.json");

/// On-disk shape of a content export
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContentExport {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Gallery images keyed by project uid or id
    #[serde(default)]
    pub galleries: FxHashMap<String, Vec<GalleryImage>>,
}

/// A [`ContentSource`] over a fully loaded export
#[derive(Debug, Default)]
pub struct StaticContent {
    categories: Vec<Category>,
    projects: Vec<Project>,
    galleries: FxHashMap<String, Vec<GalleryImage>>,
}

impl StaticContent {
    pub fn new(export: ContentExport) -> Self {
        let mut categories = export.categories;
        categories.sort_by_key(sort_key_category);
        let mut projects = export.projects;
        projects.sort_by_key(sort_key_project);

        Self {
            categories,
            projects,
            galleries: export.galleries,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let export: ContentExport = serde_json::from_str(json)?;
        Ok(Self::new(export))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            ContentError::Unavailable(format!("failed to read {}: {}", path.display(), e))
        })?;
        let content = Self::from_json(&json)?;
        tracing::debug!(
            "StaticContent::from_path - {} categories, {} projects from {}",
            content.categories.len(),
            content.projects.len(),
            path.display()
        );
        Ok(content)
    }

    /// The studio's bundled export
    pub fn studio() -> Result<Self> {
        Self::from_json(STUDIO_FIXTURE)
    }

    fn expand(&self, project: &Project) -> Project {
        let mut project = project.clone();
        project.category = self
            .categories
            .iter()
            .find(|c| c.uid == project.category_uid)
            .map(CategoryRef::from);
        project
    }
}

impl ContentSource for StaticContent {
    fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn category_by_uid(&self, uid: &str) -> Result<Category> {
        self.categories
            .iter()
            .find(|c| c.uid == uid)
            .cloned()
            .ok_or_else(|| ContentError::not_found("category", uid))
    }

    fn projects_by_category(&self, category_uid: &str) -> Result<Vec<Project>> {
        Ok(self
            .projects
            .iter()
            .filter(|p| p.category_uid == category_uid)
            .map(|p| self.expand(p))
            .collect())
    }

    fn project_by_uid(&self, uid: &str) -> Result<Project> {
        self.projects
            .iter()
            .find(|p| p.uid == uid)
            .map(|p| self.expand(p))
            .ok_or_else(|| ContentError::not_found("project", uid))
    }

    fn project_by_id(&self, id: &str) -> Result<Project> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .map(|p| self.expand(p))
            .ok_or_else(|| ContentError::not_found("project", id))
    }

    fn gallery(&self, key: &str) -> Result<Vec<GalleryImage>> {
        self.galleries
            .get(key)
            .cloned()
            .ok_or_else(|| ContentError::not_found("gallery", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_studio_fixture_loads_ordered() {
        let content = StaticContent::studio().unwrap();
        let uids: Vec<String> = content
            .list_categories()
            .unwrap()
            .into_iter()
            .map(|c| c.uid)
            .collect();
        assert_eq!(uids, ["residential", "workplace", "hospitality", "cultural"]);

        let residential = content.projects_by_category("residential").unwrap();
        assert_eq!(residential[0].uid, "harbour-house");
        assert_eq!(residential[1].uid, "cedar-courtyard");
    }

    #[test]
    fn test_project_lookup_expands_category() {
        let content = StaticContent::studio().unwrap();
        let project = content.project_by_uid("river-library").unwrap();
        assert_eq!(project.category.map(|c| c.title), Some("Cultural".to_string()));

        let by_id = content.project_by_id("p-0004").unwrap();
        assert_eq!(by_id.uid, "river-library");
    }

    #[test]
    fn test_missing_documents() {
        let content = StaticContent::studio().unwrap();
        assert!(content.project_by_uid("nowhere").unwrap_err().is_not_found());
        assert!(content.category_by_uid("nowhere").unwrap_err().is_not_found());
        assert!(content.projects_by_category("hospitality").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let err = StaticContent::from_json("{ \"categories\": 7 }").unwrap_err();
        assert!(matches!(err, ContentError::Decode(_)));
    }
}
