//! Content client
//!
//! Wraps an optional [`ContentSource`]. Without one every query fails with
//! [`ContentError::NotConfigured`], which the page loaders turn into an
//! empty state rather than an error screen.
//!
//! Project and gallery lookups try a primary key and then a fallback key.
//! The fallback runs only when the primary lookup reports
//! [`ContentError::NotFound`]; any other failure is returned as-is.

use std::sync::Arc;

use crate::error::{ContentError, Result};
use crate::model::{Category, GalleryImage, Project};
use crate::source::ContentSource;

#[derive(Clone, Default)]
pub struct ContentClient {
    source: Option<Arc<dyn ContentSource>>,
}

impl ContentClient {
    pub fn new(source: impl ContentSource + 'static) -> Self {
        Self {
            source: Some(Arc::new(source)),
        }
    }

    /// A client with no repository behind it
    pub fn unconfigured() -> Self {
        Self::default()
    }

    pub fn is_configured(&self) -> bool {
        self.source.is_some()
    }

    fn source(&self) -> Result<&dyn ContentSource> {
        self.source.as_deref().ok_or(ContentError::NotConfigured)
    }

    pub fn categories(&self) -> Result<Vec<Category>> {
        self.source()?.list_categories()
    }

    pub fn category(&self, uid: &str) -> Result<Category> {
        self.source()?.category_by_uid(uid)
    }

    pub fn projects_in(&self, category_uid: &str) -> Result<Vec<Project>> {
        self.source()?.projects_by_category(category_uid)
    }

    /// Look a project up by uid, falling back to treating `key` as a
    /// document id
    pub fn project(&self, key: &str) -> Result<Project> {
        let source = self.source()?;
        with_fallback(
            || source.project_by_uid(key),
            || source.project_by_id(key),
        )
    }

    /// A project's gallery, stored under its uid or else its id
    pub fn gallery(&self, project: &Project) -> Result<Vec<GalleryImage>> {
        let source = self.source()?;
        with_fallback(
            || source.gallery(&project.uid),
            || source.gallery(&project.id),
        )
    }
}

impl std::fmt::Debug for ContentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentClient")
            .field("configured", &self.is_configured())
            .finish()
    }
}

/// Run `primary`; run `fallback` only if it reported not-found
pub fn with_fallback<T>(
    primary: impl FnOnce() -> Result<T>,
    fallback: impl FnOnce() -> Result<T>,
) -> Result<T> {
    match primary() {
        Err(err) if err.is_not_found() => {
            tracing::debug!("ContentClient - {}, trying fallback lookup", err);
            fallback()
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::StaticContent;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_unconfigured_client() {
        let client = ContentClient::unconfigured();
        assert!(matches!(client.categories(), Err(ContentError::NotConfigured)));
        assert!(matches!(client.project("x"), Err(ContentError::NotConfigured)));
    }

    #[test]
    fn test_project_falls_back_to_id() {
        let client = ContentClient::new(StaticContent::studio().unwrap());
        assert_eq!(client.project("p-0003").unwrap().uid, "foundry-studios");
        assert!(client.project("p-9999").unwrap_err().is_not_found());
    }

    #[test]
    fn test_gallery_falls_back_to_id() {
        let client = ContentClient::new(StaticContent::studio().unwrap());
        let foundry = client.project("foundry-studios").unwrap();
        assert_eq!(client.gallery(&foundry).unwrap().len(), 1);

        let harbour = client.project("harbour-house").unwrap();
        assert_eq!(client.gallery(&harbour).unwrap().len(), 2);
    }

    #[test]
    fn test_transport_failure_skips_fallback() {
        let fallbacks = AtomicUsize::new(0);
        let result: Result<()> = with_fallback(
            || Err(ContentError::Unavailable("timeout".into())),
            || {
                fallbacks.fetch_add(1, Ordering::SeqCst);
                Ok(())
            },
        );
        assert!(matches!(result, Err(ContentError::Unavailable(_))));
        assert_eq!(fallbacks.load(Ordering::SeqCst), 0);
    }
}
