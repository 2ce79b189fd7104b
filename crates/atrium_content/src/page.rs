//! Page loaders
//!
//! Every loader resolves to a terminal [`PageState`]: content, an explicit
//! empty message, a not-found message with a way back, or an unavailable
//! message. Errors are logged here and never reach the page.

use atrium_core::Route;

use crate::client::ContentClient;
use crate::error::ContentError;
use crate::model::{Category, GalleryImage, Project};

/// What a content-backed page shows
#[derive(Clone, Debug, PartialEq)]
pub enum PageState<T> {
    /// Initial state before the loader has run
    Loading,
    Ready(T),
    /// The query succeeded but there is nothing to show
    Empty { message: String },
    NotFound { message: String, back: Route },
    /// The content source failed
    Unavailable { message: String },
}

impl<T> PageState<T> {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PageState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// User-visible message for the non-ready states
    pub fn message(&self) -> Option<&str> {
        match self {
            PageState::Loading | PageState::Ready(_) => None,
            PageState::Empty { message }
            | PageState::NotFound { message, .. }
            | PageState::Unavailable { message } => Some(message),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PageState<U> {
        match self {
            PageState::Loading => PageState::Loading,
            PageState::Ready(value) => PageState::Ready(f(value)),
            PageState::Empty { message } => PageState::Empty { message },
            PageState::NotFound { message, back } => PageState::NotFound { message, back },
            PageState::Unavailable { message } => PageState::Unavailable { message },
        }
    }

    fn empty(message: &str) -> Self {
        PageState::Empty {
            message: message.to_string(),
        }
    }

    fn not_found(message: &str, back: Route) -> Self {
        PageState::NotFound {
            message: message.to_string(),
            back,
        }
    }
}

/// Convert a failed query into a terminal state
///
/// `NotConfigured` and `NotFound` use `missing`; the rest are unavailable.
fn degrade<T>(context: &str, err: ContentError, missing: PageState<T>) -> PageState<T> {
    match err {
        ContentError::NotConfigured | ContentError::NotFound { .. } => {
            tracing::debug!("{}: {}", context, err);
            missing
        }
        ContentError::Unavailable(_) | ContentError::Decode(_) => {
            tracing::warn!("{}: {}", context, err);
            PageState::Unavailable {
                message: "We couldn't load this content right now.".to_string(),
            }
        }
    }
}

/// The work index: every category
pub fn load_work_index(client: &ContentClient) -> PageState<Vec<Category>> {
    match client.categories() {
        Ok(categories) if categories.is_empty() => PageState::empty("No categories found."),
        Ok(categories) => PageState::Ready(categories),
        Err(err) => degrade(
            "load_work_index",
            err,
            PageState::empty("No categories found."),
        ),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryPage {
    pub category: Category,
    pub projects: Vec<Project>,
}

/// A category page; a category with no projects is an explicit empty state
pub fn load_category(client: &ContentClient, uid: &str) -> PageState<CategoryPage> {
    let missing = || PageState::not_found("Category not found.", Route::Work);

    let category = match client.category(uid) {
        Ok(category) => category,
        Err(err) => return degrade("load_category", err, missing()),
    };

    match client.projects_in(uid) {
        Ok(projects) if projects.is_empty() => PageState::Empty {
            message: format!("No projects in {} yet.", category.title),
        },
        Ok(projects) => PageState::Ready(CategoryPage { category, projects }),
        Err(err) => degrade(
            "load_category",
            err,
            PageState::empty("No projects found."),
        ),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectPage {
    pub project: Project,
    pub gallery: Vec<GalleryImage>,
}

/// A project detail page
///
/// A missing route parameter is not-found with a link back to the work index.
/// A missing or failed gallery falls back to the images embedded in the
/// project.
pub fn load_project(client: &ContentClient, uid: Option<&str>) -> PageState<ProjectPage> {
    let missing = || PageState::not_found("Project not found.", Route::Work);

    let Some(uid) = uid.filter(|uid| !uid.trim().is_empty()) else {
        tracing::debug!("load_project: missing project identifier");
        return missing();
    };

    let project = match client.project(uid) {
        Ok(project) => project,
        Err(err) => return degrade("load_project", err, missing()),
    };

    let gallery = match client.gallery(&project) {
        Ok(gallery) => gallery,
        Err(err) => {
            if err.is_not_found() {
                tracing::debug!("load_project: {}", err);
            } else {
                tracing::warn!("load_project: gallery unavailable: {}", err);
            }
            project.gallery.clone()
        }
    };

    PageState::Ready(ProjectPage { project, gallery })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::fixture::StaticContent;
    use crate::source::ContentSource;

    fn studio() -> ContentClient {
        ContentClient::new(StaticContent::studio().unwrap())
    }

    /// A source whose every call fails in transit
    struct Offline;

    impl ContentSource for Offline {
        fn list_categories(&self) -> Result<Vec<Category>> {
            Err(ContentError::Unavailable("offline".into()))
        }
        fn category_by_uid(&self, _: &str) -> Result<Category> {
            Err(ContentError::Unavailable("offline".into()))
        }
        fn projects_by_category(&self, _: &str) -> Result<Vec<Project>> {
            Err(ContentError::Unavailable("offline".into()))
        }
        fn project_by_uid(&self, _: &str) -> Result<Project> {
            Err(ContentError::Unavailable("offline".into()))
        }
        fn project_by_id(&self, id: &str) -> Result<Project> {
            panic!("fallback lookup ran for {id}")
        }
        fn gallery(&self, _: &str) -> Result<Vec<GalleryImage>> {
            Err(ContentError::Unavailable("offline".into()))
        }
    }

    #[test]
    fn test_hospitality_without_projects_is_explicit_empty() {
        let state = load_category(&studio(), "hospitality");
        assert_eq!(
            state,
            PageState::Empty {
                message: "No projects in Hospitality yet.".to_string()
            }
        );
    }

    #[test]
    fn test_category_ready_and_missing() {
        let client = studio();
        let page = load_category(&client, "residential");
        assert_eq!(page.ready().map(|p| p.projects.len()), Some(2));

        let missing = load_category(&client, "brutalist");
        assert!(matches!(missing, PageState::NotFound { back: Route::Work, .. }));
    }

    #[test]
    fn test_unconfigured_degrades_to_empty() {
        let client = ContentClient::unconfigured();
        assert_eq!(
            load_work_index(&client).message(),
            Some("No categories found.")
        );
        assert!(matches!(
            load_project(&client, Some("harbour-house")),
            PageState::NotFound { .. }
        ));
    }

    #[test]
    fn test_project_without_identifier() {
        let state = load_project(&studio(), None);
        assert_eq!(
            state,
            PageState::NotFound {
                message: "Project not found.".to_string(),
                back: Route::Work
            }
        );
        assert!(matches!(load_project(&studio(), Some("  ")), PageState::NotFound { .. }));
    }

    #[test]
    fn test_project_primary_then_fallback() {
        let client = studio();
        let by_uid = load_project(&client, Some("harbour-house"));
        assert_eq!(by_uid.ready().map(|p| p.gallery.len()), Some(2));

        let by_id = load_project(&client, Some("p-0003"));
        assert_eq!(
            by_id.ready().map(|p| p.project.uid.as_str()),
            Some("foundry-studios")
        );

        // No stored gallery, so the embedded images are used
        let embedded = load_project(&client, Some("river-library"));
        assert_eq!(embedded.ready().map(|p| p.gallery.len()), Some(0));
    }

    #[test]
    fn test_transport_failure_is_unavailable_without_fallback() {
        let client = ContentClient::new(Offline);
        assert!(matches!(
            load_project(&client, Some("harbour-house")),
            PageState::Unavailable { .. }
        ));
        assert!(matches!(load_work_index(&client), PageState::Unavailable { .. }));
    }

    #[test]
    fn test_states_are_terminal() {
        let state: PageState<()> = PageState::Loading;
        assert!(!state.is_terminal());
        assert!(load_work_index(&studio()).is_terminal());
    }
}
