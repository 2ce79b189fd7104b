//! Page models for every route

use std::fmt;

use atrium_content::{
    load_category, load_project, load_work_index, Category, CategoryPage, ContentClient,
    PageState, ProjectPage,
};
use atrium_core::Route;

/// A headline figure on the landing page
#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: f32,
    pub suffix: &'static str,
}

pub const LANDING_STATS: [Stat; 3] = [
    Stat {
        label: "Years in practice",
        value: 25.0,
        suffix: "",
    },
    Stat {
        label: "Completed projects",
        value: 140.0,
        suffix: "+",
    },
    Stat {
        label: "Design awards",
        value: 32.0,
        suffix: "",
    },
];

/// What the site shows for a route
#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    Landing { stats: Vec<Stat> },
    About,
    Work(PageState<Vec<Category>>),
    Category(PageState<CategoryPage>),
    Project(PageState<ProjectPage>),
    FutureThinking,
    News,
    Contact,
    NotFound { message: String, back: Route },
}

impl Page {
    /// Resolve `route`, loading any content it needs
    pub fn resolve(route: &Route, client: &ContentClient) -> Page {
        match route {
            Route::Landing => Page::Landing {
                stats: LANDING_STATS.to_vec(),
            },
            Route::About => Page::About,
            Route::Work => Page::Work(load_work_index(client)),
            Route::WorkCategory(uid) => Page::Category(load_category(client, uid)),
            Route::WorkProject(uid) => Page::Project(load_project(client, Some(uid))),
            Route::FutureThinking => Page::FutureThinking,
            Route::News => Page::News,
            Route::Contact => Page::Contact,
            Route::NotFound => Page::NotFound {
                message: "This page doesn't exist.".to_string(),
                back: Route::Landing,
            },
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Landing { .. } => "Home",
            Page::About => "About",
            Page::Work(_) => "Work",
            Page::Category(_) => "Work category",
            Page::Project(_) => "Project",
            Page::FutureThinking => "Future Thinking",
            Page::News => "News",
            Page::Contact => "Contact",
            Page::NotFound { .. } => "Not found",
        }
    }
}

fn write_state<T>(
    f: &mut fmt::Formatter<'_>,
    state: &PageState<T>,
    ready: impl FnOnce(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    match state {
        PageState::Loading => writeln!(f, "  loading"),
        PageState::Ready(value) => ready(f, value),
        PageState::Empty { message } => writeln!(f, "  {}", message),
        PageState::NotFound { message, back } => {
            writeln!(f, "  {}", message)?;
            writeln!(f, "  back to {}", back.path())
        }
        PageState::Unavailable { message } => writeln!(f, "  {}", message),
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;
        match self {
            Page::Landing { stats } => {
                for stat in stats {
                    writeln!(f, "  {}{} {}", stat.value, stat.suffix, stat.label)?;
                }
                Ok(())
            }
            Page::Work(state) => write_state(f, state, |f, categories| {
                for category in categories {
                    let route = Route::WorkCategory(category.uid.clone());
                    writeln!(f, "  {} ({})", category.title, route)?;
                }
                Ok(())
            }),
            Page::Category(state) => write_state(f, state, |f, page| {
                writeln!(f, "  {}", page.category.title)?;
                for project in &page.projects {
                    let route = Route::WorkProject(project.uid.clone());
                    writeln!(f, "  - {} ({})", project.title, route)?;
                }
                Ok(())
            }),
            Page::Project(state) => write_state(f, state, |f, page| {
                let project = &page.project;
                writeln!(f, "  {}", project.title)?;
                if let Some(category) = &project.category {
                    writeln!(f, "  category: {}", category.title)?;
                }
                if let Some(location) = &project.location {
                    writeln!(f, "  location: {}", location)?;
                }
                if let Some(year) = project.year {
                    writeln!(f, "  year: {}", year)?;
                }
                writeln!(f, "  gallery: {} image(s)", page.gallery.len())
            }),
            Page::NotFound { message, back } => {
                writeln!(f, "  {}", message)?;
                writeln!(f, "  back to {}", back.path())
            }
            Page::About | Page::FutureThinking | Page::News | Page::Contact => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_content::StaticContent;

    fn studio() -> ContentClient {
        ContentClient::new(StaticContent::studio().unwrap())
    }

    #[test]
    fn test_every_route_resolves() {
        let client = studio();
        for path in [
            "/",
            "/about",
            "/work",
            "/work/residential",
            "/projects/harbour-house",
            "/future-thinking",
            "/news",
            "/contact",
            "/nowhere/at/all",
        ] {
            let page = Page::resolve(&Route::parse(path), &client);
            assert!(!page.to_string().is_empty(), "{path}");
        }
    }

    #[test]
    fn test_unknown_path_is_not_found_page() {
        let page = Page::resolve(&Route::parse("/studio/team"), &studio());
        assert!(matches!(page, Page::NotFound { back: Route::Landing, .. }));
        assert!(page.to_string().contains("back to /"));
    }

    #[test]
    fn test_empty_category_renders_message() {
        let page = Page::resolve(&Route::WorkCategory("hospitality".into()), &studio());
        assert!(page.to_string().contains("No projects in Hospitality yet."));
    }
}
