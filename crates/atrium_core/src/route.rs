//! Logical site destinations
//!
//! The site navigates to a small fixed set of pages plus two dynamic
//! families (work categories and work projects). Routes render to and parse
//! from URL paths; anything unrecognised parses to [`Route::NotFound`].

use std::fmt;

/// A logical destination within the site
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    About,
    Work,
    FutureThinking,
    News,
    Contact,
    /// A work category, by content uid
    WorkCategory(String),
    /// A single project, by content uid
    WorkProject(String),
    NotFound,
}

impl Route {
    /// URL path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Work => "/work".to_string(),
            Route::FutureThinking => "/future-thinking".to_string(),
            Route::News => "/news".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::WorkCategory(uid) => format!("/work/{uid}"),
            Route::WorkProject(uid) => format!("/projects/{uid}"),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Parse a URL path, ignoring query string, fragment and trailing slashes
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Landing,
            ["about"] => Route::About,
            ["work"] => Route::Work,
            ["future-thinking"] => Route::FutureThinking,
            ["news"] => Route::News,
            ["contact"] => Route::Contact,
            ["work", uid] => Route::WorkCategory((*uid).to_string()),
            ["projects", uid] => Route::WorkProject((*uid).to_string()),
            _ => Route::NotFound,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Receiver of navigation intents (the router)
pub trait Navigator {
    fn navigate(&mut self, route: &Route);
}

impl Navigator for Vec<Route> {
    fn navigate(&mut self, route: &Route) {
        self.push(route.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_routes() {
        assert_eq!(Route::parse("/"), Route::Landing);
        assert_eq!(Route::parse("/about/"), Route::About);
        assert_eq!(Route::parse("/future-thinking"), Route::FutureThinking);
        assert_eq!(Route::parse("/contact?ref=menu"), Route::Contact);
    }

    #[test]
    fn test_dynamic_routes() {
        assert_eq!(
            Route::parse("/work/hospitality"),
            Route::WorkCategory("hospitality".into())
        );
        assert_eq!(
            Route::parse("/projects/harbour-house#gallery"),
            Route::WorkProject("harbour-house".into())
        );
        assert_eq!(
            Route::WorkProject("harbour-house".into()).path(),
            "/projects/harbour-house"
        );
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/work/a/b"), Route::NotFound);
        assert_eq!(Route::parse("/blog"), Route::NotFound);
    }
}
