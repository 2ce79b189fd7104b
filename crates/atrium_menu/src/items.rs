//! Menu content: navigation items and social links
//!
//! Social links are recognised by label. A label containing a known platform
//! name (case-insensitive) picks that platform's icon, and the platform's
//! canonical URL from the [`SocialDirectory`] replaces the supplied URL.

use atrium_core::Route;
use rustc_hash::FxHashMap;

/// A navigation entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub aria_label: String,
    pub route: Route,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, route: Route) -> Self {
        let label = label.into();
        Self {
            aria_label: format!("Go to {}", label.to_lowercase()),
            label,
            route,
        }
    }

    pub fn aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = aria_label.into();
        self
    }
}

/// A social link as supplied by the page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialItem {
    pub label: String,
    pub url: String,
}

impl SocialItem {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Platforms the menu knows an icon and canonical URL for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    Instagram,
    LinkedIn,
    Facebook,
    Twitter,
    YouTube,
    Pinterest,
    Behance,
    Vimeo,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 8] = [
        SocialPlatform::Instagram,
        SocialPlatform::LinkedIn,
        SocialPlatform::Facebook,
        SocialPlatform::Twitter,
        SocialPlatform::YouTube,
        SocialPlatform::Pinterest,
        SocialPlatform::Behance,
        SocialPlatform::Vimeo,
    ];

    fn keywords(self) -> &'static [&'static str] {
        match self {
            SocialPlatform::Instagram => &["instagram"],
            SocialPlatform::LinkedIn => &["linkedin"],
            SocialPlatform::Facebook => &["facebook"],
            SocialPlatform::Twitter => &["twitter"],
            SocialPlatform::YouTube => &["youtube"],
            SocialPlatform::Pinterest => &["pinterest"],
            SocialPlatform::Behance => &["behance"],
            SocialPlatform::Vimeo => &["vimeo"],
        }
    }

    /// Recognise a platform from a display label
    ///
    /// Substring match, except the bare label "x", which would otherwise match
    /// any label containing the letter.
    pub fn detect(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        if label == "x" {
            return Some(SocialPlatform::Twitter);
        }
        Self::ALL
            .into_iter()
            .find(|platform| platform.keywords().iter().any(|k| label.contains(k)))
    }

    /// Icon name understood by the renderer
    pub fn icon(self) -> &'static str {
        match self {
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::LinkedIn => "linkedin",
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::YouTube => "youtube",
            SocialPlatform::Pinterest => "pinterest",
            SocialPlatform::Behance => "behance",
            SocialPlatform::Vimeo => "vimeo",
        }
    }

    fn default_url(self) -> &'static str {
        match self {
            SocialPlatform::Instagram => "https://www.instagram.com/",
            SocialPlatform::LinkedIn => "https://www.linkedin.com/",
            SocialPlatform::Facebook => "https://www.facebook.com/",
            SocialPlatform::Twitter => "https://x.com/",
            SocialPlatform::YouTube => "https://www.youtube.com/",
            SocialPlatform::Pinterest => "https://www.pinterest.com/",
            SocialPlatform::Behance => "https://www.behance.net/",
            SocialPlatform::Vimeo => "https://vimeo.com/",
        }
    }
}

/// Canonical URL per platform
#[derive(Clone, Debug, Default)]
pub struct SocialDirectory {
    urls: FxHashMap<SocialPlatform, String>,
}

impl SocialDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, platform: SocialPlatform, url: impl Into<String>) -> Self {
        self.urls.insert(platform, url.into());
        self
    }

    pub fn canonical_url(&self, platform: SocialPlatform) -> &str {
        self.urls
            .get(&platform)
            .map(String::as_str)
            .unwrap_or_else(|| platform.default_url())
    }

    /// Resolve a supplied social link into what the menu renders
    pub fn resolve(&self, item: &SocialItem) -> ResolvedSocial {
        match SocialPlatform::detect(&item.label) {
            Some(platform) => ResolvedSocial {
                label: item.label.clone(),
                platform: Some(platform),
                icon: Some(platform.icon()),
                url: self.canonical_url(platform).to_string(),
            },
            None => ResolvedSocial {
                label: item.label.clone(),
                platform: None,
                icon: None,
                url: item.url.clone(),
            },
        }
    }
}

impl FromIterator<(SocialPlatform, String)> for SocialDirectory {
    fn from_iter<T: IntoIterator<Item = (SocialPlatform, String)>>(iter: T) -> Self {
        Self {
            urls: iter.into_iter().collect(),
        }
    }
}

/// A social link ready to render
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedSocial {
    pub label: String,
    pub platform: Option<SocialPlatform>,
    pub icon: Option<&'static str>,
    pub url: String,
}

/// Everything a menu displays
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuContent {
    pub items: Vec<MenuItem>,
    pub socials: Vec<SocialItem>,
}

impl MenuContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn social(mut self, social: SocialItem) -> Self {
        self.socials.push(social);
        self
    }

    /// The studio's standard navigation
    pub fn studio() -> Self {
        Self::new()
            .item(MenuItem::new("About", Route::About))
            .item(MenuItem::new("Work", Route::Work))
            .item(MenuItem::new("Future Thinking", Route::FutureThinking))
            .item(MenuItem::new("News", Route::News))
            .item(MenuItem::new("Contact", Route::Contact))
            .social(SocialItem::new("Instagram", "#"))
            .social(SocialItem::new("LinkedIn", "#"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_is_case_insensitive_substring() {
        assert_eq!(
            SocialPlatform::detect("Follow us on INSTAGRAM"),
            Some(SocialPlatform::Instagram)
        );
        assert_eq!(
            SocialPlatform::detect("linkedIn"),
            Some(SocialPlatform::LinkedIn)
        );
        assert_eq!(SocialPlatform::detect(" X "), Some(SocialPlatform::Twitter));
        assert_eq!(SocialPlatform::detect("Newsletter"), None);
        assert_eq!(SocialPlatform::detect("Xerox"), None);
    }

    #[test]
    fn test_recognised_platform_overrides_url() {
        let directory = SocialDirectory::new().with_url(
            SocialPlatform::Instagram,
            "https://www.instagram.com/atrium.studio",
        );

        let resolved = directory.resolve(&SocialItem::new("Instagram", "https://example.com"));
        assert_eq!(resolved.url, "https://www.instagram.com/atrium.studio");
        assert_eq!(resolved.icon, Some("instagram"));

        let fallback = directory.resolve(&SocialItem::new("Vimeo", "https://example.com"));
        assert_eq!(fallback.url, "https://vimeo.com/");
    }

    #[test]
    fn test_unknown_label_keeps_supplied_url() {
        let resolved =
            SocialDirectory::new().resolve(&SocialItem::new("Journal", "https://journal.example"));
        assert_eq!(resolved.platform, None);
        assert_eq!(resolved.icon, None);
        assert_eq!(resolved.url, "https://journal.example");
    }

    #[test]
    fn test_aria_label_defaults_from_label() {
        let item = MenuItem::new("Future Thinking", Route::FutureThinking);
        assert_eq!(item.aria_label, "Go to future thinking");
        assert_eq!(item.aria_label("Our research").aria_label, "Our research");
    }
}
