//! Site configuration
//!
//! Read from `atrium.toml`. Every field has a default, so an empty or
//! missing file yields a working site.
//!
//! ```toml
//! [site]
//! name = "Atrium Studio"
//!
//! [content]
//! repository = "atrium-studio"
//! fixture = "content/export.json"
//!
//! [viewport]
//! narrow_breakpoint = 768
//!
//! [menu]
//! preset = "staggered"
//! position = "right"
//! colors = ["#B19EEF", "#5227FF"]
//! accent = "#5227FF"
//! display_numbering = true
//!
//! [socials]
//! instagram = "https://www.instagram.com/atrium.studio"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use atrium_content::{ContentClient, StaticContent};
use atrium_core::{Color, DEFAULT_NARROW_BREAKPOINT};
use atrium_menu::{MenuSkin, PanelSide, SocialDirectory, SocialPlatform};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// File name looked up by [`SiteConfig::load_from_dir`]
pub const CONFIG_FILE: &str = "atrium.toml";

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub content: ContentSection,
    #[serde(default)]
    pub viewport: ViewportSection,
    #[serde(default)]
    pub menu: MenuSection,
    /// Canonical profile URL per platform name
    #[serde(default)]
    pub socials: FxHashMap<String, String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SiteSection {
    #[serde(default = "default_site_name")]
    pub name: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: default_site_name(),
        }
    }
}

fn default_site_name() -> String {
    "Atrium Studio".to_string()
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ContentSection {
    /// Content repository; empty means content is not configured
    #[serde(default = "default_repository")]
    pub repository: String,
    /// Path of a JSON export; the bundled export is used when absent
    #[serde(default)]
    pub fixture: Option<PathBuf>,
}

impl Default for ContentSection {
    fn default() -> Self {
        Self {
            repository: default_repository(),
            fixture: None,
        }
    }
}

fn default_repository() -> String {
    "atrium-studio".to_string()
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ViewportSection {
    #[serde(default = "default_breakpoint")]
    pub narrow_breakpoint: f32,
}

impl Default for ViewportSection {
    fn default() -> Self {
        Self {
            narrow_breakpoint: default_breakpoint(),
        }
    }
}

fn default_breakpoint() -> f32 {
    DEFAULT_NARROW_BREAKPOINT
}

/// Desktop menu settings; unset fields keep the preset's values
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MenuSection {
    #[serde(default = "default_desktop_preset")]
    pub preset: String,
    #[serde(default = "default_mobile_preset")]
    pub mobile_preset: String,
    #[serde(default)]
    pub position: Option<PanelSide>,
    #[serde(default)]
    pub colors: Option<Vec<Color>>,
    #[serde(default)]
    pub accent: Option<Color>,
    #[serde(default)]
    pub toggle_color: Option<Color>,
    #[serde(default)]
    pub open_toggle_color: Option<Color>,
    #[serde(default)]
    pub change_color_on_open: Option<bool>,
    #[serde(default)]
    pub close_on_click_away: Option<bool>,
    #[serde(default)]
    pub display_numbering: Option<bool>,
    #[serde(default)]
    pub display_socials: Option<bool>,
}

impl Default for MenuSection {
    fn default() -> Self {
        Self {
            preset: default_desktop_preset(),
            mobile_preset: default_mobile_preset(),
            position: None,
            colors: None,
            accent: None,
            toggle_color: None,
            open_toggle_color: None,
            change_color_on_open: None,
            close_on_click_away: None,
            display_numbering: None,
            display_socials: None,
        }
    }
}

fn default_desktop_preset() -> String {
    "staggered".to_string()
}

fn default_mobile_preset() -> String {
    "mobile".to_string()
}

fn preset(name: &str) -> Result<MenuSkin> {
    MenuSkin::preset(name)
        .ok_or_else(|| AppError::InvalidConfig(format!("unknown menu preset '{}'", name)))
}

impl MenuSection {
    /// Desktop skin: the preset with this section's overrides applied
    pub fn desktop_skin(&self) -> Result<MenuSkin> {
        let mut skin = preset(&self.preset)?;
        if let Some(side) = self.position {
            skin.side = side;
        }
        if let Some(colors) = &self.colors {
            skin.layer_colors = colors.clone();
        }
        if let Some(accent) = self.accent {
            skin.accent_color = accent;
        }
        if let Some(color) = self.toggle_color {
            skin.toggle_color = color;
        }
        if let Some(color) = self.open_toggle_color {
            skin.toggle_open_color = color;
        }
        if let Some(change) = self.change_color_on_open {
            skin.change_toggle_color = change;
        }
        if let Some(close) = self.close_on_click_away {
            skin.close_on_click_away = close;
        }
        if let Some(numbering) = self.display_numbering {
            skin.display_numbering = numbering;
        }
        if let Some(socials) = self.display_socials {
            skin.display_socials = socials;
        }
        Ok(skin)
    }

    pub fn mobile_skin(&self) -> Result<MenuSkin> {
        preset(&self.mobile_preset)
    }
}

impl SiteConfig {
    /// Load `atrium.toml` from `dir`, or the defaults if there is none
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(
                "SiteConfig - no {} in {}, using defaults",
                CONFIG_FILE,
                dir.display()
            );
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml(&text).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        // Relative fixture paths are relative to the config file
        if let (Some(fixture), Some(dir)) = (config.content.fixture.as_mut(), path.parent()) {
            if fixture.is_relative() {
                *fixture = dir.join(&*fixture);
            }
        }
        Ok(config)
    }

    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Build the content client the config describes
    pub fn content_client(&self) -> Result<ContentClient> {
        if self.content.repository.trim().is_empty() {
            tracing::warn!("SiteConfig - content repository not configured");
            return Ok(ContentClient::unconfigured());
        }

        let content = match &self.content.fixture {
            Some(path) => StaticContent::from_path(path)?,
            None => StaticContent::studio()?,
        };
        Ok(ContentClient::new(content))
    }

    /// Canonical social URLs; unknown platform names are skipped
    pub fn social_directory(&self) -> SocialDirectory {
        self.socials
            .iter()
            .filter_map(|(name, url)| match SocialPlatform::detect(name) {
                Some(platform) => Some((platform, url.clone())),
                None => {
                    tracing::warn!("SiteConfig - unknown social platform '{}'", name);
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config.site.name, "Atrium Studio");
        assert_eq!(config.viewport.narrow_breakpoint, 768.0);
        assert_eq!(config.menu.desktop_skin().unwrap(), MenuSkin::staggered());
        assert_eq!(config.menu.mobile_skin().unwrap(), MenuSkin::mobile());
        assert!(config.content_client().unwrap().is_configured());
    }

    #[test]
    fn test_menu_overrides_apply_to_preset() {
        let config = SiteConfig::from_toml(
            r##"
            [menu]
            preset = "benoy"
            position = "left"
            colors = ["#111111", "#222222", "#333333"]
            display_socials = false
            "##,
        )
        .unwrap();

        let skin = config.menu.desktop_skin().unwrap();
        assert_eq!(skin.side, PanelSide::Left);
        assert_eq!(skin.layer_colors.len(), 3);
        assert!(!skin.display_socials);
        assert!(skin.edge_handle.is_some());
    }

    #[test]
    fn test_unknown_preset_is_invalid() {
        let config = SiteConfig::from_toml("[menu]\npreset = \"brutalist\"").unwrap();
        assert!(matches!(
            config.menu.desktop_skin(),
            Err(AppError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_blank_repository_is_unconfigured() {
        let config = SiteConfig::from_toml("[content]\nrepository = \"\"").unwrap();
        assert!(!config.content_client().unwrap().is_configured());
    }

    #[test]
    fn test_socials_map_to_platforms() {
        let config = SiteConfig::from_toml(
            r#"
            [socials]
            instagram = "https://www.instagram.com/atrium.studio"
            myspace = "https://myspace.com/atrium"
            "#,
        )
        .unwrap();
        let directory = config.social_directory();
        assert_eq!(
            directory.canonical_url(SocialPlatform::Instagram),
            "https://www.instagram.com/atrium.studio"
        );
    }

    #[test]
    fn test_invalid_color_fails_to_parse() {
        assert!(SiteConfig::from_toml("[menu]\naccent = \"purple\"").is_err());
    }
}
