//! Menu skins
//!
//! Every menu variant on the site shares one orchestrator; what differs is
//! the skin: colors, panel side and width, which content groups show, and
//! the choreography timing. Presets cover the site's variants.

use atrium_core::Color;
use serde::{Deserialize, Serialize};

/// Edge of the viewport the panel slides in from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelSide {
    Left,
    #[default]
    Right,
}

impl PanelSide {
    /// `x_percent` at which the panel and its layers are fully hidden
    pub fn hidden_offset(self) -> f32 {
        match self {
            PanelSide::Left => -100.0,
            PanelSide::Right => 100.0,
        }
    }

    /// Sign of horizontal movement towards the viewport's interior
    pub fn inward(self) -> f32 {
        match self {
            PanelSide::Left => 1.0,
            PanelSide::Right => -1.0,
        }
    }
}

/// Always-visible handle that rides along the panel's leading edge
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeHandle {
    pub width: f32,
}

/// Choreography timing, all in milliseconds unless noted
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuTiming {
    pub layer_duration_ms: f32,
    /// Delay between consecutive pre-layers
    pub layer_stagger_ms: f32,
    /// Gap between the last pre-layer starting and the panel starting
    pub panel_gap_ms: f32,
    pub panel_duration_ms: f32,
    pub close_duration_ms: f32,
    pub item_duration_ms: f32,
    pub item_stagger_ms: f32,
    /// Fraction of the panel slide after which labels start revealing
    pub items_start_fraction: f32,
    /// Numbering starts this long after the labels
    pub number_offset_ms: f32,
    pub number_duration_ms: f32,
    pub number_stagger_ms: f32,
    /// Fraction of the panel slide after which the socials start
    pub socials_start_fraction: f32,
    pub social_title_duration_ms: f32,
    /// Links start this long after the social title
    pub social_link_offset_ms: f32,
    pub social_link_duration_ms: f32,
    pub social_link_stagger_ms: f32,
    /// Toggle color change waits this long so it doesn't compete with the slide
    pub color_delay_ms: f32,
    pub color_duration_ms: f32,
}

impl Default for MenuTiming {
    fn default() -> Self {
        Self {
            layer_duration_ms: 500.0,
            layer_stagger_ms: 70.0,
            panel_gap_ms: 80.0,
            panel_duration_ms: 650.0,
            close_duration_ms: 320.0,
            item_duration_ms: 1000.0,
            item_stagger_ms: 100.0,
            items_start_fraction: 0.15,
            number_offset_ms: 100.0,
            number_duration_ms: 600.0,
            number_stagger_ms: 80.0,
            socials_start_fraction: 0.4,
            social_title_duration_ms: 500.0,
            social_link_offset_ms: 40.0,
            social_link_duration_ms: 550.0,
            social_link_stagger_ms: 80.0,
            color_delay_ms: 180.0,
            color_duration_ms: 300.0,
        }
    }
}

/// Visual and behavioral descriptor for one menu variant
#[derive(Clone, Debug, PartialEq)]
pub struct MenuSkin {
    pub name: String,
    pub side: PanelSide,
    /// Pre-layer colors, normalized by the layer stack before use
    pub layer_colors: Vec<Color>,
    pub panel_color: Color,
    pub accent_color: Color,
    pub panel_width: f32,
    /// Toggle color while closed
    pub toggle_color: Color,
    /// Toggle color while open
    pub toggle_open_color: Color,
    pub change_toggle_color: bool,
    pub close_on_click_away: bool,
    pub display_numbering: bool,
    pub display_socials: bool,
    pub edge_handle: Option<EdgeHandle>,
    pub timing: MenuTiming,
}

impl MenuSkin {
    /// The layered-curtain menu used on desktop
    pub fn staggered() -> Self {
        Self {
            name: "staggered".to_string(),
            side: PanelSide::Right,
            layer_colors: vec![Color::from_hex(0xB19EEF), Color::from_hex(0x5227FF)],
            panel_color: Color::WHITE,
            accent_color: Color::from_hex(0x5227FF),
            panel_width: 420.0,
            toggle_color: Color::WHITE,
            toggle_open_color: Color::BLACK,
            change_toggle_color: true,
            close_on_click_away: true,
            display_numbering: true,
            display_socials: true,
            edge_handle: None,
            timing: MenuTiming::default(),
        }
    }

    /// Dark panel with a handle attached to its leading edge
    pub fn benoy() -> Self {
        Self {
            name: "benoy".to_string(),
            layer_colors: vec![Color::from_hex(0x2b2b2b), Color::from_hex(0x111111)],
            panel_color: Color::from_hex(0x0b0b0b),
            accent_color: Color::from_hex(0xc8b27d),
            panel_width: 480.0,
            toggle_open_color: Color::WHITE,
            change_toggle_color: false,
            display_numbering: false,
            edge_handle: Some(EdgeHandle { width: 64.0 }),
            ..Self::staggered()
        }
    }

    /// Full-width panel for narrow viewports
    pub fn mobile() -> Self {
        Self {
            name: "mobile".to_string(),
            layer_colors: vec![Color::from_hex(0x1e1e22)],
            panel_color: Color::from_hex(0x0b0b0b),
            accent_color: Color::from_hex(0xc8b27d),
            panel_width: 390.0,
            toggle_open_color: Color::WHITE,
            display_numbering: false,
            ..Self::staggered()
        }
    }

    /// Full-screen overlay sliding from the left
    pub fn overlay() -> Self {
        Self {
            name: "overlay".to_string(),
            side: PanelSide::Left,
            layer_colors: vec![Color::from_hex(0xf2efe9)],
            panel_color: Color::from_hex(0xfaf8f5),
            accent_color: Color::from_hex(0x1e1e22),
            panel_width: 1440.0,
            toggle_color: Color::BLACK,
            toggle_open_color: Color::BLACK,
            change_toggle_color: false,
            display_socials: false,
            ..Self::staggered()
        }
    }

    /// Four-band dark and gold curtain
    pub fn dark_luxury() -> Self {
        Self {
            name: "dark-luxury".to_string(),
            layer_colors: vec![
                Color::from_hex(0x3a2f1c),
                Color::from_hex(0x6b5631),
                Color::from_hex(0xa38a56),
                Color::from_hex(0x141414),
            ],
            panel_color: Color::from_hex(0x0b0b0b),
            accent_color: Color::from_hex(0xc8b27d),
            toggle_color: Color::from_hex(0xc8b27d),
            toggle_open_color: Color::WHITE,
            ..Self::staggered()
        }
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "staggered" => Some(Self::staggered()),
            "benoy" => Some(Self::benoy()),
            "mobile" => Some(Self::mobile()),
            "overlay" => Some(Self::overlay()),
            "dark-luxury" => Some(Self::dark_luxury()),
            _ => None,
        }
    }
}

impl Default for MenuSkin {
    fn default() -> Self {
        Self::staggered()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_offset_follows_side() {
        assert_eq!(PanelSide::Right.hidden_offset(), 100.0);
        assert_eq!(PanelSide::Left.hidden_offset(), -100.0);
        assert_eq!(PanelSide::Right.inward(), -1.0);
    }

    #[test]
    fn test_presets_resolve_by_name() {
        for name in ["staggered", "benoy", "mobile", "overlay", "dark-luxury"] {
            assert_eq!(MenuSkin::preset(name).map(|s| s.name), Some(name.to_string()));
        }
        assert!(MenuSkin::preset("brutalist").is_none());
    }
}
