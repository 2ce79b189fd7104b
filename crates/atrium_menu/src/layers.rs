//! Panel layer stack
//!
//! Background pre-layers sweep in one after another ahead of the panel,
//! producing a layered-curtain reveal. The panel always starts after the last
//! pre-layer has started.

use atrium_animation::{Easing, Property, SchedulerHandle, Timeline, Tween};
use atrium_core::Color;
use smallvec::SmallVec;

use crate::registry::ElementRegistry;
use crate::skin::{MenuSkin, MenuTiming};

/// Most pre-layers a menu renders
pub const MAX_LAYERS: usize = 4;

/// Used when a skin supplies no layer colors
pub const DEFAULT_LAYER_COLORS: [Color; 2] = [
    Color::rgb(30.0 / 255.0, 30.0 / 255.0, 34.0 / 255.0),
    Color::rgb(53.0 / 255.0, 53.0 / 255.0, 60.0 / 255.0),
];

/// Normalize a skin's layer colors
///
/// At most [`MAX_LAYERS`] are kept. Exactly three drops the middle one, which
/// would otherwise read as an unbalanced band. An empty list falls back to
/// [`DEFAULT_LAYER_COLORS`].
pub fn normalize_layer_colors(colors: &[Color]) -> SmallVec<[Color; MAX_LAYERS]> {
    if colors.is_empty() {
        return DEFAULT_LAYER_COLORS.iter().copied().collect();
    }

    let mut layers: SmallVec<[Color; MAX_LAYERS]> =
        colors.iter().copied().take(MAX_LAYERS).collect();
    if layers.len() == 3 {
        layers.remove(1);
    }
    layers
}

/// When each part of the sweep starts, relative to the open timeline
#[derive(Clone, Debug, PartialEq)]
pub struct LayerSchedule {
    pub layer_starts: SmallVec<[f32; MAX_LAYERS]>,
    pub panel_insert_ms: f32,
}

impl LayerSchedule {
    pub fn new(layer_count: usize, timing: &MenuTiming) -> Self {
        let layer_starts: SmallVec<[f32; MAX_LAYERS]> = (0..layer_count)
            .map(|i| i as f32 * timing.layer_stagger_ms)
            .collect();
        let panel_insert_ms = layer_starts
            .last()
            .map(|last| last + timing.panel_gap_ms)
            .unwrap_or(0.0);
        Self {
            layer_starts,
            panel_insert_ms,
        }
    }
}

/// Horizontal offset (px) of the edge handle while the panel is open
pub fn edge_handle_open_x(skin: &MenuSkin) -> f32 {
    match skin.edge_handle {
        Some(handle) => skin.side.inward() * (skin.panel_width - handle.width).max(0.0),
        None => 0.0,
    }
}

/// Add the sweep-in to an open timeline
///
/// Every layer, the panel and the edge handle start from where they currently
/// are, so reopening during a close continues smoothly.
pub fn schedule_open(
    timeline: &mut Timeline,
    handle: &SchedulerHandle,
    registry: &ElementRegistry,
    skin: &MenuSkin,
) -> LayerSchedule {
    let timing = &skin.timing;
    let hidden = skin.side.hidden_offset();
    let current = |target| {
        handle
            .get_scalar(target, Property::XPercent)
            .unwrap_or(hidden)
    };

    let schedule = LayerSchedule::new(registry.pre_layers().len(), timing);
    for (&layer, &start) in registry.pre_layers().iter().zip(&schedule.layer_starts) {
        timeline.add(
            start,
            Tween::from_to(layer, Property::XPercent, current(layer), 0.0)
                .duration(timing.layer_duration_ms)
                .easing(Easing::Power4Out),
        );
    }

    if let Some(panel) = registry.panel() {
        timeline.add(
            schedule.panel_insert_ms,
            Tween::from_to(panel, Property::XPercent, current(panel), 0.0)
                .duration(timing.panel_duration_ms)
                .easing(Easing::Power4Out),
        );
    }

    if let Some(edge) = registry.edge_handle() {
        let from = handle.get_scalar(edge, Property::X).unwrap_or(0.0);
        timeline.add(
            schedule.panel_insert_ms,
            Tween::from_to(edge, Property::X, from, edge_handle_open_x(skin))
                .duration(timing.panel_duration_ms)
                .easing(Easing::Power4Out),
        );
    }

    schedule
}

/// Add the sweep-out to a close timeline: everything leaves together
pub fn schedule_close(timeline: &mut Timeline, registry: &ElementRegistry, skin: &MenuSkin) {
    let timing = &skin.timing;
    let hidden = skin.side.hidden_offset();

    for target in registry.sweep_targets() {
        timeline.add(
            0.0,
            Tween::to(target, Property::XPercent, hidden)
                .duration(timing.close_duration_ms)
                .easing(Easing::Power3In),
        );
    }

    if let Some(edge) = registry.edge_handle() {
        timeline.add(
            0.0,
            Tween::to(edge, Property::X, 0.0)
                .duration(timing.close_duration_ms)
                .easing(Easing::Power3In),
        );
    }
}
