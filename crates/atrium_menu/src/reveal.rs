//! Content revealer
//!
//! Labels rise and unrotate into place once the panel is partway in; the
//! numbering fades in just behind them; the socials block follows later.
//! Closing resets every revealed property instantly to its baseline.

use atrium_animation::{Easing, Property, SchedulerHandle, Timeline, Tween};

use crate::registry::ElementRegistry;
use crate::skin::MenuSkin;

/// Label offset (% of its own height) while hidden
pub const LABEL_HIDDEN_Y_PERCENT: f32 = 140.0;
/// Label rotation (degrees) while hidden
pub const LABEL_HIDDEN_ROTATE: f32 = 10.0;
/// Social link offset (px) while hidden
pub const SOCIAL_LINK_HIDDEN_Y: f32 = 25.0;

/// Start times of each reveal group
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSchedule {
    pub labels_start_ms: f32,
    pub numbers_start_ms: f32,
    pub socials_start_ms: f32,
    pub social_links_start_ms: f32,
}

impl RevealSchedule {
    pub fn new(panel_insert_ms: f32, skin: &MenuSkin) -> Self {
        let timing = &skin.timing;
        let labels_start_ms =
            panel_insert_ms + timing.panel_duration_ms * timing.items_start_fraction;
        let socials_start_ms =
            panel_insert_ms + timing.panel_duration_ms * timing.socials_start_fraction;
        Self {
            labels_start_ms,
            numbers_start_ms: labels_start_ms + timing.number_offset_ms,
            socials_start_ms,
            social_links_start_ms: socials_start_ms + timing.social_link_offset_ms,
        }
    }
}

/// Put every item back at its hidden baseline
pub fn reset(handle: &SchedulerHandle, registry: &ElementRegistry) {
    let labels = registry.item_labels().iter().copied();
    handle.set_all(labels.clone(), Property::YPercent, LABEL_HIDDEN_Y_PERCENT);
    handle.set_all(labels, Property::Rotate, LABEL_HIDDEN_ROTATE);

    handle.set_all(
        registry.item_numbers().iter().copied(),
        Property::Opacity,
        0.0,
    );

    if let Some(title) = registry.social_title() {
        handle.set(title, Property::Opacity, 0.0);
    }

    let links = registry.social_links().iter().copied();
    handle.set_all(links.clone(), Property::Y, SOCIAL_LINK_HIDDEN_Y);
    handle.set_all(links, Property::Opacity, 0.0);
}

/// Add the content reveal to an open timeline
pub fn schedule(
    timeline: &mut Timeline,
    registry: &ElementRegistry,
    skin: &MenuSkin,
    panel_insert_ms: f32,
) -> RevealSchedule {
    let timing = skin.timing;
    let at = RevealSchedule::new(panel_insert_ms, skin);

    let labels = registry.item_labels().iter().copied();
    timeline.stagger(at.labels_start_ms, timing.item_stagger_ms, labels.clone(), |label| {
        Tween::from_to(label, Property::YPercent, LABEL_HIDDEN_Y_PERCENT, 0.0)
            .duration(timing.item_duration_ms)
            .easing(Easing::Power4Out)
    });
    timeline.stagger(at.labels_start_ms, timing.item_stagger_ms, labels, |label| {
        Tween::from_to(label, Property::Rotate, LABEL_HIDDEN_ROTATE, 0.0)
            .duration(timing.item_duration_ms)
            .easing(Easing::Power4Out)
    });

    if skin.display_numbering {
        timeline.stagger(
            at.numbers_start_ms,
            timing.number_stagger_ms,
            registry.item_numbers().iter().copied(),
            |number| {
                Tween::from_to(number, Property::Opacity, 0.0, 1.0)
                    .duration(timing.number_duration_ms)
                    .easing(Easing::Power2Out)
            },
        );
    }

    if skin.display_socials {
        if let Some(title) = registry.social_title() {
            timeline.add(
                at.socials_start_ms,
                Tween::from_to(title, Property::Opacity, 0.0, 1.0)
                    .duration(timing.social_title_duration_ms)
                    .easing(Easing::Power2Out),
            );
        }

        let links = registry.social_links().iter().copied();
        timeline.stagger(
            at.social_links_start_ms,
            timing.social_link_stagger_ms,
            links.clone(),
            |link| {
                Tween::from_to(link, Property::Y, SOCIAL_LINK_HIDDEN_Y, 0.0)
                    .duration(timing.social_link_duration_ms)
                    .easing(Easing::Power3Out)
            },
        );
        timeline.stagger(
            at.social_links_start_ms,
            timing.social_link_stagger_ms,
            links,
            |link| {
                Tween::from_to(link, Property::Opacity, 0.0, 1.0)
                    .duration(timing.social_link_duration_ms)
                    .easing(Easing::Power3Out)
                    .clear_on_complete()
            },
        );
    }

    at
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ElementRole;
    use atrium_animation::{AnimationScheduler, VisualProps};

    #[test]
    fn test_schedule_follows_panel_insert() {
        let skin = MenuSkin::staggered();
        let at = RevealSchedule::new(220.0, &skin);
        assert!((at.labels_start_ms - (220.0 + 0.15 * 650.0)).abs() < 1e-3);
        assert!((at.numbers_start_ms - (at.labels_start_ms + 100.0)).abs() < 1e-3);
        assert!((at.socials_start_ms - (220.0 + 0.4 * 650.0)).abs() < 1e-3);
        assert!((at.social_links_start_ms - (at.socials_start_ms + 40.0)).abs() < 1e-3);
    }

    #[test]
    fn test_reveal_then_reset() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let mut registry = ElementRegistry::new();
        let label = handle.register_target(VisualProps::default()).unwrap();
        let number = handle.register_target(VisualProps::default()).unwrap();
        let link = handle.register_target(VisualProps::default()).unwrap();
        for (role, target) in [
            (ElementRole::ItemLabel, label),
            (ElementRole::ItemNumber, number),
            (ElementRole::SocialLink, link),
        ] {
            assert_eq!(registry.register(role, target), None);
        }

        reset(&handle, &registry);
        let baseline = handle.props(label).unwrap();
        assert_eq!(baseline.y_percent, LABEL_HIDDEN_Y_PERCENT);
        assert_eq!(baseline.rotate, LABEL_HIDDEN_ROTATE);

        let mut timeline = Timeline::new();
        schedule(&mut timeline, &registry, &MenuSkin::staggered(), 0.0);
        handle.play(timeline);
        scheduler.run_until_idle(16.0, 5_000.0);

        let revealed = handle.props(label).unwrap();
        assert_eq!((revealed.y_percent, revealed.rotate), (0.0, 0.0));
        assert_eq!(handle.props(number).unwrap().opacity, Some(1.0));
        // Link opacity override is cleared once revealed
        let link_props = handle.props(link).unwrap();
        assert_eq!(link_props.y, 0.0);
        assert_eq!(link_props.opacity, None);

        reset(&handle, &registry);
        assert_eq!(handle.props(label).unwrap(), baseline);
        assert_eq!(handle.props(link).unwrap().opacity, Some(0.0));
    }

    #[test]
    fn test_hidden_numbering_is_not_scheduled() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let mut registry = ElementRegistry::new();
        let number = handle.register_target(VisualProps::default()).unwrap();
        assert_eq!(registry.register(ElementRole::ItemNumber, number), None);

        let mut timeline = Timeline::new();
        schedule(&mut timeline, &registry, &MenuSkin::benoy(), 0.0);
        assert_eq!(timeline.entry_count(), 0);
    }
}
