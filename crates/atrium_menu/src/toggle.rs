//! Toggle button and click-away dismissal

use atrium_animation::{
    Easing, Property, SchedulerHandle, TargetId, Timeline, TimelineSlot, Tween,
};
use atrium_core::{Point, Rect};

use crate::skin::MenuSkin;

/// Logical icon state of the toggle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconState {
    #[default]
    Closed,
    Open,
}

/// What the toggle draws
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleGlyph {
    /// Two vertical bars
    PausedBars,
}

impl IconState {
    /// Both states draw the same glyph; only the accessible label differs
    pub fn glyph(self) -> ToggleGlyph {
        ToggleGlyph::PausedBars
    }

    pub fn aria_label(self) -> &'static str {
        match self {
            IconState::Closed => "Open menu",
            IconState::Open => "Close menu",
        }
    }
}

/// Toggle button state plus its color tween
pub struct ToggleControl {
    icon: IconState,
    color: TimelineSlot,
}

impl ToggleControl {
    pub fn new(handle: SchedulerHandle) -> Self {
        Self {
            icon: IconState::Closed,
            color: TimelineSlot::new(handle),
        }
    }

    pub fn icon(&self) -> IconState {
        self.icon
    }

    /// Flip the icon and, if the skin asks for it, tween the toggle color
    ///
    /// A newer color change kills the one still in flight.
    pub fn set_open(&mut self, open: bool, target: Option<TargetId>, skin: &MenuSkin) {
        self.icon = if open { IconState::Open } else { IconState::Closed };

        if !skin.change_toggle_color {
            return;
        }
        let Some(target) = target else {
            return;
        };

        let color = if open {
            skin.toggle_open_color
        } else {
            skin.toggle_color
        };
        let mut timeline = Timeline::new();
        timeline.add(
            skin.timing.color_delay_ms,
            Tween::to(target, Property::Color, color)
                .duration(skin.timing.color_duration_ms)
                .easing(Easing::Power2Out),
        );
        self.color.cancel_and_replace(timeline);
    }

    /// Kill any color tween in flight
    pub fn cancel(&mut self) {
        self.color.cancel();
    }

    pub fn is_animating(&self) -> bool {
        self.color.is_active()
    }
}

/// Pointer-down listener that dismisses the menu from outside it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickAway {
    attached: bool,
}

impl ClickAway {
    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether a pointer-down at `point` should close the menu
    ///
    /// Requires both regions to be known, so a half-mounted menu is never
    /// dismissed by accident.
    pub fn should_dismiss(&self, point: Point, panel: Option<Rect>, toggle: Option<Rect>) -> bool {
        if !self.attached {
            return false;
        }
        match (panel, toggle) {
            (Some(panel), Some(toggle)) => !panel.contains(point) && !toggle.contains(point),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_animation::{AnimationScheduler, VisualProps};

    #[test]
    fn test_icon_states_share_glyph() {
        assert_eq!(IconState::Closed.glyph(), IconState::Open.glyph());
        assert_ne!(IconState::Closed.aria_label(), IconState::Open.aria_label());
    }

    #[test]
    fn test_click_away_regions() {
        let panel = Rect::new(1000.0, 0.0, 440.0, 900.0);
        let toggle = Rect::new(1380.0, 20.0, 40.0, 40.0);
        let mut click_away = ClickAway::default();

        let outside = Point::new(200.0, 300.0);
        assert!(!click_away.should_dismiss(outside, Some(panel), Some(toggle)));

        click_away.attach();
        assert!(click_away.should_dismiss(outside, Some(panel), Some(toggle)));
        assert!(!click_away.should_dismiss(Point::new(1100.0, 300.0), Some(panel), Some(toggle)));
        assert!(!click_away.should_dismiss(outside, None, Some(toggle)));

        click_away.detach();
        assert!(!click_away.should_dismiss(outside, Some(panel), Some(toggle)));
    }

    #[test]
    fn test_pointer_on_toggle_never_dismisses() {
        // Toggle sits outside the panel, as on the staggered skin
        let panel = Rect::new(1000.0, 0.0, 440.0, 900.0);
        let toggle = Rect::new(920.0, 20.0, 40.0, 40.0);
        let mut click_away = ClickAway::default();
        click_away.attach();
        assert!(!click_away.should_dismiss(Point::new(940.0, 40.0), Some(panel), Some(toggle)));
    }

    #[test]
    fn test_newer_color_change_wins() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let target = handle.register_target(VisualProps::default()).unwrap();
        let skin = MenuSkin::staggered();

        let mut toggle = ToggleControl::new(handle.clone());
        toggle.set_open(true, Some(target), &skin);
        scheduler.tick_ms(200.0);
        toggle.set_open(false, Some(target), &skin);
        assert_eq!(scheduler.timeline_count(), 1);

        scheduler.run_until_idle(16.0, 2_000.0);
        assert_eq!(
            handle.get(target, Property::Color).and_then(|v| v.as_color()),
            Some(skin.toggle_color)
        );
        assert_eq!(toggle.icon(), IconState::Closed);
    }
}
