//! Scroll-linked animated counter
//!
//! Counts from zero up to its end value the first time enough of it scrolls
//! into view. Scrolling away and back never restarts it.

use atrium_animation::{
    Easing, Property, SchedulerHandle, TargetId, Timeline, TimelineSlot, Tween, VisualProps,
};

/// Fraction of the counter that must be visible before it starts
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.5;

pub struct AnimatedCounter {
    handle: SchedulerHandle,
    target: Option<TargetId>,
    label: String,
    end: f32,
    suffix: String,
    duration_ms: f32,
    threshold: f32,
    started: bool,
    slot: TimelineSlot,
}

impl AnimatedCounter {
    pub fn new(handle: SchedulerHandle, label: impl Into<String>, end: f32) -> Self {
        let target = handle.register_target(VisualProps::default());
        Self {
            slot: TimelineSlot::new(handle.clone()),
            handle,
            target,
            label: label.into(),
            end,
            suffix: String::new(),
            duration_ms: 2000.0,
            threshold: DEFAULT_VISIBILITY_THRESHOLD,
            started: false,
        }
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Report how much of the counter is visible (0.0 to 1.0)
    ///
    /// Returns true on the call that starts the count.
    pub fn on_visibility(&mut self, ratio: f32) -> bool {
        if self.started || ratio < self.threshold {
            return false;
        }
        let Some(target) = self.target else {
            return false;
        };

        let mut timeline = Timeline::new();
        timeline.add(
            0.0,
            Tween::from_to(target, Property::Value, 0.0, self.end)
                .duration(self.duration_ms)
                .easing(Easing::Power3Out),
        );
        self.slot.cancel_and_replace(timeline);
        self.started = true;
        tracing::debug!("AnimatedCounter - '{}' counting to {}", self.label, self.end);
        true
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> f32 {
        self.target
            .and_then(|target| self.handle.get_scalar(target, Property::Value))
            .unwrap_or(0.0)
    }

    /// Current value as shown on the page
    pub fn display(&self) -> String {
        format!("{}{}", self.value().round() as i64, self.suffix)
    }
}

impl Drop for AnimatedCounter {
    fn drop(&mut self) {
        self.slot.cancel();
        if let Some(target) = self.target.take() {
            self.handle.remove_target(target);
        }
    }
}
