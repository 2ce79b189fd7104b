//! Timeline orchestration
//!
//! A timeline is a set of tweens positioned at absolute offsets (ms) from the
//! timeline start. Each tween drives one property of one target from a start
//! value to an end value with an easing curve.
//!
//! A tween built with [`Tween::to`] has no explicit start value: it captures
//! the target's *current* value at the moment it first becomes active. That
//! is what lets an interrupted animation continue from wherever its targets
//! were left instead of snapping back to a hardcoded start.
//!
//! ```ignore
//! let mut timeline = Timeline::new();
//! timeline.add(0.0, Tween::to(layer, Property::XPercent, 0.0).duration(500.0));
//! timeline.stagger(150.0, 100.0, labels.iter().copied(), |label| {
//!     Tween::to(label, Property::YPercent, 0.0).duration(1000.0)
//! });
//! timeline.on_complete(|| tracing::debug!("done"));
//! ```

use slotmap::SlotMap;

use crate::easing::Easing;
use crate::target::{Property, Target, TargetId};
use crate::values::{Interpolate, PropertyValue};

/// Callback invoked once when a timeline finishes playing
pub type CompletionCallback = Box<dyn FnOnce() + Send + 'static>;

/// Identifies a tween within its timeline
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimelineEntryId(usize);

/// A single property animation
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub target: TargetId,
    pub property: Property,
    /// Explicit start value; `None` captures the current value on activation
    pub from: Option<PropertyValue>,
    pub to: PropertyValue,
    pub duration_ms: f32,
    pub easing: Easing,
    /// Remove the property's inline override once the tween completes
    pub clear_on_complete: bool,
}

impl Tween {
    /// Animate from the current value to `to`
    pub fn to(target: TargetId, property: Property, to: impl Into<PropertyValue>) -> Self {
        Self {
            target,
            property,
            from: None,
            to: to.into(),
            duration_ms: 500.0,
            easing: Easing::default(),
            clear_on_complete: false,
        }
    }

    /// Animate from an explicit `from` to `to`
    pub fn from_to(
        target: TargetId,
        property: Property,
        from: impl Into<PropertyValue>,
        to: impl Into<PropertyValue>,
    ) -> Self {
        Self {
            from: Some(from.into()),
            ..Self::to(target, property, to)
        }
    }

    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms.max(0.0);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn clear_on_complete(mut self) -> Self {
        self.clear_on_complete = true;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum EntryPhase {
    Pending,
    Running { from: PropertyValue },
    Done { from: PropertyValue },
}

#[derive(Clone, Debug)]
struct TimelineEntry {
    tween: Tween,
    offset_ms: f32,
    phase: EntryPhase,
}

impl TimelineEntry {
    fn end_ms(&self) -> f32 {
        self.offset_ms + self.tween.duration_ms
    }

    /// Render this entry at `time`; returns true once the entry is complete
    fn render(&mut self, time: f32, targets: &mut SlotMap<TargetId, Target>) -> bool {
        let tween = &self.tween;

        if time < self.offset_ms {
            if let EntryPhase::Running { from } | EntryPhase::Done { from } = self.phase {
                if let Some(target) = targets.get_mut(tween.target) {
                    target.props.set(tween.property, from);
                }
                self.phase = EntryPhase::Pending;
            }
            return false;
        }

        if matches!(self.phase, EntryPhase::Done { .. }) && time >= self.end_ms() {
            return true;
        }

        // Removed targets complete immediately
        let Some(target) = targets.get_mut(tween.target) else {
            self.phase = EntryPhase::Done {
                from: tween.from.unwrap_or(tween.to),
            };
            return true;
        };

        let from = match self.phase {
            EntryPhase::Pending => tween.from.unwrap_or_else(|| target.get(tween.property)),
            EntryPhase::Running { from } | EntryPhase::Done { from } => from,
        };

        let t = if tween.duration_ms <= 0.0 {
            1.0
        } else {
            ((time - self.offset_ms) / tween.duration_ms).min(1.0)
        };
        let value = if t >= 1.0 {
            tween.to
        } else {
            from.lerp(&tween.to, tween.easing.apply(t))
        };
        target.props.set(tween.property, value);

        if t >= 1.0 {
            if tween.clear_on_complete {
                target.props.clear(tween.property);
            }
            self.phase = EntryPhase::Done { from };
            true
        } else {
            self.phase = EntryPhase::Running { from };
            false
        }
    }
}

/// A timeline of positioned tweens
pub struct Timeline {
    entries: Vec<TimelineEntry>,
    current_time: f32,
    playing: bool,
    on_complete: Option<CompletionCallback>,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            current_time: 0.0,
            playing: false,
            on_complete: None,
        }
    }

    /// Add a tween starting `offset_ms` after the timeline starts
    pub fn add(&mut self, offset_ms: f32, tween: Tween) -> TimelineEntryId {
        let id = TimelineEntryId(self.entries.len());
        self.entries.push(TimelineEntry {
            tween,
            offset_ms: offset_ms.max(0.0),
            phase: EntryPhase::Pending,
        });
        id
    }

    /// Add one tween per target, each starting `each_ms` after the previous
    pub fn stagger<I, F>(
        &mut self,
        start_ms: f32,
        each_ms: f32,
        targets: I,
        mut make: F,
    ) -> Vec<TimelineEntryId>
    where
        I: IntoIterator<Item = TargetId>,
        F: FnMut(TargetId) -> Tween,
    {
        targets
            .into_iter()
            .enumerate()
            .map(|(i, target)| self.add(start_ms + i as f32 * each_ms, make(target)))
            .collect()
    }

    /// Set the callback fired once when every tween has completed
    pub fn on_complete<F>(&mut self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_complete = Some(Box::new(f));
    }

    pub(crate) fn take_on_complete(&mut self) -> Option<CompletionCallback> {
        self.on_complete.take()
    }

    /// Start playing from the beginning
    pub fn start(&mut self) {
        self.current_time = 0.0;
        for entry in &mut self.entries {
            entry.phase = EntryPhase::Pending;
        }
        self.playing = true;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// End time of the last tween
    pub fn duration_ms(&self) -> f32 {
        self.entries
            .iter()
            .map(TimelineEntry::end_ms)
            .fold(0.0, f32::max)
    }

    /// Overall progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        let duration = self.duration_ms();
        if duration <= 0.0 {
            return if self.playing { 0.0 } else { 1.0 };
        }
        (self.current_time / duration).clamp(0.0, 1.0)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Offset at which an entry starts
    pub fn entry_offset(&self, id: TimelineEntryId) -> Option<f32> {
        self.entries.get(id.0).map(|entry| entry.offset_ms)
    }

    /// Advance by `dt_ms` and write values to targets
    ///
    /// Returns true on the tick the timeline completes.
    pub(crate) fn advance(&mut self, dt_ms: f32, targets: &mut SlotMap<TargetId, Target>) -> bool {
        if !self.playing {
            return false;
        }
        self.current_time += dt_ms.max(0.0);
        self.render(targets)
    }

    /// Jump to `time_ms` and write values to targets
    ///
    /// Returns true if the timeline is complete at that time.
    pub(crate) fn seek(&mut self, time_ms: f32, targets: &mut SlotMap<TargetId, Target>) -> bool {
        self.current_time = time_ms.max(0.0);
        self.render(targets)
    }

    fn render(&mut self, targets: &mut SlotMap<TargetId, Target>) -> bool {
        let time = self.current_time;
        let mut all_done = true;
        for entry in &mut self.entries {
            all_done &= entry.render(time, targets);
        }
        if all_done {
            self.playing = false;
        }
        all_done
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Timeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timeline")
            .field("entries", &self.entries.len())
            .field("current_time", &self.current_time)
            .field("playing", &self.playing)
            .field("has_on_complete", &self.on_complete.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::VisualProps;

    fn targets_with(n: usize) -> (SlotMap<TargetId, Target>, Vec<TargetId>) {
        let mut targets = SlotMap::with_key();
        let ids = (0..n).map(|_| targets.insert(Target::default())).collect();
        (targets, ids)
    }

    fn x_percent(targets: &SlotMap<TargetId, Target>, id: TargetId) -> f32 {
        targets[id].props.x_percent
    }

    #[test]
    fn test_tween_captures_current_value_on_activation() {
        let (mut targets, ids) = targets_with(1);

        let mut timeline = Timeline::new();
        timeline.add(
            100.0,
            Tween::to(ids[0], Property::XPercent, 0.0).duration(100.0),
        );
        timeline.start();

        // Moved by something else after the timeline was built
        targets[ids[0]].props.x_percent = 80.0;
        assert!(!timeline.advance(150.0, &mut targets));
        // Halfway from 80, not from 0
        assert!((x_percent(&targets, ids[0]) - 40.0).abs() < 1e-4);

        assert!(timeline.advance(50.0, &mut targets));
        assert_eq!(x_percent(&targets, ids[0]), 0.0);
        assert!(!timeline.is_playing());
    }

    #[test]
    fn test_stagger_offsets() {
        let (_, ids) = targets_with(3);
        let mut timeline = Timeline::new();
        let entries = timeline.stagger(150.0, 100.0, ids.iter().copied(), |id| {
            Tween::to(id, Property::YPercent, 0.0).duration(1000.0)
        });

        let offsets: Vec<f32> = entries
            .iter()
            .map(|e| timeline.entry_offset(*e).unwrap())
            .collect();
        assert_eq!(offsets, vec![150.0, 250.0, 350.0]);
        assert_eq!(timeline.duration_ms(), 1350.0);
    }

    #[test]
    fn test_clear_on_complete_removes_override() {
        let (mut targets, ids) = targets_with(1);
        let mut timeline = Timeline::new();
        timeline.add(
            0.0,
            Tween::from_to(ids[0], Property::Opacity, 0.0, 1.0)
                .duration(100.0)
                .clear_on_complete(),
        );
        timeline.start();

        timeline.advance(50.0, &mut targets);
        assert_eq!(targets[ids[0]].props.opacity, Some(0.5));

        timeline.advance(50.0, &mut targets);
        assert_eq!(targets[ids[0]].props.opacity, None);
    }

    #[test]
    fn test_seek_backwards_restores_start_values() {
        let (mut targets, ids) = targets_with(1);
        let mut timeline = Timeline::new();
        timeline.add(
            100.0,
            Tween::from_to(ids[0], Property::X, 10.0, 20.0).duration(100.0),
        );
        timeline.start();

        timeline.seek(200.0, &mut targets);
        assert_eq!(targets[ids[0]].props.x, 20.0);

        timeline.seek(50.0, &mut targets);
        assert_eq!(targets[ids[0]].props.x, 10.0);
        assert_eq!(timeline.progress(), 0.25);
    }

    #[test]
    fn test_removed_target_does_not_block_completion() {
        let (mut targets, ids) = targets_with(2);
        let mut timeline = Timeline::new();
        timeline.add(0.0, Tween::to(ids[0], Property::X, 5.0).duration(10.0));
        timeline.add(0.0, Tween::to(ids[1], Property::X, 5.0).duration(10.0));
        targets.remove(ids[1]);

        timeline.start();
        assert!(timeline.advance(10.0, &mut targets));
        assert_eq!(
            targets[ids[0]].props,
            VisualProps {
                x: 5.0,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_empty_timeline_completes_on_first_tick() {
        let (mut targets, _) = targets_with(0);
        let mut timeline = Timeline::new();
        timeline.start();
        assert!(timeline.advance(0.0, &mut targets));
    }
}
