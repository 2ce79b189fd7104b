//! Animation scheduler
//!
//! Owns every animation target and every playing timeline, and advances them
//! each frame. Components receive a weak [`SchedulerHandle`] so they never keep
//! the scheduler alive and every operation quietly no-ops once it is gone.
//!
//! Completed timelines are removed. Their completion callbacks are collected
//! while the scheduler is locked and invoked after the lock is released, so a
//! callback may freely start, kill or inspect animations.

use std::sync::{Arc, Mutex, Weak};
use std::time::Instant;

use atrium_core::Color;
use slotmap::{new_key_type, SlotMap};

use crate::target::{Property, Target, TargetId, VisualProps};
use crate::timeline::{CompletionCallback, Timeline};
use crate::values::PropertyValue;

new_key_type! {
    /// Handle to a playing timeline
    pub struct TimelineId;
}

/// Internal state of the animation scheduler
struct SchedulerInner {
    targets: SlotMap<TargetId, Target>,
    timelines: SlotMap<TimelineId, Timeline>,
    last_frame: Instant,
}

/// The animation scheduler that ticks all active timelines
///
/// ```ignore
/// let scheduler = AnimationScheduler::new();
/// let handle = scheduler.handle();
/// // ... components register targets and play timelines through `handle` ...
/// while scheduler.tick() {
///     // render a frame
/// }
/// ```
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                targets: SlotMap::with_key(),
                timelines: SlotMap::with_key(),
                last_frame: Instant::now(),
            })),
        }
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Tick all timelines by the wall-clock time since the previous tick
    ///
    /// Returns true if any timelines are still playing.
    pub fn tick(&self) -> bool {
        let dt_ms = {
            let mut inner = self.inner.lock().unwrap();
            let now = Instant::now();
            let dt = (now - inner.last_frame).as_secs_f32() * 1000.0;
            inner.last_frame = now;
            dt
        };
        self.tick_ms(dt_ms)
    }

    /// Tick all timelines by a fixed step
    ///
    /// Returns true if any timelines are still playing.
    pub fn tick_ms(&self, dt_ms: f32) -> bool {
        let completed: Vec<CompletionCallback> = {
            let mut guard = self.inner.lock().unwrap();
            let inner = &mut *guard;

            let mut finished = Vec::new();
            for (id, timeline) in inner.timelines.iter_mut() {
                if timeline.advance(dt_ms, &mut inner.targets) {
                    finished.push(id);
                }
            }

            let callbacks = finished
                .into_iter()
                .filter_map(|id| inner.timelines.remove(id))
                .filter_map(|mut timeline| timeline.take_on_complete())
                .collect();
            callbacks
        };

        if !completed.is_empty() {
            tracing::trace!("{} timeline(s) completed", completed.len());
        }
        for callback in completed {
            callback();
        }

        self.has_active_animations()
    }

    /// Run `tick_ms` in `step_ms` increments until nothing is playing
    ///
    /// Gives up after `max_ms` of simulated time. Returns the simulated time.
    pub fn run_until_idle(&self, step_ms: f32, max_ms: f32) -> f32 {
        let mut elapsed = 0.0;
        while self.has_active_animations() && elapsed < max_ms {
            self.tick_ms(step_ms);
            elapsed += step_ms;
        }
        elapsed
    }

    /// Check if any timelines are still playing
    pub fn has_active_animations(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.timelines.iter().any(|(_, t)| t.is_playing())
    }

    /// Number of registered targets
    pub fn target_count(&self) -> usize {
        self.inner.lock().unwrap().targets.len()
    }

    /// Number of live timelines
    pub fn timeline_count(&self) -> usize {
        self.inner.lock().unwrap().timelines.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the animation scheduler
///
/// This is passed to components that need to register targets and timelines.
/// It won't prevent the scheduler from being dropped.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    fn with_inner<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut SchedulerInner) -> R,
    {
        self.inner.upgrade().map(|inner| {
            let mut guard = inner.lock().unwrap();
            f(&mut guard)
        })
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    // =========================================================================
    // Target Operations
    // =========================================================================

    /// Register a target with initial props
    pub fn register_target(&self, props: VisualProps) -> Option<TargetId> {
        self.register_target_with_base(props, Color::BLACK)
    }

    /// Register a target whose cleared color falls back to `base_color`
    pub fn register_target_with_base(
        &self,
        props: VisualProps,
        base_color: Color,
    ) -> Option<TargetId> {
        self.with_inner(|inner| inner.targets.insert(Target { props, base_color }))
    }

    pub fn remove_target(&self, id: TargetId) {
        self.with_inner(|inner| inner.targets.remove(id));
    }

    /// Snapshot of a target's visual props
    pub fn props(&self, id: TargetId) -> Option<VisualProps> {
        self.with_inner(|inner| inner.targets.get(id).map(|t| t.props))
            .flatten()
    }

    pub fn get(&self, id: TargetId, property: Property) -> Option<PropertyValue> {
        self.with_inner(|inner| inner.targets.get(id).map(|t| t.get(property)))
            .flatten()
    }

    pub fn get_scalar(&self, id: TargetId, property: Property) -> Option<f32> {
        self.get(id, property).and_then(|v| v.as_scalar())
    }

    /// Set a property instantly
    pub fn set(&self, id: TargetId, property: Property, value: impl Into<PropertyValue>) {
        let value = value.into();
        self.with_inner(|inner| {
            if let Some(target) = inner.targets.get_mut(id) {
                target.props.set(property, value);
            }
        });
    }

    /// Set the same property on many targets instantly
    pub fn set_all<I>(&self, ids: I, property: Property, value: impl Into<PropertyValue>)
    where
        I: IntoIterator<Item = TargetId>,
    {
        let value = value.into();
        self.with_inner(|inner| {
            for id in ids {
                if let Some(target) = inner.targets.get_mut(id) {
                    target.props.set(property, value);
                }
            }
        });
    }

    /// Remove a property's inline override
    pub fn clear(&self, id: TargetId, property: Property) {
        self.with_inner(|inner| {
            if let Some(target) = inner.targets.get_mut(id) {
                target.props.clear(property);
            }
        });
    }

    // =========================================================================
    // Timeline Operations
    // =========================================================================

    /// Register a timeline and start it
    pub fn play(&self, mut timeline: Timeline) -> Option<TimelineId> {
        timeline.start();
        self.with_inner(|inner| {
            // Prevent a huge first dt for timelines started after a long idle
            inner.last_frame = Instant::now();
            inner.timelines.insert(timeline)
        })
    }

    /// Stop and discard a timeline; its properties freeze where they are and
    /// its completion callback never runs
    pub fn kill(&self, id: TimelineId) -> bool {
        self.with_inner(|inner| inner.timelines.remove(id).is_some())
            .unwrap_or(false)
    }

    /// Whether a timeline is still registered and playing
    pub fn is_active(&self, id: TimelineId) -> bool {
        self.with_inner(|inner| inner.timelines.get(id).map(|t| t.is_playing()))
            .flatten()
            .unwrap_or(false)
    }

    /// Jump a timeline to `time_ms`
    ///
    /// Seeking to or past the end completes the timeline and runs its callback.
    pub fn seek(&self, id: TimelineId, time_ms: f32) {
        let callback = self
            .with_inner(|inner| {
                let done = match inner.timelines.get_mut(id) {
                    Some(timeline) => timeline.seek(time_ms, &mut inner.targets),
                    None => return None,
                };
                if done {
                    inner
                        .timelines
                        .remove(id)
                        .and_then(|mut timeline| timeline.take_on_complete())
                } else {
                    None
                }
            })
            .flatten();

        if let Some(callback) = callback {
            callback();
        }
    }

    /// Timeline progress (0.0 to 1.0), `None` once it is gone
    pub fn progress(&self, id: TimelineId) -> Option<f32> {
        self.with_inner(|inner| inner.timelines.get(id).map(Timeline::progress))
            .flatten()
    }
}

// ============================================================================
// Timeline Slot
// ============================================================================

/// Exclusive owner of at most one playing timeline
///
/// Replacing the timeline kills the previous one first, so two timelines from
/// the same slot never advance at the same time. Dropping the slot kills
/// whatever it still holds.
pub struct TimelineSlot {
    handle: SchedulerHandle,
    current: Option<TimelineId>,
}

impl TimelineSlot {
    pub fn new(handle: SchedulerHandle) -> Self {
        Self {
            handle,
            current: None,
        }
    }

    /// Kill the current timeline (if any), then play `timeline` in its place
    pub fn cancel_and_replace(&mut self, timeline: Timeline) -> Option<TimelineId> {
        self.cancel();
        self.current = self.handle.play(timeline);
        self.current
    }

    /// Kill the current timeline; returns true if one was still playing
    pub fn cancel(&mut self) -> bool {
        match self.current.take() {
            Some(id) => self.handle.kill(id),
            None => false,
        }
    }

    /// Forget the current timeline if it has already finished on its own
    ///
    /// Returns true if the slot is now empty.
    pub fn release_finished(&mut self) -> bool {
        if !self.is_active() {
            self.current = None;
        }
        self.current.is_none()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some_and(|id| self.handle.is_active(id))
    }
}

impl Drop for TimelineSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use crate::timeline::Tween;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn slide(target: TargetId, to: f32) -> Timeline {
        let mut timeline = Timeline::new();
        timeline.add(
            0.0,
            Tween::to(target, Property::XPercent, to)
                .duration(100.0)
                .easing(Easing::Linear),
        );
        timeline
    }

    #[test]
    fn test_tick_runs_completion_once() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let target = handle.register_target(VisualProps::default()).unwrap();

        let fired = Arc::new(AtomicUsize::new(0));
        let mut timeline = slide(target, 100.0);
        let counter = Arc::clone(&fired);
        timeline.on_complete(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let id = handle.play(timeline).unwrap();

        assert!(scheduler.tick_ms(50.0));
        assert_eq!(handle.get_scalar(target, Property::XPercent), Some(50.0));
        assert!(!scheduler.tick_ms(50.0));
        scheduler.tick_ms(50.0);

        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!handle.is_active(id));
        assert_eq!(scheduler.timeline_count(), 0);
    }

    #[test]
    fn test_kill_freezes_values_and_skips_callback() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let target = handle.register_target(VisualProps::default()).unwrap();

        let fired = Arc::new(AtomicUsize::new(0));
        let mut timeline = slide(target, 100.0);
        let counter = Arc::clone(&fired);
        timeline.on_complete(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let id = handle.play(timeline).unwrap();

        scheduler.tick_ms(30.0);
        assert!(handle.kill(id));
        scheduler.tick_ms(100.0);

        assert_eq!(handle.get_scalar(target, Property::XPercent), Some(30.0));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_callback_may_reenter_scheduler() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let target = handle.register_target(VisualProps::default()).unwrap();

        let mut first = slide(target, 100.0);
        let chained = handle.clone();
        first.on_complete(move || {
            let back = slide(target, 0.0);
            chained.play(back);
        });
        handle.play(first);

        scheduler.tick_ms(100.0);
        assert_eq!(scheduler.timeline_count(), 1);
        scheduler.run_until_idle(10.0, 1000.0);
        assert_eq!(handle.get_scalar(target, Property::XPercent), Some(0.0));
    }

    #[test]
    fn test_seek_to_end_completes() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let target = handle.register_target(VisualProps::default()).unwrap();

        let id = handle.play(slide(target, 100.0)).unwrap();
        handle.seek(id, 25.0);
        assert_eq!(handle.progress(id), Some(0.25));

        handle.seek(id, 100.0);
        assert_eq!(handle.progress(id), None);
        assert_eq!(handle.get_scalar(target, Property::XPercent), Some(100.0));
    }

    #[test]
    fn test_slot_replaces_previous_timeline() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let target = handle.register_target(VisualProps::default()).unwrap();

        let mut slot = TimelineSlot::new(handle.clone());
        let first = slot.cancel_and_replace(slide(target, 100.0)).unwrap();
        scheduler.tick_ms(40.0);
        let second = slot.cancel_and_replace(slide(target, 0.0)).unwrap();

        assert!(!handle.is_active(first));
        assert!(handle.is_active(second));
        assert_eq!(scheduler.timeline_count(), 1);

        // Continues from 40, not from 100
        scheduler.tick_ms(50.0);
        assert_eq!(handle.get_scalar(target, Property::XPercent), Some(20.0));

        drop(slot);
        assert_eq!(scheduler.timeline_count(), 0);
    }

    #[test]
    fn test_handle_weak_reference() {
        let handle = {
            let scheduler = AnimationScheduler::new();
            scheduler.handle()
        };

        // Scheduler is dropped, handle should not be alive
        assert!(!handle.is_alive());

        // Operations should safely no-op
        assert!(handle.register_target(VisualProps::default()).is_none());
        assert!(handle.play(Timeline::new()).is_none());
    }
}
