//! Atrium Animation System
//!
//! Eased tweens and timeline orchestration for the site's animated widgets.
//!
//! # Features
//!
//! - **Targets**: animatable elements with translation, rotation, opacity and
//!   color, where opacity and color are clearable inline overrides
//! - **Tweens**: property animations with an explicit start value, or one
//!   captured from the target when the tween activates
//! - **Timelines**: tweens positioned at absolute offsets, with staggers
//! - **Scheduler**: owns targets and timelines, ticks them per frame, supports
//!   kill and seek, and runs completion callbacks outside its lock
//! - **Timeline slots**: exclusive ownership of one playing timeline with
//!   kill-then-replace semantics

pub mod easing;
pub mod scheduler;
pub mod target;
pub mod timeline;
pub mod values;

pub use easing::Easing;
pub use scheduler::{AnimationScheduler, SchedulerHandle, TimelineId, TimelineSlot};
pub use target::{Property, TargetId, VisualProps};
pub use timeline::{CompletionCallback, Timeline, TimelineEntryId, Tween};
pub use values::{Interpolate, PropertyValue};
