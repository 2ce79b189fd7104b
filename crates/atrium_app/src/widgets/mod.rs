//! Animated page widgets

pub mod counter;

pub use counter::AnimatedCounter;
