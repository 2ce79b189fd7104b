//! Viewport signal
//!
//! The only environmental input the site reacts to: whether the window is
//! narrow enough to switch to the mobile presentation.

/// Width (in logical pixels) below which the viewport counts as narrow
pub const DEFAULT_NARROW_BREAKPOINT: f32 = 768.0;

/// Current viewport dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
}

impl Viewport {
    pub const fn new(width: f32) -> Self {
        Self { width }
    }

    /// Whether this viewport is narrower than `breakpoint`
    pub fn is_narrow(&self, breakpoint: f32) -> bool {
        self.width < breakpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_is_exclusive() {
        assert!(Viewport::new(767.0).is_narrow(DEFAULT_NARROW_BREAKPOINT));
        assert!(!Viewport::new(768.0).is_narrow(DEFAULT_NARROW_BREAKPOINT));
        assert!(!Viewport::new(1024.0).is_narrow(DEFAULT_NARROW_BREAKPOINT));
    }
}
