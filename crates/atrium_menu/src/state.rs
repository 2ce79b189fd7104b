//! Menu lifecycle state machine

// =============================================================================
// MenuPhase - FSM for the menu lifecycle
// =============================================================================

/// State machine for the menu lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MenuPhase {
    /// Panel is offscreen
    #[default]
    Closed,
    /// Open timeline is playing
    Opening,
    /// Panel is fully in and interactive
    Open,
    /// Close timeline is playing
    Closing,
}

/// Inputs to the menu state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuEvent {
    Open,
    Close,
    ClickAway,
    AnimationComplete,
}

impl MenuPhase {
    /// Next phase for `event`, or `None` if the event doesn't apply
    pub fn on_event(self, event: MenuEvent) -> Option<Self> {
        use MenuPhase::*;

        match (self, event) {
            (Closed, MenuEvent::Open) => Some(Opening),
            (Opening, MenuEvent::AnimationComplete) => Some(Open),
            (Open, MenuEvent::Close) | (Open, MenuEvent::ClickAway) => Some(Closing),
            (Closing, MenuEvent::AnimationComplete) => Some(Closed),

            // Interrupts reverse from wherever the elements are
            (Opening, MenuEvent::Close) | (Opening, MenuEvent::ClickAway) => Some(Closing),
            (Closing, MenuEvent::Open) => Some(Opening),

            _ => None,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, MenuPhase::Opening | MenuPhase::Open)
    }

    pub fn is_animating(self) -> bool {
        matches!(self, MenuPhase::Opening | MenuPhase::Closing)
    }
}

/// Public view of the menu's state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub is_open: bool,
    pub is_animating: bool,
}

impl From<MenuPhase> for MenuState {
    fn from(phase: MenuPhase) -> Self {
        Self {
            is_open: phase.is_open(),
            is_animating: phase.is_animating(),
        }
    }
}
