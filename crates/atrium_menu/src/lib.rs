//! Atrium Menu
//!
//! The site's off-canvas navigation menu: a stack of colored pre-layers
//! sweeps in ahead of the panel, then the labels, numbering and social links
//! reveal in a staggered sequence. Every menu variant shares one
//! [`MenuOrchestrator`] and differs only by its [`MenuSkin`].
//!
//! # Example
//!
//! ```rust
//! use atrium_animation::AnimationScheduler;
//! use atrium_menu::{MenuContent, MenuOrchestrator, MenuPhase, MenuSkin};
//!
//! let scheduler = AnimationScheduler::new();
//! let menu = MenuOrchestrator::mount(
//!     scheduler.handle(),
//!     MenuSkin::staggered(),
//!     MenuContent::studio(),
//! );
//!
//! menu.toggle();
//! scheduler.run_until_idle(16.0, 5_000.0);
//! assert_eq!(menu.phase(), MenuPhase::Open);
//! ```

pub mod host;
pub mod items;
pub mod layers;
pub mod orchestrator;
pub mod registry;
pub mod reveal;
pub mod skin;
pub mod state;
pub mod toggle;

pub use host::{MenuHost, MenuVariant};
pub use items::{
    MenuContent, MenuItem, ResolvedSocial, SocialDirectory, SocialItem, SocialPlatform,
};
pub use layers::{normalize_layer_colors, LayerSchedule, MAX_LAYERS};
pub use orchestrator::{MenuCallback, MenuCallbacks, MenuOrchestrator, MenuSnapshot, MenuView};
pub use registry::{ElementRegistry, ElementRole};
pub use reveal::RevealSchedule;
pub use skin::{EdgeHandle, MenuSkin, MenuTiming, PanelSide};
pub use state::{MenuEvent, MenuPhase, MenuState};
pub use toggle::{ClickAway, IconState, ToggleControl, ToggleGlyph};
