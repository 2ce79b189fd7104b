//! Atrium App
//!
//! The site shell: configuration from `atrium.toml`, logging setup, page
//! models for every route, and the [`Site`] that hosts the menu and reacts to
//! viewport changes.
//!
//! # Example
//!
//! ```rust
//! use atrium_app::{Site, SiteConfig};
//! use atrium_core::Viewport;
//!
//! let mut site = Site::new(&SiteConfig::default(), Viewport::new(1280.0)).unwrap();
//! let page = site.visit("/work");
//! println!("{page}");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod pages;
pub mod site;
pub mod widgets;

pub use config::{SiteConfig, CONFIG_FILE};
pub use error::{AppError, Result};
pub use pages::{Page, Stat, LANDING_STATS};
pub use site::Site;
pub use widgets::AnimatedCounter;
