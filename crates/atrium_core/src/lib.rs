//! Atrium Core
//!
//! Foundational value types shared by every Atrium crate:
//!
//! - **Color**: RGBA color with hex parsing for configuration files
//! - **Geometry**: `Point`, `Size` and `Rect` for hit-testing
//! - **Routes**: the fixed set of logical destinations the site navigates to
//! - **Viewport**: the narrow/wide signal that selects presentation variants
//!
//! # Example
//!
//! ```rust
//! use atrium_core::{Color, Route, Viewport};
//!
//! let accent: Color = "#5227FF".parse().unwrap();
//! assert_eq!(accent, Color::from_hex(0x5227FF));
//!
//! assert_eq!(Route::parse("/work/hospitality"), Route::WorkCategory("hospitality".into()));
//! assert!(Viewport::new(600.0).is_narrow(768.0));
//! ```

pub mod color;
pub mod geometry;
pub mod route;
pub mod viewport;

pub use color::{Color, ParseColorError};
pub use geometry::{Point, Rect, Size};
pub use route::{Navigator, Route};
pub use viewport::{Viewport, DEFAULT_NARROW_BREAKPOINT};
