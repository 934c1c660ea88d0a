//! Shared constants for whosthere.

pub mod app;
pub mod splash;
pub mod theme;

pub use app::{APP_NAME, DESCRIPTION, LONG_DESCRIPTION};
pub use splash::{LOGO, SPLASH_DELAY};
pub use theme::DEFAULT_THEME;
