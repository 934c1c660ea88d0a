//! Layout helpers.
//!
//! - **[split]** — Split the screen into title, body, footer and center modals.
//! - **[style]** — Map theme [whosthere_theme::Rgb] roles to ratatui styles.

mod split;
mod style;

pub use split::{centered_rect, main_splits, vertical_split, MainSplits, FOOTER_HEIGHT, TITLE_HEIGHT};
pub use style::{background_style, border_style, rgb_to_color, text_style, with_bg, with_fg};
