//! Map theme colors to ratatui styles.
//!
//! Widget colors are `Option<Rgb>`: `None` until a theme has been applied,
//! in which case the terminal default is left alone.

use ratatui::style::{Color, Style};
use whosthere_theme::Rgb;

/// Convert theme [Rgb] to ratatui [Color].
#[inline]
pub fn rgb_to_color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.tuple();
    Color::Rgb(r, g, b)
}

/// Set the foreground of `style` when a color is known.
pub fn with_fg(style: Style, rgb: Option<Rgb>) -> Style {
    match rgb {
        Some(rgb) => style.fg(rgb_to_color(rgb)),
        None => style,
    }
}

/// Set the background of `style` when a color is known.
pub fn with_bg(style: Style, rgb: Option<Rgb>) -> Style {
    match rgb {
        Some(rgb) => style.bg(rgb_to_color(rgb)),
        None => style,
    }
}

/// Fill style for a widget area.
pub fn background_style(bg: Option<Rgb>) -> Style {
    with_bg(Style::default(), bg)
}

/// Border lines, drawn over the widget background.
pub fn border_style(border: Option<Rgb>) -> Style {
    with_fg(Style::default(), border)
}

/// Plain text in one color.
pub fn text_style(text: Option<Rgb>) -> Style {
    with_fg(Style::default(), text)
}
