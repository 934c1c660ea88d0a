//! Built-in themes shipped with whosthere, in picker order.

use super::rgb::Rgb;
use super::theme::{Palette, Theme};

/// Names of the built-in themes, in enumeration order.
pub const BUILTIN_THEMES: [&str; 6] = ["default", "dark", "light", "solarized", "gruvbox", "nord"];

/// All built-in themes, in enumeration order.
pub fn builtin_themes() -> Vec<Theme> {
    vec![
        Theme::new("default", default_palette()),
        Theme::new("dark", dark_palette()),
        Theme::new("light", light_palette()),
        Theme::new("solarized", solarized_palette()),
        Theme::new("gruvbox", gruvbox_palette()),
        Theme::new("nord", nord_palette()),
    ]
}

/// Terminal-classic look: black background, white chrome, yellow secondary text.
fn default_palette() -> Palette {
    Palette {
        primitive_background: Rgb::from_hex(0x000000),
        contrast_background: Rgb::from_hex(0x0000ff),
        more_contrast_background: Rgb::from_hex(0x008000),
        border: Rgb::from_hex(0xffffff),
        title: Rgb::from_hex(0xffffff),
        graphics: Rgb::from_hex(0xffffff),
        primary_text: Rgb::from_hex(0xffffff),
        secondary_text: Rgb::from_hex(0xffff00),
        tertiary_text: Rgb::from_hex(0x008000),
        inverse_text: Rgb::from_hex(0x0000ff),
        contrast_secondary_text: Rgb::from_hex(0x000080),
    }
}

fn dark_palette() -> Palette {
    Palette {
        primitive_background: Rgb::from_hex(0x08080c),
        contrast_background: Rgb::from_hex(0x16171f),
        more_contrast_background: Rgb::from_hex(0x24283b),
        border: Rgb::from_hex(0x3d4166),
        title: Rgb::from_hex(0x6394ff),
        graphics: Rgb::from_hex(0x565f89),
        primary_text: Rgb::from_hex(0xc8d2f5),
        secondary_text: Rgb::from_hex(0x6394ff),
        tertiary_text: Rgb::from_hex(0x78dc78),
        inverse_text: Rgb::from_hex(0x08080c),
        contrast_secondary_text: Rgb::from_hex(0x464e6e),
    }
}

fn light_palette() -> Palette {
    Palette {
        primitive_background: Rgb::from_hex(0xffffff),
        contrast_background: Rgb::from_hex(0xf4f4f5),
        more_contrast_background: Rgb::from_hex(0xe5e5e5),
        border: Rgb::from_hex(0xcbd5e1),
        title: Rgb::from_hex(0x1a1b26),
        graphics: Rgb::from_hex(0xa1a1aa),
        primary_text: Rgb::from_hex(0x1a1b26),
        secondary_text: Rgb::from_hex(0x7aa2f7),
        tertiary_text: Rgb::from_hex(0x4caf50),
        inverse_text: Rgb::from_hex(0xffffff),
        contrast_secondary_text: Rgb::from_hex(0x565f89),
    }
}

fn solarized_palette() -> Palette {
    Palette {
        primitive_background: Rgb::from_hex(0x002b36),
        contrast_background: Rgb::from_hex(0x073642),
        more_contrast_background: Rgb::from_hex(0x586e75),
        border: Rgb::from_hex(0x586e75),
        title: Rgb::from_hex(0xb58900),
        graphics: Rgb::from_hex(0x657b83),
        primary_text: Rgb::from_hex(0x839496),
        secondary_text: Rgb::from_hex(0x268bd2),
        tertiary_text: Rgb::from_hex(0x2aa198),
        inverse_text: Rgb::from_hex(0xfdf6e3),
        contrast_secondary_text: Rgb::from_hex(0x93a1a1),
    }
}

fn gruvbox_palette() -> Palette {
    Palette {
        primitive_background: Rgb::from_hex(0x282828),
        contrast_background: Rgb::from_hex(0x3c3836),
        more_contrast_background: Rgb::from_hex(0x504945),
        border: Rgb::from_hex(0x665c54),
        title: Rgb::from_hex(0xfabd2f),
        graphics: Rgb::from_hex(0x7c6f64),
        primary_text: Rgb::from_hex(0xebdbb2),
        secondary_text: Rgb::from_hex(0xfe8019),
        tertiary_text: Rgb::from_hex(0xb8bb26),
        inverse_text: Rgb::from_hex(0x282828),
        contrast_secondary_text: Rgb::from_hex(0xa89984),
    }
}

fn nord_palette() -> Palette {
    Palette {
        primitive_background: Rgb::from_hex(0x2e3440),
        contrast_background: Rgb::from_hex(0x3b4252),
        more_contrast_background: Rgb::from_hex(0x434c5e),
        border: Rgb::from_hex(0x4c566a),
        title: Rgb::from_hex(0x88c0d0),
        graphics: Rgb::from_hex(0x4c566a),
        primary_text: Rgb::from_hex(0xeceff4),
        secondary_text: Rgb::from_hex(0x81a1c1),
        tertiary_text: Rgb::from_hex(0xa3be8c),
        inverse_text: Rgb::from_hex(0x2e3440),
        contrast_secondary_text: Rgb::from_hex(0xd8dee9),
    }
}
