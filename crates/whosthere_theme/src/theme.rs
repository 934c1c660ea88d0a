//! Theme: a named, immutable bundle of color roles.
//!
//! Roles follow the tview-style set used by the whosthere widgets: surfaces
//! (primitive, contrast, more-contrast backgrounds), chrome (border, title,
//! graphics) and four text levels plus inverse text.

use super::rgb::Rgb;

/// Every color role a theme defines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    // --- Surfaces
    /// Main background of every primitive.
    pub primitive_background: Rgb,
    /// Background of contrasting elements (input fields, modals).
    pub contrast_background: Rgb,
    /// Background of elements that must stand out even more.
    pub more_contrast_background: Rgb,

    // --- Chrome
    pub border: Rgb,
    pub title: Rgb,
    /// Box-drawing and other graphics.
    pub graphics: Rgb,

    // --- Text
    pub primary_text: Rgb,
    pub secondary_text: Rgb,
    pub tertiary_text: Rgb,
    /// Text drawn on top of a highlighted (selected) background.
    pub inverse_text: Rgb,
    /// Secondary text on a contrast background.
    pub contrast_secondary_text: Rgb,
}

/// A named theme. Created once when the catalog is built and never edited;
/// changing the look means selecting a different theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    name: String,
    palette: Palette,
}

impl Theme {
    pub fn new(name: impl Into<String>, palette: Palette) -> Self {
        Self {
            name: name.into(),
            palette,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}
