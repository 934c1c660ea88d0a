//! Styleable capability contract.
//!
//! Widgets implement any subset of the narrow traits below. A [Capabilities]
//! value records, once, which of them a widget kind satisfies; applying a
//! theme then walks that record instead of probing the widget's type.

use std::fmt;

use crate::rgb::Rgb;
use crate::theme::{Palette, Theme};

/// Can set its background color.
pub trait Background {
    fn set_background_color(&mut self, color: Rgb);
}

/// Has a border whose color can be set.
pub trait Bordered {
    fn set_border_color(&mut self, color: Rgb);
}

/// Has a title whose color can be set.
pub trait Titled {
    fn set_title_color(&mut self, color: Rgb);
}

/// Selectable list with item and selection colors.
pub trait ListColorable {
    fn set_list_colors(&mut self, colors: ListColors);
}

/// Displays text in a single foreground color.
pub trait TextDisplay {
    fn set_text_color(&mut self, color: Rgb);
}

/// Editable input field with its own text and fill colors.
pub trait FieldColorable {
    fn set_field_colors(&mut self, colors: FieldColors);
}

/// Carries a label drawn next to its content.
pub trait Labeled {
    fn set_label_color(&mut self, color: Rgb);
}

/// Colors a selectable list takes from a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListColors {
    pub main_text: Rgb,
    pub selected_text: Rgb,
    pub selected_background: Rgb,
    pub secondary_text: Rgb,
    pub shortcut: Rgb,
}

impl ListColors {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            main_text: palette.primary_text,
            selected_text: palette.inverse_text,
            selected_background: palette.secondary_text,
            secondary_text: palette.secondary_text,
            shortcut: palette.tertiary_text,
        }
    }
}

/// Colors an input field takes from a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldColors {
    pub text: Rgb,
    pub background: Rgb,
}

impl FieldColors {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            text: palette.primary_text,
            background: palette.contrast_background,
        }
    }
}

/// Widget kinds that know their own capability set.
pub trait Themeable: Sized {
    fn capabilities() -> Capabilities<Self>;
}

/// The capabilities one widget kind satisfies, as role setters.
///
/// Capabilities are independent: any combination is valid, including none,
/// in which case [Capabilities::apply] does nothing.
pub struct Capabilities<W> {
    background: Option<fn(&mut W, Rgb)>,
    border: Option<fn(&mut W, Rgb)>,
    title: Option<fn(&mut W, Rgb)>,
    list: Option<fn(&mut W, ListColors)>,
    text: Option<fn(&mut W, Rgb)>,
    field: Option<fn(&mut W, FieldColors)>,
    label: Option<fn(&mut W, Rgb)>,
}

impl<W> Capabilities<W> {
    /// No capabilities: a valid no-op target.
    pub fn none() -> Self {
        Self {
            background: None,
            border: None,
            title: None,
            list: None,
            text: None,
            field: None,
            label: None,
        }
    }

    pub fn with_background(mut self) -> Self
    where
        W: Background,
    {
        self.background = Some(W::set_background_color as fn(&mut W, Rgb));
        self
    }

    pub fn with_border(mut self) -> Self
    where
        W: Bordered,
    {
        self.border = Some(W::set_border_color as fn(&mut W, Rgb));
        self
    }

    pub fn with_title(mut self) -> Self
    where
        W: Titled,
    {
        self.title = Some(W::set_title_color as fn(&mut W, Rgb));
        self
    }

    pub fn with_list(mut self) -> Self
    where
        W: ListColorable,
    {
        self.list = Some(W::set_list_colors as fn(&mut W, ListColors));
        self
    }

    pub fn with_text(mut self) -> Self
    where
        W: TextDisplay,
    {
        self.text = Some(W::set_text_color as fn(&mut W, Rgb));
        self
    }

    pub fn with_field(mut self) -> Self
    where
        W: FieldColorable,
    {
        self.field = Some(W::set_field_colors as fn(&mut W, FieldColors));
        self
    }

    pub fn with_label(mut self) -> Self
    where
        W: Labeled,
    {
        self.label = Some(W::set_label_color as fn(&mut W, Rgb));
        self
    }

    /// Number of capabilities satisfied.
    pub fn count(&self) -> usize {
        [
            self.background.is_some(),
            self.border.is_some(),
            self.title.is_some(),
            self.list.is_some(),
            self.text.is_some(),
            self.field.is_some(),
            self.label.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Apply `theme` to `widget`: each satisfied capability sets its roles.
    pub fn apply(&self, widget: &mut W, theme: &Theme) {
        let palette = theme.palette();
        if let Some(set) = self.background {
            set(widget, palette.primitive_background);
        }
        if let Some(set) = self.border {
            set(widget, palette.border);
        }
        if let Some(set) = self.title {
            set(widget, palette.title);
        }
        if let Some(set) = self.list {
            set(widget, ListColors::from_palette(palette));
        }
        if let Some(set) = self.text {
            set(widget, palette.primary_text);
        }
        if let Some(set) = self.field {
            set(widget, FieldColors::from_palette(palette));
        }
        if let Some(set) = self.label {
            set(widget, palette.secondary_text);
        }
    }
}

impl<W> Clone for Capabilities<W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W> Copy for Capabilities<W> {}

impl<W> Default for Capabilities<W> {
    fn default() -> Self {
        Self::none()
    }
}

impl<W> fmt::Debug for Capabilities<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities")
            .field("background", &self.background.is_some())
            .field("border", &self.border.is_some())
            .field("title", &self.title.is_some())
            .field("list", &self.list.is_some())
            .field("text", &self.text.is_some())
            .field("field", &self.field.is_some())
            .field("label", &self.label.is_some())
            .finish()
    }
}
