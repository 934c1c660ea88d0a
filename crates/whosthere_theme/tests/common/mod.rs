//! Common test widgets and helpers.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use whosthere_theme::{
    Background, Bordered, Capabilities, FieldColorable, FieldColors, Labeled, ListColorable,
    ListColors, Rgb, TextDisplay, Theme, ThemeCatalog, ThemeManager, Themeable, Titled,
};

/// Every role a fully capable widget can hold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Roles {
    pub background: Option<Rgb>,
    pub border: Option<Rgb>,
    pub title: Option<Rgb>,
    pub list: Option<ListColors>,
    pub text: Option<Rgb>,
    pub field: Option<FieldColors>,
    pub label: Option<Rgb>,
}

/// Test widget satisfying every capability; records what it was given.
#[derive(Debug, Default)]
pub struct Swatch {
    pub roles: Roles,
}

impl Background for Swatch {
    fn set_background_color(&mut self, color: Rgb) {
        self.roles.background = Some(color);
    }
}

impl Bordered for Swatch {
    fn set_border_color(&mut self, color: Rgb) {
        self.roles.border = Some(color);
    }
}

impl Titled for Swatch {
    fn set_title_color(&mut self, color: Rgb) {
        self.roles.title = Some(color);
    }
}

impl ListColorable for Swatch {
    fn set_list_colors(&mut self, colors: ListColors) {
        self.roles.list = Some(colors);
    }
}

impl TextDisplay for Swatch {
    fn set_text_color(&mut self, color: Rgb) {
        self.roles.text = Some(color);
    }
}

impl FieldColorable for Swatch {
    fn set_field_colors(&mut self, colors: FieldColors) {
        self.roles.field = Some(colors);
    }
}

impl Labeled for Swatch {
    fn set_label_color(&mut self, color: Rgb) {
        self.roles.label = Some(color);
    }
}

impl Themeable for Swatch {
    fn capabilities() -> Capabilities<Self> {
        Capabilities::none()
            .with_background()
            .with_border()
            .with_title()
            .with_list()
            .with_text()
            .with_field()
            .with_label()
    }
}

pub fn swatch() -> Arc<Mutex<Swatch>> {
    Arc::new(Mutex::new(Swatch::default()))
}

pub fn roles_of(widget: &Arc<Mutex<Swatch>>) -> Roles {
    widget.lock().unwrap().roles
}

/// Roles a fully capable widget holds after `theme` is applied.
pub fn expected_roles(theme: &Theme) -> Roles {
    let p = theme.palette();
    Roles {
        background: Some(p.primitive_background),
        border: Some(p.border),
        title: Some(p.title),
        list: Some(ListColors::from_palette(p)),
        text: Some(p.primary_text),
        field: Some(FieldColors::from_palette(p)),
        label: Some(p.secondary_text),
    }
}

pub fn manager() -> Arc<ThemeManager> {
    Arc::new(ThemeManager::new(ThemeCatalog::builtin()))
}
