use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use whosthere_theme::{Background, Bordered, Capabilities, Rgb, Themeable, Titled};

use super::frame_block;

/// Empty bordered, titled container; content is drawn into [BoxView::inner].
#[derive(Debug, Clone, Default)]
pub struct BoxView {
    title: String,
    background: Option<Rgb>,
    border_color: Option<Rgb>,
    title_color: Option<Rgb>,
}

impl BoxView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Area inside the border.
    pub fn inner(&self, area: Rect) -> Rect {
        frame_block(None, None, None, None).inner(area)
    }

    pub fn border_color(&self) -> Option<Rgb> {
        self.border_color
    }
}

impl Background for BoxView {
    fn set_background_color(&mut self, color: Rgb) {
        self.background = Some(color);
    }
}

impl Bordered for BoxView {
    fn set_border_color(&mut self, color: Rgb) {
        self.border_color = Some(color);
    }
}

impl Titled for BoxView {
    fn set_title_color(&mut self, color: Rgb) {
        self.title_color = Some(color);
    }
}

impl Themeable for BoxView {
    fn capabilities() -> Capabilities<Self> {
        Capabilities::none().with_background().with_border().with_title()
    }
}

impl Widget for &BoxView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        frame_block(
            Some(self.title.as_str()),
            self.border_color,
            self.title_color,
            self.background,
        )
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::registered;
    use crate::widgets::tests::{color, manager_with, render, row_text};

    #[test]
    fn box_follows_theme_changes() {
        let manager = manager_with("dark");
        let devices = registered(&manager, BoxView::new("Devices"));
        let light = manager.set_theme("light").unwrap();
        let palette = light.palette();

        let guard = devices.lock().unwrap();
        assert_eq!(guard.border_color(), Some(palette.border));
        let buf = render(&*guard, 20, 4);
        assert!(row_text(&buf, 0).contains("Devices"));
        assert_eq!(buf[(0, 3)].fg, color(palette.border).unwrap());
        assert_eq!(buf[(5, 2)].bg, color(palette.primitive_background).unwrap());
    }

    #[test]
    fn inner_excludes_border() {
        let view = BoxView::new("Devices");
        assert_eq!(view.inner(Rect::new(0, 0, 20, 10)), Rect::new(1, 1, 18, 8));
    }
}
