use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};
use whosthere_theme::{Background, Bordered, Capabilities, Rgb, TextDisplay, Themeable, Titled};

use super::frame_block;
use crate::layouts::{background_style, with_fg};

/// Static or periodically replaced text, optionally framed with a title.
#[derive(Debug, Clone, Default)]
pub struct TextView {
    lines: Vec<String>,
    alignment: Alignment,
    title: Option<String>,
    framed: bool,
    background: Option<Rgb>,
    text_color: Option<Rgb>,
    border_color: Option<Rgb>,
    title_color: Option<Rgb>,
}

impl TextView {
    pub fn new(text: impl AsRef<str>) -> Self {
        let mut view = Self::default();
        view.set_text(text);
        view
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    /// Draw a border with `title` around the text.
    pub fn framed(mut self, title: impl Into<String>) -> Self {
        self.framed = true;
        self.title = Some(title.into());
        self
    }

    pub fn set_text(&mut self, text: impl AsRef<str>) {
        self.lines = text.as_ref().lines().map(str::to_string).collect();
    }

    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn text_color(&self) -> Option<Rgb> {
        self.text_color
    }

    pub fn background(&self) -> Option<Rgb> {
        self.background
    }
}

impl Background for TextView {
    fn set_background_color(&mut self, color: Rgb) {
        self.background = Some(color);
    }
}

impl TextDisplay for TextView {
    fn set_text_color(&mut self, color: Rgb) {
        self.text_color = Some(color);
    }
}

impl Bordered for TextView {
    fn set_border_color(&mut self, color: Rgb) {
        self.border_color = Some(color);
    }
}

impl Titled for TextView {
    fn set_title_color(&mut self, color: Rgb) {
        self.title_color = Some(color);
    }
}

impl Themeable for TextView {
    fn capabilities() -> Capabilities<Self> {
        Capabilities::none()
            .with_background()
            .with_text()
            .with_border()
            .with_title()
    }
}

impl Widget for &TextView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = with_fg(background_style(self.background), self.text_color);
        let lines: Vec<Line> = self.lines.iter().map(|l| Line::raw(l.as_str())).collect();
        let mut paragraph = Paragraph::new(lines).style(style).alignment(self.alignment);
        if self.framed {
            paragraph = paragraph.block(frame_block(
                self.title.as_deref(),
                self.border_color,
                self.title_color,
                self.background,
            ));
        }
        paragraph.render(area, buf);
    }
}
