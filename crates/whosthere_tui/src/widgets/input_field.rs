use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;
use whosthere_theme::{Background, Capabilities, FieldColorable, FieldColors, Labeled, Rgb, Themeable};

use crate::layouts::{background_style, with_bg, with_fg};

/// Single-line text input with a label, e.g. `Filter: `.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    label: String,
    value: String,
    focused: bool,
    background: Option<Rgb>,
    colors: Option<FieldColors>,
    label_color: Option<Rgb>,
}

impl InputField {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn insert(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn field_colors(&self) -> Option<FieldColors> {
        self.colors
    }

    pub fn label_color(&self) -> Option<Rgb> {
        self.label_color
    }
}

impl Background for InputField {
    fn set_background_color(&mut self, color: Rgb) {
        self.background = Some(color);
    }
}

impl FieldColorable for InputField {
    fn set_field_colors(&mut self, colors: FieldColors) {
        self.colors = Some(colors);
    }
}

impl Labeled for InputField {
    fn set_label_color(&mut self, color: Rgb) {
        self.label_color = Some(color);
    }
}

impl Themeable for InputField {
    fn capabilities() -> Capabilities<Self> {
        Capabilities::none().with_background().with_field().with_label()
    }
}

impl Widget for &InputField {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = background_style(self.background);
        let label = Span::styled(self.label.as_str(), with_fg(base, self.label_color));

        // The field fill runs to the right edge.
        let fill = (area.width as usize).saturating_sub(self.label.width() + self.value.width());
        let mut field_style = with_bg(
            with_fg(Style::default(), self.colors.map(|c| c.text)),
            self.colors.map(|c| c.background),
        );
        if self.focused {
            field_style = field_style.add_modifier(Modifier::UNDERLINED);
        }
        let field = Span::styled(format!("{}{}", self.value, " ".repeat(fill)), field_style);

        Paragraph::new(Line::from(vec![label, field]))
            .style(base)
            .render(area, buf);
    }
}
