use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{List, ListItem, ListState, StatefulWidget, Widget};
use whosthere_theme::{Background, Bordered, Capabilities, ListColorable, ListColors, Rgb, Themeable, Titled};

use super::frame_block;
use crate::layouts::{background_style, with_bg, with_fg};

/// Framed single-column list with one selected row.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    title: String,
    items: Vec<String>,
    selected: Option<usize>,
    colors: Option<ListColors>,
    background: Option<Rgb>,
    border_color: Option<Rgb>,
    title_color: Option<Rgb>,
}

impl ListView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Replace the rows. The selection is kept when still in range.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        if self.selected.is_some_and(|i| i >= self.items.len()) {
            self.selected = None;
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.items.len());
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}

impl Background for ListView {
    fn set_background_color(&mut self, color: Rgb) {
        self.background = Some(color);
    }
}

impl Bordered for ListView {
    fn set_border_color(&mut self, color: Rgb) {
        self.border_color = Some(color);
    }
}

impl Titled for ListView {
    fn set_title_color(&mut self, color: Rgb) {
        self.title_color = Some(color);
    }
}

impl ListColorable for ListView {
    fn set_list_colors(&mut self, colors: ListColors) {
        self.colors = Some(colors);
    }
}

impl Themeable for ListView {
    fn capabilities() -> Capabilities<Self> {
        Capabilities::none()
            .with_background()
            .with_border()
            .with_title()
            .with_list()
    }
}

impl Widget for &ListView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = frame_block(
            Some(self.title.as_str()),
            self.border_color,
            self.title_color,
            self.background,
        );
        let inner = block.inner(area);
        block.render(area, buf);

        let base = background_style(self.background);
        let (item_style, selected_style) = match self.colors {
            Some(c) => (
                with_fg(base, Some(c.main_text)),
                with_bg(with_fg(Style::default(), Some(c.selected_text)), Some(c.selected_background)),
            ),
            None => (base, base.add_modifier(Modifier::REVERSED)),
        };
        let items: Vec<ListItem> = self.items.iter().map(|i| ListItem::new(i.as_str())).collect();
        let list = List::new(items).style(item_style).highlight_style(selected_style);
        let mut state = ListState::default().with_selected(self.selected);
        StatefulWidget::render(list, inner, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::registered;
    use crate::widgets::tests::{color, manager_with, render, row_text};

    fn themes_list() -> ListView {
        let mut list = ListView::new("Themes");
        list.set_items(vec!["default".into(), "dark".into(), "light".into()]);
        list
    }

    #[test]
    fn selected_row_uses_selection_colors() {
        let manager = manager_with("solarized");
        let list = registered(&manager, themes_list());
        let palette = manager.current_theme().unwrap().palette().clone();
        lock_select(&list, 1);

        let buf = render(&*list.lock().unwrap(), 16, 5);
        assert!(row_text(&buf, 2).contains("dark"));
        assert_eq!(buf[(1, 2)].fg, color(palette.inverse_text).unwrap());
        assert_eq!(buf[(1, 2)].bg, color(palette.secondary_text).unwrap());
        assert_eq!(buf[(1, 1)].fg, color(palette.primary_text).unwrap());
    }

    fn lock_select(list: &crate::widgets::Shared<ListView>, index: usize) {
        list.lock().unwrap().select(Some(index));
    }

    #[test]
    fn selection_is_clamped_to_items() {
        let mut list = themes_list();
        list.select(Some(7));
        assert_eq!(list.selected(), None);
        list.select(Some(2));
        list.set_items(vec!["only".into()]);
        assert_eq!(list.selected(), None);
        assert_eq!(list.items(), ["only".to_string()]);
    }

    #[test]
    fn unthemed_selection_is_reversed() {
        let mut list = themes_list();
        list.select(Some(0));
        let buf = render(&list, 16, 5);
        assert!(buf[(1, 1)].modifier.contains(Modifier::REVERSED));
    }
}
