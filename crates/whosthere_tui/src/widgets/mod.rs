//! Retained, theme-aware widgets.
//!
//! Each widget is a plain struct holding its content and the colors a theme
//! last gave it. Pages own them as [Shared] handles; the theme manager holds
//! only weak references. Rendering goes through ratatui (`Widget for &T`), so
//! the UI loop locks a widget, renders it, and lets go.

mod box_view;
mod input_field;
mod list_view;
mod text_view;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ratatui::layout::Alignment;
use ratatui::text::Span;
use ratatui::widgets::Block;
use whosthere_theme::{Rgb, ThemeManager, Themeable};

use crate::layouts::{background_style, border_style, text_style};

pub use box_view::BoxView;
pub use input_field::InputField;
pub use list_view::ListView;
pub use text_view::TextView;

/// A widget shared between its page (strong) and the theme manager (weak).
pub type Shared<T> = Arc<Mutex<T>>;

pub fn shared<T>(widget: T) -> Shared<T> {
    Arc::new(Mutex::new(widget))
}

/// Wrap `widget` and register it with `manager`; it is styled immediately if
/// a theme is current.
pub fn registered<W>(manager: &ThemeManager, widget: W) -> Shared<W>
where
    W: Themeable + Send + 'static,
{
    let widget = shared(widget);
    manager.register(&widget);
    widget
}

/// Lock a widget, recovering from a poisoned lock.
pub fn lock<T>(widget: &Shared<T>) -> MutexGuard<'_, T> {
    widget.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Bordered block with a centered title, used by every framed widget.
pub(crate) fn frame_block<'a>(
    title: Option<&'a str>,
    border: Option<Rgb>,
    title_color: Option<Rgb>,
    background: Option<Rgb>,
) -> Block<'a> {
    let block = Block::bordered()
        .border_style(border_style(border))
        .style(background_style(background))
        .title_alignment(Alignment::Center);
    match title {
        Some(title) => block.title(Span::styled(title, text_style(title_color))),
        None => block,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;

    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Color;
    use ratatui::widgets::Widget;
    use whosthere_theme::{Rgb, ThemeCatalog, ThemeManager};

    pub fn manager_with(theme: &str) -> Arc<ThemeManager> {
        let manager = Arc::new(ThemeManager::new(ThemeCatalog::builtin()));
        manager.set_theme(theme).unwrap();
        manager
    }

    pub fn color(rgb: Rgb) -> Option<Color> {
        Some(crate::layouts::rgb_to_color(rgb))
    }

    pub fn render<W>(widget: &W, width: u16, height: u16) -> Buffer
    where
        for<'a> &'a W: Widget,
    {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf
    }

    pub fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }
}
