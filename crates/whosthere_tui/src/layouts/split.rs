//! Split the terminal area into title, body, and footer regions.

use ratatui::layout::Rect;

/// Height of the title line at the top of the main page.
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the hint / status line at the bottom.
pub const FOOTER_HEIGHT: u16 = 1;

/// Regions for the main page: title, devices body, footer.
#[derive(Debug, Clone)]
pub struct MainSplits {
    pub title: Rect,
    /// May have zero height if the terminal is too small.
    pub body: Rect,
    pub footer: Rect,
}

/// Split `area` into title (fixed top), body (middle), footer (fixed bottom).
pub fn main_splits(area: Rect) -> MainSplits {
    let (title, rest) = vertical_split(area, TITLE_HEIGHT);
    let body_h = rest.height.saturating_sub(FOOTER_HEIGHT);
    let (body, footer) = vertical_split(rest, body_h);
    MainSplits { title, body, footer }
}

/// Split a vertical strip into top and bottom with a given top height.
pub fn vertical_split(area: Rect, top_height: u16) -> (Rect, Rect) {
    let top_h = top_height.min(area.height);
    let bottom_h = area.height.saturating_sub(top_h);
    let top = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: top_h,
    };
    let bottom = Rect {
        x: area.x,
        y: area.y.saturating_add(top_h),
        width: area.width,
        height: bottom_h,
    };
    (top, bottom)
}

/// Rect of at most `width` x `height` centered in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_splits_assigns_regions() {
        let s = main_splits(Rect::new(0, 0, 80, 24));
        assert_eq!(s.title.height, 1);
        assert_eq!(s.body.y, 1);
        assert_eq!(s.body.height, 22);
        assert_eq!(s.footer.y, 23);
        assert_eq!(s.footer.height, 1);
    }

    #[test]
    fn main_splits_tiny_terminal() {
        let s = main_splits(Rect::new(0, 0, 80, 1));
        assert_eq!(s.title.height, 1);
        assert_eq!(s.body.height, 0);
        assert_eq!(s.footer.height, 0);
    }

    #[test]
    fn vertical_split_larger_than_area() {
        let (top, bottom) = vertical_split(Rect::new(0, 0, 80, 5), 10);
        assert_eq!(top.height, 5);
        assert_eq!(bottom.height, 0);
    }

    #[test]
    fn centered_rect_fits_and_centers() {
        let r = centered_rect(Rect::new(0, 0, 80, 24), 40, 10);
        assert_eq!(r, Rect::new(20, 7, 40, 10));
        let clipped = centered_rect(Rect::new(2, 2, 10, 4), 40, 10);
        assert_eq!(clipped, Rect::new(2, 2, 10, 4));
    }
}
