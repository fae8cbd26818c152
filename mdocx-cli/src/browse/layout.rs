// ABOUTME: Pane geometry derived from the terminal size
// ABOUTME: Splits the screen into list and content columns with minimum sizes

use crate::constants::layout::{
    CHROME_ROWS, DIVIDER_WIDTH, FULL_WIDTH_MARGIN, MIN_CONTENT_WIDTH, MIN_LIST_WIDTH,
    MIN_PANE_HEIGHT,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaneLayout {
    pub list_width: u16,
    pub content_width: u16,
    pub pane_height: u16,
    /// Width used by tabs without a list pane
    pub full_width: u16,
}

impl PaneLayout {
    pub fn compute(width: u16, height: u16) -> Self {
        let list_width = (width / 3).max(MIN_LIST_WIDTH);
        let content_width = width
            .saturating_sub(list_width)
            .saturating_sub(DIVIDER_WIDTH)
            .max(MIN_CONTENT_WIDTH);

        Self {
            list_width,
            content_width,
            pane_height: height.saturating_sub(CHROME_ROWS).max(MIN_PANE_HEIGHT),
            full_width: width.saturating_sub(FULL_WIDTH_MARGIN).max(MIN_CONTENT_WIDTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_terminal() {
        let layout = PaneLayout::compute(120, 40);
        assert_eq!(layout.list_width, 40);
        assert_eq!(layout.content_width, 79);
        assert_eq!(layout.pane_height, 37);
        assert_eq!(layout.full_width, 118);
    }

    #[test]
    fn test_narrow_terminal_uses_minimums() {
        let layout = PaneLayout::compute(30, 6);
        assert_eq!(layout.list_width, 24);
        assert_eq!(layout.content_width, 20);
        assert_eq!(layout.pane_height, 5);
        assert_eq!(layout.full_width, 28);
    }

    #[test]
    fn test_zero_size() {
        let layout = PaneLayout::compute(0, 0);
        assert_eq!(layout.list_width, 24);
        assert_eq!(layout.content_width, 20);
        assert_eq!(layout.pane_height, 5);
        assert_eq!(layout.full_width, 20);
    }
}
