// ABOUTME: Scrollable text region with independent size and vertical offset
// ABOUTME: Holds pre-rendered lines and never reflows them while scrolling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::text::{Line, Text};

#[derive(Debug, Clone, Default)]
pub struct Viewport {
    lines: Vec<Line<'static>>,
    y_offset: usize,
    width: u16,
    height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Replace the content and scroll back to the top
    pub fn set_content(&mut self, lines: Vec<Line<'static>>) {
        self.lines = lines;
        self.goto_top();
    }

    /// Replace the content with unstyled text, one line per `\n`
    pub fn set_text(&mut self, text: &str) {
        let lines = text
            .lines()
            .map(|line| Line::raw(line.to_string()))
            .collect();
        self.set_content(lines);
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.y_offset = self.y_offset.min(self.max_y_offset());
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn y_offset(&self) -> usize {
        self.y_offset
    }

    fn max_y_offset(&self) -> usize {
        self.lines.len().saturating_sub(usize::from(self.height))
    }

    pub fn set_y_offset(&mut self, offset: usize) {
        self.y_offset = offset.min(self.max_y_offset());
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.set_y_offset(self.y_offset.saturating_add(n));
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.set_y_offset(self.y_offset.saturating_sub(n));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(usize::from(self.height).max(1));
    }

    pub fn page_up(&mut self) {
        self.scroll_up(usize::from(self.height).max(1));
    }

    pub fn half_page_down(&mut self) {
        self.scroll_down((usize::from(self.height) / 2).max(1));
    }

    pub fn half_page_up(&mut self) {
        self.scroll_up((usize::from(self.height) / 2).max(1));
    }

    pub fn goto_top(&mut self) {
        self.y_offset = 0;
    }

    pub fn goto_bottom(&mut self) {
        self.y_offset = self.max_y_offset();
    }

    pub fn at_top(&self) -> bool {
        self.y_offset == 0
    }

    pub fn at_bottom(&self) -> bool {
        self.y_offset >= self.max_y_offset()
    }

    /// Scroll position from 0.0 (top) to 1.0 (bottom)
    pub fn scroll_percent(&self) -> f64 {
        let height = usize::from(self.height);
        if height >= self.lines.len() {
            return 1.0;
        }
        let v = self.y_offset as f64 / (self.lines.len() - height) as f64;
        v.clamp(0.0, 1.0)
    }

    /// Lines currently inside the window
    pub fn visible_lines(&self) -> &[Line<'static>] {
        let top = self.y_offset.min(self.lines.len());
        let bottom = (top + usize::from(self.height)).min(self.lines.len());
        &self.lines[top..bottom]
    }

    pub fn visible_text(&self) -> Text<'static> {
        Text::from(self.visible_lines().to_vec())
    }

    /// Apply a navigation key. Returns whether the key was recognised.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') if !ctrl => self.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') if !ctrl => self.scroll_down(1),
            KeyCode::Char('u') if ctrl => self.half_page_up(),
            KeyCode::Char('d') if ctrl => self.half_page_down(),
            KeyCode::Char('b') if !ctrl => self.page_up(),
            KeyCode::Char('f') | KeyCode::Char(' ') if !ctrl => self.page_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Home | KeyCode::Char('g') if !ctrl => self.goto_top(),
            KeyCode::End | KeyCode::Char('G') if !ctrl => self.goto_bottom(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Vec<Line<'static>> {
        (0..count).map(|i| Line::raw(format!("line {}", i))).collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_set_content_resets_scroll() {
        let mut viewport = Viewport::new(20, 5);
        viewport.set_content(numbered(20));
        viewport.scroll_down(7);
        assert_eq!(viewport.y_offset(), 7);

        viewport.set_content(numbered(3));
        assert_eq!(viewport.y_offset(), 0);
        assert!(viewport.at_top());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut viewport = Viewport::new(20, 5);
        viewport.set_content(numbered(12));

        viewport.scroll_down(100);
        assert_eq!(viewport.y_offset(), 7);
        assert!(viewport.at_bottom());

        viewport.scroll_up(100);
        assert_eq!(viewport.y_offset(), 0);
    }

    #[test]
    fn test_short_content_never_scrolls() {
        let mut viewport = Viewport::new(20, 10);
        viewport.set_text("one\ntwo");
        viewport.scroll_down(3);
        assert_eq!(viewport.y_offset(), 0);
        assert_eq!(viewport.scroll_percent(), 1.0);
        assert_eq!(viewport.visible_lines().len(), 2);
    }

    #[test]
    fn test_paging() {
        let mut viewport = Viewport::new(20, 4);
        viewport.set_content(numbered(10));

        viewport.page_down();
        assert_eq!(viewport.y_offset(), 4);
        viewport.page_down();
        assert_eq!(viewport.y_offset(), 6);
        viewport.page_up();
        assert_eq!(viewport.y_offset(), 2);
        viewport.goto_bottom();
        assert_eq!(viewport.y_offset(), 6);
        viewport.goto_top();
        assert_eq!(viewport.y_offset(), 0);
    }

    #[test]
    fn test_visible_lines_window() {
        let mut viewport = Viewport::new(20, 3);
        viewport.set_content(numbered(10));
        viewport.scroll_down(2);

        let visible: Vec<String> = viewport
            .visible_lines()
            .iter()
            .map(|line| line.to_string())
            .collect();
        assert_eq!(visible, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_shrinking_height_keeps_offset_valid() {
        let mut viewport = Viewport::new(20, 3);
        viewport.set_content(numbered(10));
        viewport.goto_bottom();
        assert_eq!(viewport.y_offset(), 7);

        viewport.set_size(20, 8);
        assert_eq!(viewport.y_offset(), 2);
    }

    #[test]
    fn test_scroll_percent() {
        let mut viewport = Viewport::new(20, 5);
        viewport.set_content(numbered(15));
        assert_eq!(viewport.scroll_percent(), 0.0);
        viewport.scroll_down(5);
        assert_eq!(viewport.scroll_percent(), 0.5);
        viewport.goto_bottom();
        assert_eq!(viewport.scroll_percent(), 1.0);
    }

    #[test]
    fn test_handle_key() {
        let mut viewport = Viewport::new(20, 4);
        viewport.set_content(numbered(10));

        assert!(viewport.handle_key(key(KeyCode::Down)));
        assert!(viewport.handle_key(key(KeyCode::Char('j'))));
        assert_eq!(viewport.y_offset(), 2);
        assert!(viewport.handle_key(key(KeyCode::End)));
        assert_eq!(viewport.y_offset(), 6);
        assert!(viewport.handle_key(key(KeyCode::Home)));
        assert_eq!(viewport.y_offset(), 0);
        assert!(viewport.handle_key(KeyEvent::new(
            KeyCode::Char('d'),
            KeyModifiers::CONTROL
        )));
        assert_eq!(viewport.y_offset(), 2);
        assert!(!viewport.handle_key(key(KeyCode::Char('x'))));
    }
}
