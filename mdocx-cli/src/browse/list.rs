// ABOUTME: Selectable list panes for markdown files and media items
// ABOUTME: Tracks selection, scroll offset, and size, and maps rows back to entries

use crate::constants::layout::{LIST_ENTRY_ROWS, LIST_HEADER_ROWS};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mdocx_sdk::{MarkdownFile, MediaItem};

/// Projection of a bundle entry into a list row
pub trait PaneEntry {
    fn title(&self) -> &str;
    fn description(&self) -> String;
    fn filter_value(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownEntry {
    pub path: String,
    pub size: usize,
}

impl From<&MarkdownFile> for MarkdownEntry {
    fn from(file: &MarkdownFile) -> Self {
        Self {
            path: file.path.clone(),
            size: file.content.len(),
        }
    }
}

impl PaneEntry for MarkdownEntry {
    fn title(&self) -> &str {
        &self.path
    }

    fn description(&self) -> String {
        format!("{} bytes", self.size)
    }

    fn filter_value(&self) -> &str {
        &self.path
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEntry {
    pub id: String,
    pub path: String,
    pub mime_type: String,
    pub size: usize,
}

impl MediaEntry {
    pub fn is_image(&self) -> bool {
        self.mime_type.to_ascii_lowercase().starts_with("image/")
    }
}

impl From<&MediaItem> for MediaEntry {
    fn from(item: &MediaItem) -> Self {
        Self {
            id: item.id.clone(),
            path: item.path.clone(),
            mime_type: item.mime_type.clone(),
            size: item.data.len(),
        }
    }
}

impl PaneEntry for MediaEntry {
    fn title(&self) -> &str {
        if self.path.is_empty() {
            &self.id
        } else {
            &self.path
        }
    }

    fn description(&self) -> String {
        format!("{} ({} bytes)", self.mime_type, self.size)
    }

    fn filter_value(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct ListPane<T> {
    title: &'static str,
    entries: Vec<T>,
    selected: usize,
    offset: usize,
    width: u16,
    height: u16,
}

impl<T: PaneEntry> ListPane<T> {
    pub fn new(title: &'static str, entries: Vec<T>) -> Self {
        Self {
            title,
            entries,
            selected: 0,
            offset: 0,
            width: 0,
            height: 0,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Selected index, or `None` when the list is empty
    pub fn selected_index(&self) -> Option<usize> {
        (!self.entries.is_empty()).then_some(self.selected)
    }

    pub fn selected(&self) -> Option<&T> {
        self.entries.get(self.selected)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.ensure_visible();
    }

    /// Entries that fit below the title rows
    pub fn capacity(&self) -> usize {
        usize::from(self.height.saturating_sub(LIST_HEADER_ROWS) / LIST_ENTRY_ROWS).max(1)
    }

    /// Select an entry, returning whether the selection changed
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.entries.len() || index == self.selected {
            return false;
        }
        self.selected = index;
        self.ensure_visible();
        true
    }

    pub fn select_next(&mut self) -> bool {
        self.select(self.selected.saturating_add(1))
    }

    pub fn select_prev(&mut self) -> bool {
        match self.selected.checked_sub(1) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// Apply a navigation key, returning whether the selection changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('g') => self.select(0),
            KeyCode::Char('G') => self.select(self.entries.len().saturating_sub(1)),
            _ => false,
        }
    }

    /// Entry under a row relative to the top of the pane
    pub fn entry_at_row(&self, row: u16) -> Option<usize> {
        let row = row.checked_sub(LIST_HEADER_ROWS)?;
        let slot = usize::from(row / LIST_ENTRY_ROWS);
        if slot >= self.capacity() {
            return None;
        }
        let index = self.offset + slot;
        (index < self.entries.len()).then_some(index)
    }

    /// Visible entries paired with their indices
    pub fn visible_entries(&self) -> impl Iterator<Item = (usize, &T)> {
        self.entries
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(self.capacity())
    }

    fn ensure_visible(&mut self) {
        let capacity = self.capacity();
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + capacity {
            self.offset = self.selected + 1 - capacity;
        }
        let max_offset = self.entries.len().saturating_sub(capacity);
        self.offset = self.offset.min(max_offset);
    }
}
