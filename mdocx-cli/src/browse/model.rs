// ABOUTME: Browser state machine: tabs, list panes, viewport, and image preview mode
// ABOUTME: Consumes terminal events and exposes what the host should draw next

use super::content::{header_view, media_detail, metadata_view};
use super::layout::PaneLayout;
use super::list::{ListPane, MarkdownEntry, MediaEntry, PaneEntry};
use super::viewport::Viewport;
use crate::constants::layout::{BODY_TOP_ROW, INITIAL_RENDER_WIDTH, WHEEL_STEP};
use crate::constants::placeholders::EMPTY_MARKDOWN;
use crate::image_protocols::ImagePreview;
use crate::markdown::{build_renderer, MarkdownRenderer, RenderError};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use mdocx_sdk::{Document, HeaderInfo};
use ratatui::text::Line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Markdown,
    Media,
    Metadata,
    Header,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Markdown, Tab::Media, Tab::Metadata, Tab::Header];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Markdown => "Markdown",
            Tab::Media => "Media",
            Tab::Metadata => "Metadata",
            Tab::Header => "Header",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Markdown => 0,
            Tab::Media => 1,
            Tab::Metadata => 2,
            Tab::Header => 3,
        }
    }

    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Tabs that show a list pane beside the content
    pub fn has_list(self) -> bool {
        matches!(self, Tab::Markdown | Tab::Media)
    }

    /// Tab whose label covers `column` in the tab bar
    pub fn at_column(column: u16) -> Option<Tab> {
        let mut x = 0usize;
        for tab in Self::ALL {
            let width = tab.title().len() + 2;
            if (x..x + width).contains(&usize::from(column)) {
                return Some(tab);
            }
            x += width;
        }
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    /// Holds the encoded escape sequence of the image on screen
    ViewingImage(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// What the host should put on the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen<'a> {
    Browse,
    Image(&'a str),
}

#[derive(Debug, Clone, Default)]
pub struct BrowseOptions {
    /// Theme name or theme file path; empty selects automatically
    pub theme: String,
    /// Terminal can show images and the user has not disabled them
    pub images_enabled: bool,
}

pub struct BrowseModel {
    document: Document,
    header: Option<HeaderInfo>,
    options: BrowseOptions,
    mode: Mode,
    active_tab: Tab,
    markdown_list: ListPane<MarkdownEntry>,
    media_list: ListPane<MediaEntry>,
    viewport: Viewport,
    metadata_text: String,
    header_text: String,
    width: u16,
    height: u16,
    layout: PaneLayout,
    renderer: MarkdownRenderer,
    preview: ImagePreview,
    status: Option<String>,
}

impl BrowseModel {
    pub fn new(
        document: Document,
        header: Option<HeaderInfo>,
        options: BrowseOptions,
    ) -> Result<Self, RenderError> {
        Self::with_preview(document, header, options, ImagePreview::new())
    }

    pub fn with_preview(
        document: Document,
        header: Option<HeaderInfo>,
        options: BrowseOptions,
        preview: ImagePreview,
    ) -> Result<Self, RenderError> {
        let renderer = build_renderer(&options.theme, INITIAL_RENDER_WIDTH)?;

        let markdown_list = ListPane::new(
            "Markdown",
            document.markdown_files.iter().map(MarkdownEntry::from).collect(),
        );
        let media_list = ListPane::new(
            "Media",
            document.media_items.iter().map(MediaEntry::from).collect(),
        );

        let mut model = Self {
            metadata_text: metadata_view(document.metadata.as_ref()),
            header_text: header_view(header.as_ref()),
            document,
            header,
            options,
            mode: Mode::Browsing,
            active_tab: Tab::Markdown,
            markdown_list,
            media_list,
            viewport: Viewport::default(),
            width: 0,
            height: 0,
            layout: PaneLayout::default(),
            renderer,
            preview,
            status: None,
        };
        model.refresh_content();
        Ok(model)
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn markdown_list(&self) -> &ListPane<MarkdownEntry> {
        &self.markdown_list
    }

    pub fn media_list(&self) -> &ListPane<MediaEntry> {
        &self.media_list
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn layout(&self) -> PaneLayout {
        self.layout
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn renderer(&self) -> &MarkdownRenderer {
        &self.renderer
    }

    pub fn header(&self) -> Option<&HeaderInfo> {
        self.header.as_ref()
    }

    pub fn images_enabled(&self) -> bool {
        self.options.images_enabled
    }

    /// Transient message for the help line
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn screen(&self) -> Screen<'_> {
        match &self.mode {
            Mode::Browsing => Screen::Browse,
            Mode::ViewingImage(image) => Screen::Image(image),
        }
    }

    pub fn update(&mut self, event: Event) -> Control {
        self.status = None;
        match self.mode {
            Mode::ViewingImage(_) => self.update_viewing_image(event),
            Mode::Browsing => self.update_browsing(event),
        }
    }

    fn update_viewing_image(&mut self, event: Event) -> Control {
        if let Event::Resize(width, height) = event {
            self.resize(width, height);
        }
        self.mode = Mode::Browsing;
        Control::Continue
    }

    fn update_browsing(&mut self, event: Event) -> Control {
        match event {
            Event::Key(key) => return self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => self.resize(width, height),
            _ => {}
        }
        Control::Continue
    }

    fn handle_key(&mut self, key: KeyEvent) -> Control {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Control::Quit,
            KeyCode::Char('q') if !ctrl => return Control::Quit,
            KeyCode::Tab | KeyCode::Right => self.switch_tab(self.active_tab.next()),
            KeyCode::BackTab | KeyCode::Left => self.switch_tab(self.active_tab.prev()),
            KeyCode::Char('v') if !ctrl => self.view_selected_image(),
            KeyCode::PageUp | KeyCode::PageDown | KeyCode::Home | KeyCode::End => {
                self.viewport.handle_key(key);
            }
            _ => {
                let changed = match self.active_tab {
                    Tab::Markdown => self.markdown_list.handle_key(key),
                    Tab::Media => self.media_list.handle_key(key),
                    Tab::Metadata | Tab::Header => {
                        self.viewport.handle_key(key);
                        false
                    }
                };
                if changed {
                    self.refresh_content();
                }
            }
        }
        Control::Continue
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let over_list = self.active_tab.has_list()
            && mouse.row >= BODY_TOP_ROW
            && mouse.column < self.layout.list_width;

        match mouse.kind {
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let down = mouse.kind == MouseEventKind::ScrollDown;
                if over_list {
                    let changed = match (self.active_tab, down) {
                        (Tab::Markdown, true) => self.markdown_list.select_next(),
                        (Tab::Markdown, false) => self.markdown_list.select_prev(),
                        (Tab::Media, true) => self.media_list.select_next(),
                        (Tab::Media, false) => self.media_list.select_prev(),
                        _ => false,
                    };
                    if changed {
                        self.refresh_content();
                    }
                } else if down {
                    self.viewport.scroll_down(WHEEL_STEP);
                } else {
                    self.viewport.scroll_up(WHEEL_STEP);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if mouse.row == 0 {
                    if let Some(tab) = Tab::at_column(mouse.column) {
                        if tab != self.active_tab {
                            self.switch_tab(tab);
                        }
                    }
                } else if over_list {
                    let row = mouse.row - BODY_TOP_ROW;
                    let changed = match self.active_tab {
                        Tab::Markdown => self
                            .markdown_list
                            .entry_at_row(row)
                            .is_some_and(|index| self.markdown_list.select(index)),
                        Tab::Media => self
                            .media_list
                            .entry_at_row(row)
                            .is_some_and(|index| self.media_list.select(index)),
                        _ => false,
                    };
                    if changed {
                        self.refresh_content();
                    }
                }
            }
            _ => {}
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.refresh_content();
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.reflow();
        self.refresh_content();
    }

    fn reflow(&mut self) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        self.layout = PaneLayout::compute(self.width, self.height);
        let height = self.layout.pane_height;
        self.markdown_list.set_size(self.layout.list_width, height);
        self.media_list.set_size(self.layout.list_width, height);
        self.apply_viewport_size();

        if self.renderer.width() != self.layout.content_width {
            match build_renderer(&self.options.theme, self.layout.content_width) {
                Ok(renderer) => self.renderer = renderer,
                Err(e) => log::debug!(
                    "Keeping {}-column renderer, rebuild failed: {}",
                    self.renderer.width(),
                    e
                ),
            }
        }
    }

    fn apply_viewport_size(&mut self) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let width = if self.active_tab.has_list() {
            self.layout.content_width
        } else {
            self.layout.full_width
        };
        self.viewport.set_size(width, self.layout.pane_height);
    }

    fn refresh_content(&mut self) {
        self.apply_viewport_size();
        match self.active_tab {
            Tab::Markdown => {
                let lines = self.render_markdown_selection();
                self.viewport.set_content(lines);
            }
            Tab::Media => {
                let text = self.media_selection_text();
                self.viewport.set_text(&text);
            }
            Tab::Metadata => self.viewport.set_text(&self.metadata_text),
            Tab::Header => self.viewport.set_text(&self.header_text),
        }
        self.viewport.goto_top();
    }

    fn render_markdown_selection(&self) -> Vec<Line<'static>> {
        let Some(file) = self
            .markdown_list
            .selected_index()
            .and_then(|index| self.document.markdown_files.get(index))
        else {
            return Vec::new();
        };

        if file.content.is_empty() {
            return vec![Line::raw(EMPTY_MARKDOWN)];
        }

        let source = String::from_utf8_lossy(&file.content);
        match self.renderer.render(&source) {
            Ok(lines) => lines,
            Err(e) => {
                log::debug!("Showing raw markdown for {}: {}", file.path, e);
                source.lines().map(|line| Line::raw(line.to_string())).collect()
            }
        }
    }

    fn media_selection_text(&self) -> String {
        self.media_list
            .selected_index()
            .and_then(|index| self.document.media_items.get(index))
            .map(|item| media_detail(item, self.options.images_enabled))
            .unwrap_or_default()
    }

    fn view_selected_image(&mut self) {
        if self.active_tab != Tab::Media || !self.options.images_enabled {
            return;
        }
        let Some(index) = self.media_list.selected_index() else {
            return;
        };
        let Some(entry) = self.media_list.selected() else {
            return;
        };
        if !entry.is_image() {
            return;
        }
        let Some(item) = self.document.media_items.get(index) else {
            return;
        };

        match self.preview.render(&item.data, self.width, self.height) {
            Ok(sequence) => self.mode = Mode::ViewingImage(sequence),
            Err(e) => {
                log::debug!("Could not preview {}: {}", entry.title(), e);
                self.status = Some(format!("could not display image: {}", e));
            }
        }
    }
}
