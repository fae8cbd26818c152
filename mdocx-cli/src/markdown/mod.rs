// ABOUTME: Width-bound markdown renderer producing styled ratatui lines
// ABOUTME: Walks pulldown-cmark events, wraps text by display width, and highlights code with syntect

pub mod theme;

pub use theme::{MarkdownTheme, Role};

use once_cell::sync::Lazy;
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use std::path::PathBuf;
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use thiserror::Error;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown theme '{0}' (expected auto, dark, light, dracula, notty, or a theme file path)")]
    UnknownTheme(String),

    #[error("failed to read theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid theme file {path}: {message}")]
    ThemeFile { path: PathBuf, message: String },

    #[error("invalid colour '{value}' for '{key}'")]
    InvalidColor { key: &'static str, value: String },

    #[error("unknown code theme '{0}'")]
    UnknownCodeTheme(String),

    #[error("failed to highlight code block: {0}")]
    Highlight(String),
}

/// Build a renderer wrapping at `width` columns with the given theme name or path
pub fn build_renderer(theme: &str, width: u16) -> Result<MarkdownRenderer, RenderError> {
    let theme = MarkdownTheme::resolve(theme)?;
    if let Some(code_theme) = &theme.code_theme {
        if !THEME_SET.themes.contains_key(code_theme) {
            return Err(RenderError::UnknownCodeTheme(code_theme.clone()));
        }
    }

    log::debug!("Built markdown renderer: theme={}, width={}", theme.name, width);
    Ok(MarkdownRenderer { theme, width })
}

#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    theme: MarkdownTheme,
    width: u16,
}

impl MarkdownRenderer {
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn theme(&self) -> &MarkdownTheme {
        &self.theme
    }

    pub fn render(&self, source: &str) -> Result<Vec<Line<'static>>, RenderError> {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_FOOTNOTES);

        let mut state = RenderState::new(&self.theme, usize::from(self.width).max(1));
        for event in Parser::new_ext(source, options) {
            state.handle(event)?;
        }
        Ok(state.finish())
    }
}

struct CodeBlock {
    lang: Option<String>,
    content: String,
}

#[derive(Default)]
struct TableState {
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    cell: String,
}

struct RenderState<'t> {
    theme: &'t MarkdownTheme,
    width: usize,
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    styles: Vec<Style>,
    /// Next number for each open list; `None` for bullet lists
    lists: Vec<Option<u64>>,
    /// Marker waiting to prefix the first line of the current item
    item_marker: Option<Span<'static>>,
    quote_depth: usize,
    links: Vec<String>,
    code: Option<CodeBlock>,
    table: Option<TableState>,
}

impl<'t> RenderState<'t> {
    fn new(theme: &'t MarkdownTheme, width: usize) -> Self {
        Self {
            theme,
            width,
            lines: Vec::new(),
            spans: Vec::new(),
            styles: vec![theme.style(Role::Text)],
            lists: Vec::new(),
            item_marker: None,
            quote_depth: 0,
            links: Vec::new(),
            code: None,
            table: None,
        }
    }

    fn style(&self) -> Style {
        self.styles.last().copied().unwrap_or_default()
    }

    fn push_style(&mut self, role: Role) {
        let style = self.style().patch(self.theme.style(role));
        self.styles.push(style);
    }

    fn pop_style(&mut self) {
        if self.styles.len() > 1 {
            self.styles.pop();
        }
    }

    fn handle(&mut self, event: Event<'_>) -> Result<(), RenderError> {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => return self.end(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                if let Some(table) = self.table.as_mut() {
                    table.cell.push_str(&code);
                } else {
                    let style = self.style().patch(self.theme.style(Role::Code));
                    self.spans.push(Span::styled(code.into_string(), style));
                }
            }
            Event::InlineHtml(html) if self.table.is_some() => self.text(&html),
            Event::Html(html) | Event::InlineHtml(html) => {
                let style = self.theme.style(Role::Quote);
                for (i, part) in html.trim_end_matches('\n').split('\n').enumerate() {
                    if i > 0 {
                        self.flush();
                    }
                    self.spans.push(Span::styled(part.to_string(), style));
                }
            }
            Event::FootnoteReference(label) => {
                let style = self.style().patch(self.theme.style(Role::Link));
                self.decorate(format!("[^{}]", label), style);
            }
            Event::SoftBreak => self.text(" "),
            Event::HardBreak => self.flush(),
            Event::Rule => {
                self.flush();
                let width = self.width.saturating_sub(self.continuation_width()).max(1);
                let rule = Span::styled("─".repeat(width), self.theme.style(Role::Rule));
                let mut line = self.continuation_prefix();
                line.push(rule);
                self.lines.push(Line::from(line));
                self.gap();
            }
            Event::TaskListMarker(checked) => {
                let marker = if checked { "[x] " } else { "[ ] " };
                self.spans
                    .push(Span::styled(marker, self.theme.style(Role::Bullet)));
            }
            _ => {}
        }
        Ok(())
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {}
            Tag::Heading { level, .. } => {
                self.flush();
                let level = level as usize;
                let role = if level <= 2 {
                    Role::Heading
                } else {
                    Role::HeadingMinor
                };
                self.push_style(role);
                self.spans
                    .push(Span::styled(format!("{} ", "#".repeat(level)), self.style()));
            }
            Tag::BlockQuote(_) => {
                self.flush();
                self.quote_depth += 1;
                self.push_style(Role::Quote);
            }
            Tag::CodeBlock(kind) => {
                self.flush();
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(|lang| lang.to_string()),
                    CodeBlockKind::Indented => None,
                };
                self.code = Some(CodeBlock {
                    lang,
                    content: String::new(),
                });
            }
            Tag::List(start) => {
                self.flush();
                self.lists.push(start);
            }
            Tag::Item => {
                self.flush();
                let depth = self.lists.len().saturating_sub(1);
                let marker = match self.lists.last_mut() {
                    Some(Some(number)) => {
                        let marker = format!("{}. ", number);
                        *number += 1;
                        marker
                    }
                    _ => {
                        let bullet = match depth % 3 {
                            0 => "•",
                            1 => "◦",
                            _ => "▪",
                        };
                        format!("{} ", bullet)
                    }
                };
                self.item_marker = Some(Span::styled(marker, self.theme.style(Role::Bullet)));
            }
            Tag::Emphasis => self.push_style(Role::Emphasis),
            Tag::Strong => self.push_style(Role::Strong),
            Tag::Strikethrough => self.push_style(Role::Strikethrough),
            Tag::Link { dest_url, .. } => {
                self.links.push(dest_url.into_string());
                self.push_style(Role::Link);
            }
            Tag::Image { .. } => {
                self.push_style(Role::Link);
                self.decorate("[image: ".to_string(), self.style());
            }
            Tag::Table(_) => {
                self.flush();
                self.table = Some(TableState::default());
            }
            Tag::TableHead | Tag::TableRow => {
                if let Some(table) = self.table.as_mut() {
                    table.row.clear();
                }
            }
            Tag::TableCell => {
                if let Some(table) = self.table.as_mut() {
                    table.cell.clear();
                }
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) -> Result<(), RenderError> {
        match tag {
            TagEnd::Paragraph | TagEnd::HtmlBlock => {
                self.flush();
                self.gap();
            }
            TagEnd::Heading(_) => {
                self.flush();
                self.pop_style();
                self.gap();
            }
            TagEnd::BlockQuote(_) => {
                self.flush();
                if self.lines.last().is_some_and(is_blank) {
                    self.lines.pop();
                }
                self.quote_depth = self.quote_depth.saturating_sub(1);
                self.pop_style();
                self.gap();
            }
            TagEnd::CodeBlock => {
                if let Some(block) = self.code.take() {
                    self.code_block(block)?;
                    self.gap();
                }
            }
            TagEnd::List(_) => {
                self.flush();
                self.lists.pop();
                if self.lists.is_empty() {
                    self.gap();
                }
            }
            TagEnd::Item => {
                self.flush();
                self.item_marker = None;
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => self.pop_style(),
            TagEnd::Link => {
                self.pop_style();
                if let Some(url) = self.links.pop() {
                    let shown = match &self.table {
                        Some(table) => table.cell.ends_with(&url),
                        None => self.spans.last().is_some_and(|span| span.content == url),
                    };
                    if !url.is_empty() && !shown {
                        let style = self.theme.style(Role::Rule);
                        self.decorate(format!(" <{}>", url), style);
                    }
                }
            }
            TagEnd::Image => {
                self.decorate("]".to_string(), self.style());
                self.pop_style();
            }
            TagEnd::TableCell => {
                if let Some(table) = self.table.as_mut() {
                    let cell = std::mem::take(&mut table.cell);
                    table.row.push(cell.trim().to_string());
                }
            }
            TagEnd::TableHead | TagEnd::TableRow => {
                if let Some(table) = self.table.as_mut() {
                    if !table.row.is_empty() {
                        let row = std::mem::take(&mut table.row);
                        table.rows.push(row);
                    }
                }
            }
            TagEnd::Table => {
                if let Some(table) = self.table.take() {
                    self.render_table(&table.rows);
                    self.gap();
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn text(&mut self, text: &str) {
        if let Some(code) = self.code.as_mut() {
            code.content.push_str(text);
        } else if let Some(table) = self.table.as_mut() {
            table.cell.push_str(text);
        } else {
            self.spans.push(Span::styled(text.to_string(), self.style()));
        }
    }

    /// Inline markup around text; table cells hold plain text only
    fn decorate(&mut self, text: String, style: Style) {
        if let Some(table) = self.table.as_mut() {
            table.cell.push_str(&text);
        } else {
            self.spans.push(Span::styled(text, style));
        }
    }

    /// Prefix for lines inside the current quote and list nesting
    fn continuation_prefix(&self) -> Vec<Span<'static>> {
        let mut prefix = Vec::new();
        if self.quote_depth > 0 {
            prefix.push(Span::styled(
                "│ ".repeat(self.quote_depth),
                self.theme.style(Role::Quote),
            ));
        }
        if !self.lists.is_empty() {
            prefix.push(Span::raw("  ".repeat(self.lists.len())));
        }
        prefix
    }

    fn continuation_width(&self) -> usize {
        spans_width(&self.continuation_prefix())
    }

    fn first_line_prefix(&mut self) -> Vec<Span<'static>> {
        let Some(marker) = self.item_marker.take() else {
            return self.continuation_prefix();
        };

        let mut prefix = Vec::new();
        if self.quote_depth > 0 {
            prefix.push(Span::styled(
                "│ ".repeat(self.quote_depth),
                self.theme.style(Role::Quote),
            ));
        }
        // Marker hangs in the indent of its own level
        let indent = self.lists.len() * 2;
        let pad = indent.saturating_sub(marker.content.width());
        prefix.push(Span::raw(" ".repeat(pad)));
        prefix.push(marker);
        prefix
    }

    /// Wrap pending spans into lines
    fn flush(&mut self) {
        if self.spans.is_empty() {
            return;
        }
        let spans = std::mem::take(&mut self.spans);
        let first = self.first_line_prefix();
        let rest = self.continuation_prefix();
        let wrapped = wrap_spans(spans, self.width, first, &rest);
        self.lines.extend(wrapped);
    }

    /// Blank line between blocks, never doubled
    fn gap(&mut self) {
        if !self.lists.is_empty() && self.quote_depth == 0 {
            return;
        }
        if self.lines.last().is_some_and(|line| !is_blank(line)) {
            let mut prefix = self.continuation_prefix();
            if prefix.is_empty() {
                prefix.push(Span::raw(""));
            }
            self.lines.push(Line::from(prefix));
        }
    }

    fn code_block(&mut self, block: CodeBlock) -> Result<(), RenderError> {
        let border = self.theme.style(Role::Rule);
        let mut top = self.first_line_prefix();
        let prefix = self.continuation_prefix();
        let label = block.lang.as_deref().unwrap_or("");

        top.push(Span::styled(format!("┌─ {}", label), border));
        self.lines.push(Line::from(top));

        for code_line in self.highlight(&block)? {
            let mut line = prefix.clone();
            line.push(Span::styled("│ ", border));
            line.extend(code_line);
            self.lines.push(Line::from(line));
        }

        let mut bottom = prefix;
        bottom.push(Span::styled("└─", border));
        self.lines.push(Line::from(bottom));
        Ok(())
    }

    fn highlight(&self, block: &CodeBlock) -> Result<Vec<Vec<Span<'static>>>, RenderError> {
        let plain = |content: &str| -> Vec<Vec<Span<'static>>> {
            content
                .lines()
                .map(|line| vec![Span::styled(line.to_string(), self.theme.style(Role::Code))])
                .collect()
        };

        let Some(theme) = self
            .theme
            .code_theme
            .as_ref()
            .and_then(|name| THEME_SET.themes.get(name))
        else {
            return Ok(plain(&block.content));
        };

        let syntax = block
            .lang
            .as_deref()
            .and_then(|lang| SYNTAX_SET.find_syntax_by_token(lang))
            .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());
        let mut highlighter = HighlightLines::new(syntax, theme);

        let mut lines = Vec::new();
        for line in LinesWithEndings::from(&block.content) {
            let ranges = highlighter
                .highlight_line(line, &SYNTAX_SET)
                .map_err(|e| RenderError::Highlight(e.to_string()))?;
            let spans = ranges
                .into_iter()
                .map(|(style, text)| {
                    let fg = Color::Rgb(style.foreground.r, style.foreground.g, style.foreground.b);
                    Span::styled(text.trim_end_matches('\n').to_string(), Style::default().fg(fg))
                })
                .filter(|span| !span.content.is_empty())
                .collect();
            lines.push(spans);
        }
        Ok(lines)
    }

    fn render_table(&mut self, rows: &[Vec<String>]) {
        if rows.is_empty() {
            return;
        }

        let separator_style = self.theme.style(Role::Rule);
        let columns = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut widths = vec![0usize; columns];
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }

        // Shrink proportionally when the table is wider than the pane
        let separators = columns.saturating_sub(1) * 3;
        let available = self.width.saturating_sub(separators + self.continuation_width());
        let total: usize = widths.iter().sum();
        if total > available && available > 0 {
            let scale = available as f64 / total as f64;
            for width in &mut widths {
                *width = ((*width as f64 * scale).floor() as usize).max(3);
            }
        }

        for (row_index, row) in rows.iter().enumerate() {
            let cell_style = if row_index == 0 {
                self.theme.style(Role::Strong)
            } else {
                self.theme.style(Role::Text)
            };

            let mut line = self.first_line_prefix();
            for (i, width) in widths.iter().enumerate() {
                if i > 0 {
                    line.push(Span::styled(" │ ", separator_style));
                }
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                line.push(Span::styled(fit_cell(cell, *width), cell_style));
            }
            self.lines.push(Line::from(line));

            if row_index == 0 {
                let rule = widths
                    .iter()
                    .map(|w| "─".repeat(*w))
                    .collect::<Vec<_>>()
                    .join("─┼─");
                let mut line = self.continuation_prefix();
                line.push(Span::styled(rule, separator_style));
                self.lines.push(Line::from(line));
            }
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        while self.lines.last().is_some_and(is_blank) {
            self.lines.pop();
        }
        self.lines
    }
}

/// Whitespace and quote bars only
fn is_blank(line: &Line<'_>) -> bool {
    line.spans
        .iter()
        .all(|span| span.content.chars().all(|c| c.is_whitespace() || c == '│'))
}

fn spans_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(|span| span.content.width()).sum()
}

/// Pad or truncate a table cell to exactly `width` columns
fn fit_cell(cell: &str, width: usize) -> String {
    if cell.width() <= width {
        let pad = width - cell.width();
        return format!("{}{}", cell, " ".repeat(pad));
    }

    let (head, _) = split_at_width(cell, width.saturating_sub(1));
    let mut out = format!("{}…", head);
    let pad = width.saturating_sub(out.width());
    out.push_str(&" ".repeat(pad));
    out
}

/// Longest prefix of `text` no wider than `max` columns
fn split_at_width(text: &str, max: usize) -> (&str, &str) {
    let mut used = 0;
    for (index, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            return text.split_at(index);
        }
        used += w;
    }
    (text, "")
}

/// Split text into alternating runs of whitespace and non-whitespace
fn tokens(text: &str) -> Vec<(bool, &str)> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_space = None;

    for (index, ch) in text.char_indices() {
        let is_space = ch.is_whitespace();
        match in_space {
            Some(current) if current != is_space => {
                out.push((current, &text[start..index]));
                start = index;
            }
            _ => {}
        }
        in_space = Some(is_space);
    }
    if let Some(current) = in_space {
        out.push((current, &text[start..]));
    }
    out
}

/// Greedy word wrap of styled spans by display width
fn wrap_spans(
    spans: Vec<Span<'static>>,
    width: usize,
    first: Vec<Span<'static>>,
    rest: &[Span<'static>],
) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    let mut prefix_width = spans_width(&first);
    let mut line = first;
    let mut used = prefix_width;
    let mut has_content = false;
    let mut pending_space: Option<Style> = None;

    for span in spans {
        let style = span.style;
        for (is_space, token) in tokens(&span.content) {
            if is_space {
                if has_content {
                    pending_space = Some(style);
                }
                continue;
            }

            let space = usize::from(pending_space.is_some());
            if has_content && used + space + token.width() > width {
                out.push(Line::from(std::mem::replace(&mut line, rest.to_vec())));
                prefix_width = spans_width(rest);
                used = prefix_width;
                has_content = false;
                pending_space = None;
            }
            if let Some(space_style) = pending_space.take() {
                line.push(Span::styled(" ", space_style));
                used += 1;
            }

            let mut remaining = token;
            loop {
                let remaining_width = remaining.width();
                if used + remaining_width <= width || width <= prefix_width {
                    line.push(Span::styled(remaining.to_string(), style));
                    used += remaining_width;
                    has_content = true;
                    break;
                }

                let (mut head, mut tail) = split_at_width(remaining, width - used);
                if head.is_empty() {
                    if has_content {
                        out.push(Line::from(std::mem::replace(&mut line, rest.to_vec())));
                        prefix_width = spans_width(rest);
                        used = prefix_width;
                        has_content = false;
                        continue;
                    }
                    // A single glyph wider than the line still has to go somewhere
                    let split = remaining.chars().next().map_or(remaining.len(), char::len_utf8);
                    (head, tail) = remaining.split_at(split);
                }

                line.push(Span::styled(head.to_string(), style));
                out.push(Line::from(std::mem::replace(&mut line, rest.to_vec())));
                prefix_width = spans_width(rest);
                used = prefix_width;
                has_content = false;
                remaining = tail;
                if remaining.is_empty() {
                    break;
                }
            }
        }
    }

    if has_content {
        out.push(Line::from(line));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn render(source: &str, width: u16) -> Vec<String> {
        let renderer = build_renderer("notty", width).unwrap();
        plain(&renderer.render(source).unwrap())
    }

    #[test]
    fn test_build_renderer_binds_width() {
        let renderer = build_renderer("dark", 42).unwrap();
        assert_eq!(renderer.width(), 42);
        assert_eq!(renderer.theme().name, "dark");
    }

    #[test]
    fn test_build_renderer_unknown_theme() {
        assert!(matches!(
            build_renderer("not-a-theme", 80),
            Err(RenderError::UnknownTheme(_))
        ));
    }

    #[test]
    fn test_heading_and_paragraph() {
        let lines = render("# Title\n\nSome text here.", 80);
        assert_eq!(lines, vec!["# Title", "", "Some text here."]);
    }

    #[test]
    fn test_paragraph_wraps_at_width() {
        let lines = render("one two three four five six seven", 10);
        assert_eq!(lines, vec!["one two", "three four", "five six", "seven"]);
        assert!(lines.iter().all(|l| l.width() <= 10));
    }

    #[test]
    fn test_long_word_is_broken() {
        let lines = render("abcdefghijklmnop", 6);
        assert_eq!(lines, vec!["abcdef", "ghijkl", "mnop"]);
    }

    #[test]
    fn test_wide_characters_wrap_by_display_width() {
        let lines = render("日本語 日本語", 7);
        assert_eq!(lines, vec!["日本語", "日本語"]);
    }

    #[test]
    fn test_bullet_list() {
        let lines = render("- first\n- second", 80);
        assert_eq!(lines, vec!["• first", "• second"]);
    }

    #[test]
    fn test_ordered_list_continuation_indent() {
        let lines = render("1. alpha beta gamma", 10);
        assert_eq!(lines, vec!["1. alpha", "  beta", "  gamma"]);
    }

    #[test]
    fn test_nested_list() {
        let lines = render("- outer\n  - inner", 80);
        assert_eq!(lines, vec!["• outer", "  ◦ inner"]);
    }

    #[test]
    fn test_block_quote() {
        let lines = render("> quoted text", 80);
        assert_eq!(lines, vec!["│ quoted text"]);
    }

    #[test]
    fn test_code_block_is_not_wrapped() {
        let lines = render("```\nlet value = a_very_long_identifier_name;\n```", 10);
        assert_eq!(
            lines,
            vec!["┌─ ", "│ let value = a_very_long_identifier_name;", "└─"]
        );
    }

    #[test]
    fn test_code_block_highlighted_with_theme() {
        let renderer = build_renderer("dark", 80).unwrap();
        let lines = renderer.render("```rust\nfn main() {}\n```").unwrap();
        let text = plain(&lines);
        assert_eq!(text[0], "┌─ rust");
        assert_eq!(text[1], "│ fn main() {}");
        assert!(lines[1].spans.iter().any(|s| s.style.fg.is_some()));
    }

    #[test]
    fn test_link_shows_destination() {
        let lines = render("[docs](https://example.com)", 80);
        assert_eq!(lines, vec!["docs <https://example.com>"]);
    }

    #[test]
    fn test_autolink_not_duplicated() {
        let lines = render("<https://example.com>", 80);
        assert_eq!(lines, vec!["https://example.com"]);
    }

    #[test]
    fn test_image_alt_text() {
        let lines = render("![diagram](img.png)", 80);
        assert_eq!(lines, vec!["[image: diagram]"]);
    }

    #[test]
    fn test_rule_spans_width() {
        let lines = render("above\n\n---\n\nbelow", 12);
        let rule = "─".repeat(12);
        assert_eq!(lines, vec!["above", "", rule.as_str(), "", "below"]);
    }

    #[test]
    fn test_table() {
        let lines = render("| A | B |\n|---|---|\n| 1 | 22 |", 80);
        assert_eq!(lines, vec!["A │ B ", "──┼───", "1 │ 22"]);
    }

    #[test]
    fn test_links_and_images_inside_table_cells() {
        let lines = render(
            "| a | b |\n|---|---|\n| [site](http://x.io) | ![pic](p.png) |\n\nAfter",
            60,
        );
        assert_eq!(lines[2], "site <http://x.io> │ [image: pic]");
        assert_eq!(lines[3..], ["", "After"]);
    }

    #[test]
    fn test_item_starting_with_code_block_keeps_marker() {
        let lines = render("- ```\n  code\n  ```\n- two", 80);
        assert_eq!(lines, vec!["• ┌─ ", "  │ code", "  └─", "• two"]);
    }

    #[test]
    fn test_task_list() {
        let lines = render("- [x] done\n- [ ] todo", 80);
        assert_eq!(lines, vec!["• [x] done", "• [ ] todo"]);
    }

    #[test]
    fn test_styles_applied() {
        let renderer = build_renderer("dark", 80).unwrap();
        let lines = renderer.render("**bold** and *it*").unwrap();
        let bold = &lines[0].spans[0];
        assert_eq!(bold.content, "bold");
        assert!(bold.style.add_modifier.contains(ratatui::style::Modifier::BOLD));
    }

    #[test]
    fn test_empty_source() {
        assert!(render("", 80).is_empty());
    }
}
