// ABOUTME: Draws the browser screen with ratatui widgets
// ABOUTME: Tab bar, list pane, divider, viewport, and help/status line

use super::list::{ListPane, PaneEntry};
use super::model::{BrowseModel, Tab};
use crate::constants::keys::{HELP_LIST, HELP_MEDIA, HELP_TEXT};
use crate::constants::placeholders::{NO_MARKDOWN_FILES, NO_MEDIA};
use ratatui::layout::{Constraint, Layout, Margin};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const ACCENT: Color = Color::Indexed(205);
const MUTED: Color = Color::Indexed(240);

pub fn draw(frame: &mut Frame, model: &BrowseModel) {
    let [tabs, _gap, body, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(Paragraph::new(tab_bar(model.active_tab())), tabs);

    let tab = model.active_tab();
    if tab.has_list() {
        let layout = model.layout();
        let [list_area, divider, content] = Layout::horizontal([
            Constraint::Length(layout.list_width),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(body);

        let list = match tab {
            Tab::Media => pane_lines(model.media_list(), NO_MEDIA),
            _ => pane_lines(model.markdown_list(), NO_MARKDOWN_FILES),
        };
        frame.render_widget(Paragraph::new(list), list_area);

        let rule: Vec<Line> = (0..divider.height)
            .map(|_| Line::styled("│", Style::default().fg(MUTED)))
            .collect();
        frame.render_widget(Paragraph::new(rule), divider);

        frame.render_widget(Paragraph::new(model.viewport().visible_text()), content);
    } else {
        let content = body.inner(Margin::new(1, 0));
        frame.render_widget(Paragraph::new(model.viewport().visible_text()), content);
    }

    frame.render_widget(Paragraph::new(help_line(model)), help);
}

/// Labels padded by one cell on each side so each spans `len + 2` columns
fn tab_bar(active: Tab) -> Line<'static> {
    let spans: Vec<Span> = Tab::ALL
        .iter()
        .map(|&tab| {
            let label = format!(" {} ", tab.title());
            if tab == active {
                Span::styled(label, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            } else {
                Span::styled(label, Style::default().fg(MUTED))
            }
        })
        .collect();
    Line::from(spans)
}

fn pane_lines<T: PaneEntry>(pane: &ListPane<T>, empty: &'static str) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(
            pane.title(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::default(),
    ];

    if pane.is_empty() {
        lines.push(Line::styled(empty, Style::default().fg(MUTED)));
        return lines;
    }

    let selected = pane.selected_index();
    for (index, entry) in pane.visible_entries() {
        let (marker, title_style, desc_style) = if Some(index) == selected {
            (
                Span::styled("│ ", Style::default().fg(ACCENT)),
                Style::default().fg(ACCENT),
                Style::default().fg(ACCENT).add_modifier(Modifier::DIM),
            )
        } else {
            (
                Span::raw("  "),
                Style::default(),
                Style::default().fg(MUTED),
            )
        };
        lines.push(Line::from(vec![
            marker.clone(),
            Span::styled(entry.title().to_string(), title_style),
        ]));
        lines.push(Line::from(vec![
            marker,
            Span::styled(entry.description(), desc_style),
        ]));
        lines.push(Line::default());
    }
    lines
}

fn help_line(model: &BrowseModel) -> Line<'static> {
    if let Some(status) = model.status() {
        return Line::styled(status.to_string(), Style::default().fg(Color::Red));
    }

    let keys = match model.active_tab() {
        Tab::Media if model.images_enabled() => HELP_MEDIA,
        Tab::Markdown | Tab::Media => HELP_LIST,
        Tab::Metadata | Tab::Header => HELP_TEXT,
    };
    let percent = (model.viewport().scroll_percent() * 100.0).round() as u32;
    Line::styled(
        format!("{} • {}%", keys, percent),
        Style::default().fg(MUTED),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::model::BrowseOptions;
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use mdocx_sdk::{Document, MarkdownFile};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    fn model(document: Document) -> BrowseModel {
        let options = BrowseOptions {
            theme: "notty".to_string(),
            images_enabled: false,
        };
        let mut model = BrowseModel::new(document, None, options).unwrap();
        model.update(Event::Resize(80, 16));
        model
    }

    #[test]
    fn test_tab_bar_labels() {
        let line = tab_bar(Tab::Media);
        assert_eq!(line.to_string(), " Markdown  Media  Metadata  Header ");
        assert_eq!(line.spans[1].style.fg, Some(ACCENT));
        assert_eq!(line.spans[0].style.fg, Some(MUTED));
    }

    #[test]
    fn test_draw_markdown_tab() {
        let document = Document {
            markdown_files: vec![MarkdownFile {
                path: "intro.md".to_string(),
                content: b"Hello there".to_vec(),
            }],
            ..Document::default()
        };
        let model = model(document);

        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal.draw(|frame| draw(frame, &model)).unwrap();

        assert!(row_text(&terminal, 0).starts_with(" Markdown  Media"));
        assert_eq!(row_text(&terminal, 1), "");
        assert!(row_text(&terminal, 2).starts_with("Markdown"));
        assert!(row_text(&terminal, 4).starts_with("│ intro.md"));
        assert!(row_text(&terminal, 5).starts_with("│ 11 bytes"));
        assert!(row_text(&terminal, 2).contains("│Hello there"));
        assert!(row_text(&terminal, 15).starts_with("tab/←→ switch"));
    }

    #[test]
    fn test_draw_empty_lists_and_text_tabs() {
        let mut model = model(Document::default());

        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal.draw(|frame| draw(frame, &model)).unwrap();
        assert!(row_text(&terminal, 4).starts_with("(no markdown files)"));

        let tab = Event::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        model.update(tab.clone());
        model.update(tab);
        terminal.draw(|frame| draw(frame, &model)).unwrap();
        assert_eq!(row_text(&terminal, 2), " (no metadata)");
    }
}
