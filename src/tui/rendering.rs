use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{Route, StatusMessage};
use super::dates::format_date_ja;
use super::layout::{AppLayout, palette_rect};
use crate::models::{ContentItem, Note};
use crate::timeline::MonthGroup;
use crate::utils::strip_ansi_codes;

/// Everything one frame needs, borrowed from the app
pub struct RenderState<'a> {
    pub months: &'a [(String, MonthGroup)],
    pub total_notes: usize,
    pub selected_idx: usize,
    pub route: &'a Route,
    pub note: Option<&'a Note>,
    pub note_scroll: u16,
    pub palette: Option<PaletteView<'a>>,
    pub status_message: Option<&'a StatusMessage>,
}

/// Palette overlay state for one frame
pub struct PaletteView<'a> {
    pub query: &'a str,
    pub loading: bool,
    pub error: Option<&'a str>,
    pub groups: Vec<(String, Vec<&'a ContentItem>)>,
    pub selected_idx: usize,
}

/// Render the entire UI
pub fn render_ui(
    frame: &mut Frame,
    state: &RenderState,
    timeline_state: &mut ListState,
    palette_state: &mut ListState,
) {
    let layout = AppLayout::new(frame.area());

    match state.route {
        Route::Timeline => {
            render_timeline(frame, layout.content_area, state, timeline_state);
        }
        Route::Note { .. } => {
            render_note(frame, layout.content_area, state.note, state.note_scroll);
        }
    }

    render_status_bar(frame, layout.status_area, state);

    if let Some(palette) = &state.palette {
        render_palette(frame, frame.area(), palette, palette_state);
    }
}

/// Row index of the selected note in the timeline list, counting the month
/// header rows above it
fn timeline_row(months: &[(String, MonthGroup)], selected_idx: usize) -> usize {
    let mut row = 0;
    let mut remaining = selected_idx;
    for (_, group) in months {
        row += 1; // month header
        if remaining < group.items.len() {
            return row + remaining;
        }
        remaining -= group.items.len();
        row += group.items.len();
    }
    0
}

/// Row index of the selected palette result, counting kind header rows
fn palette_row(groups: &[(String, Vec<&ContentItem>)], selected_idx: usize) -> usize {
    let mut row = 0;
    let mut remaining = selected_idx;
    for (_, items) in groups {
        row += 1; // kind header
        if remaining < items.len() {
            return row + remaining;
        }
        remaining -= items.len();
        row += items.len();
    }
    0
}

fn render_timeline(
    frame: &mut Frame,
    area: Rect,
    state: &RenderState,
    timeline_state: &mut ListState,
) {
    if state.months.is_empty() {
        let empty = Paragraph::new("No published notes yet")
            .style(Style::default().fg(Color::Rgb(113, 113, 122)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Rgb(113, 113, 122)))
                    .title(" Notes "),
            );
        frame.render_widget(empty, area);
        return;
    }

    let mut rows: Vec<ListItem> = Vec::new();
    for (_, group) in state.months {
        rows.push(
            ListItem::new(group.label.clone()).style(
                Style::default().fg(Color::Rgb(16, 185, 129)).add_modifier(Modifier::BOLD),
            ),
        );

        for item in &group.items {
            let mut spans = vec![
                Span::raw("  "),
                Span::styled(
                    item.metadata.date.clone(),
                    Style::default().fg(Color::Rgb(113, 113, 122)),
                ),
                Span::raw("  "),
                Span::raw(item.metadata.title.clone()),
            ];
            if !item.metadata.tags.is_empty() {
                let tags = item
                    .metadata
                    .tags
                    .iter()
                    .map(|t| format!("#{}", t))
                    .collect::<Vec<_>>()
                    .join(" ");
                spans.push(Span::styled(
                    format!("  {}", tags),
                    Style::default().fg(Color::Rgb(113, 113, 122)),
                ));
            }
            rows.push(
                ListItem::new(Line::from(spans))
                    .style(Style::default().fg(Color::Rgb(250, 250, 250))),
            );
        }
    }

    timeline_state.select(Some(timeline_row(state.months, state.selected_idx)));

    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(113, 113, 122)))
                .title(" Notes "),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Rgb(250, 250, 250))
                .bg(Color::Rgb(16, 185, 129))
                .add_modifier(Modifier::BOLD),
        );

    frame.render_stateful_widget(list, area, timeline_state);
}

fn render_note(frame: &mut Frame, area: Rect, note: Option<&Note>, scroll: u16) {
    let content = if let Some(note) = note {
        let mut lines = vec![
            Line::from(Span::styled(
                note.metadata.title.clone(),
                Style::default().fg(Color::Rgb(250, 250, 250)).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                meta_line(note),
                Style::default().fg(Color::Rgb(113, 113, 122)),
            )),
        ];
        if let Some(description) = &note.metadata.description {
            lines.push(Line::from(Span::styled(
                description.clone(),
                Style::default().fg(Color::Rgb(113, 113, 122)),
            )));
        }
        lines.push(Line::from(""));

        // MDX bodies occasionally carry escape sequences pasted from terminal
        // output; keep them from corrupting the UI
        let body = strip_ansi_codes(&note.content);
        for line in body.lines() {
            lines.push(Line::from(line.to_string()));
        }

        Text::from(lines)
    } else {
        Text::from("Note not found")
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(113, 113, 122)))
                .title(" Note "),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}

fn meta_line(note: &Note) -> String {
    let mut meta = format_date_ja(&note.metadata.date);
    if !note.metadata.tags.is_empty() {
        let tags = note
            .metadata
            .tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ");
        meta.push_str("  ");
        meta.push_str(&tags);
    }
    meta
}

fn render_palette(
    frame: &mut Frame,
    full_area: Rect,
    palette: &PaletteView,
    palette_state: &mut ListState,
) {
    let area = palette_rect(full_area);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(16, 185, 129)))
        .title(" 検索 ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // query input
            Constraint::Min(1),    // results
        ])
        .split(inner);

    let input = if palette.query.is_empty() {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Rgb(16, 185, 129))),
            Span::styled("検索...", Style::default().fg(Color::Rgb(113, 113, 122))),
        ])
    } else {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Rgb(16, 185, 129))),
            Span::styled(
                palette.query.to_string(),
                Style::default().fg(Color::Rgb(250, 250, 250)),
            ),
        ])
    };
    frame.render_widget(Paragraph::new(input), chunks[0]);

    if palette.loading {
        let loading = Paragraph::new("読み込み中...")
            .style(Style::default().fg(Color::Rgb(113, 113, 122)));
        frame.render_widget(loading, chunks[1]);
        return;
    }

    if let Some(error) = palette.error {
        let message = Paragraph::new(format!("読み込みに失敗しました: {}", error))
            .style(Style::default().fg(Color::Rgb(239, 68, 68)))
            .wrap(Wrap { trim: false });
        frame.render_widget(message, chunks[1]);
        return;
    }

    if palette.groups.is_empty() {
        let empty = Paragraph::new("検索結果が見つかりませんでした")
            .style(Style::default().fg(Color::Rgb(113, 113, 122)));
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let mut rows: Vec<ListItem> = Vec::new();
    for (kind, items) in &palette.groups {
        rows.push(ListItem::new(kind.clone()).style(
            Style::default().fg(Color::Rgb(113, 113, 122)).add_modifier(Modifier::BOLD),
        ));

        for item in items {
            let mut spans = vec![Span::raw("  "), Span::raw(item.metadata.title.clone())];
            if !item.metadata.tags.is_empty() {
                let tags = item
                    .metadata
                    .tags
                    .iter()
                    .map(|t| format!("#{}", t))
                    .collect::<Vec<_>>()
                    .join(" ");
                spans.push(Span::styled(
                    format!("  {}", tags),
                    Style::default().fg(Color::Rgb(113, 113, 122)),
                ));
            }
            rows.push(
                ListItem::new(Line::from(spans))
                    .style(Style::default().fg(Color::Rgb(250, 250, 250))),
            );
        }
    }

    palette_state.select(Some(palette_row(&palette.groups, palette.selected_idx)));

    let list = List::new(rows).highlight_style(
        Style::default()
            .fg(Color::Rgb(250, 250, 250))
            .bg(Color::Rgb(16, 185, 129))
            .add_modifier(Modifier::BOLD),
    );

    frame.render_stateful_widget(list, chunks[1], palette_state);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (status_text, style) = if let Some(message) = state.status_message {
        let color = match message.message_type {
            super::app::MessageType::Success => Color::Rgb(16, 185, 129),
            super::app::MessageType::Error => Color::Rgb(239, 68, 68),
        };
        (
            format!(" {} ", message.text),
            Style::default().fg(color).bg(Color::Rgb(24, 24, 27)),
        )
    } else {
        let parts = match state.route {
            Route::Timeline => {
                if state.total_notes == 0 {
                    vec![
                        "No notes".to_string(),
                        "Ctrl+K: search".to_string(),
                        "Ctrl+C: quit".to_string(),
                    ]
                } else {
                    vec![
                        format!("note {}/{}", state.selected_idx + 1, state.total_notes),
                        "Enter: open".to_string(),
                        "Ctrl+K: search".to_string(),
                        "Ctrl+Y: copy URL".to_string(),
                        "Ctrl+C: quit".to_string(),
                    ]
                }
            }
            Route::Note { slug } => {
                let date = state
                    .note
                    .map(|n| format_date_ja(&n.metadata.date))
                    .unwrap_or_default();
                vec![
                    format!("/notes/{}", slug),
                    date,
                    "Esc: back".to_string(),
                    "Ctrl+Y: copy URL".to_string(),
                    "Ctrl+C: quit".to_string(),
                ]
            }
        };

        (
            format!(" {} ", parts.join(" | ")),
            Style::default().fg(Color::Rgb(250, 250, 250)).bg(Color::Rgb(24, 24, 27)),
        )
    };

    let paragraph = Paragraph::new(status_text).style(style);

    frame.render_widget(paragraph, area);
}
