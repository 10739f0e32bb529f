use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Base layout: full-width content with a status bar row
pub struct AppLayout {
    pub content_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create the base layout:
    /// - Content (timeline or note view): everything above the status bar
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Content (at least 3 rows)
                Constraint::Length(1), // Status bar (1 row)
            ])
            .split(area);

        Self {
            content_area: vertical_chunks[0],
            status_area: vertical_chunks[1],
        }
    }
}

/// Centered overlay rect for the command palette:
/// 60% of the width, 70% of the height
pub fn palette_rect(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
