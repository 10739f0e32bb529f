//! TUI application state and event handling.
//!
//! This module implements the main TUI logic for notesite. It manages:
//!
//! - **Timeline browsing**: Month-grouped note list with a movable selection
//! - **Note view**: Scrollable note body with a metadata header
//! - **Command palette**: Ctrl+K overlay over a lazily loaded item list
//! - **Status messages**: Transient feedback for clipboard and load errors
//! - **Dirty state tracking**: Optimized rendering only when state changes
//!
//! # Architecture
//!
//! The `App` struct owns all application state and runs the main event loop
//! via `run()`. Key presses arrive as context-free [`Action`]s and are
//! interpreted by state: with the palette open they edit the query and move
//! the result selection, otherwise they drive the timeline or scroll the open
//! note. The palette's content load runs on a background thread owned by
//! [`SearchSession`]; the loop polls it every tick so the load completes even
//! while the palette is closed.
//!
//! # Example
//!
//! ```rust,ignore
//! let notes = store.published()?;
//! let session = SearchSession::new(Arc::new(SiteItemSource::new(site_dir)));
//! let mut app = App::new(notes, session);
//! app.run(&mut terminal)?;
//! ```

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::widgets::ListState;

use super::events::{Action, poll_event};
use super::rendering::{PaletteView, RenderState, render_ui};
use crate::clipboard::copy_url;
use crate::indexer::note_item;
use crate::models::{ContentItem, Note};
use crate::search::{Navigator, SearchSession, group_by_kind};
use crate::timeline::{MonthGroup, group_by_month, sort_descending};
use crate::utils::{decode_url_slug, encode_url};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Which screen sits under the (optional) palette overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Timeline,
    Note { slug: String },
}

/// Captures the URL handed over by [`SearchSession::select`]
#[derive(Default)]
struct RecordedNavigation {
    url: Option<String>,
}

impl Navigator for RecordedNavigation {
    fn navigate(&mut self, url: &str) {
        self.url = Some(url.to_string());
    }
}

fn step_index(current: usize, delta: isize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    let new_idx = (current as isize + delta).max(0) as usize;
    new_idx.min(total - 1)
}

pub struct App {
    /// Published notes, newest first (bodies for the note view)
    notes: Vec<Note>,
    /// Timeline groups, newest month first
    months: Vec<(String, MonthGroup)>,
    /// Selectable timeline rows in display order
    timeline_items: Vec<ContentItem>,
    route: Route,
    selected_idx: usize,
    note_scroll: u16,
    search: SearchSession,
    palette_idx: usize,
    // Status message (clipboard feedback, load errors, etc.)
    status_message: Option<StatusMessage>,
    should_quit: bool,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(notes: Vec<Note>, search: SearchSession) -> Self {
        let items: Vec<ContentItem> =
            notes.iter().map(|note| note_item(note, "note", "/notes")).collect();
        let months = sort_descending(group_by_month(&items));

        // Flattened display order: months descending, store order within each
        let timeline_items: Vec<ContentItem> = months
            .iter()
            .flat_map(|(_, group)| group.items.iter().cloned())
            .collect();

        Self {
            notes,
            months,
            timeline_items,
            route: Route::Timeline,
            selected_idx: 0,
            note_scroll: 0,
            search,
            palette_idx: 0,
            status_message: None,
            should_quit: false,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        // List widget offsets live across draws so scrolling stays smooth
        let mut timeline_state = ListState::default();
        let mut palette_state = ListState::default();

        while !self.should_quit {
            // Clear expired status messages (marks dirty if cleared)
            let had_status = self.status_message.is_some();
            self.check_and_clear_expired_status();
            if had_status && self.status_message.is_none() {
                self.needs_redraw = true;
            }

            // Drive the palette's background load forward, open or not
            if self.search.poll() {
                self.needs_redraw = true;
            }

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                let note = self.current_note();
                let palette = self.search.is_open().then(|| PaletteView {
                    query: self.search.query(),
                    loading: self.search.is_loading(),
                    error: self.search.last_error(),
                    groups: group_by_kind(&self.search.filter()),
                    selected_idx: self.palette_idx,
                });

                terminal.draw(|f| {
                    let state = RenderState {
                        months: &self.months,
                        total_notes: self.timeline_items.len(),
                        selected_idx: self.selected_idx,
                        route: &self.route,
                        note,
                        note_scroll: self.note_scroll,
                        palette,
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &state, &mut timeline_state, &mut palette_state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            // Handle events
            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Back => self.go_back(),
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-10),
            Action::PageDown => self.move_selection(10),
            Action::Input(c) => self.palette_input(c),
            Action::DeleteChar => self.palette_delete_char(),
            Action::ToggleSearch => self.toggle_palette(),
            Action::Select => self.select_current(),
            Action::CopyUrl => self.copy_current_url(),
            Action::None => {}
        }
    }

    /// Esc: close the palette, leave the note view, or quit, in that order
    fn go_back(&mut self) {
        if self.search.is_open() {
            self.search.close();
            self.needs_redraw = true;
        } else if matches!(self.route, Route::Note { .. }) {
            self.route = Route::Timeline;
            self.note_scroll = 0;
            self.needs_redraw = true;
        } else {
            self.should_quit = true;
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.search.is_open() {
            let new_idx = step_index(self.palette_idx, delta, self.palette_entry_count());
            if new_idx != self.palette_idx {
                self.palette_idx = new_idx;
                self.needs_redraw = true;
            }
            return;
        }

        match self.route {
            Route::Timeline => {
                let new_idx = step_index(self.selected_idx, delta, self.timeline_items.len());
                if new_idx != self.selected_idx {
                    self.selected_idx = new_idx;
                    self.needs_redraw = true;
                }
            }
            Route::Note { .. } => self.scroll_note(delta),
        }
    }

    fn scroll_note(&mut self, delta: isize) {
        let max_scroll = self
            .current_note()
            .map(|note| {
                note.content.lines().count().saturating_sub(1).min(u16::MAX as usize) as u16
            })
            .unwrap_or(0);

        let new_scroll = if delta < 0 {
            self.note_scroll.saturating_sub(delta.unsigned_abs().min(u16::MAX as usize) as u16)
        } else {
            self.note_scroll.saturating_add(delta as u16).min(max_scroll)
        };

        if new_scroll != self.note_scroll {
            self.note_scroll = new_scroll;
            self.needs_redraw = true;
        }
    }

    fn toggle_palette(&mut self) {
        if self.search.is_open() {
            self.search.close();
        } else {
            self.search.open();
            self.palette_idx = 0;
        }
        self.needs_redraw = true;
    }

    fn palette_input(&mut self, c: char) {
        if !self.search.is_open() {
            return;
        }
        // Limit query to 256 bytes to keep pathological input out of the filter
        if self.search.query().len() < 256 {
            let mut query = self.search.query().to_string();
            query.push(c);
            self.search.set_query(query);
            self.palette_idx = 0; // Reset selection on query change
            self.needs_redraw = true;
        }
    }

    fn palette_delete_char(&mut self) {
        if !self.search.is_open() {
            return;
        }
        let mut query = self.search.query().to_string();
        if query.pop().is_some() {
            self.search.set_query(query);
            self.palette_idx = 0;
            self.needs_redraw = true;
        }
    }

    fn select_current(&mut self) {
        if self.search.is_open() {
            let Some(url) = self.palette_entry_url(self.palette_idx) else {
                return;
            };
            let mut navigation = RecordedNavigation::default();
            self.search.select(&url, &mut navigation);
            self.needs_redraw = true;
            if let Some(url) = navigation.url {
                self.open_url(&url);
            }
            return;
        }

        if self.route == Route::Timeline {
            let Some(item) = self.timeline_items.get(self.selected_idx) else {
                return;
            };
            let url = item.url.clone();
            self.open_url(&url);
        }
    }

    /// Follow a site URL inside the TUI. Only note pages have a terminal
    /// view; anything else gets a status message instead.
    fn open_url(&mut self, url: &str) {
        match decode_url_slug(url, "/notes") {
            Some(slug) if self.notes.iter().any(|n| n.slug == slug) => {
                self.route = Route::Note { slug };
                self.note_scroll = 0;
                self.needs_redraw = true;
            }
            Some(slug) => {
                // In the index but not loaded: a draft, or the index is stale
                self.set_status(
                    format!("✗ Note not loaded: {}", slug),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
            None => {
                self.set_status(
                    format!("✗ No terminal view for {}", url),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
        }
    }

    fn copy_current_url(&mut self) {
        let url = if self.search.is_open() {
            self.palette_entry_url(self.palette_idx)
        } else {
            match &self.route {
                Route::Timeline => {
                    self.timeline_items.get(self.selected_idx).map(|item| item.url.clone())
                }
                Route::Note { slug } => Some(encode_url("/notes", slug)),
            }
        };

        let Some(url) = url else {
            self.set_status("✗ Nothing to copy", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };

        match copy_url(&url) {
            Ok(()) => {
                self.set_status(
                    format!("✓ Copied {}", url),
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                );
            }
            Err(e) => {
                self.set_status(
                    format!("✗ Clipboard error: {}", e),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
        }
    }

    fn current_note(&self) -> Option<&Note> {
        match &self.route {
            Route::Note { slug } => self.notes.iter().find(|n| n.slug == *slug),
            Route::Timeline => None,
        }
    }

    /// Palette results in display order: grouped by kind, flattened
    fn palette_entry_count(&self) -> usize {
        group_by_kind(&self.search.filter()).iter().map(|(_, items)| items.len()).sum()
    }

    fn palette_entry_url(&self, idx: usize) -> Option<String> {
        let groups = group_by_kind(&self.search.filter());
        let mut remaining = idx;
        for (_, items) in &groups {
            if remaining < items.len() {
                return Some(items[remaining].url.clone());
            }
            remaining -= items.len();
        }
        None
    }
}
