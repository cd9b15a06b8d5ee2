use tui::layout::{Constraint, Layout, Rect};

/// Borders, header and one two-line row.
pub const WATCH_TABLE_HEIGHT: u16 = 5;
pub const STATUS_HEIGHT: u16 = 1;
pub const LOG_PANE_HEIGHT: u16 = 8;
pub const WATCH_VIEWPORT_HEIGHT: u16 = WATCH_TABLE_HEIGHT + STATUS_HEIGHT + LOG_PANE_HEIGHT;

/// Areas of the watch view, top to bottom.
pub struct WatchLayout {
    pub table: Rect,
    pub status: Rect,
    pub logs: Rect,
}

impl WatchLayout {
    pub fn new(area: Rect, show_logs: bool) -> Self {
        let [table, status, logs] = Layout::vertical([
            Constraint::Length(WATCH_TABLE_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Fill(1),
        ])
        .areas(area);

        WatchLayout {
            table,
            status,
            logs: if show_logs { logs } else { Rect::ZERO },
        }
    }
}
