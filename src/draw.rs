use std::io::{self, Stdout};

use anyhow::anyhow;
use chrono::Local;
use crossterm::event::{self as crossterm_event, Event};
use crossterm::terminal;
use log::debug;
use tui::backend::{Backend, CrosstermBackend};
use tui::layout::{Constraint, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span, Text};
use tui::widgets::{Block, BorderType, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table};
use tui::{Terminal, TerminalOptions, Viewport};
use tui_logger::TuiLoggerWidget;

use crate::keys::{self, SelectorAction};
use crate::scoreboard::{PresentableRow, StyledCell, format_game};
use crate::ui::layout::{WATCH_VIEWPORT_HEIGHT, WatchLayout};
use crate::watch::{GameChoice, Selector, Tick, TickSink};

static HEADERS: &[&str; 2] = &["Teams", "Score"];
const TEAMS_WIDTH: u16 = 22;
const DETAILS_WIDTH: u16 = 26;
const COLUMN_SPACING: u16 = 2;
const SELECTOR_MAX_HEIGHT: u16 = 14;

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn winner_style() -> Style {
    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
}

fn styled_text(cell: &StyledCell) -> Text<'static> {
    let lines: Vec<Line<'static>> = cell
        .lines
        .iter()
        .map(|line| {
            Line::from(
                line.iter()
                    .map(|fragment| {
                        if fragment.highlight {
                            Span::styled(fragment.text.clone(), winner_style())
                        } else {
                            Span::raw(fragment.text.clone())
                        }
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    Text::from(lines)
}

// ---------------------------------------------------------------------------
// Scoreboard table
// ---------------------------------------------------------------------------

pub fn scoreboard_table(rows: &[PresentableRow]) -> Table<'static> {
    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h)))
        .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD));

    let body = rows.iter().map(|row| {
        Row::new(vec![
            Cell::from(styled_text(&row.teams)),
            Cell::from(styled_text(&row.details)),
        ])
        .height(row.height() as u16)
    });

    Table::new(
        body,
        [Constraint::Length(TEAMS_WIDTH), Constraint::Length(DETAILS_WIDTH)],
    )
    .header(header)
    .column_spacing(COLUMN_SPACING)
    .block(default_border(Color::DarkGray))
}

/// Borders, header and every row.
pub fn table_height(rows: &[PresentableRow]) -> u16 {
    3 + rows.iter().map(|r| r.height() as u16).sum::<u16>()
}

pub fn table_width() -> u16 {
    TEAMS_WIDTH + COLUMN_SPACING + DETAILS_WIDTH + 2
}

fn fit(area: Rect, width: u16, height: u16) -> Rect {
    Rect::new(area.x, area.y, width.min(area.width), height.min(area.height))
}

pub fn draw_scoreboard<B>(terminal: &mut Terminal<B>, rows: &[PresentableRow]) -> anyhow::Result<()>
where
    B: Backend,
{
    terminal
        .draw(|f| {
            let area = fit(f.area(), table_width(), table_height(rows));
            f.render_widget(scoreboard_table(rows), area);
        })
        .map_err(|e| anyhow!("failed to draw scoreboard: {e}"))?;
    Ok(())
}

/// Draw the table once, inline, and leave it in the scrollback.
pub fn print_scoreboard(rows: &[PresentableRow]) -> anyhow::Result<()> {
    let mut terminal = Terminal::with_options(
        CrosstermBackend::new(io::stdout()),
        TerminalOptions { viewport: Viewport::Inline(table_height(rows)) },
    )?;
    draw_scoreboard(&mut terminal, rows)?;
    terminal.show_cursor()?;
    drop(terminal);
    println!();
    Ok(())
}

// ---------------------------------------------------------------------------
// Live game picker
// ---------------------------------------------------------------------------

pub fn draw_selector<B>(terminal: &mut Terminal<B>, selector: &Selector) -> anyhow::Result<()>
where
    B: Backend,
{
    let items: Vec<ListItem> = selector
        .choices()
        .iter()
        .map(|choice| ListItem::new(choice.label.clone()))
        .collect();
    let list = List::new(items)
        .block(default_border(Color::White).title(" Which game? (j/k, Enter, q) "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(selector.selected_index()));

    terminal
        .draw(|f| f.render_stateful_widget(list, f.area(), &mut state))
        .map_err(|e| anyhow!("failed to draw game picker: {e}"))?;
    Ok(())
}

/// Let the user pick one of `choices`. `None` when they back out.
pub fn run_selector(choices: Vec<GameChoice>) -> anyhow::Result<Option<String>> {
    let selector = Selector::new(choices);
    let height = (selector.choices().len() as u16 + 2).min(SELECTOR_MAX_HEIGHT);

    terminal::enable_raw_mode()?;
    let picked = pick(selector, height);
    terminal::disable_raw_mode()?;
    picked
}

fn pick(mut selector: Selector, height: u16) -> anyhow::Result<Option<String>> {
    let mut terminal = Terminal::with_options(
        CrosstermBackend::new(io::stdout()),
        TerminalOptions { viewport: Viewport::Inline(height) },
    )?;

    let picked = loop {
        draw_selector(&mut terminal, &selector)?;
        if let Event::Key(key_event) = crossterm_event::read()? {
            match keys::handle_selector_key(key_event, &mut selector) {
                SelectorAction::Pending => {}
                SelectorAction::Chosen(game_id) => break Some(game_id),
                SelectorAction::Aborted => break None,
            }
        }
    };

    terminal.clear()?;
    terminal.show_cursor()?;
    Ok(picked)
}

// ---------------------------------------------------------------------------
// Watch view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
enum Status {
    Waiting,
    UpdatedAt(String),
    Final(String),
    FetchFailed(String),
}

/// Single-game table plus a status line and log pane, redrawn in place on
/// every tick.
pub struct WatchView<B: Backend> {
    terminal: Terminal<B>,
    show_logs: bool,
    row: Option<PresentableRow>,
    status: Status,
}

impl WatchView<CrosstermBackend<Stdout>> {
    pub fn inline() -> anyhow::Result<Self> {
        let terminal = Terminal::with_options(
            CrosstermBackend::new(io::stdout()),
            TerminalOptions { viewport: Viewport::Inline(WATCH_VIEWPORT_HEIGHT) },
        )?;
        let mut view = Self::new(terminal, true);
        view.draw()?;
        Ok(view)
    }
}

impl<B: Backend> WatchView<B> {
    pub fn new(terminal: Terminal<B>, show_logs: bool) -> Self {
        Self { terminal, show_logs, row: None, status: Status::Waiting }
    }

    fn draw(&mut self) -> anyhow::Result<()> {
        let rows: Vec<PresentableRow> = self.row.iter().cloned().collect();
        let status = status_line(&self.status);
        let show_logs = self.show_logs;

        self.terminal
            .draw(|f| {
                let layout = WatchLayout::new(f.area(), show_logs);
                let table_area = fit(layout.table, table_width(), layout.table.height);
                f.render_widget(scoreboard_table(&rows), table_area);
                f.render_widget(Paragraph::new(status), layout.status);
                if show_logs {
                    let logs = TuiLoggerWidget::default()
                        .block(default_border(Color::DarkGray).title(" Log "))
                        .style_error(Style::default().fg(Color::Red))
                        .style_warn(Style::default().fg(Color::Yellow))
                        .output_target(false)
                        .output_file(false)
                        .output_line(false);
                    f.render_widget(logs, layout.logs);
                }
            })
            .map_err(|e| anyhow!("failed to draw watch view: {e}"))?;
        Ok(())
    }
}

fn status_line(status: &Status) -> Line<'static> {
    match status {
        Status::Waiting => Line::from(Span::styled(
            " Fetching...",
            Style::default().fg(Color::DarkGray),
        )),
        Status::UpdatedAt(time) => Line::from(Span::styled(
            format!(" Updated {time}  (Ctrl-C to stop)"),
            Style::default().fg(Color::DarkGray),
        )),
        Status::Final(message) => Line::from(Span::styled(
            format!(" Game over: {message}"),
            winner_style(),
        )),
        Status::FetchFailed(err) => Line::from(Span::styled(
            format!(" Update failed, retrying: {err}"),
            Style::default().fg(Color::Red),
        )),
    }
}

impl<B: Backend> TickSink for WatchView<B> {
    fn render(&mut self, tick: Tick<'_>) -> anyhow::Result<()> {
        match tick {
            Tick::Updated(game) => {
                let row = format_game(game, &Local);
                debug!("game {}: {}", game.id, row.details.plain_text().replace('\n', " / "));
                self.row = Some(row);
                self.status = match &game.lifecycle {
                    cbb_api::Lifecycle::Final { message, .. } => Status::Final(message.clone()),
                    _ => Status::UpdatedAt(Local::now().format("%-I:%M:%S %p").to_string()),
                };
            }
            // Keep the last good row on screen.
            Tick::FetchFailed(err) => self.status = Status::FetchFailed(err.to_string()),
        }
        self.draw()
    }
}
