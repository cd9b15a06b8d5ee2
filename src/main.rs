mod app;
mod cli;
mod draw;
mod keys;
mod scoreboard;
mod state;
mod ui;
mod watch;

use crate::cli::{Cli, Commands};
use crate::state::app_settings::AppSettings;
use cbb_api::client::NcaaApi;
use chrono::Local;
use crossterm::{cursor, execute, terminal};
use std::process::ExitCode;
use std::{io, panic};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse_args();
    let settings = AppSettings::load();

    better_panic::install();
    setup_panic_hook();

    tui_logger::init_logger(settings.log_level)?;
    tui_logger::set_default_level(settings.log_level);

    let mut api = NcaaApi::new();
    if let Some(base) = &settings.api_base {
        api = api.with_base_url(base.as_str());
    }

    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let criteria = cli.criteria();

    match cli.command {
        None => app::show_scoreboard(&api, date, &criteria).await,
        Some(Commands::Watch) => app::watch(api, date, &criteria).await,
    }
}

fn cleanup_terminal() {
    let mut stdout = io::stdout();
    let _ = terminal::disable_raw_mode();
    let _ = execute!(stdout, cursor::Show);
}

fn setup_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        cleanup_terminal();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));
}
