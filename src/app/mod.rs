//! TUI Application module

mod async_ops;
mod events;
mod state;
mod ui;

pub use state::{AppState, FormFocus, Mode};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::runtime::Runtime;

use crate::api::BlogClient;
use crate::config::Config;
use crate::router::Route;

use async_ops::{AsyncCommand, AsyncHandle, spawn_worker};

/// Run the TUI application, opening at `route`
pub fn run(route: Route) -> Result<()> {
    // Create tokio runtime
    let rt = Runtime::new()?;

    // Load config
    let config = Config::load()?;
    tracing::info!("backend at {}", config.api_url);

    let client = BlogClient::new(&config.api_url, config.request_timeout())?;

    // Spawn async worker
    let async_handle = rt.block_on(async { spawn_worker(client) });

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut state = AppState::new(config, route);

    // Main loop
    let result = run_app(&mut terminal, &mut state, async_handle);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    state: &mut AppState,
    mut async_handle: AsyncHandle,
) -> Result<()> {
    loop {
        // Process any async results
        while let Ok(result) = async_handle.result_rx.try_recv() {
            for cmd in state.handle_result(result) {
                send(&async_handle, cmd);
            }
        }

        // Mount whatever screen navigation landed on
        for cmd in state.sync_route() {
            send(&async_handle, cmd);
        }

        // Draw UI
        terminal.draw(|frame| ui::render(frame, state))?;

        // Handle events
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(cmd) = events::handle_key(state, key)
        {
            send(&async_handle, cmd);
        }

        // Tick for animations
        state.tick();

        if state.should_quit {
            // Shutdown async worker
            let _ = async_handle.cmd_tx.blocking_send(AsyncCommand::Shutdown);
            break;
        }
    }

    // Save the theme choice on exit
    Config::save_theme(state.config.theme)?;

    Ok(())
}

fn send(handle: &AsyncHandle, cmd: AsyncCommand) {
    if let Err(e) = handle.cmd_tx.blocking_send(cmd) {
        tracing::error!("async worker is gone: {}", e);
    }
}
