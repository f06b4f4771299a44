// chat_scrollbar — Custom scrollbar engine for chat panels, with a terminal host
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

mod events;
mod host;
mod state;

pub use events::handle_terminal_event;
pub use host::{TerminalHost, listener_for};
pub use state::App;

use crate::Cli;
use crate::error::AppError;
use crate::scrollbar::ScrollbarConfig;
use crate::transcript::Transcript;
use crossterm::event::EventStream;
use futures::{FutureExt as _, StreamExt};
use std::time::{Duration, Instant};

/// Build the app from CLI options. Loads the transcript; no terminal I/O.
pub fn create_app(cli: &Cli) -> Result<App, AppError> {
    let transcript = match cli.transcript.as_deref() {
        Some(path) => Transcript::load(path)?,
        None => Transcript::sample(),
    };
    let config = ScrollbarConfig { min_thumb_height: cli.min_thumb };
    tracing::info!(
        title = %transcript.title,
        lines = transcript.lines.len(),
        row_height = cli.row_height,
        min_thumb_height = config.min_thumb_height,
        "transcript ready"
    );
    Ok(App::new(transcript, cli.row_height, config))
}

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = ratatui::try_init().map_err(|e| {
        tracing::error!("failed to initialize terminal: {e}");
        AppError::TerminalUnavailable
    })?;

    // Mouse capture drives the scrollbar; focus change cancels drags.
    // Ignore errors on unsupported terminals.
    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::event::EnableMouseCapture,
        crossterm::event::EnableFocusChange,
    );

    let result = event_loop(&mut terminal, app).await;

    // Release every scrollbar listener before the host goes away.
    app.unmount();

    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::event::DisableMouseCapture,
        crossterm::event::DisableFocusChange,
    );
    ratatui::restore();

    result
}

async fn event_loop(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> anyhow::Result<()> {
    let mut events = EventStream::new();
    let tick_duration = Duration::from_millis(16);
    let mut last_render = Instant::now();

    loop {
        // Phase 1: wait for at least one event or the next frame tick
        let time_to_next = tick_duration.saturating_sub(last_render.elapsed());
        tokio::select! {
            Some(Ok(event)) = events.next() => {
                handle_terminal_event(app, event);
            }
            () = tokio::time::sleep(time_to_next) => {}
        }

        // Phase 2: drain all remaining queued events (non-blocking)
        while let Some(Some(Ok(event))) = events.next().now_or_never() {
            handle_terminal_event(app, event);
        }

        if app.should_quit {
            break;
        }

        // Phase 3: lay out (one geometry commit per frame for resizes), then render once
        terminal.draw(|f| {
            app.prepare_frame(f.area());
            crate::ui::render(f, app);
        })?;
        last_render = Instant::now();
    }

    Ok(())
}
