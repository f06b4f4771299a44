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

pub mod app;
pub mod error;
pub mod scrollbar;
pub mod transcript;
pub mod ui;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "chat-scroll",
    about = "Chat transcript viewer with a custom drag-and-click scrollbar"
)]
pub struct Cli {
    /// Text file or JSON chat history to display (built-in sample when omitted)
    pub transcript: Option<std::path::PathBuf>,

    /// Pixel height of one terminal row; scroll metrics are reported in pixels
    #[arg(long, default_value_t = 16.0, value_parser = parse_positive_px)]
    pub row_height: f64,

    /// Minimum thumb height in pixels
    #[arg(long, default_value_t = scrollbar::MIN_THUMB_HEIGHT, value_parser = parse_positive_px)]
    pub min_thumb: f64,

    /// Write tracing diagnostics to this file (tracing is disabled otherwise)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<std::path::PathBuf>,

    /// Tracing filter directives (overrides `RUST_LOG`), e.g. `chat_scrollbar=debug`
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long)]
    pub log_append: bool,
}

fn parse_positive_px(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e| format!("`{raw}` is not a number: {e}"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("`{raw}` must be a positive pixel size"))
    }
}
