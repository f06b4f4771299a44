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

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Transcript not found: {path}")]
    TranscriptNotFound { path: String },
    #[error("Transcript unreadable: {path}: {reason}")]
    TranscriptUnreadable { path: String, reason: String },
    #[error("Transcript is not a valid chat history: {path}: {reason}")]
    TranscriptInvalid { path: String, reason: String },
    #[error("Terminal unavailable")]
    TerminalUnavailable,
}

impl AppError {
    pub const TRANSCRIPT_NOT_FOUND_EXIT_CODE: i32 = 20;
    pub const TRANSCRIPT_UNREADABLE_EXIT_CODE: i32 = 21;
    pub const TRANSCRIPT_INVALID_EXIT_CODE: i32 = 22;
    pub const TERMINAL_UNAVAILABLE_EXIT_CODE: i32 = 23;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::TranscriptNotFound { .. } => Self::TRANSCRIPT_NOT_FOUND_EXIT_CODE,
            Self::TranscriptUnreadable { .. } => Self::TRANSCRIPT_UNREADABLE_EXIT_CODE,
            Self::TranscriptInvalid { .. } => Self::TRANSCRIPT_INVALID_EXIT_CODE,
            Self::TerminalUnavailable => Self::TERMINAL_UNAVAILABLE_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::TranscriptNotFound { path } => {
                format!("Transcript `{path}` does not exist. Pass a text or JSON chat file.")
            }
            Self::TranscriptUnreadable { path, reason } => {
                format!("Could not read transcript `{path}`: {reason}")
            }
            Self::TranscriptInvalid { path, reason } => format!(
                "Transcript `{path}` is not a JSON array of {{\"text\", \"sender\"}} messages: \
                 {reason}"
            ),
            Self::TerminalUnavailable => {
                "Could not initialize the terminal. Run chat-scroll in an interactive terminal."
                    .to_owned()
            }
        }
    }
}
