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

//! Content shown in the scrollable panel.
//!
//! Accepts either plain text or the chat page's message list
//! (`[{"text": "...", "sender": "user" | "bot"}]`).

use crate::error::AppError;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "you",
            Self::Bot => "bot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatEntry {
    pub text: String,
    pub sender: Sender,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub title: String,
    /// Logical lines, before wrapping to the panel width.
    pub lines: Vec<String>,
}

impl Transcript {
    /// Load a transcript. `.json` files are parsed as chat history,
    /// anything else is shown verbatim.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let path_text = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                AppError::TranscriptNotFound { path: path_text.clone() }
            }
            _ => AppError::TranscriptUnreadable { path: path_text.clone(), reason: e.to_string() },
        })?;
        let title = path
            .file_name()
            .map_or_else(|| path_text.clone(), |name| name.to_string_lossy().into_owned());

        let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            let entries: Vec<ChatEntry> = serde_json::from_str(&raw).map_err(|e| {
                AppError::TranscriptInvalid { path: path_text.clone(), reason: e.to_string() }
            })?;
            tracing::info!(path = %path_text, messages = entries.len(), "loaded chat transcript");
            Ok(Self::from_entries(title, &entries))
        } else {
            tracing::info!(path = %path_text, bytes = raw.len(), "loaded text transcript");
            Ok(Self::from_text(title, &raw))
        }
    }

    #[must_use]
    pub fn from_text(title: impl Into<String>, text: &str) -> Self {
        Self { title: title.into(), lines: text.lines().map(str::to_owned).collect() }
    }

    /// One `sender: text` paragraph per message, separated by blank lines.
    #[must_use]
    pub fn from_entries(title: impl Into<String>, entries: &[ChatEntry]) -> Self {
        let mut lines = Vec::new();
        for (i, entry) in entries.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            let mut text_lines = entry.text.lines();
            let first = text_lines.next().unwrap_or("");
            lines.push(format!("{}: {first}", entry.sender.label()));
            let indent = " ".repeat(entry.sender.label().len() + 2);
            lines.extend(text_lines.map(|line| format!("{indent}{line}")));
        }
        Self { title: title.into(), lines }
    }

    /// Built-in conversation long enough to overflow a typical terminal.
    #[must_use]
    pub fn sample() -> Self {
        const EXCHANGES: &[(&str, &str)] = &[
            (
                "What does the knowledge base cover?",
                "Product manuals, release notes and FAQ pages.",
            ),
            (
                "Summarize the upload limits.",
                "PDF, DOCX and TXT files up to 20 MB each.\n\
                 Larger files are rejected before upload.",
            ),
            ("Which model answers by default?", "The general model, until you pick another one."),
            ("Can I switch to the finance base?", "Knowledge base changed to: Finance"),
            (
                "List the quarterly report sections.",
                "Overview\nRevenue by region\nOperating costs\nOutlook",
            ),
        ];
        let entries: Vec<ChatEntry> = (0..8)
            .flat_map(|_| EXCHANGES.iter())
            .flat_map(|(question, answer)| {
                [
                    ChatEntry { text: (*question).to_owned(), sender: Sender::User },
                    ChatEntry { text: (*answer).to_owned(), sender: Sender::Bot },
                ]
            })
            .collect();
        Self::from_entries("sample chat", &entries)
    }
}
