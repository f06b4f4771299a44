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

use super::host::TerminalHost;
use crate::scrollbar::{ScrollbarConfig, ScrollbarEvent, ScrollbarWidget};
use crate::transcript::Transcript;
use ratatui::layout::Rect;

pub struct App {
    pub title: String,
    pub host: TerminalHost,
    pub scrollbar: ScrollbarWidget,
    pub should_quit: bool,
    /// Last known frame area (for layout and mouse mapping).
    pub cached_frame_area: Rect,
}

impl App {
    #[must_use]
    pub fn new(transcript: Transcript, row_height: f64, config: ScrollbarConfig) -> Self {
        Self {
            title: transcript.title,
            host: TerminalHost::new(transcript.lines, row_height),
            scrollbar: ScrollbarWidget::new(config),
            should_quit: false,
            cached_frame_area: Rect::default(),
        }
    }

    /// Lay out the frame and mount the scrollbar on the first laid-out frame.
    pub fn prepare_frame(&mut self, area: Rect) {
        self.cached_frame_area = area;
        let areas = crate::ui::layout::compute(area);
        self.host.set_layout(areas.panel, areas.track);
        if !self.scrollbar.is_mounted() {
            self.scrollbar.mount(&mut self.host);
        }
        self.drain_scrollbar_events();
    }

    /// Deliver `event` if the scrollbar currently listens for it, then
    /// deliver whatever the host queued in response.
    pub fn dispatch(&mut self, event: ScrollbarEvent) -> bool {
        if !self.host.is_listening_for(event) {
            return false;
        }
        let changed = self.scrollbar.handle(&mut self.host, event);
        self.drain_scrollbar_events();
        changed
    }

    /// Queued scroll/resize notifications, in arrival order.
    pub fn drain_scrollbar_events(&mut self) {
        while let Some(event) = self.host.take_pending() {
            // A listener may have been removed after the event was queued.
            if self.host.is_listening_for(event) {
                self.scrollbar.handle(&mut self.host, event);
            }
        }
    }

    pub fn unmount(&mut self) {
        self.scrollbar.unmount(&mut self.host);
        while self.host.take_pending().is_some() {}
        tracing::debug!(listeners = self.host.listener_count(), "scrollbar released");
    }

    #[cfg(test)]
    pub(crate) fn test_default() -> Self {
        let transcript = Transcript::from_text(
            "test",
            &(0..100).map(|i| format!("message {i}")).collect::<Vec<_>>().join("\n"),
        );
        Self::new(transcript, 16.0, ScrollbarConfig::default())
    }
}
