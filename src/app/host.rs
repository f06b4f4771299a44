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

//! Terminal implementation of the scrollbar host capabilities.
//!
//! Rows are converted to pixels with a fixed row height so the engine's
//! pixel constants (thumb floor, centering) keep their meaning. Writes to
//! `scroll_top` and layout changes are queued as events, like a browser
//! firing `scroll`/`resize` after the fact.

use crate::scrollbar::{
    Bounds, EventHost, ListenerId, ListenerKind, ListenerTarget, Listeners, ScrollMetrics,
    ScrollPanel, ScrollbarEvent, ThumbElement, ThumbGeometry, TrackElement,
};
use ratatui::layout::Rect;
use std::collections::VecDeque;
use std::ops::Range;
use unicode_width::UnicodeWidthChar;

/// Listener an event must have to be delivered.
#[must_use]
pub fn listener_for(event: ScrollbarEvent) -> (ListenerTarget, ListenerKind) {
    match event {
        ScrollbarEvent::Scroll => (ListenerTarget::Panel, ListenerKind::Scroll),
        ScrollbarEvent::Resize => (ListenerTarget::Window, ListenerKind::Resize),
        ScrollbarEvent::ThumbPointerDown { .. } => {
            (ListenerTarget::Thumb, ListenerKind::PointerDown)
        }
        ScrollbarEvent::PointerMove { .. } => (ListenerTarget::Window, ListenerKind::PointerMove),
        ScrollbarEvent::PointerUp | ScrollbarEvent::PointerCancel => {
            (ListenerTarget::Window, ListenerKind::PointerUp)
        }
        ScrollbarEvent::TrackClick { .. } => (ListenerTarget::Track, ListenerKind::Click),
    }
}

pub struct TerminalHost {
    lines: Vec<String>,
    /// `lines` wrapped to `wrap_width`.
    wrapped: Vec<String>,
    wrap_width: u16,
    row_height: f64,
    panel: Rect,
    track: Rect,
    scroll_top: f64,
    /// Keep the newest line in view across content and size changes.
    follow_tail: bool,
    thumb: ThumbGeometry,
    listeners: Listeners,
    pending: VecDeque<ScrollbarEvent>,
    selection_suppressed: bool,
}

impl TerminalHost {
    #[must_use]
    pub fn new(lines: Vec<String>, row_height: f64) -> Self {
        Self {
            lines,
            wrapped: Vec::new(),
            wrap_width: 0,
            row_height,
            panel: Rect::default(),
            track: Rect::default(),
            scroll_top: 0.0,
            follow_tail: true,
            thumb: ThumbGeometry::default(),
            listeners: Listeners::default(),
            pending: VecDeque::new(),
            selection_suppressed: false,
        }
    }

    /// Apply the rendered panel and track areas. Queues a resize (and a
    /// scroll, if the position had to move) when anything changed.
    pub fn set_layout(&mut self, panel: Rect, track: Rect) -> bool {
        if panel == self.panel && track == self.track {
            return false;
        }
        if panel.width != self.wrap_width || self.wrapped.is_empty() {
            self.wrap_width = panel.width;
            self.wrapped = wrap_lines(&self.lines, usize::from(panel.width));
        }
        self.panel = panel;
        self.track = track;

        let previous = self.scroll_top;
        let range = self.scroll_metrics().scroll_range();
        self.scroll_top = if self.follow_tail { range } else { self.scroll_top.clamp(0.0, range) };
        tracing::debug!(?panel, ?track, rows = self.wrapped.len(), "panel layout changed");

        self.emit(ScrollbarEvent::Resize);
        if self.scroll_top != previous {
            self.emit(ScrollbarEvent::Scroll);
        }
        true
    }

    /// Native scrolling (wheel, keys), bypassing the scrollbar.
    pub fn scroll_by_rows(&mut self, rows: i32) {
        self.set_scroll_top(self.scroll_top + f64::from(rows) * self.row_height);
    }

    pub fn scroll_to_start(&mut self) {
        self.set_scroll_top(0.0);
    }

    pub fn scroll_to_end(&mut self) {
        self.set_scroll_top(f64::INFINITY);
    }

    #[must_use]
    pub fn page_rows(&self) -> i32 {
        i32::from(self.panel.height.saturating_sub(1).max(1))
    }

    #[must_use]
    pub fn take_pending(&mut self) -> Option<ScrollbarEvent> {
        self.pending.pop_front()
    }

    #[must_use]
    pub fn is_listening_for(&self, event: ScrollbarEvent) -> bool {
        let (target, kind) = listener_for(event);
        self.listeners.is_listening(target, kind)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn selection_suppressed(&self) -> bool {
        self.selection_suppressed
    }

    #[must_use]
    pub fn panel_area(&self) -> Rect {
        self.panel
    }

    #[must_use]
    pub fn track_area(&self) -> Rect {
        self.track
    }

    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.wrapped.len()
    }

    /// Index of the first wrapped row in view.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn first_visible_row(&self) -> usize {
        (self.scroll_top / self.row_height).round().max(0.0) as usize
    }

    #[must_use]
    pub fn visible_lines(&self) -> &[String] {
        let start = self.first_visible_row().min(self.wrapped.len());
        let end = (start + usize::from(self.panel.height)).min(self.wrapped.len());
        &self.wrapped[start..end]
    }

    /// Vertical center of screen row `row`, in window pixels.
    #[must_use]
    pub fn pointer_y(&self, row: u16) -> f64 {
        f64::from(row) * self.row_height + self.row_height / 2.0
    }

    /// Track rows (relative to the track's top) drawn as thumb: those whose
    /// centers fall inside the thumb's pixel bounds. A thumb thinner than
    /// one row still occupies the row under its midpoint.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn thumb_rows(&self) -> Range<u16> {
        if self.thumb.height <= 0.0 || self.track.height == 0 {
            return 0..0;
        }
        let rows = (0..self.track.height).filter(|&r| {
            let center = f64::from(r) * self.row_height + self.row_height / 2.0;
            center >= self.thumb.offset && center < self.thumb.end()
        });
        let mut covered = rows.clone();
        match (covered.next(), rows.last()) {
            (Some(first), Some(last)) => first..last + 1,
            _ => {
                let mid = ((self.thumb.offset + self.thumb.height / 2.0) / self.row_height)
                    .floor()
                    .clamp(0.0, f64::from(self.track.height - 1)) as u16;
                mid..mid + 1
            }
        }
    }

    /// Whether screen row `row` lies on the drawn thumb.
    #[must_use]
    pub fn is_thumb_row(&self, row: u16) -> bool {
        row.checked_sub(self.track.y).is_some_and(|r| self.thumb_rows().contains(&r))
    }

    fn emit(&mut self, event: ScrollbarEvent) {
        if self.is_listening_for(event) {
            self.pending.push_back(event);
        }
    }
}

impl ScrollPanel for TerminalHost {
    #[allow(clippy::cast_precision_loss)]
    fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(
            self.scroll_top,
            self.wrapped.len() as f64 * self.row_height,
            f64::from(self.panel.height) * self.row_height,
        )
    }

    #[allow(clippy::float_cmp)]
    fn set_scroll_top(&mut self, scroll_top: f64) {
        let range = self.scroll_metrics().scroll_range();
        let clamped = if scroll_top.is_nan() { 0.0 } else { scroll_top.clamp(0.0, range) };
        self.follow_tail = clamped >= range;
        if clamped != self.scroll_top {
            self.scroll_top = clamped;
            self.emit(ScrollbarEvent::Scroll);
        }
    }
}

impl TrackElement for TerminalHost {
    fn track_bounds(&self) -> Bounds {
        Bounds::new(
            f64::from(self.track.y) * self.row_height,
            f64::from(self.track.height) * self.row_height,
        )
    }
}

impl ThumbElement for TerminalHost {
    fn thumb_bounds(&self) -> Bounds {
        Bounds::new(self.track_bounds().top + self.thumb.offset, self.thumb.height)
    }

    fn apply_thumb(&mut self, geometry: ThumbGeometry) {
        self.thumb = geometry;
    }
}

impl EventHost for TerminalHost {
    fn add_listener(&mut self, target: ListenerTarget, kind: ListenerKind) -> ListenerId {
        self.listeners.add(target, kind)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        if !self.listeners.remove(id) {
            tracing::warn!(?id, "removing a listener that was not registered");
        }
    }

    fn set_text_selection_suppressed(&mut self, suppressed: bool) {
        self.selection_suppressed = suppressed;
    }
}

/// Wrap each logical line to `width` display columns. Every logical line
/// yields at least one row.
fn wrap_lines(lines: &[String], width: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        if width == 0 {
            out.push(line.clone());
            continue;
        }
        let mut row = String::new();
        let mut row_width = 0;
        for ch in line.chars() {
            let w = ch.width().unwrap_or(0);
            if row_width + w > width && !row.is_empty() {
                out.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(ch);
            row_width += w;
        }
        out.push(row);
    }
    out
}
