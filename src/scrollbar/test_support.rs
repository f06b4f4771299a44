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

//! In-memory host for unit tests: browser-like clamping, no event queue.
//!
//! Records every thumb commit and panel write so a single component can be
//! asserted on in isolation. Listener routing and scroll notification are
//! covered by the fake in `tests/integration/helpers.rs`.

use super::geometry::{Bounds, ScrollMetrics, ThumbGeometry};
use super::host::{
    EventHost, ListenerId, ListenerKind, ListenerTarget, Listeners, ScrollPanel, ThumbElement,
    TrackElement,
};

pub(crate) const TRACK_TOP: f64 = 100.0;

pub(crate) struct FakeHost {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
    pub track: Bounds,
    pub thumb: Bounds,
    pub applied: Vec<ThumbGeometry>,
    pub scroll_writes: usize,
    pub listeners: Listeners,
    pub selection_suppressed: bool,
}

impl FakeHost {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
            track: Bounds::new(TRACK_TOP, 400.0),
            thumb: Bounds::default(),
            applied: Vec::new(),
            scroll_writes: 0,
            listeners: Listeners::default(),
            selection_suppressed: false,
        }
    }

    /// 1000px of content in a 200px viewport beside a 400px track.
    pub fn chat_panel(scroll_top: f64) -> Self {
        Self::new(scroll_top, 1000.0, 200.0)
    }
}

impl ScrollPanel for FakeHost {
    fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(self.scroll_top, self.scroll_height, self.client_height)
    }

    fn set_scroll_top(&mut self, scroll_top: f64) {
        let max = (self.scroll_height - self.client_height).max(0.0);
        self.scroll_top = scroll_top.clamp(0.0, max);
        self.scroll_writes += 1;
    }
}

impl TrackElement for FakeHost {
    fn track_bounds(&self) -> Bounds {
        self.track
    }
}

impl ThumbElement for FakeHost {
    fn thumb_bounds(&self) -> Bounds {
        self.thumb
    }

    fn apply_thumb(&mut self, geometry: ThumbGeometry) {
        self.thumb = Bounds::new(self.track.top + geometry.offset, geometry.height);
        self.applied.push(geometry);
    }
}

impl EventHost for FakeHost {
    fn add_listener(&mut self, target: ListenerTarget, kind: ListenerKind) -> ListenerId {
        self.listeners.add(target, kind)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.remove(id);
    }

    fn set_text_selection_suppressed(&mut self, suppressed: bool) {
        self.selection_suppressed = suppressed;
    }
}
