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

//! Capabilities the scrollbar engine needs from whatever renders it.
//!
//! The engine never owns the content panel, track or thumb. Each operation
//! borrows the host for the duration of one event.

use super::geometry::{Bounds, ScrollMetrics, ThumbGeometry};

/// Element a listener is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    Panel,
    Window,
    Track,
    Thumb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Scroll,
    Resize,
    PointerDown,
    PointerMove,
    PointerUp,
    Click,
}

/// Opaque handle returned by [`EventHost::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// The scrollable content region.
pub trait ScrollPanel {
    fn scroll_metrics(&self) -> ScrollMetrics;

    /// Write the panel's scroll position. Hosts clamp the value to the
    /// valid range and report a change back as a scroll event.
    fn set_scroll_top(&mut self, scroll_top: f64);
}

pub trait TrackElement {
    fn track_bounds(&self) -> Bounds;
}

pub trait ThumbElement {
    fn thumb_bounds(&self) -> Bounds;

    /// Apply size and track-relative offset to the thumb's visual.
    fn apply_thumb(&mut self, geometry: ThumbGeometry);
}

pub trait EventHost {
    fn add_listener(&mut self, target: ListenerTarget, kind: ListenerKind) -> ListenerId;

    fn remove_listener(&mut self, id: ListenerId);

    /// Toggle suppression of the host's default text selection while a
    /// thumb drag is active.
    fn set_text_selection_suppressed(&mut self, suppressed: bool);
}

/// Everything a mounted scrollbar needs.
pub trait ScrollHost: ScrollPanel + TrackElement + ThumbElement + EventHost {}

impl<T: ScrollPanel + TrackElement + ThumbElement + EventHost + ?Sized> ScrollHost for T {}

/// Listener registry a host can embed to implement [`EventHost`].
///
/// Hosts consult [`Listeners::is_listening`] before routing an event, so a
/// removed listener can never be invoked again.
#[derive(Debug, Default)]
pub struct Listeners {
    next_id: u64,
    active: Vec<(ListenerId, ListenerTarget, ListenerKind)>,
}

impl Listeners {
    pub fn add(&mut self, target: ListenerTarget, kind: ListenerKind) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.active.push((id, target, kind));
        id
    }

    /// Returns `false` if the id was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.active.len();
        self.active.retain(|(active_id, _, _)| *active_id != id);
        self.active.len() != before
    }

    #[must_use]
    pub fn is_listening(&self, target: ListenerTarget, kind: ListenerKind) -> bool {
        self.active.iter().any(|(_, t, k)| *t == target && *k == kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
