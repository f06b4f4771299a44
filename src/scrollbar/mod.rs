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

//! Scrollbar synchronization engine.
//!
//! Maps a content panel's scroll state onto an independently rendered
//! track/thumb, and maps pointer input on that track back onto the panel.

mod drag;
mod geometry;
mod host;
mod observer;
#[cfg(test)]
mod test_support;
mod track_click;
mod widget;

pub use drag::{DragController, DragState, WindowListeners};
pub use geometry::{
    Bounds, DragSession, MIN_THUMB_HEIGHT, ScrollMetrics, ThumbGeometry, TrackMetrics,
    compute_thumb_geometry, compute_thumb_geometry_with_min, scroll_top_for_drag_delta,
    scroll_top_for_track_position,
};
pub use host::{
    EventHost, ListenerId, ListenerKind, ListenerTarget, Listeners, ScrollHost, ScrollPanel,
    ThumbElement, TrackElement,
};
pub use observer::ScrollObserver;
pub use track_click::handle_track_click;
pub use widget::{ScrollbarConfig, ScrollbarEvent, ScrollbarWidget};
