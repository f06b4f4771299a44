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

//! Thumb drag state machine: `Idle` -> `Dragging` on thumb pointer-down,
//! back to `Idle` on pointer-up, capture loss or unmount.

use super::geometry::{
    DragSession, ThumbGeometry, TrackMetrics, compute_thumb_geometry_with_min,
    scroll_top_for_drag_delta,
};
use super::host::{EventHost, ListenerId, ListenerKind, ListenerTarget, ScrollHost};

/// Window-level pointer listeners held for the duration of one drag.
///
/// The pointer may leave the thumb and track mid-drag, so move/up are
/// observed on the window. The handle must be given back through
/// [`WindowListeners::release`].
#[must_use = "window listeners stay registered until released"]
#[derive(Debug)]
pub struct WindowListeners {
    pointer_move: ListenerId,
    pointer_up: ListenerId,
}

impl WindowListeners {
    fn acquire<H: EventHost + ?Sized>(host: &mut H) -> Self {
        Self {
            pointer_move: host.add_listener(ListenerTarget::Window, ListenerKind::PointerMove),
            pointer_up: host.add_listener(ListenerTarget::Window, ListenerKind::PointerUp),
        }
    }

    fn release<H: EventHost + ?Sized>(self, host: &mut H) {
        host.remove_listener(self.pointer_move);
        host.remove_listener(self.pointer_up);
    }
}

#[derive(Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        session: DragSession,
        listeners: WindowListeners,
    },
}

#[derive(Debug)]
pub struct DragController {
    state: DragState,
    min_thumb_height: f64,
}

impl DragController {
    #[must_use]
    pub fn new(min_thumb_height: f64) -> Self {
        Self { state: DragState::Idle, min_thumb_height }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    #[must_use]
    pub fn session(&self) -> Option<DragSession> {
        match &self.state {
            DragState::Dragging { session, .. } => Some(*session),
            DragState::Idle => None,
        }
    }

    /// Start a drag from `pointer_y`. Ignored while a drag is already active.
    pub fn pointer_down<H: ScrollHost + ?Sized>(&mut self, host: &mut H, pointer_y: f64) -> bool {
        if self.is_dragging() {
            tracing::debug!("thumb pointer-down ignored: drag already active");
            return false;
        }
        let session = DragSession {
            start_pointer_y: pointer_y,
            start_scroll_top: host.scroll_metrics().scroll_top,
        };
        host.set_text_selection_suppressed(true);
        let listeners = WindowListeners::acquire(host);
        tracing::debug!(
            start_pointer_y = session.start_pointer_y,
            start_scroll_top = session.start_scroll_top,
            "thumb drag started"
        );
        self.state = DragState::Dragging { session, listeners };
        true
    }

    /// Translate pointer displacement into a direct `scroll_top` write.
    ///
    /// `thumb` is the last committed geometry; when absent it is derived from
    /// live metrics. Returns the written position, or `None` when idle or
    /// when the track has no height.
    pub fn pointer_move<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        pointer_y: f64,
        thumb: Option<ThumbGeometry>,
    ) -> Option<f64> {
        let DragState::Dragging { session, .. } = &self.state else {
            return None;
        };
        let session = *session;
        let track = TrackMetrics::new(host.track_bounds().height);
        if !track.is_laid_out() {
            return None;
        }
        let scroll = host.scroll_metrics();
        let thumb = thumb.unwrap_or_else(|| {
            compute_thumb_geometry_with_min(scroll, track, self.min_thumb_height)
        });
        let delta_y = pointer_y - session.start_pointer_y;
        let scroll_top = scroll_top_for_drag_delta(delta_y, session, track, thumb, scroll);
        tracing::trace!(delta_y, scroll_top, "thumb drag move");
        host.set_scroll_top(scroll_top);
        Some(scroll_top)
    }

    /// End the drag and release its window listeners. Returns `false` when idle.
    pub fn pointer_up<H: ScrollHost + ?Sized>(&mut self, host: &mut H) -> bool {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { listeners, .. } => {
                listeners.release(host);
                host.set_text_selection_suppressed(false);
                tracing::debug!("thumb drag ended");
                true
            }
            DragState::Idle => false,
        }
    }
}
