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

//! Keeps the thumb in step with the content panel's scroll state.
//!
//! The observer only ever writes the thumb. It reads the panel and track
//! fresh on every refresh because either may resize independently.

use super::geometry::{ThumbGeometry, TrackMetrics, compute_thumb_geometry_with_min};
use super::host::{ListenerId, ListenerKind, ListenerTarget, ScrollHost};

#[derive(Debug)]
pub struct ScrollObserver {
    min_thumb_height: f64,
    scroll_listener: Option<ListenerId>,
    resize_listener: Option<ListenerId>,
    /// Last geometry committed to the thumb. Reused by drag and click handling.
    last: Option<ThumbGeometry>,
}

impl ScrollObserver {
    #[must_use]
    pub fn new(min_thumb_height: f64) -> Self {
        Self { min_thumb_height, scroll_listener: None, resize_listener: None, last: None }
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.scroll_listener.is_some() || self.resize_listener.is_some()
    }

    #[must_use]
    pub fn last_geometry(&self) -> Option<ThumbGeometry> {
        self.last
    }

    /// Subscribe to panel scroll and window resize, then commit once.
    /// Attaching twice keeps the original subscriptions.
    pub fn attach<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        if self.is_attached() {
            return;
        }
        self.scroll_listener = Some(host.add_listener(ListenerTarget::Panel, ListenerKind::Scroll));
        self.resize_listener =
            Some(host.add_listener(ListenerTarget::Window, ListenerKind::Resize));
        self.refresh(host);
    }

    /// Re-derive thumb geometry from live metrics and commit it.
    ///
    /// Returns `None` without touching the thumb while the track has no height.
    pub fn refresh<H: ScrollHost + ?Sized>(&mut self, host: &mut H) -> Option<ThumbGeometry> {
        let track = TrackMetrics::new(host.track_bounds().height);
        if !track.is_laid_out() {
            tracing::trace!("scrollbar track not laid out; skipping thumb commit");
            return None;
        }
        let geometry =
            compute_thumb_geometry_with_min(host.scroll_metrics(), track, self.min_thumb_height);
        if self.last != Some(geometry) {
            tracing::debug!(height = geometry.height, offset = geometry.offset, "thumb geometry");
        }
        host.apply_thumb(geometry);
        self.last = Some(geometry);
        Some(geometry)
    }

    pub fn detach<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(id) = self.scroll_listener.take() {
            host.remove_listener(id);
        }
        if let Some(id) = self.resize_listener.take() {
            host.remove_listener(id);
        }
        self.last = None;
    }
}
