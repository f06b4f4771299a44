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

//! Pure mapping between the content panel's scroll range and the track's
//! pixel range.
//!
//! Every function here is deterministic and side-effect free. Inputs are
//! sanitised (non-finite values read as 0, negative sizes as empty) so that
//! transient metrics measured mid-resize never produce a thumb outside the
//! track.

/// Smallest thumb height in pixels, unless the track itself is shorter.
pub const MIN_THUMB_HEIGHT: f64 = 40.0;

/// Snapshot of the content panel's scroll state at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub const fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self { scroll_top, scroll_height, client_height }
    }

    /// Maximum valid `scroll_top`. Zero when the content fits.
    #[must_use]
    pub fn scroll_range(&self) -> f64 {
        (finite(self.scroll_height) - finite(self.client_height)).max(0.0)
    }

    /// `scroll_top` clamped into `[0, scroll_range]`.
    #[must_use]
    pub fn clamped_scroll_top(&self) -> f64 {
        finite(self.scroll_top).clamp(0.0, self.scroll_range())
    }
}

/// Pixel height of the visual track, read fresh on every recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackMetrics {
    pub track_height: f64,
}

impl TrackMetrics {
    #[must_use]
    pub const fn new(track_height: f64) -> Self {
        Self { track_height }
    }

    /// A track with no usable height has not been laid out yet.
    #[must_use]
    pub fn is_laid_out(&self) -> bool {
        finite(self.track_height) > 0.0
    }

    fn height(self) -> f64 {
        finite(self.track_height).max(0.0)
    }
}

/// Thumb size and position, both relative to the track's top edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbGeometry {
    pub height: f64,
    pub offset: f64,
}

impl ThumbGeometry {
    /// Offset of the thumb's bottom edge.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.offset + self.height
    }
}

/// State captured at pointer-down for the lifetime of one thumb drag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSession {
    pub start_pointer_y: f64,
    pub start_scroll_top: f64,
}

/// Vertical extent of an element's bounding rectangle, in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment; an empty rectangle contains nothing.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        self.height > 0.0 && y >= self.top && y < self.bottom()
    }
}

/// Derive thumb geometry using the default [`MIN_THUMB_HEIGHT`] floor.
#[must_use]
pub fn compute_thumb_geometry(scroll: ScrollMetrics, track: TrackMetrics) -> ThumbGeometry {
    compute_thumb_geometry_with_min(scroll, track, MIN_THUMB_HEIGHT)
}

/// Derive thumb geometry with an explicit minimum thumb height.
///
/// The result always satisfies `0 <= offset` and `offset + height <= track_height`.
#[must_use]
pub fn compute_thumb_geometry_with_min(
    scroll: ScrollMetrics,
    track: TrackMetrics,
    min_thumb_height: f64,
) -> ThumbGeometry {
    let track_height = track.height();
    if track_height <= 0.0 {
        return ThumbGeometry::default();
    }

    let scroll_height = finite(scroll.scroll_height);
    let client_height = finite(scroll.client_height).max(0.0);
    let visible_ratio =
        if scroll_height <= 0.0 { 1.0 } else { (client_height / scroll_height).clamp(0.0, 1.0) };

    let height = (visible_ratio * track_height).max(finite(min_thumb_height)).min(track_height);

    let scroll_range = scroll.scroll_range();
    let offset = if scroll_range <= 0.0 {
        0.0
    } else {
        let progress = (finite(scroll.scroll_top) / scroll_range).clamp(0.0, 1.0);
        progress * (track_height - height)
    };

    ThumbGeometry { height, offset }
}

/// Scroll position that centers the thumb under `click_y` (track-relative).
///
/// With an unlaid track the current position is returned unchanged.
#[must_use]
pub fn scroll_top_for_track_position(
    click_y: f64,
    track: TrackMetrics,
    thumb: ThumbGeometry,
    scroll: ScrollMetrics,
) -> f64 {
    let track_height = track.height();
    if track_height <= 0.0 {
        return scroll.clamped_scroll_top();
    }
    let scroll_range = scroll.scroll_range();
    let desired_offset_ratio =
        ((finite(click_y) - finite(thumb.height) / 2.0) / track_height).clamp(0.0, 1.0);
    (desired_offset_ratio * scroll_range).clamp(0.0, scroll_range)
}

/// Scroll position after moving the pointer `delta_y` pixels since pointer-down.
#[must_use]
pub fn scroll_top_for_drag_delta(
    delta_y: f64,
    session: DragSession,
    track: TrackMetrics,
    thumb: ThumbGeometry,
    scroll: ScrollMetrics,
) -> f64 {
    let scroll_range = scroll.scroll_range();
    let free_track = track.height() - finite(thumb.height);
    let scroll_ratio = if free_track <= 0.0 { 0.0 } else { scroll_range / free_track };
    (finite(session.start_scroll_top) + finite(delta_y) * scroll_ratio).clamp(0.0, scroll_range)
}

fn finite(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
