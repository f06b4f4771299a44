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

use super::geometry::{ThumbGeometry, TrackMetrics, scroll_top_for_track_position};
use super::host::ScrollHost;

/// Thumb height assumed for centering, as a fraction of the track, before
/// any geometry has been committed.
const FALLBACK_THUMB_RATIO: f64 = 0.5;

/// Jump the panel so the thumb centers on `client_y` (window coordinates).
///
/// Clicks landing on the thumb itself belong to the drag controller and are
/// ignored, as are clicks on an unlaid track or a panel with nothing to
/// scroll. Returns the written scroll position.
pub fn handle_track_click<H: ScrollHost + ?Sized>(
    host: &mut H,
    client_y: f64,
    cached: Option<ThumbGeometry>,
) -> Option<f64> {
    let bounds = host.track_bounds();
    let track = TrackMetrics::new(bounds.height);
    if !track.is_laid_out() {
        return None;
    }
    if host.thumb_bounds().contains(client_y) {
        return None;
    }
    let scroll = host.scroll_metrics();
    if scroll.scroll_range() <= 0.0 {
        return None;
    }
    let thumb = cached.unwrap_or(ThumbGeometry {
        height: bounds.height * FALLBACK_THUMB_RATIO,
        offset: 0.0,
    });
    let click_y = client_y - bounds.top;
    let scroll_top = scroll_top_for_track_position(click_y, track, thumb, scroll);
    tracing::debug!(click_y, scroll_top, "track click");
    host.set_scroll_top(scroll_top);
    Some(scroll_top)
}
