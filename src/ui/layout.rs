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

use ratatui::layout::{Constraint, Layout, Rect};

pub struct AppLayout {
    pub title: Rect,
    /// Content panel (left of the track).
    pub panel: Rect,
    /// One-column scrollbar track on the right edge of the body.
    pub track: Rect,
    pub footer: Option<Rect>,
}

pub fn compute(area: Rect) -> AppLayout {
    let zero = Rect::new(area.x, area.y, area.width, 0);

    let (title, body, footer) = if area.height < 4 {
        // Ultra-compact: body only
        (zero, area, None)
    } else {
        let [title, body, footer] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)])
                .areas(area);
        (title, body, Some(footer))
    };

    let [panel, track] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(1)]).areas(body);

    AppLayout { title, panel, track, footer }
}
