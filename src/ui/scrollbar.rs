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

use crate::ui::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use std::ops::Range;

/// Draws the track with the thumb over the rows it occupies.
pub struct ScrollbarView {
    /// Thumb rows relative to the track's top.
    pub thumb_rows: Range<u16>,
    pub dragging: bool,
}

impl Widget for ScrollbarView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let thumb_style =
            Style::default().fg(if self.dragging { theme::THUMB_DRAGGING } else { theme::THUMB });
        let track_style = Style::default().fg(theme::DIM);
        for row in 0..area.height {
            let Some(cell) = buf.cell_mut((area.x, area.y + row)) else {
                continue;
            };
            if self.thumb_rows.contains(&row) {
                cell.set_symbol(theme::THUMB_CHAR).set_style(thumb_style);
            } else {
                cell.set_symbol(theme::TRACK_CHAR).set_style(track_style);
            }
        }
    }
}
