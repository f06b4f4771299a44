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

use super::App;
use crate::scrollbar::ScrollbarEvent;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

const MOUSE_SCROLL_LINES: i32 = 3;

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        // Losing focus also loses the pointer; end any drag in progress.
        Event::FocusLost => {
            app.dispatch(ScrollbarEvent::PointerCancel);
        }
        // Resize is picked up by the next frame's layout
        _ => {}
    }
    app.drain_scrollbar_events();
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => app.should_quit = true,
        (KeyCode::Char('q') | KeyCode::Esc, _) => app.should_quit = true,
        (KeyCode::Up | KeyCode::Char('k'), _) => app.host.scroll_by_rows(-1),
        (KeyCode::Down | KeyCode::Char('j'), _) => app.host.scroll_by_rows(1),
        (KeyCode::PageUp, _) => app.host.scroll_by_rows(-app.host.page_rows()),
        (KeyCode::PageDown | KeyCode::Char(' '), _) => {
            app.host.scroll_by_rows(app.host.page_rows());
        }
        (KeyCode::Home | KeyCode::Char('g'), _) => app.host.scroll_to_start(),
        (KeyCode::End | KeyCode::Char('G'), _) => app.host.scroll_to_end(),
        _ => {}
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let y = app.host.pointer_y(mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let track = app.host.track_area();
            let on_track = mouse.column >= track.x
                && mouse.column < track.right()
                && mouse.row >= track.y
                && mouse.row < track.bottom();
            if !on_track {
                return;
            }
            let event = if app.host.is_thumb_row(mouse.row) {
                ScrollbarEvent::ThumbPointerDown { y }
            } else {
                ScrollbarEvent::TrackClick { y }
            };
            app.dispatch(event);
        }
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            app.dispatch(ScrollbarEvent::PointerMove { y });
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.dispatch(ScrollbarEvent::PointerUp);
        }
        MouseEventKind::ScrollUp => app.host.scroll_by_rows(-MOUSE_SCROLL_LINES),
        MouseEventKind::ScrollDown => app.host.scroll_by_rows(MOUSE_SCROLL_LINES),
        _ => {}
    }
}
