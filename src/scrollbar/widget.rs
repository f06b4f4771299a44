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

use super::drag::DragController;
use super::geometry::{MIN_THUMB_HEIGHT, ThumbGeometry};
use super::host::{ListenerId, ListenerKind, ListenerTarget, ScrollHost};
use super::observer::ScrollObserver;
use super::track_click::handle_track_click;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarConfig {
    pub min_thumb_height: f64,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self { min_thumb_height: MIN_THUMB_HEIGHT }
    }
}

/// Host events the widget reacts to. Y coordinates are window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollbarEvent {
    Scroll,
    Resize,
    ThumbPointerDown { y: f64 },
    PointerMove { y: f64 },
    PointerUp,
    /// Pointer capture was lost mid-drag (focus change, window hidden, ...).
    PointerCancel,
    TrackClick { y: f64 },
}

#[derive(Debug)]
struct ElementListeners {
    thumb_pointer_down: ListenerId,
    track_click: ListenerId,
}

/// Binds a content panel, track and thumb into one scrollbar.
///
/// Holds no reference to the host between events: every call borrows it.
/// `unmount` must run before the host goes away so that no listener
/// outlives the widget.
#[derive(Debug)]
pub struct ScrollbarWidget {
    observer: ScrollObserver,
    drag: DragController,
    element_listeners: Option<ElementListeners>,
}

impl ScrollbarWidget {
    #[must_use]
    pub fn new(config: ScrollbarConfig) -> Self {
        Self {
            observer: ScrollObserver::new(config.min_thumb_height),
            drag: DragController::new(config.min_thumb_height),
            element_listeners: None,
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.element_listeners.is_some()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn thumb_geometry(&self) -> Option<ThumbGeometry> {
        self.observer.last_geometry()
    }

    pub fn mount<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        if self.is_mounted() {
            return;
        }
        self.element_listeners = Some(ElementListeners {
            thumb_pointer_down: host.add_listener(ListenerTarget::Thumb, ListenerKind::PointerDown),
            track_click: host.add_listener(ListenerTarget::Track, ListenerKind::Click),
        });
        self.observer.attach(host);
        tracing::debug!("scrollbar mounted");
    }

    /// Release every listener. An active drag is discarded as if the
    /// pointer had been released.
    pub fn unmount<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        let Some(listeners) = self.element_listeners.take() else {
            return;
        };
        self.drag.pointer_up(host);
        self.observer.detach(host);
        host.remove_listener(listeners.thumb_pointer_down);
        host.remove_listener(listeners.track_click);
        tracing::debug!("scrollbar unmounted");
    }

    /// Dispatch one host event. Returns whether it changed anything.
    pub fn handle<H: ScrollHost + ?Sized>(&mut self, host: &mut H, event: ScrollbarEvent) -> bool {
        if !self.is_mounted() {
            return false;
        }
        match event {
            ScrollbarEvent::Scroll | ScrollbarEvent::Resize => {
                self.observer.refresh(host).is_some()
            }
            ScrollbarEvent::ThumbPointerDown { y } => self.drag.pointer_down(host, y),
            ScrollbarEvent::PointerMove { y } => {
                let thumb = self.observer.last_geometry();
                self.drag.pointer_move(host, y, thumb).is_some()
            }
            ScrollbarEvent::PointerUp | ScrollbarEvent::PointerCancel => self.drag.pointer_up(host),
            ScrollbarEvent::TrackClick { y } => {
                handle_track_click(host, y, self.observer.last_geometry()).is_some()
            }
        }
    }
}

impl Drop for ScrollbarWidget {
    fn drop(&mut self) {
        if self.is_mounted() {
            tracing::warn!("scrollbar dropped while mounted; host listeners were not released");
        }
    }
}
