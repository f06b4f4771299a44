// Listener ownership across mount, drag and unmount.

use chat_scrollbar::scrollbar::{
    ListenerKind, ListenerTarget, ScrollbarConfig, ScrollbarEvent, ScrollbarWidget,
};
use pretty_assertions::assert_eq;

use crate::helpers::{FakeHost, TRACK_TOP, fire, mounted_chat_panel};

#[test]
fn mount_listens_on_panel_window_track_and_thumb() {
    let (mut widget, mut host) = mounted_chat_panel(0.0);
    assert!(host.listening(ListenerTarget::Panel, ListenerKind::Scroll));
    assert!(host.listening(ListenerTarget::Window, ListenerKind::Resize));
    assert!(host.listening(ListenerTarget::Thumb, ListenerKind::PointerDown));
    assert!(host.listening(ListenerTarget::Track, ListenerKind::Click));
    assert!(!host.listening(ListenerTarget::Window, ListenerKind::PointerMove));
    widget.unmount(&mut host);
    assert!(host.listeners.is_empty());
}

#[test]
fn window_pointer_listeners_exist_only_while_dragging() {
    let (mut widget, mut host) = mounted_chat_panel(0.0);
    assert_eq!(host.listeners.len(), 4);
    fire(&mut widget, &mut host, ScrollbarEvent::ThumbPointerDown { y: TRACK_TOP + 5.0 });
    assert_eq!(host.listeners.len(), 6);
    assert!(host.selection_suppressed);
    fire(&mut widget, &mut host, ScrollbarEvent::PointerUp);
    assert_eq!(host.listeners.len(), 4);
    assert!(!host.selection_suppressed);
    widget.unmount(&mut host);
}

#[test]
fn pointer_moves_outside_a_drag_never_reach_the_widget() {
    let (mut widget, mut host) = mounted_chat_panel(0.0);
    assert!(!fire(&mut widget, &mut host, ScrollbarEvent::PointerMove { y: TRACK_TOP + 300.0 }));
    assert_eq!(host.scroll_writes, 0);
    widget.unmount(&mut host);
}

#[test]
fn second_press_during_drag_keeps_first_session() {
    let (mut widget, mut host) = mounted_chat_panel(100.0);
    let grab = TRACK_TOP + host.thumb.offset + 10.0;
    fire(&mut widget, &mut host, ScrollbarEvent::ThumbPointerDown { y: grab });
    // Widget-level call: the host would not route this, but the widget must still ignore it.
    assert!(!widget.handle(&mut host, ScrollbarEvent::ThumbPointerDown { y: grab + 100.0 }));
    fire(&mut widget, &mut host, ScrollbarEvent::PointerMove { y: grab + 50.0 });
    assert_eq!(host.scroll_top, 225.0);
    assert_eq!(host.listeners.len(), 6);
    widget.unmount(&mut host);
}

#[test]
fn unmount_during_drag_releases_every_listener() {
    let (mut widget, mut host) = mounted_chat_panel(100.0);
    fire(&mut widget, &mut host, ScrollbarEvent::ThumbPointerDown { y: TRACK_TOP + 50.0 });
    fire(&mut widget, &mut host, ScrollbarEvent::PointerMove { y: TRACK_TOP + 80.0 });
    widget.unmount(&mut host);

    assert_eq!(host.listeners.len(), 0);
    assert!(!widget.is_dragging());
    assert!(!host.selection_suppressed);

    let before = host.scroll_top;
    assert!(!fire(&mut widget, &mut host, ScrollbarEvent::PointerMove { y: TRACK_TOP + 300.0 }));
    assert!(!fire(&mut widget, &mut host, ScrollbarEvent::Scroll));
    assert_eq!(host.scroll_top, before);
}

#[test]
fn remount_after_unmount_starts_fresh() {
    let (mut widget, mut host) = mounted_chat_panel(0.0);
    widget.unmount(&mut host);
    host.scroll_top = 800.0;
    widget.mount(&mut host);
    assert_eq!(host.listeners.len(), 4);
    assert_eq!(host.thumb.offset, 320.0);
    widget.unmount(&mut host);
}

#[test]
fn track_laid_out_late_is_picked_up_on_resize() {
    let mut host = FakeHost::new(400.0, 1000.0, 200.0, 0.0);
    let mut widget = ScrollbarWidget::new(ScrollbarConfig::default());
    widget.mount(&mut host);
    assert!(widget.thumb_geometry().is_none());
    assert!(!fire(&mut widget, &mut host, ScrollbarEvent::TrackClick { y: TRACK_TOP }));

    host.track.height = 400.0;
    assert!(fire(&mut widget, &mut host, ScrollbarEvent::Resize));
    assert_eq!(host.thumb.offset, 160.0);
    widget.unmount(&mut host);
}
