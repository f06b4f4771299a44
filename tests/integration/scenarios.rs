// Worked examples for a 1000px transcript in a 200px panel beside a 400px track.

use chat_scrollbar::scrollbar::{
    ScrollPanel, ScrollbarConfig, ScrollbarEvent, ScrollbarWidget, ThumbGeometry,
};
use pretty_assertions::assert_eq;

use crate::helpers::{FakeHost, TRACK_TOP, fire, mounted_chat_panel};

#[test]
fn thumb_is_a_fifth_of_the_track() {
    let (mut widget, mut host) = mounted_chat_panel(0.0);
    assert_eq!(host.thumb, ThumbGeometry { height: 80.0, offset: 0.0 });
    widget.unmount(&mut host);
}

#[test]
fn midway_scroll_centers_thumb() {
    let (mut widget, mut host) = mounted_chat_panel(400.0);
    // 400 / 800 * (400 - 80)
    assert_eq!(host.thumb, ThumbGeometry { height: 80.0, offset: 160.0 });
    widget.unmount(&mut host);
}

#[test]
fn native_scroll_is_mirrored_on_the_thumb() {
    let (mut widget, mut host) = mounted_chat_panel(0.0);
    host.set_scroll_top(800.0);
    fire(&mut widget, &mut host, ScrollbarEvent::Scroll);
    assert_eq!(host.thumb.offset, 320.0);
    widget.unmount(&mut host);
}

#[test]
fn track_click_centers_thumb_on_pointer() {
    let (mut widget, mut host) = mounted_chat_panel(0.0);
    // (200 - 40) / 400 * 800
    assert!(fire(&mut widget, &mut host, ScrollbarEvent::TrackClick { y: TRACK_TOP + 200.0 }));
    assert_eq!(host.scroll_top, 320.0);
    // The scroll notification moved the thumb: 320 / 800 * 320
    assert_eq!(host.thumb.offset, 128.0);
    widget.unmount(&mut host);
}

#[test]
fn click_on_the_thumb_does_not_jump() {
    let (mut widget, mut host) = mounted_chat_panel(400.0);
    assert!(!fire(&mut widget, &mut host, ScrollbarEvent::TrackClick { y: TRACK_TOP + 170.0 }));
    assert_eq!(host.scroll_top, 400.0);
    widget.unmount(&mut host);
}

#[test]
fn drag_scales_pointer_motion_by_scroll_ratio() {
    let (mut widget, mut host) = mounted_chat_panel(100.0);
    let grab = TRACK_TOP + host.thumb.offset + 10.0;
    assert!(fire(&mut widget, &mut host, ScrollbarEvent::ThumbPointerDown { y: grab }));
    // 800 / 320 = 2.5 pixels of content per pixel of track
    fire(&mut widget, &mut host, ScrollbarEvent::PointerMove { y: grab + 50.0 });
    assert_eq!(host.scroll_top, 225.0);
    // Every move is measured from the press point, not the previous move.
    fire(&mut widget, &mut host, ScrollbarEvent::PointerMove { y: grab + 20.0 });
    assert_eq!(host.scroll_top, 150.0);
    fire(&mut widget, &mut host, ScrollbarEvent::PointerMove { y: grab + 5000.0 });
    assert_eq!(host.scroll_top, 800.0);
    fire(&mut widget, &mut host, ScrollbarEvent::PointerUp);
    widget.unmount(&mut host);
}

#[test]
fn zero_displacement_drag_keeps_position() {
    let (mut widget, mut host) = mounted_chat_panel(333.0);
    let grab = TRACK_TOP + host.thumb.offset + 1.0;
    fire(&mut widget, &mut host, ScrollbarEvent::ThumbPointerDown { y: grab });
    fire(&mut widget, &mut host, ScrollbarEvent::PointerMove { y: grab });
    assert_eq!(host.scroll_top, 333.0);
    widget.unmount(&mut host);
}

#[test]
fn content_that_fits_makes_every_handler_inert() {
    let mut host = FakeHost::new(0.0, 150.0, 200.0, 400.0);
    let mut widget = ScrollbarWidget::new(ScrollbarConfig::default());
    widget.mount(&mut host);
    assert_eq!(host.thumb, ThumbGeometry { height: 400.0, offset: 0.0 });

    fire(&mut widget, &mut host, ScrollbarEvent::ThumbPointerDown { y: TRACK_TOP + 10.0 });
    fire(&mut widget, &mut host, ScrollbarEvent::PointerMove { y: TRACK_TOP + 300.0 });
    fire(&mut widget, &mut host, ScrollbarEvent::PointerUp);
    assert_eq!(host.scroll_top, 0.0);
    widget.unmount(&mut host);
}
