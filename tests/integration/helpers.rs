use chat_scrollbar::scrollbar::{
    Bounds, EventHost, ListenerId, ListenerKind, ListenerTarget, Listeners, ScrollMetrics,
    ScrollPanel, ScrollbarConfig, ScrollbarEvent, ScrollbarWidget, ThumbElement, ThumbGeometry,
    TrackElement,
};

pub const TRACK_TOP: f64 = 60.0;

/// Browser-like host: clamps `scroll_top`, fires `scroll` only on change,
/// and delivers events to the widget only while a listener is registered.
///
/// Unlike the crate's unit-test host, a panel write here is not observed
/// until [`fire`] flushes the queued scroll notification, so these tests
/// exercise the drag/click -> scroll -> thumb round trip end to end.
pub struct FakeHost {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
    pub track: Bounds,
    pub thumb: ThumbGeometry,
    pub listeners: Listeners,
    pub selection_suppressed: bool,
    pub scroll_writes: usize,
    pending_scroll: bool,
}

impl FakeHost {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64, track_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
            track: Bounds::new(TRACK_TOP, track_height),
            thumb: ThumbGeometry::default(),
            listeners: Listeners::default(),
            selection_suppressed: false,
            scroll_writes: 0,
            pending_scroll: false,
        }
    }

    pub fn listening(&self, target: ListenerTarget, kind: ListenerKind) -> bool {
        self.listeners.is_listening(target, kind)
    }
}

impl ScrollPanel for FakeHost {
    fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(self.scroll_top, self.scroll_height, self.client_height)
    }

    fn set_scroll_top(&mut self, scroll_top: f64) {
        self.scroll_writes += 1;
        let clamped = scroll_top.clamp(0.0, (self.scroll_height - self.client_height).max(0.0));
        if clamped != self.scroll_top {
            self.scroll_top = clamped;
            self.pending_scroll = true;
        }
    }
}

impl TrackElement for FakeHost {
    fn track_bounds(&self) -> Bounds {
        self.track
    }
}

impl ThumbElement for FakeHost {
    fn thumb_bounds(&self) -> Bounds {
        Bounds::new(self.track.top + self.thumb.offset, self.thumb.height)
    }

    fn apply_thumb(&mut self, geometry: ThumbGeometry) {
        self.thumb = geometry;
    }
}

impl EventHost for FakeHost {
    fn add_listener(&mut self, target: ListenerTarget, kind: ListenerKind) -> ListenerId {
        self.listeners.add(target, kind)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.remove(id);
    }

    fn set_text_selection_suppressed(&mut self, suppressed: bool) {
        self.selection_suppressed = suppressed;
    }
}

/// Mounted widget over `scrollHeight=1000`, `clientHeight=200`, 400px track.
pub fn mounted_chat_panel(scroll_top: f64) -> (ScrollbarWidget, FakeHost) {
    let mut host = FakeHost::new(scroll_top, 1000.0, 200.0, 400.0);
    let mut widget = ScrollbarWidget::new(ScrollbarConfig::default());
    widget.mount(&mut host);
    (widget, host)
}

/// Deliver `event` through the host's listener table, then flush the
/// resulting scroll notification like a browser would.
pub fn fire(widget: &mut ScrollbarWidget, host: &mut FakeHost, event: ScrollbarEvent) -> bool {
    let (target, kind) = chat_scrollbar::app::listener_for(event);
    if !host.listening(target, kind) {
        return false;
    }
    let handled = widget.handle(host, event);
    if std::mem::take(&mut host.pending_scroll)
        && host.listening(ListenerTarget::Panel, ListenerKind::Scroll)
    {
        widget.handle(host, ScrollbarEvent::Scroll);
    }
    handled
}
