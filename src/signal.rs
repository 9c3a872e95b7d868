//! Shared pointer / resize / scroll signal source.
//!
//! Every section used to attach its own window listeners. The page now owns a
//! single [`SignalHub`]; sections hold a [`Subscription`] for as long as they
//! are mounted and the hub drops them from its list when the guard goes away.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportEvent {
    PointerMove { client_x: f64, client_y: f64 },
    Resize { width: f64, height: f64 },
    Scroll { scroll_y: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Interest {
    pub pointer: bool,
    pub resize: bool,
    pub scroll: bool,
}

impl Interest {
    pub const POINTER: Self = Self {
        pointer: true,
        resize: false,
        scroll: false,
    };
    pub const RESIZE: Self = Self {
        pointer: false,
        resize: true,
        scroll: false,
    };
    pub const SCROLL: Self = Self {
        pointer: false,
        resize: false,
        scroll: true,
    };
    pub const LAYOUT: Self = Self {
        pointer: false,
        resize: true,
        scroll: true,
    };

    pub fn with(self, other: Self) -> Self {
        Self {
            pointer: self.pointer || other.pointer,
            resize: self.resize || other.resize,
            scroll: self.scroll || other.scroll,
        }
    }

    pub fn accepts(self, event: &ViewportEvent) -> bool {
        match event {
            ViewportEvent::PointerMove { .. } => self.pointer,
            ViewportEvent::Resize { .. } => self.resize,
            ViewportEvent::Scroll { .. } => self.scroll,
        }
    }
}

type Listener = Rc<dyn Fn(&ViewportEvent)>;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    subscribers: Vec<(u64, Interest, Listener)>,
}

#[derive(Clone, Default)]
pub struct SignalHub {
    inner: Rc<RefCell<HubInner>>,
}

impl SignalHub {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(
        &self,
        interest: Interest,
        listener: impl Fn(&ViewportEvent) + 'static,
    ) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, interest, Rc::new(listener)));

        Subscription {
            id,
            hub: Rc::downgrade(&self.inner),
        }
    }

    pub fn dispatch(&self, event: &ViewportEvent) {
        // Snapshot so listeners can (un)subscribe while being notified.
        let listeners: Vec<(u64, Listener)> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .filter(|(_, interest, _)| interest.accepts(event))
            .map(|(id, _, listener)| (*id, Rc::clone(listener)))
            .collect();

        for (id, listener) in listeners {
            // An earlier listener may have dropped this subscription.
            if !self.is_subscribed(id) {
                continue;
            }
            listener(event);
        }
    }

    fn is_subscribed(&self, id: u64) -> bool {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .any(|(subscribed, _, _)| *subscribed == id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl PartialEq for SignalHub {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for SignalHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalHub")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

pub struct Subscription {
    id: u64,
    hub: Weak<RefCell<HubInner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(hub) = self.hub.upgrade() else {
            return;
        };
        hub.borrow_mut()
            .subscribers
            .retain(|(id, _, _)| *id != self.id);
    }
}

/// Client-space bounding box of an element, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.bottom()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    /// Pixel offset of the pointer from the container's top-left corner.
    pub fn offset_within(client_x: f64, client_y: f64, rect: Rect) -> Self {
        Self {
            x: client_x - rect.left,
            y: client_y - rect.top,
        }
    }

    /// Offset normalized by the container size and centred on its middle.
    /// Points inside the box map into `[-0.5, 0.5]` on both axes.
    pub fn centered_within(client_x: f64, client_y: f64, rect: Rect) -> Self {
        fn axis(offset: f64, extent: f64) -> f64 {
            if extent > 0.0 {
                offset / extent - 0.5
            } else {
                0.0
            }
        }

        let offset = Self::offset_within(client_x, client_y, rect);
        Self {
            x: axis(offset.x, rect.width),
            y: axis(offset.y, rect.height),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerMapping {
    Offset,
    Centered,
}

impl PointerMapping {
    pub fn sample(self, client_x: f64, client_y: f64, rect: Rect) -> PointerSample {
        match self {
            Self::Offset => PointerSample::offset_within(client_x, client_y, rect),
            Self::Centered => PointerSample::centered_within(client_x, client_y, rect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn dispatch_only_reaches_matching_interest() {
        let hub = SignalHub::new();
        let pointer_hits = Rc::new(Cell::new(0));
        let layout_hits = Rc::new(Cell::new(0));

        let _pointer = {
            let hits = Rc::clone(&pointer_hits);
            hub.subscribe(Interest::POINTER, move |_| hits.set(hits.get() + 1))
        };
        let _layout = {
            let hits = Rc::clone(&layout_hits);
            hub.subscribe(Interest::LAYOUT, move |_| hits.set(hits.get() + 1))
        };

        hub.dispatch(&ViewportEvent::PointerMove {
            client_x: 1.0,
            client_y: 2.0,
        });
        hub.dispatch(&ViewportEvent::Scroll { scroll_y: 40.0 });
        hub.dispatch(&ViewportEvent::Resize {
            width: 500.0,
            height: 800.0,
        });

        assert_eq!(pointer_hits.get(), 1);
        assert_eq!(layout_hits.get(), 2);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let hub = SignalHub::new();
        let hits = Rc::new(Cell::new(0));

        let subscription = {
            let hits = Rc::clone(&hits);
            hub.subscribe(Interest::POINTER, move |_| hits.set(hits.get() + 1))
        };
        assert_eq!(hub.subscriber_count(), 1);

        drop(subscription);
        assert_eq!(hub.subscriber_count(), 0);

        hub.dispatch(&ViewportEvent::PointerMove {
            client_x: 0.0,
            client_y: 0.0,
        });
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn subscription_outliving_hub_drops_quietly() {
        let hub = SignalHub::new();
        let subscription = hub.subscribe(Interest::SCROLL, |_| {});
        drop(hub);
        drop(subscription);
    }

    #[test]
    fn listener_may_unsubscribe_during_dispatch() {
        let hub = SignalHub::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let hits = Rc::new(Cell::new(0));

        let subscription = {
            let slot = Rc::clone(&slot);
            let hits = Rc::clone(&hits);
            hub.subscribe(Interest::SCROLL, move |_| {
                hits.set(hits.get() + 1);
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(subscription);

        hub.dispatch(&ViewportEvent::Scroll { scroll_y: 1.0 });
        hub.dispatch(&ViewportEvent::Scroll { scroll_y: 2.0 });

        assert_eq!(hits.get(), 1);
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn subscription_dropped_by_earlier_listener_is_skipped() {
        let hub = SignalHub::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let detached_hits = Rc::new(Cell::new(0));

        let _first = {
            let slot = Rc::clone(&slot);
            hub.subscribe(Interest::SCROLL, move |_| {
                slot.borrow_mut().take();
            })
        };
        let second = {
            let hits = Rc::clone(&detached_hits);
            hub.subscribe(Interest::SCROLL, move |_| hits.set(hits.get() + 1))
        };
        *slot.borrow_mut() = Some(second);

        hub.dispatch(&ViewportEvent::Scroll { scroll_y: 1.0 });
        hub.dispatch(&ViewportEvent::Scroll { scroll_y: 2.0 });

        assert_eq!(detached_hits.get(), 0, "detached listener must not run");
        assert_eq!(hub.subscriber_count(), 1);
    }

    #[test]
    fn centered_sample_stays_within_half_unit_inside_bounds() {
        let rect = Rect::new(120.0, 64.0, 800.0, 600.0);
        let probes = [
            (120.0, 64.0),
            (920.0, 664.0),
            (520.0, 364.0),
            (121.5, 663.0),
            (919.0, 65.0),
        ];

        for (x, y) in probes {
            assert!(rect.contains(x, y));
            let sample = PointerSample::centered_within(x, y, rect);
            assert!((-0.5..=0.5).contains(&sample.x), "x out of range: {sample:?}");
            assert!((-0.5..=0.5).contains(&sample.y), "y out of range: {sample:?}");
        }

        let centre = PointerSample::centered_within(520.0, 364.0, rect);
        assert_eq!(centre, PointerSample { x: 0.0, y: 0.0 });
    }

    #[test]
    fn centered_sample_on_collapsed_box_is_zero() {
        let rect = Rect::new(10.0, 10.0, 0.0, 0.0);
        let sample = PointerSample::centered_within(300.0, 40.0, rect);
        assert_eq!(sample, PointerSample::default());
    }

    #[test]
    fn offset_sample_is_relative_to_box_origin() {
        let rect = Rect::new(20.0, -300.0, 1000.0, 900.0);
        let sample = PointerMapping::Offset.sample(220.0, 100.0, rect);
        assert_eq!(sample, PointerSample { x: 200.0, y: 400.0 });
    }
}
