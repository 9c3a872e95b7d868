use std::{cell::RefCell, rc::Rc, time::Duration};

use gloo::{
    render::{request_animation_frame, AnimationFrame},
    timers::callback::Interval,
};
use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::{
    reveal::{VisibilityTrigger, VISIBILITY_THRESHOLD},
    signal::{Interest, PointerMapping, PointerSample, SignalHub, ViewportEvent},
    ticker::{period_millis, RotatingTicker},
};

use super::{element_rect, viewport_size};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;
type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// Hub installed by the provider. Outside a provider nothing is dispatched,
/// so subscribers simply never fire.
#[hook]
pub fn use_signal_hub() -> SignalHub {
    use_context::<SignalHub>().unwrap_or_default()
}

/// Last pointer position relative to `node`. Stays at the origin until the
/// pointer first moves, and ignores moves while `node` is unmounted.
#[hook]
pub fn use_pointer(node: NodeRef, mapping: PointerMapping) -> PointerSample {
    let hub = use_signal_hub();
    let sample = use_state(PointerSample::default);

    {
        let sample = sample.clone();
        use_effect_with((hub, node, mapping), move |(hub, node, mapping)| {
            let node = node.clone();
            let mapping = *mapping;
            let subscription = hub.subscribe(Interest::POINTER, move |event| {
                let ViewportEvent::PointerMove { client_x, client_y } = *event else {
                    return;
                };
                let Some(rect) = element_rect(&node) else {
                    return;
                };
                sample.set(mapping.sample(client_x, client_y, rect));
            });
            move || drop(subscription)
        });
    }

    *sample
}

#[hook]
pub fn use_viewport_width() -> f64 {
    let hub = use_signal_hub();
    let width = use_state(|| viewport_size().0);

    {
        let width = width.clone();
        use_effect_with(hub, move |hub| {
            let subscription = hub.subscribe(Interest::RESIZE, move |event| {
                if let ViewportEvent::Resize { width: next, .. } = *event {
                    width.set(next);
                }
            });
            move || drop(subscription)
        });
    }

    *width
}

fn observe_reveal(element: &Element, on_reveal: Callback<()>) -> Option<(IntersectionObserver, ObserverCallback)> {
    let mut trigger = VisibilityTrigger::new(VISIBILITY_THRESHOLD);
    let callback = ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if trigger.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                on_reveal.emit(());
            }
            if trigger.is_settled() {
                observer.disconnect();
                return;
            }
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    observer.observe(element);

    Some((observer, callback))
}

/// One-shot entrance flag for the element behind `node`.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with(node, move |node| {
            let on_reveal = Callback::from(move |()| revealed.set(true));
            let watch = node
                .cast::<Element>()
                .and_then(|element| observe_reveal(&element, on_reveal));
            move || {
                if let Some((observer, _callback)) = watch {
                    observer.disconnect();
                }
            }
        });
    }

    *revealed
}

#[derive(Clone, Copy, PartialEq)]
struct TickerState {
    ticker: RotatingTicker<'static>,
}

impl Reducible for TickerState {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        let mut ticker = self.ticker;
        ticker.tick();
        Rc::new(Self { ticker })
    }
}

#[hook]
pub fn use_ticker(items: &'static [&'static str], period: Duration) -> Option<&'static str> {
    let state = use_reducer(|| TickerState {
        ticker: RotatingTicker::new(items),
    });

    {
        let dispatcher = state.dispatcher();
        use_effect_with(period, move |period| {
            let interval = Interval::new(period_millis(*period), move || dispatcher.dispatch(()));
            move || drop(interval)
        });
    }

    state.ticker.current()
}

fn schedule_frame(slot: FrameSlot, seconds: UseStateHandle<f64>) {
    let next = Rc::clone(&slot);
    let frame = request_animation_frame(move |timestamp| {
        seconds.set(timestamp / 1000.0);
        schedule_frame(next, seconds);
    });
    *slot.borrow_mut() = Some(frame);
}

/// Seconds since page load, advanced once per animation frame while
/// `enabled`. Disabling parks the clock at its last value.
#[hook]
pub fn use_animation_clock(enabled: bool) -> f64 {
    let seconds = use_state(|| 0.0);

    {
        let seconds = seconds.clone();
        use_effect_with(enabled, move |enabled| {
            let slot: FrameSlot = Rc::new(RefCell::new(None));
            if *enabled {
                schedule_frame(Rc::clone(&slot), seconds);
            }
            move || {
                slot.borrow_mut().take();
            }
        });
    }

    *seconds
}
