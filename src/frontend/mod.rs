mod about;
mod branding;
mod contact;
mod expertise;
mod hero;
mod hooks;
mod navbar;
mod portfolio;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::signal::{Rect, SignalHub, ViewportEvent};

use about::AboutMe;
use branding::PersonalBranding;
use contact::Contact;
use expertise::Expertise;
use hero::Hero;
use navbar::Navbar;
use portfolio::Portfolio;

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

fn scroll_offset() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn rect_of(element: &Element) -> Rect {
    let bounds = element.get_bounding_client_rect();
    Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height())
}

fn element_rect(node: &NodeRef) -> Option<Rect> {
    node.cast::<Element>().map(|element| rect_of(&element))
}

fn scroll_window_to(top: f64) {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(if prefers_reduced_motion() {
        ScrollBehavior::Instant
    } else {
        ScrollBehavior::Smooth
    });
    win.scroll_to_with_scroll_to_options(&options);
}

/// Window listeners feeding the hub. Dropping the vector removes them.
fn install_window_listeners(hub: &SignalHub) -> Vec<EventListener> {
    let Some(win) = window() else {
        return Vec::new();
    };

    let pointer_hub = hub.clone();
    let resize_hub = hub.clone();
    let scroll_hub = hub.clone();

    vec![
        EventListener::new(&win, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            pointer_hub.dispatch(&ViewportEvent::PointerMove {
                client_x: f64::from(event.client_x()),
                client_y: f64::from(event.client_y()),
            });
        }),
        EventListener::new(&win, "resize", move |_| {
            let (width, height) = viewport_size();
            resize_hub.dispatch(&ViewportEvent::Resize { width, height });
        }),
        EventListener::new(&win, "scroll", move |_| {
            scroll_hub.dispatch(&ViewportEvent::Scroll {
                scroll_y: scroll_offset(),
            });
        }),
    ]
}

#[derive(Properties, PartialEq)]
struct ViewportProviderProps {
    #[prop_or_default]
    children: Html,
}

#[function_component(ViewportProvider)]
fn viewport_provider(props: &ViewportProviderProps) -> Html {
    let hub = (*use_state(SignalHub::new)).clone();

    use_effect_with(hub.clone(), |hub| {
        let listeners = install_window_listeners(hub);
        tracing::debug!(listeners = listeners.len(), "viewport signals attached");
        move || drop(listeners)
    });

    html! {
        <ContextProvider<SignalHub> context={hub}>
            {props.children.clone()}
        </ContextProvider<SignalHub>>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <ViewportProvider>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <div class="page-shell">
                <Navbar />
                <main id="content">
                    <Hero />
                    <PersonalBranding />
                    <AboutMe />
                    <Portfolio />
                    <Expertise />
                    <Contact />
                </main>
            </div>
        </ViewportProvider>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
