use std::{cell::RefCell, rc::Rc};

use web_sys::{window, Document, MouseEvent};
use yew::prelude::*;

use crate::{
    motion::{nav_particles, spotlight},
    reveal::{delay_style, stagger_delay_ms},
    signal::{Interest, PointerSample, Rect, ViewportEvent},
    tracker::{ActiveSectionTracker, AnchorLayout, NavOutcome, SectionId},
    viewport::NavChrome,
};

use super::{
    element_rect, hooks::use_signal_hub, rect_of, scroll_offset, scroll_window_to, viewport_size,
};

const NAV_PARTICLE_COUNT: usize = 4;

struct DocumentAnchors {
    document: Document,
}

impl DocumentAnchors {
    fn current() -> Option<Self> {
        let document = window()?.document()?;
        Some(Self { document })
    }
}

impl AnchorLayout for DocumentAnchors {
    fn anchor_rect(&self, id: SectionId) -> Option<Rect> {
        self.document
            .get_element_by_id(id.anchor())
            .map(|element| rect_of(&element))
    }
}

enum ChromeAction {
    Resize(f64),
    Scroll(f64),
    ToggleMenu,
    CloseMenu,
    Navigate(NavOutcome),
}

#[derive(PartialEq)]
struct ChromeState(NavChrome);

impl Reducible for ChromeState {
    type Action = ChromeAction;

    fn reduce(self: Rc<Self>, action: ChromeAction) -> Rc<Self> {
        let mut chrome = self.0;
        match action {
            ChromeAction::Resize(width) => chrome.on_resize(width),
            ChromeAction::Scroll(scroll_y) => chrome.on_scroll(scroll_y),
            ChromeAction::ToggleMenu => chrome.toggle_menu(),
            ChromeAction::CloseMenu => chrome.close_menu(),
            ChromeAction::Navigate(outcome) => chrome.on_navigate(outcome),
        }

        if chrome == self.0 {
            self
        } else {
            Rc::new(Self(chrome))
        }
    }
}

fn refresh_active(tracker: &RefCell<ActiveSectionTracker>, active: &UseStateHandle<SectionId>) {
    let Some(anchors) = DocumentAnchors::current() else {
        return;
    };
    let (_, height) = viewport_size();
    if let Some(next) = tracker.borrow_mut().observe(&anchors, height) {
        active.set(next);
    }
}

#[derive(Properties, PartialEq)]
struct NavItemProps {
    id: SectionId,
    index: usize,
    active: bool,
    mobile: bool,
    on_select: Callback<SectionId>,
}

#[function_component(NavItem)]
fn nav_item(props: &NavItemProps) -> Html {
    let onclick = {
        let id = props.id;
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(id))
    };
    let step = if props.mobile { 50 } else { 100 };

    html! {
        <button
            type="button"
            class={classes!(
                "nav-item",
                props.mobile.then_some("nav-item--mobile"),
                props.active.then_some("is-active")
            )}
            style={delay_style(stagger_delay_ms(props.index, step))}
            aria-current={props.active.then_some("true")}
            onclick={onclick}
        >
            <span class="nav-item-icon" aria-hidden="true">{props.id.icon()}</span>
            <span class="nav-item-label">{props.id.label()}</span>
        </button>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let hub = use_signal_hub();
    let chrome = use_reducer(|| ChromeState(NavChrome::new(viewport_size().0)));
    let tracker = use_mut_ref(ActiveSectionTracker::default);
    let active = use_state(|| SectionId::Overview);
    let pointer = use_state(PointerSample::default);
    let shell = use_node_ref();

    {
        let dispatcher = chrome.dispatcher();
        let tracker = tracker.clone();
        let active = active.clone();
        use_effect_with(hub, move |hub| {
            dispatcher.dispatch(ChromeAction::Resize(viewport_size().0));
            dispatcher.dispatch(ChromeAction::Scroll(scroll_offset()));
            refresh_active(&tracker, &active);

            let subscription = hub.subscribe(Interest::LAYOUT, move |event| {
                match *event {
                    ViewportEvent::Resize { width, .. } => {
                        dispatcher.dispatch(ChromeAction::Resize(width))
                    }
                    ViewportEvent::Scroll { scroll_y } => {
                        dispatcher.dispatch(ChromeAction::Scroll(scroll_y))
                    }
                    ViewportEvent::PointerMove { .. } => return,
                }
                refresh_active(&tracker, &active);
            });
            move || drop(subscription)
        });
    }

    let on_navigate = {
        let tracker = tracker.clone();
        let active = active.clone();
        let dispatcher = chrome.dispatcher();
        Callback::from(move |id: SectionId| {
            let outcome = match DocumentAnchors::current() {
                Some(anchors) => tracker.borrow_mut().navigate(id, &anchors, scroll_offset()),
                None => {
                    tracker.borrow_mut().select(id);
                    NavOutcome::AnchorMissing
                }
            };
            active.set(tracker.borrow().active());
            tracing::debug!(section = id.anchor(), ?outcome, "navigation requested");

            if let NavOutcome::ScrollTo { top } = outcome {
                scroll_window_to(top);
            }
            dispatcher.dispatch(ChromeAction::Navigate(outcome));
        })
    };

    let state = chrome.0;
    let pointer_effects = state.pointer_effects_enabled();

    let onmousemove = {
        let pointer = pointer.clone();
        let shell = shell.clone();
        Callback::from(move |event: MouseEvent| {
            if !pointer_effects {
                return;
            }
            let Some(rect) = element_rect(&shell) else {
                return;
            };
            pointer.set(PointerSample::offset_within(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                rect,
            ));
        })
    };

    let on_toggle = {
        let dispatcher = chrome.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ChromeAction::ToggleMenu))
    };

    let on_backdrop = {
        let dispatcher = chrome.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ChromeAction::CloseMenu))
    };

    let on_cta = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(SectionId::Collaboration))
    };

    let items = |mobile: bool| -> Html {
        SectionId::ALL
            .iter()
            .enumerate()
            .map(|(index, &id)| {
                html! {
                    <NavItem
                        key={id.anchor()}
                        id={id}
                        index={index}
                        active={*active == id}
                        mobile={mobile}
                        on_select={on_navigate.clone()}
                    />
                }
            })
            .collect()
    };

    let menu_open = state.menu_open();

    html! {
        <>
            <nav
                class={classes!(
                    "navbar",
                    format!("navbar--{}", state.class().as_str()),
                    state.scrolled().then_some("is-scrolled")
                )}
                aria-label="Primary"
            >
                <div class="navbar-shell" ref={shell} onmousemove={onmousemove}>
                    <div class="navbar-border" aria-hidden="true">
                        <div class="navbar-fill" />
                    </div>

                    if pointer_effects {
                        <div
                            class="navbar-spotlight"
                            style={spotlight(*pointer, 600, "rgba(139, 92, 246, 0.06)", 40)}
                            aria-hidden="true"
                        />
                    }

                    <div class="navbar-grid" aria-hidden="true" />

                    if state.is_mobile() {
                        <div class="navbar-bar">
                            <span class="navbar-brand">{"Portfolio"}</span>
                            <button
                                type="button"
                                class={classes!("hamburger", menu_open.then_some("is-open"))}
                                aria-label="Toggle menu"
                                aria-expanded={menu_open.to_string()}
                                onclick={on_toggle}
                            >
                                <span class="hamburger-line" />
                                <span class="hamburger-line" />
                                <span class="hamburger-line" />
                            </button>
                        </div>
                    } else {
                        <div class="navbar-items">
                            {items(false)}
                            <div class="navbar-separator" aria-hidden="true" />
                            <button type="button" class="nav-cta" onclick={on_cta.clone()}>
                                <span class="nav-cta-label">{"Let's Collaborate"}</span>
                            </button>
                        </div>
                    }

                    if pointer_effects {
                        <div class="navbar-particles" aria-hidden="true">
                            { for nav_particles(NAV_PARTICLE_COUNT).iter().map(|particle| html! {
                                <div class="nav-particle" style={particle.style()} />
                            }) }
                        </div>
                    }
                </div>

                if pointer_effects {
                    <div class="navbar-glow" aria-hidden="true" />
                }
            </nav>

            if state.is_mobile() {
                <div
                    class={classes!("mobile-backdrop", menu_open.then_some("is-open"))}
                    onclick={on_backdrop}
                />
                <div class={classes!("mobile-menu", menu_open.then_some("is-open"))}>
                    <div class="mobile-menu-border">
                        <div class="mobile-menu-panel">
                            {items(true)}
                            <div class="mobile-menu-divider" aria-hidden="true" />
                            <button type="button" class="nav-cta nav-cta--mobile" onclick={on_cta}>
                                <span class="nav-cta-label">{"Let's Collaborate"}</span>
                            </button>
                        </div>
                    </div>
                </div>
            }
        </>
    }
}
