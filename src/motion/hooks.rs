//! Yew hooks wiring the pure motion math to the DOM.
//!
//! Every listener and observer acquired here is released again in the
//! effect destructor, so remounting a page never stacks handlers. When the
//! DOM APIs are missing (no window, no IntersectionObserver) the hooks fall
//! back to resting values and everything stays visible.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{
    Element, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::prelude::*;

use crate::motion::progress::page_progress;
use crate::motion::reveal::RevealState;
use crate::motion::spring::Spring;

/// Settle tick while a smoothed value is still moving.
const SETTLE_TICK_MS: u32 = 16;
/// Cap on a single integration step, so a suspended tab resumes gently.
const MAX_FRAME_SECONDS: f64 = 0.064;

/// A live event listener. Dropping the binding detaches the listener.
pub struct EventBinding {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl EventBinding {
    pub fn attach(
        target: &EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut()>,
    ) -> Option<Self> {
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { target: target.clone(), event, callback })
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

fn measure() -> Option<f64> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let scroll_top = window.scroll_y().unwrap_or_else(|_| root.scroll_top() as f64);
    let viewport = window.inner_height().ok()?.as_f64()?;
    Some(page_progress(scroll_top, root.scroll_height() as f64, viewport))
}

fn now_seconds() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now() / 1000.0)
        .unwrap_or(0.0)
}

struct SpringSim {
    spring: Spring,
    position: f64,
    velocity: f64,
    target: f64,
    last: f64,
    pending: Option<Timeout>,
}

impl SpringSim {
    fn new(spring: Spring, position: f64) -> Self {
        Self { spring, position, velocity: 0.0, target: position, last: now_seconds(), pending: None }
    }
}

fn advance(sim: &Rc<RefCell<SpringSim>>, out: &UseStateHandle<f64>) {
    let emit = {
        let mut s = sim.borrow_mut();
        let now = now_seconds();
        let dt = (now - s.last).clamp(0.0, MAX_FRAME_SECONDS);
        s.last = now;
        let (position, velocity) = s.spring.step(s.position, s.velocity, s.target, dt);
        s.position = position;
        s.velocity = velocity;
        if s.spring.is_rest(position, velocity, s.target) {
            s.position = s.target;
            s.velocity = 0.0;
            s.pending = None;
            s.target
        } else {
            let next_sim = Rc::clone(sim);
            let next_out = out.clone();
            s.pending = Some(Timeout::new(SETTLE_TICK_MS, move || advance(&next_sim, &next_out)));
            s.position
        }
    };
    out.set(emit);
}

fn retarget(sim: &Rc<RefCell<SpringSim>>, out: &UseStateHandle<f64>, target: f64) {
    let idle = {
        let mut s = sim.borrow_mut();
        s.target = target;
        s.pending.is_none()
    };
    if idle {
        sim.borrow_mut().last = now_seconds();
        advance(sim, out);
    }
}

/// Normalized page scroll progress in [0, 1], recomputed on scroll and
/// resize. With `Some(spring)` the raw value is smoothed through the filter
/// before it reaches the caller; the settle tick stops once the spring
/// rests and is cancelled on unmount.
#[hook]
pub fn use_scroll_progress(spring: Option<Spring>) -> f64 {
    let value = use_state_eq(|| measure().unwrap_or(0.0));

    {
        let value = value.clone();
        use_effect_with_deps(
            move |spring: &Option<Spring>| {
                let mut bindings = Vec::new();
                let mut settling: Option<Rc<RefCell<SpringSim>>> = None;

                if let Some(window) = web_sys::window() {
                    match *spring {
                        None => {
                            for event in ["scroll", "resize"] {
                                let value = value.clone();
                                let callback = Closure::wrap(Box::new(move || {
                                    if let Some(progress) = measure() {
                                        value.set(progress);
                                    }
                                }) as Box<dyn FnMut()>);
                                bindings.extend(EventBinding::attach(&window, event, callback));
                            }
                            if let Some(progress) = measure() {
                                value.set(progress);
                            }
                        }
                        Some(config) => {
                            let sim = Rc::new(RefCell::new(SpringSim::new(config, *value)));
                            for event in ["scroll", "resize"] {
                                let sim = Rc::clone(&sim);
                                let value = value.clone();
                                let callback = Closure::wrap(Box::new(move || {
                                    if let Some(target) = measure() {
                                        retarget(&sim, &value, target);
                                    }
                                }) as Box<dyn FnMut()>);
                                bindings.extend(EventBinding::attach(&window, event, callback));
                            }
                            if let Some(target) = measure() {
                                retarget(&sim, &value, target);
                            }
                            settling = Some(sim);
                        }
                    }
                }

                move || {
                    if let Some(sim) = settling {
                        // Cancels any pending settle tick.
                        sim.borrow_mut().pending = None;
                    }
                    drop(bindings);
                }
            },
            spring,
        );
    }

    *value
}

/// Whether the page has scrolled past `threshold` pixels. Drives the
/// header's transparent-to-solid flip.
#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |threshold: &f64| {
                let threshold = *threshold;
                let mut binding = None;
                if let Some(window) = web_sys::window() {
                    if let Ok(y) = window.scroll_y() {
                        scrolled.set(y > threshold);
                    }
                    let scrolled = scrolled.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        if let Some(window) = web_sys::window() {
                            if let Ok(y) = window.scroll_y() {
                                scrolled.set(y > threshold);
                            }
                        }
                    }) as Box<dyn FnMut()>);
                    binding = EventBinding::attach(&window, "scroll", callback);
                }
                move || drop(binding)
            },
            threshold,
        );
    }

    *scrolled
}

type IntersectionWatcher =
    (IntersectionObserver, Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>);

fn watch_intersection(
    element: &Element,
    root_margin: &str,
    visible: UseStateHandle<bool>,
) -> Option<IntersectionWatcher> {
    let state = Rc::new(RefCell::new(RevealState::new()));
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if state.borrow_mut().on_intersect(entry.is_intersecting()) {
                    visible.set(true);
                    // One-shot: nothing left to watch for this element.
                    observer.disconnect();
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);
    Some((observer, callback))
}

/// One-shot reveal for the element the returned `NodeRef` is attached to.
/// `root_margin` shrinks (negative values) or grows the viewport used for
/// the trigger. Without a usable observer the element is visible from the
/// start.
#[hook]
pub fn use_reveal(root_margin: &'static str) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state_eq(|| web_sys::window().is_none());

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let watcher = match node.cast::<Element>() {
                    Some(element) => watch_intersection(&element, root_margin, visible.clone()),
                    None => None,
                };
                if watcher.is_none() {
                    visible.set(true);
                }
                move || {
                    if let Some((observer, _callback)) = watcher {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    (node, *visible)
}
