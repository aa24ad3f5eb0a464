//! Page-wide effects wired straight onto the DOM: reveal-on-scroll, card
//! tilt, smooth anchor scrolling and wheel-driven gallery scrolling.
//!
//! Each hook attaches once on mount to whatever matching elements the page
//! rendered and detaches on unmount.

use chrono::Datelike;
use js_sys::Array;
use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, AddEventListenerOptions, Element, Event, EventTarget, HtmlElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MouseEvent,
    ScrollBehavior, ScrollToOptions, WheelEvent,
};
use yew::prelude::*;

use crate::config;
use crate::dom;

/// An attached DOM listener; removed again when dropped.
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn new(target: &EventTarget, event: &'static str, f: impl FnMut(Event) + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { target: target.clone(), event, callback })
    }

    fn non_passive(target: &EventTarget, event: &'static str, f: impl FnMut(Event) + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;
        Some(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

fn is_touch() -> bool {
    dom::media_matches("(pointer: coarse)")
}

/// Adds `show` to every `.reveal` element the first time it scrolls into view.
#[hook]
pub fn use_reveal() {
    use_effect_with_deps(
        |_| {
            let callback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let target = entry.target();
                        let _ = target.class_list().add_1("show");
                        observer.unobserve(&target);
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>);

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
            init.set_root_margin(config::REVEAL_ROOT_MARGIN);

            let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => {
                    for el in dom::qsa(".reveal") {
                        observer.observe(&el);
                    }
                    Some(observer)
                }
                Err(_) => {
                    error!("IntersectionObserver unavailable, reveal disabled");
                    None
                }
            };

            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
                drop(callback);
            }
        },
        (),
    );
}

/// Card rotation for a pointer at relative position (`x`, `y`) inside the
/// card, both clamped to 0..=1.
pub fn tilt_transform(x: f64, y: f64) -> String {
    let x = x.clamp(0.0, 1.0);
    let y = y.clamp(0.0, 1.0);
    // `+ 0.0` folds -0.0 into 0.0 so the centre renders without a sign
    let rx = (y - 0.5) * -config::TILT_MAX_X + 0.0;
    let ry = (x - 0.5) * config::TILT_MAX_Y + 0.0;
    format!(
        "translateY({}px) rotateX({:.2}deg) rotateY({:.2}deg)",
        config::TILT_BASE_LIFT,
        rx,
        ry
    )
}

pub fn rest_transform() -> String {
    format!("translateY({}px)", config::TILT_BASE_LIFT)
}

fn set_style(card: &HtmlElement, property: &str, value: &str) {
    let _ = card.style().set_property(property, value);
}

/// Pointer-following tilt on `.tilt` cards. Disabled on touch devices.
#[hook]
pub fn use_tilt() {
    use_effect_with_deps(
        |_| {
            let mut listeners = Vec::new();
            if !is_touch() {
                for card in dom::qsa(".tilt") {
                    let Ok(card) = card.dyn_into::<HtmlElement>() else {
                        continue;
                    };

                    let c = card.clone();
                    listeners.extend(Listener::new(&card, "mouseenter", move |_| {
                        set_style(&c, "will-change", "transform");
                    }));

                    let c = card.clone();
                    listeners.extend(Listener::new(&card, "mousemove", move |e: Event| {
                        let Some(e) = e.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        let r = c.get_bounding_client_rect();
                        if r.width() <= 0.0 || r.height() <= 0.0 {
                            return;
                        }
                        let x = (e.client_x() as f64 - r.left()) / r.width();
                        let y = (e.client_y() as f64 - r.top()) / r.height();
                        set_style(&c, "transform", &tilt_transform(x, y));
                    }));

                    let c = card.clone();
                    listeners.extend(Listener::new(&card, "mouseleave", move |_| {
                        set_style(&c, "will-change", "auto");
                        set_style(&c, "transform", &rest_transform());
                    }));
                }
            }
            move || drop(listeners)
        },
        (),
    );
}

/// Element id referenced by an in-page link, if any.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

fn scroll_to_element(target: &Element) {
    let (Some(window), Ok(target)) = (window(), target.clone().dyn_into::<HtmlElement>()) else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(target.offset_top() as f64 - config::SCROLL_OFFSET);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smooth scrolling for `a[href^="#"]` links whose target exists.
#[hook]
pub fn use_smooth_scroll() {
    use_effect_with_deps(
        |_| {
            let mut listeners = Vec::new();
            for link in dom::qsa("a[href^=\"#\"]") {
                let l = link.clone();
                listeners.extend(Listener::new(&link, "click", move |e: Event| {
                    let href = l.get_attribute("href").unwrap_or_default();
                    let target = anchor_target(&href).and_then(|id| dom::qs(&format!("#{}", id)));
                    if let Some(target) = target {
                        e.prevent_default();
                        scroll_to_element(&target);
                    }
                }));
            }
            move || drop(listeners)
        },
        (),
    );
}

/// Horizontal scroll amount for a wheel event, or `None` when the gesture is
/// already mostly horizontal and should be left to the browser.
pub fn wheel_to_horizontal(delta_x: f64, delta_y: f64) -> Option<f64> {
    (delta_y.abs() > delta_x.abs()).then_some(delta_y)
}

/// Vertical wheel scrolls `.gallery__track` sideways on pointer devices.
#[hook]
pub fn use_gallery_wheel() {
    use_effect_with_deps(
        |_| {
            let mut listeners = Vec::new();
            if let Some(track) = dom::qs(".gallery__track").filter(|_| !is_touch()) {
                let t = track.clone();
                listeners.extend(Listener::non_passive(&track, "wheel", move |e: Event| {
                    let Some(wheel) = e.dyn_ref::<WheelEvent>() else {
                        return;
                    };
                    if let Some(dy) = wheel_to_horizontal(wheel.delta_x(), wheel.delta_y()) {
                        e.prevent_default();
                        t.scroll_by_with_x_and_y(dy, 0.0);
                    }
                }));
            }
            move || drop(listeners)
        },
        (),
    );
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilt_is_flat_at_the_centre() {
        assert_eq!(
            tilt_transform(0.5, 0.5),
            "translateY(-2px) rotateX(0.00deg) rotateY(0.00deg)"
        );
    }

    #[test]
    fn tilt_reaches_half_the_maximum_at_the_corners() {
        assert_eq!(
            tilt_transform(1.0, 0.0),
            "translateY(-2px) rotateX(3.00deg) rotateY(4.00deg)"
        );
        assert_eq!(
            tilt_transform(0.0, 1.0),
            "translateY(-2px) rotateX(-3.00deg) rotateY(-4.00deg)"
        );
    }

    #[test]
    fn tilt_clamps_pointer_outside_the_card() {
        assert_eq!(tilt_transform(3.0, -2.0), tilt_transform(1.0, 0.0));
    }

    #[test]
    fn rest_keeps_the_lift() {
        assert_eq!(rest_transform(), "translateY(-2px)");
    }

    #[test]
    fn anchor_target_needs_an_id() {
        assert_eq!(anchor_target("#faq"), Some("faq"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/support"), None);
    }

    #[test]
    fn wheel_only_redirects_vertical_gestures() {
        assert_eq!(wheel_to_horizontal(0.0, 40.0), Some(40.0));
        assert_eq!(wheel_to_horizontal(5.0, -30.0), Some(-30.0));
        assert_eq!(wheel_to_horizontal(30.0, 10.0), None);
        assert_eq!(wheel_to_horizontal(10.0, 10.0), None);
    }

    #[test]
    fn wheel_keeps_fractional_trackpad_deltas() {
        assert_eq!(wheel_to_horizontal(0.1, 0.4), Some(0.4));
        assert_eq!(wheel_to_horizontal(0.0, -0.25), Some(-0.25));
    }
}
