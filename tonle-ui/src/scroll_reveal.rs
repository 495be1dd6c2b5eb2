//! Scroll-triggered section reveal
//!
//! Sections fade in the first time they scroll into view. The browser side
//! is an `IntersectionObserver` owned by [`SectionObserver`]; the visibility
//! flags live in a [`RevealTracker`] signal that the markup reads to pick
//! between the pending and revealed class states.
//!
//! # Observer Cleanup Pattern
//!
//! Attaching a JavaScript observer from Rust/WASM means the backing
//! `Closure` must live as long as the observer is connected. Instead of
//! `closure.forget()`, the closure is stored in a struct that implements
//! `Drop` and disconnects the observer there. The struct sits in a
//! component-scoped signal, so unmounting the page releases the observer
//! with it.
//!
//! Hosts without `IntersectionObserver` fail open: every section renders
//! revealed immediately, trading the animation for guaranteed-visible
//! content. Non-wasm builds take the same path.

use dioxus::prelude::*;
use std::rc::Rc;
use tonle_common::RevealTracker;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

/// Fraction of a section that must be inside the viewport to reveal it.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Root margin pulling the trigger line 50px above the viewport bottom.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Classes for the two visibility states. The transition itself lives on
/// the section wrapper so both states animate with the same curve.
pub fn reveal_classes(visible: bool) -> &'static str {
    if visible {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-6"
    }
}

/// Wraps an `IntersectionObserver` and the elements it watches.
///
/// The observer never learns section ids from the DOM; the element-to-id
/// mapping is owned here. Dropping the handle disconnects the observer.
#[cfg(target_arch = "wasm32")]
pub struct SectionObserver {
    observer: web_sys::IntersectionObserver,
    targets: Rc<RefCell<Vec<(web_sys::Element, String)>>>,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

#[cfg(target_arch = "wasm32")]
impl SectionObserver {
    /// Build an observer that calls `on_visible` with a section id each
    /// time one of its elements crosses the reveal threshold. Returns
    /// `None` when the host has no `IntersectionObserver`; callers fail
    /// open in that case.
    pub fn new(mut on_visible: impl FnMut(&str) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let supported =
            js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false);
        if !supported {
            return None;
        }

        let targets: Rc<RefCell<Vec<(web_sys::Element, String)>>> =
            Rc::new(RefCell::new(Vec::new()));

        let callback_targets = Rc::clone(&targets);
        let callback: Closure<dyn FnMut(js_sys::Array)> =
            Closure::wrap(Box::new(move |entries: js_sys::Array| {
                for entry in entries.iter() {
                    let Some(entry) = entry.dyn_ref::<web_sys::IntersectionObserverEntry>()
                    else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    // Clone out of the borrow before invoking the callback;
                    // marking a section visible may re-render and watch more
                    // elements from within this event.
                    let section = callback_targets
                        .borrow()
                        .iter()
                        .find(|(element, _)| *element == target)
                        .map(|(_, section)| section.clone());
                    if let Some(section) = section {
                        on_visible(&section);
                    }
                }
            }) as Box<dyn FnMut(js_sys::Array)>);

        let options = web_sys::IntersectionObserverInit::new();
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;

        Some(Self {
            observer,
            targets,
            _callback: callback,
        })
    }

    /// Start watching an element under the given section id.
    pub fn watch(&self, element: web_sys::Element, section: &str) {
        self.targets
            .borrow_mut()
            .push((element.clone(), section.to_string()));
        self.observer.observe(&element);
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Non-wasm builds have no viewport to observe; construction always fails
/// and the tracker fails open.
#[cfg(not(target_arch = "wasm32"))]
pub struct SectionObserver {
    _priv: (),
}

#[cfg(not(target_arch = "wasm32"))]
impl SectionObserver {
    pub fn new(_on_visible: impl FnMut(&str) + 'static) -> Option<Self> {
        None
    }

    pub fn watch(&self, _element: web_sys::Element, _section: &str) {}
}

/// Handle returned by [`use_scroll_reveal`]. Copy it into sections and
/// event handlers freely; both fields are signals.
#[derive(Clone, Copy, PartialEq)]
pub struct RevealHandle {
    tracker: Signal<RevealTracker>,
    observer: Signal<Option<SectionObserver>>,
}

impl RevealHandle {
    pub fn is_visible(&self, section: &str) -> bool {
        self.tracker.read().is_visible(section)
    }

    pub fn classes(&self, section: &str) -> &'static str {
        reveal_classes(self.is_visible(section))
    }

    /// Wire a mounted element up to its section. Called from `onmounted`.
    pub fn attach(&self, section: &str, data: Rc<MountedData>) {
        #[cfg(target_arch = "wasm32")]
        if let Some(element) = data.downcast::<web_sys::Element>() {
            if let Some(observer) = self.observer.read().as_ref() {
                observer.watch(element.clone(), section);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (section, data);
    }
}

/// Track reveal state for a page's sections.
///
/// Registers every section as pending, connects one observer for the whole
/// page, and falls back to showing everything when observation is
/// unavailable. The observer lives in a component-scoped signal, so it is
/// disconnected when the page unmounts.
pub fn use_scroll_reveal(sections: &'static [&'static str]) -> RevealHandle {
    let mut tracker = use_signal(|| {
        let mut tracker = RevealTracker::new();
        for section in sections {
            tracker.register(*section);
        }
        tracker
    });

    let observer = use_signal(move || {
        SectionObserver::new(move |section| {
            tracker.write().mark_visible(section);
        })
    });

    use_effect(move || {
        if observer.read().is_none() && !tracker.peek().is_fail_open() {
            tracing::warn!("viewport observation unavailable; revealing all sections");
            tracker.set(RevealTracker::fail_open());
        }
    });

    RevealHandle { tracker, observer }
}

/// Section wrapper that animates from pending to revealed the first time
/// it scrolls into view.
#[component]
pub fn RevealSection(
    handle: RevealHandle,
    section: &'static str,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let extra = class.unwrap_or_default();
    let state = handle.classes(section);

    rsx! {
        section {
            class: "transition-all duration-700 ease-out {state} {extra}",
            onmounted: move |evt| handle.attach(section, evt.data()),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_classes_states() {
        assert_eq!(reveal_classes(true), "opacity-100 translate-y-0");
        assert_eq!(reveal_classes(false), "opacity-0 translate-y-6");
    }

    #[test]
    fn test_thresholds_are_fixed() {
        assert_eq!(REVEAL_THRESHOLD, 0.1);
        assert_eq!(REVEAL_ROOT_MARGIN, "0px 0px -50px 0px");
    }
}
