use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use js_sys::Array;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::state::{IntersectionEvent, RevealPolicy, RevealState, Watch};
use crate::error::{describe, SiteError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WatchId(u64);

pub type EventHandler = Box<dyn FnMut(IntersectionEvent) -> Watch>;

/// Something that can tell us when a region scrolls into view.
///
/// Once a handler returns [`Watch::Stop`] the watcher must not call it again.
/// After [`ViewportWatcher::unobserve`] no further calls happen either.
pub trait ViewportWatcher {
    type Region: ?Sized;

    fn observe(
        &self,
        region: &Self::Region,
        policy: &RevealPolicy,
        handler: EventHandler,
    ) -> Result<WatchId, SiteError>;

    fn unobserve(&self, id: WatchId);
}

struct ActiveObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

/// `IntersectionObserver`-backed watcher, one observer per region.
#[derive(Default)]
pub struct BrowserViewport {
    next_id: Cell<u64>,
    active: RefCell<HashMap<WatchId, ActiveObserver>>,
}

impl ViewportWatcher for BrowserViewport {
    type Region = Element;

    fn observe(
        &self,
        region: &Element,
        policy: &RevealPolicy,
        mut handler: EventHandler,
    ) -> Result<WatchId, SiteError> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let event = IntersectionEvent {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                if handler(event) == Watch::Stop {
                    observer.disconnect();
                    break;
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(policy.root_margin);
        options.set_threshold(&JsValue::from_f64(policy.threshold));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| SiteError::ObserverUnavailable(describe(&e)))?;
        observer.observe(region);

        let id = WatchId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.active.borrow_mut().insert(
            id,
            ActiveObserver {
                observer,
                _callback: callback,
            },
        );
        Ok(id)
    }

    fn unobserve(&self, id: WatchId) {
        // Dropping the entry releases the JS closure as well.
        if let Some(active) = self.active.borrow_mut().remove(&id) {
            active.observer.disconnect();
        }
    }
}

/// Watches a single region and flips it to visible the first time it enters
/// the viewport. Dropping the controller ends the observation.
pub struct RevealController<W: ViewportWatcher> {
    watcher: Rc<W>,
    watch: Option<WatchId>,
    state: Rc<Cell<RevealState>>,
}

impl<W: ViewportWatcher> RevealController<W> {
    /// Starts watching `region`. `on_reveal` runs exactly once, when the
    /// region becomes visible. If the watcher can't observe at all, the
    /// region is revealed straight away rather than left hidden.
    pub fn attach(
        watcher: Rc<W>,
        region: &W::Region,
        policy: RevealPolicy,
        on_reveal: impl Fn() + 'static,
    ) -> Self {
        let state = Rc::new(Cell::new(RevealState::Hidden));
        let on_reveal = Rc::new(on_reveal);

        let handler: EventHandler = {
            let state = state.clone();
            let on_reveal = on_reveal.clone();
            Box::new(move |event| {
                let before = state.get();
                let after = before.advance(&policy, &event);
                state.set(after);
                if after.is_visible() {
                    if !before.is_visible() {
                        debug!("Region revealed at ratio {:.2}", event.ratio);
                        (*on_reveal)();
                    }
                    Watch::Stop
                } else {
                    Watch::Continue
                }
            })
        };

        let watch = match watcher.observe(region, &policy, handler) {
            Ok(id) => Some(id),
            Err(e) => {
                warn!("Revealing immediately: {}", e);
                state.set(RevealState::Visible);
                (*on_reveal)();
                None
            }
        };

        RevealController { watcher, watch, state }
    }

    #[cfg(test)]
    pub fn state(&self) -> RevealState {
        self.state.get()
    }
}

impl<W: ViewportWatcher> Drop for RevealController<W> {
    fn drop(&mut self) {
        if let Some(id) = self.watch.take() {
            if !self.state.get().is_visible() {
                debug!("Region unmounted before it was revealed");
            }
            self.watcher.unobserve(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Slot {
        handler: Option<EventHandler>,
        stopped: bool,
    }

    /// Synthesizes intersection events without a viewport.
    #[derive(Default)]
    struct ScriptedViewport {
        slots: RefCell<Vec<Slot>>,
        released: RefCell<Vec<WatchId>>,
        unsupported: bool,
    }

    impl ScriptedViewport {
        fn unsupported() -> Self {
            ScriptedViewport { unsupported: true, ..Default::default() }
        }

        /// Delivers `event` to the watch; returns false if nothing was listening.
        fn fire(&self, id: WatchId, event: IntersectionEvent) -> bool {
            let handler = self.slots.borrow_mut()[id.0 as usize].handler.take();
            let Some(mut handler) = handler else {
                return false;
            };
            let outcome = handler(event);
            let mut slots = self.slots.borrow_mut();
            let slot = &mut slots[id.0 as usize];
            if outcome == Watch::Stop {
                slot.stopped = true;
            } else if !self.released.borrow().contains(&id) {
                slot.handler = Some(handler);
            }
            true
        }

        fn is_listening(&self, id: WatchId) -> bool {
            self.slots.borrow()[id.0 as usize].handler.is_some()
        }
    }

    impl ViewportWatcher for ScriptedViewport {
        type Region = str;

        fn observe(
            &self,
            _region: &str,
            _policy: &RevealPolicy,
            handler: EventHandler,
        ) -> Result<WatchId, SiteError> {
            if self.unsupported {
                return Err(SiteError::ObserverUnavailable("IntersectionObserver is not defined".into()));
            }
            let mut slots = self.slots.borrow_mut();
            slots.push(Slot { handler: Some(handler), stopped: false });
            Ok(WatchId(slots.len() as u64 - 1))
        }

        fn unobserve(&self, id: WatchId) {
            self.slots.borrow_mut()[id.0 as usize].handler = None;
            self.released.borrow_mut().push(id);
        }
    }

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let count = Rc::new(Cell::new(0));
        let hook = {
            let count = count.clone();
            move || count.set(count.get() + 1)
        };
        (count, hook)
    }

    #[test]
    fn starts_hidden_and_reveals_on_first_qualifying_event() {
        let viewport = Rc::new(ScriptedViewport::default());
        let (reveals, on_reveal) = counter();
        let controller = RevealController::attach(viewport.clone(), "hero", RevealPolicy::default(), on_reveal);
        let id = controller.watch.unwrap();

        assert_eq!(controller.state(), RevealState::Hidden);
        viewport.fire(id, IntersectionEvent::outside());
        viewport.fire(id, IntersectionEvent::inside(0.04));
        viewport.fire(id, IntersectionEvent::inside(0.0995));
        assert_eq!(controller.state(), RevealState::Hidden);
        assert!(viewport.is_listening(id));

        viewport.fire(id, IntersectionEvent::inside(0.12));
        assert_eq!(controller.state(), RevealState::Visible);
        assert_eq!(reveals.get(), 1);
    }

    #[test]
    fn stops_observing_after_reveal() {
        let viewport = Rc::new(ScriptedViewport::default());
        let (reveals, on_reveal) = counter();
        let controller = RevealController::attach(viewport.clone(), "about", RevealPolicy::default(), on_reveal);
        let id = controller.watch.unwrap();

        assert!(viewport.fire(id, IntersectionEvent::inside(0.5)));
        assert!(viewport.slots.borrow()[0].stopped);
        // Scrolling away later is never delivered.
        assert!(!viewport.fire(id, IntersectionEvent::outside()));
        assert_eq!(controller.state(), RevealState::Visible);
        assert_eq!(reveals.get(), 1);
    }

    #[test]
    fn drop_before_intersection_releases_the_watch() {
        let viewport = Rc::new(ScriptedViewport::default());
        let (reveals, on_reveal) = counter();
        let controller = RevealController::attach(viewport.clone(), "stats", RevealPolicy::default(), on_reveal);
        let id = controller.watch.unwrap();
        drop(controller);

        assert_eq!(*viewport.released.borrow(), vec![id]);
        assert!(!viewport.fire(id, IntersectionEvent::inside(1.0)));
        assert_eq!(reveals.get(), 0);
    }

    #[test]
    fn never_intersecting_region_stays_hidden() {
        let viewport = Rc::new(ScriptedViewport::default());
        let (reveals, on_reveal) = counter();
        let controller = RevealController::attach(viewport.clone(), "footer", RevealPolicy::default(), on_reveal);
        let id = controller.watch.unwrap();
        for _ in 0..10 {
            viewport.fire(id, IntersectionEvent::outside());
        }
        assert_eq!(controller.state(), RevealState::Hidden);
        assert_eq!(reveals.get(), 0);
    }

    #[test]
    fn unsupported_watcher_reveals_immediately() {
        let viewport = Rc::new(ScriptedViewport::unsupported());
        let (reveals, on_reveal) = counter();
        let controller = RevealController::attach(viewport.clone(), "hero", RevealPolicy::default(), on_reveal);

        assert_eq!(controller.state(), RevealState::Visible);
        assert_eq!(reveals.get(), 1);
        drop(controller);
        assert!(viewport.released.borrow().is_empty());
    }

    #[test]
    fn regions_are_independent() {
        let viewport = Rc::new(ScriptedViewport::default());
        let (_, first_hook) = counter();
        let (_, second_hook) = counter();
        let first = RevealController::attach(viewport.clone(), "a", RevealPolicy::default(), first_hook);
        let second = RevealController::attach(viewport.clone(), "b", RevealPolicy::default(), second_hook);

        viewport.fire(first.watch.unwrap(), IntersectionEvent::inside(0.9));
        assert_eq!(first.state(), RevealState::Visible);
        assert_eq!(second.state(), RevealState::Hidden);
    }
}
