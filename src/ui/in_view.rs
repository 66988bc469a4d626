//! `use_in_view`: one-shot reveal flag for a rendered block
//!
//! Wraps [`VisibilityTrigger`](crate::core::visibility::VisibilityTrigger)
//! around the browser `IntersectionObserver`. The observer is released when
//! the owning component is cleaned up, whether or not the block was revealed.

use leptos::html::ElementType;
use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;

use crate::core::visibility::VisibilityOptions;

/// Returns a node ref to attach to the observed element and a flag that
/// turns true once, the first time the element is sufficiently visible.
pub fn use_in_view<E>(options: VisibilityOptions) -> (NodeRef<E>, Signal<bool>)
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let node_ref = NodeRef::<E>::new();
    let revealed = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    browser::observe(node_ref, revealed, options);
    #[cfg(feature = "ssr")]
    let _ = options;

    (node_ref, revealed.read_only().into())
}

#[cfg(not(feature = "ssr"))]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::html::ElementType;
    use leptos::prelude::*;
    use leptos::wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use leptos::web_sys;

    use crate::core::visibility::{
        IntersectionSample, ObserverBackend, VisibilityOptions, VisibilityTrigger,
    };

    type EntriesCallback = Closure<dyn FnMut(js_sys::Array)>;
    type TriggerSlot = Rc<RefCell<Option<VisibilityTrigger<DomObserver>>>>;

    /// `IntersectionObserver` together with the callback it invokes
    pub struct DomObserver {
        observer: Option<web_sys::IntersectionObserver>,
        callback: Option<EntriesCallback>,
    }

    impl ObserverBackend for DomObserver {
        type Target = web_sys::Element;

        fn observe(&mut self, target: &web_sys::Element) {
            if let Some(observer) = &self.observer {
                observer.observe(target);
            }
        }

        fn disconnect(&mut self) {
            if let Some(observer) = self.observer.take() {
                observer.disconnect();
            }
            self.callback = None;
        }
    }

    pub(super) fn observe<E>(
        node_ref: NodeRef<E>,
        revealed: RwSignal<bool>,
        options: VisibilityOptions,
    ) where
        E: ElementType,
        E::Output: JsCast + Clone + 'static,
    {
        let slot: TriggerSlot = Rc::new(RefCell::new(None));
        let weak = Rc::downgrade(&slot);

        let callback: EntriesCallback = Closure::new(move |entries: js_sys::Array| {
            let flipped = {
                let Some(slot) = weak.upgrade() else {
                    return;
                };
                let Ok(mut guard) = slot.try_borrow_mut() else {
                    return;
                };
                let Some(trigger) = guard.as_mut() else {
                    return;
                };
                entries.iter().fold(false, |flipped, entry| {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    let sample = IntersectionSample {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    trigger.on_intersection(sample) || flipped
                })
            };
            if flipped {
                revealed.set(true);
            }
        });

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.effective_threshold()));
        if let Some(margin) = &options.root_margin {
            init.set_root_margin(margin);
        }

        let observer = match web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => Some(observer),
            Err(err) => {
                tracing::warn!(?err, "IntersectionObserver unavailable, block stays hidden");
                None
            }
        };

        *slot.borrow_mut() = Some(VisibilityTrigger::new(
            options,
            DomObserver {
                observer,
                callback: Some(callback),
            },
        ));

        // Attach once the element is mounted; the trigger ignores re-attaches
        let attach_slot = slot.clone();
        Effect::new(move |_| {
            let Some(node) = node_ref.get() else {
                return;
            };
            let element: web_sys::Element = node.unchecked_into();
            if let Some(trigger) = attach_slot.borrow_mut().as_mut() {
                trigger.attach(&element);
            }
        });

        let stored = StoredValue::new_local(slot);
        on_cleanup(move || {
            stored.try_with_value(|slot| {
                if let Some(mut trigger) = slot.borrow_mut().take() {
                    trigger.release();
                }
            });
        });
    }
}
