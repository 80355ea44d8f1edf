use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::reveal::{RevealAction, RevealController, RevealState, Section, SECTION_ATTR};

/// Node refs for the observed sections.
#[derive(Clone, Default, PartialEq)]
pub struct SectionRefs {
    pub hero: NodeRef,
    pub about: NodeRef,
    pub services: NodeRef,
    pub contact: NodeRef,
}

impl SectionRefs {
    pub fn get(&self, section: Section) -> &NodeRef {
        match section {
            Section::Hero => &self.hero,
            Section::About => &self.about,
            Section::Services => &self.services,
            Section::Contact => &self.contact,
        }
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Tracks the page sections and latches each one once it is 30% on screen.
///
/// Each rendered section must carry `ref={refs.get(section)}` and
/// `data-reveal={section.id()}`.
#[hook]
pub fn use_section_reveal() -> (UseReducerHandle<RevealController>, SectionRefs) {
    let controller = use_reducer(RevealController::default);
    let refs = use_state(SectionRefs::default);

    {
        let dispatcher = controller.dispatcher();
        let refs = (*refs).clone();
        use_effect_with_deps(
            move |_| {
                let attached = attach_observer(&refs, dispatcher.clone());
                if attached.is_none() {
                    log::warn!("IntersectionObserver unavailable, revealing all sections");
                    dispatcher.dispatch(RevealAction::RevealAll);
                }
                move || {
                    if let Some((observer, callback)) = attached {
                        observer.disconnect();
                        drop(callback);
                    }
                }
            },
            (),
        );
    }

    (controller, (*refs).clone())
}

fn attach_observer(
    refs: &SectionRefs,
    dispatcher: UseReducerDispatcher<RevealController>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                Ok(entry) => entry,
                Err(_) => continue,
            };
            let target = entry.target();
            let section = match target.get_attribute(SECTION_ATTR).and_then(|id| id.parse::<Section>().ok()) {
                Some(section) => section,
                None => {
                    log::warn!("observed element without a known {} attribute", SECTION_ATTR);
                    observer.unobserve(&target);
                    continue;
                }
            };
            let ratio = entry.intersection_ratio();
            if RevealState::crosses(ratio) {
                // The latch is one-shot, later reports are noise.
                observer.unobserve(&target);
            }
            dispatcher.dispatch(RevealAction::Observed { section, ratio });
        }
    });

    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(err) => {
            log::error!("failed to create IntersectionObserver: {:?}", err);
            return None;
        }
    };

    let mut observed = 0;
    for section in Section::ALL {
        match refs.get(section).cast::<Element>() {
            Some(element) => {
                observer.observe(&element);
                observed += 1;
            }
            None => log::warn!("section {} is not mounted, it will not be observed", section),
        }
    }
    log::debug!("observing {} sections", observed);

    Some((observer, callback))
}
