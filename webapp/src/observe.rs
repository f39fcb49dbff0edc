use std::rc::Rc;

use anyhow::Result;
use js_sys::Array;
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use common::Observation;

use crate::{bind::Controller, dom::js_err};

// build an observer that hands every intersecting target to `on_visible`
fn observer<F>(threshold: f64, root_margin: Option<&str>, mut on_visible: F) -> Result<IntersectionObserver>
where
    F: FnMut(&HtmlElement, &IntersectionObserver) + 'static,
{
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };

                if !entry.is_intersecting() {
                    continue;
                }

                if let Ok(target) = entry.target().dyn_into::<HtmlElement>() {
                    on_visible(&target, &observer);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(js_err)?;

    // the observer outlives this function and keeps calling back
    callback.forget();
    Ok(observer)
}

pub fn reveals(controller: &Rc<Controller>) -> Result<()> {
    let targets = controller.reveal_targets();
    if targets.is_empty() {
        return Ok(());
    }

    let config = &controller.config().reveal;
    let handler = {
        let controller = controller.clone();
        move |target: &HtmlElement, _: &IntersectionObserver| controller.on_reveal_intersect(target)
    };

    let observer = observer(config.threshold, Some(&config.root_margin), handler)?;
    for target in &targets {
        observer.observe(target);
    }

    debug!(targets = targets.len(), "observing reveal targets");
    Ok(())
}

// the code lines animate once, when the block they live in comes into view
pub fn code_sample(controller: &Rc<Controller>) -> Result<()> {
    let Some(trigger) = controller.code_trigger() else {
        return Ok(());
    };

    let handler = {
        let controller = controller.clone();
        move |target: &HtmlElement, observer: &IntersectionObserver| {
            if controller.on_code_sample_intersect() == Observation::Unobserve {
                observer.unobserve(target);
            }
        }
    };

    let observer = observer(controller.config().reveal.code_threshold, None, handler)?;
    observer.observe(&trigger);

    Ok(())
}
