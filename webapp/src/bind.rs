use std::rc::Rc;

use anyhow::Result;
use tracing::debug;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Event, EventTarget};

use common::LandingController;

use crate::dom::{DomPage, js_err};

pub type Controller = LandingController<DomPage>;

// listeners stay attached for the lifetime of the page, so the closures are leaked
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);

    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_err)?;

    closure.forget();
    Ok(())
}

pub fn scroll(controller: &Rc<Controller>) -> Result<()> {
    let names: Vec<&str> = controller.scroll_rules().iter().map(|rule| rule.name).collect();
    debug!(?names, "binding scroll rules");

    let handler = {
        let controller = controller.clone();
        move |_: Event| {
            let now = controller.page().now();
            controller.on_scroll(now);
        }
    };

    listen(controller.page().window(), "scroll", handler)
}

pub fn anchors(controller: &Rc<Controller>) -> Result<()> {
    for anchor in controller.anchors() {
        let controller = controller.clone();
        let target = anchor.clone();

        listen(&target, "click", move |event: Event| {
            if controller.on_anchor_click(&anchor).prevent_default {
                event.prevent_default();
            }
        })?;
    }

    Ok(())
}

// a no-op on wide viewports, where the controller never created the button
pub fn menu(controller: &Rc<Controller>) -> Result<()> {
    let Some(button) = controller.menu_button().cloned() else {
        return Ok(());
    };

    {
        let controller = controller.clone();
        listen(&button, "click", move |_: Event| {
            controller.on_menu_button();
        })?;
    }

    for link in controller.nav_links() {
        let controller = controller.clone();
        listen(&link, "click", move |_: Event| {
            controller.on_nav_link_click();
        })?;
    }

    Ok(())
}

fn hover<F>(target: &EventTarget, on_hover: F) -> Result<()>
where
    F: Fn(bool) + 'static,
{
    let on_hover = Rc::new(on_hover);

    {
        let on_hover = on_hover.clone();
        listen(target, "mouseenter", move |_: Event| on_hover(true))?;
    }
    listen(target, "mouseleave", move |_: Event| on_hover(false))
}

pub fn hovers(controller: &Rc<Controller>) -> Result<()> {
    for (index, card) in controller.cards().into_iter().enumerate() {
        let controller = controller.clone();
        hover(&card, move |entered| controller.on_card_hover(index, entered))?;
    }

    if let Some(logo) = controller.logo() {
        let controller = controller.clone();
        hover(&logo, move |entered| controller.on_logo_hover(entered))?;
    }

    for row in controller.table_rows() {
        let controller = controller.clone();
        let target = row.clone();
        hover(&target, move |entered| controller.on_row_hover(&row, entered))?;
    }

    Ok(())
}
