use anyhow::Result;
use gloo_console::error as console_error;
use tracing::{Level, debug, error, instrument};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions, Window};

use common::{LandingConfig, Page};

pub fn js_err(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

// dom calls that can only fail on bad input (usually a selector typo in the config
// block) are logged and treated as "nothing there"
fn logged<T>(result: Result<T, JsValue>, what: &str) -> Option<T> {
    result
        .map_err(|err| console_error!(format!("{what} failed: {err:?}")))
        .ok()
}

fn html_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

// the live document, as seen by the controller
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::Error::msg("window has no document"))?;

        Ok(DomPage { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    // milliseconds since navigation start, used as the throttle clock
    pub fn now(&self) -> f64 {
        self.window
            .performance()
            .map(|performance| performance.now())
            .unwrap_or_default()
    }

    // optional json block in the page, e.g.
    //
    //   <script type="application/json" id="marquee-config">{ "menu": { "breakpoint": 900 } }</script>
    //
    // a broken block is reported and ignored rather than disabling the page
    #[instrument(level=Level::DEBUG, skip(self))]
    pub fn read_config(&self, block_id: &str) -> LandingConfig {
        let Some(block) = self.document.get_element_by_id(block_id) else {
            debug!("no config block, using defaults");
            return LandingConfig::default();
        };

        let doc = block.text_content().unwrap_or_default();

        LandingConfig::from_json(&doc).unwrap_or_else(|err| {
            error!("{err}");
            console_error!(format!("{err}, falling back to defaults"));
            LandingConfig::default()
        })
    }
}

impl Page for DomPage {
    type Node = HtmlElement;

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    // an unreadable width counts as wide, which leaves the desktop navigation alone
    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(f64::INFINITY)
    }

    fn query(&self, selector: &str) -> Option<HtmlElement> {
        logged(self.document.query_selector(selector), selector)
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    }

    fn query_all(&self, selector: &str) -> Vec<HtmlElement> {
        logged(self.document.query_selector_all(selector), selector)
            .map(html_elements)
            .unwrap_or_default()
    }

    fn query_within(&self, node: &HtmlElement, selector: &str) -> Vec<HtmlElement> {
        logged(node.query_selector_all(selector), selector)
            .map(html_elements)
            .unwrap_or_default()
    }

    fn children(&self, node: &HtmlElement) -> Vec<HtmlElement> {
        let children = node.children();

        (0..children.length())
            .filter_map(|i| children.item(i))
            .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    }

    fn id(&self, node: &HtmlElement) -> Option<String> {
        let id = node.id();
        (!id.is_empty()).then_some(id)
    }

    fn attribute(&self, node: &HtmlElement, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn has_class(&self, node: &HtmlElement, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn viewport_top(&self, node: &HtmlElement) -> f64 {
        node.get_bounding_client_rect().top()
    }

    fn offset_top(&self, node: &HtmlElement) -> f64 {
        f64::from(node.offset_top())
    }

    fn offset_height(&self, node: &HtmlElement) -> f64 {
        f64::from(node.offset_height())
    }

    fn set_style(&self, node: &HtmlElement, property: &str, value: &str) {
        logged(node.style().set_property(property, value), property);
    }

    fn set_class(&self, node: &HtmlElement, class: &str, present: bool) {
        logged(node.class_list().toggle_with_force(class, present), class);
    }

    fn set_text(&self, node: &HtmlElement, text: &str) {
        node.set_text_content(Some(text));
    }

    fn inject_style(&self, css: &str) {
        let Some(style) = logged(self.document.create_element("style"), "create style") else {
            return;
        };
        style.set_text_content(Some(css));

        match self.document.head() {
            Some(head) => {
                logged(head.append_child(&style), "inject style");
            }
            None => console_error!("document has no head, skipping style rule"),
        }
    }

    fn append_button(&self, parent: &HtmlElement, class: &str, label: &str) -> Option<HtmlElement> {
        let button = logged(self.document.create_element("button"), "create button")?;

        button.set_class_name(class);
        button.set_text_content(Some(label));
        logged(button.set_attribute("aria-label", "Toggle navigation"), "label button");
        logged(parent.append_child(&button), "append button")?;

        button.dyn_into::<HtmlElement>().ok()
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);

        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
