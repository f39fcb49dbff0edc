use crate::style::StyleState;

// measurement and mutation provider
//
// the controller never touches the dom directly.  the browser implementation lives in
// the webapp crate, tests use testing::FakePage.  lookups return Option/Vec because a
// missing element only ever disables one cosmetic effect
pub trait Page {
    // equality is element identity
    type Node: Clone + PartialEq + 'static;

    // window measurements
    fn scroll_y(&self) -> f64;
    fn viewport_width(&self) -> f64;

    // lookups
    fn query(&self, selector: &str) -> Option<Self::Node>;
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    fn query_within(&self, node: &Self::Node, selector: &str) -> Vec<Self::Node>;
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    // element properties
    fn id(&self, node: &Self::Node) -> Option<String>;
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    // geometry; viewport_top is relative to the visible area, offset_* to the document
    fn viewport_top(&self, node: &Self::Node) -> f64;
    fn offset_top(&self, node: &Self::Node) -> f64;
    fn offset_height(&self, node: &Self::Node) -> f64;

    // mutation
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);
    fn set_class(&self, node: &Self::Node, class: &str, present: bool);
    fn set_text(&self, node: &Self::Node, text: &str);
    fn inject_style(&self, css: &str);
    fn append_button(&self, parent: &Self::Node, class: &str, label: &str) -> Option<Self::Node>;

    // smooth scroll to an absolute document offset
    fn scroll_to(&self, top: f64);

    fn apply(&self, node: &Self::Node, state: &impl StyleState) {
        for (property, value) in state.declarations() {
            self.set_style(node, property, &value);
        }
    }
}
