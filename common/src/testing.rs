// host-side stand-ins for the browser: an in-memory document and a manual clock
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use crate::{
    page::Page,
    schedule::{Scheduler, Task},
};

#[derive(Debug, Default)]
struct FakeNode {
    id: Option<String>,
    classes: Vec<String>,
    attrs: HashMap<String, String>,
    parent: Option<usize>,
    children: Vec<usize>,
    offset_top: f64,
    offset_height: f64,
    viewport_top: f64,
    styles: HashMap<String, String>,
    text: String,
}

// nodes are indices into an arena; selectors are not parsed, tests register which
// nodes a selector string resolves to
#[derive(Debug)]
pub struct FakePage {
    nodes: RefCell<Vec<FakeNode>>,
    selectors: RefCell<HashMap<String, Vec<usize>>>,
    scroll_y: Cell<f64>,
    width: Cell<f64>,
    scrolls: RefCell<Vec<f64>>,
    injected: RefCell<Vec<String>>,
}

impl FakePage {
    pub fn new(width: f64) -> Self {
        FakePage {
            nodes: RefCell::new(Vec::new()),
            selectors: RefCell::new(HashMap::new()),
            scroll_y: Cell::new(0.0),
            width: Cell::new(width),
            scrolls: RefCell::new(Vec::new()),
            injected: RefCell::new(Vec::new()),
        }
    }

    pub fn add(&self, parent: Option<usize>) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        let index = nodes.len();

        nodes.push(FakeNode {
            parent,
            ..FakeNode::default()
        });
        if let Some(parent) = parent {
            nodes[parent].children.push(index);
        }

        index
    }

    // add a node and make `selector` resolve to it
    pub fn add_matching(&self, parent: Option<usize>, selector: &str) -> usize {
        let node = self.add(parent);
        self.register(selector, node);
        node
    }

    pub fn register(&self, selector: &str, node: usize) {
        self.selectors
            .borrow_mut()
            .entry(String::from(selector))
            .or_default()
            .push(node);
    }

    pub fn add_class(&self, node: usize, class: &str) {
        self.nodes.borrow_mut()[node].classes.push(String::from(class));
    }

    pub fn set_id(&self, node: usize, id: &str) {
        self.nodes.borrow_mut()[node].id = Some(String::from(id));
    }

    pub fn set_attr(&self, node: usize, name: &str, value: &str) {
        self.nodes.borrow_mut()[node]
            .attrs
            .insert(String::from(name), String::from(value));
    }

    pub fn set_geometry(&self, node: usize, offset_top: f64, offset_height: f64) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[node].offset_top = offset_top;
        nodes[node].offset_height = offset_height;
    }

    pub fn set_viewport_top(&self, node: usize, top: f64) {
        self.nodes.borrow_mut()[node].viewport_top = top;
    }

    pub fn set_scroll_y(&self, scroll_y: f64) {
        self.scroll_y.set(scroll_y);
    }

    pub fn style(&self, node: usize, property: &str) -> Option<String> {
        self.nodes.borrow()[node].styles.get(property).cloned()
    }

    pub fn classes(&self, node: usize) -> Vec<String> {
        self.nodes.borrow()[node].classes.clone()
    }

    pub fn text(&self, node: usize) -> String {
        self.nodes.borrow()[node].text.clone()
    }

    pub fn scroll_requests(&self) -> Vec<f64> {
        self.scrolls.borrow().clone()
    }

    pub fn injected(&self) -> Vec<String> {
        self.injected.borrow().clone()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.borrow().len()
    }

    // an element counts as its own descendant
    fn is_descendant(&self, ancestor: &usize, node: usize) -> bool {
        let nodes = self.nodes.borrow();
        let mut cursor = Some(node);

        while let Some(current) = cursor {
            if current == *ancestor {
                return true;
            }
            cursor = nodes[current].parent;
        }

        false
    }
}

impl Page for FakePage {
    type Node = usize;

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn viewport_width(&self) -> f64 {
        self.width.get()
    }

    fn query(&self, selector: &str) -> Option<usize> {
        self.query_all(selector).first().copied()
    }

    fn query_all(&self, selector: &str) -> Vec<usize> {
        self.selectors
            .borrow()
            .get(selector)
            .cloned()
            .unwrap_or_default()
    }

    fn query_within(&self, node: &usize, selector: &str) -> Vec<usize> {
        self.query_all(selector)
            .into_iter()
            .filter(|candidate| candidate != node && self.is_descendant(node, *candidate))
            .collect()
    }

    fn children(&self, node: &usize) -> Vec<usize> {
        self.nodes.borrow()[*node].children.clone()
    }

    fn element_by_id(&self, id: &str) -> Option<usize> {
        self.nodes
            .borrow()
            .iter()
            .position(|node| node.id.as_deref() == Some(id))
    }

    fn id(&self, node: &usize) -> Option<String> {
        self.nodes.borrow()[*node].id.clone()
    }

    fn attribute(&self, node: &usize, name: &str) -> Option<String> {
        self.nodes.borrow()[*node].attrs.get(name).cloned()
    }

    fn has_class(&self, node: &usize, class: &str) -> bool {
        self.nodes.borrow()[*node].classes.iter().any(|c| c == class)
    }

    fn viewport_top(&self, node: &usize) -> f64 {
        self.nodes.borrow()[*node].viewport_top
    }

    fn offset_top(&self, node: &usize) -> f64 {
        self.nodes.borrow()[*node].offset_top
    }

    fn offset_height(&self, node: &usize) -> f64 {
        self.nodes.borrow()[*node].offset_height
    }

    fn set_style(&self, node: &usize, property: &str, value: &str) {
        self.nodes.borrow_mut()[*node]
            .styles
            .insert(String::from(property), String::from(value));
    }

    fn set_class(&self, node: &usize, class: &str, present: bool) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[*node].classes;

        classes.retain(|c| c != class);
        if present {
            classes.push(String::from(class));
        }
    }

    fn set_text(&self, node: &usize, text: &str) {
        self.nodes.borrow_mut()[*node].text = String::from(text);
    }

    fn inject_style(&self, css: &str) {
        self.injected.borrow_mut().push(String::from(css));
    }

    fn append_button(&self, parent: &usize, class: &str, label: &str) -> Option<usize> {
        let button = self.add(Some(*parent));
        self.add_class(button, class);
        self.set_text(&button, label);
        Some(button)
    }

    fn scroll_to(&self, top: f64) {
        self.scrolls.borrow_mut().push(top);
    }
}

// deterministic clock; tasks only run inside advance()
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u64>,
    seq: Cell<u64>,
    queue: RefCell<Vec<(u64, u64, Task)>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        ManualScheduler::default()
    }

    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    // run everything due within the next `ms`, in due order (ties in submission order)
    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;

        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let position = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _, _))| *due <= target)
                    .min_by_key(|(_, (due, seq, _))| (*due, *seq))
                    .map(|(i, _)| i);

                position.map(|i| queue.remove(i))
            };

            match next {
                Some((due, _, task)) => {
                    self.now.set(due);
                    task();
                }
                None => break,
            }
        }

        self.now.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn defer(&self, delay_ms: u32, task: Task) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);

        self.queue
            .borrow_mut()
            .push((self.now.get() + u64::from(delay_ms), seq, task));
    }
}
