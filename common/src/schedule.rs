use std::rc::Rc;

use crate::style::RevealStyle;

pub type Task = Box<dyn FnOnce()>;

// deferred work
//
// fire-and-forget: there is no handle and no cancellation, a task runs against whatever
// element it captured even if that element has since been hidden or detached
pub trait Scheduler {
    fn defer(&self, delay_ms: u32, task: Task);
}

// one step of a staggered sequence: at `at_ms` after the trigger, show `node` with `style`
#[derive(Clone, Debug, PartialEq)]
pub struct Cue<N> {
    pub at_ms: u32,
    pub node: N,
    pub style: RevealStyle,
}

impl<N> Cue<N> {
    pub fn new(at_ms: u32, node: N, style: RevealStyle) -> Self {
        Cue { at_ms, node, style }
    }
}

// renders a cue when its timer fires; the controller routes cards through their own state
pub type Render<N> = Rc<dyn Fn(&N, &RevealStyle)>;

// delay for the element at `position` in a sequence with a fixed step
//
// position is fractional so arrows can land halfway between two steps
pub fn stagger(base_ms: u32, step_ms: u32, position: f64) -> u32 {
    let offset = (position.max(0.0) * f64::from(step_ms)).round() as u32;
    base_ms.saturating_add(offset)
}

// hand every cue to the scheduler; each one is its own timer
pub fn play<N: 'static>(scheduler: &dyn Scheduler, cues: Vec<Cue<N>>, render: &Render<N>) {
    for cue in cues {
        let render = render.clone();

        scheduler.defer(cue.at_ms, Box::new(move || render(&cue.node, &cue.style)));
    }
}
