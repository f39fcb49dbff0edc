use gloo_timers::callback::Timeout;

use common::{Scheduler, Task};

// setTimeout-backed scheduler; timers are leaked on purpose so they fire even though
// nobody holds the handle
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn defer(&self, delay_ms: u32, task: Task) {
        let _ = Timeout::new(delay_ms, task).forget();
    }
}
