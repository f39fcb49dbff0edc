// rate limiting gate
//
// the first call opens a window of `limit_ms`; anything arriving while the window is
// open is dropped rather than queued.  time is passed in by the caller (the browser side
// uses performance.now()) so the gate never needs a timer of its own
#[derive(Clone, Debug)]
pub struct Throttle {
    limit_ms: f64,
    opened_at: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: u32) -> Self {
        Throttle {
            limit_ms: f64::from(limit_ms),
            opened_at: None,
        }
    }

    // true if the wrapped action may run at `now_ms`
    pub fn admit(&mut self, now_ms: f64) -> bool {
        match self.opened_at {
            Some(opened) if now_ms - opened < self.limit_ms => false,
            _ => {
                self.opened_at = Some(now_ms);
                true
            }
        }
    }
}
