pub mod config;
pub mod controller;
pub mod menu;
pub mod page;
pub mod reveal;
pub mod schedule;
pub mod scroll;
pub mod style;
pub mod throttle;

#[cfg(test)]
pub mod testing;

pub use config::LandingConfig;
pub use controller::{ClickOutcome, LandingController, Observation, ScrollRule};
pub use page::Page;
pub use schedule::{Scheduler, Task};
