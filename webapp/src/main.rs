use std::rc::Rc;

use anyhow::Result;
use gloo_console::error as console_error;
use tracing::{Level, error, info};

use common::LandingController;

mod bind;
use bind::Controller;

mod dom;
use dom::DomPage;

mod observe;

mod timers;
use timers::TimeoutScheduler;

const CONFIG_BLOCK_ID: &str = "marquee-config";

type Wiring = fn(&Rc<Controller>) -> Result<()>;

// listener groups share nothing but the controller, so a failure in one is reported
// and the rest are still wired
const WIRING: [(&str, Wiring); 6] = [
    ("scroll", bind::scroll),
    ("anchors", bind::anchors),
    ("menu", bind::menu),
    ("hovers", bind::hovers),
    ("reveals", observe::reveals),
    ("code sample", observe::code_sample),
];

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");

    if let Err(err) = start() {
        error!("{err}");
        console_error!(format!("marquee failed to start: {err}"));
    }
}

fn start() -> Result<()> {
    let page = Rc::new(DomPage::new()?);
    let config = page.read_config(CONFIG_BLOCK_ID);

    let controller = Rc::new(LandingController::start(page, Rc::new(TimeoutScheduler), config));

    for (group, wire) in WIRING {
        if let Err(err) = wire(&controller) {
            error!(group, "failed to wire listeners: {err}");
            console_error!(format!("failed to wire {group} listeners: {err}"));
        }
    }

    info!("marquee ready");
    Ok(())
}
