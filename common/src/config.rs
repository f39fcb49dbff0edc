use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

// marquee configuration
//
// every knob has a default matching the stock landing page markup, so the page only
// needs to ship a config block when it deviates from that.  partial blocks are fine,
// missing keys fall back to the defaults below
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct LandingConfig {
    pub scroll: ScrollConfig,
    pub reveal: RevealConfig,
    pub menu: MenuConfig,
    pub entrance: EntranceConfig,
    pub selectors: Selectors,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ScrollConfig {
    // offset (px) past which the navbar switches to its scrolled look
    //
    // the comparison is strict, so sitting exactly on the threshold is still resting
    pub navbar_threshold: f64,

    // background decoration moves at this fraction of the scroll offset
    pub parallax_factor: f64,

    // height of the fixed header, subtracted from smooth-scroll destinations
    pub header_offset: f64,

    // added to the scroll offset before testing which section is active
    pub section_offset: f64,

    // minimum spacing between throttled scroll rules (~60 calls/s)
    pub throttle_ms: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            navbar_threshold: 50.0,
            parallax_factor: 0.2,
            header_offset: 80.0,
            section_offset: 100.0,
            throttle_ms: 16,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct RevealConfig {
    // intersection observer settings for the reveal containers
    pub threshold: f64,
    pub root_margin: String,

    pub grid_stagger_ms: u32,
    pub timeline_stagger_ms: u32,
    pub workflow_stagger_ms: u32,

    // the code sample block has its own, one-shot observer
    pub code_threshold: f64,
    pub code_stagger_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            threshold: 0.1,
            root_margin: String::from("0px 0px -50px 0px"),
            grid_stagger_ms: 150,
            timeline_stagger_ms: 200,
            workflow_stagger_ms: 200,
            code_threshold: 0.3,
            code_stagger_ms: 200,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct MenuConfig {
    // widest viewport (px) that gets the hamburger menu
    //
    // only checked once, at load time
    pub breakpoint: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig { breakpoint: 768.0 }
    }
}

// fixed schedule for elements that animate in after load, regardless of scroll
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct EntranceConfig {
    pub contact_delay_ms: u32,
    pub contact_step_ms: u32,

    // the body gets the loaded class shortly after start-up, for css-driven intro effects
    pub loaded_delay_ms: u32,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        EntranceConfig {
            contact_delay_ms: 2000,
            contact_step_ms: 150,
            loaded_delay_ms: 100,
        }
    }
}

// the markup contract
//
// fields ending in _class(es) are bare class names checked against an element's class
// list, everything else is a css selector handed to the document
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Selectors {
    pub body: String,
    pub navbar: String,
    // the hamburger button is appended here
    pub nav_container: String,
    pub nav_list: String,
    pub nav_links: String,
    pub anchors: String,
    pub sections: String,
    pub parallax: String,

    pub reveal: String,
    pub grid_classes: Vec<String>,
    pub timeline_class: String,
    pub timeline_items: String,
    pub workflow_class: String,
    pub workflow_steps: String,
    pub workflow_arrows: String,

    // the code lines are revealed when this block, not the lines themselves, comes into view
    pub code_trigger: String,
    pub code_lines: String,

    pub cards: String,
    pub logo: String,
    pub table_rows: String,
    pub highlight_class: String,

    pub contact_links: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Selectors {
            body: String::from("body"),
            navbar: String::from(".navbar"),
            nav_container: String::from(".nav-container"),
            nav_list: String::from(".nav-links"),
            nav_links: String::from(".nav-links a"),
            anchors: String::from(".nav-links a[href^=\"#\"]"),
            sections: String::from("section[id]"),
            parallax: String::from(".circuit-bg"),
            reveal: String::from(
                ".problems-grid, .solution-grid, .business-models, .timeline, .workflow-steps, .comparison-table",
            ),
            grid_classes: vec![
                String::from("problems-grid"),
                String::from("solution-grid"),
                String::from("business-models"),
            ],
            timeline_class: String::from("timeline"),
            timeline_items: String::from(".timeline-item"),
            workflow_class: String::from("workflow-steps"),
            workflow_steps: String::from(".workflow-step"),
            workflow_arrows: String::from(".workflow-arrow"),
            code_trigger: String::from("#contact"),
            code_lines: String::from(".code-line"),
            cards: String::from(".problem-card, .solution-card, .business-card, .workflow-step"),
            logo: String::from(".logo-hexagon"),
            table_rows: String::from(".table-row"),
            highlight_class: String::from("highlight"),
            contact_links: String::from(".contact-links a"),
        }
    }
}

impl LandingConfig {
    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn from_json(doc: &str) -> Result<Self> {
        debug!("parsing config block");

        let config = serde_json::from_str(doc)
            .map_err(|err| anyhow::Error::msg(format!("failed to parse config block: {err}")))?;

        debug!("successfully parsed config block");
        Ok(config)
    }
}
