use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use tracing::{Level, debug, instrument};

use crate::{
    config::LandingConfig,
    menu::{MenuState, MobileMenu, menu_enabled},
    page::Page,
    reveal::{Group, RevealKind, code_line_cues, container_cue, group_cues},
    schedule::{Cue, Render, Scheduler, play, stagger},
    scroll::{SectionSpan, active_section, anchor_destination, internal_target, navbar_style, parallax_offset},
    style::{
        ACTIVE_CLASS, ACTIVE_LINK_RULE, CardStyle, LOADED_CLASS, LogoStyle, MENU_BUTTON_CLASS, MENU_BUTTON_RULE,
        Motion, ParallaxStyle, RevealStyle, RowStyle,
    },
    throttle::Throttle,
};

// one entry in the scroll fan-out
//
// the gate is the rule's predicate: throttled rules own a private Throttle, the rest
// run on every native scroll event
pub struct ScrollRule<P: Page> {
    pub name: &'static str,
    gate: Option<RefCell<Throttle>>,
    effect: fn(&LandingController<P>),
}

impl<P: Page> ScrollRule<P> {
    pub fn throttled(name: &'static str, limit_ms: u32, effect: fn(&LandingController<P>)) -> Self {
        ScrollRule {
            name,
            gate: Some(RefCell::new(Throttle::new(limit_ms))),
            effect,
        }
    }

    pub fn every_event(name: &'static str, effect: fn(&LandingController<P>)) -> Self {
        ScrollRule {
            name,
            gate: None,
            effect,
        }
    }

    fn admits(&self, now_ms: f64) -> bool {
        match &self.gate {
            Some(gate) => gate.borrow_mut().admit(now_ms),
            None => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickOutcome {
    pub prevent_default: bool,
    pub scrolled_to: Option<f64>,
}

// what the observer should do with a target after its callback
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Observation {
    Keep,
    Unobserve,
}

struct MenuBinding<N> {
    menu: RefCell<MobileMenu>,
    button: N,
    list: N,
}

// hoverable cards and their current state, shared with the reveal renderer
type Cards<N> = Rc<Vec<(N, Cell<CardStyle>)>>;

// the presentation controller
//
// built once on page load.  construction performs all of the one-time work (injected
// rules, hidden reveal states, the mobile menu, entrance cues); afterwards the webapp
// forwards browser events to the on_* methods
pub struct LandingController<P: Page> {
    page: Rc<P>,
    scheduler: Rc<dyn Scheduler>,
    config: LandingConfig,
    scroll_rules: Vec<ScrollRule<P>>,
    menu: Option<MenuBinding<P::Node>>,
    cards: Cards<P::Node>,
    render: Render<P::Node>,
    code_revealed: Cell<bool>,
}

impl<P: Page + 'static> LandingController<P> {
    #[instrument(level=Level::DEBUG, skip_all)]
    pub fn start(page: Rc<P>, scheduler: Rc<dyn Scheduler>, config: LandingConfig) -> Self {
        let throttle_ms = config.scroll.throttle_ms;

        // order matters: handlers on the same event run in this order
        let scroll_rules = vec![
            ScrollRule::throttled("navbar", throttle_ms, Self::style_navbar),
            ScrollRule::throttled("active-section", throttle_ms, Self::highlight_active_section),
            ScrollRule::every_event("parallax", Self::move_parallax),
        ];

        page.inject_style(ACTIVE_LINK_RULE);

        // cards nothing hides stay visible, so they start out revealed
        let cards: Cards<P::Node> = Rc::new(
            page.query_all(&config.selectors.cards)
                .into_iter()
                .map(|card| {
                    let state = CardStyle {
                        motion: Motion::Rise,
                        revealed: true,
                        lifted: false,
                    };

                    (card, Cell::new(state))
                })
                .collect(),
        );

        let render = Self::renderer(page.clone(), cards.clone());

        let mut controller = LandingController {
            page,
            scheduler,
            config,
            scroll_rules,
            menu: None,
            cards,
            render,
            code_revealed: Cell::new(false),
        };

        controller.menu = controller.install_menu();
        controller.hide_reveal_targets();
        controller.play_entrances();

        debug!(
            cards = controller.cards.len(),
            menu = controller.menu.is_some(),
            "landing controller started"
        );
        controller
    }

    // cue renderer: cards go through their own state so a reveal keeps a hover lift,
    // everything else takes the reveal style as is
    fn renderer(page: Rc<P>, cards: Cards<P::Node>) -> Render<P::Node> {
        Rc::new(move |node: &P::Node, style: &RevealStyle| {
            match cards.iter().find(|(card, _)| card == node) {
                Some((card, state)) => {
                    let next = CardStyle {
                        revealed: style.shown,
                        ..state.get()
                    };

                    state.set(next);
                    page.apply(card, &next);
                }
                None => page.apply(node, style),
            }
        })
    }

    pub fn page(&self) -> &Rc<P> {
        &self.page
    }

    pub fn config(&self) -> &LandingConfig {
        &self.config
    }

    pub fn scroll_rules(&self) -> &[ScrollRule<P>] {
        &self.scroll_rules
    }

    // run every scroll rule whose gate admits `now_ms`, returning the names that ran
    pub fn on_scroll(&self, now_ms: f64) -> Vec<&'static str> {
        let mut fired = Vec::new();

        for rule in &self.scroll_rules {
            if rule.admits(now_ms) {
                (rule.effect)(self);
                fired.push(rule.name);
            }
        }

        fired
    }

    fn style_navbar(&self) {
        let Some(navbar) = self.page.query(&self.config.selectors.navbar) else {
            return;
        };

        let state = navbar_style(self.page.scroll_y(), self.config.scroll.navbar_threshold);
        self.page.apply(&navbar, &state);
    }

    fn move_parallax(&self) {
        let Some(decoration) = self.page.query(&self.config.selectors.parallax) else {
            return;
        };

        let offset = parallax_offset(self.page.scroll_y(), self.config.scroll.parallax_factor);
        self.page.apply(&decoration, &ParallaxStyle { offset });
    }

    fn highlight_active_section(&self) {
        let page = &self.page;

        let sections: Vec<SectionSpan> = page
            .query_all(&self.config.selectors.sections)
            .iter()
            .filter_map(|section| {
                let id = page.id(section).filter(|id| !id.is_empty())?;

                Some(SectionSpan {
                    id,
                    top: page.offset_top(section),
                    height: page.offset_height(section),
                })
            })
            .collect();

        let active = active_section(&sections, page.scroll_y(), self.config.scroll.section_offset);

        // clear everything first so a miss leaves no marker behind, then mark at most one
        let mut marked = false;
        for link in page.query_all(&self.config.selectors.nav_links) {
            let href = page.attribute(&link, "href");
            let target = href.as_deref().and_then(internal_target);

            let is_active = !marked && active.is_some() && target == active;
            marked |= is_active;

            page.set_class(&link, ACTIVE_CLASS, is_active);
        }
    }

    // smooth scroll for in-page anchors
    //
    // internal links always suppress the native jump, even when the target is missing
    pub fn on_anchor_click(&self, anchor: &P::Node) -> ClickOutcome {
        let href = self.page.attribute(anchor, "href");

        let Some(target_id) = href.as_deref().and_then(internal_target) else {
            return ClickOutcome {
                prevent_default: false,
                scrolled_to: None,
            };
        };

        let scrolled_to = self.page.element_by_id(target_id).map(|target| {
            let destination = anchor_destination(
                self.page.viewport_top(&target),
                self.page.scroll_y(),
                self.config.scroll.header_offset,
            );

            self.page.scroll_to(destination);
            destination
        });

        if scrolled_to.is_none() {
            debug!(target_id, "anchor target missing, ignoring click");
        }

        ClickOutcome {
            prevent_default: true,
            scrolled_to,
        }
    }

    fn install_menu(&self) -> Option<MenuBinding<P::Node>> {
        let width = self.page.viewport_width();

        if !menu_enabled(width, self.config.menu.breakpoint) {
            return None;
        }

        let container = self.page.query(&self.config.selectors.nav_container)?;
        let list = self.page.query(&self.config.selectors.nav_list)?;

        self.page.inject_style(MENU_BUTTON_RULE);

        let state = MenuState::Closed;
        let button = self.page.append_button(&container, MENU_BUTTON_CLASS, state.glyph())?;
        self.page.apply(&list, &state.panel());

        debug!(width, "mobile menu installed");
        Some(MenuBinding {
            menu: RefCell::new(MobileMenu::new()),
            button,
            list,
        })
    }

    pub fn menu_button(&self) -> Option<&P::Node> {
        self.menu.as_ref().map(|binding| &binding.button)
    }

    pub fn menu_state(&self) -> Option<MenuState> {
        self.menu.as_ref().map(|binding| binding.menu.borrow().state())
    }

    pub fn on_menu_button(&self) -> Option<MenuState> {
        let binding = self.menu.as_ref()?;

        let state = binding.menu.borrow_mut().toggle();
        self.render_menu(binding, state);

        Some(state)
    }

    // any link inside the panel closes it, whatever state it was in
    pub fn on_nav_link_click(&self) -> Option<MenuState> {
        let binding = self.menu.as_ref()?;

        let state = binding.menu.borrow_mut().close();
        self.render_menu(binding, state);

        Some(state)
    }

    fn render_menu(&self, binding: &MenuBinding<P::Node>, state: MenuState) {
        debug!(?state, "mobile menu");

        self.page.set_text(&binding.button, state.glyph());
        self.page.apply(&binding.list, &state.panel());
    }

    pub fn reveal_targets(&self) -> Vec<P::Node> {
        self.page.query_all(&self.config.selectors.reveal)
    }

    // the block whose visibility starts the code animation; absent when there are no lines
    pub fn code_trigger(&self) -> Option<P::Node> {
        if self.code_lines().is_empty() {
            return None;
        }

        self.page.query(&self.config.selectors.code_trigger)
    }

    fn code_lines(&self) -> Vec<P::Node> {
        self.page.query_all(&self.config.selectors.code_lines)
    }

    fn card(&self, node: &P::Node) -> Option<&Cell<CardStyle>> {
        self.cards
            .iter()
            .find(|(card, _)| card == node)
            .map(|(_, state)| state)
    }

    fn classify(&self, container: &P::Node) -> RevealKind {
        let selectors = &self.config.selectors;

        if self.page.has_class(container, &selectors.workflow_class) {
            RevealKind::Workflow
        } else if self.page.has_class(container, &selectors.timeline_class) {
            RevealKind::Timeline
        } else if selectors
            .grid_classes
            .iter()
            .any(|class| self.page.has_class(container, class))
        {
            RevealKind::Grid
        } else {
            RevealKind::Plain
        }
    }

    fn group(&self, container: &P::Node) -> (RevealKind, Group<P::Node>) {
        let selectors = &self.config.selectors;
        let kind = self.classify(container);

        let group = match kind {
            RevealKind::Plain => Group::Plain,
            RevealKind::Grid => Group::Grid(self.page.children(container)),
            RevealKind::Timeline => Group::Timeline(self.page.query_within(container, &selectors.timeline_items)),
            RevealKind::Workflow => Group::Workflow {
                steps: self.page.query_within(container, &selectors.workflow_steps),
                arrows: self.page.query_within(container, &selectors.workflow_arrows),
            },
        };

        (kind, group)
    }

    // the hidden pose is written inline; a card also records it so hover leaves it alone
    fn hide(&self, node: &P::Node, motion: Motion) {
        self.page.apply(node, &RevealStyle::hidden(motion));

        if let Some(state) = self.card(node) {
            state.set(CardStyle {
                motion,
                revealed: false,
                lifted: false,
            });
        }
    }

    // every reveal target and the animated parts of the page start out hidden
    //
    // timeline sides alternate by position among all timeline items, not per container
    fn hide_reveal_targets(&self) {
        let selectors = &self.config.selectors;

        for container in self.reveal_targets() {
            self.hide(&container, Motion::Section);

            if self.classify(&container) == RevealKind::Grid {
                for item in self.page.children(&container) {
                    self.hide(&item, Motion::Rise);
                }
            }
        }

        for (i, item) in self.page.query_all(&selectors.timeline_items).iter().enumerate() {
            self.hide(item, Motion::timeline(i));
        }
        for step in self.page.query_all(&selectors.workflow_steps) {
            self.hide(&step, Motion::Grow);
        }
        for arrow in self.page.query_all(&selectors.workflow_arrows) {
            self.hide(&arrow, Motion::Stretch);
        }
        for line in self.code_lines() {
            self.hide(&line, Motion::Nudge);
        }
    }

    // the observer keeps watching after a reveal; repeat callbacks replay the same end
    // state, which changes nothing on screen
    #[instrument(level=Level::DEBUG, skip_all)]
    pub fn on_reveal_intersect(&self, container: &P::Node) {
        let (kind, group) = self.group(container);

        let mut cues = vec![container_cue(container.clone())];
        cues.extend(group_cues(&group, &self.config.reveal));

        debug!(?kind, cues = cues.len(), "revealing container");
        play(self.scheduler.as_ref(), cues, &self.render);
    }

    // every code line on the page, once; the observer drops the trigger afterwards
    #[instrument(level=Level::DEBUG, skip_all)]
    pub fn on_code_sample_intersect(&self) -> Observation {
        if self.code_revealed.replace(true) {
            return Observation::Unobserve;
        }

        let lines = self.code_lines();

        debug!(lines = lines.len(), "revealing code sample");
        play(self.scheduler.as_ref(), code_line_cues(&lines, &self.config.reveal), &self.render);

        Observation::Unobserve
    }

    // load-time schedule: contact links enter one by one, the body is marked loaded
    fn play_entrances(&self) {
        let entrance = &self.config.entrance;

        let mut cues = Vec::new();
        for (i, link) in self.page.query_all(&self.config.selectors.contact_links).into_iter().enumerate() {
            self.hide(&link, Motion::Enter);

            let at_ms = stagger(entrance.contact_delay_ms, entrance.contact_step_ms, i as f64);
            cues.push(Cue::new(at_ms, link, RevealStyle::shown(Motion::Enter)));
        }
        play(self.scheduler.as_ref(), cues, &self.render);

        if let Some(body) = self.page.query(&self.config.selectors.body) {
            let page = self.page.clone();

            self.scheduler.defer(
                entrance.loaded_delay_ms,
                Box::new(move || page.set_class(&body, LOADED_CLASS, true)),
            );
        }
    }

    pub fn cards(&self) -> Vec<P::Node> {
        self.cards.iter().map(|(card, _)| card.clone()).collect()
    }

    // a card that is still hidden only records the pointer; the reveal picks it up
    pub fn on_card_hover(&self, index: usize, entered: bool) {
        let Some((card, state)) = self.cards.get(index) else {
            return;
        };

        let next = CardStyle {
            lifted: entered,
            ..state.get()
        };

        state.set(next);
        self.page.apply(card, &next);
    }

    pub fn logo(&self) -> Option<P::Node> {
        self.page.query(&self.config.selectors.logo)
    }

    pub fn on_logo_hover(&self, entered: bool) {
        if let Some(logo) = self.logo() {
            self.page.apply(&logo, &LogoStyle { hovered: entered });
        }
    }

    pub fn table_rows(&self) -> Vec<P::Node> {
        self.page.query_all(&self.config.selectors.table_rows)
    }

    // highlighted rows keep their emphasis, hover never touches them
    pub fn on_row_hover(&self, row: &P::Node, entered: bool) {
        if self.page.has_class(row, &self.config.selectors.highlight_class) {
            return;
        }

        self.page.apply(row, &RowStyle { hovered: entered });
    }

    pub fn anchors(&self) -> Vec<P::Node> {
        self.page.query_all(&self.config.selectors.anchors)
    }

    pub fn nav_links(&self) -> Vec<P::Node> {
        self.page.query_all(&self.config.selectors.nav_links)
    }
}
