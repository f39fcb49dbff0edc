use crate::style::MenuPanelStyle;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn glyph(&self) -> &'static str {
        match self {
            MenuState::Closed => "☰",
            MenuState::Open => "✕",
        }
    }

    pub fn panel(&self) -> MenuPanelStyle {
        MenuPanelStyle {
            open: *self == MenuState::Open,
        }
    }
}

// the hamburger menu only exists on narrow viewports, and the decision is made once
pub fn menu_enabled(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width <= breakpoint
}

// two-state machine: the button flips it, a link inside the panel always closes it
#[derive(Debug, Default)]
pub struct MobileMenu {
    state: MenuState,
}

impl MobileMenu {
    pub fn new() -> Self {
        MobileMenu::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn toggle(&mut self) -> MenuState {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        self.state
    }

    pub fn close(&mut self) -> MenuState {
        self.state = MenuState::Closed;
        self.state
    }
}
