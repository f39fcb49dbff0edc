use constcat::concat;

// typed inline style states
//
// nothing in the controller edits an existing style string.  each state below renders
// the full set of properties it owns, so applying a state is the same no matter what
// the element looked like beforehand
pub type Declarations = Vec<(&'static str, String)>;

pub trait StyleState {
    fn declarations(&self) -> Declarations;
}

pub const ACCENT: &str = "#60a5fa";
pub const ACTIVE_CLASS: &str = "active";
pub const LOADED_CLASS: &str = "loaded";
pub const MENU_BUTTON_CLASS: &str = "mobile-menu-btn";

// injected once at start-up; the active marker is a class, so its look has to live in a rule
pub const ACTIVE_LINK_RULE: &str = concat!(
    ".nav-links a.",
    ACTIVE_CLASS,
    " { color: ",
    ACCENT,
    "; }\n.nav-links a.",
    ACTIVE_CLASS,
    "::after { width: 100%; }\n"
);

pub const MENU_BUTTON_RULE: &str = concat!(
    ".",
    MENU_BUTTON_CLASS,
    " { background: none; border: none; color: white; font-size: 1.5rem; cursor: pointer; display: block; }\n"
);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavbarStyle {
    Resting,
    Scrolled,
}

impl StyleState for NavbarStyle {
    fn declarations(&self) -> Declarations {
        let (background, border) = match self {
            NavbarStyle::Resting => ("rgba(10, 20, 40, 0.95)", "1px solid rgba(59, 130, 246, 0.2)"),
            NavbarStyle::Scrolled => ("rgba(10, 20, 40, 0.98)", "1px solid rgba(59, 130, 246, 0.3)"),
        };

        vec![
            ("background", String::from(background)),
            ("border-bottom", String::from(border)),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxStyle {
    pub offset: f64,
}

impl StyleState for ParallaxStyle {
    fn declarations(&self) -> Declarations {
        vec![("transform", format!("translateY({}px)", self.offset))]
    }
}

// how a hidden element sits before it is revealed
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    // reveal containers, below their final position
    Section,
    // grid cards
    Rise,
    // timeline items alternate sides
    SlideLeft,
    SlideRight,
    // workflow steps rise and grow
    Grow,
    // workflow arrows stretch out from the left
    Stretch,
    // code lines
    Nudge,
    // contact links
    Enter,
}

impl Motion {
    fn hidden_transform(&self) -> &'static str {
        match self {
            Motion::Section | Motion::Rise => "translateY(30px)",
            Motion::SlideLeft => "translateX(-50px)",
            Motion::SlideRight => "translateX(50px)",
            Motion::Grow => "translateY(30px) scale(0.9)",
            Motion::Stretch => "scaleX(0)",
            Motion::Nudge => "translateX(-10px)",
            Motion::Enter => "translateX(-20px)",
        }
    }

    fn shown_transform(&self) -> &'static str {
        match self {
            Motion::Section | Motion::Rise => "translateY(0)",
            Motion::SlideLeft | Motion::SlideRight | Motion::Nudge | Motion::Enter => "translateX(0)",
            Motion::Grow => "translateY(0) scale(1)",
            Motion::Stretch => "scaleX(1)",
        }
    }

    // only the motions used by hoverable cards have a lifted pose
    fn lifted_transform(&self) -> &'static str {
        match self {
            Motion::Grow => "translateY(-10px) scale(1)",
            _ => "translateY(-10px)",
        }
    }

    fn transition(&self) -> &'static str {
        match self {
            Motion::Section => "all 0.8s ease-out",
            Motion::Rise | Motion::SlideLeft | Motion::SlideRight | Motion::Grow => "all 0.6s ease-out",
            Motion::Stretch | Motion::Nudge | Motion::Enter => "all 0.4s ease-out",
        }
    }

    // alternating sides, by position among all timeline items on the page
    pub fn timeline(index: usize) -> Motion {
        if index % 2 == 0 {
            Motion::SlideLeft
        } else {
            Motion::SlideRight
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub motion: Motion,
    pub shown: bool,
}

impl RevealStyle {
    pub fn hidden(motion: Motion) -> Self {
        RevealStyle {
            motion,
            shown: false,
        }
    }

    pub fn shown(motion: Motion) -> Self {
        RevealStyle { motion, shown: true }
    }
}

impl StyleState for RevealStyle {
    fn declarations(&self) -> Declarations {
        let (opacity, transform) = if self.shown {
            ("1", self.motion.shown_transform())
        } else {
            ("0", self.motion.hidden_transform())
        };

        let mut decls = vec![
            ("opacity", String::from(opacity)),
            ("transform", String::from(transform)),
            ("transition", String::from(self.motion.transition())),
        ];

        if self.motion == Motion::Stretch {
            decls.push(("transform-origin", String::from("left center")));
        }

        decls
    }
}

// hoverable card: the reveal and the hover both feed one transform
//
// a card that has not been revealed yet keeps its hidden pose whatever the pointer does,
// and a reveal landing while the pointer is over the card keeps the lift
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardStyle {
    pub motion: Motion,
    pub revealed: bool,
    pub lifted: bool,
}

impl StyleState for CardStyle {
    fn declarations(&self) -> Declarations {
        if !self.revealed {
            return vec![
                ("opacity", String::from("0")),
                ("transform", String::from(self.motion.hidden_transform())),
            ];
        }

        let transform = if self.lifted {
            self.motion.lifted_transform()
        } else {
            self.motion.shown_transform()
        };

        vec![
            ("opacity", String::from("1")),
            ("transform", String::from(transform)),
        ]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LogoStyle {
    pub hovered: bool,
}

impl StyleState for LogoStyle {
    fn declarations(&self) -> Declarations {
        let duration = if self.hovered { "0.5s" } else { "2s" };

        vec![("animation-duration", String::from(duration))]
    }
}

// rows flagged as highlighted never receive this state
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RowStyle {
    pub hovered: bool,
}

impl StyleState for RowStyle {
    fn declarations(&self) -> Declarations {
        let background = if self.hovered {
            "rgba(59, 130, 246, 0.08)"
        } else {
            "transparent"
        };

        vec![("background", String::from(background))]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuPanelStyle {
    pub open: bool,
}

impl StyleState for MenuPanelStyle {
    fn declarations(&self) -> Declarations {
        if !self.open {
            return vec![("display", String::from("none"))];
        }

        vec![
            ("display", String::from("flex")),
            ("flex-direction", String::from("column")),
            ("position", String::from("absolute")),
            ("top", String::from("70px")),
            ("left", String::from("0")),
            ("width", String::from("100%")),
            ("background", String::from("rgba(10, 20, 40, 0.98)")),
            ("padding", String::from("20px")),
            ("box-shadow", String::from("0 5px 15px rgba(0,0,0,0.3)")),
        ]
    }
}
