use crate::style::NavbarStyle;

pub fn navbar_style(scroll_y: f64, threshold: f64) -> NavbarStyle {
    if scroll_y > threshold {
        NavbarStyle::Scrolled
    } else {
        NavbarStyle::Resting
    }
}

// unclamped; the decoration is clipped by its container
pub fn parallax_offset(scroll_y: f64, factor: f64) -> f64 {
    scroll_y * factor
}

// absolute document offset for a smooth scroll to a target whose top currently sits at
// `viewport_top` relative to the visible area
pub fn anchor_destination(viewport_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    viewport_top + scroll_y - header_offset
}

// "#pricing" -> Some("pricing"); bare "#" and external links are not internal
pub fn internal_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    // half-open: the bottom edge already belongs to whatever comes next
    pub fn contains(&self, position: f64) -> bool {
        self.top <= position && position < self.top + self.height
    }
}

// sections are given in document order and the last one containing the position wins; that
// only matters when spans overlap, since adjacent half-open spans never share a point
pub fn active_section(sections: &[SectionSpan], scroll_y: f64, section_offset: f64) -> Option<&str> {
    let position = scroll_y + section_offset;

    sections
        .iter()
        .filter(|section| section.contains(position))
        .last()
        .map(|section| section.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn span(id: &str, top: f64, height: f64) -> SectionSpan {
        SectionSpan {
            id: String::from(id),
            top,
            height,
        }
    }

    #[test]
    fn navbar_threshold_is_exclusive() {
        assert_eq!(navbar_style(0.0, 50.0), NavbarStyle::Resting);
        assert_eq!(navbar_style(50.0, 50.0), NavbarStyle::Resting);
        assert_eq!(navbar_style(50.5, 50.0), NavbarStyle::Scrolled);
    }

    #[test]
    fn section_under_the_offset_is_active() {
        let sections = [span("a", 0.0, 100.0), span("b", 100.0, 250.0)];

        assert_eq!(active_section(&sections, 150.0, 100.0), Some("b"));
        assert_eq!(active_section(&sections, -50.0, 100.0), Some("a"));
    }

    #[test]
    fn bottom_edge_belongs_to_the_next_section() {
        let sections = [span("a", 0.0, 100.0), span("b", 100.0, 250.0)];

        assert_eq!(active_section(&sections, 0.0, 100.0), Some("b"));
        assert_eq!(active_section(&sections, -1.0, 100.0), Some("a"));
        assert_eq!(active_section(&[span("only", 0.0, 100.0)], 0.0, 100.0), None);
    }

    #[test]
    fn overlapping_sections_prefer_the_later_one() {
        let sections = [span("outer", 0.0, 1000.0), span("inner", 200.0, 100.0)];

        assert_eq!(active_section(&sections, 150.0, 100.0), Some("inner"));
        assert_eq!(active_section(&sections, 300.0, 100.0), Some("outer"));
    }

    #[test]
    fn past_the_last_section_nothing_matches() {
        let sections = [span("a", 0.0, 100.0), span("b", 100.0, 250.0)];

        assert_eq!(active_section(&sections, 250.0, 100.0), None);
        assert_eq!(active_section(&[], 0.0, 100.0), None);
    }

    #[test]
    fn gaps_between_sections_match_nothing() {
        let sections = [span("a", 0.0, 100.0), span("b", 300.0, 100.0)];

        assert_eq!(active_section(&sections, 100.0, 100.0), None);
    }

    #[test]
    fn internal_targets() {
        assert_eq!(internal_target("#features"), Some("features"));
        assert_eq!(internal_target("#"), None);
        assert_eq!(internal_target("https://example.com/#features"), None);
        assert_eq!(internal_target("/pricing"), None);
    }

    #[test]
    fn destination_subtracts_header() {
        assert_eq!(anchor_destination(400.0, 1200.0, 80.0), 1520.0);
        assert_eq!(anchor_destination(-300.0, 1200.0, 80.0), 820.0);
    }

    proptest! {
        #[test]
        fn navbar_state_splits_at_threshold(offset in 0.0f64..100_000.0) {
            let expected = if offset > 50.0 { NavbarStyle::Scrolled } else { NavbarStyle::Resting };
            prop_assert_eq!(navbar_style(offset, 50.0), expected);
        }

        #[test]
        fn parallax_is_linear(offset in 0.0f64..1.0e7) {
            prop_assert!((parallax_offset(offset, 0.2) - 0.2 * offset).abs() < 1e-9);
        }
    }
}
