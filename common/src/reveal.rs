use crate::{
    config::RevealConfig,
    schedule::{Cue, stagger},
    style::{Motion, RevealStyle},
};

// which reveal sequence a container gets, decided from its class list
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealKind {
    // only the container fades in (e.g. the comparison table)
    Plain,
    // immediate children rise in one after another
    Grid,
    // chronological list, items slide in from alternating sides
    Timeline,
    // steps grow in, arrows stretch out half a step later
    Workflow,
}

// the animated parts found inside a container once it is classified
#[derive(Clone, Debug, PartialEq)]
pub enum Group<N> {
    Plain,
    Grid(Vec<N>),
    Timeline(Vec<N>),
    Workflow { steps: Vec<N>, arrows: Vec<N> },
}

// the container itself, always shown at once
pub fn container_cue<N>(container: N) -> Cue<N> {
    Cue::new(0, container, RevealStyle::shown(Motion::Section))
}

// staggered cues for the parts of a revealed container, relative to the intersection event
pub fn group_cues<N: Clone>(group: &Group<N>, config: &RevealConfig) -> Vec<Cue<N>> {
    match group {
        Group::Plain => Vec::new(),
        Group::Grid(items) => sequence(items, 0.0, config.grid_stagger_ms, |_| Motion::Rise),
        Group::Timeline(items) => sequence(items, 0.0, config.timeline_stagger_ms, Motion::timeline),
        Group::Workflow { steps, arrows } => {
            let mut cues = sequence(steps, 0.0, config.workflow_stagger_ms, |_| Motion::Grow);
            cues.extend(sequence(arrows, 0.5, config.workflow_stagger_ms, |_| Motion::Stretch));
            cues
        }
    }
}

// code lines, revealed once when the observed block first scrolls into view
pub fn code_line_cues<N: Clone>(lines: &[N], config: &RevealConfig) -> Vec<Cue<N>> {
    sequence(lines, 0.0, config.code_stagger_ms, |_| Motion::Nudge)
}

fn sequence<N: Clone>(items: &[N], shift: f64, step_ms: u32, motion: impl Fn(usize) -> Motion) -> Vec<Cue<N>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            Cue::new(
                stagger(0, step_ms, i as f64 + shift),
                item.clone(),
                RevealStyle::shown(motion(i)),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timings<N: Copy>(cues: &[Cue<N>]) -> Vec<(N, u32)> {
        cues.iter().map(|cue| (cue.node, cue.at_ms)).collect()
    }

    #[test]
    fn grid_children_stagger_by_150ms() {
        let cues = group_cues(&Group::Grid(vec![0, 1, 2]), &RevealConfig::default());

        assert_eq!(timings(&cues), vec![(0, 0), (1, 150), (2, 300)]);
        assert_eq!(cues[0].style, RevealStyle::shown(Motion::Rise));
    }

    #[test]
    fn timeline_items_slide_by_200ms() {
        let cues = group_cues(&Group::Timeline(vec![10, 11]), &RevealConfig::default());

        assert_eq!(timings(&cues), vec![(10, 0), (11, 200)]);
        assert_eq!(cues[0].style, RevealStyle::shown(Motion::SlideLeft));
        assert_eq!(cues[1].style, RevealStyle::shown(Motion::SlideRight));
    }

    #[test]
    fn workflow_arrows_land_half_a_step_late() {
        let group = Group::Workflow {
            steps: vec![0, 2, 4],
            arrows: vec![1, 3],
        };
        let mut cues = group_cues(&group, &RevealConfig::default());
        cues.sort_by_key(|cue| cue.at_ms);

        assert_eq!(
            timings(&cues),
            vec![(0, 0), (1, 100), (2, 200), (3, 300), (4, 400)]
        );
        assert_eq!(cues[1].style, RevealStyle::shown(Motion::Stretch));
        assert_eq!(cues[2].style, RevealStyle::shown(Motion::Grow));
    }

    #[test]
    fn plain_groups_have_no_cues() {
        assert!(group_cues::<usize>(&Group::Plain, &RevealConfig::default()).is_empty());
    }

    #[test]
    fn code_lines_stagger_by_200ms() {
        let cues = code_line_cues(&[7, 8, 9], &RevealConfig::default());

        assert_eq!(timings(&cues), vec![(7, 0), (8, 200), (9, 400)]);
        assert_eq!(cues[2].style, RevealStyle::shown(Motion::Nudge));
    }
}
