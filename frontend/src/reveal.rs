//! One-shot reveal latch for the page sections.
//!
//! Each tracked section starts [`RevealState::Unseen`] and moves to
//! [`RevealState::Revealed`] the first time its visible fraction reaches
//! [`config::REVEAL_THRESHOLD`]. There is no way back.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use yew::functional::Reducible;

use crate::config;

/// Attribute carrying the section id on observed elements.
pub const SECTION_ATTR: &str = "data-reveal";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Services,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Hero, Section::About, Section::Services, Section::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    fn index(self) -> usize {
        match self {
            Section::Hero => 0,
            Section::About => 1,
            Section::Services => 2,
            Section::Contact => 3,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| format!("unknown section `{}`", s))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Unseen,
    Revealed,
}

impl RevealState {
    /// Whether an observation at `ratio` crosses the threshold.
    pub fn crosses(ratio: f64) -> bool {
        ratio >= config::REVEAL_THRESHOLD
    }

    /// Applies one visibility observation. Returns true only on the
    /// unseen -> revealed transition.
    pub fn observe(&mut self, ratio: f64) -> bool {
        match self {
            RevealState::Unseen if Self::crosses(ratio) => {
                *self = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealAction {
    /// An intersection report for a section.
    Observed { section: Section, ratio: f64 },
    /// Observation is unavailable; show everything rather than keep it hidden.
    RevealAll,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealController {
    states: [RevealState; 4],
}

impl RevealController {
    pub fn state(&self, section: Section) -> RevealState {
        self.states[section.index()]
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.state(section).is_revealed()
    }

    /// Returns true if any section changed.
    pub fn apply(&mut self, action: RevealAction) -> bool {
        match action {
            RevealAction::Observed { section, ratio } => {
                let changed = self.states[section.index()].observe(ratio);
                if changed {
                    log::debug!("section {} revealed at ratio {:.2}", section, ratio);
                }
                changed
            }
            RevealAction::RevealAll => {
                let mut changed = false;
                for state in self.states.iter_mut() {
                    changed |= state.observe(1.0);
                }
                changed
            }
        }
    }

    pub fn all_revealed(&self) -> bool {
        self.states.iter().all(|state| state.is_revealed())
    }
}

impl Reducible for RevealController {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            // Unchanged state keeps the same Rc so nothing re-renders.
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observed(section: Section, ratio: f64) -> RevealAction {
        RevealAction::Observed { section, ratio }
    }

    #[test]
    fn starts_unseen() {
        let controller = RevealController::default();
        for section in Section::ALL {
            assert_eq!(controller.state(section), RevealState::Unseen);
        }
        assert!(!controller.all_revealed());
    }

    #[test]
    fn below_threshold_never_reveals() {
        let mut controller = RevealController::default();
        for ratio in [0.0, 0.1, 0.29, 0.2999] {
            assert!(!controller.apply(observed(Section::About, ratio)));
        }
        assert!(!controller.is_revealed(Section::About));
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut state = RevealState::Unseen;
        assert!(state.observe(0.3));
        assert!(state.is_revealed());
    }

    #[test]
    fn latch_never_reverts() {
        let mut controller = RevealController::default();
        assert!(controller.apply(observed(Section::Services, 0.5)));
        assert!(!controller.apply(observed(Section::Services, 0.0)));
        assert!(!controller.apply(observed(Section::Services, 1.0)));
        assert!(controller.is_revealed(Section::Services));
    }

    #[test]
    fn garbage_ratios_do_not_reveal() {
        let mut state = RevealState::Unseen;
        assert!(!state.observe(f64::NAN));
        assert!(!state.observe(-1.0));
        assert_eq!(state, RevealState::Unseen);
    }

    #[test]
    fn page_load_at_top_reveals_only_hero() {
        let mut controller = RevealController::default();
        controller.apply(observed(Section::Hero, 0.85));
        controller.apply(observed(Section::About, 0.12));
        controller.apply(observed(Section::Services, 0.0));
        controller.apply(observed(Section::Contact, 0.0));

        assert!(controller.is_revealed(Section::Hero));
        assert!(!controller.is_revealed(Section::About));
        assert!(!controller.is_revealed(Section::Services));
        assert!(!controller.is_revealed(Section::Contact));

        controller.apply(observed(Section::About, 0.31));
        assert!(controller.is_revealed(Section::About));
        assert!(!controller.is_revealed(Section::Contact));
    }

    #[test]
    fn reveal_all_reveals_every_section_once() {
        let mut controller = RevealController::default();
        controller.apply(observed(Section::Hero, 1.0));
        assert!(controller.apply(RevealAction::RevealAll));
        assert!(controller.all_revealed());
        assert!(!controller.apply(RevealAction::RevealAll));
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let controller = Rc::new(RevealController::default());
        let same = controller.clone().reduce(observed(Section::Contact, 0.1));
        assert!(Rc::ptr_eq(&controller, &same));

        let next = controller.clone().reduce(observed(Section::Contact, 0.4));
        assert!(!Rc::ptr_eq(&controller, &next));
        assert!(next.is_revealed(Section::Contact));
        assert!(!controller.is_revealed(Section::Contact));
    }

    #[test]
    fn section_ids_parse_back() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
        assert!("credentials".parse::<Section>().is_err());
    }
}
