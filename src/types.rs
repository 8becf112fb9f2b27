//! Closed enumerations for shot directions and decision context.
//!
//! The original game identified states and actions by arbitrary string keys.
//! Here both are tagged variants, so an unrecognized key can only occur at
//! the parsing boundary and never inside the learning core.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A discrete direction chosen in a round, by either side.
///
/// The shooter's shot direction and the keeper's dive direction share one
/// enumeration by game design: a dive to the same side as the shot is a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Left,
    Center,
    Right,
}

impl Action {
    /// All actions in the fixed enumeration order used for greedy scans,
    /// snapshots, and tie-breaking.
    pub const ALL: [Action; 3] = [Action::Left, Action::Center, Action::Right];

    /// Dense index into value-table rows.
    pub(crate) fn index(self) -> usize {
        match self {
            Action::Left => 0,
            Action::Center => 1,
            Action::Right => 2,
        }
    }

    /// Lowercase label, matching the wire/display form.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Left => "left",
            Action::Center => "center",
            Action::Right => "right",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Action::Left),
            "center" | "c" => Ok(Action::Center),
            "right" | "r" => Ok(Action::Right),
            _ => Err(Error::ParseAction {
                input: trimmed.to_string(),
            }),
        }
    }
}

/// The context a decision conditions on: the opponent's most recent shot
/// direction, or [`State::Start`] before any round has been played.
///
/// `Start` is never revisited once the first round completes, since every
/// completed round derives the next context from the observed shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Left,
    Center,
    Right,
    Start,
}

impl State {
    /// All states in fixed enumeration order.
    pub const ALL: [State; 4] = [State::Left, State::Center, State::Right, State::Start];

    /// Dense index into the value table.
    pub(crate) fn index(self) -> usize {
        match self {
            State::Left => 0,
            State::Center => 1,
            State::Right => 2,
            State::Start => 3,
        }
    }

    /// Lowercase label, matching the wire/display form.
    pub fn as_str(self) -> &'static str {
        match self {
            State::Left => "left",
            State::Center => "center",
            State::Right => "right",
            State::Start => "start",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "start" => Ok(State::Start),
            _ => Action::from_str(trimmed)
                .map(State::from)
                .map_err(|_| Error::ParseState {
                    input: trimmed.to_string(),
                }),
        }
    }
}

/// The state-transition contract: the human's observed action becomes the
/// context for the following round.
impl From<Action> for State {
    fn from(action: Action) -> Self {
        match action {
            Action::Left => State::Left,
            Action::Center => State::Center,
            Action::Right => State::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_labels_round_trip() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>().unwrap(), action);
        }
    }

    #[test]
    fn state_labels_round_trip() {
        for state in State::ALL {
            assert_eq!(state.as_str().parse::<State>().unwrap(), state);
        }
    }

    #[test]
    fn parse_accepts_short_forms_and_case() {
        assert_eq!("L".parse::<Action>().unwrap(), Action::Left);
        assert_eq!(" Center ".parse::<Action>().unwrap(), Action::Center);
        assert_eq!("START".parse::<State>().unwrap(), State::Start);
    }

    #[test]
    fn parse_rejects_unknown_labels() {
        assert!(matches!(
            "up".parse::<Action>(),
            Err(Error::ParseAction { .. })
        ));
        assert!(matches!(
            "up".parse::<State>(),
            Err(Error::ParseState { .. })
        ));
    }

    #[test]
    fn transition_maps_action_onto_matching_state() {
        assert_eq!(State::from(Action::Left), State::Left);
        assert_eq!(State::from(Action::Center), State::Center);
        assert_eq!(State::from(Action::Right), State::Right);
    }

    #[test]
    fn enumeration_indices_are_dense() {
        for (i, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
        }
        for (i, state) in State::ALL.iter().enumerate() {
            assert_eq!(state.index(), i);
        }
    }
}
