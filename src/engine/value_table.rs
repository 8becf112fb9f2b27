//! Value table for temporal difference learning

use serde::Serialize;

use crate::types::{Action, State};

/// Q-table mapping (state, action) pairs to Q-values
///
/// Dense storage over the full `State` × `Action` cross product; every cell
/// exists at all times and starts at exactly 0.0. The table is the sole
/// mutable state of the decision engine and only the engine can write to it
/// (`set` is crate-private). External readers take [`ValueTableSnapshot`]
/// copies.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTable {
    cells: [[f64; Action::ALL.len()]; State::ALL.len()],
}

impl ValueTable {
    /// Create a zero-initialized table
    pub fn new() -> Self {
        Self {
            cells: [[0.0; Action::ALL.len()]; State::ALL.len()],
        }
    }

    /// Get the current Q-value estimate for a state-action pair
    pub fn get(&self, state: State, action: Action) -> f64 {
        self.cells[state.index()][action.index()]
    }

    /// Overwrite the estimate for a state-action pair; no other side effects
    pub(crate) fn set(&mut self, state: State, action: Action, value: f64) {
        self.cells[state.index()][action.index()] = value;
    }

    /// Maximum stored value across all actions for a state
    ///
    /// Only the maximum value is consumed by the learning update, so the
    /// tie-break among maximizing actions is irrelevant here.
    pub fn max_over_actions(&self, state: State) -> f64 {
        Action::ALL
            .iter()
            .map(|&action| self.get(state, action))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Action with the highest value for a state
    ///
    /// Scans `Action::ALL` in enumeration order and keeps the first action
    /// achieving the maximum, so ties resolve deterministically.
    pub fn greedy_action(&self, state: State) -> Action {
        let mut best = Action::ALL[0];
        let mut best_value = self.get(state, best);
        for &action in &Action::ALL[1..] {
            let value = self.get(state, action);
            if value > best_value {
                best = action;
                best_value = value;
            }
        }
        best
    }

    /// Immutable copy of the full table in enumeration order
    pub fn snapshot(&self) -> ValueTableSnapshot {
        let cells = State::ALL
            .iter()
            .flat_map(|&state| {
                Action::ALL.iter().map(move |&action| SnapshotCell {
                    state,
                    action,
                    value: self.get(state, action),
                })
            })
            .collect();
        ValueTableSnapshot { cells }
    }
}

impl Default for ValueTable {
    fn default() -> Self {
        Self::new()
    }
}

/// One (state, action, value) cell of a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SnapshotCell {
    pub state: State,
    pub action: Action,
    pub value: f64,
}

/// Read-only copy of a [`ValueTable`], in `State::ALL` × `Action::ALL` order
///
/// This is what presentation collaborators consume; mutating it has no
/// effect on the learning state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueTableSnapshot {
    pub cells: Vec<SnapshotCell>,
}

impl ValueTableSnapshot {
    /// Look up a cell value in the snapshot
    pub fn value(&self, state: State, action: Action) -> f64 {
        self.cells[state.index() * Action::ALL.len() + action.index()].value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_table_is_all_zeros() {
        let table = ValueTable::new();
        for state in State::ALL {
            for action in Action::ALL {
                assert_eq!(table.get(state, action), 0.0);
            }
        }
    }

    #[test]
    fn set_then_get() {
        let mut table = ValueTable::new();
        table.set(State::Start, Action::Left, 1.5);
        assert_eq!(table.get(State::Start, Action::Left), 1.5);
        assert_eq!(table.get(State::Start, Action::Center), 0.0);
    }

    #[test]
    fn max_over_actions_picks_largest() {
        let mut table = ValueTable::new();
        table.set(State::Left, Action::Left, 0.5);
        table.set(State::Left, Action::Center, 1.5);
        table.set(State::Left, Action::Right, 0.8);
        assert_eq!(table.max_over_actions(State::Left), 1.5);
    }

    #[test]
    fn max_over_actions_handles_all_negative() {
        let mut table = ValueTable::new();
        for action in Action::ALL {
            table.set(State::Right, action, -1.0);
        }
        table.set(State::Right, Action::Center, -0.2);
        assert_eq!(table.max_over_actions(State::Right), -0.2);
    }

    #[test]
    fn greedy_action_breaks_ties_in_enumeration_order() {
        let mut table = ValueTable::new();
        // left and right tied at the maximum; left precedes right
        table.set(State::Center, Action::Left, 0.7);
        table.set(State::Center, Action::Right, 0.7);
        assert_eq!(table.greedy_action(State::Center), Action::Left);

        // all zeros: first action wins
        assert_eq!(table.greedy_action(State::Start), Action::Left);
    }

    #[test]
    fn snapshot_is_a_detached_copy() {
        let mut table = ValueTable::new();
        table.set(State::Start, Action::Right, 0.3);
        let snapshot = table.snapshot();
        assert_eq!(snapshot.cells.len(), State::ALL.len() * Action::ALL.len());
        assert_eq!(snapshot.value(State::Start, Action::Right), 0.3);

        table.set(State::Start, Action::Right, 0.9);
        assert_eq!(snapshot.value(State::Start, Action::Right), 0.3);
    }
}
