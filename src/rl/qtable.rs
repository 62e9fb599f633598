use std::collections::HashMap;

use crate::game::Action;

use super::state::StateKey;

/// Action-value table: the agent's learned knowledge
///
/// Maps each encountered state to one value per action. Entries are created
/// lazily with a neutral default of 0.0 the first time a state is looked up
/// for mutation; reads of unseen states return 0.0 without inserting.
/// [`QTable::update`] is the sole mutator.
#[derive(Debug, Clone, Default)]
pub struct QTable {
    values: HashMap<StateKey, [f32; 4]>,
}

impl QTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value for (state, action), 0.0 if the state is unseen
    pub fn value(&self, state: StateKey, action: Action) -> f32 {
        self.values
            .get(&state)
            .map(|row| row[action.index()])
            .unwrap_or(0.0)
    }

    /// Maximum value over all actions for a state, 0.0 if unseen
    pub fn max_value(&self, state: StateKey) -> f32 {
        self.values
            .get(&state)
            .map(|row| row.iter().copied().fold(f32::NEG_INFINITY, f32::max))
            .unwrap_or(0.0)
    }

    /// All actions tied at the maximum value for a state
    ///
    /// Unseen states return every action: all four share the 0.0 default.
    pub fn best_actions(&self, state: StateKey) -> Vec<Action> {
        let max = self.max_value(state);
        Action::ALL
            .into_iter()
            .filter(|a| self.value(state, *a) == max)
            .collect()
    }

    /// Apply the Q-learning update:
    /// `Q[s,a] += alpha * (reward + gamma * max_a' Q[s',a'] - Q[s,a])`
    ///
    /// The bootstrap term `max_a' Q[s',a']` is 0.0 for unseen next states.
    pub fn update(
        &mut self,
        state: StateKey,
        action: Action,
        reward: f32,
        next_state: StateKey,
        alpha: f32,
        gamma: f32,
    ) {
        let next_max = self.max_value(next_state);
        let row = self.values.entry(state).or_insert([0.0; 4]);
        let q = row[action.index()];
        row[action.index()] = q + alpha * (reward + gamma * next_max - q);
    }

    /// Number of distinct states seen so far
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
