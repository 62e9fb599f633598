/// An action the agent can take: one step in a cardinal direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// All four actions, in a fixed order matching `index()`
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Returns the delta (dx, dy) for moving in this direction
    ///
    /// The origin is the top-left cell, so Up decreases y.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Action::Up => (0, -1),
            Action::Down => (0, 1),
            Action::Left => (-1, 0),
            Action::Right => (1, 0),
        }
    }

    /// Index of this action in `ALL`, used for Q-table addressing
    pub fn index(&self) -> usize {
        match self {
            Action::Up => 0,
            Action::Down => 1,
            Action::Left => 2,
            Action::Right => 3,
        }
    }

    /// Inverse of `index()`; `None` for anything outside 0..4
    pub fn from_index(idx: usize) -> Option<Action> {
        Action::ALL.get(idx).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_delta() {
        assert_eq!(Action::Up.delta(), (0, -1));
        assert_eq!(Action::Down.delta(), (0, 1));
        assert_eq!(Action::Left.delta(), (-1, 0));
        assert_eq!(Action::Right.delta(), (1, 0));
    }

    #[test]
    fn test_index_round_trip() {
        for action in Action::ALL {
            assert_eq!(Action::from_index(action.index()), Some(action));
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(Action::from_index(4), None);
        assert_eq!(Action::from_index(999), None);
    }
}
