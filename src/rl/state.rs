use crate::game::{Action, Observation};

/// Discrete state key used for Q-table lookup
///
/// Reduces a raw [`Observation`] to eight booleans: whether a step in each
/// direction would leave the grid, and where the food lies relative to the
/// agent. Two observations with identical flags map to the identical key,
/// which is what lets the table generalize across equivalent situations
/// anywhere on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateKey {
    /// Wall adjacency per direction, indexed by `Action::index()`
    pub danger: [bool; 4],
    pub food_up: bool,
    pub food_down: bool,
    pub food_left: bool,
    pub food_right: bool,
}

/// Encode an observation into its state key
pub fn encode(obs: &Observation) -> StateKey {
    let mut danger = [false; 4];
    for action in Action::ALL {
        danger[action.index()] = !obs.is_in_bounds(obs.agent.moved_by_action(action));
    }

    StateKey {
        danger,
        food_up: obs.food.y < obs.agent.y,
        food_down: obs.food.y > obs.agent.y,
        food_left: obs.food.x < obs.agent.x,
        food_right: obs.food.x > obs.agent.x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;

    fn obs(agent: (i32, i32), food: (i32, i32)) -> Observation {
        Observation {
            agent: Position::new(agent.0, agent.1),
            food: Position::new(food.0, food.1),
            grid_size: 5,
        }
    }

    #[test]
    fn test_interior_cell_has_no_danger() {
        let key = encode(&obs((2, 2), (4, 4)));
        assert_eq!(key.danger, [false; 4]);
    }

    #[test]
    fn test_corner_danger_flags() {
        let key = encode(&obs((0, 0), (4, 4)));
        assert!(key.danger[Action::Up.index()]);
        assert!(key.danger[Action::Left.index()]);
        assert!(!key.danger[Action::Down.index()]);
        assert!(!key.danger[Action::Right.index()]);
    }

    #[test]
    fn test_edge_danger_flags() {
        let key = encode(&obs((4, 2), (0, 0)));
        assert!(key.danger[Action::Right.index()]);
        assert!(!key.danger[Action::Up.index()]);
        assert!(!key.danger[Action::Down.index()]);
        assert!(!key.danger[Action::Left.index()]);
    }

    #[test]
    fn test_food_direction_flags() {
        let key = encode(&obs((2, 2), (4, 1)));
        assert!(key.food_up);
        assert!(!key.food_down);
        assert!(!key.food_left);
        assert!(key.food_right);
    }

    #[test]
    fn test_food_aligned_with_agent() {
        // Food directly above: only the vertical flag is set
        let key = encode(&obs((2, 2), (2, 0)));
        assert!(key.food_up);
        assert!(!key.food_down);
        assert!(!key.food_left);
        assert!(!key.food_right);
    }

    #[test]
    fn test_equivalent_observations_encode_equal() {
        // Distinct observations, same danger flags and same relative food
        // direction: the keys must be equal, not merely equivalent.
        let a = encode(&obs((2, 2), (3, 1)));
        let b = encode(&obs((1, 3), (2, 2)));
        assert_eq!(a, b);

        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut ha = DefaultHasher::new();
        let mut hb = DefaultHasher::new();
        a.hash(&mut ha);
        b.hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn test_different_situations_encode_differently() {
        let interior = encode(&obs((2, 2), (4, 4)));
        let corner = encode(&obs((0, 0), (4, 4)));
        assert_ne!(interior, corner);
    }
}
