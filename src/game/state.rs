use serde::{Deserialize, Serialize};

use super::action::Action;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one step in the direction of an action
    pub fn moved_by_action(&self, action: Action) -> Self {
        let (dx, dy) = action.delta();
        self.moved_by(dx, dy)
    }
}

/// Raw snapshot of the world, produced by the environment each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub agent: Position,
    pub food: Position,
    pub grid_size: i32,
}

impl Observation {
    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.grid_size && pos.y >= 0 && pos.y < self.grid_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
    }

    #[test]
    fn test_position_action_movement() {
        let pos = Position::new(3, 3);
        assert_eq!(pos.moved_by_action(Action::Up), Position::new(3, 2));
        assert_eq!(pos.moved_by_action(Action::Down), Position::new(3, 4));
        assert_eq!(pos.moved_by_action(Action::Left), Position::new(2, 3));
        assert_eq!(pos.moved_by_action(Action::Right), Position::new(4, 3));
    }

    #[test]
    fn test_bounds_checking() {
        let obs = Observation {
            agent: Position::new(5, 5),
            food: Position::new(10, 10),
            grid_size: 20,
        };

        assert!(obs.is_in_bounds(Position::new(0, 0)));
        assert!(obs.is_in_bounds(Position::new(19, 19)));
        assert!(!obs.is_in_bounds(Position::new(-1, 0)));
        assert!(!obs.is_in_bounds(Position::new(20, 0)));
        assert!(!obs.is_in_bounds(Position::new(0, 20)));
    }
}
