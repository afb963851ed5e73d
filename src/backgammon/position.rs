use std::fmt::Display;

use crate::backgammon::Color;

/// One end of a checker move. `Bar` and `Off` mean the same thing for both colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    Bar,
    Point(u8),
    Off,
}

impl Position {
    /// Raw index view of this position for `color`: points map to themselves, the bar
    /// to one step before the entry edge and `Off` to one step past the home edge.
    pub fn index_for(&self, color: Color) -> i8 {
        match self {
            Position::Bar => color.bar_index(),
            Position::Point(index) => *index as i8,
            Position::Off => color.off_index(),
        }
    }

    pub fn point(&self) -> Option<u8> {
        match self {
            Position::Point(index) => Some(*index),
            _ => None,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Bar => write!(f, "B"),
            Position::Point(index) => write!(f, "{}", index + 1),
            Position::Off => write!(f, "O"),
        }
    }
}
