use std::fmt::{Debug, Display};

use crate::backgammon::{Color, Position};

/// A single checker moving from one position to another using one die.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Position,
    to: Position,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self {
        Move { from, to }
    }

    pub fn between(from: u8, to: u8) -> Self {
        Move::new(Position::Point(from), Position::Point(to))
    }

    pub fn enter(to: u8) -> Self {
        Move::new(Position::Bar, Position::Point(to))
    }

    pub fn bear_off(from: u8) -> Self {
        Move::new(Position::Point(from), Position::Off)
    }

    pub fn from(&self) -> Position {
        self.from
    }

    pub fn to(&self) -> Position {
        self.to
    }

    pub fn is_entry(&self) -> bool {
        self.from == Position::Bar
    }

    pub fn is_bear_off(&self) -> bool {
        self.to == Position::Off
    }

    /// Pips covered by the move for `color`. For bear-offs this is the exact distance
    /// to the edge, which may be smaller than the die used.
    pub fn pips(&self, color: Color) -> u8 {
        color.distance(self.from.index_for(color), self.to.index_for(color)) as u8
    }

    /// The move as the other color would play it on the mirrored board.
    pub fn mirrored(&self) -> Move {
        let flip = |position: Position| match position {
            Position::Point(index) => Position::Point(23 - index),
            other => other,
        };
        Move::new(flip(self.from), flip(self.to))
    }

    /// Raw `(from, to)` index pair using the sentinel indices of `color`.
    pub fn indices(&self, color: Color) -> (i8, i8) {
        (self.from.index_for(color), self.to.index_for(color))
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {:?}", self.from, self.to)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pips_follow_direction() {
        assert_eq!(Move::between(0, 6).pips(Color::White), 6);
        assert_eq!(Move::between(12, 7).pips(Color::Black), 5);
        assert_eq!(Move::enter(2).pips(Color::White), 3);
        assert_eq!(Move::enter(21).pips(Color::Black), 3);
        assert_eq!(Move::bear_off(22).pips(Color::White), 2);
        assert_eq!(Move::bear_off(3).pips(Color::Black), 4);
    }

    #[test]
    fn display() {
        assert_eq!(Move::between(0, 6).to_string(), "1 -> 7");
        assert_eq!(Move::enter(20).to_string(), "B -> 21");
        assert_eq!(Move::bear_off(0).to_string(), "1 -> O");
    }

    #[test]
    fn raw_indices() {
        assert_eq!(Move::enter(21).indices(Color::Black), (24, 21));
        assert_eq!(Move::bear_off(23).indices(Color::White), (23, 24));
    }
}
