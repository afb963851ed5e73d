use derive_more::Display;

use crate::backgammon::{Color, Move, Position};

/// A move that cannot be carried out on the board at all, independent of the dice.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[display("{_0} has no checker on the bar")]
    EmptyBar(Color),
    #[display("{_0} has no checker on {_1}")]
    NoChecker(Color, Position),
    #[display("point {_0} is blocked")]
    Blocked(Position),
    #[display("{_0} is not a valid destination")]
    InvalidDestination(Position),
    #[display("point index {_0} is outside the board")]
    OutOfBounds(u8),
}

impl std::error::Error for MoveError {}

/// Turn sequencing errors reported by [`crate::backgammon::Game`].
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[display("the game is already over")]
    GameOver,
    #[display("dice have not been rolled yet")]
    NotRolled,
    #[display("dice were already rolled this turn")]
    AlreadyRolled,
    #[display("{_0} is not a legal move")]
    IllegalMove(Move),
    #[display("cannot pass while legal moves remain")]
    CannotPass,
    #[display("{_0}")]
    Board(MoveError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        GameError::Board(err)
    }
}
