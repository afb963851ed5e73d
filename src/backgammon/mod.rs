mod color;
pub use color::Color;
pub use color::PointColor;
pub use color::POINT_COUNT;

mod position;
pub use position::Position;

mod checker_move;
pub use checker_move::Move;

mod dice;
pub use dice::Dice;
pub use dice::DiceUsage;

mod board;
pub use board::Bar;
pub use board::Board;
pub use board::Point;
pub use board::CHECKERS_PER_PLAYER;

mod error;
pub use error::GameError;
pub use error::MoveError;

mod player;
pub use player::Player;

mod game;
pub use game::Game;
pub use game::GameOutcome;
