//! Backgammon rule engine: legal move generation for both colors plus a small turn
//! controller that a front-end can drive.

pub mod backgammon;
pub mod config;
