use hashbrown::HashSet;
use rayon::prelude::*;
use tracing::trace;

use crate::backgammon::{Board, Color, Dice, Move, Position};

/// One side of the game. Every direction dependent rule is delegated to [`Color`],
/// so White and Black share the same generation code and mirror each other exactly.
///
/// All generators are pure functions of the board and the dice. While the player has a
/// checker on the bar, [`Player::is_legal_initial_move`] is false for every point, which
/// leaves re-entering as the only thing that can be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    color: Color,
    checkers_at_home: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Player { name: name.into(), color, checkers_at_home: 0 }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Checkers in the home quadrant as of the last [`Player::update_checkers_at_home`].
    pub fn checkers_at_home(&self) -> u32 {
        self.checkers_at_home
    }

    /// Non-hitting moves. Defers to [`Player::available_moves_from_bar`] while the bar is not empty.
    pub fn available_moves(&self, board: &Board, dice: &Dice) -> Vec<Move> {
        if board.bar(self.color) > 0 {
            return self.available_moves_from_bar(board, dice);
        }
        self.scan_points(board, dice, |from, to, die| self.is_legal_final_move(board, from, to, die))
    }

    pub fn available_moves_from_bar(&self, board: &Board, dice: &Dice) -> Vec<Move> {
        self.scan_entries(dice, |from, to, die| self.is_legal_final_move(board, from, to, die))
    }

    /// Moves that hit a blot. Defers to [`Player::available_hits_from_bar`] while the bar is not empty.
    pub fn available_hits(&self, board: &Board, dice: &Dice) -> Vec<Move> {
        if board.bar(self.color) > 0 {
            return self.available_hits_from_bar(board, dice);
        }
        self.scan_points(board, dice, |from, to, die| self.is_legal_final_hit(board, from, to, die))
    }

    pub fn available_hits_from_bar(&self, board: &Board, dice: &Dice) -> Vec<Move> {
        self.scan_entries(dice, |from, to, die| self.is_legal_final_hit(board, from, to, die))
    }

    /// Moves carrying a checker from the home quadrant off the board, one per point even
    /// when several dice reach the edge. Empty unless [`Player::can_bear_off_checkers`] holds.
    pub fn available_bear_off_moves(&self, board: &Board, dice: &Dice) -> Vec<Move> {
        if !self.can_bear_off_checkers(board) {
            return Vec::new();
        }
        self.color
            .travel_order()
            .filter(|&from| self.color.is_home(from) && self.is_legal_initial_move(board, from))
            .filter(|&from| dice.available().any(|die| self.is_legal_bear_off_move(from as i8, die)))
            .map(Move::bear_off)
            .collect()
    }

    pub fn is_legal_initial_move(&self, board: &Board, index: u8) -> bool {
        board.get_point(index).is_some_and(|p| p.is_owned_by(self.color)) && board.bar(self.color) == 0
    }

    /// `from` and `to` are raw indices, so `from` may be the bar index of this color.
    pub fn is_legal_final_move(&self, board: &Board, from: i8, to: i8, die: u8) -> bool {
        self.lands(from, to, die)
            .is_some_and(|to| board.point(to).is_open_for(self.color))
    }

    /// Like [`Player::is_legal_final_move`] but the destination must be a single opposing checker.
    pub fn is_legal_final_hit(&self, board: &Board, from: i8, to: i8, die: u8) -> bool {
        self.lands(from, to, die)
            .is_some_and(|to| board.point(to).is_blot_against(self.color))
    }

    /// Whether `die` carries a checker on point `from` to or past the edge of the board.
    pub fn is_legal_bear_off_move(&self, from: i8, die: u8) -> bool {
        (0..24).contains(&from) && self.color.distance(from, self.color.off_index()) <= die as i16
    }

    pub fn can_bear_off_checkers(&self, board: &Board) -> bool {
        let outside = (0..24).filter(|&i| !self.color.is_home(i));
        board.bar(self.color) == 0 && board.checkers_on(self.color, outside) == 0
    }

    /// Recounts the checkers in the home quadrant. Must run after every move that
    /// touches this color, including being hit.
    pub fn update_checkers_at_home(&mut self, board: &Board) {
        self.checkers_at_home = board.checkers_on(self.color, self.color.home_points());
    }

    /// Everything the player may do with one die of `dice`: plain moves, hits and, once
    /// eligible, bear-offs. Each move appears once, in scan order.
    pub fn legal_moves(&self, board: &Board, dice: &Dice) -> Vec<Move> {
        let mut moves = self.available_moves(board, dice);
        moves.extend(self.available_hits(board, dice));
        moves.extend(self.available_bear_off_moves(board, dice));

        // The three generators are disjoint, the set only guards the union.
        let mut seen = HashSet::with_capacity(moves.len());
        moves.retain(|mv| seen.insert(*mv));
        trace!(color = %self.color, %dice, count = moves.len(), "generated moves");
        moves
    }

    /// Legal moves for each of the 21 distinct rolls.
    pub fn survey(&self, board: &Board) -> Vec<(Dice, Vec<Move>)> {
        Dice::ALL
            .par_iter()
            .map(|dice| (*dice, self.legal_moves(board, dice)))
            .collect()
    }

    /// Chance that the next roll leaves at least one legal move.
    pub fn chance_to_move(&self, board: &Board) -> f32 {
        self.survey(board)
            .iter()
            .filter(|(_, moves)| !moves.is_empty())
            .map(|(dice, _)| dice.probability())
            .sum()
    }

    /// Point `to` if it is on the board and exactly `die` pips ahead of `from`.
    fn lands(&self, from: i8, to: i8, die: u8) -> Option<u8> {
        let on_board = (0..24).contains(&to);
        (on_board && self.color.distance(from, to) == die as i16).then_some(to as u8)
    }

    fn scan_points(&self, board: &Board, dice: &Dice, accept: impl Fn(i8, i8, u8) -> bool) -> Vec<Move> {
        let mut moves = Vec::new();
        for from in self.color.travel_order() {
            if !self.is_legal_initial_move(board, from) {
                continue;
            }
            for die in dice.available() {
                if let Some(to) = self.color.target(from as i8, die) {
                    if accept(from as i8, to as i8, die) {
                        moves.push(Move::between(from, to));
                    }
                }
            }
        }
        moves
    }

    fn scan_entries(&self, dice: &Dice, accept: impl Fn(i8, i8, u8) -> bool) -> Vec<Move> {
        let bar = self.color.bar_index();
        dice.available()
            .filter_map(|die| self.color.entry_point(die).map(|to| (die, to)))
            .filter(|&(die, to)| accept(bar, to as i8, die))
            .map(|(_, to)| Move::new(Position::Bar, Position::Point(to)))
            .collect()
    }
}
