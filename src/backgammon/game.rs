use rand::rngs::StdRng;
use tracing::{debug, info, instrument};

use crate::{
    backgammon::{Board, CHECKERS_PER_PLAYER, Color, Dice, GameError, Move, Player},
    config::GameConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Win(Color),
}

/// Turn controller: owns the board, rolls the dice, offers the active player's legal
/// moves and applies the chosen one.
///
/// A turn is `roll` followed by `play` until the dice are used up or nothing legal is
/// left, at which point the other side becomes active. A roll that allows no move at
/// all has to be given up with `pass`.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    active: Color,
    dice: Option<Dice>,
    rng: StdRng,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        Game::from_board(config, Board::new())
    }

    /// Starts from an arbitrary position.
    pub fn from_board(config: &GameConfig, board: Board) -> Self {
        let mut players = Color::BOTH.map(|color| Player::new(config.name(color), color));
        for player in players.iter_mut() {
            player.update_checkers_at_home(&board);
        }
        Game {
            board,
            players,
            active: config.first,
            dice: None,
            rng: config.rng(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, color: Color) -> &Player {
        &self.players[color as usize]
    }

    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    /// Remaining dice of the current turn, `None` before rolling.
    pub fn dice(&self) -> Option<Dice> {
        self.dice
    }

    pub fn outcome(&self) -> GameOutcome {
        Color::BOTH
            .into_iter()
            .find(|&color| self.board.borne_off(color) == CHECKERS_PER_PLAYER)
            .map_or(GameOutcome::Ongoing, GameOutcome::Win)
    }

    pub fn roll(&mut self) -> Result<Dice, GameError> {
        let dice = Dice::roll_with(&mut self.rng);
        self.set_dice(dice)?;
        Ok(dice)
    }

    /// Uses a given roll instead of rolling, for replaying games and tests.
    pub fn set_dice(&mut self, dice: Dice) -> Result<(), GameError> {
        if self.outcome() != GameOutcome::Ongoing {
            return Err(GameError::GameOver);
        }
        if self.dice.is_some() {
            return Err(GameError::AlreadyRolled);
        }
        debug!(color = %self.active, %dice, "rolled");
        self.dice = Some(dice.fresh());
        Ok(())
    }

    /// Moves the active player may choose from with the remaining dice.
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.dice {
            Some(dice) if self.outcome() == GameOutcome::Ongoing => {
                self.active_player().legal_moves(&self.board, &dice)
            }
            _ => Vec::new(),
        }
    }

    /// Applies `mv` for the active player and returns the point a blot was hit on, if any.
    #[instrument(level = "debug", skip(self))]
    pub fn play(&mut self, mv: Move) -> Result<Option<u8>, GameError> {
        if self.outcome() != GameOutcome::Ongoing {
            return Err(GameError::GameOver);
        }
        let dice = self.dice.ok_or(GameError::NotRolled)?;
        if !self.legal_moves().contains(&mv) {
            return Err(GameError::IllegalMove(mv));
        }
        let remaining = die_for(self.active, mv, &dice)
            .and_then(|die| dice.use_die(die))
            .ok_or(GameError::IllegalMove(mv))?;

        let hit = self.board.apply_move(self.active, mv)?;
        for player in self.players.iter_mut() {
            player.update_checkers_at_home(&self.board);
        }
        self.dice = Some(remaining);
        if let Some(point) = hit {
            debug!(color = %self.active, point, "hit a blot");
        }

        if let GameOutcome::Win(color) = self.outcome() {
            info!(%color, "won the game");
            self.dice = None;
        } else if remaining.is_used() || self.legal_moves().is_empty() {
            self.end_turn();
        }
        Ok(hit)
    }

    /// Gives up a roll that allows no move.
    pub fn pass(&mut self) -> Result<(), GameError> {
        if self.outcome() != GameOutcome::Ongoing {
            return Err(GameError::GameOver);
        }
        if self.dice.is_none() {
            return Err(GameError::NotRolled);
        }
        if !self.legal_moves().is_empty() {
            return Err(GameError::CannotPass);
        }
        debug!(color = %self.active, "no legal move, passing");
        self.end_turn();
        Ok(())
    }

    fn end_turn(&mut self) {
        self.dice = None;
        self.active = self.active.opposite();
        debug!(color = %self.active, "turn passes");
    }
}

/// Die consumed by `mv`: the exact distance when available, otherwise for a bear-off
/// the smallest die that still reaches the edge.
fn die_for(color: Color, mv: Move, dice: &Dice) -> Option<u8> {
    let pips = mv.pips(color);
    if dice.has(pips) {
        return Some(pips);
    }
    if mv.is_bear_off() {
        return dice.available().filter(|&die| die >= pips).min();
    }
    None
}
