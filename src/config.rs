use rand::{SeedableRng, rngs::StdRng};

use crate::backgammon::Color;

/// Settings for a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub white_name: String,
    pub black_name: String,
    /// Side that rolls first.
    pub first: Color,
    /// Fixed seed for reproducible dice. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            white_name: "White".to_string(),
            black_name: "Black".to_string(),
            first: Color::White,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_first(mut self, first: Color) -> Self {
        self.first = first;
        self
    }

    pub fn with_names(mut self, white: impl Into<String>, black: impl Into<String>) -> Self {
        self.white_name = white.into();
        self.black_name = black.into();
        self
    }

    pub fn name(&self, color: Color) -> &str {
        match color {
            Color::White => &self.white_name,
            Color::Black => &self.black_name,
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
