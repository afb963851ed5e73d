use std::ops::RangeInclusive;

use derive_more::Display;

pub const POINT_COUNT: u8 = 24;

/// The two sides of the game. The color also carries everything that depends on the
/// direction of travel, so a single [`crate::backgammon::Player`] type serves both sides.
///
/// White moves from index 0 towards 23 and bears off past 23.
/// Black moves from index 23 towards 0 and bears off past 0.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// +1 for White, -1 for Black.
    pub fn direction(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Raw index the bar sits at: one step before the first entry point.
    pub fn bar_index(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => POINT_COUNT as i8,
        }
    }

    /// Raw index a borne off checker lands on: one step past the last home point.
    pub fn off_index(&self) -> i8 {
        match self {
            Color::White => POINT_COUNT as i8,
            Color::Black => -1,
        }
    }

    /// Point a checker enters on from the bar with the given die.
    pub fn entry_point(&self, die: u8) -> Option<u8> {
        self.target(self.bar_index(), die)
    }

    /// Destination of a checker at `from` moved by `die` pips, `None` if it leaves the board.
    pub fn target(&self, from: i8, die: u8) -> Option<u8> {
        let to = from as i16 + self.direction() as i16 * die as i16;
        (0..POINT_COUNT as i16).contains(&to).then_some(to as u8)
    }

    /// Signed distance travelled from `from` to `to` in this color's direction.
    /// Computed in `i16` so any pair of raw indices is representable.
    pub fn distance(&self, from: i8, to: i8) -> i16 {
        (to as i16 - from as i16) * self.direction() as i16
    }

    pub fn home_points(&self) -> RangeInclusive<u8> {
        match self {
            Color::White => 18..=23,
            Color::Black => 0..=5,
        }
    }

    pub fn is_home(&self, index: u8) -> bool {
        self.home_points().contains(&index)
    }

    /// All 24 point indices in the order this color travels over them.
    pub fn travel_order(&self) -> impl Iterator<Item = u8> + use<> {
        let forward = *self == Color::White;
        (0..POINT_COUNT).map(move |i| if forward { i } else { POINT_COUNT - 1 - i })
    }

    /// Pips needed to bear off a checker standing on `index`.
    pub fn pips_to_off(&self, index: u8) -> u8 {
        self.distance(index as i8, self.off_index()) as u8
    }
}

/// Occupancy tag of a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointColor {
    #[default]
    Empty,
    White,
    Black,
}

impl PointColor {
    pub fn is(&self, color: Color) -> bool {
        *self == PointColor::from(color)
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            PointColor::Empty => None,
            PointColor::White => Some(Color::White),
            PointColor::Black => Some(Color::Black),
        }
    }
}

impl From<Color> for PointColor {
    fn from(color: Color) -> Self {
        match color {
            Color::White => PointColor::White,
            Color::Black => PointColor::Black,
        }
    }
}
