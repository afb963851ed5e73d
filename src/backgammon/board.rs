use std::fmt::Display;

use crate::backgammon::{Color, Move, MoveError, POINT_COUNT, PointColor, Position};

pub const CHECKERS_PER_PLAYER: u8 = 15;

/// Checkers stacked on a single point. A non-zero count always comes with a color
/// and an empty point always has [`PointColor::Empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    color: PointColor,
    count: u8,
}

impl Point {
    pub fn new(color: Color, count: u8) -> Self {
        match count {
            0 => Point::default(),
            _ => Point { color: color.into(), count },
        }
    }

    pub fn color(&self) -> PointColor {
        self.color
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_owned_by(&self, color: Color) -> bool {
        self.color.is(color)
    }

    /// Empty or already held by `color`.
    pub fn is_open_for(&self, color: Color) -> bool {
        self.is_empty() || self.is_owned_by(color)
    }

    /// Exactly one checker of the opponent of `color`.
    pub fn is_blot_against(&self, color: Color) -> bool {
        self.is_owned_by(color.opposite()) && self.count == 1
    }

    /// Two or more opposing checkers: `color` can neither land nor hit here.
    pub fn blocks(&self, color: Color) -> bool {
        self.is_owned_by(color.opposite()) && self.count >= 2
    }

    /// Signed view used for display: positive for White, negative for Black.
    pub fn signed(&self) -> i8 {
        match self.color {
            PointColor::Empty => 0,
            PointColor::White => self.count as i8,
            PointColor::Black => -(self.count as i8),
        }
    }

    fn remove_one(&mut self) {
        self.count -= 1;
        if self.count == 0 {
            self.color = PointColor::Empty;
        }
    }

    fn add_one(&mut self, color: Color) {
        self.color = color.into();
        self.count += 1;
    }
}

/// Checkers that were hit and wait to re-enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bar {
    white: u8,
    black: u8,
}

impl Bar {
    pub fn count(&self, color: Color) -> u8 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    fn slot(&mut self, color: Color) -> &mut u8 {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
}

/// The 24 points, the bar and the borne off checkers of both colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    points: [Point; POINT_COUNT as usize],
    bar: Bar,
    off: [u8; 2],
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Creates a new board with the default starting position.
    pub fn new() -> Self {
        Board::from_signed([2, 0, 0, 0, 0, -5, 0, -3, 0, 0, 0, 5, -5, 0, 0, 0, 3, 0, 5, 0, 0, 0, 0, -2])
    }

    /// Creates an empty board with no checkers on it.
    pub fn empty() -> Self {
        Board {
            points: [Point::default(); POINT_COUNT as usize],
            bar: Bar::default(),
            off: [0, 0],
        }
    }

    /// Builds a board from signed point counts, positive for White and negative for Black.
    pub fn from_signed(checkers: [i8; POINT_COUNT as usize]) -> Self {
        let mut board = Board::empty();
        for (point, &value) in board.points.iter_mut().zip(checkers.iter()) {
            let color = if value > 0 { Color::White } else { Color::Black };
            *point = Point::new(color, value.unsigned_abs());
        }
        board
    }

    /// Replaces the content of a point. Intended for setting up positions.
    pub fn with_checkers(mut self, index: u8, color: Color, count: u8) -> Self {
        self.set_point(index, color, count);
        self
    }

    pub fn with_bar(mut self, color: Color, count: u8) -> Self {
        *self.bar.slot(color) = count;
        self
    }

    pub fn with_borne_off(mut self, color: Color, count: u8) -> Self {
        self.off[color as usize] = count;
        self
    }

    pub fn set_point(&mut self, index: u8, color: Color, count: u8) {
        self.points[index as usize] = Point::new(color, count);
    }

    /// `index` must be below 24.
    pub fn point(&self, index: u8) -> Point {
        self.points[index as usize]
    }

    pub fn get_point(&self, index: u8) -> Option<Point> {
        self.points.get(index as usize).copied()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn bar(&self, color: Color) -> u8 {
        self.bar.count(color)
    }

    pub fn borne_off(&self, color: Color) -> u8 {
        self.off[color as usize]
    }

    /// Checkers of `color` standing on the given points.
    /// Indices outside the board are ignored.
    pub fn checkers_on(&self, color: Color, indices: impl IntoIterator<Item = u8>) -> u32 {
        indices
            .into_iter()
            .filter_map(|i| self.get_point(i))
            .filter(|p| p.is_owned_by(color))
            .map(|p| p.count as u32)
            .sum()
    }

    /// Checkers of `color` on points, on the bar and borne off. Always
    /// [`CHECKERS_PER_PLAYER`] in a real game.
    pub fn checker_count(&self, color: Color) -> u32 {
        self.checkers_on(color, 0..POINT_COUNT) + self.bar(color) as u32 + self.borne_off(color) as u32
    }

    /// Pips `color` still has to travel to bear off every checker.
    pub fn pip_count(&self, color: Color) -> u32 {
        let on_points: u32 = (0..POINT_COUNT)
            .filter(|&i| self.points[i as usize].is_owned_by(color))
            .map(|i| self.points[i as usize].count as u32 * color.pips_to_off(i) as u32)
            .sum();
        on_points + self.bar(color) as u32 * 25
    }

    /// The same position seen from the other side: colors swapped and indices reversed.
    pub fn mirrored(&self) -> Board {
        let mut board = Board::empty();
        for (i, point) in self.points.iter().enumerate() {
            if let Some(color) = point.color.color() {
                board.points[POINT_COUNT as usize - 1 - i] = Point::new(color.opposite(), point.count);
            }
        }
        board.bar = Bar { white: self.bar.black, black: self.bar.white };
        board.off = [self.off[1], self.off[0]];
        board
    }

    /// Moves a checker of `color` along `mv`. Hitting a blot sends it to the opponent's bar
    /// and returns the point it was hit on. Only the board structure is checked here, the
    /// dice are the controller's business.
    pub fn apply_move(&mut self, color: Color, mv: Move) -> Result<Option<u8>, MoveError> {
        match mv.from() {
            Position::Bar if self.bar(color) == 0 => return Err(MoveError::EmptyBar(color)),
            Position::Bar => (),
            Position::Point(from) => {
                let point = self.get_point(from).ok_or(MoveError::OutOfBounds(from))?;
                if !point.is_owned_by(color) {
                    return Err(MoveError::NoChecker(color, mv.from()));
                }
            }
            Position::Off => return Err(MoveError::NoChecker(color, Position::Off)),
        }
        match mv.to() {
            Position::Bar => return Err(MoveError::InvalidDestination(Position::Bar)),
            Position::Point(to) => {
                let point = self.get_point(to).ok_or(MoveError::OutOfBounds(to))?;
                if point.blocks(color) {
                    return Err(MoveError::Blocked(mv.to()));
                }
            }
            Position::Off => (),
        }

        match mv.from() {
            Position::Point(from) => self.points[from as usize].remove_one(),
            _ => *self.bar.slot(color) -= 1,
        }

        match mv.to() {
            Position::Point(to) => {
                let target = &mut self.points[to as usize];
                let hit = target.is_blot_against(color);
                if hit {
                    *target = Point::default();
                    *self.bar.slot(color.opposite()) += 1;
                }
                target.add_one(color);
                Ok(hit.then_some(to))
            }
            _ => {
                self.off[color as usize] += 1;
                Ok(None)
            }
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row = |indices: [u8; 6]| {
            indices
                .iter()
                .map(|&i| format!("{:>3}", self.points[i as usize].signed()))
                .collect::<Vec<_>>()
                .join(" ")
        };
        writeln!(f, " 13  14  15  16  17  18 | B |  19  20  21  22  23  24")?;
        writeln!(
            f,
            "{} | {:1} | {}",
            row([12, 13, 14, 15, 16, 17]),
            self.bar(Color::Black),
            row([18, 19, 20, 21, 22, 23])
        )?;
        writeln!(f, "========================+===+========================")?;
        writeln!(
            f,
            "{} | {:1} | {}",
            row([11, 10, 9, 8, 7, 6]),
            self.bar(Color::White),
            row([5, 4, 3, 2, 1, 0])
        )?;
        writeln!(f, " 12  11  10   9   8   7 | W |   6   5   4   3   2   1")?;
        write!(
            f,
            "off: White {}  Black {}",
            self.borne_off(Color::White),
            self.borne_off(Color::Black)
        )
    }
}
