use std::fmt::Display;

use rand::{Rng, random_range};

/// A roll of two dice together with how much of it has been used this turn.
/// A double grants four moves of its value, any other roll one move per die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dice {
    Double {
        value: u8,
        used: u8,
    },
    Single {
        value_1: u8,
        value_2: u8,
        used: DiceUsage,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiceUsage {
    BothAvailable,
    OnlyFirstAvailable,
    OnlySecondAvailable,
    BothUsed,
}

impl Dice {
    /// Both values must lie in `1..=6`.
    pub const fn new(a: u8, b: u8) -> Dice {
        assert!(a >= 1 && a <= 6 && b >= 1 && b <= 6, "die values must be in 1..=6");
        if a == b {
            Dice::Double { value: a, used: 0 }
        } else {
            Dice::Single { value_1: a, value_2: b, used: DiceUsage::BothAvailable }
        }
    }

    /// Like [`Dice::new`] but returns `None` for values outside `1..=6`.
    pub const fn try_new(a: u8, b: u8) -> Option<Dice> {
        if a >= 1 && a <= 6 && b >= 1 && b <= 6 {
            Some(Dice::new(a, b))
        } else {
            None
        }
    }

    pub fn roll() -> Dice {
        let a = random_range(1..=6);
        let b = random_range(1..=6);
        Dice::new(a, b)
    }

    pub fn roll_with<R: Rng + ?Sized>(rng: &mut R) -> Dice {
        let a = rng.random_range(1..=6);
        let b = rng.random_range(1..=6);
        Dice::new(a, b)
    }

    pub fn first(&self) -> u8 {
        match self {
            Dice::Double { value, .. } => *value,
            Dice::Single { value_1, .. } => *value_1,
        }
    }

    pub fn second(&self) -> u8 {
        match self {
            Dice::Double { value, .. } => *value,
            Dice::Single { value_2, .. } => *value_2,
        }
    }

    pub fn is_double(&self) -> bool {
        matches!(self, Dice::Double { .. })
    }

    pub fn is_used(&self) -> bool {
        match self {
            Dice::Double { used, .. } => *used >= 4,
            Dice::Single { used, .. } => *used == DiceUsage::BothUsed,
        }
    }

    /// Number of checker moves still granted by this roll.
    pub fn remaining(&self) -> u8 {
        match self {
            Dice::Double { used, .. } => 4u8.saturating_sub(*used),
            Dice::Single { used, .. } => match used {
                DiceUsage::BothAvailable => 2,
                DiceUsage::OnlyFirstAvailable | DiceUsage::OnlySecondAvailable => 1,
                DiceUsage::BothUsed => 0,
            },
        }
    }

    /// Distinct die values that can still be played. A double yields its value once,
    /// since every remaining use of it produces the same candidate moves.
    pub fn available(&self) -> impl Iterator<Item = u8> + use<> {
        let values = match *self {
            Dice::Double { value, used } => [(used < 4).then_some(value), None],
            Dice::Single { value_1, value_2, used } => match used {
                DiceUsage::BothAvailable => [Some(value_1), Some(value_2)],
                DiceUsage::OnlyFirstAvailable => [Some(value_1), None],
                DiceUsage::OnlySecondAvailable => [Some(value_2), None],
                DiceUsage::BothUsed => [None, None],
            },
        };
        values.into_iter().flatten()
    }

    pub fn has(&self, die: u8) -> bool {
        self.available().any(|d| d == die)
    }

    /// Returns the dice with one use of `die` consumed, or `None` if `die` is not available.
    pub fn use_die(&self, die: u8) -> Option<Dice> {
        if !self.has(die) {
            return None;
        }
        let mut new_dice = *self;
        match &mut new_dice {
            Dice::Double { used, .. } => *used += 1,
            Dice::Single { value_1, used, .. } => {
                *used = match (*used, *value_1 == die) {
                    (DiceUsage::BothAvailable, true) => DiceUsage::OnlySecondAvailable,
                    (DiceUsage::BothAvailable, false) => DiceUsage::OnlyFirstAvailable,
                    _ => DiceUsage::BothUsed,
                };
            }
        }
        Some(new_dice)
    }

    /// The same roll with nothing used yet.
    pub fn fresh(&self) -> Dice {
        Dice::new(self.first(), self.second())
    }

    /// Chance of rolling this combination, order of the dice ignored.
    pub fn probability(&self) -> f32 {
        if self.is_double() { 1.0 / 36.0 } else { 2.0 / 36.0 }
    }

    pub const ALL: [Dice; 21] = [
        Dice::new(1, 1),
        Dice::new(1, 2),
        Dice::new(1, 3),
        Dice::new(1, 4),
        Dice::new(1, 5),
        Dice::new(1, 6),
        Dice::new(2, 2),
        Dice::new(2, 3),
        Dice::new(2, 4),
        Dice::new(2, 5),
        Dice::new(2, 6),
        Dice::new(3, 3),
        Dice::new(3, 4),
        Dice::new(3, 5),
        Dice::new(3, 6),
        Dice::new(4, 4),
        Dice::new(4, 5),
        Dice::new(4, 6),
        Dice::new(5, 5),
        Dice::new(5, 6),
        Dice::new(6, 6),
    ];
}

impl Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.first(), self.second())
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_dice() {
        for i in 1..=6 {
            for j in 1..=6 {
                let mut dice = Dice::new(i, j);
                assert_eq!(dice.first(), i);
                assert_eq!(dice.second(), j);
                if i == j {
                    assert!(dice.is_double());
                    assert_eq!(dice.available().collect::<Vec<_>>(), vec![i]);
                    let mut count = 0;
                    while !dice.is_used() {
                        count += 1;
                        dice = dice.use_die(i).unwrap();
                        assert!(dice.is_double());
                    }
                    assert_eq!(count, 4);
                    assert_eq!(dice.available().count(), 0);
                } else {
                    assert!(!dice.is_double());
                    assert_eq!(dice.remaining(), 2);
                    dice = dice.use_die(i).unwrap();
                    assert_eq!(dice.available().collect::<Vec<_>>(), vec![j]);
                    assert!(dice.use_die(i).is_none());
                    dice = dice.use_die(j).unwrap();
                    assert!(dice.is_used());
                    assert_eq!(dice.remaining(), 0);
                }
            }
        }
    }

    #[test]
    fn second_die_first() {
        let dice = Dice::new(3, 5).use_die(5).unwrap();
        assert_eq!(dice.available().collect::<Vec<_>>(), vec![3]);
        assert_eq!(dice.fresh(), Dice::new(3, 5));
    }

    #[test]
    fn try_new_filters_bad_values() {
        assert_eq!(Dice::try_new(0, 3), None);
        assert_eq!(Dice::try_new(4, 7), None);
        assert_eq!(Dice::try_new(0, 0), None);
        assert_eq!(Dice::try_new(6, 6), Some(Dice::new(6, 6)));
        assert_eq!(Dice::try_new(1, 2), Some(Dice::new(1, 2)));
    }

    #[test]
    fn unknown_die_is_rejected() {
        assert!(Dice::new(2, 4).use_die(6).is_none());
    }

    #[test]
    fn test_dice_roll() {
        for _ in 1..=100 {
            let dice = Dice::roll();
            assert!(dice.first() >= 1 && dice.first() <= 6);
            assert!(dice.second() >= 1 && dice.second() <= 6);
            assert_eq!(dice.is_double(), dice.first() == dice.second());
        }
    }

    #[test]
    fn seeded_rolls_repeat() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(Dice::roll_with(&mut a), Dice::roll_with(&mut b));
        }
    }

    #[test]
    fn probabilities_sum_to_one() {
        let sum: f32 = Dice::ALL.iter().map(|d| d.probability()).sum();
        assert!((sum - 1.0).abs() < 1e-5);
    }
}
