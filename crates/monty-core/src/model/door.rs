use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Door {
    One = 1,
    Two = 2,
    Three = 3,
}

/// A door number outside 1..=3 reached a typed boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDoor(pub u8);

impl Door {
    pub const ALL: [Door; 3] = [Door::One, Door::Two, Door::Three];

    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Door::One),
            2 => Some(Door::Two),
            3 => Some(Door::Three),
            _ => None,
        }
    }

    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based position for indexing a board.
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Uniform pick among the three doors.
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Door {
        Self::ALL[rng.gen_range(0..3)]
    }

    /// The single door that is neither `a` nor `b`, or `None` when they coincide.
    pub const fn remaining(a: Door, b: Door) -> Option<Door> {
        if a.number() == b.number() {
            return None;
        }
        // The three numbers sum to 6.
        Self::from_number(6 - a.number() - b.number())
    }

    /// The two doors other than `self`, in ascending order.
    pub fn others(self) -> [Door; 2] {
        match self {
            Door::One => [Door::Two, Door::Three],
            Door::Two => [Door::One, Door::Three],
            Door::Three => [Door::One, Door::Two],
        }
    }
}

impl TryFrom<u8> for Door {
    type Error = InvalidDoor;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Door::from_number(number).ok_or(InvalidDoor(number))
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl fmt::Display for InvalidDoor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid door number {} (expected 1, 2, or 3)", self.0)
    }
}

impl std::error::Error for InvalidDoor {}

#[cfg(test)]
mod tests {
    use super::{Door, InvalidDoor};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn number_roundtrip() {
        for door in Door::ALL {
            assert_eq!(Door::from_number(door.number()), Some(door));
        }
        assert_eq!(Door::from_number(0), None);
        assert_eq!(Door::from_number(4), None);
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert_eq!(Door::try_from(2), Ok(Door::Two));
        assert_eq!(Door::try_from(7), Err(InvalidDoor(7)));
    }

    #[test]
    fn index_is_zero_based() {
        assert_eq!(Door::One.index(), 0);
        assert_eq!(Door::Three.index(), 2);
    }

    #[test]
    fn remaining_is_the_third_door() {
        assert_eq!(Door::remaining(Door::One, Door::Two), Some(Door::Three));
        assert_eq!(Door::remaining(Door::Three, Door::One), Some(Door::Two));
        assert_eq!(Door::remaining(Door::Two, Door::Two), None);
    }

    #[test]
    fn others_excludes_self() {
        assert_eq!(Door::Two.others(), [Door::One, Door::Three]);
    }

    #[test]
    fn random_covers_every_door() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..100 {
            seen[Door::random(&mut rng).index()] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }
}
