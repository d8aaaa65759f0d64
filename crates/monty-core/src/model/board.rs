use crate::model::door::Door;
use core::fmt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prize {
    Goat,
    Car,
}

impl Prize {
    pub const fn is_car(self) -> bool {
        matches!(self, Prize::Car)
    }
}

impl fmt::Display for Prize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Prize::Goat => "goat",
            Prize::Car => "car",
        };
        f.write_str(label)
    }
}

/// Hidden assignment of one car and two goats to the three doors for one round.
/// Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameBoard {
    prizes: [Prize; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The arrangement did not hold exactly one car.
    CarCount(usize),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::CarCount(found) => {
                write!(f, "board must hold exactly one car, found {found}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

impl GameBoard {
    /// Board with the car behind the given door.
    pub const fn with_car(door: Door) -> Self {
        let mut prizes = [Prize::Goat; 3];
        prizes[door.index()] = Prize::Car;
        Self { prizes }
    }

    /// Uniformly random board: each door equally likely to hold the car.
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_car(Door::random(rng))
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random(&mut rng)
    }

    /// Validating constructor for externally supplied arrangements.
    pub fn from_prizes(prizes: [Prize; 3]) -> Result<Self, BoardError> {
        let cars = prizes.iter().filter(|prize| prize.is_car()).count();
        if cars != 1 {
            return Err(BoardError::CarCount(cars));
        }
        Ok(Self { prizes })
    }

    pub const fn prize(&self, door: Door) -> Prize {
        self.prizes[door.index()]
    }

    pub fn car_door(&self) -> Door {
        // Exactly one car by construction.
        Door::ALL
            .into_iter()
            .find(|door| self.prize(*door).is_car())
            .unwrap_or(Door::One)
    }

    pub fn goat_doors(&self) -> [Door; 2] {
        self.car_door().others()
    }
}
