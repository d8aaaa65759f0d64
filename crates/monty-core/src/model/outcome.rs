use crate::model::board::GameBoard;
use crate::model::door::Door;
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    /// Classify a final pick against the board: the car wins, a goat loses.
    pub fn judge(final_pick: Door, board: &GameBoard) -> Outcome {
        if board.prize(final_pick).is_car() {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    pub const fn is_win(self) -> bool {
        matches!(self, Outcome::Win)
    }

    pub const fn opposite(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Win => "WIN",
            Outcome::Lose => "LOSE",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::Outcome;
    use crate::model::board::GameBoard;
    use crate::model::door::Door;

    #[test]
    fn car_pick_wins_goat_pick_loses() {
        let board = GameBoard::with_car(Door::Two);
        assert_eq!(Outcome::judge(Door::Two, &board), Outcome::Win);
        assert_eq!(Outcome::judge(Door::One, &board), Outcome::Lose);
        assert_eq!(Outcome::judge(Door::Three, &board), Outcome::Lose);
    }

    #[test]
    fn opposite_flips() {
        assert_eq!(Outcome::Win.opposite(), Outcome::Lose);
        assert_eq!(Outcome::Lose.opposite(), Outcome::Win);
    }
}
