use crate::game::host::open_goat_door;
use crate::model::board::GameBoard;
use crate::model::door::Door;
use crate::model::outcome::Outcome;
use crate::model::strategy::Strategy;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

/// Outcome of one strategy within a paired round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub strategy: Strategy,
    pub outcome: Outcome,
}

/// One fully played round: both strategies evaluated against the same board,
/// the same initial pick, and the same host reveal, so the comparison is paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayedRound {
    board: GameBoard,
    initial_pick: Door,
    opened_door: Door,
    results: [RoundResult; 2],
}

impl PlayedRound {
    pub const fn board(&self) -> &GameBoard {
        &self.board
    }

    pub const fn initial_pick(&self) -> Door {
        self.initial_pick
    }

    pub const fn opened_door(&self) -> Door {
        self.opened_door
    }

    pub const fn results(&self) -> &[RoundResult; 2] {
        &self.results
    }

    pub fn outcome(&self, strategy: Strategy) -> Outcome {
        match strategy {
            Strategy::Stay => self.results[0].outcome,
            Strategy::Switch => self.results[1].outcome,
        }
    }
}

/// Play one paired round: fresh board, one shared initial pick, one shared
/// host reveal, then judge both strategies.
pub fn play_round<R: rand::Rng + ?Sized>(rng: &mut R) -> PlayedRound {
    let board = GameBoard::random(rng);
    let initial_pick = Door::random(rng);
    let opened_door = open_goat_door(&board, initial_pick, rng);

    let results = Strategy::ALL.map(|strategy| {
        let final_pick = strategy.final_pick(initial_pick, opened_door);
        RoundResult {
            strategy,
            outcome: Outcome::judge(final_pick, &board),
        }
    });

    PlayedRound {
        board,
        initial_pick,
        opened_door,
        results,
    }
}

pub fn play_round_with_seed(seed: u64) -> PlayedRound {
    let mut rng = StdRng::seed_from_u64(seed);
    play_round(&mut rng)
}
