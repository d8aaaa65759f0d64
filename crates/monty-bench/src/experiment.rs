use monty_core::game::round::{PlayedRound, play_round};
use monty_core::model::strategy::Strategy;
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};

const CONFIDENCE_Z: f64 = 1.96; // 95% CI

/// Runs N paired rounds from one seed and aggregates per-strategy tallies.
pub struct ExperimentRunner {
    trials: usize,
    seed: u64,
}

/// Aggregated tally for one strategy across the whole experiment.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyReport {
    pub strategy: Strategy,
    pub rounds: usize,
    pub wins: usize,
    pub losses: usize,
    /// `None` when no rounds were played.
    pub win_rate: Option<f64>,
    /// Normal-approximation 95% interval on the win rate.
    pub ci95: Option<(f64, f64)>,
    /// Two-sided p-value of the win count against even odds.
    pub p_value_vs_even: Option<f64>,
}

/// Structured result of a full experiment: per-strategy summaries plus the
/// ordered round log for reproducibility.
#[derive(Debug, Clone, Serialize)]
pub struct TrialReport {
    pub trials: usize,
    pub seed: u64,
    pub strategies: Vec<StrategyReport>,
    pub rounds: Vec<PlayedRound>,
}

impl TrialReport {
    pub fn is_empty(&self) -> bool {
        self.trials == 0
    }

    pub fn strategy(&self, strategy: Strategy) -> Option<&StrategyReport> {
        self.strategies.iter().find(|s| s.strategy == strategy)
    }
}

impl ExperimentRunner {
    pub fn new(trials: usize, seed: u64) -> Self {
        Self { trials, seed }
    }

    /// Execute the experiment. A zero trial count yields an empty report with
    /// `win_rate: None` per strategy rather than an error.
    pub fn run(&self) -> TrialReport {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut rounds = Vec::with_capacity(self.trials);
        let mut tallies = Strategy::ALL.map(StrategyTally::new);

        for round_index in 0..self.trials {
            let round = play_round(&mut rng);
            for (tally, result) in tallies.iter_mut().zip(round.results()) {
                tally.record(result.outcome.is_win());
            }

            tracing::debug!(
                round_index,
                car = %round.board().car_door(),
                pick = %round.initial_pick(),
                opened = %round.opened_door(),
                stay = %round.outcome(Strategy::Stay),
                switch = %round.outcome(Strategy::Switch),
                "round played"
            );

            rounds.push(round);
        }

        let strategies: Vec<StrategyReport> =
            tallies.into_iter().map(StrategyTally::into_report).collect();

        for report in &strategies {
            tracing::info!(
                strategy = %report.strategy,
                rounds = report.rounds,
                wins = report.wins,
                win_rate = report.win_rate,
                "strategy summary"
            );
        }

        TrialReport {
            trials: self.trials,
            seed: self.seed,
            strategies,
            rounds,
        }
    }
}

struct StrategyTally {
    strategy: Strategy,
    wins: usize,
    losses: usize,
}

impl StrategyTally {
    fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            wins: 0,
            losses: 0,
        }
    }

    fn record(&mut self, won: bool) {
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    fn into_report(self) -> StrategyReport {
        let rounds = self.wins + self.losses;
        let win_rate = if rounds == 0 {
            None
        } else {
            Some(self.wins as f64 / rounds as f64)
        };

        let ci95 = win_rate.map(|p| {
            let half_width = CONFIDENCE_Z * (p * (1.0 - p) / rounds as f64).sqrt();
            ((p - half_width).max(0.0), (p + half_width).min(1.0))
        });

        StrategyReport {
            strategy: self.strategy,
            rounds,
            wins: self.wins,
            losses: self.losses,
            win_rate,
            ci95,
            p_value_vs_even: even_odds_p_value(self.wins, rounds),
        }
    }
}

/// Two-sided normal-approximation test of `wins` out of `rounds` against
/// p = 0.5. `None` when no rounds were played.
fn even_odds_p_value(wins: usize, rounds: usize) -> Option<f64> {
    if rounds == 0 {
        return None;
    }

    let n = rounds as f64;
    let z = (wins as f64 - n / 2.0) / (n / 4.0).sqrt();
    let normal = Normal::new(0.0, 1.0).unwrap();
    let p = 2.0 * (1.0 - normal.cdf(z.abs()));
    Some(p.clamp(0.0, 1.0))
}
