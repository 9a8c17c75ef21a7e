use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::battle::{Battle, BattleState};
use crate::dex::Dex;
use crate::roster::Roster;
use crate::Dice;

const DEFAULT_TRIALS: u32 = 1000;
const DEFAULT_BATTLES_PER_TRIAL: u32 = 10;
const DEFAULT_SEED: u64 = 1;

fn default_trials() -> u32 {
    DEFAULT_TRIALS
}

fn default_battles_per_trial() -> u32 {
    DEFAULT_BATTLES_PER_TRIAL
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EvalConfig {
    /// Number of random opponent rosters.
    #[serde(default = "default_trials")]
    pub trials: u32,
    /// Battles fought against each opponent.
    #[serde(default = "default_battles_per_trial")]
    pub battles_per_trial: u32,
    /// Trial `i` draws from its own stream seeded with `seed + i`.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            battles_per_trial: DEFAULT_BATTLES_PER_TRIAL,
            seed: DEFAULT_SEED,
        }
    }
}

impl EvalConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("failed to parse evaluation config YAML")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EvalSummary {
    pub trials: u32,
    pub battles: u32,
    pub wins: u32,
    pub stalemates: u32,
    pub win_rate: f64,
}

/// Pit `candidate` (side A) against `cfg.trials` random rosters,
/// `cfg.battles_per_trial` battles each.
pub fn evaluate_roster(dex: &Dex, candidate: &mut Roster, cfg: &EvalConfig) -> Result<EvalSummary> {
    let tally = run_trials(dex, candidate, cfg);
    // The candidate leaves healthy whether or not a trial failed.
    candidate.reset();
    let (wins, stalemates, battles) = tally?;

    let win_rate = if battles == 0 { 0.0 } else { f64::from(wins) / f64::from(battles) };
    info!(
        "[EVAL] trials={} battles={} wins={} stalemates={} win_rate={:.3}",
        cfg.trials, battles, wins, stalemates, win_rate
    );
    Ok(EvalSummary { trials: cfg.trials, battles, wins, stalemates, win_rate })
}

/// Wins, stalemates and battles fought across every trial.
fn run_trials(dex: &Dex, candidate: &mut Roster, cfg: &EvalConfig) -> Result<(u32, u32, u32)> {
    let mut wins = 0u32;
    let mut stalemates = 0u32;
    let mut battles = 0u32;

    for i in 0..cfg.trials {
        let mut dice = Dice::from_seed(cfg.seed.wrapping_add(u64::from(i)));
        let mut opponent =
            Roster::random(dex, &mut dice).with_context(|| format!("trial {}: opponent", i))?;
        for _ in 0..cfg.battles_per_trial {
            let mut battle = Battle::new(candidate, &mut opponent, &mut dice);
            match battle.resolve(&mut dice) {
                BattleState::SideAWon => wins += 1,
                BattleState::Stalemate => stalemates += 1,
                _ => {}
            }
            battles += 1;
        }
    }
    Ok((wins, stalemates, battles))
}

/// Draw `count` random rosters from a single stream seeded with `seed`.
pub fn generate_random_rosters(dex: &Dex, count: usize, seed: u64) -> Result<Vec<Roster>> {
    let mut dice = Dice::from_seed(seed);
    (0..count)
        .map(|i| Roster::random(dex, &mut dice).with_context(|| format!("roster {}", i)))
        .collect()
}
