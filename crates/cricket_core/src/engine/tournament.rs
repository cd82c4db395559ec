//! Four-team knockout bracket.
//!
//! The bracket is fixed: a qualification round pairing the first two and
//! the last two entrants, then a final between the two winners. The two
//! qualification matches are independent but run sequentially; the whole
//! tournament costs so little that parallelism buys nothing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::config::SimConfig;
use super::events::{NarrationSink, SimEvent};
use super::match_sim::MatchSimulator;
use crate::error::Result;
use crate::models::{Field, MatchSide, Team, TournamentResult};

/// Everything a tournament run needs, fixed up front.
///
/// The seed is the single source of randomness: the same plan replays the
/// same tournament ball for ball.
#[derive(Debug, Clone)]
pub struct TournamentPlan {
    pub teams: [Team; 4],
    pub field: Field,
    pub config: SimConfig,
    pub seed: u64,
}

pub struct TournamentSimulator {
    plan: TournamentPlan,
}

impl TournamentSimulator {
    pub fn new(plan: TournamentPlan) -> Result<Self> {
        plan.field.validate()?;
        plan.config.validate()?;
        for team in &plan.teams {
            for player in &team.players {
                player.validate()?;
            }
        }
        Ok(Self { plan })
    }

    /// Runs qualification and final, returning the champion and captain.
    pub fn run(mut self, sink: &mut dyn NarrationSink) -> Result<TournamentResult> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.plan.seed);
        let mut sim = MatchSimulator::new(self.plan.field, self.plan.config.clone())?;

        log::info!("qualification round");
        let [team_1, team_2, team_3, team_4] = &mut self.plan.teams;
        let first = sim.simulate(team_1, team_2, &mut rng, sink)?;
        let second = sim.simulate(team_3, team_4, &mut rng, sink)?;

        let finalist_a = match first.winner {
            MatchSide::TeamA => 0,
            MatchSide::TeamB => 1,
        };
        let finalist_b = match second.winner {
            MatchSide::TeamA => 2,
            MatchSide::TeamB => 3,
        };

        log::info!(
            "final: {} vs {}",
            self.plan.teams[finalist_a].name,
            self.plan.teams[finalist_b].name
        );
        // finalist_a is always in the left half of the bracket.
        let (left, right) = self.plan.teams.split_at_mut(finalist_b);
        let final_result = sim.simulate(&mut left[finalist_a], &mut right[0], &mut rng, sink)?;

        let champion_idx = match final_result.winner {
            MatchSide::TeamA => finalist_a,
            MatchSide::TeamB => finalist_b,
        };
        let champion = self.plan.teams[champion_idx].clone();
        let captain = champion.captain().cloned();
        log::info!("{} win the tournament", champion.name);
        sink.publish(SimEvent::TournamentWon {
            team: champion.name.clone(),
            captain: captain.as_ref().map(|p| p.name.clone()),
        });
        Ok(TournamentResult { champion, captain })
    }
}
