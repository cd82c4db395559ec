//! Single-fixture driver: two innings and a winner.
//!
//! A match prepares both teams (fresh captain, fresh order lists), plays
//! one innings per side against a shared resolver whose scoreboard is reset
//! at the innings boundary, and compares totals. Level totals never fall
//! silently to either side; they walk an explicit tie ladder (one-over
//! eliminators, fewer wickets lost, seeded coin toss) and the rung that
//! settled the match is recorded on the result.

use rand::Rng;

use super::config::{SimConfig, TiePolicy};
use super::events::{NarrationSink, SimEvent};
use super::innings::InningsSimulator;
use super::outcome::OutcomeResolver;
use super::scoreboard::Scoreboard;
use crate::error::Result;
use crate::models::{Field, MatchDecision, MatchResult, MatchSide, Team};

pub struct MatchSimulator {
    config: SimConfig,
    resolver: OutcomeResolver,
}

impl MatchSimulator {
    pub fn new(field: Field, config: SimConfig) -> Result<Self> {
        field.validate()?;
        config.validate()?;
        let resolver = OutcomeResolver::new(field, &config);
        Ok(Self { config, resolver })
    }

    /// Plays one match between two prepared-on-entry teams.
    ///
    /// Captain selection and order derivation happen here, once per match,
    /// so a team can play several fixtures in a tournament without carrying
    /// stale state from the previous one.
    pub fn simulate(
        &mut self,
        team_a: &mut Team,
        team_b: &mut Team,
        rng: &mut impl Rng,
        sink: &mut dyn NarrationSink,
    ) -> Result<MatchResult> {
        team_a.prepare_for_match(rng);
        team_b.prepare_for_match(rng);
        sink.publish(SimEvent::GameStarted {
            team_a: team_a.name.clone(),
            team_b: team_b.name.clone(),
            captain_a: team_a.captain().map(|p| p.name.clone()),
            captain_b: team_b.captain().map(|p| p.name.clone()),
            overs: self.config.total_overs,
        });

        let config = self.config.clone();
        let score_a = self.play_innings(team_a, team_b, &config, rng, sink)?;
        let score_b = self.play_innings(team_b, team_a, &config, rng, sink)?;

        let (winner, decided_by) =
            self.decide_winner(team_a, team_b, score_a, score_b, rng, sink)?;
        let (winner_name, winner_score, loser_score) = match winner {
            MatchSide::TeamA => (team_a.name.clone(), score_a, score_b),
            MatchSide::TeamB => (team_b.name.clone(), score_b, score_a),
        };
        log::debug!(
            "{} beat {} {} to {} ({:?})",
            winner_name,
            if winner == MatchSide::TeamA { &team_b.name } else { &team_a.name },
            winner_score,
            loser_score,
            decided_by
        );
        sink.publish(SimEvent::MatchWon { team: winner_name.clone(), winner_score, loser_score });
        Ok(MatchResult { winner, winner_name, winner_score, loser_score, decided_by })
    }

    fn play_innings(
        &mut self,
        batting: &mut Team,
        bowling: &mut Team,
        config: &SimConfig,
        rng: &mut impl Rng,
        sink: &mut dyn NarrationSink,
    ) -> Result<Scoreboard> {
        InningsSimulator::new(batting, bowling, &mut self.resolver, config).run(rng, sink)
    }

    fn decide_winner(
        &mut self,
        team_a: &mut Team,
        team_b: &mut Team,
        score_a: Scoreboard,
        score_b: Scoreboard,
        rng: &mut impl Rng,
        sink: &mut dyn NarrationSink,
    ) -> Result<(MatchSide, MatchDecision)> {
        if score_a.runs > score_b.runs {
            return Ok((MatchSide::TeamA, MatchDecision::Runs));
        }
        if score_b.runs > score_a.runs {
            return Ok((MatchSide::TeamB, MatchDecision::Runs));
        }

        if self.config.tie_policy == TiePolicy::SuperOver {
            // One-over eliminators; the side that batted second goes first.
            let eliminator = SimConfig { total_overs: 1, ..self.config.clone() };
            for round in 0..self.config.max_super_overs {
                log::debug!("super over {} between {} and {}", round + 1, team_a.name, team_b.name);
                let so_b = self.play_innings(team_b, team_a, &eliminator, rng, sink)?;
                let so_a = self.play_innings(team_a, team_b, &eliminator, rng, sink)?;
                if so_a.runs > so_b.runs {
                    return Ok((MatchSide::TeamA, MatchDecision::SuperOver));
                }
                if so_b.runs > so_a.runs {
                    return Ok((MatchSide::TeamB, MatchDecision::SuperOver));
                }
            }
        }

        // Fewer wickets lost across the main innings.
        if score_a.wickets < score_b.wickets {
            return Ok((MatchSide::TeamA, MatchDecision::FewerWickets));
        }
        if score_b.wickets < score_a.wickets {
            return Ok((MatchSide::TeamB, MatchDecision::FewerWickets));
        }

        // Nothing separates them; settle it with the seeded toss.
        let winner = if rng.gen_bool(0.5) { MatchSide::TeamA } else { MatchSide::TeamB };
        Ok((winner, MatchDecision::CoinToss))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::events::RecordingSink;
    use crate::models::{FieldSize, Player};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn team(name: &str, batting: f32, bowling: f32, size: usize) -> Team {
        let players = (0..size)
            .map(|i| Player::new(format!("{} {}", name, i), bowling, batting, 0.5, 0.5, 0.5).unwrap())
            .collect();
        Team::new(name, players).unwrap()
    }

    fn field() -> Field {
        Field::new(FieldSize::Large, 0.7, 0.8, 0.9).unwrap()
    }

    #[test]
    fn test_higher_score_wins() {
        // A dominant batting side against a side that cannot bat at all.
        let mut strong = team("Strong", 1.0, 0.5, 8);
        let mut weak = team("Weak", 0.0, 0.0, 8);
        let mut sim = MatchSimulator::new(field(), SimConfig::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut sink = RecordingSink::new();

        let result = sim.simulate(&mut strong, &mut weak, &mut rng, &mut sink).unwrap();
        assert_eq!(result.winner, MatchSide::TeamA);
        assert_eq!(result.winner_name, "Strong");
        assert_eq!(result.decided_by, MatchDecision::Runs);
        assert!(result.winner_score.runs > result.loser_score.runs);
        assert_eq!(result.loser_score.runs, 0);
    }

    #[test]
    fn test_match_assigns_captains_per_match() {
        let mut a = team("A", 0.6, 0.5, 6);
        let mut b = team("B", 0.5, 0.6, 6);
        let mut sim = MatchSimulator::new(field(), SimConfig::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut sink = RecordingSink::new();

        sim.simulate(&mut a, &mut b, &mut rng, &mut sink).unwrap();
        assert!(a.captain().is_some());
        assert!(b.captain().is_some());
        let started = sink
            .events
            .iter()
            .find(|e| matches!(e, SimEvent::GameStarted { .. }))
            .expect("match must announce itself");
        if let SimEvent::GameStarted { captain_a, captain_b, overs, .. } = started {
            assert!(captain_a.is_some());
            assert!(captain_b.is_some());
            assert_eq!(*overs, 5);
        }
    }

    #[test]
    fn test_level_match_walks_tie_ladder_to_coin_toss() {
        // Neither side can score, so the main innings, every eliminator and
        // the wicket count all finish level and the toss must decide.
        let mut a = team("A", 0.0, 0.5, 3);
        let mut b = team("B", 0.0, 0.5, 3);
        let mut sim = MatchSimulator::new(field(), SimConfig::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(14);
        let mut sink = RecordingSink::new();

        let result = sim.simulate(&mut a, &mut b, &mut rng, &mut sink).unwrap();
        assert_eq!(result.decided_by, MatchDecision::CoinToss);
        assert_eq!(result.winner_score.runs, result.loser_score.runs);
    }

    #[test]
    fn test_fewer_wickets_policy_separates_level_scores() {
        // Both sides are bowled out for 0, but the smaller roster loses
        // fewer wickets on the way down.
        let mut a = team("A", 0.0, 0.5, 2);
        let mut b = team("B", 0.0, 0.5, 5);
        let config = SimConfig { tie_policy: TiePolicy::FewerWickets, ..SimConfig::default() };
        let mut sim = MatchSimulator::new(field(), config).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut sink = RecordingSink::new();

        let result = sim.simulate(&mut a, &mut b, &mut rng, &mut sink).unwrap();
        assert_eq!(result.winner, MatchSide::TeamA);
        assert_eq!(result.decided_by, MatchDecision::FewerWickets);
        assert_eq!(result.winner_score.wickets, 2);
        assert_eq!(result.loser_score.wickets, 5);
    }

    #[test]
    fn test_super_over_eliminators_are_one_over_each() {
        let mut a = team("A", 0.0, 0.5, 3);
        let mut b = team("B", 0.0, 0.5, 3);
        let config = SimConfig { max_super_overs: 2, ..SimConfig::default() };
        let mut sim = MatchSimulator::new(field(), config).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(14);
        let mut sink = RecordingSink::new();

        sim.simulate(&mut a, &mut b, &mut rng, &mut sink).unwrap();
        // Two main innings plus two eliminator rounds of two innings each.
        let innings = sink
            .events
            .iter()
            .filter(|e| matches!(e, SimEvent::InningsStarted { .. }))
            .count();
        assert_eq!(innings, 2 + 2 * 2);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = SimConfig { total_overs: 0, ..SimConfig::default() };
        assert!(MatchSimulator::new(field(), config).is_err());
    }
}
