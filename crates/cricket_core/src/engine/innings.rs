//! Innings driver.
//!
//! One innings is an explicit state machine stepped ball by ball:
//!
//! | State              | On                      | Next state         |
//! |--------------------|-------------------------|--------------------|
//! | `AwaitingDelivery` | runs, over not done     | `AwaitingDelivery` |
//! | `AwaitingDelivery` | runs, last ball of over | `OverComplete`     |
//! | `AwaitingDelivery` | wicket                  | `BatsmanDismissed` |
//! | `BatsmanDismissed` | next man in             | `AwaitingDelivery` (or `OverComplete` when the wicket fell on the last ball) |
//! | `BatsmanDismissed` | order exhausted         | `InningsComplete`  |
//! | `OverComplete`     | overs remain            | `AwaitingDelivery` (fresh bowler pick) |
//! | `OverComplete`     | final over bowled       | `InningsComplete`  |
//!
//! The innings ends when the configured overs are bowled or the batting
//! order is exhausted, whichever comes first. A dismissal ball still counts
//! toward the over. An empty batting roster ends the innings immediately at
//! zero; an empty bowling rotation is a fail-fast configuration error.

use rand::Rng;

use super::config::SimConfig;
use super::events::{NarrationSink, SimEvent};
use super::outcome::{DeliveryOutcome, OutcomeResolver};
use super::scoreboard::Scoreboard;
use crate::error::Result;
use crate::models::Team;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InningsPhase {
    AwaitingDelivery,
    BatsmanDismissed,
    OverComplete,
    InningsComplete,
}

pub struct InningsSimulator<'a> {
    batting: &'a mut Team,
    bowling: &'a mut Team,
    resolver: &'a mut OutcomeResolver,
    config: &'a SimConfig,
    phase: InningsPhase,
    striker: Option<usize>,
    bowler: Option<usize>,
    balls_in_over: u32,
}

impl<'a> InningsSimulator<'a> {
    pub fn new(
        batting: &'a mut Team,
        bowling: &'a mut Team,
        resolver: &'a mut OutcomeResolver,
        config: &'a SimConfig,
    ) -> Self {
        Self {
            batting,
            bowling,
            resolver,
            config,
            phase: InningsPhase::InningsComplete,
            striker: None,
            bowler: None,
            balls_in_over: 0,
        }
    }

    pub fn phase(&self) -> InningsPhase {
        self.phase
    }

    /// Plays the innings to completion and returns the final scoreboard.
    pub fn run(&mut self, rng: &mut impl Rng, sink: &mut dyn NarrationSink) -> Result<Scoreboard> {
        self.init(rng, sink)?;
        while self.phase != InningsPhase::InningsComplete {
            self.step(rng, sink)?;
        }
        Ok(self.resolver.scoreboard())
    }

    fn init(&mut self, rng: &mut impl Rng, sink: &mut dyn NarrationSink) -> Result<()> {
        self.resolver.reset_scoreboard();
        self.batting.reset_batting_order();
        self.bowling.derive_bowlers();
        self.balls_in_over = 0;
        sink.publish(SimEvent::InningsStarted { team: self.batting.name.clone() });

        self.bowler = Some(self.bowling.choose_bowler(rng)?);
        self.striker = self.batting.next_batter();
        self.phase = InningsPhase::AwaitingDelivery;
        if self.striker.is_none() {
            // Nobody to send in: the innings is over before a ball is bowled.
            self.complete(sink);
        }
        Ok(())
    }

    /// Advances the machine by one transition.
    fn step(&mut self, rng: &mut impl Rng, sink: &mut dyn NarrationSink) -> Result<()> {
        match self.phase {
            InningsPhase::AwaitingDelivery => {
                self.deliver(rng, sink);
                Ok(())
            }
            InningsPhase::BatsmanDismissed => {
                self.replace_batsman(sink);
                Ok(())
            }
            InningsPhase::OverComplete => self.close_over(rng, sink),
            InningsPhase::InningsComplete => Ok(()),
        }
    }

    fn deliver(&mut self, rng: &mut impl Rng, sink: &mut dyn NarrationSink) {
        let (Some(striker), Some(bowler)) = (self.striker, self.bowler) else {
            self.complete(sink);
            return;
        };
        let batsman = &self.batting.players[striker];
        let bowler = &self.bowling.players[bowler];
        let outcome = self.resolver.resolve_delivery(batsman, bowler, rng);
        self.balls_in_over += 1;
        sink.publish(SimEvent::BallPlayed {
            over: self.resolver.scoreboard().overs_completed,
            ball: self.balls_in_over,
            batsman: batsman.name.clone(),
            bowler: bowler.name.clone(),
            outcome,
        });

        match outcome {
            DeliveryOutcome::Dismissed => {
                self.resolver.add_wicket();
                self.phase = InningsPhase::BatsmanDismissed;
            }
            DeliveryOutcome::Runs(runs) => {
                self.resolver.add_runs(u32::from(runs));
                self.phase = if self.balls_in_over >= self.config.balls_per_over {
                    InningsPhase::OverComplete
                } else {
                    InningsPhase::AwaitingDelivery
                };
            }
        }
    }

    fn replace_batsman(&mut self, sink: &mut dyn NarrationSink) {
        let Some(out_idx) = self.striker else {
            self.complete(sink);
            return;
        };
        let batsman = self.batting.players[out_idx].name.clone();
        self.striker = self.batting.next_batter();
        let new_batsman = self.striker.map(|idx| self.batting.players[idx].name.clone());
        sink.publish(SimEvent::WicketFallen {
            batsman,
            wickets: self.resolver.scoreboard().wickets,
            new_batsman,
        });

        if self.striker.is_none() {
            // All out: no batters remain to send in.
            self.complete(sink);
        } else if self.balls_in_over >= self.config.balls_per_over {
            self.phase = InningsPhase::OverComplete;
        } else {
            self.phase = InningsPhase::AwaitingDelivery;
        }
    }

    fn close_over(&mut self, rng: &mut impl Rng, sink: &mut dyn NarrationSink) -> Result<()> {
        self.resolver.add_over();
        self.balls_in_over = 0;
        let completed = self.resolver.scoreboard().overs_completed;
        sink.publish(SimEvent::OverCompleted { over: completed });

        if completed >= self.config.total_overs {
            self.complete(sink);
        } else {
            // Fresh pick each over; the same bowler may go again.
            self.bowler = Some(self.bowling.choose_bowler(rng)?);
            self.phase = InningsPhase::AwaitingDelivery;
        }
        Ok(())
    }

    fn complete(&mut self, sink: &mut dyn NarrationSink) {
        if self.phase != InningsPhase::InningsComplete {
            self.phase = InningsPhase::InningsComplete;
            let score = self.resolver.scoreboard();
            log::debug!("innings complete: {} {}", self.batting.name, score);
            sink.publish(SimEvent::InningsEnded { team: self.batting.name.clone(), score });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::events::RecordingSink;
    use crate::models::{Field, FieldSize, Player};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn team(name: &str, batting: f32, bowling: f32, size: usize) -> Team {
        let players = (0..size)
            .map(|i| Player::new(format!("{} {}", name, i), bowling, batting, 0.5, 0.5, 0.5).unwrap())
            .collect();
        Team::new(name, players).unwrap()
    }

    fn resolver() -> OutcomeResolver {
        let field = Field::new(FieldSize::Large, 0.7, 0.8, 0.9).unwrap();
        OutcomeResolver::new(field, &SimConfig::default())
    }

    fn run_innings(
        batting: &mut Team,
        bowling: &mut Team,
        config: &SimConfig,
        seed: u64,
    ) -> (Scoreboard, Vec<SimEvent>) {
        let mut resolver = resolver();
        let mut sink = RecordingSink::new();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let score = InningsSimulator::new(batting, bowling, &mut resolver, config)
            .run(&mut rng, &mut sink)
            .unwrap();
        (score, sink.events)
    }

    #[test]
    fn test_innings_never_exceeds_configured_overs() {
        let mut batting = team("Bat", 0.95, 0.1, 10);
        let mut bowling = team("Bowl", 0.1, 0.3, 10);
        let config = SimConfig::default();
        let (score, events) = run_innings(&mut batting, &mut bowling, &config, 11);

        assert!(score.overs_completed <= config.total_overs);
        let balls = events.iter().filter(|e| matches!(e, SimEvent::BallPlayed { .. })).count();
        assert!(
            balls as u32 <= config.balls_per_over * config.total_overs,
            "Too many deliveries: {}",
            balls
        );
    }

    #[test]
    fn test_all_dismissed_innings_ends_at_order_exhaustion() {
        // Batting skill 0 loses every delivery, so the side is bowled out
        // for 0 with one wicket per roster member.
        let mut batting = team("Bat", 0.0, 0.5, 4);
        let mut bowling = team("Bowl", 0.5, 0.9, 4);
        let config = SimConfig { total_overs: 50, ..SimConfig::default() };
        let (score, events) = run_innings(&mut batting, &mut bowling, &config, 3);

        assert_eq!(score.runs, 0);
        assert_eq!(score.wickets, 4);
        let last = events.last().unwrap();
        assert!(matches!(last, SimEvent::InningsEnded { .. }));
        let all_out = events
            .iter()
            .filter_map(|e| match e {
                SimEvent::WicketFallen { new_batsman, .. } => Some(new_batsman),
                _ => None,
            })
            .last()
            .unwrap();
        assert!(all_out.is_none(), "Final wicket must report no incoming batsman");
    }

    #[test]
    fn test_empty_batting_roster_scores_zero_without_crashing() {
        let mut batting = Team::new("Ghosts", Vec::new()).unwrap();
        let mut bowling = team("Bowl", 0.5, 0.6, 5);
        let config = SimConfig::default();
        let mut resolver = resolver();
        let mut sink = RecordingSink::new();
        let mut rng = ChaCha8Rng::seed_from_u64(8);

        let mut sim = InningsSimulator::new(&mut batting, &mut bowling, &mut resolver, &config);
        let score = sim.run(&mut rng, &mut sink).unwrap();

        assert_eq!(score, Scoreboard::new());
        assert_eq!(sim.phase(), InningsPhase::InningsComplete);
        assert!(matches!(sink.events.last().unwrap(), SimEvent::InningsEnded { .. }));
        assert!(!sink.events.iter().any(|e| matches!(e, SimEvent::BallPlayed { .. })));
    }

    #[test]
    fn test_empty_bowling_rotation_fails_fast() {
        let mut batting = team("Bat", 0.6, 0.5, 5);
        let mut bowling = Team::new("Ghosts", Vec::new()).unwrap();
        let mut resolver = resolver();
        let config = SimConfig::default();
        let mut sink = RecordingSink::new();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let err = InningsSimulator::new(&mut batting, &mut bowling, &mut resolver, &config)
            .run(&mut rng, &mut sink)
            .unwrap_err();
        assert!(matches!(err, crate::error::SimError::NoBowlersAvailable { .. }));
    }

    #[test]
    fn test_final_score_equals_sum_of_credited_runs() {
        let mut batting = team("Bat", 0.9, 0.1, 8);
        let mut bowling = team("Bowl", 0.1, 0.4, 8);
        let config = SimConfig::default();
        let (score, events) = run_innings(&mut batting, &mut bowling, &config, 21);

        let credited: u32 = events
            .iter()
            .filter_map(|e| match e {
                SimEvent::BallPlayed { outcome, .. } => Some(outcome.runs()),
                _ => None,
            })
            .sum();
        assert_eq!(score.runs, credited, "Scoreboard must equal the runs credited ball by ball");
        match events.last().unwrap() {
            SimEvent::InningsEnded { score: reported, .. } => assert_eq!(*reported, score),
            other => panic!("Innings must end with its summary event, got {:?}", other),
        }
    }

    #[test]
    fn test_over_boundary_rotates_after_configured_balls() {
        // A batting side that never loses a wicket plays full overs, so
        // every over must contain exactly balls_per_over deliveries.
        let mut batting = team("Bat", 1.0, 0.1, 5);
        let mut bowling = team("Bowl", 0.1, 0.0, 5);
        let config = SimConfig { total_overs: 3, ..SimConfig::default() };
        let (score, events) = run_innings(&mut batting, &mut bowling, &config, 17);

        assert_eq!(score.overs_completed, 3);
        let balls = events.iter().filter(|e| matches!(e, SimEvent::BallPlayed { .. })).count();
        assert_eq!(balls as u32, config.balls_per_over * 3);
        let overs = events.iter().filter(|e| matches!(e, SimEvent::OverCompleted { .. })).count();
        assert_eq!(overs, 3);
    }

    #[test]
    fn test_scoreboard_resets_between_innings() {
        let mut batting = team("Bat", 0.9, 0.2, 6);
        let mut bowling = team("Bowl", 0.2, 0.5, 6);
        let config = SimConfig::default();
        let mut resolver = resolver();
        let mut sink = RecordingSink::new();
        let mut rng = ChaCha8Rng::seed_from_u64(33);

        let first = InningsSimulator::new(&mut batting, &mut bowling, &mut resolver, &config)
            .run(&mut rng, &mut sink)
            .unwrap();
        let second_events_start = sink.events.len();
        let second = InningsSimulator::new(&mut bowling, &mut batting, &mut resolver, &config)
            .run(&mut rng, &mut sink)
            .unwrap();

        assert!(first.runs > 0, "Seeded first innings should have scored");
        // The second innings opens from zero: its final total must equal the
        // runs credited by its own deliveries, untainted by the first total.
        let second_ball_runs: u32 = sink.events[second_events_start..]
            .iter()
            .filter_map(|e| match e {
                SimEvent::BallPlayed { outcome, .. } => Some(outcome.runs()),
                _ => None,
            })
            .sum();
        assert_eq!(second.runs, second_ball_runs);
    }
}
