//! Console commentary.
//!
//! Renders the engine's event stream as ball-by-ball commentary. Purely an
//! observer: nothing here feeds back into the simulation.

use cricket_core::{NarrationSink, SimEvent};

const TROPHY: &str = r#"
        ___________
       '._==_==_=_.'
       .-\:      /-.
      | (|:.     |) |
       '-|:.     |-'
         \::.    /
          '::. .'
            ) (
          _.' '._
         `'''''''`
"#;

pub struct ConsoleNarrator {
    /// When false, per-ball and per-over lines are suppressed and only
    /// innings totals and results are printed.
    ball_by_ball: bool,
}

impl ConsoleNarrator {
    pub fn new(ball_by_ball: bool) -> Self {
        Self { ball_by_ball }
    }
}

impl NarrationSink for ConsoleNarrator {
    fn publish(&mut self, event: SimEvent) {
        match event {
            SimEvent::GameStarted { team_a, team_b, captain_a, captain_b, overs } => {
                println!("\n--------- Game Information ---------");
                println!("{} vs {}", team_a, team_b);
                println!(
                    "Captains: {} / {}",
                    captain_a.as_deref().unwrap_or("-"),
                    captain_b.as_deref().unwrap_or("-")
                );
                println!("Overs: {}", overs);
                println!("------------------------------------");
            }
            SimEvent::InningsStarted { team } => {
                println!("\n{} batting:", team);
            }
            SimEvent::BallPlayed { over, ball, batsman, bowler, outcome } => {
                if self.ball_by_ball {
                    println!("  {}.{}: {} to {}, {}", over, ball, bowler, batsman, outcome);
                }
            }
            SimEvent::WicketFallen { batsman, wickets, new_batsman } => {
                if self.ball_by_ball {
                    println!("  {} is OUT! Wickets: {}", batsman, wickets);
                    match new_batsman {
                        Some(next) => println!("  New batsman {} is in", next),
                        None => println!("  All out!"),
                    }
                }
            }
            SimEvent::OverCompleted { over } => {
                if self.ball_by_ball {
                    println!("  End of over {}", over);
                }
            }
            SimEvent::InningsEnded { team, score } => {
                println!("{} finish on {}", team, score);
            }
            SimEvent::MatchWon { team, winner_score, loser_score } => {
                println!("\n{} win, {} to {}", team, winner_score, loser_score);
            }
            SimEvent::TournamentWon { team, captain } => {
                println!("\n--------------- Winner ---------------");
                println!("{} are the tournament champions!", team);
                if let Some(captain) = captain {
                    println!("Winning captain: {}", captain);
                }
                println!("{}", TROPHY);
            }
        }
    }
}
