//! Sample tournament data.
//!
//! Four national squads with uniform-random skill profiles, generated from
//! the run seed so a whole CLI invocation replays exactly.

use anyhow::Result;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use cricket_core::{Field, FieldSize, Player, Team};

const INDIA: [&str; 10] = [
    "Virat Kohli",
    "Rohit Sharma",
    "Jasprit Bumrah",
    "Ravindra Jadeja",
    "Shikhar Dhawan",
    "KL Rahul",
    "Hardik Pandya",
    "Yuzvendra Chahal",
    "Bhuvneshwar Kumar",
    "Mohammed Shami",
];

const ENGLAND: [&str; 10] = [
    "Joe Root",
    "Ben Stokes",
    "Jofra Archer",
    "Jos Buttler",
    "Jonny Bairstow",
    "Eoin Morgan",
    "Chris Woakes",
    "Mark Wood",
    "Adil Rashid",
    "Sam Curran",
];

const AUSTRALIA: [&str; 10] = [
    "Steve Smith",
    "David Warner",
    "Pat Cummins",
    "Glenn Maxwell",
    "Mitchell Starc",
    "Aaron Finch",
    "Adam Zampa",
    "Matthew Wade",
    "Josh Hazlewood",
    "Alex Carey",
];

const PAKISTAN: [&str; 10] = [
    "Babar Azam",
    "Shaheen Afridi",
    "Shadab Khan",
    "Fakhar Zaman",
    "Mohammad Rizwan",
    "Imad Wasim",
    "Hassan Ali",
    "Sarfaraz Ahmed",
    "Wahab Riaz",
    "Haris Rauf",
];

/// One skill rating rounded to a single decimal, like a scouting report.
fn rating(rng: &mut ChaCha8Rng) -> f32 {
    (rng.gen::<f32>() * 10.0).round() / 10.0
}

fn squad(name: &str, player_names: &[&str], rng: &mut ChaCha8Rng) -> Result<Team> {
    let players = player_names
        .iter()
        .map(|player| {
            Player::new(
                *player,
                rating(rng),
                rating(rng),
                rating(rng),
                rating(rng),
                rating(rng),
            )
        })
        .collect::<cricket_core::Result<Vec<_>>>()?;
    Ok(Team::new(name, players)?)
}

/// The four entrants, in bracket order.
pub fn sample_teams(rng: &mut ChaCha8Rng) -> Result<[Team; 4]> {
    Ok([
        squad("India", &INDIA, rng)?,
        squad("England", &ENGLAND, rng)?,
        squad("Australia", &AUSTRALIA, rng)?,
        squad("Pakistan", &PAKISTAN, rng)?,
    ])
}

/// A large ground with lively support and a true pitch.
pub fn sample_field() -> Result<Field> {
    Ok(Field::new(FieldSize::Large, 0.7, 0.8, 0.9)?)
}
