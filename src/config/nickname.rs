//! Default nickname selection.
//!
//! Uses the login name from `$USER` when available. Otherwise generates a
//! nickname in the format `AdjectiveNounNN` (e.g. `NeonFox42`).

use rand::RngExt;

const ADJECTIVES: &[&str] = &[
    "Shadow", "Neon", "Cyber", "Lunar", "Solar", "Frost", "Storm", "Pixel", "Rusty", "Iron",
    "Salty", "Tidal", "Coral", "Silent", "Rapid", "Cobalt",
];

const NOUNS: &[&str] = &[
    "Crab", "Lobster", "Shrimp", "Krill", "Squid", "Eel", "Otter", "Seal", "Gull", "Reef",
    "Kelp", "Clam",
];

pub fn default_nickname() -> String {
    match std::env::var("USER") {
        Ok(user) if !user.trim().is_empty() => user,
        _ => generate_nickname(),
    }
}

/// Generate a random nickname like `TidalCrab42`.
pub fn generate_nickname() -> String {
    let mut rng = rand::rng();
    let adj = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    let num: u8 = rng.random_range(0..100);
    format!("{}{}{}", adj, noun, num)
}
