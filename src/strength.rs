// src/strength.rs
use crate::models::{CharacterClass, StrengthTier};

pub struct StrengthClassifier;

impl StrengthClassifier {
    pub fn new() -> Self {
        StrengthClassifier
    }

    /// Classify a password into a strength tier. Total and deterministic.
    pub fn classify(&self, password: &str) -> StrengthTier {
        match score(password) {
            0 => StrengthTier::VeryWeak,
            1..=2 => StrengthTier::Weak,
            3..=4 => StrengthTier::Medium,
            5 => StrengthTier::Strong,
            _ => StrengthTier::VeryStrong,
        }
    }
}

impl Default for StrengthClassifier {
    fn default() -> Self {
        Self::new()
    }
}

// Additive heuristic score, 0..=6. Length contributes up to 2 points,
// each character class present contributes 1.
fn score(password: &str) -> u8 {
    let mut score = 0;

    if password.chars().count() >= 12 {
        score += 2;
    } else if password.chars().count() >= 8 {
        score += 1;
    }

    for class in CharacterClass::ALL {
        if password.chars().any(|c| class.contains(c)) {
            score += 1;
        }
    }

    score
}
