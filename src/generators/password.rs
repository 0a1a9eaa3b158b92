// src/generators/password.rs
use rand::rngs::OsRng;
use rand::Rng;
use thiserror::Error;

use crate::models::PasswordGenerationOptions;

/// Practical upper bound on requested length.
pub const MAX_LENGTH: usize = 256;

/// Redraw ceiling for the coverage check. A valid request converges almost
/// surely long before this, but the loop must terminate regardless.
pub const MAX_ATTEMPTS: u32 = 10_000;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Gave up after {0} attempts without covering every selected character type")]
    RetryLimitExceeded(u32),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generate a random password of exactly `options.length` characters
    /// containing at least one character from every enabled class.
    ///
    /// Characters are drawn uniformly from the concatenation of the enabled
    /// alphabets, so classes with larger alphabets are proportionally more
    /// frequent. A candidate missing any enabled class is discarded and
    /// redrawn in full (rejection sampling), up to [`MAX_ATTEMPTS`] times.
    pub fn generate(&self, options: &PasswordGenerationOptions) -> Result<String> {
        let classes = options.enabled_classes();

        if classes.is_empty() {
            return Err(GeneratorError::InvalidRequest(
                "select at least one character type".to_string(),
            ));
        }
        if options.length < 1 {
            return Err(GeneratorError::InvalidRequest(
                "password length must be at least 1".to_string(),
            ));
        }
        if options.length > MAX_LENGTH {
            return Err(GeneratorError::InvalidRequest(format!(
                "password length must be at most {}",
                MAX_LENGTH
            )));
        }
        if options.length < classes.len() {
            return Err(GeneratorError::InvalidRequest(format!(
                "length {} cannot cover {} character types",
                options.length,
                classes.len()
            )));
        }

        // Concatenation, not set union: per-class weighting follows from
        // each alphabet's size.
        let mut chars: Vec<u8> = Vec::new();
        for class in &classes {
            chars.extend_from_slice(class.alphabet());
        }

        let mut rng = OsRng;
        for attempt in 0..MAX_ATTEMPTS {
            let candidate: String = (0..options.length)
                .map(|_| chars[rng.gen_range(0..chars.len())] as char)
                .collect();

            let covered = classes
                .iter()
                .all(|class| candidate.chars().any(|c| class.contains(c)));
            if covered {
                if attempt > 0 {
                    log::debug!("coverage satisfied after {} redraws", attempt);
                }
                return Ok(candidate);
            }
        }

        log::warn!(
            "rejection sampling exhausted {} attempts (length {}, {} classes)",
            MAX_ATTEMPTS,
            options.length,
            classes.len()
        );
        Err(GeneratorError::RetryLimitExceeded(MAX_ATTEMPTS))
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}
