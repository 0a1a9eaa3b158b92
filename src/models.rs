// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One of the four character categories a password can draw from.
/// Alphabets are fixed, ASCII-only and disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    pub fn alphabet(&self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    /// Whether `c` belongs to this class's alphabet.
    pub fn contains(&self, c: char) -> bool {
        match self {
            CharacterClass::Uppercase => c.is_ascii_uppercase(),
            CharacterClass::Lowercase => c.is_ascii_lowercase(),
            CharacterClass::Digit => c.is_ascii_digit(),
            CharacterClass::Special => c.is_ascii() && SPECIAL.contains(&(c as u8)),
        }
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharacterClass::Uppercase => write!(f, "uppercase"),
            CharacterClass::Lowercase => write!(f, "lowercase"),
            CharacterClass::Digit => write!(f, "digits"),
            CharacterClass::Special => write!(f, "symbols"),
        }
    }
}

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl PasswordGenerationOptions {
    /// The character classes these options enable.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        let flags = [
            (CharacterClass::Uppercase, self.include_uppercase),
            (CharacterClass::Lowercase, self.include_lowercase),
            (CharacterClass::Digit, self.include_numbers),
            (CharacterClass::Special, self.include_symbols),
        ];
        flags
            .into_iter()
            .filter_map(|(class, enabled)| enabled.then_some(class))
            .collect()
    }
}

/// Discrete strength label, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl std::fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthTier::VeryWeak => write!(f, "Very Weak"),
            StrengthTier::Weak => write!(f, "Weak"),
            StrengthTier::Medium => write!(f, "Medium"),
            StrengthTier::Strong => write!(f, "Strong"),
            StrengthTier::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

/// A generated password plus the metadata shown in the history list.
/// Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub strength: StrengthTier,
}
