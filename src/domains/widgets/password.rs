//! Random password generator with a simple strength meter.

use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::error::{ValidationError, WidgetResult};

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 50;
pub const DEFAULT_LENGTH: usize = 12;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
const SIMILAR: &str = "il1Lo0O";

/// Highest score `strength` can return.
pub const MAX_SCORE: u8 = 7;

fn default_length() -> usize {
    DEFAULT_LENGTH
}

fn default_true() -> bool {
    true
}

/// Character classes and length of a generated password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PasswordOptions {
    /// Number of characters (4-50).
    #[serde(default = "default_length")]
    pub length: usize,
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default = "default_true")]
    pub uppercase: bool,
    #[serde(default = "default_true")]
    pub numbers: bool,
    #[serde(default)]
    pub symbols: bool,
    /// Drop look-alike characters (il1Lo0O).
    #[serde(default)]
    pub exclude_similar: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: false,
            exclude_similar: false,
        }
    }
}

impl PasswordOptions {
    /// Characters a password may be drawn from.
    pub fn charset(&self) -> Vec<char> {
        let classes = [
            (self.lowercase, LOWERCASE),
            (self.uppercase, UPPERCASE),
            (self.numbers, NUMBERS),
            (self.symbols, SYMBOLS),
        ];

        classes
            .iter()
            .filter(|(enabled, _)| *enabled)
            .flat_map(|(_, chars)| chars.chars())
            .filter(|c| !(self.exclude_similar && SIMILAR.contains(*c)))
            .collect()
    }
}

/// Strength rating of a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Strength {
    pub score: u8,
    pub label: &'static str,
}

/// A generated password and its rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: Strength,
}

/// Generate a password with the thread-local RNG.
pub fn generate(options: &PasswordOptions) -> WidgetResult<GeneratedPassword> {
    generate_with(options, &mut rand::thread_rng())
}

/// Generate a password drawing from `rng`.
pub fn generate_with<R: Rng + ?Sized>(
    options: &PasswordOptions,
    rng: &mut R,
) -> WidgetResult<GeneratedPassword> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&options.length) {
        return Err(ValidationError::new(format!(
            "Password length must be between {} and {}",
            MIN_LENGTH, MAX_LENGTH
        )));
    }

    let charset = options.charset();
    if charset.is_empty() {
        return Err(ValidationError::new(
            "Please select at least one character type",
        ));
    }

    let password: String = (0..options.length)
        .map(|_| charset[rng.gen_range(0..charset.len())])
        .collect();
    let strength = strength(&password);

    Ok(GeneratedPassword { password, strength })
}

/// Score a password from 0 to 7: three length thresholds plus one point per
/// character class present.
pub fn strength(password: &str) -> Strength {
    let length = password.chars().count();
    let checks = [
        length >= 8,
        length >= 12,
        length >= 16,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let score = checks.iter().filter(|passed| **passed).count() as u8;

    let label = match score {
        0..=2 => "Weak",
        3..=4 => "Medium",
        5 => "Strong",
        _ => "Very Strong",
    };

    Strength { score, label }
}
