// SPDX-License-Identifier: MPL-2.0
//! Heuristic password strength scoring.
//!
//! The score is an additive count of satisfied composition rules, not an
//! entropy or dictionary model. Each rule contributes exactly one point,
//! so the score always lands in `0..=5`.

/// Maximum achievable score (one point per composition rule).
pub const MAX_SCORE: u8 = 5;

/// Minimum length required to earn the length point.
pub const MIN_LENGTH: usize = 8;

/// Discrete strength bucket derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Score 0 or 1.
    Weak,
    /// Score 2 or 3.
    Medium,
    /// Score 4 or 5.
    Strong,
}

impl Label {
    /// Returns the i18n key for the "<label> password" caption.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Label::Weak => "strength-weak",
            Label::Medium => "strength-medium",
            Label::Strong => "strength-strong",
        }
    }
}

/// Result of evaluating a non-empty password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    score: u8,
    label: Label,
}

impl StrengthResult {
    /// Returns the raw score in `0..=MAX_SCORE`.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Returns the strength bucket.
    #[must_use]
    pub fn label(&self) -> Label {
        self.label
    }

    /// Fill percentage for the meter bar (score / 5 × 100).
    #[must_use]
    pub fn percent(&self) -> f32 {
        f32::from(self.score) / f32::from(MAX_SCORE) * 100.0
    }
}

/// Scores a candidate password.
///
/// Returns `None` for an empty password, which callers must treat as
/// "remove the indicator" rather than "render an empty meter". The same
/// input always produces the same result, so recomputing on every
/// keystroke is idempotent.
#[must_use]
pub fn evaluate(password: &str) -> Option<StrengthResult> {
    if password.is_empty() {
        return None;
    }

    // The rules intentionally mirror the coarse character-class checks the
    // meter has always used; "special" means anything outside ASCII
    // alphanumerics, so non-ASCII letters count as special.
    let rules = [
        password.chars().count() >= MIN_LENGTH,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];

    let score = rules.iter().filter(|satisfied| **satisfied).count() as u8;

    let label = match score {
        0 | 1 => Label::Weak,
        2 | 3 => Label::Medium,
        _ => Label::Strong,
    };

    Some(StrengthResult { score, label })
}
