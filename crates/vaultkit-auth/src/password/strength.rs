//! Informational entropy estimate via zxcvbn.
//!
//! The estimate never changes whether [`super::PasswordValidator`] accepts
//! a password; it only helps explain how guessable an accepted one is.

use serde::Serialize;

/// zxcvbn score (0 = trivially guessable, 4 = very strong) and guess count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrengthEstimate {
    /// Score on zxcvbn's 0..=4 scale.
    pub score: u8,
    /// log10 of the estimated number of guesses.
    pub guesses_log10: f64,
}

/// Estimates how many guesses `password` would take.
///
/// `user_inputs` are words an attacker could know (username, email) and are
/// penalised as dictionary matches.
pub fn estimate(password: &str, user_inputs: &[&str]) -> StrengthEstimate {
    let entropy = zxcvbn::zxcvbn(password, user_inputs);
    let score = match entropy.score() {
        zxcvbn::Score::Zero => 0,
        zxcvbn::Score::One => 1,
        zxcvbn::Score::Two => 2,
        zxcvbn::Score::Three => 3,
        _ => 4,
    };

    StrengthEstimate {
        score,
        guesses_log10: entropy.guesses_log10(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_password_scores_low() {
        assert!(estimate("password", &[]).score <= 1);
    }

    #[test]
    fn test_random_password_scores_high() {
        let strong = estimate("v8$Kq!2mZp#rT9wL", &[]);
        assert!(strong.score >= 3);
        assert!(strong.guesses_log10 > estimate("password", &[]).guesses_log10);
    }

    #[test]
    fn test_user_inputs_penalised() {
        let plain = estimate("jdoe2024!", &[]);
        let with_input = estimate("jdoe2024!", &["jdoe"]);
        assert!(with_input.guesses_log10 <= plain.guesses_log10);
    }
}
