//! Password strength policy for new passwords.
//!
//! The policy is fixed: a password must contain at least one uppercase
//! letter, one lowercase letter, one digit and one punctuation or symbol
//! character, and at least `min_length` characters in total. A single
//! character outside those four classes (whitespace, control, format,
//! unassigned, combining marks, letters without case, private use) rejects
//! the password outright instead of merely not counting towards its length.

use serde::Serialize;
use unicode_general_category::{GeneralCategory, get_general_category};

use vaultkit_core::config::PasswordConfig;

/// Policy class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    /// Uppercase letter.
    Upper,
    /// Lowercase letter.
    Lower,
    /// Any numeric character.
    Digit,
    /// Punctuation or symbol.
    Symbol,
    /// Anything else; disallowed in passwords.
    Other,
}

impl CharClass {
    /// Classifies one character by its Unicode general category.
    ///
    /// Lu is upper, Ll is lower, any N* is a digit, any P* or S* is a
    /// symbol. Everything else (separators, Cc/Cf/Co/Cn, marks, and
    /// letters without case such as Lt/Lm/Lo) is [`CharClass::Other`].
    pub fn of(c: char) -> Self {
        match get_general_category(c) {
            GeneralCategory::UppercaseLetter => Self::Upper,
            GeneralCategory::LowercaseLetter => Self::Lower,
            GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber => Self::Digit,
            GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
            | GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol => Self::Symbol,
            _ => Self::Other,
        }
    }
}

/// Outcome of checking a password against the policy.
///
/// Holds no password characters, so it is safe to log or print.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PasswordReport {
    /// At least one uppercase letter was seen.
    pub has_upper: bool,
    /// At least one lowercase letter was seen.
    pub has_lower: bool,
    /// At least one digit was seen.
    pub has_digit: bool,
    /// At least one punctuation or symbol character was seen.
    pub has_symbol: bool,
    /// Characters counted before the check finished.
    pub classified: usize,
    /// Required number of classified characters.
    pub min_length: usize,
    /// Character index of the first disallowed character, if any.
    pub disallowed_at: Option<usize>,
}

impl PasswordReport {
    /// Returns `true` if the password satisfies the policy.
    pub fn is_accepted(&self) -> bool {
        self.disallowed_at.is_none()
            && self.has_upper
            && self.has_lower
            && self.has_digit
            && self.has_symbol
            && self.classified >= self.min_length
    }

    /// Human-readable reasons for rejection, empty when accepted.
    pub fn violations(&self) -> Vec<String> {
        if let Some(index) = self.disallowed_at {
            return vec![format!(
                "Character at position {} is not allowed (whitespace, control or unsupported character)",
                index + 1
            )];
        }

        let mut violations = Vec::new();
        if !self.has_upper {
            violations.push("Password must contain at least one uppercase letter".to_string());
        }
        if !self.has_lower {
            violations.push("Password must contain at least one lowercase letter".to_string());
        }
        if !self.has_digit {
            violations.push("Password must contain at least one digit".to_string());
        }
        if !self.has_symbol {
            violations.push("Password must contain at least one special character".to_string());
        }
        if self.classified < self.min_length {
            violations.push(format!(
                "Password must be at least {} characters long",
                self.min_length
            ));
        }
        violations
    }
}

/// Validates password strength against the fixed four-class policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum number of classified characters.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a validator with an explicit minimum length.
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Creates a validator from password configuration.
    pub fn from_config(config: &PasswordConfig) -> Self {
        Self::new(config.min_length)
    }

    /// The configured minimum length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Returns `true` if `password` satisfies the policy.
    pub fn validate(&self, password: &str) -> bool {
        self.check(password).is_accepted()
    }

    /// Walks the password once and reports which requirements it meets.
    ///
    /// Stops at the first disallowed character.
    pub fn check(&self, password: &str) -> PasswordReport {
        let mut report = PasswordReport {
            min_length: self.min_length,
            ..PasswordReport::default()
        };

        for (index, c) in password.chars().enumerate() {
            match CharClass::of(c) {
                CharClass::Upper => report.has_upper = true,
                CharClass::Lower => report.has_lower = true,
                CharClass::Digit => report.has_digit = true,
                CharClass::Symbol => report.has_symbol = true,
                CharClass::Other => {
                    report.disallowed_at = Some(index);
                    return report;
                }
            }
            report.classified += 1;
        }

        report
    }
}

impl Default for PasswordValidator {
    fn default() -> Self {
        Self::from_config(&PasswordConfig::default())
    }
}

/// Checks `password` against the policy with the given minimum length.
pub fn validate_password(password: &str, min_length: usize) -> bool {
    PasswordValidator::new(min_length).validate(password)
}
