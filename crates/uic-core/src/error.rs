//! # Error Types
//!
//! Every failure the engine can report. Both validation errors carry the
//! raw input and the extracted digit string so a caller can show the
//! user exactly what was checked.

use thiserror::Error;

/// Top-level error type for rolling stock number validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UicError {
    /// The extracted digit count is not one of the accepted lengths.
    #[error("invalid number of digits in {input:?}: digits \"{digits}\" ({count} counted; {expected} expected)")]
    LengthMismatch {
        /// The raw identifier as supplied.
        input: String,
        /// The extracted digit string.
        digits: String,
        /// Number of digits extracted.
        count: usize,
        /// Accepted lengths, comma separated.
        expected: String,
    },

    /// The last digit does not match the computed check digit.
    #[error("invalid checksum for {input:?}: digits \"{digits}\", calculated check digit {computed} but found {claimed}")]
    ChecksumMismatch {
        /// The raw identifier as supplied.
        input: String,
        /// The extracted digit string.
        digits: String,
        /// The freshly computed check digit.
        computed: u8,
        /// The check digit present in the input.
        claimed: u8,
    },

    /// The input contains no ASCII decimal digits at all.
    #[error("no digits found in {input:?}")]
    NoDigits {
        /// The raw identifier as supplied.
        input: String,
    },

    /// A digit value outside 0..=9 was supplied directly.
    #[error("digit value {value} is out of range 0..=9")]
    InvalidDigit {
        /// The offending value.
        value: u8,
    },

    /// The validation policy itself is unusable.
    #[error("invalid validation policy: {0}")]
    InvalidPolicy(String),
}

impl UicError {
    /// Stable snake_case tag for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LengthMismatch { .. } => "length_mismatch",
            Self::ChecksumMismatch { .. } => "checksum_mismatch",
            Self::NoDigits { .. } => "no_digits",
            Self::InvalidDigit { .. } => "invalid_digit",
            Self::InvalidPolicy(_) => "invalid_policy",
        }
    }
}
