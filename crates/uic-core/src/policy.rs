//! # Validation Policy
//!
//! Which gates `validate()` applies: the digit-count gate, the checksum
//! gate, and the set of digit counts the length gate accepts. Deserializable
//! so callers can load it from a config document; missing fields fall back
//! to the defaults.

use serde::{Deserialize, Serialize};

use crate::digits::MAX_DIGITS;
use crate::error::UicError;

/// Digit counts of a well-formed UIC number.
pub const DEFAULT_ACCEPTED_LENGTHS: [usize; 3] = [7, 8, 12];

/// Controls the length and checksum gates of [`crate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationPolicy {
    /// Reject digit counts not in `accepted_lengths`.
    pub check_length: bool,
    /// Reject numbers whose last digit differs from the computed one.
    pub check_checksum: bool,
    /// Digit counts accepted by the length gate.
    pub accepted_lengths: Vec<usize>,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            check_length: true,
            check_checksum: true,
            accepted_lengths: DEFAULT_ACCEPTED_LENGTHS.to_vec(),
        }
    }
}

impl ValidationPolicy {
    pub fn with_length_check(mut self, enabled: bool) -> Self {
        self.check_length = enabled;
        self
    }

    pub fn with_checksum_check(mut self, enabled: bool) -> Self {
        self.check_checksum = enabled;
        self
    }

    pub fn with_accepted_lengths(mut self, lengths: impl Into<Vec<usize>>) -> Self {
        self.accepted_lengths = lengths.into();
        self
    }

    /// Check the policy is usable: at least one length, each within 1..=12.
    pub fn verify(&self) -> Result<(), UicError> {
        if self.accepted_lengths.is_empty() {
            return Err(UicError::InvalidPolicy(
                "accepted_lengths must not be empty".to_string(),
            ));
        }
        if let Some(bad) = self
            .accepted_lengths
            .iter()
            .find(|&&n| n == 0 || n > MAX_DIGITS)
        {
            return Err(UicError::InvalidPolicy(format!(
                "accepted length {bad} is outside 1..={MAX_DIGITS}"
            )));
        }
        Ok(())
    }

    /// True if the length gate is off or `count` is an accepted length.
    pub fn accepts_length(&self, count: usize) -> bool {
        !self.check_length || self.accepted_lengths.contains(&count)
    }

    /// Accepted lengths rendered as `7,8,12`.
    pub fn expected_lengths(&self) -> String {
        self.accepted_lengths
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}
