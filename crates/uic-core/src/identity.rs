//! # Identifier Newtypes
//!
//! `CheckDigit` is always in 0..=9. `UicNumber` can only be built by
//! validating, so holding one means the input passed whichever gates the
//! parsing policy had enabled.

use serde::Serialize;

use crate::checksum::validate;
use crate::digits::DigitSequence;
use crate::error::UicError;
use crate::policy::ValidationPolicy;

/// A single check digit, 0..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CheckDigit(u8);

impl CheckDigit {
    /// Wrap a digit value, rejecting anything above 9.
    pub fn new(value: u8) -> Result<Self, UicError> {
        if value > 9 {
            return Err(UicError::InvalidDigit { value });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rolling stock number that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UicNumber {
    raw: String,
    digits: DigitSequence,
    check_digit: CheckDigit,
}

impl UicNumber {
    /// Validate `raw` with the default policy.
    pub fn parse(raw: &str) -> Result<Self, UicError> {
        Self::parse_with(raw, &ValidationPolicy::default())
    }

    /// Validate `raw` with a caller-supplied policy.
    pub fn parse_with(raw: &str, policy: &ValidationPolicy) -> Result<Self, UicError> {
        let check_digit = validate(raw, policy)?;
        Ok(Self {
            raw: raw.to_string(),
            digits: DigitSequence::extract(raw),
            check_digit,
        })
    }

    /// The input exactly as supplied, line breaks included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn digits(&self) -> &DigitSequence {
        &self.digits
    }

    /// The computed check digit.
    pub fn check_digit(&self) -> CheckDigit {
        self.check_digit
    }
}

impl std::fmt::Display for UicNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw.replace('\n', " "))
    }
}

impl std::str::FromStr for UicNumber {
    type Err = UicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_digit_rejects_ten() {
        assert_eq!(CheckDigit::new(9).map(CheckDigit::value), Ok(9));
        assert_eq!(CheckDigit::new(10), Err(UicError::InvalidDigit { value: 10 }));
    }

    #[test]
    fn parse_valid_number() {
        let n = UicNumber::parse("21-81-2471217-3").unwrap();
        assert_eq!(n.raw(), "21-81-2471217-3");
        assert_eq!(n.digits().to_string(), "218124712173");
        assert_eq!(n.check_digit().value(), 3);
    }

    #[test]
    fn parse_rejects_bad_checksum() {
        assert!(matches!(
            UicNumber::parse("21-81-2471217-4"),
            Err(UicError::ChecksumMismatch { computed: 3, claimed: 4, .. })
        ));
    }

    #[test]
    fn parse_with_relaxed_policy() {
        let policy = ValidationPolicy::default().with_checksum_check(false);
        let n = UicNumber::parse_with("123-456-7", &policy).unwrap();
        assert_eq!(n.check_digit().value(), 6);
        assert_eq!(n.digits().check_digit(), Some(7));
    }

    #[test]
    fn display_collapses_newlines() {
        let n = UicNumber::parse("01 RIV\n83 FS\n575 0 421-8").unwrap();
        assert_eq!(n.to_string(), "01 RIV 83 FS 575 0 421-8");
        assert!(n.raw().contains('\n'));
    }

    #[test]
    fn from_str_delegates_to_parse() {
        let n: UicNumber = "182 002-6".parse().unwrap();
        assert_eq!(n.check_digit().to_string(), "6");
    }

    #[test]
    fn serializes_digits_as_sequence() {
        let n = UicNumber::parse("182 002-6").unwrap();
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["raw"], "182 002-6");
        assert_eq!(json["check_digit"], 6);
        assert_eq!(json["digits"], serde_json::json!([1, 8, 2, 0, 0, 2, 6]));
    }
}
