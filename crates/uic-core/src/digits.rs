//! # Digit Extraction
//!
//! Turns free-form identifier text into the ordered digit sequence the
//! checksum runs over. Only ASCII `0`..=`9` count; letters of any script,
//! whitespace, every dash variant and combining marks are dropped.
//!
//! Numbers carrying long owner or keeper prefixes (for example the Finnish
//! `Sm6` class mark in front of a full twelve-digit number) produce more
//! than twelve digits. Only the rightmost twelve are kept.

use serde::{Deserialize, Serialize};

use crate::error::UicError;

/// Maximum number of digits that participate in the checksum.
pub const MAX_DIGITS: usize = 12;

/// Ordered digits 0..=9 extracted from an identifier, at most [`MAX_DIGITS`] long.
///
/// Deserializes from an array of digit values through
/// [`DigitSequence::from_digits`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>")]
pub struct DigitSequence(Vec<u8>);

impl DigitSequence {
    /// Extract the digits of `raw`, keeping only the rightmost twelve.
    pub fn extract(raw: &str) -> Self {
        let all: Vec<u8> = raw
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();
        Self::truncated(all)
    }

    /// Build a sequence from digit values that are already separated.
    ///
    /// Values above 9 are rejected. Longer inputs are truncated to the
    /// rightmost twelve, the same as [`DigitSequence::extract`].
    pub fn from_digits(digits: &[u8]) -> Result<Self, UicError> {
        if let Some(&value) = digits.iter().find(|&&d| d > 9) {
            return Err(UicError::InvalidDigit { value });
        }
        Ok(Self::truncated(digits.to_vec()))
    }

    fn truncated(mut digits: Vec<u8>) -> Self {
        if digits.len() > MAX_DIGITS {
            digits.drain(..digits.len() - MAX_DIGITS);
        }
        Self(digits)
    }

    /// Number of digits kept.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the input had no digits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// The claimed check digit (the rightmost digit), if any.
    pub fn check_digit(&self) -> Option<u8> {
        self.0.last().copied()
    }

    /// Every digit except the claimed check digit.
    pub fn body(&self) -> &[u8] {
        match self.0.split_last() {
            Some((_, body)) => body,
            None => &[],
        }
    }
}

impl TryFrom<Vec<u8>> for DigitSequence {
    type Error = UicError;

    fn try_from(digits: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_digits(&digits)
    }
}

impl std::fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in &self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_drops_punctuation_and_spaces() {
        let seq = DigitSequence::extract("21 80 155 9 084-5");
        assert_eq!(seq.to_string(), "218015590845");
        assert_eq!(seq.len(), 12);
    }

    #[test]
    fn extract_ignores_letters_and_diacritics() {
        let seq = DigitSequence::extract("31 RIV 81 ÖBB 665 0 286-0");
        assert_eq!(seq.to_string(), "318166502860");
    }

    #[test]
    fn extract_ignores_combining_marks() {
        let seq = DigitSequence::extract("37 TEN RIV 84 N\u{332}L\u{332}-GERS 4667 019-2 Sfhimmns");
        assert_eq!(seq.to_string(), "378446670192");
    }

    #[test]
    fn extract_ignores_en_dash_and_newlines() {
        assert_eq!(
            DigitSequence::extract("93 70 3740 021\u{2013}8 GB-EIL").to_string(),
            "937037400218"
        );
        assert_eq!(
            DigitSequence::extract("01 RIV\n83 FS\n575 0 421-8").to_string(),
            "018357504218"
        );
    }

    #[test]
    fn extract_rejects_non_ascii_digits() {
        // Superscript two, Arabic-Indic three, full-width four.
        let seq = DigitSequence::extract("1\u{b2}\u{663}\u{ff14}5");
        assert_eq!(seq.to_string(), "15");
    }

    #[test]
    fn extract_keeps_rightmost_twelve() {
        let seq = DigitSequence::extract("KT-FI Sm6 94 10 3890001-0");
        assert_eq!(seq.len(), MAX_DIGITS);
        assert_eq!(seq.to_string(), "941038900010");
    }

    #[test]
    fn extract_empty_input() {
        let seq = DigitSequence::extract("AMOX");
        assert!(seq.is_empty());
        assert_eq!(seq.check_digit(), None);
        assert!(seq.body().is_empty());
    }

    #[test]
    fn body_and_check_digit_split() {
        let seq = DigitSequence::extract("182 002-6");
        assert_eq!(seq.check_digit(), Some(6));
        assert_eq!(seq.body(), &[1, 8, 2, 0, 0, 2]);
    }

    #[test]
    fn from_digits_rejects_out_of_range() {
        assert_eq!(
            DigitSequence::from_digits(&[1, 2, 10]),
            Err(UicError::InvalidDigit { value: 10 })
        );
    }

    #[test]
    fn deserialize_rejects_out_of_range_digit() {
        let result: Result<DigitSequence, _> = serde_json::from_str("[1, 2, 15]");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("digit value 15"));
    }

    #[test]
    fn deserialize_truncates_to_rightmost_twelve() {
        let seq: DigitSequence =
            serde_json::from_str("[9, 9, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2]").unwrap();
        assert_eq!(seq.to_string(), "123456789012");
        let back = serde_json::to_string(&seq).unwrap();
        assert_eq!(back, "[1,2,3,4,5,6,7,8,9,0,1,2]");
    }

    #[test]
    fn from_digits_truncates_like_extract() {
        let digits: Vec<u8> = (0..15).map(|i| i % 10).collect();
        let seq = DigitSequence::from_digits(&digits).unwrap();
        assert_eq!(seq.as_slice(), &digits[3..]);
    }
}
