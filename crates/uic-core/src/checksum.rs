//! # Checksum Engine
//!
//! The UIC check digit is a Luhn-style mod-10 sum. Counting from the right
//! of the body (every digit except the check digit itself), the first,
//! third, fifth, ... digits are doubled and digit-summed; the others count
//! at face value. The check digit brings the total up to the next multiple
//! of ten.
//!
//! Doubling then digit-summing maps each digit as follows:
//!
//! ```text
//! digit     0  1  2  3  4  5  6  7  8  9
//! doubled   0  2  4  6  8 10 12 14 16 18
//! summed    0  2  4  6  8  1  3  5  7  9
//! adjust    0 +1 +2 +3 +4 -4 -3 -2 -1  0
//! ```
//!
//! The `summed` row is `(2d mod 10) + (2d div 10)`, or "double, and subtract
//! nine if the result reaches ten". The `adjust` row is the same table
//! expressed as an offset from the digit's own value.
//!
//! ## Gates
//!
//! `validate()` applies the length gate before the checksum gate. Each is
//! independently switchable through [`ValidationPolicy`].

use crate::digits::DigitSequence;
use crate::error::UicError;
use crate::identity::CheckDigit;
use crate::policy::ValidationPolicy;

/// Contribution of a doubled-position digit, indexed by the digit.
pub const DOUBLED_DIGIT_SUM: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Compute the check digit for `body`, the digits preceding the check digit.
///
/// `body` is expected to hold values 0..=9, as produced by [`DigitSequence`].
/// Larger values are reduced modulo 10 rather than rejected, so `[15]`
/// computes the same as `[5]`. An empty body yields 0.
pub fn compute_check_digit(body: &[u8]) -> u8 {
    let sum: u32 = body
        .iter()
        .rev()
        .enumerate()
        .map(|(pos, &d)| {
            let d = d % 10;
            if pos % 2 == 0 {
                u32::from(DOUBLED_DIGIT_SUM[usize::from(d)])
            } else {
                u32::from(d)
            }
        })
        .sum();
    complement(sum)
}

/// Compute the check digit by explicit multiplication and digit summing.
///
/// Multiplies the reversed body by 2, 1, 2, 1, ..., writes the products out
/// as one decimal string and sums its characters. Kept for cross-checking
/// [`compute_check_digit`]; both always agree, including the modulo 10
/// reduction of out-of-range values.
pub fn compute_check_digit_longform(body: &[u8]) -> u8 {
    let products: String = body
        .iter()
        .rev()
        .zip([2u32, 1].iter().cycle())
        .map(|(&d, &weight)| (u32::from(d % 10) * weight).to_string())
        .collect();
    let total: u32 = products.chars().filter_map(|c| c.to_digit(10)).sum();
    complement(total)
}

fn complement(sum: u32) -> u8 {
    // Always < 10, so the narrowing is lossless.
    ((10 - sum % 10) % 10) as u8
}

/// Validate `identifier` against `policy` and return the computed check digit.
///
/// Input with no digits at all fails with [`UicError::NoDigits`] whatever the
/// policy says. The policy is used as given; call
/// [`ValidationPolicy::verify`] first if it comes from user input.
pub fn validate(identifier: &str, policy: &ValidationPolicy) -> Result<CheckDigit, UicError> {
    let digits = DigitSequence::extract(identifier);
    evaluate(identifier, &digits, policy)
}

/// Validate with the default accepted lengths and the given gate flags.
///
/// Returns the computed check digit as a plain integer. Note that 0 is a
/// legal check digit, so test the `Result`, not the value.
pub fn validate_uic_checksum(
    identifier: &str,
    check_length: bool,
    check_checksum: bool,
) -> Result<u8, UicError> {
    let policy = ValidationPolicy::default()
        .with_length_check(check_length)
        .with_checksum_check(check_checksum);
    validate(identifier, &policy).map(CheckDigit::value)
}

/// Compute the check digit to append to an incomplete number.
///
/// Every digit in `partial` is treated as body. A placeholder digit is
/// appended before the length gate runs, so with the default policy
/// `partial` must hold 6, 7 or 11 digits. The gate counts every digit in
/// `partial`, before the rightmost-twelve truncation, so an over-long
/// partial fails instead of losing its leading digits. With the length
/// gate off, truncation applies as in [`validate`]. The checksum gate is
/// always off.
pub fn generate_check_digit(
    partial: &str,
    policy: &ValidationPolicy,
) -> Result<CheckDigit, UicError> {
    let extracted = DigitSequence::extract(partial);
    if extracted.is_empty() {
        return Err(UicError::NoDigits {
            input: partial.to_string(),
        });
    }
    let all_digits: String = partial.chars().filter(char::is_ascii_digit).collect();
    let count = all_digits.len() + 1;
    if !policy.accepts_length(count) {
        return Err(UicError::LengthMismatch {
            input: partial.to_string(),
            digits: format!("{all_digits}0"),
            count,
            expected: policy.expected_lengths(),
        });
    }
    let mut padded = extracted.as_slice().to_vec();
    padded.push(0);
    let digits = DigitSequence::from_digits(&padded)?;
    let policy = policy.clone().with_checksum_check(false);
    evaluate(partial, &digits, &policy)
}

fn evaluate(
    input: &str,
    digits: &DigitSequence,
    policy: &ValidationPolicy,
) -> Result<CheckDigit, UicError> {
    let Some(claimed) = digits.check_digit() else {
        return Err(UicError::NoDigits {
            input: input.to_string(),
        });
    };
    let computed = compute_check_digit(digits.body());

    tracing::trace!(
        input,
        digits = %digits,
        computed,
        claimed,
        "computed check digit"
    );

    if !policy.accepts_length(digits.len()) {
        return Err(UicError::LengthMismatch {
            input: input.to_string(),
            digits: digits.to_string(),
            count: digits.len(),
            expected: policy.expected_lengths(),
        });
    }
    if policy.check_checksum && computed != claimed {
        return Err(UicError::ChecksumMismatch {
            input: input.to_string(),
            digits: digits.to_string(),
            computed,
            claimed,
        });
    }
    CheckDigit::new(computed)
}
