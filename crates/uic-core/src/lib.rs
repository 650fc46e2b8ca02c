//! # uic-core: UIC Rolling Stock Number Check Digits
//!
//! Validates and computes the trailing check digit of UIC rolling stock
//! numbers (wagons, coaches, locomotives, including the RIV/RIC/ENV
//! variants). Input is free-form text: owner marks, keeper letters,
//! punctuation, diacritics and line breaks are tolerated and ignored.
//!
//! ## Key Design Principles
//!
//! 1. **Digits are extracted, never parsed.** `DigitSequence::extract()`
//!    keeps every ASCII decimal digit in order and then only the rightmost
//!    twelve. Everything else in the input is noise.
//!
//! 2. **One checksum derivation.** `compute_check_digit()` is the canonical
//!    lookup-table form. `compute_check_digit_longform()` exists solely so
//!    the two can be cross-checked in tests.
//!
//! 3. **Validation is policy-driven.** Length and checksum gates are
//!    independent flags on `ValidationPolicy`; the accepted length set
//!    defaults to 7, 8 and 12.
//!
//! 4. **Fixtures are static data.** The reference corpora live in
//!    `fixtures` as read-only slices.
//!
//! ## Crate Policy
//!
//! - No I/O. Logging is `tracing` events only; subscribers belong to callers.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod checksum;
pub mod digits;
pub mod error;
pub mod fixtures;
pub mod identity;
pub mod policy;

// Re-export primary types for ergonomic imports.
pub use checksum::{
    compute_check_digit, compute_check_digit_longform, generate_check_digit, validate,
    validate_uic_checksum, DOUBLED_DIGIT_SUM,
};
pub use digits::{DigitSequence, MAX_DIGITS};
pub use error::UicError;
pub use fixtures::Corpus;
pub use identity::{CheckDigit, UicNumber};
pub use policy::{ValidationPolicy, DEFAULT_ACCEPTED_LENGTHS};
