//! # Reference Corpora
//!
//! Real-world rolling stock numbers as painted on vehicles, used for smoke
//! testing the engine and the CLI.
//!
//! Only the European corpus follows the UIC scheme. The Indian, Russian
//! and Australian corpora use related but incompatible numbering rules and
//! are kept as illustrative negatives; they are not expected to validate.
//!
//! Sources: OTIF A 94-03/4.2006 (UIC/RIV/RIC/ENV marking rules), the UIC
//! wagon numbers article on Wikipedia, Richard Suchenwirth's Tcl checker
//! on wiki.tcl.tk/607, and vehicle photographs.

use serde::{Deserialize, Serialize};

/// European UIC/RIV/RIC/ENV numbers. All validate with the default policy.
pub static EUROPEAN: &[&str] = &[
    "000-000-0",
    "182 002-6",
    "220 071-5",
    "21 80 155 9 084-5",
    "21-81-2471217-3",
    "31 RIV 81 ÖBB 665 0 286-0",
    "33 RIV 70 BR 7899 047-6",
    "37 TEN RIV 84 N\u{332}L\u{332}-GERS 4667 019-2 Sfhimmns",
    "37.84.4667.019-2",
    "51-80-0843001-0",
    "01 RIV\n83 FS\n575 0 421-8",
    "60 80 99 26 187-7",
    "82 70 GB-DBSUK 6723 675-8 Fabnooss",
    "91 53 0472 001-3",
    // En dash before the check digit.
    "93 70 3740 021\u{2013}8 GB-EIL",
    "CH-FPC 62 85 78-90049-8 WLABmz",
    // The `Sm6` class prefix pushes the digit count past twelve.
    "KT-FI Sm6 94 10 3890001-0",
];

/// Indian Railways wagon numbers (11-digit scheme).
pub static INDIAN: &[&str] = &["BOXNHS 12 03 03 4567-9", "BCNAHS 31101695215"];

/// Russian and former CIS locomotive class numbers.
pub static RUSSIAN: &[&str] = &["2ЭВ120-002", "3П20 012"];

/// Australian RISSB classification codes.
pub static AUSTRALIAN: &[&str] = &["AMOX18S"];

/// A named fixture corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corpus {
    European,
    Indian,
    Russian,
    Australian,
}

impl Corpus {
    /// Every corpus, European first.
    pub const ALL: [Corpus; 4] = [
        Corpus::European,
        Corpus::Indian,
        Corpus::Russian,
        Corpus::Australian,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::European => "european",
            Self::Indian => "indian",
            Self::Russian => "russian",
            Self::Australian => "australian",
        }
    }

    pub fn cases(&self) -> &'static [&'static str] {
        match self {
            Self::European => EUROPEAN,
            Self::Indian => INDIAN,
            Self::Russian => RUSSIAN,
            Self::Australian => AUSTRALIAN,
        }
    }

    /// True if every case is expected to pass default validation.
    pub fn validates(&self) -> bool {
        matches!(self, Self::European)
    }

    /// Cases ordered by character count, shortest first. Ties keep corpus order.
    pub fn cases_by_length(&self) -> Vec<&'static str> {
        let mut cases = self.cases().to_vec();
        cases.sort_by_key(|c| c.chars().count());
        cases
    }
}

impl std::fmt::Display for Corpus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
