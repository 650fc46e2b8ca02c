//! # Check Command
//!
//! Validates each identifier given on the command line, or generates its
//! check digit with `--generate`. With no identifiers the selected fixture
//! corpus runs instead, shortest number first, as a smoke test.
//!
//! Every case is independent: a failure is reported and the batch carries
//! on. Failures in the illustrative non-UIC corpora are reported but do not
//! affect the exit code.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};

use uic_core::{generate_check_digit, validate, CheckDigit, Corpus, UicError, ValidationPolicy};

use crate::config::{resolve_policy, PolicyOverrides};
use crate::output::{render, Line, OutputFormat};

/// Fixture corpus selection for smoke-test runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CorpusSelection {
    European,
    Indian,
    Russian,
    Australian,
    All,
}

impl CorpusSelection {
    pub fn corpora(self) -> Vec<Corpus> {
        match self {
            Self::European => vec![Corpus::European],
            Self::Indian => vec![Corpus::Indian],
            Self::Russian => vec![Corpus::Russian],
            Self::Australian => vec![Corpus::Australian],
            Self::All => Corpus::ALL.to_vec(),
        }
    }
}

/// Arguments for checking rolling stock numbers.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Rolling stock numbers to check. Letters and punctuation are ignored.
    #[arg(value_name = "IDENTIFIER")]
    pub identifiers: Vec<String>,

    /// YAML file with a validation policy.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Accept any digit count.
    #[arg(long)]
    pub no_length_check: bool,

    /// Do not compare the last digit with the computed check digit.
    #[arg(long)]
    pub no_checksum_check: bool,

    /// Accepted digit counts, comma separated (default 7,8,12).
    #[arg(long, value_name = "N,N,...", value_delimiter = ',')]
    pub lengths: Option<Vec<usize>>,

    /// Treat each identifier as a number missing its check digit and print it.
    #[arg(long)]
    pub generate: bool,

    /// Corpus to run when no identifiers are given.
    #[arg(long, value_enum, default_value_t = CorpusSelection::European)]
    pub corpus: CorpusSelection,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl CheckArgs {
    fn overrides(&self) -> PolicyOverrides {
        PolicyOverrides {
            no_length_check: self.no_length_check,
            no_checksum_check: self.no_checksum_check,
            lengths: self.lengths.clone(),
        }
    }
}

/// One input to check, with the corpus it came from if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case<'a> {
    pub raw: &'a str,
    pub corpus: Option<Corpus>,
}

impl Case<'_> {
    /// Whether a failure of this case counts against the exit code.
    pub fn counts(&self) -> bool {
        self.corpus.map_or(true, |c| c.validates())
    }
}

/// Tally of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    /// Failures that count against the exit code.
    pub counted_failures: usize,
}

impl Summary {
    pub fn exit_code(&self) -> u8 {
        if self.counted_failures > 0 {
            1
        } else {
            0
        }
    }
}

/// Inputs for a run: command-line identifiers, or the selected corpora.
pub fn collect_cases(args: &CheckArgs) -> Vec<Case<'_>> {
    if !args.identifiers.is_empty() {
        return args
            .identifiers
            .iter()
            .map(|raw| Case {
                raw: raw.as_str(),
                corpus: None,
            })
            .collect();
    }
    args.corpus
        .corpora()
        .into_iter()
        .flat_map(|corpus| {
            corpus
                .cases_by_length()
                .into_iter()
                .map(move |raw| Case {
                    raw,
                    corpus: Some(corpus),
                })
        })
        .collect()
}

/// Execute the check command, printing to stdout and stderr.
///
/// Returns exit code: 0 if every counted case passed, 1 otherwise.
/// Configuration problems are returned as errors.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let summary = run_check_to(args, &mut stdout.lock(), &mut stderr.lock())?;
    Ok(summary.exit_code())
}

/// Execute the check command against arbitrary writers.
pub fn run_check_to(
    args: &CheckArgs,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Summary> {
    if args.generate && args.identifiers.is_empty() {
        bail!("--generate needs at least one identifier");
    }

    let policy = resolve_policy(args.config.as_deref(), &args.overrides())?;
    let cases = collect_cases(args);

    tracing::info!(
        cases = cases.len(),
        generate = args.generate,
        from_corpus = args.identifiers.is_empty(),
        "checking rolling stock numbers"
    );

    let mut summary = Summary::default();
    for case in &cases {
        let outcome = check_case(case.raw, args.generate, &policy);
        match &outcome {
            Ok(c) => {
                summary.passed += 1;
                tracing::debug!(input = case.raw, check_digit = c.value(), "passed");
            }
            Err(e) => {
                summary.failed += 1;
                if case.counts() {
                    summary.counted_failures += 1;
                }
                tracing::debug!(input = case.raw, kind = e.kind(), "failed");
            }
        }
        match render(args.format, case.raw, case.corpus, &outcome)? {
            Line::Stdout(line) => writeln!(out, "{line}")?,
            Line::Stderr(line) => writeln!(err, "{line}")?,
        }
    }

    tracing::info!(
        passed = summary.passed,
        failed = summary.failed,
        counted_failures = summary.counted_failures,
        "check complete"
    );

    Ok(summary)
}

fn check_case(
    raw: &str,
    generate: bool,
    policy: &ValidationPolicy,
) -> Result<CheckDigit, UicError> {
    if generate {
        generate_check_digit(raw, policy)
    } else {
        validate(raw, policy)
    }
}
