//! # Policy Configuration
//!
//! Resolves the `ValidationPolicy` a run uses. Precedence, lowest first:
//! built-in defaults, the YAML file given by `--config`, then command-line
//! flags. The result is verified before any identifier is checked.
//!
//! ```yaml
//! check_length: true
//! check_checksum: true
//! accepted_lengths: [7, 8, 12]
//! ```

use std::path::Path;

use anyhow::{Context, Result};

use uic_core::ValidationPolicy;

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyOverrides {
    pub no_length_check: bool,
    pub no_checksum_check: bool,
    pub lengths: Option<Vec<usize>>,
}

/// Load a policy document from `path`. An empty file yields the defaults.
pub fn load_policy_file(path: &Path) -> Result<ValidationPolicy> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(ValidationPolicy::default());
    }
    serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))
}

/// Build the effective policy from an optional config file and overrides.
pub fn resolve_policy(
    config: Option<&Path>,
    overrides: &PolicyOverrides,
) -> Result<ValidationPolicy> {
    let mut policy = match config {
        Some(path) => load_policy_file(path)?,
        None => ValidationPolicy::default(),
    };

    if overrides.no_length_check {
        policy.check_length = false;
    }
    if overrides.no_checksum_check {
        policy.check_checksum = false;
    }
    if let Some(ref lengths) = overrides.lengths {
        policy.accepted_lengths = lengths.clone();
    }

    policy.verify().context("invalid validation policy")?;

    tracing::debug!(
        check_length = policy.check_length,
        check_checksum = policy.check_checksum,
        accepted_lengths = %policy.expected_lengths(),
        "resolved validation policy"
    );

    Ok(policy)
}
