//! Operating modes and the merge policy each one selects.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

pub(crate) const MODE_EXPECTED: &str = "\"path\", \"relax\" or \"insecure\"";

/// How aggressively the candidate path may override the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Sanitize the path; the base always supplies protocol, credentials,
    /// host and port.
    #[default]
    Path,
    /// Sanitize the path; an absolute path may bring its own authority.
    Relax,
    /// Plain URL resolution with no guard at all.
    Insecure,
}

/// Which parse supplies protocol, credentials, hostname and port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthoritySource {
    Base,
    Path,
}

/// What to resolve against when no base is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseStrategy {
    /// Fall back to `https://localhost.local/`.
    Synthetic,
    /// Parse the path itself as the base.
    PathAsBase,
    /// Resolve the raw path against the raw base, inventing nothing.
    Native,
}

/// Per-mode construction policy, computed once per construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub sanitize: bool,
    pub authority: AuthoritySource,
    pub base: BaseStrategy,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Path, Mode::Relax, Mode::Insecure];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Path => "path",
            Mode::Relax => "relax",
            Mode::Insecure => "insecure",
        }
    }

    pub fn policy(self) -> Policy {
        match self {
            Mode::Path => Policy {
                sanitize: true,
                authority: AuthoritySource::Base,
                base: BaseStrategy::Synthetic,
            },
            Mode::Relax => Policy {
                sanitize: true,
                authority: AuthoritySource::Path,
                base: BaseStrategy::PathAsBase,
            },
            Mode::Insecure => Policy {
                sanitize: false,
                authority: AuthoritySource::Path,
                base: BaseStrategy::Native,
            },
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ValidationError::new("mode", MODE_EXPECTED, s))
    }
}
