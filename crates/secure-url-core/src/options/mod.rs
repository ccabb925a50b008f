//! Construction options and their validation.

mod mode;
mod raw;

pub use mode::{AuthoritySource, BaseStrategy, Mode, Policy};
pub use raw::RawOptions;

use serde::Serialize;

/// Validated construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// How much authority the candidate path may take from the base.
    pub mode: Mode,
    /// Keep a default port (`:443` on https, ...) that was written out in the
    /// input even though URL serialization would drop it.
    pub keep_port: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: Mode::Path,
            keep_port: true,
        }
    }
}

impl Options {
    pub fn new(mode: Mode, keep_port: bool) -> Self {
        Self { mode, keep_port }
    }

    pub fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    pub fn with_keep_port(self, keep_port: bool) -> Self {
        Self { keep_port, ..self }
    }
}

impl From<Mode> for Options {
    fn from(mode: Mode) -> Self {
        Self::default().with_mode(mode)
    }
}
