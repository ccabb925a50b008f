//! Resolver interface for parsing and resolving URL strings.
//!
//! The constructor only depends on this trait and does not know how URLs are
//! actually parsed. [`WhatwgResolver`] is the default, backed by the `url`
//! crate.

use serde::Serialize;
use url::Url;

use crate::error::ResolutionError;

/// The parts of a parsed URL the constructor reads, in URL Standard form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    /// Scheme followed by `:`, e.g. `https:`.
    pub protocol: String,
    pub username: String,
    pub password: String,
    pub hostname: String,
    /// `None` when absent or equal to the scheme's default port.
    pub port: Option<u16>,
    pub pathname: String,
    /// Empty, or `?` followed by the query.
    pub search: String,
    /// Empty, or `#` followed by the fragment.
    pub hash: String,
    /// Decoded query pairs, in order. Keys may repeat.
    pub search_params: Vec<(String, String)>,
}

/// Trait implemented by URL parsers the constructor can delegate to.
pub trait Resolver {
    type Url;

    /// Parse `input` as an absolute URL.
    fn parse(&self, input: &str) -> Result<Self::Url, ResolutionError>;

    /// Resolve `input` (absolute or relative) against `base`.
    fn resolve(&self, input: &str, base: &Self::Url) -> Result<Self::Url, ResolutionError>;

    fn components(&self, url: &Self::Url) -> Components;
}

/// URL Standard parsing via [`url::Url`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatwgResolver;

impl Resolver for WhatwgResolver {
    type Url = Url;

    fn parse(&self, input: &str) -> Result<Url, ResolutionError> {
        Url::parse(input)
    }

    fn resolve(&self, input: &str, base: &Url) -> Result<Url, ResolutionError> {
        base.join(input)
    }

    fn components(&self, url: &Url) -> Components {
        Components::from(url)
    }
}

impl From<&Url> for Components {
    fn from(url: &Url) -> Self {
        Self {
            protocol: format!("{}:", url.scheme()),
            username: url.username().to_owned(),
            password: url.password().unwrap_or_default().to_owned(),
            hostname: url.host_str().unwrap_or_default().to_owned(),
            port: url.port(),
            pathname: url.path().to_owned(),
            search: prefixed('?', url.query()),
            hash: prefixed('#', url.fragment()),
            search_params: url.query_pairs().into_owned().collect(),
        }
    }
}

/// An empty query or fragment serializes as nothing at all.
fn prefixed(prefix: char, part: Option<&str>) -> String {
    match part {
        Some(s) if !s.is_empty() => format!("{prefix}{s}"),
        _ => String::new(),
    }
}
