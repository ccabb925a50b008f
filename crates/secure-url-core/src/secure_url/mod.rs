//! The guarded URL value and its constructors.
//!
//! A [`SecureUrl`] is built by resolving a candidate path against a trusted
//! base. Depending on [`Mode`](crate::Mode) the path may or may not replace the
//! base's protocol, credentials, host and port; path, query and fragment always
//! come from the candidate.
//!
//! # Examples
//!
//! ```
//! use secure_url_core::{Mode, Options, SecureUrl};
//!
//! let url = SecureUrl::new(
//!     "//evil.example/hello?x=1",
//!     "https://localhost.local:443/",
//!     Options::default(),
//! )?;
//! assert_eq!(url.href(), "https://localhost.local:443/evil.example/hello?x=1");
//!
//! let url = SecureUrl::new(
//!     "https://foo.bar/hello",
//!     "https://localhost.local/",
//!     Options::from(Mode::Relax),
//! )?;
//! assert_eq!(url.origin(), "https://foo.bar");
//! # Ok::<(), secure_url_core::Error>(())
//! ```

mod construct;
mod input;
mod serialize;


pub use construct::DEFAULT_BASE;
pub use input::UrlInput;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use url::Url;

use crate::error::{Error, Result};
use crate::options::{Options, RawOptions};
use crate::resolver::{Resolver, WhatwgResolver};

/// An immutable, fully resolved URL whose authority obeys the construction
/// mode.
///
/// Every field is computed once during construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecureUrl {
    href: String,
    origin: String,
    host: String,
    protocol: String,
    username: String,
    password: String,
    hostname: String,
    port: Option<u16>,
    pathname: String,
    hash: String,
    search: String,
    search_params: Vec<(String, String)>,
}

impl SecureUrl {
    /// Resolves `path` against `base`. An empty `base` counts as no base.
    pub fn new<'p, 'b>(
        path: impl Into<UrlInput<'p>>,
        base: impl Into<UrlInput<'b>>,
        options: Options,
    ) -> Result<Self> {
        let base = base.into();
        Self::new_with_resolver(&WhatwgResolver, path, Some(base.as_str()), options)
    }

    /// Constructs without a base.
    pub fn with_options<'p>(path: impl Into<UrlInput<'p>>, options: Options) -> Result<Self> {
        Self::new_with_resolver(&WhatwgResolver, path, None, options)
    }

    /// Constructs without a base, using the default options.
    pub fn parse<'p>(path: impl Into<UrlInput<'p>>) -> Result<Self> {
        Self::with_options(path, Options::default())
    }

    /// Validates `raw` first; nothing is parsed if the bag is invalid.
    pub fn from_raw<'p, 'b>(
        path: impl Into<UrlInput<'p>>,
        base: Option<UrlInput<'b>>,
        raw: &RawOptions,
    ) -> Result<Self> {
        let options = raw.validate()?;
        Self::new_with_resolver(
            &WhatwgResolver,
            path,
            base.as_ref().map(|b| b.as_str()),
            options,
        )
    }

    pub fn new_with_resolver<'p, R: Resolver>(
        resolver: &R,
        path: impl Into<UrlInput<'p>>,
        base: Option<&str>,
        options: Options,
    ) -> Result<Self> {
        let path = path.into();
        construct::construct(resolver, path.as_str(), base, options)
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn as_str(&self) -> &str {
        &self.href
    }

    /// `protocol//host` for ftp, http(s) and ws(s); `"null"` otherwise.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Hostname plus `:port` when a port is kept.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Scheme including the trailing colon.
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn search_params(&self) -> &[(String, String)] {
        &self.search_params
    }

    /// First value for `key` in the query.
    pub fn search_param(&self, key: &str) -> Option<&str> {
        self.search_params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value for `key` in the query, in order.
    pub fn search_param_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.search_params
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for SecureUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href)
    }
}

impl AsRef<str> for SecureUrl {
    fn as_ref(&self) -> &str {
        &self.href
    }
}

impl FromStr for SecureUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&SecureUrl> for Url {
    type Error = url::ParseError;

    fn try_from(url: &SecureUrl) -> Result<Self, Self::Error> {
        Url::parse(&url.href)
    }
}
