//! Inputs accepted as a path or base: strings, parsed URLs, or earlier results.

use std::borrow::Cow;

use url::Url;

use super::SecureUrl;

/// A path or base argument, coerced to its string form.
///
/// Parsed [`Url`]s and [`SecureUrl`]s contribute their href.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlInput<'a>(Cow<'a, str>);

impl UrlInput<'_> {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'a> From<&'a str> for UrlInput<'a> {
    fn from(s: &'a str) -> Self {
        Self(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for UrlInput<'a> {
    fn from(s: &'a String) -> Self {
        Self(Cow::Borrowed(s))
    }
}

impl From<String> for UrlInput<'_> {
    fn from(s: String) -> Self {
        Self(Cow::Owned(s))
    }
}

impl<'a> From<&'a Url> for UrlInput<'a> {
    fn from(url: &'a Url) -> Self {
        Self(Cow::Borrowed(url.as_str()))
    }
}

impl<'a> From<&'a SecureUrl> for UrlInput<'a> {
    fn from(url: &'a SecureUrl) -> Self {
        Self(Cow::Borrowed(url.href()))
    }
}
