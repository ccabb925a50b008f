//! The construction algorithm: sanitize, resolve, merge, serialize.

use std::borrow::Cow;

use crate::error::Result;
use crate::options::{AuthoritySource, BaseStrategy, Options};
use crate::port::retained_default_port;
use crate::resolver::{Components, Resolver};
use crate::sanitize::sanitize_path;

use super::serialize::Parts;
use super::SecureUrl;

/// Base used in path mode when the caller gives none.
pub const DEFAULT_BASE: &str = "https://localhost.local/";

pub(super) fn construct<R: Resolver>(
    resolver: &R,
    path: &str,
    base: Option<&str>,
    options: Options,
) -> Result<SecureUrl> {
    let policy = options.mode.policy();
    let base = base.filter(|b| !b.is_empty());

    let path: Cow<'_, str> = if policy.sanitize {
        sanitize_path(path)
    } else {
        Cow::Borrowed(path)
    };
    if let Cow::Owned(sanitized) = &path {
        tracing::trace!(path = %sanitized, "collapsed leading slashes");
    }

    tracing::debug!(
        mode = %options.mode,
        keep_port = options.keep_port,
        has_base = base.is_some(),
        "constructing secure url"
    );

    let (base_parse, path_parse) = match policy.base {
        BaseStrategy::Native => {
            let resolved = match base {
                Some(base) => resolver.resolve(&path, &resolver.parse(base)?)?,
                None => resolver.parse(&path)?,
            };
            (None, resolver.components(&resolved))
        }
        BaseStrategy::Synthetic | BaseStrategy::PathAsBase => {
            let effective = match (base, policy.base) {
                (Some(base), _) => base,
                (None, BaseStrategy::Synthetic) => DEFAULT_BASE,
                (None, _) => path.as_ref(),
            };
            let base_url = resolver.parse(effective)?;
            let resolved = resolver.resolve(&path, &base_url)?;
            (
                Some(resolver.components(&base_url)),
                resolver.components(&resolved),
            )
        }
    };

    let (authority, port_source) = match (policy.authority, &base_parse) {
        (AuthoritySource::Base, Some(base_parse)) => (base_parse, base),
        _ => (&path_parse, Some(path.as_ref())),
    };

    let retained = retained_default_port(port_source, options.keep_port);
    if let Some(port) = retained {
        tracing::trace!(port, "keeping explicit default port");
    }

    let parts = Parts {
        protocol: &authority.protocol,
        username: &authority.username,
        password: &authority.password,
        hostname: &authority.hostname,
        port: retained.or(authority.port),
        pathname: &path_parse.pathname,
        search: &path_parse.search,
        hash: &path_parse.hash,
    };
    let serialized = parts.serialize();
    let port = parts.port;

    tracing::debug!(origin = %serialized.origin, "constructed secure url");

    let Components {
        protocol,
        username,
        password,
        hostname,
        ..
    } = authority.clone();

    Ok(SecureUrl {
        href: serialized.href,
        origin: serialized.origin,
        host: serialized.host,
        protocol,
        username,
        password,
        hostname,
        port,
        pathname: path_parse.pathname,
        hash: path_parse.hash,
        search: path_parse.search,
        search_params: path_parse.search_params,
    })
}
