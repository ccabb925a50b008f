//! Scheme tables: default ports and hierarchical protocols.

/// Schemes whose default port survives serialization when it was written
/// explicitly in the input. Order matters: the first matching entry wins.
pub const DEFAULT_PORTS: [(&str, u16); 5] = [
    ("ftp", 21),
    ("http", 80),
    ("https", 443),
    ("ws", 80),
    ("wss", 443),
];

/// Protocols serialized with `//` after the colon and given a real origin.
pub const HIERARCHICAL_PROTOCOLS: [&str; 5] = ["ftp:", "http:", "https:", "ws:", "wss:"];

/// Returns the default port of the first table scheme that `input` starts
/// with (as `<scheme>://`) and whose `:<port>` occurs anywhere in `input`.
///
/// This is a plain substring test, so `https://host:4430/` and
/// `https://host/a:443` both match 443. Matching is case-sensitive.
pub fn default_port_match(input: &str) -> Option<u16> {
    DEFAULT_PORTS
        .iter()
        .find(|(scheme, port)| {
            input
                .strip_prefix(scheme)
                .map_or(false, |rest| rest.starts_with("://"))
                && input.contains(&format!(":{port}"))
        })
        .map(|&(_, port)| port)
}

/// Default port to force into the result, if retention is enabled and the raw
/// input spelled one out.
pub(crate) fn retained_default_port(input: Option<&str>, keep_port: bool) -> Option<u16> {
    if !keep_port {
        return None;
    }
    input.and_then(default_port_match)
}

/// Exact match on the colon-terminated protocol token.
pub fn is_hierarchical(protocol: &str) -> bool {
    HIERARCHICAL_PROTOCOLS.contains(&protocol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_explicit_default_ports() {
        assert_eq!(default_port_match("ftp://files.local:21/"), Some(21));
        assert_eq!(default_port_match("http://localhost.local:80/"), Some(80));
        assert_eq!(default_port_match("https://localhost.local:443/"), Some(443));
        assert_eq!(default_port_match("ws://localhost.local:80/socket"), Some(80));
        assert_eq!(default_port_match("wss://localhost.local:443/socket"), Some(443));
    }

    #[test]
    fn no_match_without_port_or_with_other_port() {
        assert_eq!(default_port_match("https://localhost.local/"), None);
        assert_eq!(default_port_match("https://localhost.local:8443/"), None);
        assert_eq!(default_port_match("http://localhost.local:9090/"), None);
    }

    #[test]
    fn needs_scheme_prefix_with_slashes() {
        assert_eq!(default_port_match("//localhost.local:443/"), None);
        assert_eq!(default_port_match("/hello:443"), None);
        assert_eq!(default_port_match("https:localhost.local:443"), None);
        assert_eq!(default_port_match("HTTPS://localhost.local:443/"), None);
    }

    #[test]
    fn substring_test_is_loose() {
        assert_eq!(default_port_match("https://localhost.local:4430/"), Some(443));
        assert_eq!(default_port_match("http://localhost.local/a:80"), Some(80));
        assert_eq!(default_port_match("http://localhost.local:8080/"), Some(80));
    }

    #[test]
    fn retention_respects_flag_and_absence() {
        assert_eq!(retained_default_port(Some("https://a:443/"), true), Some(443));
        assert_eq!(retained_default_port(Some("https://a:443/"), false), None);
        assert_eq!(retained_default_port(None, true), None);
    }

    #[test]
    fn hierarchical_protocols() {
        for p in HIERARCHICAL_PROTOCOLS {
            assert!(is_hierarchical(p));
        }
        assert!(!is_hierarchical("mailto:"));
        assert!(!is_hierarchical("file:"));
        assert!(!is_hierarchical("https"));
    }
}
