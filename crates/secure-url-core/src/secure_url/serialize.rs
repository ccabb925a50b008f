//! Reassembly of `href`, `origin` and `host` from individual fields.

use crate::port::is_hierarchical;

/// Borrowed view of the merged fields, in serialization order.
pub(super) struct Parts<'a> {
    pub protocol: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub hostname: &'a str,
    pub port: Option<u16>,
    pub pathname: &'a str,
    pub search: &'a str,
    pub hash: &'a str,
}

pub(super) struct Serialized {
    pub href: String,
    pub origin: String,
    pub host: String,
}

impl Parts<'_> {
    pub(super) fn serialize(&self) -> Serialized {
        let hierarchical = is_hierarchical(self.protocol);
        // Port 0 is treated as absent.
        let port = self.port.filter(|&p| p != 0);

        let mut host = String::from(self.hostname);
        if let Some(port) = port {
            host.push(':');
            host.push_str(&port.to_string());
        }

        let mut href = String::from(self.protocol);
        if hierarchical {
            href.push_str("//");
        }
        if !self.username.is_empty() {
            href.push_str(self.username);
            if !self.password.is_empty() {
                href.push(':');
                href.push_str(self.password);
            }
            href.push('@');
        }
        href.push_str(&host);
        href.push_str(self.pathname);
        href.push_str(self.search);
        href.push_str(self.hash);

        let origin = if hierarchical {
            format!("{}//{}", self.protocol, host)
        } else {
            "null".to_string()
        };

        Serialized { href, origin, host }
    }
}
