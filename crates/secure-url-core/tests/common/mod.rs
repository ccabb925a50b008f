//! Shared helpers for table-driven construction tests.

use secure_url_core::{Mode, Options, SecureUrl};

pub struct Case {
    pub name: &'static str,
    pub path: &'static str,
    pub base: &'static str,
    pub expected_href: &'static str,
}

/// Builds every case with the given options and compares hrefs, reporting all
/// mismatches at once.
pub fn check_hrefs(mode: Mode, keep_port: bool, cases: &[Case]) {
    let options = Options::new(mode, keep_port);
    let failures: Vec<String> = cases
        .iter()
        .filter_map(|case| {
            let url = match SecureUrl::new(case.path, case.base, options) {
                Ok(url) => url,
                Err(e) => return Some(format!("{}: error {e}", case.name)),
            };
            (url.href() != case.expected_href).then(|| {
                format!(
                    "{}: path={} base={} expected {} got {}",
                    case.name, case.path, case.base, case.expected_href, url.href()
                )
            })
        })
        .collect();
    assert!(
        failures.is_empty(),
        "mode={mode} keep_port={keep_port}\n{}",
        failures.join("\n")
    );
}
