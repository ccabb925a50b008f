//! `secure-url resolve <path>` – print the guarded URL.

use anyhow::{Context, Result};
use secure_url_core::config::{self, SecureUrlConfig};
use secure_url_core::{Options, SecureUrl};

use crate::cli::ResolveArgs;

pub fn run_resolve(args: &ResolveArgs) -> Result<()> {
    let url = build(args)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&url)?);
    } else {
        println!("{}", url.href());
    }
    Ok(())
}

/// Builds the URL from config defaults overridden by command-line flags.
pub(super) fn build(args: &ResolveArgs) -> Result<SecureUrl> {
    let cfg = match &args.config {
        Some(path) => config::load_from(path)?,
        None => config::load_or_default()?,
    };
    let (base, options) = merge(&cfg, args)?;
    tracing::debug!(mode = %options.mode, keep_port = options.keep_port, "resolve");

    let url = match base {
        Some(base) => SecureUrl::new(args.path.as_str(), base, options),
        None => SecureUrl::with_options(args.path.as_str(), options),
    };
    url.with_context(|| format!("cannot resolve {:?}", args.path))
}

fn merge<'a>(
    cfg: &'a SecureUrlConfig,
    args: &'a ResolveArgs,
) -> Result<(Option<&'a str>, Options)> {
    let mut options = cfg.options()?;
    if let Some(mode) = args.mode {
        options = options.with_mode(mode);
    }
    if let Some(keep_port) = args.keep_port {
        options = options.with_keep_port(keep_port);
    }
    let base = args.base.as_deref().or(cfg.base.as_deref());
    Ok((base, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secure_url_core::{Mode, RawOptions};

    fn args(path: &str) -> ResolveArgs {
        ResolveArgs {
            path: path.to_string(),
            base: None,
            mode: None,
            keep_port: None,
            json: false,
            config: None,
        }
    }

    fn cfg() -> SecureUrlConfig {
        SecureUrlConfig {
            base: Some("https://cfg.local/".to_string()),
            options: RawOptions::from(Options::new(Mode::Relax, false)),
        }
    }

    #[test]
    fn config_supplies_defaults() {
        let cfg = cfg();
        let a = args("/x");
        let (base, options) = merge(&cfg, &a).unwrap();
        assert_eq!(base, Some("https://cfg.local/"));
        assert_eq!(options, Options::new(Mode::Relax, false));
    }

    #[test]
    fn flags_override_config() {
        let cfg = cfg();
        let mut a = args("/x");
        a.base = Some("https://flag.local/".to_string());
        a.mode = Some(Mode::Path);
        a.keep_port = Some(true);
        let (base, options) = merge(&cfg, &a).unwrap();
        assert_eq!(base, Some("https://flag.local/"));
        assert_eq!(options, Options::default());
    }

    #[test]
    fn invalid_config_options_fail() {
        let cfg = SecureUrlConfig {
            base: None,
            options: RawOptions {
                mode: Some(serde_json::json!("strict")),
                keep_port: None,
            },
        };
        assert!(merge(&cfg, &args("/x")).is_err());
    }
}
