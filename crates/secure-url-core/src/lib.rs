//! Resolve untrusted paths against a trusted base URL without letting the
//! path change the base's scheme, host, port or credentials.

pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod port;
pub mod resolver;
pub mod sanitize;
pub mod secure_url;

pub use error::{Error, ResolutionError, Result, ValidationError};
pub use options::{Mode, Options, RawOptions};
pub use port::{default_port_match, is_hierarchical};
pub use resolver::{Components, Resolver, WhatwgResolver};
pub use sanitize::sanitize_path;
pub use secure_url::{SecureUrl, UrlInput};
