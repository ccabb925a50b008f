//! `secure-url sanitize <path>` – show what the sanitizer does to a path.

use secure_url_core::sanitize_path;

pub fn run_sanitize(path: &str) {
    println!("{}", sanitize_path(path));
}
