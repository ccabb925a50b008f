//! `secure-url origin <path>` – print only the origin of the guarded URL.

use anyhow::Result;

use super::resolve::build;
use crate::cli::ResolveArgs;

pub fn run_origin(args: &ResolveArgs) -> Result<()> {
    let url = build(args)?;
    if args.json {
        println!("{}", serde_json::json!({ "origin": url.origin(), "host": url.host() }));
    } else {
        println!("{}", url.origin());
    }
    Ok(())
}
