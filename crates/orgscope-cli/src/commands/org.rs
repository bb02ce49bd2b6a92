//! `orgscope org` command - Show an organization's metadata.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use super::utils;
use crate::config::Config;
use crate::output;

/// Fields shown in the human-readable summary, in order.
const SUMMARY_FIELDS: &[&str] = &[
    "login",
    "name",
    "description",
    "blog",
    "public_repos",
    "repos_url",
];

/// Run the org command.
pub fn run(name: &str, json: bool, config: &Config, replay: Option<&Path>) -> Result<()> {
    let client = utils::org_client(name, config, replay)?;
    let rt = utils::runtime()?;

    let org = rt
        .block_on(client.org())
        .with_context(|| format!("Failed to fetch organization `{name}`"))?;

    if json {
        return output::json(org);
    }

    output::info(&format!("Organization {}", client.org_name()));
    for key in SUMMARY_FIELDS {
        match org.get(*key) {
            None | Some(Value::Null) => {}
            Some(Value::String(s)) => output::field(key, s),
            Some(other) => output::field(key, &other.to_string()),
        }
    }

    Ok(())
}
