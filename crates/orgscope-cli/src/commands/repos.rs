//! `orgscope repos` command - List an organization's public repositories.

use std::path::Path;

use anyhow::{Context, Result};

use super::utils;
use crate::config::Config;
use crate::output;

/// Run the repos command.
pub fn run(
    name: &str,
    license: Option<&str>,
    json: bool,
    config: &Config,
    replay: Option<&Path>,
) -> Result<()> {
    let client = utils::org_client(name, config, replay)?;
    let rt = utils::runtime()?;

    if json {
        let repos = rt
            .block_on(client.repo_summaries(license))
            .with_context(|| format!("Failed to list repositories of `{name}`"))?;
        return output::json(&repos);
    }

    let repos = rt
        .block_on(client.public_repos(license))
        .with_context(|| format!("Failed to list repositories of `{name}`"))?;

    match license {
        Some(key) => output::info(&format!(
            "{} repositories in {name} licensed {key}",
            repos.len()
        )),
        None => output::info(&format!("{} repositories in {name}", repos.len())),
    }
    for repo in &repos {
        output::essential(repo);
    }

    Ok(())
}
