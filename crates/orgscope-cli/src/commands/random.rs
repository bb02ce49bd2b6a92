//! `orgscope random` command - Collect random numbers from the async generator.

use std::time::Duration;

use anyhow::Result;
use orgscope_collect::async_comprehension_with;

use super::utils;
use crate::config::Config;
use crate::output;

/// Run the random command.
pub fn run(
    count: Option<usize>,
    delay_ms: Option<u64>,
    json: bool,
    config: &Config,
) -> Result<()> {
    let mut source = config.collect.source()?;
    if let Some(count) = count {
        source = source.with_count(count);
    }
    if let Some(ms) = delay_ms {
        source = source.with_delay(Duration::from_millis(ms));
    }

    let rt = utils::runtime()?;
    let numbers = rt.block_on(async_comprehension_with(source));

    if json {
        return output::json(&numbers);
    }

    output::info(&format!("Collected {} numbers", numbers.len()));
    for n in &numbers {
        output::essential(&n.to_string());
    }

    Ok(())
}
