//! `orgscope runtime` command - Time concurrent collections.

use std::time::Duration;

use anyhow::Result;
use orgscope_collect::measure_runtime_with;

use super::utils;
use crate::config::Config;
use crate::output;

/// Run the runtime command.
pub fn run(
    parallel: Option<usize>,
    count: Option<usize>,
    delay_ms: Option<u64>,
    config: &Config,
) -> Result<()> {
    let parallel = parallel.unwrap_or(config.collect.parallel);
    let mut source = config.collect.source()?;
    if let Some(count) = count {
        source = source.with_count(count);
    }
    if let Some(ms) = delay_ms {
        source = source.with_delay(Duration::from_millis(ms));
    }

    let rt = utils::runtime()?;
    let elapsed = rt.block_on(measure_runtime_with(parallel, source));

    output::success(&format!(
        "{parallel} collections of {} numbers finished",
        source.count
    ));
    output::essential(&format!("{:.3}s", elapsed.as_secs_f64()));

    Ok(())
}
