//! # orgscope-collect
//!
//! Asynchronous number generation and collection: a finite stream of random
//! numbers, a collector that drains any stream into an ordered list, and a
//! helper that times several collections running concurrently.

mod comprehension;
mod error;
mod generator;
mod runtime;

pub use comprehension::{
    async_comprehension, async_comprehension_with, collect_numbers, try_collect_numbers,
};
pub use error::{Error, Result};
pub use generator::{NumberSource, random_numbers};
pub use runtime::{DEFAULT_PARALLEL, measure_runtime, measure_runtime_with};
