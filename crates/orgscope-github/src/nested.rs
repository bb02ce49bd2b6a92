//! Key-path lookup into nested JSON objects.

use serde_json::Value;

use crate::error::{Error, Result};

/// Walk `map` along `path`, one object key per step.
///
/// An empty path returns `map` itself.
///
/// # Errors
/// Returns [`Error::KeyNotFound`] naming the first key that is absent, or
/// whose parent is not a JSON object.
pub fn access_nested_map<'a>(map: &'a Value, path: &[&str]) -> Result<&'a Value> {
    path.iter().try_fold(map, |current, key| {
        current
            .as_object()
            .and_then(|obj| obj.get(*key))
            .ok_or_else(|| Error::KeyNotFound((*key).to_string()))
    })
}
