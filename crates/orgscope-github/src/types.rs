//! Organization and repository payload types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Organization metadata as returned by `GET /orgs/{org}`.
///
/// Kept as an untyped JSON object: callers read whichever fields they need.
pub type OrgPayload = serde_json::Map<String, Value>;

/// A repository reduced to the fields orgscope reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    /// Repository name.
    pub name: String,

    /// SPDX-style license key (e.g. `apache-2.0`), if GitHub detected one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl RepoSummary {
    /// Build a summary from one entry of a repos payload.
    ///
    /// Returns `None` when the entry has no string `name`.
    #[must_use]
    pub fn from_payload(repo: &Value) -> Option<Self> {
        let name = repo.get("name")?.as_str()?.to_string();
        let license = repo
            .get("license")
            .and_then(|l| l.get("key"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Some(Self { name, license })
    }
}
