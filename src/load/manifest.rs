// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;
use std::collections::BTreeMap;

/// Manifest format version this build reads.
pub const MANIFEST_VERSION: u32 = 1;

/// `manifest.json` at the root of a data directory.
///
/// Paths are relative to the directory holding the manifest.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InputManifest {
    pub version: u32,
    /// Files holding JSON arrays of records, concatenated in this order.
    #[serde(default)]
    pub records: Vec<String>,
    /// Optional searchable catalog; the built-in one is used otherwise.
    #[serde(default)]
    pub catalog: Option<String>,
    /// Optional saved filter state.
    #[serde(default)]
    pub filters: Option<String>,
    #[serde(default)]
    pub page_size: Option<usize>,
    /// Keys this build doesn't know about. Reported, then ignored.
    #[serde(flatten)]
    pub unknown: BTreeMap<String, serde_json::Value>,
}

impl InputManifest {
    /// Log a warning for every key that will be ignored.
    pub fn warn_unknown_keys(&self) {
        for key in self.unknown.keys() {
            tracing::warn!(key = %key, "unknown manifest key");
        }
    }
}
