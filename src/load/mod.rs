// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a data directory from disk.
//!
//! A data directory holds a `manifest.json` naming one or more record files,
//! plus an optional catalog and saved filter state. Record files are read in
//! parallel (when the `parallel` feature is on) and concatenated in manifest
//! order, so record order on disk is record order in memory.
//!
//! A records file that is not a JSON array fails the load. A row inside it
//! that is not record-shaped is skipped and counted in
//! [`Dataset::skipped_records`].

pub mod manifest;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::types::{FilterState, FilterableRecord, SearchableEntry};

pub use manifest::{InputManifest, MANIFEST_VERSION};

/// Rows per page when neither the manifest nor the caller picks one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Everything a data directory provides.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<FilterableRecord>,
    /// `None` when the manifest names no catalog.
    pub catalog: Option<Vec<SearchableEntry>>,
    /// `None` when the manifest names no saved filter state.
    pub filters: Option<FilterState>,
    pub page_size: usize,
    /// Record rows dropped because they were not record-shaped.
    pub skipped_records: usize,
}

/// Read and deserialize one JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read `manifest.json` from `input_dir` and check its version.
pub fn read_manifest(input_dir: &Path) -> Result<InputManifest> {
    let manifest: InputManifest = read_json(&input_dir.join("manifest.json"))?;
    if manifest.version != MANIFEST_VERSION {
        return Err(Error::UnsupportedVersion {
            found: manifest.version,
            expected: MANIFEST_VERSION,
        });
    }
    manifest.warn_unknown_keys();
    Ok(manifest)
}

/// Records decoded from one or more files, plus how many rows were dropped.
#[derive(Debug, Clone, Default)]
pub struct RecordBatch {
    pub records: Vec<FilterableRecord>,
    /// Array elements that were valid JSON but not record-shaped.
    pub skipped: usize,
}

impl RecordBatch {
    fn extend(&mut self, other: RecordBatch) {
        self.records.extend(other.records);
        self.skipped += other.skipped;
    }
}

/// Decode one records file element by element.
///
/// The file itself must be a JSON array; a file that isn't is an error. A
/// single element of the wrong shape (a numeric `date`, `skills` given as a
/// string) is skipped and counted instead of failing the whole file.
fn read_record_file(input_dir: &Path, filename: &str) -> Result<RecordBatch> {
    let path = input_dir.join(filename);
    let rows: Vec<serde_json::Value> = read_json(&path)?;

    let mut batch = RecordBatch::default();
    for (index, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<FilterableRecord>(row) {
            Ok(record) => batch.records.push(record),
            Err(e) => {
                tracing::debug!(file = %path.display(), index, error = %e, "skipped malformed record");
                batch.skipped += 1;
            }
        }
    }
    Ok(batch)
}

/// Load every record file listed in the manifest, in manifest order.
#[cfg(feature = "parallel")]
pub fn load_records(input_dir: &Path, manifest: &InputManifest) -> Result<RecordBatch> {
    use rayon::prelude::*;

    let batches = manifest
        .records
        .par_iter()
        .map(|filename| read_record_file(input_dir, filename))
        .collect::<Result<Vec<_>>>()?;

    let mut all = RecordBatch::default();
    for batch in batches {
        all.extend(batch);
    }
    Ok(all)
}

/// Load every record file listed in the manifest, in manifest order.
#[cfg(not(feature = "parallel"))]
pub fn load_records(input_dir: &Path, manifest: &InputManifest) -> Result<RecordBatch> {
    let mut all = RecordBatch::default();
    for filename in &manifest.records {
        all.extend(read_record_file(input_dir, filename)?);
    }
    Ok(all)
}

/// Load a catalog file (a JSON array of searchable entries).
pub fn load_catalog(path: &Path) -> Result<Vec<SearchableEntry>> {
    read_json(path)
}

/// Load a saved filter state.
pub fn load_filter_state(path: &Path) -> Result<FilterState> {
    read_json(path)
}

/// Load a whole data directory.
pub fn load_dataset(input_dir: &Path) -> Result<Dataset> {
    let manifest = read_manifest(input_dir)?;
    let RecordBatch { records, skipped } = load_records(input_dir, &manifest)?;
    if skipped > 0 {
        tracing::warn!(count = skipped, "skipped malformed records");
    }
    let catalog = manifest
        .catalog
        .as_deref()
        .map(|file| load_catalog(&input_dir.join(file)))
        .transpose()?;
    let filters = manifest
        .filters
        .as_deref()
        .map(|file| load_filter_state(&input_dir.join(file)))
        .transpose()?;

    tracing::info!(
        dir = %input_dir.display(),
        files = manifest.records.len(),
        records = records.len(),
        skipped,
        catalog = catalog.as_ref().map_or(0, Vec::len),
        "loaded dataset"
    );

    Ok(Dataset {
        records,
        catalog,
        filters,
        page_size: manifest.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1),
        skipped_records: skipped,
    })
}
