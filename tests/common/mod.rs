// SPDX-License-Identifier: PMPL-1.0-or-later

#![allow(dead_code)]

use chrono::NaiveDate;
use pitchdeck::loader::DataSource;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/site.json")
}

pub fn fixture_source() -> DataSource {
    DataSource::File(fixture_path())
}

/// Data source backed by a temp file holding `json`. Keep the guard alive.
pub fn source_with(json: &str) -> (tempfile::TempDir, DataSource) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("site.json");
    fs::write(&path, json).expect("write data");
    (dir, DataSource::File(path))
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date")
}

pub fn url(path: &str) -> Url {
    Url::parse("http://localhost:8000")
        .and_then(|base| base.join(path))
        .expect("valid url")
}
