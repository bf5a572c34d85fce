// SPDX-License-Identifier: PMPL-1.0-or-later

//! Site data loading.
//!
//! One uncached read per page load, no retry and no fallback document.

use crate::error::{SiteError, SiteResult};
use crate::types::SiteData;
use reqwest::header::CACHE_CONTROL;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use url::Url;

/// Location of the data document relative to the site root.
pub const DEFAULT_DATA_PATH: &str = "data/site.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Remote(Url),
}

impl DataSource {
    /// `http://` and `https://` locations are fetched remotely, anything
    /// else is a filesystem path.
    pub fn parse(location: &str) -> Self {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => DataSource::Remote(url),
            _ => DataSource::File(PathBuf::from(location)),
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::File(PathBuf::from(DEFAULT_DATA_PATH))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Remote(url) => write!(f, "{}", url),
        }
    }
}

pub fn load(source: &DataSource) -> SiteResult<SiteData> {
    debug!(%source, "loading site data");
    let body = match source {
        DataSource::File(path) => fs::read_to_string(path)
            .map_err(|err| SiteError::data_unavailable(source.to_string(), err))?,
        DataSource::Remote(url) => fetch_remote(url)
            .map_err(|err| SiteError::data_unavailable(source.to_string(), err))?,
    };
    parse(&body, &source.to_string())
}

/// Parse a data document already in memory.
pub fn parse(body: &str, location: &str) -> SiteResult<SiteData> {
    serde_json::from_str(body).map_err(|err| SiteError::data_unavailable(location, err))
}

fn fetch_remote(url: &Url) -> reqwest::Result<String> {
    reqwest::blocking::Client::new()
        .get(url.clone())
        .header(CACHE_CONTROL, "no-store")
        .send()?
        .error_for_status()?
        .text()
}
