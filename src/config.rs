// SPDX-License-Identifier: PMPL-1.0-or-later

//! `pitchdeck.yaml` configuration.
//!
//! Every key is optional:
//!
//! ```yaml
//! data: data/site.json              # path or http(s) URL
//! state_file: .pitchdeck/state.json # dataroom gate store
//! form_endpoint: https://formspree.io/f/xxxxxxx
//! chart_script: https://cdn.jsdelivr.net/npm/chart.js
//! base_url: http://localhost:8000
//! ```
//!
//! `PITCHDECK_FORM_ENDPOINT` overrides `form_endpoint`.

use crate::gate::{EmailCapture, HttpCapture, NoCapture};
use crate::loader::{DataSource, DEFAULT_DATA_PATH};
use crate::page::DEFAULT_CHART_SCRIPT;
use crate::render::dataroom::ClientGate;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "pitchdeck.yaml";
pub const FORM_ENDPOINT_ENV: &str = "PITCHDECK_FORM_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub data: String,
    pub state_file: PathBuf,
    pub form_endpoint: Option<String>,
    pub chart_script: String,
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data: DEFAULT_DATA_PATH.to_string(),
            state_file: PathBuf::from(".pitchdeck/state.json"),
            form_endpoint: None,
            chart_script: DEFAULT_CHART_SCRIPT.to_string(),
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load from an explicit path (must exist) or from `pitchdeck.yaml` in
    /// the working directory (optional), then apply the environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        if let Ok(endpoint) = env::var(FORM_ENDPOINT_ENV) {
            config.form_endpoint = Some(endpoint);
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn data_source(&self) -> DataSource {
        DataSource::parse(&self.data)
    }

    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url).with_context(|| format!("invalid base_url {}", self.base_url))
    }

    /// Resolve a page reference that may be a full URL or a bare path such
    /// as `/gtm.html?lang=pt`.
    pub fn page_url(&self, target: &str) -> Result<Url> {
        match Url::parse(target) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => self
                .base_url()?
                .join(target)
                .with_context(|| format!("invalid page path {}", target)),
            Err(err) => Err(anyhow!("invalid page url {}: {}", target, err)),
        }
    }

    /// Configured endpoint, treating an empty value as unset.
    pub fn form_endpoint(&self) -> Option<&str> {
        self.form_endpoint
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Browser-side gate settings. A local data file is published at
    /// [`DEFAULT_DATA_PATH`] next to the pages; a remote one is fetched
    /// where it lives.
    pub fn client_gate(&self) -> ClientGate {
        let data_url = match self.data_source() {
            DataSource::Remote(url) => url.to_string(),
            DataSource::File(_) => DEFAULT_DATA_PATH.to_string(),
        };
        ClientGate {
            data_url,
            form_endpoint: self.form_endpoint().map(str::to_string),
        }
    }

    pub fn email_capture(&self) -> Result<Box<dyn EmailCapture>> {
        match self.form_endpoint() {
            Some(endpoint) => {
                let url = Url::parse(endpoint)
                    .with_context(|| format!("invalid form_endpoint {}", endpoint))?;
                Ok(Box::new(HttpCapture::new(url)?))
            }
            None => Ok(Box::new(NoCapture)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        assert_eq!(SiteConfig::from_yaml("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = SiteConfig::from_yaml("data: https://cdn.example.com/site.json\n").unwrap();
        assert!(matches!(config.data_source(), DataSource::Remote(_)));
        assert_eq!(config.state_file, PathBuf::from(".pitchdeck/state.json"));
        assert_eq!(config.form_endpoint(), None);
    }

    #[test]
    fn blank_endpoint_means_no_capture() {
        let config = SiteConfig::from_yaml("form_endpoint: \"  \"\n").unwrap();
        assert_eq!(config.form_endpoint(), None);
    }

    #[test]
    fn client_gate_follows_data_source() {
        let local = SiteConfig::from_yaml("data: content/deck.json\nform_endpoint: https://f.io/x\n")
            .unwrap()
            .client_gate();
        assert_eq!(local.data_url, "data/site.json");
        assert_eq!(local.form_endpoint.as_deref(), Some("https://f.io/x"));

        let remote = SiteConfig::from_yaml("data: https://cdn.example.com/site.json\n")
            .unwrap()
            .client_gate();
        assert_eq!(remote.data_url, "https://cdn.example.com/site.json");
        assert_eq!(remote.form_endpoint, None);
    }

    #[test]
    fn page_url_accepts_paths_and_urls() {
        let config = SiteConfig::default();
        assert_eq!(
            config.page_url("/gtm.html?lang=pt").unwrap().as_str(),
            "http://localhost:8000/gtm.html?lang=pt"
        );
        assert_eq!(
            config.page_url("https://deck.example.com/").unwrap().path(),
            "/"
        );
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        assert!(SiteConfig::load(Some(Path::new("/no/such/pitchdeck.yaml"))).is_err());
    }
}
