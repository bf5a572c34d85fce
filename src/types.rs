// SPDX-License-Identifier: PMPL-1.0-or-later

//! Site data schema.
//!
//! Every section and every field is optional. Renderers never reach into
//! the raw structs; they go through the accessors on [`SiteData`], which
//! collapse "absent", "null" and "empty string" into `None` so the
//! placeholder policy has exactly one shape to handle.
//!
//! There is no validation beyond presence: a field holding the wrong JSON
//! type reads as absent instead of failing the document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Root document loaded from `data/site.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteData {
    #[serde(deserialize_with = "lenient")]
    pub brand: Option<Brand>,
    #[serde(deserialize_with = "lenient")]
    pub problem: Option<Problem>,
    #[serde(deserialize_with = "lenient")]
    pub model: Option<BusinessModel>,
    #[serde(deserialize_with = "lenient")]
    pub gtm: Option<GoToMarket>,
    #[serde(deserialize_with = "lenient")]
    pub financials: Option<Financials>,
    #[serde(deserialize_with = "lenient")]
    pub incentives: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub timeline90: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub dataroom: Option<Vec<DataroomLink>>,
    #[serde(deserialize_with = "lenient")]
    pub contacts: Option<Contacts>,
    #[serde(deserialize_with = "lenient")]
    pub legal: Option<Legal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub tagline: Option<String>,
    #[serde(rename = "logoUrl", deserialize_with = "lenient")]
    pub logo_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub confidential: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Problem {
    #[serde(deserialize_with = "lenient")]
    pub narrative: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub bullets: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessModel {
    #[serde(deserialize_with = "lenient")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub lanes: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub usp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoToMarket {
    #[serde(deserialize_with = "lenient")]
    pub segments: Option<Segments>,
    #[serde(deserialize_with = "lenient")]
    pub strategy: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Segments {
    #[serde(deserialize_with = "lenient")]
    pub tier1_public: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub tier2_private: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub alliances: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Financials {
    #[serde(deserialize_with = "lenient")]
    pub revenue: Option<Vec<SeriesPoint>>,
    #[serde(deserialize_with = "lenient")]
    pub ebitda: Option<Vec<SeriesPoint>>,
    #[serde(rename = "gmPct", deserialize_with = "lenient")]
    pub gm_pct: Option<Vec<SeriesPoint>>,
    /// Raw JSON so a non-numeric entry still parses and renders the placeholder.
    #[serde(rename = "cashTroughEur")]
    pub cash_trough_eur: Option<serde_json::Value>,
}

/// One yearly data point. Money series carry the value under `eur`,
/// the margin series under `pct`; `value` is accepted for both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesPoint {
    #[serde(deserialize_with = "lenient")]
    pub year: Option<i64>,
    #[serde(alias = "eur", alias = "pct", deserialize_with = "lenient")]
    pub value: Option<f64>,
}

impl SeriesPoint {
    pub fn new(year: i64, value: f64) -> Self {
        Self {
            year: Some(year),
            value: Some(value),
        }
    }

    /// Axis label, `Y<year>`.
    pub fn label(&self) -> String {
        match self.year {
            Some(year) => format!("Y{}", year),
            None => "Y?".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataroomLink {
    #[serde(deserialize_with = "lenient")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub href: Option<String>,
}

impl DataroomLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            href: Some(href.to_string()),
        }
    }

    pub fn label(&self) -> Option<&str> {
        text(&self.label)
    }

    /// Link target, with a blank value counting as absent.
    pub fn href(&self) -> Option<&str> {
        text(&self.href)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contacts {
    #[serde(deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Legal {
    #[serde(deserialize_with = "lenient")]
    pub jurisdiction: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub disclaimer: Option<String>,
}

/// Deserialize a field, reading a value of the wrong JSON type as `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            debug!(error = %err, "ignoring mistyped data field");
            None
        }
    }))
}

fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn list(value: &Option<Vec<String>>) -> &[String] {
    value.as_deref().unwrap_or(&[])
}

fn series(value: &Option<Vec<SeriesPoint>>) -> &[SeriesPoint] {
    value.as_deref().unwrap_or(&[])
}

impl SiteData {
    pub fn brand_name(&self) -> Option<&str> {
        self.brand.as_ref().and_then(|b| text(&b.name))
    }

    pub fn brand_tagline(&self) -> Option<&str> {
        self.brand.as_ref().and_then(|b| text(&b.tagline))
    }

    pub fn logo_url(&self) -> Option<&str> {
        self.brand.as_ref().and_then(|b| text(&b.logo_url))
    }

    pub fn is_confidential(&self) -> bool {
        self.brand
            .as_ref()
            .and_then(|b| b.confidential)
            .unwrap_or(false)
    }

    pub fn problem_narrative(&self) -> Option<&str> {
        self.problem.as_ref().and_then(|p| text(&p.narrative))
    }

    pub fn problem_bullets(&self) -> &[String] {
        self.problem.as_ref().map(|p| list(&p.bullets)).unwrap_or(&[])
    }

    pub fn model_summary(&self) -> Option<&str> {
        self.model.as_ref().and_then(|m| text(&m.summary))
    }

    pub fn model_lanes(&self) -> &[String] {
        self.model.as_ref().map(|m| list(&m.lanes)).unwrap_or(&[])
    }

    pub fn model_usp(&self) -> Option<&str> {
        self.model.as_ref().and_then(|m| text(&m.usp))
    }

    fn segments(&self) -> Option<&Segments> {
        self.gtm.as_ref().and_then(|g| g.segments.as_ref())
    }

    pub fn tier1_public(&self) -> &[String] {
        self.segments().map(|s| list(&s.tier1_public)).unwrap_or(&[])
    }

    pub fn tier2_private(&self) -> &[String] {
        self.segments().map(|s| list(&s.tier2_private)).unwrap_or(&[])
    }

    pub fn alliances(&self) -> &[String] {
        self.segments().map(|s| list(&s.alliances)).unwrap_or(&[])
    }

    pub fn strategy(&self) -> &[String] {
        self.gtm.as_ref().map(|g| list(&g.strategy)).unwrap_or(&[])
    }

    pub fn revenue(&self) -> &[SeriesPoint] {
        self.financials.as_ref().map(|f| series(&f.revenue)).unwrap_or(&[])
    }

    pub fn ebitda(&self) -> &[SeriesPoint] {
        self.financials.as_ref().map(|f| series(&f.ebitda)).unwrap_or(&[])
    }

    pub fn gm_pct(&self) -> &[SeriesPoint] {
        self.financials.as_ref().map(|f| series(&f.gm_pct)).unwrap_or(&[])
    }

    /// Cash trough in EUR, only when the document holds a JSON number.
    pub fn cash_trough_eur(&self) -> Option<f64> {
        self.financials
            .as_ref()
            .and_then(|f| f.cash_trough_eur.as_ref())
            .and_then(serde_json::Value::as_f64)
    }

    pub fn incentives(&self) -> &[String] {
        list(&self.incentives)
    }

    pub fn timeline90(&self) -> &[String] {
        list(&self.timeline90)
    }

    pub fn dataroom_links(&self) -> &[DataroomLink] {
        self.dataroom.as_deref().unwrap_or(&[])
    }

    pub fn contact_email(&self) -> Option<&str> {
        self.contacts.as_ref().and_then(|c| text(&c.email))
    }

    pub fn contact_phone(&self) -> Option<&str> {
        self.contacts.as_ref().and_then(|c| text(&c.phone))
    }

    pub fn jurisdiction(&self) -> Option<&str> {
        self.legal.as_ref().and_then(|l| text(&l.jurisdiction))
    }

    pub fn disclaimer(&self) -> Option<&str> {
        self.legal.as_ref().and_then(|l| text(&l.disclaimer))
    }

    /// Dotted paths of every field that would render the placeholder.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let checks: [(&'static str, bool); 23] = [
            ("brand.name", self.brand_name().is_none()),
            ("brand.tagline", self.brand_tagline().is_none()),
            ("brand.logoUrl", self.logo_url().is_none()),
            ("problem.narrative", self.problem_narrative().is_none()),
            ("problem.bullets", self.problem_bullets().is_empty()),
            ("model.summary", self.model_summary().is_none()),
            ("model.lanes", self.model_lanes().is_empty()),
            ("model.usp", self.model_usp().is_none()),
            ("gtm.segments.tier1_public", self.tier1_public().is_empty()),
            ("gtm.segments.tier2_private", self.tier2_private().is_empty()),
            ("gtm.segments.alliances", self.alliances().is_empty()),
            ("gtm.strategy", self.strategy().is_empty()),
            ("financials.revenue", self.revenue().is_empty()),
            ("financials.ebitda", self.ebitda().is_empty()),
            ("financials.gmPct", self.gm_pct().is_empty()),
            ("financials.cashTroughEur", self.cash_trough_eur().is_none()),
            ("incentives", self.incentives().is_empty()),
            ("timeline90", self.timeline90().is_empty()),
            ("dataroom", self.dataroom_links().is_empty()),
            ("contacts.email", self.contact_email().is_none()),
            ("contacts.phone", self.contact_phone().is_none()),
            ("legal.jurisdiction", self.jurisdiction().is_none()),
            ("legal.disclaimer", self.disclaimer().is_none()),
        ];
        checks
            .into_iter()
            .filter(|(_, absent)| *absent)
            .map(|(path, _)| path)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_parses() {
        let data: SiteData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, SiteData::default());
        assert!(data.brand_name().is_none());
        assert!(data.problem_bullets().is_empty());
        assert!(!data.is_confidential());
    }

    #[test]
    fn series_accepts_eur_and_pct_keys() {
        let json = r#"{
            "financials": {
                "revenue": [{"year": 1, "eur": 120000}],
                "gmPct": [{"year": 1, "pct": 42.5}],
                "ebitda": [{"year": 2, "value": -5000}]
            }
        }"#;
        let data: SiteData = serde_json::from_str(json).unwrap();
        assert_eq!(data.revenue()[0].value, Some(120000.0));
        assert_eq!(data.gm_pct()[0].value, Some(42.5));
        assert_eq!(data.ebitda()[0].value, Some(-5000.0));
        assert_eq!(data.ebitda()[0].label(), "Y2");
    }

    #[test]
    fn non_numeric_cash_trough_is_absent() {
        let data: SiteData =
            serde_json::from_str(r#"{"financials": {"cashTroughEur": "TBD"}}"#).unwrap();
        assert!(data.financials.is_some());
        assert_eq!(data.cash_trough_eur(), None);

        let data: SiteData =
            serde_json::from_str(r#"{"financials": {"cashTroughEur": 1500000}}"#).unwrap();
        assert_eq!(data.cash_trough_eur(), Some(1_500_000.0));
    }

    #[test]
    fn mistyped_fields_read_as_absent() {
        let json = r#"{
            "brand": {"name": "Acme", "confidential": "yes"},
            "financials": {"revenue": [{"year": "2025", "eur": 1}], "ebitda": "n/a"},
            "contacts": {"email": ["ir@acme.io"], "phone": 351210000000},
            "incentives": "PT2030",
            "legal": 42
        }"#;
        let data: SiteData = serde_json::from_str(json).unwrap();
        assert_eq!(data.brand_name(), Some("Acme"));
        assert!(!data.is_confidential());
        assert_eq!(data.revenue().len(), 1);
        assert_eq!(data.revenue()[0].label(), "Y?");
        assert_eq!(data.revenue()[0].value, Some(1.0));
        assert!(data.ebitda().is_empty());
        assert_eq!(data.contact_email(), None);
        assert_eq!(data.contact_phone(), None);
        assert!(data.incentives().is_empty());
        assert_eq!(data.jurisdiction(), None);
    }

    #[test]
    fn blank_strings_count_as_missing() {
        let data: SiteData =
            serde_json::from_str(r#"{"brand": {"name": "  ", "tagline": null}}"#).unwrap();
        assert!(data.brand_name().is_none());
        assert!(data.brand_tagline().is_none());
    }

    #[test]
    fn missing_fields_lists_everything_for_empty_document() {
        let missing = SiteData::default().missing_fields();
        assert_eq!(missing.len(), 23);
        assert!(missing.contains(&"dataroom"));
        assert!(missing.contains(&"legal.disclaimer"));
    }

    #[test]
    fn missing_fields_skips_present_values() {
        let data: SiteData = serde_json::from_str(
            r#"{"contacts": {"email": "ir@example.com"}, "timeline90": ["Kickoff"]}"#,
        )
        .unwrap();
        let missing = data.missing_fields();
        assert!(!missing.contains(&"contacts.email"));
        assert!(!missing.contains(&"timeline90"));
        assert!(missing.contains(&"contacts.phone"));
    }
}
