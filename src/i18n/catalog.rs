// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for the pitch-deck site.
//!
//! All user-facing strings live here as compile-time static tables. Lookup
//! is a linear scan over a few dozen keys, once per rendered fragment.
//!
//! ## Adding a new key
//!
//! 1. Add the English entry to `EN`
//! 2. Add the Portuguese entry to `PT` (missing keys fall back to English)
//!
//! Navigation labels are not keyed: they are a fixed-size array aligned
//! index-for-index with [`crate::router::NAV_PATHS`].

use serde::{Deserialize, Serialize};

/// Number of entries in the main navigation.
pub const NAV_LEN: usize = 8;

/// Supported site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Pt,
}

impl Lang {
    /// ISO 639-1 two-letter code, as used in the `lang` query parameter.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Pt => "pt",
        }
    }

    /// Parse a language code. Case-sensitive, exact match only.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "pt" => Some(Lang::Pt),
            _ => None,
        }
    }

    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Pt]
    }

    /// The language the header toggle switches to.
    pub fn other(&self) -> Lang {
        match self {
            Lang::En => Lang::Pt,
            Lang::Pt => Lang::En,
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up a translation key, falling back to English.
///
/// Unknown keys return `""`.
///
/// ```
/// use pitchdeck::i18n::{t, Lang};
/// assert_eq!(t(Lang::En, "ui.print"), "Print");
/// assert_eq!(t(Lang::Pt, "ui.print"), "Imprimir");
/// ```
pub fn t(lang: Lang, key: &str) -> &'static str {
    if let Some(value) = lookup(catalog_for(lang), key) {
        return value;
    }
    if lang != Lang::En {
        if let Some(value) = lookup(EN, key) {
            return value;
        }
    }
    ""
}

/// Navigation labels in display order.
pub fn nav_labels(lang: Lang) -> &'static [&'static str; NAV_LEN] {
    match lang {
        Lang::En => &NAV_EN,
        Lang::Pt => &NAV_PT,
    }
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog.iter().find(|(k, _)| *k == key).map(|&(_, v)| v)
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Pt => PT,
    }
}

const NAV_EN: [&str; NAV_LEN] = [
    "Home",
    "Solution",
    "GTM",
    "Financials",
    "Incentives",
    "Timeline",
    "Dataroom",
    "Contact",
];

const NAV_PT: [&str; NAV_LEN] = [
    "Início",
    "Solução",
    "GTM",
    "Financeiros",
    "Incentivos",
    "Cronograma",
    "Dataroom",
    "Contacto",
];

// ─── English (source language, defines every key) ────────────────────────────────

const EN: &[(&str, &str)] = &[
    ("ui.confidential", "Confidential"),
    ("ui.contact", "Contact"),
    ("ui.dataroom", "Dataroom"),
    ("ui.access", "Access"),
    ("ui.print", "Print"),
    ("ui.toggle_language", "Toggle language"),
    ("ui.main_nav", "Main navigation"),
    ("ui.placeholder_hint", "Fill this in data/site.json"),
    ("footer.printed", "Printed"),
    ("cash.trough", "Cash trough"),
    ("cash.funding_hint", "Funding ask should cover trough + buffer."),
    ("problem.title", "Market Pain & Opportunity"),
    ("solution.title", "Model & Differentiation"),
    ("solution.summary", "Model summary"),
    ("solution.lanes", "Lanes"),
    ("solution.usp", "USP"),
    ("gtm.title", "Go-to-Market"),
    ("gtm.tier1", "Public Tier 1"),
    ("gtm.tier2", "Private Tier 2"),
    ("gtm.alliances", "Alliances"),
    ("gtm.strategy", "Strategy"),
    ("financials.title", "Financials"),
    ("financials.revenue", "Revenue (EUR)"),
    ("financials.ebitda", "EBITDA (EUR)"),
    ("financials.gm", "GM %"),
    ("incentives.title", "Incentives"),
    ("incentives.eligibility", "Eligibility: adapt to the call notice. (Placeholder)"),
    ("timeline.title", "90-day plan"),
    ("dataroom.gate_intro", "Leave your email to access the dataroom."),
    ("dataroom.email", "Email"),
    ("dataroom.invalid_email", "Invalid email"),
    ("contact.email", "Email"),
    ("contact.phone", "Phone"),
    ("legal.title", "Disclaimer"),
    ("legal.jurisdiction", "Jurisdiction"),
];

// ─── Portuguese ─────────────────────────────────────────────────────

const PT: &[(&str, &str)] = &[
    ("ui.confidential", "Confidencial"),
    ("ui.contact", "Contacto"),
    ("ui.dataroom", "Dataroom"),
    ("ui.access", "Aceder"),
    ("ui.print", "Imprimir"),
    ("ui.toggle_language", "Mudar idioma"),
    ("ui.main_nav", "Navegação principal"),
    ("ui.placeholder_hint", "Preencher em data/site.json"),
    ("footer.printed", "Impresso"),
    ("cash.trough", "Pico negativo de caixa"),
    ("cash.funding_hint", "Pedido deve cobrir pico + almofada."),
    ("problem.title", "Dor de Mercado & Oportunidade"),
    ("solution.title", "Modelo & Diferenciação"),
    ("solution.summary", "Resumo do Modelo"),
    ("solution.lanes", "Linhas"),
    ("solution.usp", "USP"),
    ("gtm.title", "Go-to-Market"),
    ("gtm.tier1", "Público Tier 1"),
    ("gtm.tier2", "Privado Tier 2"),
    ("gtm.alliances", "Alianças"),
    ("gtm.strategy", "Estratégia"),
    ("financials.title", "Financeiros"),
    ("financials.revenue", "Receita (EUR)"),
    ("financials.ebitda", "EBITDA (EUR)"),
    ("financials.gm", "MB %"),
    ("incentives.title", "Incentivos"),
    ("incentives.eligibility", "Elegibilidade: adaptar conforme aviso. (Placeholder)"),
    ("timeline.title", "Plano a 90 dias"),
    ("dataroom.gate_intro", "Deixe o seu email para aceder ao dataroom."),
    ("dataroom.email", "Email"),
    ("dataroom.invalid_email", "Email inválido"),
    ("contact.email", "Email"),
    ("contact.phone", "Telefone"),
    ("legal.title", "Aviso Legal"),
    ("legal.jurisdiction", "Jurisdição"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_keys_all_resolve() {
        for &(key, _) in EN {
            let result = t(Lang::En, key);
            assert!(!result.is_empty(), "EN key '{}' should resolve", key);
        }
    }

    #[test]
    fn portuguese_lookup() {
        assert_eq!(t(Lang::Pt, "ui.confidential"), "Confidencial");
        assert_eq!(t(Lang::Pt, "cash.trough"), "Pico negativo de caixa");
    }

    #[test]
    fn unknown_key_returns_empty() {
        assert_eq!(t(Lang::En, "nonexistent.key"), "");
        assert_eq!(t(Lang::Pt, "nonexistent.key"), "");
    }

    #[test]
    fn lang_roundtrip() {
        for lang in Lang::all() {
            let parsed = Lang::from_code(lang.code()).expect("should parse");
            assert_eq!(*lang, parsed);
            assert_eq!(lang.other().other(), *lang);
        }
        assert_eq!(Lang::from_code("PT"), None);
    }

    #[test]
    fn catalogs_share_keys() {
        assert_eq!(PT.len(), EN.len(), "PT catalog key count mismatch");
        for &(key, _) in EN {
            assert!(
                lookup(PT, key).is_some(),
                "PT catalog is missing '{}'",
                key
            );
        }
    }

    #[test]
    fn nav_labels_resolve_for_every_language() {
        for lang in Lang::all() {
            let labels = nav_labels(*lang);
            assert!(labels.iter().all(|l| !l.is_empty()));
        }
        assert_eq!(nav_labels(Lang::En)[0], "Home");
        assert_eq!(nav_labels(Lang::Pt)[0], "Início");
    }
}
