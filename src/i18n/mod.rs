// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for the pitch-deck site.
//!
//! ## Supported languages
//!
//! | Code | Language   | Native name |
//! |------|------------|-------------|
//! | en   | English    | English     |
//! | pt   | Portuguese | Português   |
//!
//! The active language is derived once per page load from the `lang` query
//! parameter and threaded into every renderer that emits text. Anything
//! other than an exact `pt` resolves to English.

mod catalog;

pub use catalog::{nav_labels, t, Lang, NAV_LEN};

use url::Url;

/// Resolve the page language from the first `lang` query parameter.
///
/// ```
/// use pitchdeck::i18n::{resolve_language, Lang};
/// let url = url::Url::parse("http://localhost/gtm.html?lang=pt").unwrap();
/// assert_eq!(resolve_language(&url), Lang::Pt);
/// ```
pub fn resolve_language(url: &Url) -> Lang {
    let param = url
        .query_pairs()
        .find(|(key, _)| key == "lang")
        .map(|(_, value)| value.into_owned());
    match param.as_deref() {
        Some("pt") => Lang::Pt,
        _ => Lang::En,
    }
}
