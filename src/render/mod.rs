// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fragment renderers.
//!
//! Every renderer is a pure function of the loaded [`SiteData`] and a
//! [`RenderContext`] and returns a [`Node`]. Absent data never fails a
//! render: it becomes the "Data needed" badge produced by [`data_needed`].
//!
//! [`SiteData`]: crate::types::SiteData

pub mod chrome;
pub mod dataroom;
pub mod format;
pub mod sections;

use crate::i18n::{self, Lang};
use crate::markup::{Element, Node};
use chrono::{Datelike, NaiveDate};
use url::Url;

pub use format::fmt_eur;

/// Visible marker substituted for any absent data field.
pub const PLACEHOLDER: &str = "Data needed";

/// Per-page-load rendering inputs: the page URL, the language resolved
/// from it, and the date printed in the footer.
#[derive(Debug, Clone)]
pub struct RenderContext {
    lang: Lang,
    url: Url,
    today: NaiveDate,
}

impl RenderContext {
    pub fn new(url: Url, today: NaiveDate) -> Self {
        Self {
            lang: i18n::resolve_language(&url),
            url,
            today,
        }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn year(&self) -> i32 {
        self.today.year()
    }

    pub fn t(&self, key: &str) -> &'static str {
        i18n::t(self.lang, key)
    }

    /// Link to a sibling page that keeps the current language.
    pub fn page_href(&self, file: &str) -> String {
        format!("{}?lang={}", file, self.lang.code())
    }
}

pub fn data_needed(ctx: &RenderContext) -> Node {
    Element::new("span")
        .class("badge")
        .attr("title", ctx.t("ui.placeholder_hint"))
        .text(PLACEHOLDER)
        .into()
}

pub fn text_or_placeholder(value: Option<&str>, ctx: &RenderContext) -> Node {
    match value {
        Some(text) => Node::text(text),
        None => data_needed(ctx),
    }
}

/// `items` joined with `separator`, or the placeholder for an empty list.
pub fn joined_or_placeholder(items: &[String], separator: &str, ctx: &RenderContext) -> Node {
    if items.is_empty() {
        data_needed(ctx)
    } else {
        Node::text(items.join(separator))
    }
}

/// Bold label followed by a value, e.g. `<strong>USP:</strong> value`.
pub(crate) fn labelled(tag: &'static str, label: &str, value: Node) -> Element {
    Element::new(tag)
        .child(Element::new("strong").text(format!("{}:", label)))
        .text(" ")
        .child(value)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::RenderContext;
    use chrono::NaiveDate;
    use url::Url;

    pub fn ctx(raw_url: &str) -> RenderContext {
        let url = Url::parse(raw_url).unwrap();
        RenderContext::new(url, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::ctx;
    use super::*;

    #[test]
    fn context_resolves_language_from_url() {
        let c = ctx("http://localhost/gtm.html?lang=pt");
        assert_eq!(c.lang(), Lang::Pt);
        assert_eq!(c.path(), "/gtm.html");
        assert_eq!(c.year(), 2026);
        assert_eq!(c.page_href("contact.html"), "contact.html?lang=pt");
    }

    #[test]
    fn placeholder_for_missing_text() {
        let c = ctx("http://localhost/");
        assert_eq!(text_or_placeholder(None, &c).text_content(), PLACEHOLDER);
        assert_eq!(text_or_placeholder(Some("Acme"), &c).text_content(), "Acme");
        assert!(data_needed(&c).to_html().contains("class=\"badge\""));
    }

    #[test]
    fn joined_list_or_placeholder() {
        let c = ctx("http://localhost/");
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(joined_or_placeholder(&items, ", ", &c).text_content(), "a, b");
        assert_eq!(joined_or_placeholder(&[], ", ", &c).text_content(), PLACEHOLDER);
    }
}
