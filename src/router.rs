// SPDX-License-Identifier: PMPL-1.0-or-later

//! Path-to-page dispatch.

use crate::i18n::NAV_LEN;
use serde::Serialize;
use tracing::{debug, warn};

/// Page files in navigation order. Index-aligned with
/// [`crate::i18n::nav_labels`]; both arrays are sized by [`NAV_LEN`].
pub const NAV_PATHS: [&str; NAV_LEN] = [
    "index.html",
    "solution.html",
    "gtm.html",
    "financials.html",
    "incentives.html",
    "timeline.html",
    "dataroom.html",
    "contact.html",
];

/// Logical pages, one initializer each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Solution,
    Gtm,
    Financials,
    Incentives,
    Timeline,
    Dataroom,
    Contact,
    Disclaimer,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[
            Page::Home,
            Page::Solution,
            Page::Gtm,
            Page::Financials,
            Page::Incentives,
            Page::Timeline,
            Page::Dataroom,
            Page::Contact,
            Page::Disclaimer,
        ]
    }

    /// File name the page is served under.
    pub fn file_name(&self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Solution => "solution.html",
            Page::Gtm => "gtm.html",
            Page::Financials => "financials.html",
            Page::Incentives => "incentives.html",
            Page::Timeline => "timeline.html",
            Page::Dataroom => "dataroom.html",
            Page::Contact => "contact.html",
            Page::Disclaimer => "disclaimer.html",
        }
    }

    /// Position in the main navigation. The disclaimer is linked from the
    /// footer only.
    pub fn nav_index(&self) -> Option<usize> {
        NAV_PATHS.iter().position(|p| *p == self.file_name())
    }
}

/// The dispatch table: every known path and the page it boots.
pub const ROUTES: [(&str, Page); 10] = [
    ("/", Page::Home),
    ("/index.html", Page::Home),
    ("/solution.html", Page::Solution),
    ("/gtm.html", Page::Gtm),
    ("/financials.html", Page::Financials),
    ("/incentives.html", Page::Incentives),
    ("/timeline.html", Page::Timeline),
    ("/dataroom.html", Page::Dataroom),
    ("/contact.html", Page::Contact),
    ("/disclaimer.html", Page::Disclaimer),
];

/// Any path ending in `/` routes as the root. Everything else is verbatim.
pub fn normalize_path(path: &str) -> &str {
    if path.ends_with('/') {
        "/"
    } else {
        path
    }
}

pub fn route(path: &str) -> Option<Page> {
    let path = normalize_path(path);
    ROUTES
        .iter()
        .find(|(known, _)| *known == path)
        .map(|&(_, page)| page)
}

/// Run the initializer for `path`, at most once. Unknown paths are a no-op
/// and return `None`.
pub fn dispatch<F, R>(path: &str, init: F) -> Option<R>
where
    F: FnOnce(Page) -> R,
{
    match route(path) {
        Some(page) => {
            debug!(path, ?page, "dispatching page initializer");
            Some(init(page))
        }
        None => {
            warn!(path, "no page initializer for path");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_ten_unique_paths() {
        let paths: HashSet<&str> = ROUTES.iter().map(|(p, _)| *p).collect();
        assert_eq!(paths.len(), 10);
    }

    #[test]
    fn every_page_is_reachable() {
        for page in Page::all() {
            let path = format!("/{}", page.file_name());
            assert_eq!(route(&path), Some(*page));
        }
    }

    #[test]
    fn trailing_slash_routes_home() {
        assert_eq!(route("/"), Some(Page::Home));
        assert_eq!(route("/deck/"), Some(Page::Home));
    }

    #[test]
    fn matching_is_verbatim() {
        assert_eq!(route("/gtm"), None);
        assert_eq!(route("/GTM.html"), None);
        assert_eq!(route("/deck/gtm.html"), None);
    }

    #[test]
    fn nav_paths_match_pages() {
        assert_eq!(Page::Home.nav_index(), Some(0));
        assert_eq!(Page::Contact.nav_index(), Some(7));
        assert_eq!(Page::Disclaimer.nav_index(), None);
    }
}
