// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page initializers.
//!
//! A page load is: route the URL, load the data document, render the
//! shared chrome, then render the page's own slots. [`PageLoader`] owns the
//! collaborators one load needs (data source, state store, chart renderer)
//! and [`RenderedPage`] is the result handed to the document shell.

use crate::chart::ChartRenderer;
use crate::error::SiteResult;
use crate::gate::{self, EmailCapture, GateState};
use crate::i18n::{nav_labels, Lang};
use crate::loader::{self, DataSource};
use crate::markup::{Element, Node};
use crate::render::dataroom::{self, ClientGate};
use crate::render::{chrome, sections, RenderContext};
use crate::router::{self, Page};
use crate::storage::{KeyValueStore, MemoryStore};
use crate::types::SiteData;
use chrono::NaiveDate;
use tracing::debug;
use url::Url;

pub const SLOT_HEADER: &str = "site-header";
pub const SLOT_FOOTER: &str = "site-footer";
pub const SLOT_HERO: &str = "hero";

/// Default Chart.js bundle referenced by the financials page.
pub const DEFAULT_CHART_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/chart.js";

#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub id: &'static str,
    pub content: Node,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub page: Page,
    pub lang: Lang,
    pub title: String,
    pub slots: Vec<Slot>,
    /// Set when the page needs the charting bundle.
    pub uses_charts: bool,
    /// Gate state observed during this load; dataroom only.
    pub gate: Option<GateState>,
}

impl RenderedPage {
    fn new(page: Page, data: &SiteData, ctx: &RenderContext) -> Self {
        Self {
            page,
            lang: ctx.lang(),
            title: page_title(page, data, ctx),
            slots: Vec::new(),
            uses_charts: false,
            gate: None,
        }
    }

    fn push(&mut self, id: &'static str, content: Node) {
        self.slots.push(Slot { id, content });
    }

    pub fn slot(&self, id: &str) -> Option<&Node> {
        self.slots.iter().find(|s| s.id == id).map(|s| &s.content)
    }

    pub fn has_slot(&self, id: &str) -> bool {
        self.slot(id).is_some()
    }

    /// Full HTML document: header slot, every content slot as a `<section>`
    /// inside `<main>`, then the footer slot.
    pub fn to_document(&self, chart_script: &str) -> String {
        let mut head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(
                Element::new("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1"),
            )
            .child(Element::new("title").text(self.title.as_str()));
        if self.uses_charts {
            head = head.child(Element::new("script").attr("src", chart_script));
        }

        let wrap = |id: &'static str, tag: &'static str| {
            Element::new(tag)
                .id(id)
                .children(self.slot(id).cloned())
        };
        let sections = self
            .slots
            .iter()
            .filter(|s| s.id != SLOT_HEADER && s.id != SLOT_FOOTER)
            .map(|s| Element::new("section").id(s.id).child(s.content.clone()));

        let body = Element::new("body")
            .child(wrap(SLOT_HEADER, "div"))
            .child(
                Element::new("main")
                    .class("container py-6 space-y-6")
                    .children(sections),
            )
            .child(wrap(SLOT_FOOTER, "div"));

        let html: Node = Element::new("html")
            .attr("lang", self.lang.code())
            .child(head)
            .child(body)
            .into();
        format!("<!doctype html>\n{}\n", html.to_html())
    }
}

fn page_title(page: Page, data: &SiteData, ctx: &RenderContext) -> String {
    let label = match page.nav_index() {
        Some(i) => nav_labels(ctx.lang())[i],
        None => ctx.t("legal.title"),
    };
    match data.brand_name() {
        Some(brand) => format!("{} · {}", brand, label),
        None => label.to_string(),
    }
}

pub struct PageLoader<'a> {
    source: &'a DataSource,
    store: &'a mut dyn KeyValueStore,
    charts: &'a mut dyn ChartRenderer,
    client: ClientGate,
}

impl<'a> PageLoader<'a> {
    pub fn new(
        source: &'a DataSource,
        store: &'a mut dyn KeyValueStore,
        charts: &'a mut dyn ChartRenderer,
    ) -> Self {
        Self {
            source,
            store,
            charts,
            client: ClientGate::default(),
        }
    }

    /// Settings for the script embedded in a locked dataroom page.
    pub fn with_client_gate(mut self, client: ClientGate) -> Self {
        self.client = client;
        self
    }

    /// One page load. `Ok(None)` when no initializer is registered for the
    /// URL's path.
    pub fn load(&mut self, url: &Url, today: NaiveDate) -> SiteResult<Option<RenderedPage>> {
        let ctx = RenderContext::new(url.clone(), today);
        router::dispatch(ctx.path(), |page| self.init(page, &ctx)).transpose()
    }

    /// Run the initializer for `page`.
    pub fn init(&mut self, page: Page, ctx: &RenderContext) -> SiteResult<RenderedPage> {
        let data = loader::load(self.source)?;
        let mut rendered = init_common(page, &data, ctx);
        match page {
            Page::Home => init_home(&data, ctx, &mut rendered),
            Page::Solution => {
                rendered.push("solution", sections::render_solution(&data, ctx));
            }
            Page::Gtm => rendered.push("gtm", sections::render_gtm(&data, ctx)),
            Page::Financials => {
                let content = sections::render_financials(&data, ctx, &mut *self.charts);
                rendered.push("financials", content);
                rendered.uses_charts = true;
            }
            Page::Incentives => {
                rendered.push("incentives", sections::render_incentives(&data, ctx));
            }
            Page::Timeline => {
                rendered.push("timeline-section", sections::render_timeline(&data, ctx));
            }
            Page::Dataroom => self.init_dataroom(&data, ctx, &mut rendered),
            Page::Contact => {
                rendered.push("contact-card", sections::render_contact(&data, ctx));
            }
            Page::Disclaimer => rendered.push("disc", sections::render_disclaimer(&data, ctx)),
        }
        debug!(?page, lang = %ctx.lang(), slots = rendered.slots.len(), "page initialized");
        Ok(rendered)
    }

    fn init_dataroom(&self, data: &SiteData, ctx: &RenderContext, rendered: &mut RenderedPage) {
        let state = GateState::read(&*self.store);
        rendered.gate = Some(state);
        if state.is_unlocked() {
            rendered.push("dataroom-links", dataroom::render_dataroom_links(data, ctx));
        } else {
            rendered.push("gate", dataroom::render_gate(ctx, &self.client));
        }
    }

    /// Gate form submission followed by a reload of `url`.
    pub fn submit_gate(
        &mut self,
        url: &Url,
        today: NaiveDate,
        raw_email: &str,
        capture: &dyn EmailCapture,
    ) -> SiteResult<Option<RenderedPage>> {
        gate::submit(&mut *self.store, raw_email, capture)?;
        self.load(url, today)
    }
}

/// Render every page once for a static deployment in `lang`.
///
/// The gate belongs to each viewer, so the dataroom is always rendered
/// locked here, whatever any local state file says.
pub fn build_site(
    source: &DataSource,
    charts: &mut dyn ChartRenderer,
    client: &ClientGate,
    base: &Url,
    lang: Lang,
    today: NaiveDate,
) -> SiteResult<Vec<RenderedPage>> {
    let mut viewer = MemoryStore::new();
    let mut pages = PageLoader::new(source, &mut viewer, charts).with_client_gate(client.clone());

    Page::all()
        .iter()
        .map(|&page| {
            let mut url = base.clone();
            url.set_path(page.file_name());
            url.set_query(Some(&format!("lang={}", lang.code())));
            pages.init(page, &RenderContext::new(url, today))
        })
        .collect()
}

fn init_common(page: Page, data: &SiteData, ctx: &RenderContext) -> RenderedPage {
    let mut rendered = RenderedPage::new(page, data, ctx);
    rendered.push(SLOT_HEADER, chrome::render_header(data, ctx));
    rendered.push(SLOT_HERO, chrome::render_hero(data, ctx));
    rendered.push(SLOT_FOOTER, chrome::render_footer(data, ctx));
    rendered
}

fn init_home(data: &SiteData, ctx: &RenderContext, rendered: &mut RenderedPage) {
    rendered.push("problem", sections::render_problem(data, ctx));
    rendered.push("cash-callout", sections::render_cash_callout(data, ctx));
    rendered.push("logo-cloud", sections::render_logo_cloud(data, ctx));
}
