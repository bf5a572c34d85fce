// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-page content sections.

use super::{
    data_needed, fmt_eur, joined_or_placeholder, labelled, text_or_placeholder, RenderContext,
};
use crate::chart::{ChartConfig, ChartRenderer};
use crate::markup::{Element, Node};
use crate::types::{SeriesPoint, SiteData};

/// Delay step between timeline badges, in milliseconds.
pub const TIMELINE_STAGGER_MS: usize = 50;
/// Upper bound for the reveal delay of any single badge.
pub const TIMELINE_MAX_DELAY_MS: usize = 2000;

fn heading(tag: &'static str, class: &str, text: &str) -> Element {
    Element::new(tag).class(class).text(text)
}

// ─── Home ───────────────────────────────────────────────────────────

pub fn render_problem(data: &SiteData, ctx: &RenderContext) -> Node {
    let bullets = data.problem_bullets();
    let items: Vec<Node> = if bullets.is_empty() {
        vec![Element::new("li").child(data_needed(ctx)).into()]
    } else {
        bullets
            .iter()
            .map(|b| Element::new("li").text(b.as_str()).into())
            .collect()
    };

    Node::Fragment(vec![
        heading("h2", "text-xl font-semibold mb-3", ctx.t("problem.title")).into(),
        Element::new("ul")
            .class("list-disc pl-5 space-y-1")
            .children(items)
            .into(),
        Element::new("blockquote")
            .class("border-l-4 pl-3 mt-3 text-slate-600")
            .child(text_or_placeholder(data.problem_narrative(), ctx))
            .into(),
    ])
}

pub fn render_cash_callout(data: &SiteData, ctx: &RenderContext) -> Node {
    let figure = data
        .cash_trough_eur()
        .and_then(|v| fmt_eur(v, ctx.lang()))
        .map(Node::text)
        .unwrap_or_else(|| data_needed(ctx));

    Element::new("div")
        .class("rounded-2xl border p-4 bg-slate-50")
        .child(Element::new("div").class("text-sm text-slate-600").text(ctx.t("cash.trough")))
        .child(Element::new("div").class("text-xl font-semibold").child(figure))
        .child(
            Element::new("div")
                .class("text-sm text-slate-600")
                .text(ctx.t("cash.funding_hint")),
        )
        .into()
}

/// Names from the private tier and alliance segments, in that order.
pub fn render_logo_cloud(data: &SiteData, ctx: &RenderContext) -> Node {
    let names: Vec<&String> = data
        .tier2_private()
        .iter()
        .chain(data.alliances())
        .collect();

    let grid = Element::new("div")
        .class("rounded-2xl border p-4 grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-3");
    if names.is_empty() {
        return grid.child(data_needed(ctx)).into();
    }
    grid.children(
        names
            .into_iter()
            .map(|name| Element::new("div").class("text-sm text-slate-700").text(name.as_str())),
    )
    .into()
}

// ─── Solution / GTM ─────────────────────────────────────────────────

pub fn render_solution(data: &SiteData, ctx: &RenderContext) -> Node {
    Node::Fragment(vec![
        heading("h1", "text-2xl font-semibold mb-2", ctx.t("solution.title")).into(),
        labelled(
            "p",
            ctx.t("solution.summary"),
            text_or_placeholder(data.model_summary(), ctx),
        )
        .class("mb-2")
        .into(),
        labelled(
            "p",
            ctx.t("solution.lanes"),
            joined_or_placeholder(data.model_lanes(), ", ", ctx),
        )
        .class("mb-2")
        .into(),
        labelled(
            "p",
            ctx.t("solution.usp"),
            text_or_placeholder(data.model_usp(), ctx),
        )
        .class("mb-2")
        .into(),
    ])
}

pub fn render_gtm(data: &SiteData, ctx: &RenderContext) -> Node {
    let segments = [
        ("gtm.tier1", data.tier1_public()),
        ("gtm.tier2", data.tier2_private()),
        ("gtm.alliances", data.alliances()),
    ];
    let rows = segments
        .into_iter()
        .map(|(key, items)| labelled("li", ctx.t(key), joined_or_placeholder(items, ", ", ctx)));

    Node::Fragment(vec![
        heading("h1", "text-2xl font-semibold mb-2", ctx.t("gtm.title")).into(),
        Element::new("ul").class("space-y-1 mb-4").children(rows).into(),
        labelled(
            "p",
            ctx.t("gtm.strategy"),
            joined_or_placeholder(data.strategy(), " • ", ctx),
        )
        .into(),
    ])
}

// ─── Financials ─────────────────────────────────────────────────────

/// Canvas ids of the three financial charts.
pub const CHART_REVENUE: &str = "chart-rev";
pub const CHART_EBITDA: &str = "chart-ebitda";
pub const CHART_GROSS_MARGIN: &str = "chart-gm";

fn chart_block(
    canvas_id: &str,
    series: &[SeriesPoint],
    config: impl FnOnce() -> ChartConfig,
    charts: &mut dyn ChartRenderer,
    ctx: &RenderContext,
) -> Node {
    let block = Element::new("div").class("h-64");
    if series.is_empty() {
        return block.child(data_needed(ctx)).into();
    }
    let script = charts.line_chart(canvas_id, &config());
    block
        .child(Element::new("canvas").id(canvas_id))
        .child(script)
        .into()
}

/// Cash trough figure, or an em dash when it is not a number.
pub fn cash_trough_figure(data: &SiteData, ctx: &RenderContext) -> String {
    data.cash_trough_eur()
        .and_then(|v| fmt_eur(v, ctx.lang()))
        .unwrap_or_else(|| "—".to_string())
}

pub fn render_financials(
    data: &SiteData,
    ctx: &RenderContext,
    charts: &mut dyn ChartRenderer,
) -> Node {
    let revenue = chart_block(
        CHART_REVENUE,
        data.revenue(),
        || ChartConfig::line(ctx.t("financials.revenue"), data.revenue()),
        charts,
        ctx,
    );
    let ebitda = chart_block(
        CHART_EBITDA,
        data.ebitda(),
        || ChartConfig::line(ctx.t("financials.ebitda"), data.ebitda()).filled(),
        charts,
        ctx,
    );
    let margin = chart_block(
        CHART_GROSS_MARGIN,
        data.gm_pct(),
        || ChartConfig::line(ctx.t("financials.gm"), data.gm_pct()).y_range(0.0, 100.0),
        charts,
        ctx,
    );

    Node::Fragment(vec![
        heading("h1", "text-2xl font-semibold mb-2", ctx.t("financials.title")).into(),
        Element::new("div")
            .class("grid md:grid-cols-3 gap-4")
            .child(revenue)
            .child(ebitda)
            .child(margin)
            .into(),
        Element::new("p")
            .class("mt-4")
            .child(Element::new("strong").text(format!("{}:", ctx.t("cash.trough"))))
            .text(" ")
            .child(Element::new("span").id("cash-trough").text(cash_trough_figure(data, ctx)))
            .into(),
    ])
}

// ─── Incentives / Timeline ──────────────────────────────────────────

pub fn render_incentives(data: &SiteData, ctx: &RenderContext) -> Node {
    let incentives = data.incentives();
    if incentives.is_empty() {
        return data_needed(ctx);
    }
    Node::Fragment(
        incentives
            .iter()
            .map(|label| {
                Element::new("details")
                    .class("border rounded-lg p-4")
                    .child(Element::new("summary").class("font-medium").text(label.as_str()))
                    .child(
                        Element::new("p")
                            .class("mt-2 text-sm text-slate-600")
                            .text(ctx.t("incentives.eligibility")),
                    )
                    .into()
            })
            .collect(),
    )
}

/// Reveal delay for the badge at `index`, capped at [`TIMELINE_MAX_DELAY_MS`].
pub fn stagger_delay_ms(index: usize) -> usize {
    index
        .saturating_mul(TIMELINE_STAGGER_MS)
        .min(TIMELINE_MAX_DELAY_MS)
}

pub fn render_timeline(data: &SiteData, ctx: &RenderContext) -> Node {
    let milestones = data.timeline90();
    let badges: Node = if milestones.is_empty() {
        data_needed(ctx)
    } else {
        Node::Fragment(
            milestones
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    Element::new("span")
                        .class("px-3 py-1 rounded-full border bg-slate-50 inline-block mr-2 mb-2")
                        .attr(
                            "style",
                            format!("animation:fadeIn .3s ease {}ms both", stagger_delay_ms(i)),
                        )
                        .text(label.as_str())
                        .into()
                })
                .collect(),
        )
    };

    Node::Fragment(vec![
        Element::new("div").id("timeline").child(badges).into(),
        Element::new("button")
            .id("btn-print")
            .class("no-print rounded-lg border px-3 py-1")
            .attr("type", "button")
            .attr("onclick", "window.print()")
            .text(ctx.t("ui.print"))
            .into(),
    ])
}

// ─── Contact / Disclaimer ───────────────────────────────────────────

pub fn render_contact(data: &SiteData, ctx: &RenderContext) -> Node {
    let kpi = |value: Option<&str>, label: &str| -> Node {
        Element::new("div")
            .class("kpi")
            .child(
                Element::new("div")
                    .class("text-2xl font-semibold")
                    .child(text_or_placeholder(value, ctx)),
            )
            .child(Element::new("div").class("text-sm text-slate-600").text(label))
            .into()
    };
    Node::Fragment(vec![
        kpi(data.contact_email(), ctx.t("contact.email")),
        kpi(data.contact_phone(), ctx.t("contact.phone")),
    ])
}

pub fn render_disclaimer(data: &SiteData, ctx: &RenderContext) -> Node {
    Node::Fragment(vec![
        labelled(
            "p",
            ctx.t("legal.jurisdiction"),
            text_or_placeholder(data.jurisdiction(), ctx),
        )
        .into(),
        Element::new("p")
            .child(text_or_placeholder(data.disclaimer(), ctx))
            .into(),
        Element::new("p")
            .class("text-sm text-slate-500")
            .text(super::chrome::copyright_line(data, ctx))
            .into(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::ctx;
    use crate::render::PLACEHOLDER;
    use crate::types::{Financials, GoToMarket, Segments};

    #[derive(Default)]
    struct RecordingCharts {
        drawn: Vec<(String, ChartConfig)>,
    }

    impl ChartRenderer for RecordingCharts {
        fn line_chart(&mut self, canvas_id: &str, config: &ChartConfig) -> Node {
            self.drawn.push((canvas_id.to_string(), config.clone()));
            Node::empty()
        }
    }

    fn data(json: &str) -> SiteData {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn problem_section_placeholders() {
        let node = render_problem(&SiteData::default(), &ctx("http://localhost/"));
        assert_eq!(node.text_content().matches(PLACEHOLDER).count(), 2);
    }

    #[test]
    fn problem_section_lists_bullets() {
        let d = data(r#"{"problem": {"bullets": ["Slow", "Costly"], "narrative": "Ouch"}}"#);
        let html = render_problem(&d, &ctx("http://localhost/")).to_html();
        assert!(html.contains("<li>Slow</li><li>Costly</li>"));
        assert!(html.contains("Ouch</blockquote>"));
        assert!(!html.contains(PLACEHOLDER));
    }

    #[test]
    fn cash_callout_formats_or_placeholds() {
        let c = ctx("http://localhost/");
        let d = data(r#"{"financials": {"cashTroughEur": 1500000}}"#);
        assert!(render_cash_callout(&d, &c).text_content().contains("€1,500,000"));
        let d = data(r#"{"financials": {"cashTroughEur": "soon"}}"#);
        assert!(render_cash_callout(&d, &c).text_content().contains(PLACEHOLDER));
    }

    #[test]
    fn logo_cloud_combines_two_segments() {
        let d = SiteData {
            gtm: Some(GoToMarket {
                segments: Some(Segments {
                    tier1_public: Some(vec!["City Hall".into()]),
                    tier2_private: Some(vec!["Bank".into()]),
                    alliances: Some(vec!["Uni".into()]),
                }),
                strategy: None,
            }),
            ..Default::default()
        };
        let text = render_logo_cloud(&d, &ctx("http://localhost/")).text_content();
        assert_eq!(text, "BankUni");
        let empty = render_logo_cloud(&SiteData::default(), &ctx("http://localhost/"));
        assert_eq!(empty.text_content(), PLACEHOLDER);
    }

    #[test]
    fn solution_joins_lanes() {
        let d = data(r#"{"model": {"summary": "SaaS", "lanes": ["A", "B"], "usp": "Fast"}}"#);
        let text = render_solution(&d, &ctx("http://localhost/solution.html")).text_content();
        assert!(text.contains("Lanes: A, B"));
        assert!(text.contains("USP: Fast"));
        assert!(text.contains("Model summary: SaaS"));
    }

    #[test]
    fn gtm_strategy_uses_bullet_separator() {
        let d = data(r#"{"gtm": {"strategy": ["Pilot", "Scale"], "segments": {"alliances": ["X", "Y"]}}}"#);
        let text = render_gtm(&d, &ctx("http://localhost/gtm.html?lang=pt")).text_content();
        assert!(text.contains("Estratégia: Pilot • Scale"));
        assert!(text.contains("Alianças: X, Y"));
        assert_eq!(text.matches(PLACEHOLDER).count(), 2);
    }

    #[test]
    fn financials_hands_three_charts_to_renderer() {
        let d = SiteData {
            financials: Some(Financials {
                revenue: Some(vec![SeriesPoint::new(1, 10.0), SeriesPoint::new(2, 20.0)]),
                ebitda: Some(vec![SeriesPoint::new(1, -5.0)]),
                gm_pct: Some(vec![SeriesPoint::new(1, 40.0)]),
                cash_trough_eur: Some(serde_json::json!(-250000)),
            }),
            ..Default::default()
        };
        let mut charts = RecordingCharts::default();
        let node = render_financials(&d, &ctx("http://localhost/financials.html"), &mut charts);

        let ids: Vec<&str> = charts.drawn.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec![CHART_REVENUE, CHART_EBITDA, CHART_GROSS_MARGIN]);
        assert_eq!(charts.drawn[0].1.data.labels, vec!["Y1", "Y2"]);
        assert!(charts.drawn[0].1.options.scales.is_none());
        assert!(charts.drawn[1].1.data.datasets[0].fill);
        let y = charts.drawn[2].1.options.scales.as_ref().unwrap().y;
        assert_eq!((y.min, y.max), (0.0, 100.0));

        assert!(node.find_by_id(CHART_GROSS_MARGIN).is_some());
        let trough = node.find_by_id("cash-trough").unwrap();
        assert_eq!(Node::Element(trough.clone()).text_content(), "-€250,000");
    }

    #[test]
    fn financials_without_data_draws_nothing() {
        let mut charts = RecordingCharts::default();
        let node = render_financials(
            &SiteData::default(),
            &ctx("http://localhost/financials.html"),
            &mut charts,
        );
        assert!(charts.drawn.is_empty());
        let text = node.text_content();
        assert_eq!(text.matches(PLACEHOLDER).count(), 3);
        assert!(text.contains("—"));
    }

    #[test]
    fn incentives_render_collapsibles() {
        let d = data(r#"{"incentives": ["PT2030", "SIFIDE"]}"#);
        let node = render_incentives(&d, &ctx("http://localhost/incentives.html"));
        let details = node.elements().into_iter().filter(|e| e.tag == "details").count();
        assert_eq!(details, 2);
        assert!(node.text_content().contains("Eligibility"));
        let empty = render_incentives(&SiteData::default(), &ctx("http://localhost/"));
        assert_eq!(empty.text_content(), PLACEHOLDER);
    }

    #[test]
    fn timeline_staggers_and_caps_delay() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(3), 150);
        assert_eq!(stagger_delay_ms(1000), TIMELINE_MAX_DELAY_MS);

        let d = data(r#"{"timeline90": ["Hire", "Pilot"]}"#);
        let html = render_timeline(&d, &ctx("http://localhost/timeline.html")).to_html();
        assert!(html.contains("animation:fadeIn .3s ease 50ms both\">Pilot"));
        assert!(html.contains("id=\"btn-print\""));
        assert!(html.contains("window.print()"));
    }

    #[test]
    fn contact_and_disclaimer_placeholders() {
        let c = ctx("http://localhost/contact.html");
        let contact = render_contact(&SiteData::default(), &c).text_content();
        assert_eq!(contact.matches(PLACEHOLDER).count(), 2);

        let d = data(r#"{"brand": {"name": "Acme"}, "legal": {"jurisdiction": "Portugal"}}"#);
        let disc = render_disclaimer(&d, &c).text_content();
        assert!(disc.contains("Jurisdiction: Portugal"));
        assert!(disc.contains(PLACEHOLDER));
        assert!(disc.contains("© 2026 Acme"));
    }
}
