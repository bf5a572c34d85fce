// SPDX-License-Identifier: PMPL-1.0-or-later

//! Header, footer and hero: the parts every page shares.

use super::{text_or_placeholder, RenderContext};
use crate::i18n::{nav_labels, NAV_LEN};
use crate::markup::{Element, Node};
use crate::router::{Page, NAV_PATHS};
use crate::types::SiteData;

/// Whether nav entry `index` is the page at `path`. The root path also
/// counts as the first entry.
pub fn is_active(path: &str, index: usize) -> bool {
    let Some(file) = NAV_PATHS.get(index) else {
        return false;
    };
    path.ends_with(&format!("/{}", file)) || (index == 0 && path.ends_with('/'))
}

fn logo(data: &SiteData, class: &str) -> Option<Node> {
    data.logo_url().map(|src| {
        Element::new("img")
            .attr("src", src)
            .attr("alt", data.brand_name().unwrap_or("Logo"))
            .class(class)
            .into()
    })
}

pub fn render_header(data: &SiteData, ctx: &RenderContext) -> Node {
    let other = ctx.lang().other();

    let brand = Element::new("a")
        .attr("href", ctx.page_href(Page::Home.file_name()))
        .class("font-semibold flex items-center gap-2")
        .children(logo(data, "h-8 w-auto"))
        .child(Element::new("span").child(text_or_placeholder(data.brand_name(), ctx)));

    let labels = nav_labels(ctx.lang());
    let links = (0..NAV_LEN).map(|i| {
        let link = Element::new("a").attr("href", ctx.page_href(NAV_PATHS[i]));
        if is_active(ctx.path(), i) {
            link.class("underline font-medium")
                .attr("aria-current", "page")
                .text(labels[i])
        } else {
            link.text(labels[i])
        }
    });

    let toggle = Element::new("a")
        .class("text-sm underline")
        .attr("href", format!("{}?lang={}", ctx.path(), other.code()))
        .attr("aria-label", ctx.t("ui.toggle_language"))
        .text(other.code().to_uppercase());

    Element::new("header")
        .class("border-b bg-white/80 backdrop-blur")
        .child(
            Element::new("nav")
                .class("container flex items-center gap-4 py-3")
                .attr("aria-label", ctx.t("ui.main_nav"))
                .child(brand)
                .child(Element::new("div").class("flex-1 flex flex-wrap gap-3").children(links))
                .child(toggle),
        )
        .into()
}

pub fn render_footer(data: &SiteData, ctx: &RenderContext) -> Node {
    let printed = format!(
        "{}: {} · {}",
        ctx.t("footer.printed"),
        ctx.today().format("%Y-%m-%d"),
        ctx.url()
    );
    Element::new("footer")
        .class("border-t mt-8 py-6 text-sm text-slate-600 print:block")
        .child(
            Element::new("div")
                .class("container flex flex-wrap gap-2")
                .child(Element::new("span").text(copyright_line(data, ctx)))
                .child(
                    Element::new("a")
                        .class("underline")
                        .attr("href", ctx.page_href(Page::Disclaimer.file_name()))
                        .text(ctx.t("legal.title")),
                )
                .child(Element::new("span").class("ml-auto").text(printed)),
        )
        .into()
}

/// `© <year> <brand>`; the brand part is simply left out when unknown.
pub fn copyright_line(data: &SiteData, ctx: &RenderContext) -> String {
    format!("© {} {}", ctx.year(), data.brand_name().unwrap_or(""))
        .trim_end()
        .to_string()
}

/// Lock badge shown when the brand is marked confidential.
pub fn lock_badge(data: &SiteData, ctx: &RenderContext) -> Option<Node> {
    if !data.is_confidential() {
        return None;
    }
    let label = ctx.t("ui.confidential");
    Some(
        Element::new("span")
            .class("no-print inline-flex items-center text-xs rounded-full border px-2 py-0.5 bg-slate-900 text-white")
            .attr("aria-label", label)
            .text(format!("🔒 {}", label))
            .into(),
    )
}

pub fn render_hero(data: &SiteData, ctx: &RenderContext) -> Node {
    let title_row = Element::new("div")
        .class("flex items-center gap-3")
        .children(logo(data, "h-10 w-auto"))
        .child(
            Element::new("h1")
                .class("text-2xl font-semibold")
                .child(text_or_placeholder(data.brand_name(), ctx)),
        )
        .child(Element::new("span").class("ml-auto").children(lock_badge(data, ctx)));

    Element::new("div")
        .class("relative rounded-2xl p-8 bg-gradient-to-br from-slate-50 to-slate-100")
        .child(title_row)
        .child(
            Element::new("p")
                .class("mt-4 text-lg")
                .child(text_or_placeholder(data.brand_tagline(), ctx)),
        )
        .into()
}
