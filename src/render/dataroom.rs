// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dataroom fragments: the email gate form and the unlocked link list.
//!
//! The gate is per viewer. A locked page carries the form plus an inline
//! script that validates the address, records the unlock in the browser's
//! `localStorage` and reloads; on load with the flag set, the script fetches
//! the data document and draws the links in place of the form. The links
//! themselves never appear in locked markup.

use super::{data_needed, text_or_placeholder, RenderContext, PLACEHOLDER};
use crate::gate::{EMAIL_PATTERN, GATE_KEY, UNLOCKED_VALUE};
use crate::loader::DEFAULT_DATA_PATH;
use crate::markup::{Element, Node};
use crate::types::SiteData;
use serde::Serialize;
use tracing::warn;

const GATE_SCRIPT: &str = include_str!("dataroom_gate.js");

/// Browser-side gate settings: where the script fetches the data document
/// from once unlocked, and where it posts the collected address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientGate {
    pub data_url: String,
    pub form_endpoint: Option<String>,
}

impl Default for ClientGate {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_PATH.to_string(),
            form_endpoint: None,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GateScriptConfig<'a> {
    key: &'a str,
    unlocked: &'a str,
    pattern: &'a str,
    data_url: &'a str,
    endpoint: Option<&'a str>,
    invalid_email: &'a str,
    placeholder: &'a str,
    placeholder_hint: &'a str,
}

/// Inline script driving the gate form in the browser.
pub fn render_gate_script(ctx: &RenderContext, client: &ClientGate) -> Node {
    let config = GateScriptConfig {
        key: GATE_KEY,
        unlocked: UNLOCKED_VALUE,
        pattern: EMAIL_PATTERN,
        data_url: &client.data_url,
        endpoint: client.form_endpoint.as_deref(),
        invalid_email: ctx.t("dataroom.invalid_email"),
        placeholder: PLACEHOLDER,
        placeholder_hint: ctx.t("ui.placeholder_hint"),
    };
    match serde_json::to_string(&config) {
        Ok(json) => Node::script(&format!("{}({});", GATE_SCRIPT.trim_end(), json)),
        Err(err) => {
            warn!(error = %err, "gate script config could not be encoded");
            Node::empty()
        }
    }
}

/// Gate form followed by its script.
pub fn render_gate(ctx: &RenderContext, client: &ClientGate) -> Node {
    Node::Fragment(vec![render_gate_form(ctx), render_gate_script(ctx, client)])
}

pub fn render_gate_form(ctx: &RenderContext) -> Node {
    Element::new("form")
        .id("gate-form")
        .class("flex flex-wrap gap-2 items-end")
        .child(
            Element::new("p")
                .class("w-full text-slate-600")
                .text(ctx.t("dataroom.gate_intro")),
        )
        .child(
            Element::new("label")
                .attr("for", "email")
                .class("text-sm")
                .text(ctx.t("dataroom.email")),
        )
        .child(
            Element::new("input")
                .id("email")
                .attr("name", "email")
                .attr("type", "email")
                .attr("required", "required")
                .attr("autocomplete", "email")
                .class("border rounded-lg px-3 py-2"),
        )
        .child(
            Element::new("button")
                .attr("type", "submit")
                .class("rounded-lg border px-3 py-2 bg-slate-900 text-white")
                .text(ctx.t("ui.access")),
        )
        .into()
}

/// Links in document order, each opening in a new browsing context. An
/// entry without a target is shown inert, with the placeholder as its URL.
pub fn render_dataroom_links(data: &SiteData, ctx: &RenderContext) -> Node {
    let links = data.dataroom_links();
    if links.is_empty() {
        return data_needed(ctx);
    }
    Node::Fragment(
        links
            .iter()
            .map(|link| {
                let label = Element::new("strong")
                    .child(text_or_placeholder(link.label(), ctx));
                let target = Element::new("div")
                    .class("text-sm text-slate-500")
                    .child(text_or_placeholder(link.href(), ctx));
                let card = match link.href() {
                    Some(href) => Element::new("a")
                        .attr("href", href)
                        .attr("target", "_blank")
                        .attr("rel", "noreferrer"),
                    None => Element::new("div"),
                };
                card.class("border rounded-lg p-4 hover:bg-slate-50 block")
                    .child(label)
                    .child(target)
                    .into()
            })
            .collect(),
    )
}
