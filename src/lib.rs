// SPDX-License-Identifier: PMPL-1.0-or-later

//! Pitchdeck: data-driven pitch-deck site renderer.
//!
//! Renders a small multi-page investor site from one JSON document, in
//! English or Portuguese, with an email-gated dataroom page.
//!
//! PIPELINE:
//! 1. **Router**: maps the page path to one of nine page initializers.
//! 2. **Loader**: reads `data/site.json` fresh for every page load.
//! 3. **Renderers**: pure functions from data + language to a markup tree,
//!    substituting a visible "Data needed" badge for anything missing.
//! 4. **Gate**: a single persisted flag that reveals the dataroom links
//!    after one valid email submission.

pub mod chart;
pub mod config;
pub mod error;
pub mod gate;
pub mod i18n;
pub mod loader;
pub mod markup;
pub mod page;
pub mod render;
pub mod router;
pub mod storage;
pub mod types;
