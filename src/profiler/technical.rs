// * Technical SEO Auditor: deterministic presence/absence checks over the
// * document head and body. Bad JSON-LD blocks are skipped, never fatal.

use crate::profiler::links::{classify_href, LinkClass};
use regex::Regex;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// * Precompiled selectors
static SELECTOR_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").unwrap());
static SELECTOR_META: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta").unwrap());
static SELECTOR_CANONICAL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"link[rel="canonical"]"#).unwrap());
static SELECTOR_H1: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());
static SELECTOR_H2: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2").unwrap());
static SELECTOR_H3: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3").unwrap());
static SELECTOR_IMG: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());
static SELECTOR_ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").unwrap());
static SELECTOR_JSON_LD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"script[type="application/ld+json"]"#).unwrap());
static SELECTOR_HTML: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("html").unwrap());

// * Inline microdata markup, matched textually like the rest of the scans
static RE_ITEMTYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"itemtype\s*=\s*["']https?://schema\.org/([A-Za-z]+)["']"#).unwrap()
});

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSeo {
    pub has_title: bool,
    pub has_meta_description: bool,
    pub has_canonical: bool,
    pub has_viewport: bool,
    pub has_robots_meta: bool,
    pub has_open_graph: bool,
    pub has_twitter_card: bool,
    pub h1_count: usize,
    pub h2_count: usize,
    pub h3_count: usize,
    pub h1_text: Vec<String>,
    /// Exactly one h1 is the sole criterion; zero or multiple fail
    pub has_proper_heading_hierarchy: bool,
    pub image_count: usize,
    pub images_with_alt: usize,
    /// 0-100; a page with no images is not penalized (100)
    pub alt_coverage: u32,
    pub has_schema_markup: bool,
    pub schema_types: Vec<String>,
    pub internal_link_count: usize,
    pub external_link_count: usize,
    pub is_https: bool,
    pub references_sitemap: bool,
    pub language: Option<String>,
}

pub struct TechnicalAuditor;

impl TechnicalAuditor {
    pub fn audit(html: &str, domain: &str, is_https: bool) -> TechnicalSeo {
        let document = Html::parse_document(html);
        let mut seo = TechnicalSeo {
            is_https,
            ..Default::default()
        };

        Self::audit_head(&document, &mut seo);
        Self::audit_headings(&document, &mut seo);
        Self::audit_images(&document, &mut seo);
        Self::audit_schema(&document, html, &mut seo);
        Self::audit_links(&document, domain, &mut seo);

        seo.references_sitemap = html.contains("sitemap.xml") || html.contains(r#"rel="sitemap""#);

        if let Some(root) = document.select(&SELECTOR_HTML).next() {
            seo.language = root
                .value()
                .attr("lang")
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty());
        }

        seo
    }

    fn audit_head(document: &Html, seo: &mut TechnicalSeo) {
        seo.has_title = document
            .select(&SELECTOR_TITLE)
            .next()
            .map(|t| !t.text().collect::<String>().trim().is_empty())
            .unwrap_or(false);

        seo.has_canonical = document.select(&SELECTOR_CANONICAL).next().is_some();

        for meta in document.select(&SELECTOR_META) {
            let name = meta.value().attr("name").unwrap_or("");
            let property = meta.value().attr("property").unwrap_or("");
            let content = meta.value().attr("content").unwrap_or("");

            if name.eq_ignore_ascii_case("description") && !content.trim().is_empty() {
                seo.has_meta_description = true;
            }
            if name.eq_ignore_ascii_case("viewport") {
                seo.has_viewport = true;
            }
            if name.eq_ignore_ascii_case("robots") {
                seo.has_robots_meta = true;
            }
            if property.starts_with("og:") {
                seo.has_open_graph = true;
            }
            if name.starts_with("twitter:") || property.starts_with("twitter:") {
                seo.has_twitter_card = true;
            }
        }
    }

    fn audit_headings(document: &Html, seo: &mut TechnicalSeo) {
        seo.h1_text = document
            .select(&SELECTOR_H1)
            .map(|h| h.text().collect::<String>().trim().to_string())
            .collect();
        seo.h1_count = seo.h1_text.len();
        seo.h2_count = document.select(&SELECTOR_H2).count();
        seo.h3_count = document.select(&SELECTOR_H3).count();
        seo.has_proper_heading_hierarchy = seo.h1_count == 1;
    }

    fn audit_images(document: &Html, seo: &mut TechnicalSeo) {
        for img in document.select(&SELECTOR_IMG) {
            seo.image_count += 1;
            if img.value().attr("alt").is_some() {
                seo.images_with_alt += 1;
            }
        }

        seo.alt_coverage = if seo.image_count == 0 {
            100
        } else {
            ((seo.images_with_alt as f64 / seo.image_count as f64) * 100.0).round() as u32
        };
    }

    fn audit_schema(document: &Html, html: &str, seo: &mut TechnicalSeo) {
        for script in document.select(&SELECTOR_JSON_LD) {
            let json_text: String = script.text().collect();
            match serde_json::from_str::<serde_json::Value>(&json_text) {
                Ok(value) => collect_schema_types(&value, &mut seo.schema_types),
                Err(err) => {
                    tracing::debug!(error = %err, "skipping unparseable JSON-LD block");
                }
            }
        }

        for captures in RE_ITEMTYPE.captures_iter(html) {
            if let Some(schema_type) = captures.get(1) {
                push_unique(&mut seo.schema_types, schema_type.as_str());
            }
        }

        seo.has_schema_markup = !seo.schema_types.is_empty();
    }

    fn audit_links(document: &Html, domain: &str, seo: &mut TechnicalSeo) {
        for anchor in document.select(&SELECTOR_ANCHOR) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            match classify_href(href, domain) {
                LinkClass::Internal => seo.internal_link_count += 1,
                LinkClass::External => seo.external_link_count += 1,
                LinkClass::Broken => {}
            }
        }
    }
}

// * @type may be a single value or a list; nested @graph nodes count too
fn collect_schema_types(value: &serde_json::Value, types: &mut Vec<String>) {
    match value {
        serde_json::Value::Object(map) => {
            match map.get("@type") {
                Some(serde_json::Value::String(t)) => push_unique(types, t),
                Some(serde_json::Value::Array(list)) => {
                    for entry in list {
                        if let serde_json::Value::String(t) = entry {
                            push_unique(types, t);
                        }
                    }
                }
                _ => {}
            }
            if let Some(graph) = map.get("@graph") {
                collect_schema_types(graph, types);
            }
        }
        serde_json::Value::Array(list) => {
            for entry in list {
                collect_schema_types(entry, types);
            }
        }
        _ => {}
    }
}

fn push_unique(types: &mut Vec<String>, value: &str) {
    if !types.iter().any(|t| t == value) {
        types.push(value.to_string());
    }
}
