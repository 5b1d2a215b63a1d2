// * Link Graph Analyzer: walks every anchor, classifies hrefs against the
// * page's own domain, and derives structural link heuristics.

use crate::config::constants::{
    ANCHOR_TEXT_LIMIT, ANCHOR_TEXT_MAX_CHARS, BROKEN_LINK_CAP, ORPHAN_RISK_THRESHOLD,
};
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use url::Url;

// * Precompiled selectors
static SELECTOR_ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").unwrap());
static SELECTOR_NAV_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("nav a").unwrap());
static SELECTOR_FOOTER_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("footer a").unwrap());
static SELECTOR_SECTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("section, article, main").unwrap());

// * How an href relates to the page it appears on.
// * External requires a scheme AND a foreign domain; root-relative,
// * same-origin absolute, and schemeless hrefs are all internal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LinkClass {
    Internal,
    External,
    Broken,
}

pub(crate) fn classify_href(href: &str, domain: &str) -> LinkClass {
    let href = href.trim();

    if href.is_empty() || href == "#" || href.starts_with("javascript:") {
        return LinkClass::Broken;
    }

    let has_scheme = href.starts_with("http://") || href.starts_with("https://");
    if has_scheme && !domain.is_empty() && !href.contains(domain) {
        LinkClass::External
    } else {
        LinkClass::Internal
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnchorText {
    pub text: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkMetrics {
    pub internal_link_count: usize,
    pub external_link_count: usize,
    pub unique_internal_links: usize,
    pub unique_external_links: usize,
    /// Placeholder hrefs (empty, `#`, javascript voids), capped at 5
    pub broken_link_candidates: Vec<String>,
    pub top_anchor_texts: Vec<AnchorText>,
    pub links_per_section: f64,
    pub has_nav_links: bool,
    pub has_footer_links: bool,
    pub max_path_depth: usize,
    /// Heuristic indexability flag, not proof of an actual orphan page
    pub orphan_risk: bool,
}

pub struct LinkAnalyzer;

impl LinkAnalyzer {
    pub fn analyze(html: &str, domain: &str, base: Option<&Url>) -> LinkMetrics {
        let document = Html::parse_document(html);
        let mut metrics = LinkMetrics::default();

        let mut unique_internal: HashSet<String> = HashSet::new();
        let mut unique_external: HashSet<String> = HashSet::new();
        let mut anchor_tally: HashMap<String, usize> = HashMap::new();

        for anchor in document.select(&SELECTOR_ANCHOR) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };

            match classify_href(href, domain) {
                LinkClass::Broken => {
                    if metrics.broken_link_candidates.len() < BROKEN_LINK_CAP {
                        metrics.broken_link_candidates.push(href.to_string());
                    }
                    continue;
                }
                LinkClass::Internal => {
                    metrics.internal_link_count += 1;
                    unique_internal.insert(href.trim().to_string());
                    let depth = path_depth(href, base);
                    metrics.max_path_depth = metrics.max_path_depth.max(depth);
                }
                LinkClass::External => {
                    metrics.external_link_count += 1;
                    unique_external.insert(href.trim().to_string());
                }
            }

            let text: String = anchor.text().collect::<String>().trim().to_string();
            if !text.is_empty() && text.len() < ANCHOR_TEXT_MAX_CHARS {
                *anchor_tally.entry(text).or_insert(0) += 1;
            }
        }

        metrics.unique_internal_links = unique_internal.len();
        metrics.unique_external_links = unique_external.len();
        metrics.top_anchor_texts = top_anchors(anchor_tally);

        metrics.has_nav_links = document.select(&SELECTOR_NAV_LINK).next().is_some();
        metrics.has_footer_links = document.select(&SELECTOR_FOOTER_LINK).next().is_some();

        let section_count = document.select(&SELECTOR_SECTION).count().max(1);
        metrics.links_per_section = round2(metrics.internal_link_count as f64 / section_count as f64);

        metrics.orphan_risk = metrics.unique_internal_links < ORPHAN_RISK_THRESHOLD;

        metrics
    }
}

// * Count sorted descending, ties broken lexically so output is stable
fn top_anchors(tally: HashMap<String, usize>) -> Vec<AnchorText> {
    let mut entries: Vec<(String, usize)> = tally.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
        .into_iter()
        .take(ANCHOR_TEXT_LIMIT)
        .map(|(text, count)| AnchorText { text, count })
        .collect()
}

// * Non-empty path segments of an internal href, resolved against the origin
fn path_depth(href: &str, base: Option<&Url>) -> usize {
    if let Some(base) = base {
        if let Ok(resolved) = base.join(href) {
            return resolved
                .path_segments()
                .map(|segments| segments.filter(|s| !s.is_empty()).count())
                .unwrap_or(0);
        }
    }

    let path = href.split(['?', '#']).next().unwrap_or("");
    path.split('/').filter(|s| !s.is_empty()).count()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/").unwrap()
    }

    #[test]
    fn test_classification_rules() {
        assert_eq!(classify_href("/about", "example.com"), LinkClass::Internal);
        assert_eq!(
            classify_href("https://example.com/about", "example.com"),
            LinkClass::Internal
        );
        assert_eq!(
            classify_href("https://other.com", "example.com"),
            LinkClass::External
        );
        assert_eq!(classify_href("#", "example.com"), LinkClass::Broken);
        assert_eq!(classify_href("", "example.com"), LinkClass::Broken);
        assert_eq!(
            classify_href("javascript:void(0)", "example.com"),
            LinkClass::Broken
        );
    }

    #[test]
    fn test_counts_and_uniques() {
        let html = r#"
            <a href="/a">One</a>
            <a href="/a">One</a>
            <a href="/b">Two</a>
            <a href="https://other.com/x">Out</a>
        "#;

        let metrics = LinkAnalyzer::analyze(html, "example.com", Some(&base()));
        assert_eq!(metrics.internal_link_count, 3);
        assert_eq!(metrics.unique_internal_links, 2);
        assert_eq!(metrics.external_link_count, 1);
        assert_eq!(metrics.unique_external_links, 1);
    }

    #[test]
    fn test_broken_candidates_capped_and_excluded() {
        let html = r##"
            <a href="#">a</a><a href="#">b</a><a href="">c</a>
            <a href="javascript:void(0)">d</a><a href="#">e</a><a href="#">f</a>
            <a href="/real">Real</a>
        "##;

        let metrics = LinkAnalyzer::analyze(html, "example.com", Some(&base()));
        assert_eq!(metrics.broken_link_candidates.len(), 5);
        assert_eq!(metrics.internal_link_count, 1);
        assert_eq!(metrics.external_link_count, 0);
    }

    #[test]
    fn test_anchor_text_ranking_is_stable() {
        let html = r#"
            <a href="/1">Pricing</a>
            <a href="/2">Pricing</a>
            <a href="/3">About</a>
            <a href="/4">Blog</a>
        "#;

        let metrics = LinkAnalyzer::analyze(html, "example.com", Some(&base()));
        assert_eq!(metrics.top_anchor_texts[0].text, "Pricing");
        assert_eq!(metrics.top_anchor_texts[0].count, 2);
        // * Tied entries fall back to lexical order
        assert_eq!(metrics.top_anchor_texts[1].text, "About");
        assert_eq!(metrics.top_anchor_texts[2].text, "Blog");
    }

    #[test]
    fn test_nav_and_footer_detection() {
        let html = r#"<nav><a href="/">Home</a></nav><footer><a href="/tos">Terms</a></footer>"#;
        let metrics = LinkAnalyzer::analyze(html, "example.com", Some(&base()));
        assert!(metrics.has_nav_links);
        assert!(metrics.has_footer_links);

        let bare = r#"<a href="/">Home</a>"#;
        let metrics = LinkAnalyzer::analyze(bare, "example.com", Some(&base()));
        assert!(!metrics.has_nav_links);
        assert!(!metrics.has_footer_links);
    }

    #[test]
    fn test_path_depth_maximum() {
        let html = r#"
            <a href="/a">1</a>
            <a href="/a/b/c">3</a>
            <a href="https://example.com/x/y">2</a>
        "#;

        let metrics = LinkAnalyzer::analyze(html, "example.com", Some(&base()));
        assert_eq!(metrics.max_path_depth, 3);
    }

    #[test]
    fn test_links_per_section_floors_section_count() {
        let html = r#"<a href="/a">1</a><a href="/b">2</a>"#;
        let metrics = LinkAnalyzer::analyze(html, "example.com", Some(&base()));
        // * No section/article/main blocks: divisor floors at 1
        assert_eq!(metrics.links_per_section, 2.0);

        let sectioned = r#"
            <section><a href="/a">1</a></section>
            <section><a href="/b">2</a></section>
            <main><a href="/c">3</a></main>
        "#;
        let metrics = LinkAnalyzer::analyze(sectioned, "example.com", Some(&base()));
        assert_eq!(metrics.links_per_section, 1.0);
    }

    #[test]
    fn test_orphan_risk_threshold() {
        let sparse = r#"<a href="/a">1</a>"#;
        let metrics = LinkAnalyzer::analyze(sparse, "example.com", Some(&base()));
        assert!(metrics.orphan_risk);

        let dense: String = (0..6)
            .map(|i| format!(r#"<a href="/page-{i}">Page {i}</a>"#))
            .collect();
        let metrics = LinkAnalyzer::analyze(&dense, "example.com", Some(&base()));
        assert!(!metrics.orphan_risk);
    }
}
