// * The Profiler (Analysis Pipeline)
// * Goal: derive a structured profile of one webpage from its raw HTML,
// * with no I/O and no external services.

pub mod category;
pub mod links;
pub mod local_seo;
pub mod metadata;
pub mod readability;
pub mod summary;
pub mod technical;
pub mod text;

// * Re-exports for convenient access
pub use category::{Category, CategoryClassifier};
pub use links::{AnchorText, LinkAnalyzer, LinkMetrics};
pub use local_seo::{LocalSeoDetector, LocalSeoSignals};
pub use metadata::{ContactInfo, MetadataExtractor, PageMetadata, SocialLinks};
pub use readability::{ContentAnalyzer, ContentMetrics, KeywordDensity, ReadabilityBand};
pub use summary::SummaryGenerator;
pub use technical::{TechnicalAuditor, TechnicalSeo};

use serde::{Deserialize, Serialize};
use url::Url;

const UNREACHABLE_SUMMARY: &str = "Unable to analyze this website.";

/// The aggregate analysis result. Every field is always present with a
/// defined default; callers never need to special-case missing facets.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteProfile {
    pub title: Option<String>,
    pub description: Option<String>,
    pub favicon_url: Option<String>,
    pub logo_url: Option<String>,
    pub social_links: SocialLinks,
    pub contact_info: ContactInfo,
    pub detected_category: Category,
    pub summary: String,
    pub technical_seo: TechnicalSeo,
    pub content_metrics: ContentMetrics,
    pub link_metrics: LinkMetrics,
    pub local_seo_signals: LocalSeoSignals,
}

impl WebsiteProfile {
    /// The fetch-failure profile: shaped exactly like a successful one,
    /// every facet at its neutral value. `is_https` still reflects the
    /// scheme of the URL that was requested.
    pub fn unreachable(url: &str) -> Self {
        let origin = PageOrigin::parse(url);
        let mut profile = Self {
            summary: UNREACHABLE_SUMMARY.to_string(),
            ..Default::default()
        };
        profile.technical_seo.is_https = origin.is_https;
        profile
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// * Origin facts shared by the analyzers: parsed base URL for resolving
// * relative hrefs, the bare domain for link classification, and the scheme.
pub(crate) struct PageOrigin {
    pub base: Option<Url>,
    pub domain: String,
    pub is_https: bool,
}

impl PageOrigin {
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) => {
                let domain = url.host_str().unwrap_or("").to_string();
                let is_https = url.scheme() == "https";
                Self {
                    base: Some(url),
                    domain,
                    is_https,
                }
            }
            // * Unparseable URL: keep the scheme check textual and degrade
            Err(_) => Self {
                base: None,
                domain: String::new(),
                is_https: raw.starts_with("https://"),
            },
        }
    }
}

/// The analysis pipeline. Pure and synchronous: identical HTML and URL
/// always produce an identical profile.
///
/// # Example
/// ```ignore
/// use pagelens::profiler::PageProfiler;
///
/// let profiler = PageProfiler::new();
/// let profile = profiler.profile("https://example.com", html);
/// println!("{}", profile.to_json_pretty());
/// ```
pub struct PageProfiler;

impl PageProfiler {
    pub fn new() -> Self {
        Self
    }

    /// Runs the analyzers in dependency order over one document.
    ///
    /// # Pipeline Steps:
    /// 1. Normalize text (visible view + content view)
    /// 2. Extract metadata (title, icons, social, contact)
    /// 3. Audit technical SEO signals
    /// 4. Compute content readability metrics
    /// 5. Analyze the link graph
    /// 6. Detect local SEO signals
    /// 7. Classify the business category
    /// 8. Compose the narrative summary
    pub fn profile(&self, url: &str, html: &str) -> WebsiteProfile {
        let origin = PageOrigin::parse(url);

        let visible = text::visible_text(html);
        let content = text::content_text(html);

        let metadata = MetadataExtractor::extract(html, origin.base.as_ref());
        let technical_seo = TechnicalAuditor::audit(html, &origin.domain, origin.is_https);
        let content_metrics = ContentAnalyzer::analyze(&content, html);
        let link_metrics = LinkAnalyzer::analyze(html, &origin.domain, origin.base.as_ref());
        let local_seo_signals = LocalSeoDetector::detect(html, &visible);

        let detected_category = CategoryClassifier::classify(
            &content,
            metadata.title.as_deref(),
            metadata.description.as_deref(),
        );

        let summary = SummaryGenerator::generate(
            metadata.title.as_deref(),
            metadata.description.as_deref(),
            detected_category,
            &content,
        );

        tracing::debug!(
            url,
            category = detected_category.as_str(),
            words = content_metrics.word_count,
            "page profiled"
        );

        WebsiteProfile {
            title: metadata.title,
            description: metadata.description,
            favicon_url: metadata.favicon_url,
            logo_url: metadata.logo_url,
            social_links: metadata.social_links,
            contact_info: metadata.contact_info,
            detected_category,
            summary,
            technical_seo,
            content_metrics,
            link_metrics,
            local_seo_signals,
        }
    }
}

impl Default for PageProfiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to profile a page with default settings
pub fn profile_page(url: &str, html: &str) -> WebsiteProfile {
    PageProfiler::new().profile(url, html)
}
