// * Local SEO Signal Detector: prioritized pattern battery for
// * address/phone/hours, local-business schema, maps embeds, service
// * areas, reviews, and business-listing links.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// * Structured-data fields always win over inline text patterns
static RE_STREET_ADDRESS_LD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""streetAddress"\s*:\s*"([^"]+)""#).unwrap());
static RE_TELEPHONE_LD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""telephone"\s*:\s*"([^"]+)""#).unwrap());
static RE_OPENING_HOURS_LD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""openingHours"\s*:\s*"([^"]+)""#).unwrap());

static RE_STREET_INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\d{1,5}\s+[A-Z][A-Za-z]*(?:\s[A-Z][A-Za-z]*)*\s+(?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Drive|Dr|Lane|Ln|Court|Ct|Place|Pl|Way|Suite|Ste)\b",
    )
    .unwrap()
});

static RE_TEL_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href\s*=\s*["']tel:([^"']+)["']"#).unwrap());
static RE_PHONE_INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+1[-.\s]?)?\(?[0-9]{3}\)?[-.\s][0-9]{3}[-.\s][0-9]{4}").unwrap()
});

static RE_HOURS_INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d{1,2}(?::\d{2})?\s*(?:am|pm)\s*(?:-|–|to)\s*\d{1,2}(?::\d{2})?\s*(?:am|pm)")
        .unwrap()
});

// * Fixed list of schema.org types that mark a local business
static RE_LOCAL_SCHEMA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?:"@type"\s*:\s*"|itemtype\s*=\s*["']https?://schema\.org/)(LocalBusiness|Restaurant|Store|MedicalBusiness|Dentist|Physician|LegalService|RealEstateAgent|AutomotiveBusiness)\b"#,
    )
    .unwrap()
});

static RE_SERVICE_AREA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:service\s+areas?|areas?\s+we\s+serve|proudly\s+serving|serving)\s*[:\s]\s*([^<>.!?]{3,120})")
        .unwrap()
});

static RE_BUSINESS_LISTING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"https?://(?:www\.)?(?:google\.com/maps/place/[^\s"'<>]+|business\.google\.com/[^\s"'<>]+|goo\.gl/maps/[^\s"'<>]+|yelp\.com/biz/[^\s"'<>]+)"#,
    )
    .unwrap()
});

const MAPS_EMBED_MARKERS: &[&str] = &[
    "google.com/maps/embed",
    "maps.google.com",
    "maps.googleapis.com",
];

const REVIEW_MARKERS: &[&str] = &["review", "testimonial", "rating", "stars", "★", "⭐"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocalSeoSignals {
    pub has_address: bool,
    pub address: Option<String>,
    pub has_phone: bool,
    pub phone: Option<String>,
    pub has_business_hours: bool,
    pub business_hours: Option<String>,
    pub has_local_schema: bool,
    pub local_schema_type: Option<String>,
    pub has_maps_embed: bool,
    pub has_service_area: bool,
    pub service_area: Option<String>,
    /// Optimistic heuristic: true only means an address AND a phone were each
    /// found somewhere on the page, not that they belong to the same listing
    pub nap_consistent: bool,
    pub has_reviews_section: bool,
    pub business_listing_url: Option<String>,
}

pub struct LocalSeoDetector;

impl LocalSeoDetector {
    /// `html` carries markup-level signals (links, JSON-LD, embeds);
    /// `text` is the visible-text view used for bare inline patterns.
    pub fn detect(html: &str, text: &str) -> LocalSeoSignals {
        let mut signals = LocalSeoSignals::default();

        signals.address = capture(&RE_STREET_ADDRESS_LD, html)
            .or_else(|| RE_STREET_INLINE.find(text).map(|m| m.as_str().to_string()));
        signals.has_address = signals.address.is_some();

        signals.phone = capture(&RE_TEL_LINK, html)
            .or_else(|| capture(&RE_TELEPHONE_LD, html))
            .or_else(|| RE_PHONE_INLINE.find(text).map(|m| m.as_str().to_string()));
        signals.has_phone = signals.phone.is_some();

        signals.business_hours = capture(&RE_OPENING_HOURS_LD, html)
            .or_else(|| RE_HOURS_INLINE.find(text).map(|m| m.as_str().to_string()));
        signals.has_business_hours = signals.business_hours.is_some();

        signals.local_schema_type = RE_LOCAL_SCHEMA
            .captures(html)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string());
        signals.has_local_schema = signals.local_schema_type.is_some();

        signals.has_maps_embed = MAPS_EMBED_MARKERS.iter().any(|m| html.contains(m));

        signals.service_area = RE_SERVICE_AREA
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string());
        signals.has_service_area = signals.service_area.is_some();

        signals.nap_consistent = signals.has_address && signals.has_phone;

        let lower = text.to_lowercase();
        signals.has_reviews_section = REVIEW_MARKERS.iter().any(|m| lower.contains(m));

        signals.business_listing_url = RE_BUSINESS_LISTING
            .find(html)
            .map(|m| m.as_str().to_string());

        signals
    }
}

fn capture(pattern: &Regex, haystack: &str) -> Option<String> {
    pattern
        .captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|v| !v.is_empty())
}
