// * Metadata Extractor: title, description, icons, social profiles,
// * and contact details, using ordered pattern precedence
// * (Open Graph wins over the generic tag when both exist).

use regex::Regex;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

// * Precompiled selectors for metadata extraction
static SELECTOR_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").unwrap());
static SELECTOR_META: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta").unwrap());
static SELECTOR_ICON: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"link[rel*="icon"]"#).unwrap());
static SELECTOR_MAILTO: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[href^="mailto:"]"#).unwrap());
static SELECTOR_TEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[href^="tel:"]"#).unwrap());

// * Social profile URL patterns, scanned anywhere in the markup
static RE_FACEBOOK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:www\.)?facebook\.com/[A-Za-z0-9_./\-]+").unwrap()
});
static RE_TWITTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:www\.)?(?:twitter\.com|x\.com)/[A-Za-z0-9_]+").unwrap()
});
static RE_LINKEDIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:[a-z]{2,3}\.)?linkedin\.com/(?:company|in|school)/[A-Za-z0-9_\-%.]+")
        .unwrap()
});
static RE_INSTAGRAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:www\.)?instagram\.com/[A-Za-z0-9_.]+").unwrap()
});
static RE_YOUTUBE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:www\.)?youtube\.com/(?:channel/|user/|c/|@)[A-Za-z0-9_\-]+").unwrap()
});
static RE_TIKTOK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:www\.)?tiktok\.com/@[A-Za-z0-9_.]+").unwrap()
});

// * Address patterns: structured data preferred over an inline label
static RE_STREET_ADDRESS_LD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""streetAddress"\s*:\s*"([^"]+)""#).unwrap()
});
static RE_ADDRESS_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\baddress\s*[:\-]\s*([^<>\n]{5,120})").unwrap()
});

/// Fixed set of social platforms reported on every profile.
/// Absent platforms stay `None` rather than being omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
    pub tiktok: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Extracted page metadata. Relative URLs are resolved against the page
/// origin before being reported.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub favicon_url: Option<String>,
    pub logo_url: Option<String>,
    pub social_links: SocialLinks,
    pub contact_info: ContactInfo,
}

pub struct MetadataExtractor;

impl MetadataExtractor {
    pub fn extract(html: &str, base: Option<&Url>) -> PageMetadata {
        let document = Html::parse_document(html);
        let mut metadata = PageMetadata::default();

        Self::extract_open_graph(&document, &mut metadata);
        Self::extract_generic_tags(&document, &mut metadata);
        Self::extract_favicon(&document, &mut metadata, base);
        Self::extract_contact(&document, html, &mut metadata);
        metadata.social_links = Self::extract_social_links(html);

        // * Resolve the OG image against the origin as well
        if let Some(logo) = metadata.logo_url.take() {
            metadata.logo_url = resolve_url(&logo, base);
        }

        metadata
    }

    // * Open Graph tags take precedence, so they are filled first
    fn extract_open_graph(document: &Html, metadata: &mut PageMetadata) {
        for meta in document.select(&SELECTOR_META) {
            let property = meta.value().attr("property").unwrap_or("");
            let content = meta.value().attr("content").unwrap_or("").trim();

            if content.is_empty() {
                continue;
            }

            match property {
                "og:title" if metadata.title.is_none() => {
                    metadata.title = Some(content.to_string());
                }
                "og:description" if metadata.description.is_none() => {
                    metadata.description = Some(content.to_string());
                }
                "og:image" if metadata.logo_url.is_none() => {
                    metadata.logo_url = Some(content.to_string());
                }
                _ => {}
            }
        }
    }

    // * Generic <title> and meta description fill remaining gaps
    fn extract_generic_tags(document: &Html, metadata: &mut PageMetadata) {
        if metadata.title.is_none() {
            if let Some(title) = document.select(&SELECTOR_TITLE).next() {
                let text: String = title.text().collect();
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    metadata.title = Some(trimmed.to_string());
                }
            }
        }

        if metadata.description.is_none() {
            for meta in document.select(&SELECTOR_META) {
                let name = meta.value().attr("name").unwrap_or("");
                let content = meta.value().attr("content").unwrap_or("").trim();
                if name.eq_ignore_ascii_case("description") && !content.is_empty() {
                    metadata.description = Some(content.to_string());
                    break;
                }
            }
        }
    }

    // * Favicon: declared icon link, else the conventional /favicon.ico
    fn extract_favicon(document: &Html, metadata: &mut PageMetadata, base: Option<&Url>) {
        let declared = document
            .select(&SELECTOR_ICON)
            .find_map(|link| link.value().attr("href"))
            .map(str::to_string);

        metadata.favicon_url = match declared {
            Some(href) => resolve_url(&href, base),
            None => resolve_url("/favicon.ico", base),
        };
    }

    fn extract_contact(document: &Html, html: &str, metadata: &mut PageMetadata) {
        if let Some(link) = document.select(&SELECTOR_MAILTO).next() {
            if let Some(href) = link.value().attr("href") {
                metadata.contact_info.email = strip_link_scheme(href, "mailto:");
            }
        }

        if let Some(link) = document.select(&SELECTOR_TEL).next() {
            if let Some(href) = link.value().attr("href") {
                metadata.contact_info.phone = strip_link_scheme(href, "tel:");
            }
        }

        // * Structured streetAddress wins over an inline "Address:" label
        metadata.contact_info.address = RE_STREET_ADDRESS_LD
            .captures(html)
            .or_else(|| RE_ADDRESS_LABEL.captures(html))
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string());
    }

    fn extract_social_links(html: &str) -> SocialLinks {
        SocialLinks {
            facebook: first_profile_match(&RE_FACEBOOK, html),
            twitter: first_profile_match(&RE_TWITTER, html),
            linkedin: first_profile_match(&RE_LINKEDIN, html),
            instagram: first_profile_match(&RE_INSTAGRAM, html),
            youtube: first_profile_match(&RE_YOUTUBE, html),
            tiktok: first_profile_match(&RE_TIKTOK, html),
        }
    }
}

// * Share widgets embed platform URLs that are not the site's own profile
fn first_profile_match(pattern: &Regex, html: &str) -> Option<String> {
    pattern
        .find_iter(html)
        .map(|m| m.as_str().to_string())
        .find(|url| !url.contains("/sharer") && !url.contains("/intent") && !url.contains("/share"))
}

fn strip_link_scheme(href: &str, scheme: &str) -> Option<String> {
    let rest = href.strip_prefix(scheme)?;
    let value = rest.split('?').next().unwrap_or("").trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// * Joins a possibly-relative href against the page origin.
fn resolve_url(href: &str, base: Option<&Url>) -> Option<String> {
    match base {
        Some(base) => base.join(href).ok().map(|u| u.to_string()),
        None => Url::parse(href).ok().map(|u| u.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/about").unwrap()
    }

    #[test]
    fn test_og_title_wins_over_title_tag() {
        let html = r#"
            <html><head>
                <title>Generic Title</title>
                <meta property="og:title" content="OG Title"/>
                <meta name="description" content="Generic description"/>
                <meta property="og:description" content="OG description"/>
            </head><body></body></html>
        "#;

        let meta = MetadataExtractor::extract(html, Some(&base()));
        assert_eq!(meta.title.as_deref(), Some("OG Title"));
        assert_eq!(meta.description.as_deref(), Some("OG description"));
    }

    #[test]
    fn test_title_tag_fallback() {
        let html = r#"<html><head><title>Only Title</title></head><body></body></html>"#;
        let meta = MetadataExtractor::extract(html, Some(&base()));
        assert_eq!(meta.title.as_deref(), Some("Only Title"));
    }

    #[test]
    fn test_favicon_resolved_and_defaulted() {
        let declared = r#"<head><link rel="shortcut icon" href="/static/fav.png"></head>"#;
        let meta = MetadataExtractor::extract(declared, Some(&base()));
        assert_eq!(
            meta.favicon_url.as_deref(),
            Some("https://example.com/static/fav.png")
        );

        let none_declared = r#"<head></head>"#;
        let meta = MetadataExtractor::extract(none_declared, Some(&base()));
        assert_eq!(
            meta.favicon_url.as_deref(),
            Some("https://example.com/favicon.ico")
        );
    }

    #[test]
    fn test_social_links_found_anywhere() {
        let html = r#"
            <footer>
                <a href="https://www.facebook.com/acme">Facebook</a>
                <a href="https://x.com/acme_hq">X</a>
                <a href="https://www.linkedin.com/company/acme-corp">LinkedIn</a>
            </footer>
        "#;

        let meta = MetadataExtractor::extract(html, Some(&base()));
        assert_eq!(
            meta.social_links.facebook.as_deref(),
            Some("https://www.facebook.com/acme")
        );
        assert_eq!(meta.social_links.twitter.as_deref(), Some("https://x.com/acme_hq"));
        assert_eq!(
            meta.social_links.linkedin.as_deref(),
            Some("https://www.linkedin.com/company/acme-corp")
        );
        assert_eq!(meta.social_links.instagram, None);
        assert_eq!(meta.social_links.tiktok, None);
    }

    #[test]
    fn test_share_widget_urls_skipped() {
        let html = r#"<a href="https://www.facebook.com/sharer/sharer.php?u=x">Share</a>"#;
        let meta = MetadataExtractor::extract(html, Some(&base()));
        assert_eq!(meta.social_links.facebook, None);
    }

    #[test]
    fn test_contact_from_mailto_and_tel() {
        let html = r#"
            <a href="mailto:hello@acme.com?subject=Hi">Email us</a>
            <a href="tel:+1-555-010-2000">Call us</a>
        "#;

        let meta = MetadataExtractor::extract(html, Some(&base()));
        assert_eq!(meta.contact_info.email.as_deref(), Some("hello@acme.com"));
        assert_eq!(meta.contact_info.phone.as_deref(), Some("+1-555-010-2000"));
    }

    #[test]
    fn test_structured_address_wins_over_label() {
        let html = r#"
            <p>Address: 1 Wrong Street, Nowhere</p>
            <script type="application/ld+json">
                {"@type": "LocalBusiness", "address": {"streetAddress": "42 Main Street"}}
            </script>
        "#;

        let meta = MetadataExtractor::extract(html, Some(&base()));
        assert_eq!(meta.contact_info.address.as_deref(), Some("42 Main Street"));
    }

    #[test]
    fn test_og_image_resolved_against_origin() {
        let html = r#"<head><meta property="og:image" content="/img/logo.png"></head>"#;
        let meta = MetadataExtractor::extract(html, Some(&base()));
        assert_eq!(
            meta.logo_url.as_deref(),
            Some("https://example.com/img/logo.png")
        );
    }

    #[test]
    fn test_missing_everything_defaults_to_none() {
        let meta = MetadataExtractor::extract("<html></html>", None);
        assert_eq!(meta.title, None);
        assert_eq!(meta.description, None);
        assert_eq!(meta.logo_url, None);
        assert_eq!(meta.social_links, SocialLinks::default());
    }
}
