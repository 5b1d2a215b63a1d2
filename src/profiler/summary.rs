// * Summary Generator: composes a deterministic narrative paragraph from
// * the extracted metadata, the detected category, and the page text.
// * Template-based on purpose; identical input always yields identical text.

use crate::config::constants::{SUMMARY_BODY_SENTENCES, SUMMARY_MIN_CHARS};
use crate::profiler::category::Category;

// * First-person and service-oriented markers that select body sentences
const SERVICE_MARKERS: &[&str] = &[
    "we ", "our ", " provide", " offer", " specialize", " help", " service", " solution",
    " deliver",
];

const CLOSING_SENTENCE: &str = "Additional details about offerings, pricing, and contact options \
may be available elsewhere on the site; this overview reflects only the content of the analyzed \
page, including its visible text, metadata, and structural markup.";

pub struct SummaryGenerator;

impl SummaryGenerator {
    pub fn generate(
        title: Option<&str>,
        description: Option<&str>,
        category: Category,
        body_text: &str,
    ) -> String {
        let mut parts: Vec<String> = Vec::new();

        match title {
            Some(title) => parts.push(format!("{} is a {} website.", title, category.label())),
            None => parts.push(format!(
                "This website appears to be a {} site.",
                category.label()
            )),
        }

        if let Some(description) = description {
            let description = description.trim();
            if !description.is_empty() {
                parts.push(ensure_terminated(description));
            }
        }

        let mut summary = parts.join(" ");

        for sentence in service_sentences(body_text, &summary) {
            summary.push(' ');
            summary.push_str(&sentence);
        }

        summary.push(' ');
        summary.push_str(context_sentence(category));

        if summary.len() < SUMMARY_MIN_CHARS {
            summary.push(' ');
            summary.push_str(CLOSING_SENTENCE);
        }

        summary
    }
}

// * Up to three body sentences carrying a service marker, each skipped if
// * its text already appears in the summary built so far
fn service_sentences(body_text: &str, already_included: &str) -> Vec<String> {
    let mut picked: Vec<String> = Vec::new();

    for raw in body_text.split(['.', '!', '?']) {
        if picked.len() >= SUMMARY_BODY_SENTENCES {
            break;
        }

        let sentence = raw.trim();
        if sentence.len() < 20 || sentence.len() > 300 {
            continue;
        }

        let lower = sentence.to_lowercase();
        if !SERVICE_MARKERS.iter().any(|m| lower.contains(m)) {
            continue;
        }

        if already_included.contains(sentence) || picked.iter().any(|p| p.contains(sentence)) {
            continue;
        }

        picked.push(ensure_terminated(sentence));
    }

    picked
}

fn ensure_terminated(sentence: &str) -> String {
    if sentence.ends_with(['.', '!', '?']) {
        sentence.to_string()
    } else {
        format!("{sentence}.")
    }
}

// * Fixed per-category context sentence
fn context_sentence(category: Category) -> &'static str {
    match category {
        Category::Ecommerce => {
            "The site operates an online store where visitors can browse products and complete purchases."
        }
        Category::Saas => {
            "The site markets a subscription software product with self-service signup and plan tiers."
        }
        Category::LocalBusiness => {
            "The site represents a business serving customers from a physical location or local area."
        }
        Category::BlogMedia => {
            "The site publishes articles or editorial content for a reading audience."
        }
        Category::ProfessionalServices => {
            "The site promotes client-facing professional expertise and engagement-based services."
        }
        Category::Healthcare => {
            "The site represents a healthcare provider offering patient-facing care or treatment."
        }
        Category::Finance => {
            "The site offers financial products or advisory services to individuals or businesses."
        }
        Category::Education => {
            "The site provides educational programs, courses, or training materials."
        }
        Category::RealEstate => {
            "The site deals in property listings, sales, or real-estate services."
        }
        Category::Hospitality => {
            "The site serves guests with dining, lodging, or event offerings."
        }
        Category::Nonprofit => {
            "The site advances a charitable mission supported by donations or volunteers."
        }
        Category::Technology => {
            "The site centers on technology products, engineering work, or digital services."
        }
        Category::Other => {
            "The page content does not strongly indicate a single business category."
        }
    }
}
