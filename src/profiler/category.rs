// * Category Classifier: scores a fixed lexicon per business category
// * against the page text. Strictly highest score wins; ties keep the
// * earlier table entry; zero hits fall back to Other.

use crate::config::constants::CLASSIFIER_TEXT_WINDOW;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Ecommerce,
    Saas,
    LocalBusiness,
    BlogMedia,
    ProfessionalServices,
    Healthcare,
    Finance,
    Education,
    RealEstate,
    Hospitality,
    Nonprofit,
    Technology,
    #[default]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ecommerce => "ecommerce",
            Category::Saas => "saas",
            Category::LocalBusiness => "local_business",
            Category::BlogMedia => "blog_media",
            Category::ProfessionalServices => "professional_services",
            Category::Healthcare => "healthcare",
            Category::Finance => "finance",
            Category::Education => "education",
            Category::RealEstate => "real_estate",
            Category::Hospitality => "hospitality",
            Category::Nonprofit => "nonprofit",
            Category::Technology => "technology",
            Category::Other => "other",
        }
    }

    // * Human-readable form used by the summary generator
    pub fn label(&self) -> &'static str {
        match self {
            Category::Ecommerce => "e-commerce",
            Category::Saas => "software-as-a-service",
            Category::LocalBusiness => "local business",
            Category::BlogMedia => "blog or media",
            Category::ProfessionalServices => "professional services",
            Category::Healthcare => "healthcare",
            Category::Finance => "financial services",
            Category::Education => "education",
            Category::RealEstate => "real estate",
            Category::Hospitality => "hospitality",
            Category::Nonprofit => "nonprofit",
            Category::Technology => "technology",
            Category::Other => "general-purpose",
        }
    }
}

// * Declaration order is the tie-break order
const LEXICONS: &[(Category, &[&str])] = &[
    (
        Category::Ecommerce,
        &["shop", "cart", "checkout", "buy", "add to cart", "free shipping", "product", "order now", "sale", "in stock"],
    ),
    (
        Category::Saas,
        &["free trial", "pricing", "dashboard", "api", "integration", "subscription", "platform", "sign up", "demo", "workflow"],
    ),
    (
        Category::LocalBusiness,
        &["hours", "directions", "visit us", "locally owned", "family owned", "call us", "near me", "our location", "appointment"],
    ),
    (
        Category::BlogMedia,
        &["blog", "article", "read more", "published", "author", "editorial", "latest posts", "newsletter", "breaking news"],
    ),
    (
        Category::ProfessionalServices,
        &["consulting", "attorney", "law firm", "accounting", "agency", "clients", "case study", "expertise", "our team"],
    ),
    (
        Category::Healthcare,
        &["patient", "clinic", "doctor", "dental", "medical", "treatment", "wellness", "insurance accepted", "care"],
    ),
    (
        Category::Finance,
        &["loan", "mortgage", "investment", "banking", "insurance", "credit", "wealth", "retirement", "tax"],
    ),
    (
        Category::Education,
        &["course", "students", "curriculum", "enroll", "tuition", "school", "training", "certification", "lesson"],
    ),
    (
        Category::RealEstate,
        &["listings", "homes for sale", "realtor", "property", "real estate", "mls", "open house", "square feet"],
    ),
    (
        Category::Hospitality,
        &["menu", "reservation", "book now", "rooms", "restaurant", "hotel", "dining", "amenities", "guests"],
    ),
    (
        Category::Nonprofit,
        &["donate", "volunteer", "mission", "charity", "nonprofit", "donation", "fundraiser", "our cause", "impact"],
    ),
    (
        Category::Technology,
        &["software", "technology", "development", "engineering", "cloud", "data", "security", "digital", "innovation"],
    ),
];

pub struct CategoryClassifier;

impl CategoryClassifier {
    pub fn classify(body_text: &str, title: Option<&str>, description: Option<&str>) -> Category {
        let window = truncate_chars(body_text, CLASSIFIER_TEXT_WINDOW);
        let haystack = format!(
            "{} {} {}",
            window,
            title.unwrap_or(""),
            description.unwrap_or("")
        )
        .to_lowercase();

        let mut best = Category::Other;
        let mut best_score = 0;

        for (category, terms) in LEXICONS {
            let score = terms.iter().filter(|t| haystack.contains(*t)).count();
            if score > best_score {
                best_score = score;
                best = *category;
            }
        }

        best
    }
}

fn truncate_chars(text: &str, cap: usize) -> &str {
    match text.char_indices().nth(cap) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
