//! Fixed copy for the paid-tier sections.

use crate::model::{Category, Signal};

/// Placeholder replaced with the brand name in prompt packs.
pub const BRAND_PLACEHOLDER: &str = "{brand}";

/// Used when no brand name was supplied.
pub const DEFAULT_BRAND: &str = "your brand";

/// Answer-engine readiness checks. A check passes when its signal is absent.
pub static AEO_CHECKS: [(Signal, &str); 5] = [
    (
        Signal::NoWebsite,
        "A crawlable website states what you do and who it is for",
    ),
    (
        Signal::NotIndexedByAi,
        "AI assistants mention the brand when asked about its category",
    ),
    (
        Signal::NoContentCalendar,
        "Helpful content is published on a regular schedule",
    ),
    (
        Signal::NoSocialPresence,
        "At least one active social channel links back to the website",
    ),
    (
        Signal::NoTestimonials,
        "Third-party reviews or testimonials are publicly visible",
    ),
];

/// Quarterly objective per category, used by the 12-month roadmap.
pub fn quarter_objective(category: Category) -> &'static str {
    match category {
        Category::Positioning => "Sharpen positioning so every later investment builds on one clear idea",
        Category::Messaging => "Align messaging across every channel around three key messages",
        Category::Visibility => "Build a findable presence across search, social and AI assistants",
        Category::Credibility => "Collect and publish proof that backs up every major claim",
        Category::Conversion => "Turn attention into leads with one clear offer and reliable follow-up",
    }
}

static PROMPT_PACKS: [[&str; 3]; Category::COUNT] = [
    [
        "Act as a brand strategist. Write three one-sentence positioning statements for {brand} that name its audience, the problem it solves and why it is different.",
        "List the five claims competitors of {brand} make most often, then suggest one claim {brand} could own that none of them use.",
        "Rewrite the homepage headline for {brand} so a first-time visitor understands who it is for within five seconds.",
    ],
    [
        "Draft three key messages for {brand}, each with one supporting proof point and one sentence of customer-facing copy.",
        "Describe the tone of voice of {brand} in five adjectives, then give one do and one don't example for each.",
        "Rewrite this paragraph in the voice of {brand}, replacing any jargon with words a customer would use: [paste copy].",
    ],
    [
        "List the ten questions a buyer would ask an AI assistant before choosing a company like {brand}, and outline an answer page for each.",
        "Create a four-week content calendar for {brand} with one long-form piece and three short social posts per week.",
        "Suggest meta titles and descriptions for the five most important pages on the {brand} website.",
    ],
    [
        "Write a short email {brand} can send happy customers asking for a testimonial, with three guiding questions.",
        "Turn this customer result into a 200-word case study for {brand} with a before, an after and one number: [paste notes].",
        "List the credentials, memberships and notable clients {brand} should display, and where each belongs on the website.",
    ],
    [
        "Write five call-to-action button labels for {brand} that describe the outcome rather than the action.",
        "Design a lead magnet {brand} could offer visitors who are not ready to buy, with a title and a five-point outline.",
        "Draft a three-email follow-up sequence {brand} sends in the first week after someone becomes a lead.",
    ],
];

/// Prompt templates for a category, with [`BRAND_PLACEHOLDER`] unresolved.
#[must_use]
pub fn prompt_templates(category: Category) -> &'static [&'static str; 3] {
    &PROMPT_PACKS[category.index()]
}

/// Replace every brand placeholder in `template`.
#[must_use]
pub fn substitute_brand(template: &str, brand: Option<&str>) -> String {
    template.replace(BRAND_PLACEHOLDER, brand.unwrap_or(DEFAULT_BRAND))
}
