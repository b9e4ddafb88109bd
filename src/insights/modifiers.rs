//! Contextual modifier sentences.
//!
//! A modifier rule fires when its signal is present and the category's
//! severity is one the rule applies to. Rules are evaluated in table order
//! and at most [`MAX_MODIFIERS`] sentences are appended per category.

use crate::model::{Category, ContextSignals, Signal};
use crate::scoring::Severity;

/// Upper bound on modifier sentences appended to one category's text.
pub const MAX_MODIFIERS: usize = 3;

const ANY: &[Severity] = &[Severity::Major, Severity::Moderate, Severity::Light];
const GAPS: &[Severity] = &[Severity::Major, Severity::Moderate];

/// One row of the modifier decision table.
#[derive(Debug, Clone, Copy)]
pub struct ModifierRule {
    pub category: Category,
    pub signal: Signal,
    /// Severities this rule applies to
    pub severities: &'static [Severity],
    pub sentence: &'static str,
}

const fn rule(
    category: Category,
    signal: Signal,
    severities: &'static [Severity],
    sentence: &'static str,
) -> ModifierRule {
    ModifierRule {
        category,
        signal,
        severities,
        sentence,
    }
}

/// The decision table, in evaluation order.
pub static MODIFIER_RULES: &[ModifierRule] = &[
    // Positioning
    rule(
        Category::Positioning,
        Signal::NoDeclaredDifferentiator,
        ANY,
        "You have not yet named what makes you different, so buyers will default to comparing you on price.",
    ),
    rule(
        Category::Positioning,
        Signal::NoDefinedAudience,
        ANY,
        "Without a defined audience, your positioning is trying to speak to everyone and landing with no one in particular.",
    ),
    rule(
        Category::Positioning,
        Signal::NoCompetitorResearch,
        GAPS,
        "A short review of how your closest competitors describe themselves will show you which claims are already taken.",
    ),
    rule(
        Category::Positioning,
        Signal::JargonHeavyCopy,
        GAPS,
        "Industry jargon is blurring your position; plain language makes a difference easier to see.",
    ),
    // Messaging
    rule(
        Category::Messaging,
        Signal::InconsistentMessaging,
        ANY,
        "You told us your messaging varies between channels, which means each channel is quietly telling a different story.",
    ),
    rule(
        Category::Messaging,
        Signal::NoBrandGuidelines,
        ANY,
        "There are no brand guidelines yet, so consistency currently depends on whoever is writing that day.",
    ),
    rule(
        Category::Messaging,
        Signal::JargonHeavyCopy,
        ANY,
        "Your copy leans on jargon; replacing it with the words customers use will make every message land faster.",
    ),
    rule(
        Category::Messaging,
        Signal::NoDefinedAudience,
        GAPS,
        "Messages are hard to sharpen until you decide exactly who they are written for.",
    ),
    // Visibility
    rule(
        Category::Visibility,
        Signal::NoWebsite,
        ANY,
        "Without a website, you have no home base for search engines or AI assistants to point people to.",
    ),
    rule(
        Category::Visibility,
        Signal::NotIndexedByAi,
        ANY,
        "AI assistants do not currently surface your brand when asked about your category, which is where a growing share of buyers start.",
    ),
    rule(
        Category::Visibility,
        Signal::NoSocialPresence,
        GAPS,
        "You have no active social presence, so your audience has no easy way to discover you between purchases.",
    ),
    rule(
        Category::Visibility,
        Signal::NoContentCalendar,
        GAPS,
        "Publishing without a content calendar tends to stall; a simple monthly plan keeps visibility compounding.",
    ),
    // Credibility
    rule(
        Category::Credibility,
        Signal::NoTestimonials,
        ANY,
        "You have no published testimonials yet, which is the quickest credibility gap to close.",
    ),
    rule(
        Category::Credibility,
        Signal::NoCaseStudies,
        ANY,
        "Without case studies, buyers cannot picture the result they would get from working with you.",
    ),
    rule(
        Category::Credibility,
        Signal::NoIndustryCredentials,
        GAPS,
        "Listing relevant credentials, memberships or notable clients gives cautious buyers an early reason to trust you.",
    ),
    rule(
        Category::Credibility,
        Signal::NoWebsite,
        GAPS,
        "Proof has nowhere to live without a website, so even strong reviews go unseen.",
    ),
    // Conversion
    rule(
        Category::Conversion,
        Signal::NoClearCallToAction,
        ANY,
        "Your pages do not ask visitors to take one clear next step, so most of them take none.",
    ),
    rule(
        Category::Conversion,
        Signal::NoLeadCapture,
        ANY,
        "There is no way to capture interest from visitors who are not ready to buy today.",
    ),
    rule(
        Category::Conversion,
        Signal::NoEmailFollowUp,
        ANY,
        "Leads receive no follow-up, so interest that is not acted on immediately is lost.",
    ),
    rule(
        Category::Conversion,
        Signal::NoAnalytics,
        ANY,
        "Without analytics, you cannot see where visitors drop off or which changes actually help.",
    ),
];

impl ModifierRule {
    fn applies(&self, category: Category, severity: Severity, signals: &ContextSignals) -> bool {
        self.category == category
            && self.severities.contains(&severity)
            && signals.contains(self.signal)
    }
}

/// Modifier sentences for a category, in table order, capped at [`MAX_MODIFIERS`].
#[must_use]
pub fn select_modifiers(
    category: Category,
    severity: Severity,
    signals: &ContextSignals,
) -> Vec<&'static str> {
    if signals.is_empty() {
        return Vec::new();
    }
    MODIFIER_RULES
        .iter()
        .filter(|r| r.applies(category, severity, signals))
        .map(|r| r.sentence)
        .take(MAX_MODIFIERS)
        .collect()
}

/// Append modifier sentences to a base text, separated by single spaces.
#[must_use]
pub fn append_modifiers(base: &str, modifiers: &[&str]) -> String {
    let extra: usize = modifiers.iter().map(|m| m.len() + 1).sum();
    let mut text = String::with_capacity(base.len() + extra);
    text.push_str(base);
    for modifier in modifiers {
        text.push(' ');
        text.push_str(modifier);
    }
    text
}
