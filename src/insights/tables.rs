//! Fixed copy tables.
//!
//! Rows follow [`Category`] declaration order; columns follow [`Tier`] or
//! [`Severity`] declaration order. Editing copy is a data change here, never
//! a code change elsewhere.

use crate::model::Category;
use crate::scoring::{Severity, Tier};

/// Strength / opportunity / action copy for one (category, tier) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightTemplate {
    pub strength: &'static str,
    pub opportunity: &'static str,
    pub action: &'static str,
}

const fn cell(
    strength: &'static str,
    opportunity: &'static str,
    action: &'static str,
) -> InsightTemplate {
    InsightTemplate {
        strength,
        opportunity,
        action,
    }
}

static INSIGHT_TABLE: [[InsightTemplate; 4]; Category::COUNT] = [
    // Positioning
    [
        cell(
            "Your positioning is sharp: people can tell in one sentence who you serve and why you are the obvious choice.",
            "Your opportunity is to defend that position as the market shifts and competitors start borrowing your language.",
            "Review your positioning statement every quarter against the three competitors you lose deals to most often.",
        ),
        cell(
            "Your positioning is clear and mostly distinct, and your best customers would describe you in similar terms.",
            "Your opportunity is to narrow the gap between how you describe yourself and the single reason buyers pick you.",
            "Interview five recent customers and rewrite your one-line positioning in the words they used.",
        ),
        cell(
            "Your positioning has a solid core, but it is competing with a few other ideas for attention.",
            "Your opportunity is to choose one audience and one differentiator and let the rest become supporting detail.",
            "Write a single positioning statement naming your audience, the problem you solve and why you are different, then test it on your homepage.",
        ),
        cell(
            "Your positioning has raw material to work with: you know what you do, even if the market does not yet see it.",
            "Your opportunity is to stop sounding like everyone else in your category and claim a specific place in the buyer's mind.",
            "List the three things only you can credibly say, pick the strongest, and build your positioning statement around it this month.",
        ),
    ],
    // Messaging
    [
        cell(
            "Your messaging is consistent and memorable across every channel, and it sounds unmistakably like you.",
            "Your opportunity is to keep that consistency as new people start writing on behalf of the brand.",
            "Turn your best-performing messages into a short messaging guide that every new writer reads first.",
        ),
        cell(
            "Your messaging is clear and your key points land, with only occasional drift between channels.",
            "Your opportunity is to tighten the handful of places where your tone or claims wander from the core story.",
            "Audit your homepage, last five social posts and main sales email side by side and align the headline claims.",
        ),
        cell(
            "Your messaging communicates what you do, but it does not yet make the reader feel why it matters to them.",
            "Your opportunity is to lead with the customer's problem and outcome instead of your features and process.",
            "Rewrite your top three headlines so each one names a customer problem and the result you deliver.",
        ),
        cell(
            "Your messaging has an honest voice underneath it, which is a better starting point than polished but empty copy.",
            "Your opportunity is to say one clear thing, the same way, everywhere your audience meets you.",
            "Define three key messages and a one-paragraph tone of voice, then rewrite your homepage hero section using only those.",
        ),
    ],
    // Visibility
    [
        cell(
            "Your visibility is excellent: you show up where your audience searches, scrolls and asks AI assistants for advice.",
            "Your opportunity is to turn that reach into owned audience so it does not depend on any single platform.",
            "Add a clear newsletter or community invitation to your three highest-traffic pages.",
        ),
        cell(
            "Your visibility is strong across your main channels and you publish with a steady rhythm.",
            "Your opportunity is to extend into the places you are still missing, especially AI-driven answer engines.",
            "Publish one in-depth answer page per month for the questions your buyers ask most often.",
        ),
        cell(
            "Your visibility has a foothold: people who already know you can find you.",
            "Your opportunity is to be found by the people who do not know you yet, through search, social and AI recommendations.",
            "Pick two channels your audience actually uses and commit to a weekly publishing cadence on both for 90 days.",
        ),
        cell(
            "Your visibility is a blank canvas, which means every step you take now will show up quickly.",
            "Your opportunity is to establish a basic, findable presence before investing in anything more ambitious.",
            "Claim your business profiles, make sure your website states plainly what you do and for whom, and publish your first three pieces of helpful content.",
        ),
    ],
    // Credibility
    [
        cell(
            "Your credibility is a real asset: proof, credentials and customer voices back up every claim you make.",
            "Your opportunity is to put that proof in front of buyers earlier, before they have to go looking for it.",
            "Place your strongest testimonial or result directly beside every call to action.",
        ),
        cell(
            "Your credibility is strong, with solid proof points that support your main claims.",
            "Your opportunity is to add specific, quantified results so your proof is harder to dismiss.",
            "Turn your two best customer stories into short case studies with a before, an after and a number.",
        ),
        cell(
            "Your credibility rests on a few good signals, but buyers have to work to find them.",
            "Your opportunity is to collect and surface the proof you already have so it does the selling for you.",
            "Ask your five happiest customers for a testimonial this week and add them to your homepage and sales pages.",
        ),
        cell(
            "Your credibility has room to grow quickly, because even a little proof makes a visible difference.",
            "Your opportunity is to give buyers a reason to trust you before they have spoken to you.",
            "Gather three testimonials, list any credentials or notable clients, and publish one short story of a result you delivered.",
        ),
    ],
    // Conversion
    [
        cell(
            "Your conversion path is excellent: visitors know exactly what to do next and follow-up happens without gaps.",
            "Your opportunity is to keep testing so small improvements keep compounding.",
            "Run one structured test per month on your primary call to action and keep a log of the results.",
        ),
        cell(
            "Your conversion path is strong, with a clear offer and a working way to capture interest.",
            "Your opportunity is to follow up faster and more personally with the leads you already capture.",
            "Add an automated three-message follow-up sequence for every new lead, sent within the first week.",
        ),
        cell(
            "Your conversion path works in places, but interested visitors can still slip away without a next step.",
            "Your opportunity is to make the next step obvious on every page and to capture interest before people leave.",
            "Give every key page one primary call to action and add a simple lead capture offer to your homepage.",
        ),
        cell(
            "Your conversion path is where the fastest wins are hiding, because small fixes here pay back immediately.",
            "Your opportunity is to turn attention into conversations with a single clear offer and a way to say yes.",
            "Choose one primary offer, add a prominent call to action for it, and set up a form that notifies you instantly.",
        ),
    ],
];

static GAP_PARAGRAPHS: [[&str; 3]; Category::COUNT] = [
    // Positioning: major, moderate, light
    [
        "Positioning is your biggest gap right now. Without a clear answer to who you serve and why you are different, every other investment in marketing has to work much harder.",
        "Positioning is partly defined. You have a sense of who you serve, but the reason to choose you over the alternatives is not yet sharp enough to carry your marketing on its own.",
        "Positioning is in good shape. Your audience and differentiator are clear, so small refinements will keep you ahead as the market moves.",
    ],
    // Messaging
    [
        "Messaging is a major gap. Your audience is likely to hear different stories depending on where they meet you, which makes it hard for any single message to stick.",
        "Messaging is moderately aligned. The core story is there, but it changes shape across channels and does not always lead with what your customer cares about.",
        "Messaging is in good shape. Your story is consistent and clear, and the remaining work is keeping it that way as you grow.",
    ],
    // Visibility
    [
        "Visibility is a major gap. The people you could help are unlikely to find you through search, social channels or AI assistants today.",
        "Visibility is moderate. You can be found by people who already know your name, but you are not yet reliably showing up for people who are searching for what you offer.",
        "Visibility is in good shape. You show up in the right places with some consistency, so the focus now is reach and owned audience.",
    ],
    // Credibility
    [
        "Credibility is a major gap. Buyers have little visible proof that you deliver, so they are being asked to take your word for it.",
        "Credibility is moderate. You have some proof points, but they are scattered or too general to reassure a cautious buyer.",
        "Credibility is in good shape. Your proof backs up your claims, and the next step is making it more specific and more visible.",
    ],
    // Conversion
    [
        "Conversion is a major gap. Interested visitors do not have an obvious next step, so attention you have already earned is leaking away.",
        "Conversion is moderate. There is a path to becoming a customer, but it has friction, and follow-up depends on the visitor doing the work.",
        "Conversion is in good shape. Your offer and next steps are clear, so the gains now come from testing and faster follow-up.",
    ],
];

/// Copy for a (category, tier) cell.
#[must_use]
pub fn insight_template(category: Category, tier: Tier) -> &'static InsightTemplate {
    &INSIGHT_TABLE[category.index()][tier.index()]
}

/// Descriptive paragraph for a (category, severity) cell.
#[must_use]
pub fn gap_paragraph(category: Category, severity: Severity) -> &'static str {
    GAP_PARAGRAPHS[category.index()][severity.index()]
}
