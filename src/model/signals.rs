//! Contextual signals: optional facts about the subject that select extra
//! modifier sentences. Signals never change a numeric score.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A named boolean fact supplied by the caller. Presence means "true".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Signal {
    // Positioning
    NoDeclaredDifferentiator,
    NoDefinedAudience,
    NoCompetitorResearch,
    // Messaging
    InconsistentMessaging,
    NoBrandGuidelines,
    JargonHeavyCopy,
    // Visibility
    NoWebsite,
    NoSocialPresence,
    NoContentCalendar,
    NotIndexedByAi,
    // Credibility
    NoTestimonials,
    NoCaseStudies,
    NoIndustryCredentials,
    // Conversion
    NoClearCallToAction,
    NoLeadCapture,
    NoEmailFollowUp,
    NoAnalytics,
}

/// The set of signals known to be true for a subject.
///
/// Missing signals are simply absent; an empty set means no modifiers apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ContextSignals(BTreeSet<Signal>);

impl ContextSignals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a signal as present.
    #[must_use]
    pub fn with(mut self, signal: Signal) -> Self {
        self.0.insert(signal);
        self
    }

    pub fn insert(&mut self, signal: Signal) -> bool {
        self.0.insert(signal)
    }

    #[must_use]
    pub fn contains(&self, signal: Signal) -> bool {
        self.0.contains(&signal)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Signal> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Signal> for ContextSignals {
    fn from_iter<I: IntoIterator<Item = Signal>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
