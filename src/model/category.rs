//! Assessment categories (pillars) and the fixed-size map keyed by them.

use schemars::JsonSchema;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::Index;

/// One of the five assessment dimensions.
///
/// Declaration order is significant: it is the display order and breaks
/// ties when two categories share a score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Positioning,
    Messaging,
    Visibility,
    Credibility,
    Conversion,
}

impl Category {
    /// All categories in declaration order
    pub const ALL: [Self; 5] = [
        Self::Positioning,
        Self::Messaging,
        Self::Visibility,
        Self::Credibility,
        Self::Conversion,
    ];

    /// Number of categories
    pub const COUNT: usize = 5;

    /// Position in declaration order
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Positioning => 0,
            Self::Messaging => 1,
            Self::Visibility => 2,
            Self::Credibility => 3,
            Self::Conversion => 4,
        }
    }

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Positioning => "Positioning",
            Self::Messaging => "Messaging",
            Self::Visibility => "Visibility",
            Self::Credibility => "Credibility",
            Self::Conversion => "Conversion",
        }
    }

    /// Lower-case key used in requests, payloads and copy
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Positioning => "positioning",
            Self::Messaging => "messaging",
            Self::Visibility => "visibility",
            Self::Credibility => "credibility",
            Self::Conversion => "conversion",
        }
    }

    /// Parse a category key, case-insensitively. Returns None for unknown keys.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// The five sub-criteria rated for this category.
    #[must_use]
    pub const fn sub_criteria(self) -> [&'static str; 5] {
        match self {
            Self::Positioning => [
                "differentiation",
                "target_audience",
                "value_proposition",
                "competitive_awareness",
                "brand_story",
            ],
            Self::Messaging => [
                "clarity",
                "consistency",
                "tone_of_voice",
                "key_messages",
                "audience_resonance",
            ],
            Self::Visibility => [
                "search_presence",
                "social_presence",
                "content_output",
                "ai_discoverability",
                "channel_mix",
            ],
            Self::Credibility => [
                "testimonials",
                "case_studies",
                "credentials",
                "social_proof",
                "thought_leadership",
            ],
            Self::Conversion => [
                "call_to_action",
                "lead_capture",
                "offer_clarity",
                "funnel_follow_up",
                "measurement",
            ],
        }
    }

    /// Find the category a sub-criterion belongs to.
    #[must_use]
    pub fn for_sub_criterion(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.sub_criteria().contains(&name))
    }

    /// Composite weight in whole percent. Weights sum to 100.
    #[must_use]
    pub const fn weight_percent(self) -> u32 {
        match self {
            Self::Positioning => 30,
            Self::Messaging => 25,
            Self::Credibility => 20,
            Self::Visibility => 15,
            Self::Conversion => 10,
        }
    }

    /// Composite weight as a fraction of 1.0
    #[must_use]
    pub fn weight(self) -> f64 {
        f64::from(self.weight_percent()) / 100.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value for every category, stored in declaration order.
///
/// Lookups are exhaustive by construction: there is no way to build a map
/// with a category missing. Serializes as a JSON object keyed by
/// [`Category::key`], in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryMap<T>([T; Category::COUNT]);

impl<T> CategoryMap<T> {
    /// Build a map by evaluating `f` for each category in order.
    pub fn from_fn(mut f: impl FnMut(Category) -> T) -> Self {
        Self(Category::ALL.map(|c| f(c)))
    }

    /// Fallible variant of [`CategoryMap::from_fn`]; stops at the first error.
    pub fn try_from_fn<E>(mut f: impl FnMut(Category) -> Result<T, E>) -> Result<Self, E> {
        let [a, b, c, d, e] = Category::ALL;
        Ok(Self([f(a)?, f(b)?, f(c)?, f(d)?, f(e)?]))
    }

    #[must_use]
    pub fn get(&self, category: Category) -> &T {
        &self.0[category.index()]
    }

    /// Iterate `(category, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL.into_iter().zip(self.0.iter())
    }

    /// Iterate values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    /// Transform every value, keeping the category association.
    pub fn map<U>(&self, mut f: impl FnMut(Category, &T) -> U) -> CategoryMap<U> {
        CategoryMap::from_fn(|c| f(c, self.get(c)))
    }
}

impl<T> Index<Category> for CategoryMap<T> {
    type Output = T;

    fn index(&self, category: Category) -> &T {
        self.get(category)
    }
}

impl<T: Serialize> Serialize for CategoryMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, value) in self.iter() {
            map.serialize_entry(category.key(), value)?;
        }
        map.end()
    }
}
