//! Product tiers.

use crate::error::{AlignmentError, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Purchased report level. Each tier is a superset of the one before it.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProductTier {
    /// The free diagnostic
    #[default]
    #[serde(alias = "free")]
    Baseline,
    Extended,
    Full,
    Complete,
}

impl ProductTier {
    pub const ALL: [Self; 4] = [Self::Baseline, Self::Extended, Self::Full, Self::Complete];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Extended => "extended",
            Self::Full => "full",
            Self::Complete => "complete",
        }
    }

    /// Parse a tier name. `free` is accepted for `baseline`.
    ///
    /// Unknown names are a caller bug and yield
    /// [`AlignmentError::UnknownProductTier`].
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "baseline" | "free" => Ok(Self::Baseline),
            "extended" => Ok(Self::Extended),
            "full" => Ok(Self::Full),
            "complete" => Ok(Self::Complete),
            _ => Err(AlignmentError::UnknownProductTier(name.to_string())),
        }
    }

    /// Whether this tier carries everything `other` carries.
    #[must_use]
    pub fn includes(self, other: Self) -> bool {
        self >= other
    }

    /// The next tier up, if any
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Baseline => Some(Self::Extended),
            Self::Extended => Some(Self::Full),
            Self::Full => Some(Self::Complete),
            Self::Complete => None,
        }
    }

    /// Every tier below the top one gets upsell copy.
    #[must_use]
    pub const fn has_upsell(self) -> bool {
        self.next().is_some()
    }
}

impl FromStr for ProductTier {
    type Err = AlignmentError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ProductTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
