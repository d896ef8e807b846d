use std::fmt;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Four-component weight vector over the scent dimensions.
///
/// Used both for the answer and category weight tables and, once normalized,
/// as a user's [`ScentProfile`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScentWeights {
    pub oud: f64,
    pub amber: f64,
    pub floral: f64,
    pub gourmand: f64,
}

/// A user's normalized preference vector. Components sum to 1.0 unless the
/// profile is degenerate (all zero).
pub type ScentProfile = ScentWeights;

impl ScentWeights {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(oud: f64, amber: f64, floral: f64, gourmand: f64) -> Self {
        Self { oud, amber, floral, gourmand }
    }

    pub fn total(&self) -> f64 {
        self.oud + self.amber + self.floral + self.gourmand
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.oud * other.oud
            + self.amber * other.amber
            + self.floral * other.floral
            + self.gourmand * other.gourmand
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.oud * factor,
            self.amber * factor,
            self.floral * factor,
            self.gourmand * factor,
        )
    }

    pub fn max_component(&self) -> f64 {
        self.oud.max(self.amber).max(self.floral).max(self.gourmand)
    }

    pub fn is_zero(&self) -> bool {
        self.total() == 0.0
    }
}

impl AddAssign for ScentWeights {
    fn add_assign(&mut self, other: Self) {
        self.oud += other.oud;
        self.amber += other.amber;
        self.floral += other.floral;
        self.gourmand += other.gourmand;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScentFamily {
    OudRich,
    AmberGold,
    FloralFresh,
    GourmandUnique,
    Signature,
}

impl ScentFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OudRich => "oud-rich",
            Self::AmberGold => "amber-gold",
            Self::FloralFresh => "floral-fresh",
            Self::GourmandUnique => "gourmand-unique",
            Self::Signature => "signature",
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Self::OudRich => "The Oud Connoisseur",
            Self::AmberGold => "The Amber Devotee",
            Self::FloralFresh => "The Floral Romantic",
            Self::GourmandUnique => "The Gourmand Adventurer",
            Self::Signature => "The Signature Explorer",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::OudRich => {
                "Deep, smoky woods and resinous oud. You are drawn to scents with gravity and mystery."
            }
            Self::AmberGold => {
                "Warm amber, spice and golden resins. You favour scents that glow rather than shout."
            }
            Self::FloralFresh => {
                "Bright petals and airy citrus. You reach for scents that feel light and luminous."
            }
            Self::GourmandUnique => {
                "Vanilla, tonka and edible accords. You love scents with comfort and a playful edge."
            }
            Self::Signature => {
                "A balanced palate with no single pull. Start with the house blends and explore from there."
            }
        }
    }
}

impl fmt::Display for ScentFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
