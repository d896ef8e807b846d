use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    OudRich,
    AmberGold,
    FloralFresh,
    GourmandUnique,
    Signature,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::OudRich,
        Category::AmberGold,
        Category::FloralFresh,
        Category::GourmandUnique,
        Category::Signature,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OudRich => "oud-rich",
            Self::AmberGold => "amber-gold",
            Self::FloralFresh => "floral-fresh",
            Self::GourmandUnique => "gourmand-unique",
            Self::Signature => "signature",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|category| category.as_str() == normalized).ok_or_else(|| {
            format!(
                "unknown category `{normalized}` (expected oud-rich|amber-gold|floral-fresh|gourmand-unique|signature)"
            )
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    Mysterious,
    Romantic,
    Fresh,
    Playful,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    InStock,
    Limited,
    OutOfStock,
}

impl Availability {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in-stock",
            Self::Limited => "limited",
            Self::OutOfStock => "out-of-stock",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Price in the smallest currency unit.
    pub price: u32,
    pub category: Category,
    pub mood: Mood,
    pub notes: Vec<String>,
    pub story: String,
    pub images: Vec<String>,
    pub availability: Availability,
    pub featured: bool,
}

impl Product {
    pub fn display_price(&self) -> Decimal {
        Decimal::new(i64::from(self.price), 2)
    }

    pub fn is_in_stock(&self) -> bool {
        self.availability == Availability::InStock
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub description: String,
    pub product_ids: Vec<ProductId>,
}
