use crate::domain::product::Category;
use crate::domain::profile::ScentWeights;

use super::FALLBACK_CATEGORY_WEIGHTS;

/// Stand-in profile for each product category.
pub const DEFAULT_CATEGORY_WEIGHTS: &[(Category, ScentWeights)] = &[
    (Category::OudRich, ScentWeights::new(0.9, 0.3, 0.1, 0.2)),
    (Category::AmberGold, ScentWeights::new(0.3, 0.9, 0.2, 0.4)),
    (Category::FloralFresh, ScentWeights::new(0.1, 0.2, 0.9, 0.3)),
    (Category::GourmandUnique, ScentWeights::new(0.2, 0.4, 0.3, 0.9)),
    (Category::Signature, ScentWeights::new(0.5, 0.5, 0.5, 0.5)),
];

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryWeights {
    entries: Vec<(Category, ScentWeights)>,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self { entries: DEFAULT_CATEGORY_WEIGHTS.to_vec() }
    }
}

impl CategoryWeights {
    pub fn new(entries: Vec<(Category, ScentWeights)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, category: Category) -> Option<ScentWeights> {
        self.entries.iter().find(|(entry, _)| *entry == category).map(|(_, weights)| *weights)
    }

    /// Weights for `category`, or the neutral fallback when the table has none.
    pub fn weights_for(&self, category: Category) -> ScentWeights {
        self.get(category).unwrap_or(FALLBACK_CATEGORY_WEIGHTS)
    }
}

#[cfg(test)]
mod tests {
    use super::CategoryWeights;
    use crate::domain::product::Category;
    use crate::domain::profile::ScentWeights;
    use crate::recommend::FALLBACK_CATEGORY_WEIGHTS;

    #[test]
    fn default_table_covers_every_category() {
        let table = CategoryWeights::default();
        for category in Category::ALL {
            assert!(table.get(category).is_some(), "{category} missing");
        }
    }

    #[test]
    fn missing_category_falls_back_to_neutral_weights() {
        let table = CategoryWeights::new(vec![(Category::OudRich, ScentWeights::new(1.0, 0.0, 0.0, 0.0))]);
        assert_eq!(table.weights_for(Category::AmberGold), FALLBACK_CATEGORY_WEIGHTS);
        assert_eq!(table.weights_for(Category::OudRich).oud, 1.0);
    }
}
