mod seeds;

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::domain::product::{Category, Collection, Product, ProductId};
use crate::errors::DomainError;

use self::seeds::{CollectionSeed, ProductSeed, COLLECTION_SEEDS, PRODUCT_SEEDS};

static STOREFRONT: OnceLock<Catalog> = OnceLock::new();

/// The storefront catalog, built once from the static seeds.
pub fn storefront() -> &'static Catalog {
    STOREFRONT.get_or_init(|| {
        Catalog::new(
            PRODUCT_SEEDS.iter().map(product_from_seed).collect(),
            COLLECTION_SEEDS.iter().map(collection_from_seed).collect(),
        )
    })
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    collections: Vec<Collection>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, collections: Vec<Collection>) -> Self {
        Self { products, collections }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, product_id: &str) -> Result<&Product, DomainError> {
        self.products
            .iter()
            .find(|product| product.id.as_str() == product_id)
            .ok_or_else(|| DomainError::UnknownProduct(product_id.to_string()))
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter().filter(move |product| product.category == category)
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn collection(&self, collection_id: &str) -> Result<&Collection, DomainError> {
        self.collections
            .iter()
            .find(|collection| collection.id == collection_id)
            .ok_or_else(|| DomainError::UnknownCollection(collection_id.to_string()))
    }

    /// Products of a collection, in the collection's order.
    pub fn collection_products(&self, collection_id: &str) -> Result<Vec<&Product>, DomainError> {
        let collection = self.collection(collection_id)?;
        collection
            .product_ids
            .iter()
            .map(|product_id| {
                self.get(product_id.as_str()).ok().ok_or_else(|| {
                    DomainError::InvariantViolation(format!(
                        "collection `{collection_id}` references missing product `{product_id}`"
                    ))
                })
            })
            .collect()
    }

    /// Checks that product ids are unique and collections only reference
    /// products that exist.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut ids = HashSet::new();
        for product in &self.products {
            if !ids.insert(product.id.as_str()) {
                return Err(DomainError::InvariantViolation(format!(
                    "duplicate product id `{}`",
                    product.id
                )));
            }
        }

        for collection in &self.collections {
            self.collection_products(&collection.id)?;
        }

        Ok(())
    }
}

fn product_from_seed(seed: &ProductSeed) -> Product {
    Product {
        id: ProductId(seed.id.to_string()),
        name: seed.name.to_string(),
        description: seed.description.to_string(),
        price: seed.price,
        category: seed.category,
        mood: seed.mood,
        notes: seed.notes.iter().map(|note| (*note).to_string()).collect(),
        story: seed.story.to_string(),
        images: vec![
            format!("/images/products/{}-1.jpg", seed.id),
            format!("/images/products/{}-2.jpg", seed.id),
        ],
        availability: seed.availability,
        featured: seed.featured,
    }
}

fn collection_from_seed(seed: &CollectionSeed) -> Collection {
    Collection {
        id: seed.id.to_string(),
        name: seed.name.to_string(),
        description: seed.description.to_string(),
        product_ids: seed.product_ids.iter().map(|id| ProductId((*id).to_string())).collect(),
    }
}
