use fragrance_core::catalog::storefront;
use fragrance_core::domain::product::{Category, Product};

use crate::commands::{CommandResult, EXIT_INPUT_INVALID};

pub fn run(category: Option<&str>, json_output: bool) -> CommandResult {
    let catalog = storefront();

    let products: Vec<&Product> = match category {
        Some(raw) => match raw.parse::<Category>() {
            Ok(category) => catalog.by_category(category).collect(),
            Err(error) => {
                return CommandResult::failure(
                    "catalog",
                    "input_validation",
                    error,
                    EXIT_INPUT_INVALID,
                );
            }
        },
        None => catalog.products().iter().collect(),
    };

    if json_output {
        return CommandResult::json("catalog", &products);
    }

    let mut lines = vec![format!("{} products", products.len())];
    lines.extend(products.iter().map(|product| render_product(product)));
    CommandResult::text(lines.join("\n"))
}

fn render_product(product: &Product) -> String {
    let marker = if product.featured { "*" } else { " " };
    format!(
        "{marker} {:<20} {:<24} {:<16} ${:>7} {}",
        product.id.as_str(),
        product.name,
        product.category.as_str(),
        product.display_price().to_string(),
        product.availability.as_str()
    )
}
