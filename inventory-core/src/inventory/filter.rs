use crate::models::Product;

/// Products whose name or SKU contains the search text, ignoring case.
///
/// Blank or whitespace-only text matches everything. Evaluated on every
/// render; nothing is cached and `products` is never reordered.
pub fn filter_products<'a>(products: &'a [Product], search_text: &str) -> Vec<&'a Product> {
    let query = search_text.trim().to_lowercase();
    if query.is_empty() {
        return products.iter().collect();
    }

    products
        .iter()
        .filter(|product| {
            product.name.to_lowercase().contains(&query) || product.sku.to_lowercase().contains(&query)
        })
        .collect()
}
