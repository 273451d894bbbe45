use contracts::domain::product::Product;

/// Synthetic "no filter" category, always at index 0 of the derived list.
pub const ALL_CATEGORY: &str = "All";

/// Parses the preloaded product dataset.
///
/// Returns the catalog plus the derived category list. Never panics: a
/// dataset that is not valid JSON, or not an array, degrades to an empty
/// catalog and `["All"]` so the page still renders its empty state. A
/// single record that fails to deserialize (missing/mistyped field) is
/// skipped and logged, the rest of the catalog survives.
pub fn load_catalog(raw: &str) -> (Vec<Product>, Vec<String>) {
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            log::error!("Error loading data: not valid JSON: {}", e);
            return (Vec::new(), vec![ALL_CATEGORY.to_string()]);
        }
    };

    let Some(items) = value.as_array() else {
        log::error!("Error loading data: dataset is not an array");
        return (Vec::new(), vec![ALL_CATEGORY.to_string()]);
    };

    let mut products = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        match serde_json::from_value::<Product>(item.clone()) {
            Ok(p) => products.push(p),
            Err(e) => log::warn!("Skipping malformed product record #{}: {}", idx, e),
        }
    }

    let categories = derive_categories(&products);
    (products, categories)
}

/// Distinct `category` values in first-occurrence order, with "All"
/// prepended at index 0.
///
/// A literal "All" category in the data is absorbed by the synthetic
/// entry and therefore never filterable as a distinct category.
pub fn derive_categories(products: &[Product]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORY.to_string()];
    for product in products {
        if !categories.iter().any(|c| c == &product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, category: &str) -> Product {
        Product {
            name: name.to_string(),
            price: "$1.00".to_string(),
            category: category.to_string(),
            rating: 4.0,
            link: format!("https://example.com/p/{}", name),
        }
    }

    #[test]
    fn test_derive_categories_first_occurrence_order() {
        let catalog = vec![product("a", "A"), product("b", "B"), product("c", "A")];
        assert_eq!(derive_categories(&catalog), vec!["All", "A", "B"]);
    }

    #[test]
    fn test_derive_categories_empty_catalog() {
        assert_eq!(derive_categories(&[]), vec!["All"]);
    }

    #[test]
    fn test_literal_all_category_is_absorbed() {
        let catalog = vec![product("a", "All"), product("b", "B")];
        assert_eq!(derive_categories(&catalog), vec!["All", "B"]);
    }

    #[test]
    fn test_load_valid_dataset() {
        let raw = r#"[
            {"name":"Red Mug","price":"$9.99","category":"Kitchen","rating":3.0,"link":"https://example.com/p/1"},
            {"name":"Laptop","price":"$494.71","category":"Electronics","rating":4.2,"link":"https://example.com/p/2"}
        ]"#;
        let (catalog, categories) = load_catalog(raw);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].name, "Red Mug");
        assert_eq!(categories, vec!["All", "Kitchen", "Electronics"]);
    }

    #[test]
    fn test_load_invalid_json_degrades_to_empty() {
        let (catalog, categories) = load_catalog("not json at all");
        assert!(catalog.is_empty());
        assert_eq!(categories, vec!["All"]);
    }

    #[test]
    fn test_load_non_array_degrades_to_empty() {
        let (catalog, categories) = load_catalog(r#"{"name":"Red Mug"}"#);
        assert!(catalog.is_empty());
        assert_eq!(categories, vec!["All"]);
    }

    #[test]
    fn test_malformed_record_is_skipped() {
        // second record has no `category`
        let raw = r#"[
            {"name":"Red Mug","price":"$9.99","category":"Kitchen","rating":3.0,"link":"https://example.com/p/1"},
            {"name":"Broken","price":"$0.00","rating":1.0,"link":"https://example.com/p/2"},
            {"name":"Laptop","price":"$494.71","category":"Electronics","rating":4.2,"link":"https://example.com/p/3"}
        ]"#;
        let (catalog, categories) = load_catalog(raw);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[1].name, "Laptop");
        assert_eq!(categories, vec!["All", "Kitchen", "Electronics"]);
    }
}
