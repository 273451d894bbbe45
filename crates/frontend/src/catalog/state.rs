use crate::catalog::loader::{load_catalog, ALL_CATEGORY};
use contracts::domain::product::Product;
use leptos::prelude::*;

/// Dataset produced by the external scraping pipeline, embedded at build
/// time. The core never fetches anything.
const PRODUCT_DATA: &str = include_str!("../../data/product_data.json");

/// Session-scoped catalog state, provided via context from `App`.
///
/// The catalog and category list are written exactly once, at load.
/// Filter state has exactly two mutators: `set_category` and
/// `set_search_term` — nothing else may touch it.
#[derive(Clone, Copy)]
pub struct CatalogContext {
    pub catalog: RwSignal<Vec<Product>>,
    pub categories: RwSignal<Vec<String>>,
    pub selected_category: RwSignal<String>,
    pub search_term: RwSignal<String>,
}

impl CatalogContext {
    pub fn new() -> Self {
        let (catalog, categories) = load_catalog(PRODUCT_DATA);
        log::info!(
            "Catalog loaded: {} products, {} categories",
            catalog.len(),
            categories.len() - 1
        );

        Self {
            catalog: RwSignal::new(catalog),
            categories: RwSignal::new(categories),
            selected_category: RwSignal::new(ALL_CATEGORY.to_string()),
            search_term: RwSignal::new(String::new()),
        }
    }

    pub fn set_category(&self, category: String) {
        self.selected_category.set(category);
    }

    pub fn set_search_term(&self, term: String) {
        self.search_term.set(term);
    }
}

impl Default for CatalogContext {
    fn default() -> Self {
        Self::new()
    }
}
