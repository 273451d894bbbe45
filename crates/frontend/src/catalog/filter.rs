use crate::catalog::loader::ALL_CATEGORY;
use contracts::domain::product::Product;

/// Pure derived-view function: (catalog, category, search term) → filtered
/// catalog.
///
/// Both predicates are conjunctive and order-preserving: the result is a
/// subsequence of `catalog`, never re-sorted. Category match is exact and
/// case-sensitive ("All" disables it). Name match is a case-insensitive
/// substring check; the term is NOT trimmed, leading/trailing whitespace
/// must match literally.
pub fn filter_products(
    catalog: &[Product],
    selected_category: &str,
    search_term: &str,
) -> Vec<Product> {
    let term = search_term.to_lowercase();

    catalog
        .iter()
        .filter(|p| selected_category == ALL_CATEGORY || p.category == selected_category)
        .filter(|p| term.is_empty() || p.name.to_lowercase().contains(&term))
        .cloned()
        .collect()
}
