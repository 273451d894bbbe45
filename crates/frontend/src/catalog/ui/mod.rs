pub mod card;

use self::card::ProductCard;
use crate::catalog::filter::filter_products;
use crate::catalog::loader::ALL_CATEGORY;
use crate::catalog::state::CatalogContext;
use crate::shared::components::ui::{Input, Select};
use leptos::prelude::*;

/// Results header line: count plus the active category and/or search term
/// in human-readable form. Grammar is fixed as "products" regardless of N.
pub fn results_summary(count: usize, selected_category: &str, search_term: &str) -> String {
    let mut summary = format!("Showing {} products", count);
    if selected_category != ALL_CATEGORY {
        summary.push_str(&format!(" in {}", selected_category));
    }
    if !search_term.is_empty() {
        summary.push_str(&format!(" matching \"{}\"", search_term));
    }
    summary
}

/// The single page of the application: controls, results header, card grid.
///
/// The filtered view is a `Memo` over (catalog, selected_category,
/// search_term) — every input change recomputes from the full catalog, so
/// relaxing a filter can never leave stale results behind.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let ctx = use_context::<CatalogContext>().expect("CatalogContext not found in context");

    let filtered = Memo::new(move |_| {
        ctx.catalog.with(|catalog| {
            filter_products(
                catalog,
                &ctx.selected_category.get(),
                &ctx.search_term.get(),
            )
        })
    });

    let summary = move || {
        results_summary(
            filtered.with(|f| f.len()),
            &ctx.selected_category.get(),
            &ctx.search_term.get(),
        )
    };

    view! {
        <div class="catalog-page">
            <h1 class="catalog-page__title">"Product Catalog"</h1>

            <div class="catalog-page__controls">
                <Input
                    value=ctx.search_term
                    placeholder="Search products..."
                    on_input=Callback::new(move |term| ctx.set_search_term(term))
                />
                <Select
                    value=ctx.selected_category
                    options=ctx.categories
                    on_change=Callback::new(move |category| ctx.set_category(category))
                />
            </div>

            <p class="catalog-page__summary">{summary}</p>

            {move || {
                if filtered.with(|f| f.is_empty()) {
                    view! {
                        <div class="catalog-page__empty">
                            <p>"No products found matching your criteria"</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="catalog-grid">
                            <For
                                each=move || filtered.get()
                                key=|product| product.link.clone()
                                children=move |product| {
                                    view! { <ProductCard product=product /> }
                                }
                            />
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
