use crate::catalog::rating::{rating_label, star_glyphs};
use contracts::domain::product::Product;
use leptos::prelude::*;

/// One result card: name, price text, star rating, outbound link.
///
/// The link opens in a new browsing context with rel="noopener noreferrer"
/// so the target can neither reach back into this window nor see where the
/// visitor came from.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let Product {
        name,
        price,
        rating,
        link,
        category: _,
    } = product;

    view! {
        <div class="product-card">
            <h3 class="product-card__name">{name}</h3>
            <p class="product-card__price">{price}</p>
            <div class="product-card__rating">
                <span class="product-card__stars">{star_glyphs(rating)}</span>
                <span class="product-card__rating-label">{rating_label(rating)}</span>
            </div>
            <a
                class="product-card__link"
                href=link
                target="_blank"
                rel="noopener noreferrer"
            >
                "View Product"
            </a>
        </div>
    }
}
