use crate::catalog::state::CatalogContext;
use crate::catalog::ui::CatalogPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the catalog state to the whole app via context.
    // The catalog is loaded exactly once here, before anything renders.
    provide_context(CatalogContext::new());

    view! {
        <CatalogPage />
    }
}
