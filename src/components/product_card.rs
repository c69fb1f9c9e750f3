//! Product Card

use leptos::prelude::*;

use crate::models::Product;

/// Catalog grid tile. When `on_add` is given (order draft picker) an
/// add button appears; unavailable products lose it.
#[component]
pub fn ProductCard(
    product: Product,
    #[prop(optional, into)] on_add: Option<Callback<Product>>,
) -> impl IntoView {
    let image = product.display_image().map(|u| u.to_string());
    let name = product.name.clone();
    let category = product.category.clone();
    let available = product.available;

    view! {
        <div class="product-card" class:unavailable=move || !available>
            {match image {
                Some(url) => view! {
                    <img class="product-image" src=url loading="lazy" />
                }.into_any(),
                None => view! {
                    <div class="product-image placeholder">"بدون تصویر"</div>
                }.into_any(),
            }}
            <div class="product-name">{name}</div>
            {category.map(|c| view! { <div class="product-category muted">{c}</div> })}
            <Show when=move || !available>
                <div class="product-unavailable">"ناموجود"</div>
            </Show>
            {on_add.filter(|_| available).map(|cb| {
                let product = product.clone();
                view! {
                    <button
                        type="button"
                        class="add-btn"
                        on:click=move |_| cb.run(product.clone())
                    >
                        "افزودن به سفارش"
                    </button>
                }
            })}
        </div>
    }
}
