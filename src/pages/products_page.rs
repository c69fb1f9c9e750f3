//! Catalog Page
//!
//! Searchable, filterable grid over the whole catalog with infinite
//! scroll. Changing a filter resets the cursor and clears the grid
//! before page 1 of the new result set is fetched.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_paginate::{create_pager, make_on_scroll};

use crate::api::{self, abort, products};
use crate::components::ProductCard;
use crate::models::{Category, Product};

const PAGE_SIZE: u32 = 24;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal(None::<u32>);
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (items, set_items) = signal(Vec::<Product>::new());
    let (error, set_error) = signal(None::<String>);

    let pager = create_pager(PAGE_SIZE);

    let abort_key = abort::new_scope();
    on_cleanup(move || abort::cancel_scope(abort_key));

    let load_more = move || {
        let Some(request) = pager.try_update(|p| p.try_begin()).flatten() else {
            return;
        };
        let search_value = search.get_untracked();
        let category_value = category.get_untracked();
        spawn_local(async move {
            let abort_signal = abort::signal_for(abort_key);
            let result = products::list_products(
                &search_value,
                category_value,
                request.limit,
                request.offset,
                abort_signal.as_ref(),
            )
            .await;
            match result {
                Ok(page) => {
                    let fresh = pager
                        .try_update(|p| p.complete(&request, page.len()))
                        .unwrap_or(false);
                    if fresh {
                        set_error.set(None);
                        set_items.update(|v| v.extend(page));
                    }
                }
                Err(api::ApiError::Aborted) => {}
                Err(e) => {
                    let fresh = pager
                        .try_update(|p| p.fail(&request))
                        .unwrap_or(false);
                    if fresh {
                        set_error.set(Some(e.user_message()));
                    }
                }
            }
        });
    };

    // Categories load once
    Effect::new(move |_| {
        spawn_local(async move {
            let abort_signal = abort::signal_for(abort_key);
            match products::list_categories(abort_signal.as_ref()).await {
                Ok(list) => set_categories.set(list),
                Err(_) => {}
            }
        });
    });

    // Any filter change restarts from a clean page 1
    Effect::new(move |_| {
        search.get();
        category.get();
        pager.update(|p| p.reset());
        set_items.set(Vec::new());
        load_more();
    });

    let loading = move || pager.with(|p| p.in_flight());
    let exhausted = move || pager.with(|p| !p.has_more());

    view! {
        <div class="products-page">
            <div class="filter-bar">
                <input
                    type="search"
                    placeholder="جستجوی کالا..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || {
                        category.get().map(|c| c.to_string()).unwrap_or_default()
                    }
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_category.set(value.parse::<u32>().ok());
                    }
                >
                    <option value="">"همه دسته‌ها"</option>
                    <For
                        each=move || categories.get()
                        key=|c| c.id
                        children=move |c| {
                            view! { <option value=c.id.to_string()>{c.name}</option> }
                        }
                    />
                </select>
            </div>

            {move || error.get().map(|e| view! { <div class="error-banner"><div>{e}</div></div> })}

            <div class="product-scroll" on:scroll=make_on_scroll(load_more)>
                <div class="product-grid">
                    <For
                        each=move || items.get()
                        key=|p| p.id
                        children=move |product| view! { <ProductCard product=product /> }
                    />
                </div>

                <Show when=loading>
                    <p class="muted">"در حال بارگذاری..."</p>
                </Show>
                <Show when=move || !loading() && !exhausted()>
                    <button type="button" class="secondary load-more-btn" on:click=move |_| load_more()>
                        "موارد بیشتر"
                    </button>
                </Show>
                <Show when=move || exhausted() && items.get().is_empty()>
                    <p class="muted">"کالایی مطابق جستجو پیدا نشد."</p>
                </Show>
            </div>
        </div>
    }
}
