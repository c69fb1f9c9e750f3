//! Order Creation Page
//!
//! Draft builder: pick products from an embedded catalog pane, set the
//! requested quantities, choose the invoice type and submit. Prices are
//! never entered here; the office quotes them after submission.
//!
//! Choosing an official invoice folds out the billing profile form. The
//! profile must be complete and is saved before the order goes out, so
//! the invoice is issued against the data on screen.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_paginate::{create_pager, make_on_scroll};

use crate::api::{self, abort, customers, orders, products};
use crate::components::{BillingInfoFields, ProductCard};
use crate::context::use_app_context;
use crate::models::{CustomerInfo, InvoiceType, Product};
use crate::router::{use_router, Route};
use crate::session::{self, use_session};
use crate::validate::{self, DraftItem};

const PICKER_PAGE_SIZE: u32 = 12;

#[component]
pub fn OrderCreatePage() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let ctx = use_app_context();

    let (drafts, set_drafts) = signal(Vec::<DraftItem>::new());
    let (comment, set_comment) = signal(String::new());
    let (invoice_type, set_invoice_type) = signal(InvoiceType::Unofficial);
    let (info, set_info) = signal(CustomerInfo::default());
    let (info_loaded, set_info_loaded) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    // Picker pane state
    let (search, set_search) = signal(String::new());
    let (picker_items, set_picker_items) = signal(Vec::<Product>::new());
    let pager = create_pager(PICKER_PAGE_SIZE);

    let abort_key = abort::new_scope();
    on_cleanup(move || abort::cancel_scope(abort_key));

    let load_more = move || {
        let Some(request) = pager.try_update(|p| p.try_begin()).flatten() else {
            return;
        };
        let search_value = search.get_untracked();
        spawn_local(async move {
            let abort_signal = abort::signal_for(abort_key);
            let result = products::list_products(
                &search_value,
                None,
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
                        set_picker_items.update(|v| v.extend(page));
                    }
                }
                Err(api::ApiError::Aborted) => {}
                Err(_) => {
                    pager.try_update(|p| p.fail(&request));
                }
            }
        });
    };

    Effect::new(move |_| {
        search.get();
        pager.update(|p| p.reset());
        set_picker_items.set(Vec::new());
        load_more();
    });

    // Billing profile is fetched the first time an official invoice is chosen
    Effect::new(move |_| {
        if invoice_type.get() != InvoiceType::Official || info_loaded.get_untracked() {
            return;
        }
        set_info_loaded.set(true);
        spawn_local(async move {
            let abort_signal = abort::signal_for(abort_key);
            match customers::get_invoice_info(abort_signal.as_ref()).await {
                Ok(profile) => set_info.set(profile),
                Err(api::ApiError::Aborted) => {}
                Err(e) => {
                    set_error.set(Some(session::handle_api_error(&e, session, router)));
                }
            }
        });
    });

    let add_product = move |product: Product| {
        let already = drafts.with_untracked(|v| v.iter().any(|d| d.product.id == product.id));
        if already {
            ctx.notify_error("این کالا قبلاً به سفارش اضافه شده است.");
            return;
        }
        set_drafts.update(|v| {
            v.push(DraftItem {
                product,
                quantity: "1".to_string(),
                notes: String::new(),
            });
        });
    };

    let set_quantity = move |product_id: u32, value: String| {
        set_drafts.update(|v| {
            if let Some(d) = v.iter_mut().find(|d| d.product.id == product_id) {
                d.quantity = value;
            }
        });
    };
    let set_notes = move |product_id: u32, value: String| {
        set_drafts.update(|v| {
            if let Some(d) = v.iter_mut().find(|d| d.product.id == product_id) {
                d.notes = value;
            }
        });
    };
    let remove_draft = move |product_id: u32| {
        set_drafts.update(|v| v.retain(|d| d.product.id != product_id));
    };

    let submit = move || {
        if submitting.get_untracked() {
            return;
        }
        let request = match validate::validate_draft(
            &drafts.get_untracked(),
            &comment.get_untracked(),
            invoice_type.get_untracked(),
        ) {
            Ok(r) => r,
            Err(msg) => {
                set_error.set(Some(msg));
                return;
            }
        };
        let official = invoice_type.get_untracked() == InvoiceType::Official;
        if official {
            let missing = info.get_untracked().missing_fields();
            if !missing.is_empty() {
                set_error.set(Some(validate::official_info_message(&missing)));
                return;
            }
        }
        set_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            let abort_signal = abort::signal_for(abort_key);
            if official {
                let profile = info.get_untracked();
                if let Err(e) =
                    customers::update_invoice_info(&profile, abort_signal.as_ref()).await
                {
                    match e {
                        api::ApiError::Aborted => {}
                        e => {
                            set_error.set(Some(session::handle_api_error(&e, session, router)));
                            set_submitting.set(false);
                        }
                    }
                    return;
                }
            }
            match orders::create_order(&request, abort_signal.as_ref()).await {
                Ok(order) => {
                    ctx.refresh_orders();
                    ctx.notify_success("سفارش شما ثبت شد و در انتظار قیمت‌گذاری است.");
                    router.navigate(Route::OrderDetail(order.id));
                }
                Err(api::ApiError::Aborted) => {}
                Err(e) => {
                    set_error.set(Some(session::handle_api_error(&e, session, router)));
                    set_submitting.set(false);
                }
            }
        });
    };

    let picker_loading = move || pager.with(|p| p.in_flight());

    view! {
        <div class="order-create-page">
            <h2>"ثبت سفارش جدید"</h2>
            <p class="muted">
                "اقلام مورد نیاز را انتخاب کنید؛ پس از ثبت، قیمت‌ها توسط کارشناسان اعلام می‌شود."
            </p>

            <div class="order-create-layout">
                <div class="draft-pane">
                    <h3>"اقلام سفارش"</h3>
                    <Show
                        when=move || !drafts.get().is_empty()
                        fallback=|| view! { <p class="muted">"هنوز کالایی انتخاب نشده است."</p> }
                    >
                        <table class="items-table">
                            <thead>
                                <tr>
                                    <th>"کالا"</th>
                                    <th>"تعداد"</th>
                                    <th>"توضیحات قلم"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || drafts.get()
                                    key=|d| d.product.id
                                    children=move |draft| {
                                        let product_id = draft.product.id;
                                        view! {
                                            <tr>
                                                <td>{draft.product.name.clone()}</td>
                                                <td>
                                                    <input
                                                        type="number"
                                                        min="1"
                                                        class="quantity-input"
                                                        prop:value=draft.quantity.clone()
                                                        on:input=move |ev| {
                                                            set_quantity(product_id, event_target_value(&ev))
                                                        }
                                                    />
                                                </td>
                                                <td>
                                                    <input
                                                        type="text"
                                                        placeholder="اختیاری"
                                                        prop:value=draft.notes.clone()
                                                        on:input=move |ev| {
                                                            set_notes(product_id, event_target_value(&ev))
                                                        }
                                                    />
                                                </td>
                                                <td>
                                                    <button
                                                        type="button"
                                                        class="remove-btn"
                                                        on:click=move |_| remove_draft(product_id)
                                                    >
                                                        "حذف"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </Show>

                    <label class="field">
                        <span>"توضیحات سفارش"</span>
                        <textarea
                            placeholder="توضیحات کلی برای کارشناس فروش (اختیاری)"
                            prop:value=move || comment.get()
                            on:input=move |ev| set_comment.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <div class="invoice-type-choice">
                        <span>"نوع فاکتور:"</span>
                        <label>
                            <input
                                type="radio"
                                name="invoice-type"
                                prop:checked=move || invoice_type.get() == InvoiceType::Unofficial
                                on:change=move |_| set_invoice_type.set(InvoiceType::Unofficial)
                            />
                            {InvoiceType::Unofficial.label()}
                        </label>
                        <label>
                            <input
                                type="radio"
                                name="invoice-type"
                                prop:checked=move || invoice_type.get() == InvoiceType::Official
                                on:change=move |_| set_invoice_type.set(InvoiceType::Official)
                            />
                            {InvoiceType::Official.label()}
                        </label>
                    </div>

                    <Show when=move || invoice_type.get() == InvoiceType::Official>
                        <div class="billing-form">
                            <h4>"اطلاعات فاکتور رسمی"</h4>
                            <p class="muted">"برای صدور فاکتور رسمی، همه فیلدها الزامی است."</p>
                            <BillingInfoFields info=info set_info=set_info />
                        </div>
                    </Show>

                    {move || error.get().map(|e| view! { <div class="error-banner"><div>{e}</div></div> })}

                    <button
                        type="button"
                        class="submit-btn"
                        prop:disabled=move || submitting.get()
                        on:click=move |_| submit()
                    >
                        {move || if submitting.get() { "در حال ثبت..." } else { "ثبت سفارش" }}
                    </button>
                </div>

                <div class="picker-pane">
                    <h3>"انتخاب کالا"</h3>
                    <input
                        type="search"
                        placeholder="جستجوی کالا..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <div class="picker-scroll" on:scroll=make_on_scroll(load_more)>
                        <div class="product-grid compact">
                            <For
                                each=move || picker_items.get()
                                key=|p| p.id
                                children=move |product| {
                                    view! {
                                        <ProductCard
                                            product=product
                                            on_add=Callback::new(add_product)
                                        />
                                    }
                                }
                            />
                        </div>
                        <Show when=picker_loading>
                            <p class="muted">"در حال بارگذاری..."</p>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
