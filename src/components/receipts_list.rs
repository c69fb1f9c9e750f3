//! Uploaded Receipts List
//!
//! Shows what the backend has stored for an order, with per-file
//! delete. Reloads whenever the shared orders version bumps, so an
//! upload from the modal is reflected without wiring.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, abort, receipts};
use crate::components::error_banner::ErrorBanner;
use crate::context::use_app_context;
use crate::format::{format_date, format_file_size};
use crate::models::PaymentReceipt;
use crate::router::use_router;
use crate::session::{self, use_session};

#[component]
pub fn ReceiptsList(order_id: u32, can_delete: bool) -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let router = use_router();

    let (items, set_items) = signal(Vec::<PaymentReceipt>::new());
    let (error, set_error) = signal(None::<String>);
    let (local_version, set_local_version) = signal(0u32);

    let abort_key = abort::new_scope();
    on_cleanup(move || abort::cancel_scope(abort_key));

    let load = move || {
        spawn_local(async move {
            let abort_signal = abort::signal_for(abort_key);
            match receipts::list_receipts(order_id, abort_signal.as_ref()).await {
                Ok(list) => {
                    set_items.set(list);
                    set_error.set(None);
                }
                Err(api::ApiError::Aborted) => {}
                Err(e) => set_error.set(Some(session::handle_api_error(&e, session, router))),
            }
        });
    };

    Effect::new(move |_| {
        ctx.orders_version.get();
        local_version.get();
        load();
    });

    let delete = move |receipt_id: u32| {
        spawn_local(async move {
            let abort_signal = abort::signal_for(abort_key);
            match receipts::delete_receipt(order_id, receipt_id, abort_signal.as_ref()).await {
                Ok(()) => set_local_version.update(|v| *v += 1),
                Err(api::ApiError::Aborted) => {}
                Err(e) => set_error.set(Some(session::handle_api_error(&e, session, router))),
            }
        });
    };

    view! {
        <div class="receipts-list">
            <h3>"رسیدهای پرداخت"</h3>
            <ErrorBanner error=error />
            <Show
                when=move || !items.get().is_empty()
                fallback=|| view! { <p class="muted">"هنوز رسیدی ارسال نشده است."</p> }
            >
                <For
                    each=move || items.get()
                    key=|r| r.id
                    children=move |receipt| {
                        let id = receipt.id;
                        let link = receipt.best_url().map(|u| u.to_string());
                        let name = receipt.file_name.clone();
                        let meta = format!(
                            "{} · {}",
                            format_file_size(receipt.file_size),
                            format_date(&receipt.uploaded_at)
                        );
                        let verified = receipt.is_verified;
                        view! {
                            <div class="receipt-row">
                                {match link {
                                    Some(url) => view! {
                                        <a href=url target="_blank" rel="noopener">{name}</a>
                                    }.into_any(),
                                    None => view! { <span>{name}</span> }.into_any(),
                                }}
                                <span class="muted">{meta}</span>
                                <Show when=move || verified>
                                    <span class="verified-badge">"تأیید شده"</span>
                                </Show>
                                <Show when=move || can_delete && !verified>
                                    <button type="button" class="remove-btn" on:click=move |_| delete(id)>
                                        "حذف"
                                    </button>
                                </Show>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}
