//! Invoice Panel
//!
//! Number, date and the download/preview actions for an issued
//! invoice. The PDF bytes are fetched fresh for each action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, abort, invoices};
use crate::context::use_app_context;
use crate::format::format_date;
use crate::models::{InvoiceType, Order};
use crate::router::use_router;
use crate::session::{self, use_session};

#[component]
pub fn InvoicePanel(order: Order) -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let router = use_router();

    let (busy, set_busy) = signal(false);

    let abort_key = abort::new_scope();
    on_cleanup(move || abort::cancel_scope(abort_key));

    let order_id = order.id;
    let number = order.invoice_number.clone().unwrap_or_default();
    let date = order.invoice_date.as_deref().map(format_date).unwrap_or_default();
    let kind = order.business_invoice_type;

    let run_action = move |preview: bool| {
        if busy.get() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            let abort_signal = abort::signal_for(abort_key);
            let result = if preview {
                invoices::preview_invoice(order_id, abort_signal.as_ref()).await
            } else {
                invoices::download_invoice(order_id, abort_signal.as_ref()).await
            };
            match result {
                Ok(()) => set_busy.set(false),
                Err(api::ApiError::Aborted) => {}
                Err(e) => {
                    set_busy.set(false);
                    ctx.notify_error(session::handle_api_error(&e, session, router));
                }
            }
        });
    };

    view! {
        <div class="invoice-panel">
            <h3>"فاکتور"</h3>
            <div class="invoice-meta">
                <span>{match kind {
                    InvoiceType::Official => "رسمی",
                    InvoiceType::Unofficial => "غیررسمی",
                }}</span>
                <span>"شماره: " {number}</span>
                <span>"تاریخ: " {date}</span>
            </div>
            <div class="invoice-actions">
                <button type="button" prop:disabled=move || busy.get() on:click=move |_| run_action(false)>
                    "دانلود PDF"
                </button>
                <button type="button" class="secondary" prop:disabled=move || busy.get() on:click=move |_| run_action(true)>
                    "نمایش"
                </button>
            </div>
        </div>
    }
}
