//! Order Detail Page
//!
//! One order, composed by status and role. The page never advances the
//! workflow itself: forms post their mutation, then the shared orders
//! version is bumped and the order is re-fetched, so what is rendered
//! always reflects what the backend last said.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, abort, orders};
use crate::components::{
    ApprovalForm, InvoicePanel, OrderItemsTable, PricingForm, ReceiptUploadModal, ReceiptsList,
    StatusBadge,
};
use crate::context::use_app_context;
use crate::format::{format_date, format_price};
use crate::models::Order;
use crate::router::use_router;
use crate::session::{self, use_session};

#[component]
pub fn OrderDetailPage(order_id: u32) -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let ctx = use_app_context();

    let (order, set_order) = signal(None::<Order>);
    let (error, set_error) = signal(None::<String>);
    let (upload_open, set_upload_open) = signal(false);

    let abort_key = abort::new_scope();
    on_cleanup(move || abort::cancel_scope(abort_key));

    let load = move || {
        spawn_local(async move {
            let abort_signal = abort::signal_for(abort_key);
            match orders::get_order(order_id, abort_signal.as_ref()).await {
                Ok(o) => {
                    set_order.set(Some(o));
                    set_error.set(None);
                }
                Err(api::ApiError::Aborted) => {}
                Err(e) => set_error.set(Some(session::handle_api_error(&e, session, router))),
            }
        });
    };

    // Initial load plus re-fetch after every mutation anywhere in the app
    Effect::new(move |_| {
        ctx.orders_version.get();
        load();
    });

    let on_priced = Callback::new(move |()| {
        ctx.notify_success("قیمت‌گذاری ثبت شد و برای مشتری ارسال گردید.");
        ctx.refresh_orders();
    });
    let on_decided = Callback::new(move |()| {
        ctx.notify_success("تصمیم شما ثبت شد.");
        ctx.refresh_orders();
    });
    let on_uploaded = Callback::new(move |()| {
        ctx.notify_success("رسید پرداخت ارسال شد.");
        ctx.refresh_orders();
    });
    let close_upload = Callback::new(move |()| set_upload_open.set(false));

    view! {
        <div class="order-detail-page">
            {move || error.get().map(|e| view! { <div class="error-banner"><div>{e}</div></div> })}

            {move || match order.get() {
                None => view! { <p class="muted">"در حال بارگذاری..."</p> }.into_any(),
                Some(o) => {
                    let staff = session::is_staff(&session);
                    let dealer = session::is_dealer(&session);
                    let customer = !staff && !dealer;

                    let id = o.id;
                    let status = o.status.clone();
                    let created = format_date(&o.created_at);
                    let invoice_label = o.business_invoice_type.label();
                    let customer_name = o.customer_name.clone();
                    let customer_comment = o.customer_comment.clone();
                    let admin_comment = o.admin_comment.clone();
                    let items = o.items.clone();

                    let can_price = staff && status.can_submit_pricing();
                    let can_decide = customer && status.can_decide_approval();
                    let can_upload = customer && status.can_upload_receipt();
                    let show_receipts =
                        o.has_payment_receipts || status.can_upload_receipt() || staff;

                    let pricing_meta = o.quoted_total.map(|total| {
                        let by = o.priced_by_name.clone().unwrap_or_default();
                        let on = o.pricing_date.as_deref().map(format_date).unwrap_or_default();
                        format!(
                            "جمع کل: {} (قیمت‌گذاری توسط {} در {})",
                            format_price(total),
                            by,
                            on
                        )
                    });
                    let pricing_order = can_price.then(|| o.clone());
                    let invoice_order = o.has_invoice().then(|| o.clone());
                    let dealer_block = staff
                        .then(|| o.assigned_dealer_name.clone())
                        .flatten()
                        .map(|name| {
                            let notes = o
                                .dealer_notes
                                .clone()
                                .filter(|n| !n.trim().is_empty());
                            (name, notes)
                        });

                    view! {
                        <div class="order-detail">
                            <div class="page-header">
                                <h2>{format!("سفارش #{id}")}</h2>
                                <StatusBadge status=status />
                            </div>
                            <div class="order-meta muted">
                                <span>{format!("تاریخ ثبت: {created}")}</span>
                                <span>{invoice_label}</span>
                                {customer_name.map(|name| {
                                    view! { <span>{format!("مشتری: {name}")}</span> }
                                })}
                            </div>

                            {customer_comment.map(|text| view! {
                                <div class="comment-block">
                                    <h4>"توضیحات مشتری"</h4>
                                    <p>{text}</p>
                                </div>
                            })}
                            {admin_comment.map(|text| view! {
                                <div class="comment-block admin">
                                    <h4>"توضیح کارشناس فروش"</h4>
                                    <p>{text}</p>
                                </div>
                            })}

                            <OrderItemsTable items=items />

                            {pricing_meta.map(|line| view! { <p class="pricing-meta">{line}</p> })}

                            {pricing_order.map(|ord| view! {
                                <PricingForm order=ord on_saved=on_priced />
                            })}

                            {can_decide.then(|| view! {
                                <ApprovalForm order_id=id on_decided=on_decided />
                            })}

                            {can_upload.then(|| view! {
                                <div class="upload-cta">
                                    <button type="button" on:click=move |_| set_upload_open.set(true)>
                                        "ارسال رسید پرداخت"
                                    </button>
                                </div>
                            })}

                            {invoice_order.map(|ord| view! { <InvoicePanel order=ord /> })}

                            {show_receipts.then(|| view! {
                                <ReceiptsList order_id=id can_delete=can_upload />
                            })}

                            {dealer_block.map(|(name, notes)| view! {
                                <div class="dealer-block">
                                    <h4>"نماینده فروش"</h4>
                                    <p>{name}</p>
                                    {notes.map(|n| view! { <p class="muted">{n}</p> })}
                                </div>
                            })}
                        </div>
                    }
                    .into_any()
                }
            }}

            <ReceiptUploadModal
                order_id=order_id
                open=upload_open
                on_close=close_upload
                on_uploaded=on_uploaded
            />
        </div>
    }
}
