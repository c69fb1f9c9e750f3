//! Dealer Panel
//!
//! Orders assigned to the signed-in dealer, with the commission the
//! backend computed for each and a free-text notes field the dealer
//! can keep per order. Notes are the only thing a dealer may change.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, abort, orders};
use crate::components::StatusBadge;
use crate::context::use_app_context;
use crate::format::{format_date, format_price};
use crate::models::Order;
use crate::router::{use_router, Route};
use crate::session::{self, use_session};

#[component]
pub fn DealerPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let ctx = use_app_context();

    let (order_list, set_order_list) = signal(Vec::<Order>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let abort_key = abort::new_scope();
    on_cleanup(move || abort::cancel_scope(abort_key));

    let load = move || {
        spawn_local(async move {
            let abort_signal = abort::signal_for(abort_key);
            match orders::list_orders(None, "", abort_signal.as_ref()).await {
                Ok(list) => {
                    set_order_list.set(list);
                    set_error.set(None);
                    set_loading.set(false);
                }
                Err(api::ApiError::Aborted) => {}
                Err(e) => {
                    set_error.set(Some(session::handle_api_error(&e, session, router)));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        ctx.orders_version.get();
        load();
    });

    view! {
        <div class="dealer-page">
            <h2>"پنل نماینده فروش"</h2>

            {move || error.get().map(|e| view! { <div class="error-banner"><div>{e}</div></div> })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="muted">"در حال بارگذاری..."</p> }
            >
                <Show
                    when=move || !order_list.get().is_empty()
                    fallback=|| view! { <p class="muted">"هنوز سفارشی به شما تخصیص داده نشده است."</p> }
                >
                    <div class="dealer-orders">
                        <For
                            each=move || order_list.get()
                            key=|o| (o.id, o.status.clone())
                            children=move |order| view! { <DealerOrderCard order=order /> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}

/// One assigned order with its commission line and editable notes.
#[component]
fn DealerOrderCard(order: Order) -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let ctx = use_app_context();

    let order_id = order.id;
    let (notes, set_notes) = signal(order.dealer_notes.clone().unwrap_or_default());
    let (saving, set_saving) = signal(false);

    let abort_key = abort::new_scope();
    on_cleanup(move || abort::cancel_scope(abort_key));

    let save = move || {
        if saving.get_untracked() {
            return;
        }
        set_saving.set(true);
        spawn_local(async move {
            let abort_signal = abort::signal_for(abort_key);
            let text = notes.get_untracked();
            match orders::update_dealer_notes(order_id, &text, abort_signal.as_ref()).await {
                Ok(()) => {
                    set_saving.set(false);
                    ctx.notify_success("یادداشت ذخیره شد.");
                    ctx.refresh_orders();
                }
                Err(api::ApiError::Aborted) => {}
                Err(e) => {
                    set_saving.set(false);
                    ctx.notify_error(session::handle_api_error(&e, session, router));
                }
            }
        });
    };

    let customer = order.customer_name.clone().unwrap_or_else(|| "—".to_string());
    let total = order
        .quoted_total
        .map(format_price)
        .unwrap_or_else(|| "—".to_string());
    let commission_rate = order
        .effective_commission_rate
        .map(|r| format!("{r}٪"))
        .unwrap_or_else(|| "—".to_string());
    let commission_amount = order
        .dealer_commission_amount
        .map(format_price)
        .unwrap_or_else(|| "—".to_string());

    view! {
        <div class="dealer-order-card">
            <div class="card-header">
                <a href=Route::OrderDetail(order_id).to_hash()>
                    {format!("سفارش #{order_id}")}
                </a>
                <StatusBadge status=order.status.clone() />
            </div>
            <div class="card-meta muted">
                <span>{format!("مشتری: {customer}")}</span>
                <span>{format!("تاریخ: {}", format_date(&order.created_at))}</span>
                <span>{format!("مبلغ: {total}")}</span>
            </div>
            <div class="commission-line">
                <span>{format!("نرخ کمیسیون: {commission_rate}")}</span>
                <span>{format!("مبلغ کمیسیون: {commission_amount}")}</span>
            </div>
            <div class="notes-row">
                <textarea
                    placeholder="یادداشت شما برای این سفارش..."
                    prop:value=move || notes.get()
                    on:input=move |ev| set_notes.set(event_target_value(&ev))
                ></textarea>
                <button type="button" prop:disabled=move || saving.get() on:click=move |_| save()>
                    {move || if saving.get() { "در حال ذخیره..." } else { "ذخیره یادداشت" }}
                </button>
            </div>
        </div>
    }
}
