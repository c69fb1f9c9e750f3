//! Admin Order Queue
//!
//! Staff view over every order, narrowed by workflow status and free
//! text search. Rows open the same detail page customers see; what the
//! admin may do there is decided by the order's status, not by this
//! list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, abort, orders};
use crate::components::StatusBadge;
use crate::context::use_app_context;
use crate::format::{format_date, format_price};
use crate::models::{Order, OrderStatus};
use crate::router::{use_router, Route};
use crate::session::{self, use_session};

fn filter_options() -> [OrderStatus; 7] {
    [
        OrderStatus::PendingPricing,
        OrderStatus::WaitingCustomerApproval,
        OrderStatus::Confirmed,
        OrderStatus::PaymentUploaded,
        OrderStatus::Completed,
        OrderStatus::Rejected,
        OrderStatus::Cancelled,
    ]
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let ctx = use_app_context();

    let (status_filter, set_status_filter) = signal(String::new());
    let (search, set_search) = signal(String::new());
    let (order_list, set_order_list) = signal(Vec::<Order>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let abort_key = abort::new_scope();
    on_cleanup(move || abort::cancel_scope(abort_key));

    let load = move || {
        let status_value = status_filter.get_untracked();
        let search_value = search.get_untracked();
        set_loading.set(true);
        spawn_local(async move {
            let abort_signal = abort::signal_for(abort_key);
            let status = (!status_value.is_empty()).then_some(status_value);
            let result =
                orders::list_orders(status.as_deref(), &search_value, abort_signal.as_ref()).await;
            match result {
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

    // Status changes reload immediately; search waits for the form submit
    Effect::new(move |_| {
        ctx.orders_version.get();
        status_filter.get();
        load();
    });

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        load();
    };

    view! {
        <div class="admin-page">
            <h2>"مدیریت سفارش‌ها"</h2>

            <form class="filter-bar" on:submit=on_search>
                <select
                    prop:value=move || status_filter.get()
                    on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                >
                    <option value="">"همه وضعیت‌ها"</option>
                    {filter_options()
                        .iter()
                        .map(|s| {
                            view! {
                                <option value=s.as_str().to_string()>{s.label().to_string()}</option>
                            }
                        })
                        .collect_view()}
                </select>
                <input
                    type="search"
                    placeholder="جستجو بر اساس مشتری یا شماره سفارش..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <button type="submit">"جستجو"</button>
            </form>

            {move || error.get().map(|e| view! { <div class="error-banner"><div>{e}</div></div> })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="muted">"در حال بارگذاری..."</p> }
            >
                <Show
                    when=move || !order_list.get().is_empty()
                    fallback=|| view! { <p class="muted">"سفارشی مطابق فیلتر پیدا نشد."</p> }
                >
                    <table class="orders-table">
                        <thead>
                            <tr>
                                <th>"شماره"</th>
                                <th>"مشتری"</th>
                                <th>"تاریخ ثبت"</th>
                                <th>"مبلغ"</th>
                                <th>"قیمت‌گذار"</th>
                                <th>"وضعیت"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || order_list.get()
                                key=|o| (o.id, o.status.clone())
                                children=move |order| {
                                    let id = order.id;
                                    let customer = order
                                        .customer_name
                                        .clone()
                                        .unwrap_or_else(|| "—".to_string());
                                    let total = order
                                        .quoted_total
                                        .map(format_price)
                                        .unwrap_or_else(|| "—".to_string());
                                    let priced_by = order
                                        .priced_by_name
                                        .clone()
                                        .unwrap_or_else(|| "—".to_string());
                                    view! {
                                        <tr on:click=move |_| router.navigate(Route::OrderDetail(id))>
                                            <td>{format!("#{id}")}</td>
                                            <td>{customer}</td>
                                            <td>{format_date(&order.created_at)}</td>
                                            <td>{total}</td>
                                            <td>{priced_by}</td>
                                            <td><StatusBadge status=order.status.clone() /></td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}
