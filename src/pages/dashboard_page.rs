//! Customer Dashboard
//!
//! The signed-in user's orders with live status. The list re-fetches
//! after every order mutation and polls on a timer so status changes
//! made by the office show up without a manual reload.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, abort, orders};
use crate::components::StatusBadge;
use crate::context::use_app_context;
use crate::format::{format_date, format_price};
use crate::models::Order;
use crate::poll;
use crate::router::{use_router, Route};
use crate::session::{self, use_session};

const ORDERS_POLL_MS: u32 = 30_000;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let ctx = use_app_context();

    let (order_list, set_order_list) = signal(Vec::<Order>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let abort_key = abort::new_scope();

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

    // Initial load, then again after every order mutation
    Effect::new(move |_| {
        ctx.orders_version.get();
        load();
    });

    let poll_handle = poll::start(ORDERS_POLL_MS, move || load());
    on_cleanup(move || {
        poll_handle.cancel();
        abort::cancel_scope(abort_key);
    });

    view! {
        <div class="dashboard-page">
            <div class="page-header">
                <h2>"سفارش‌های من"</h2>
                <button type="button" on:click=move |_| router.navigate(Route::OrderCreate)>
                    "ثبت سفارش جدید"
                </button>
            </div>

            {move || error.get().map(|e| view! { <div class="error-banner"><div>{e}</div></div> })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="muted">"در حال بارگذاری..."</p> }
            >
                <Show
                    when=move || !order_list.get().is_empty()
                    fallback=move || {
                        view! {
                            <div class="empty-state">
                                <p>"هنوز سفارشی ثبت نکرده‌اید."</p>
                                <button type="button" on:click=move |_| router.navigate(Route::OrderCreate)>
                                    "اولین سفارش را ثبت کنید"
                                </button>
                            </div>
                        }
                    }
                >
                    <table class="orders-table">
                        <thead>
                            <tr>
                                <th>"شماره"</th>
                                <th>"تاریخ ثبت"</th>
                                <th>"مبلغ"</th>
                                <th>"وضعیت"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || order_list.get()
                                key=|o| (o.id, o.status.clone())
                                children=move |order| {
                                    let id = order.id;
                                    let needs_decision = order.status.can_decide_approval();
                                    let total = order
                                        .quoted_total
                                        .map(format_price)
                                        .unwrap_or_else(|| "—".to_string());
                                    view! {
                                        <tr
                                            class:attention=needs_decision
                                            on:click=move |_| router.navigate(Route::OrderDetail(id))
                                        >
                                            <td>{format!("#{id}")}</td>
                                            <td>{format_date(&order.created_at)}</td>
                                            <td>{total}</td>
                                            <td><StatusBadge status=order.status.clone() /></td>
                                            <td>
                                                <Show when=move || needs_decision>
                                                    <span class="attention-hint">"منتظر تأیید شما"</span>
                                                </Show>
                                            </td>
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
