//! Pricing Form (admin)
//!
//! Editable quote for a pending order. Validation runs fully on the
//! client before anything is sent; the backend's own rejection text is
//! shown verbatim if it still refuses.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, abort, orders};
use crate::router::use_router;
use crate::session::{self, use_session};
use crate::components::error_banner::ErrorBanner;
use crate::models::Order;
use crate::validate::{validate_pricing, PricingRowInput};

#[component]
pub fn PricingForm(order: Order, on_saved: Callback<()>) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let initial_rows: Vec<PricingRowInput> = order
        .items
        .iter()
        .map(|item| PricingRowInput {
            item_id: item.id,
            product_name: item.product_name.clone(),
            price: item
                .quoted_unit_price
                .map(|p| p.to_string())
                .unwrap_or_default(),
            quantity: item
                .final_quantity
                .map(|q| q.to_string())
                .unwrap_or_default(),
            notes: item.admin_notes.clone().unwrap_or_default(),
        })
        .collect();

    let rows = RwSignal::new(initial_rows);
    let (comment, set_comment) = signal(order.admin_comment.clone().unwrap_or_default());
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    let order_id = order.id;
    let abort_key = abort::new_scope();
    on_cleanup(move || abort::cancel_scope(abort_key));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let request = match validate_pricing(&rows.get(), &comment.get()) {
            Ok(req) => req,
            Err(msg) => {
                set_error.set(Some(msg));
                return;
            }
        };
        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            let abort_signal = abort::signal_for(abort_key);
            match orders::submit_pricing(order_id, &request, abort_signal.as_ref()).await {
                Ok(()) => {
                    set_saving.set(false);
                    on_saved.run(());
                }
                Err(api::ApiError::Aborted) => {}
                Err(e) => {
                    set_saving.set(false);
                    set_error.set(Some(session::handle_api_error(&e, session, router)));
                }
            }
        });
    };

    view! {
        <form class="pricing-form" on:submit=submit>
            <h3>"قیمت‌گذاری سفارش"</h3>
            <table class="items-table">
                <thead>
                    <tr>
                        <th>"کالا"</th>
                        <th>"تعداد درخواستی"</th>
                        <th>"قیمت واحد (تومان)"</th>
                        <th>"مقدار نهایی"</th>
                        <th>"یادداشت"</th>
                    </tr>
                </thead>
                <tbody>
                    {order.items.iter().enumerate().map(|(idx, item)| {
                        let requested = item.requested_quantity;
                        let name = item.product_name.clone();
                        view! {
                            <tr>
                                <td>{name}</td>
                                <td>{requested}</td>
                                <td>
                                    <input
                                        type="text"
                                        inputmode="decimal"
                                        prop:value=move || rows.with(|r| r[idx].price.clone())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            rows.update(|r| r[idx].price = value);
                                        }
                                    />
                                </td>
                                <td>
                                    <input
                                        type="text"
                                        inputmode="numeric"
                                        prop:value=move || rows.with(|r| r[idx].quantity.clone())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            rows.update(|r| r[idx].quantity = value);
                                        }
                                    />
                                </td>
                                <td>
                                    <input
                                        type="text"
                                        prop:value=move || rows.with(|r| r[idx].notes.clone())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            rows.update(|r| r[idx].notes = value);
                                        }
                                    />
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            <label class="form-label">"توضیح برای مشتری"</label>
            <textarea
                prop:value=move || comment.get()
                on:input=move |ev| set_comment.set(event_target_value(&ev))
            ></textarea>

            <ErrorBanner error=error />

            <button type="submit" prop:disabled=move || saving.get()>
                {move || if saving.get() { "در حال ثبت..." } else { "ثبت قیمت‌گذاری" }}
            </button>
        </form>
    }
}
