//! Order Items Table
//!
//! Read-only view of an order's lines. Quote columns stay empty until
//! the backend has prices for them; nothing is computed here.

use leptos::prelude::*;

use crate::format::format_price;
use crate::models::OrderItem;

#[component]
pub fn OrderItemsTable(items: Vec<OrderItem>) -> impl IntoView {
    view! {
        <table class="items-table">
            <thead>
                <tr>
                    <th>"کالا"</th>
                    <th>"تعداد درخواستی"</th>
                    <th>"توضیح مشتری"</th>
                    <th>"قیمت واحد"</th>
                    <th>"مقدار نهایی"</th>
                    <th>"یادداشت ادمین"</th>
                </tr>
            </thead>
            <tbody>
                {items.into_iter().map(|item| view! {
                    <tr>
                        <td>{item.product_name}</td>
                        <td>{item.requested_quantity}</td>
                        <td class="muted">{item.customer_notes.unwrap_or_default()}</td>
                        <td>{item.quoted_unit_price.map(format_price).unwrap_or_else(|| "—".to_string())}</td>
                        <td>{item.final_quantity.map(|q| q.to_string()).unwrap_or_else(|| "—".to_string())}</td>
                        <td class="muted">{item.admin_notes.unwrap_or_default()}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}
