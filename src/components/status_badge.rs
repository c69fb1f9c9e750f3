//! Order Status Badge

use leptos::prelude::*;

use crate::models::OrderStatus;

/// Colored pill showing the workflow state
#[component]
pub fn StatusBadge(status: OrderStatus) -> impl IntoView {
    let label = status.label().to_string();
    let class = format!("status-badge {}", status.color_class());
    view! {
        <span class=class>{label}</span>
    }
}
