//! Approval Form (customer)
//!
//! Approve or reject a quoted order. Rejection requires a reason; the
//! choice is validated before any request goes out.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, abort, orders};
use crate::components::error_banner::ErrorBanner;
use crate::router::use_router;
use crate::session::{self, use_session};
use crate::validate::{validate_decision, Decision, DecisionRequest};

#[component]
pub fn ApprovalForm(order_id: u32, on_decided: Callback<()>) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (decision, set_decision) = signal(None::<Decision>);
    let (reason, set_reason) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let abort_key = abort::new_scope();
    on_cleanup(move || abort::cancel_scope(abort_key));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let request = match validate_decision(decision.get(), &reason.get()) {
            Ok(req) => req,
            Err(msg) => {
                set_error.set(Some(msg));
                return;
            }
        };
        set_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            let abort_signal = abort::signal_for(abort_key);
            let result = match &request {
                DecisionRequest::Approve => {
                    orders::approve_order(order_id, abort_signal.as_ref()).await
                }
                DecisionRequest::Reject { reason } => {
                    orders::reject_order(order_id, reason, abort_signal.as_ref()).await
                }
            };
            match result {
                Ok(()) => {
                    set_submitting.set(false);
                    on_decided.run(());
                }
                Err(api::ApiError::Aborted) => {}
                Err(e) => {
                    set_submitting.set(false);
                    set_error.set(Some(session::handle_api_error(&e, session, router)));
                }
            }
        });
    };

    view! {
        <form class="approval-form" on:submit=submit>
            <h3>"تأیید یا رد قیمت‌گذاری"</h3>
            <div class="decision-row">
                <label class="radio-label">
                    <input
                        type="radio"
                        name="decision"
                        prop:checked=move || decision.get() == Some(Decision::Approve)
                        on:change=move |_| set_decision.set(Some(Decision::Approve))
                    />
                    "تأیید سفارش"
                </label>
                <label class="radio-label">
                    <input
                        type="radio"
                        name="decision"
                        prop:checked=move || decision.get() == Some(Decision::Reject)
                        on:change=move |_| set_decision.set(Some(Decision::Reject))
                    />
                    "رد سفارش"
                </label>
            </div>

            <Show when=move || decision.get() == Some(Decision::Reject)>
                <label class="form-label">"دلیل رد"</label>
                <textarea
                    placeholder="دلیل رد سفارش را بنویسید..."
                    prop:value=move || reason.get()
                    on:input=move |ev| set_reason.set(event_target_value(&ev))
                ></textarea>
            </Show>

            <ErrorBanner error=error />

            <button type="submit" prop:disabled=move || submitting.get()>
                {move || if submitting.get() { "در حال ارسال..." } else { "ثبت تصمیم" }}
            </button>
        </form>
    }
}
