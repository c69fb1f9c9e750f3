//! Profile Page
//!
//! The billing profile used for official invoices, plus password
//! change. Both forms post independently.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, abort, auth, customers};
use crate::components::BillingInfoFields;
use crate::context::use_app_context;
use crate::models::CustomerInfo;
use crate::router::use_router;
use crate::session::{self, use_session, SessionStateStoreFields};
use crate::validate;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let ctx = use_app_context();

    let (info, set_info) = signal(CustomerInfo::default());
    let (info_error, set_info_error) = signal(None::<String>);
    let (info_saving, set_info_saving) = signal(false);

    let (old_password, set_old_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (password_error, set_password_error) = signal(None::<String>);
    let (password_saving, set_password_saving) = signal(false);

    let abort_key = abort::new_scope();
    on_cleanup(move || abort::cancel_scope(abort_key));

    Effect::new(move |_| {
        spawn_local(async move {
            let abort_signal = abort::signal_for(abort_key);
            match customers::get_invoice_info(abort_signal.as_ref()).await {
                Ok(profile) => set_info.set(profile),
                Err(api::ApiError::Aborted) => {}
                Err(e) => {
                    set_info_error.set(Some(session::handle_api_error(&e, session, router)));
                }
            }
        });
    });

    let save_info = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if info_saving.get() {
            return;
        }
        set_info_error.set(None);
        set_info_saving.set(true);
        spawn_local(async move {
            let abort_signal = abort::signal_for(abort_key);
            let profile = info.get_untracked();
            match customers::update_invoice_info(&profile, abort_signal.as_ref()).await {
                Ok(()) => {
                    set_info_saving.set(false);
                    ctx.notify_success("اطلاعات فاکتور ذخیره شد.");
                }
                Err(api::ApiError::Aborted) => {}
                Err(e) => {
                    set_info_saving.set(false);
                    set_info_error.set(Some(session::handle_api_error(&e, session, router)));
                }
            }
        });
    };

    let change_password = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if password_saving.get() {
            return;
        }
        if let Err(msg) = validate::validate_password_change(
            &old_password.get(),
            &new_password.get(),
            &confirm.get(),
        ) {
            set_password_error.set(Some(msg));
            return;
        }
        set_password_error.set(None);
        set_password_saving.set(true);
        spawn_local(async move {
            let abort_signal = abort::signal_for(abort_key);
            let old = old_password.get_untracked();
            let new = new_password.get_untracked();
            match auth::change_password(&old, &new, abort_signal.as_ref()).await {
                Ok(()) => {
                    set_password_saving.set(false);
                    set_old_password.set(String::new());
                    set_new_password.set(String::new());
                    set_confirm.set(String::new());
                    ctx.notify_success("گذرواژه با موفقیت تغییر کرد.");
                }
                Err(api::ApiError::Aborted) => {}
                Err(e) => {
                    set_password_saving.set(false);
                    set_password_error.set(Some(session::handle_api_error(&e, session, router)));
                }
            }
        });
    };

    let display_name = move || {
        session
            .user()
            .with(|u| u.as_ref().map(|x| x.display_name().to_string()))
            .unwrap_or_default()
    };

    view! {
        <div class="profile-page">
            <h2>{move || format!("پروفایل {}", display_name())}</h2>

            <form class="profile-section" on:submit=save_info>
                <h3>"اطلاعات فاکتور رسمی"</h3>
                <p class="muted">
                    "این اطلاعات برای صدور فاکتور رسمی استفاده می‌شود."
                </p>
                <BillingInfoFields info=info set_info=set_info />
                {move || info_error.get().map(|e| view! { <div class="error-banner"><div>{e}</div></div> })}
                <button type="submit" prop:disabled=move || info_saving.get()>
                    {move || if info_saving.get() { "در حال ذخیره..." } else { "ذخیره اطلاعات" }}
                </button>
            </form>

            <form class="profile-section" on:submit=change_password>
                <h3>"تغییر گذرواژه"</h3>
                <label class="field">
                    <span>"گذرواژه فعلی"</span>
                    <input
                        type="password"
                        prop:value=move || old_password.get()
                        on:input=move |ev| set_old_password.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"گذرواژه جدید"</span>
                    <input
                        type="password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| set_new_password.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"تکرار گذرواژه جدید"</span>
                    <input
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    />
                </label>
                {move || password_error.get().map(|e| view! { <div class="error-banner"><div>{e}</div></div> })}
                <button type="submit" prop:disabled=move || password_saving.get()>
                    {move || if password_saving.get() { "در حال ذخیره..." } else { "تغییر گذرواژه" }}
                </button>
            </form>
        </div>
    }
}
