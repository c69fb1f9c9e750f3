//! Registration Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, abort, auth};
use crate::components::ErrorBanner;
use crate::router::{use_router, Route};
use crate::session::{self, use_session};
use crate::validate::validate_registration;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (company, set_company) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let abort_key = abort::new_scope();
    on_cleanup(move || abort::cancel_scope(abort_key));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        if let Err(msg) =
            validate_registration(&name.get(), &email.get(), &password.get(), &confirm.get())
        {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        let company_value = company.get().trim().to_string();
        let phone_value = phone.get().trim().to_string();
        let request = auth::RegisterRequest {
            name: name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            password: password.get(),
            company_name: (!company_value.is_empty()).then_some(company_value),
            phone: (!phone_value.is_empty()).then_some(phone_value),
        };
        spawn_local(async move {
            let abort_signal = abort::signal_for(abort_key);
            match auth::register(&request, abort_signal.as_ref()).await {
                Ok(resp) => {
                    set_submitting.set(false);
                    session::establish(session, resp);
                    router.navigate(Route::Dashboard);
                }
                Err(api::ApiError::Aborted) => {}
                Err(e) => {
                    set_submitting.set(false);
                    set_error.set(Some(e.user_message()));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=submit>
                <h2>"ثبت‌نام"</h2>

                <label class="form-label">"نام و نام خانوادگی"</label>
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />

                <label class="form-label">"ایمیل"</label>
                <input
                    type="email"
                    dir="ltr"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />

                <label class="form-label">"نام شرکت (اختیاری)"</label>
                <input
                    type="text"
                    prop:value=move || company.get()
                    on:input=move |ev| set_company.set(event_target_value(&ev))
                />

                <label class="form-label">"تلفن (اختیاری)"</label>
                <input
                    type="tel"
                    dir="ltr"
                    prop:value=move || phone.get()
                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                />

                <label class="form-label">"گذرواژه"</label>
                <input
                    type="password"
                    dir="ltr"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                <label class="form-label">"تکرار گذرواژه"</label>
                <input
                    type="password"
                    dir="ltr"
                    prop:value=move || confirm.get()
                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                />

                <ErrorBanner error=error />

                <button type="submit" prop:disabled=move || submitting.get()>
                    {move || if submitting.get() { "در حال ثبت‌نام..." } else { "ثبت‌نام" }}
                </button>

                <p class="auth-switch">
                    "حساب دارید؟ "
                    <a href="#/login">"ورود"</a>
                </p>
            </form>
        </div>
    }
}
