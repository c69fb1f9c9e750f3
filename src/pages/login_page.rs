//! Login Page
//!
//! Email/password login plus the Google button. Google Identity
//! Services renders into the placeholder div and hands the credential
//! to an app-level listener, so this page only does the form flow.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, abort, auth};
use crate::components::ErrorBanner;
use crate::router::{use_router, Route};
use crate::session::{self, use_session};

/// Dispatched once the placeholder div exists; index.html renders the
/// Google button into it on this signal.
const LOGIN_MOUNTED_EVENT: &str = "omdeh-login-mounted";

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let abort_key = abort::new_scope();
    on_cleanup(move || abort::cancel_scope(abort_key));

    Effect::new(move |_| {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Ok(ev) = web_sys::CustomEvent::new(LOGIN_MOUNTED_EVENT) {
            let _ = doc.dispatch_event(&ev);
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        if email_value.trim().is_empty() || password_value.is_empty() {
            set_error.set(Some("ایمیل و گذرواژه را وارد کنید.".to_string()));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            let abort_signal = abort::signal_for(abort_key);
            let request = auth::LoginRequest {
                email: email_value.trim().to_string(),
                password: password_value,
            };
            match auth::login(&request, abort_signal.as_ref()).await {
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
                <h2>"ورود"</h2>

                <label class="form-label">"ایمیل"</label>
                <input
                    type="email"
                    dir="ltr"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />

                <label class="form-label">"گذرواژه"</label>
                <input
                    type="password"
                    dir="ltr"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                <ErrorBanner error=error />

                <button type="submit" prop:disabled=move || submitting.get()>
                    {move || if submitting.get() { "در حال ورود..." } else { "ورود" }}
                </button>

                <div class="auth-divider">"یا"</div>
                // Google Identity Services renders its button here
                <div id="google-signin-button"></div>

                <p class="auth-switch">
                    "حساب ندارید؟ "
                    <a href="#/register">"ثبت‌نام"</a>
                </p>
            </form>
        </div>
    }
}
