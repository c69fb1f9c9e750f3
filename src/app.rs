//! Omdeh Frontend App
//!
//! Root component: builds the session store, router and app context,
//! wires the Google sign-in bridge and renders the page for the
//! current route behind its access guard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::api::auth;
use crate::components::NoticeToast;
use crate::context::{AppContext, Notice};
use crate::pages::{
    AdminPage, DashboardPage, DealerPage, LoginPage, MainPage, OrderCreatePage, OrderDetailPage,
    ProductsPage, ProfilePage, RegisterPage,
};
use crate::router::{self, Guard, Route};
use crate::session::{self, SessionState, SessionStateStoreFields};

/// Event the Google Identity Services callback in index.html dispatches
/// on `document`, with the credential string as its detail.
pub const GOOGLE_CREDENTIAL_EVENT: &str = "omdeh-google-credential";

#[component]
pub fn App() -> impl IntoView {
    // State
    let session = Store::new(SessionState::default());
    let (orders_version, set_orders_version) = signal(0u32);
    let (notice, set_notice) = signal(None::<Notice>);

    let ctx = AppContext::new((orders_version, set_orders_version), (notice, set_notice));

    // Provide context to all children
    provide_context(session);
    provide_context(ctx);
    session::init_session(session);
    let router = router::init_router();
    provide_context(router);

    // Google sign-in: index.html owns the GIS widget and re-dispatches
    // its credential as a DOM event; this listener trades it for our
    // session tokens. Lives for the whole page.
    let on_google = Closure::<dyn FnMut(web_sys::CustomEvent)>::new(
        move |ev: web_sys::CustomEvent| {
            let Some(credential) = ev.detail().as_string() else {
                return;
            };
            spawn_local(async move {
                match auth::google_login(&credential, None).await {
                    Ok(resp) => {
                        session::establish(session, resp);
                        router.navigate(Route::Dashboard);
                    }
                    Err(e) => ctx.notify_error(e.user_message()),
                }
            });
        },
    );
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback(
            GOOGLE_CREDENTIAL_EVENT,
            on_google.as_ref().unchecked_ref(),
        );
    }
    on_google.forget();

    // Guard redirects run outside the render path
    Effect::new(move |_| {
        let route = router.route.get();
        let logged_in = session::is_logged_in(&session);
        let staff = session::is_staff(&session);
        let dealer = session::is_dealer(&session);
        match router::guard(route, logged_in, staff, dealer) {
            Guard::Allow => {}
            Guard::ToLogin => router.navigate(Route::Login),
            Guard::ToMain => router.navigate(Route::Main),
        }
    });

    let logout = move |_| {
        session::teardown(session);
        router.navigate(Route::Main);
    };

    let page = move || {
        let route = router.route.get();
        let logged_in = session::is_logged_in(&session);
        let staff = session::is_staff(&session);
        let dealer = session::is_dealer(&session);
        if router::guard(route, logged_in, staff, dealer) != Guard::Allow {
            return view! { <p class="muted">"در حال انتقال..."</p> }.into_any();
        }
        match route {
            Route::Main => view! { <MainPage /> }.into_any(),
            Route::Products => view! { <ProductsPage /> }.into_any(),
            Route::Login => view! { <LoginPage /> }.into_any(),
            Route::Register => view! { <RegisterPage /> }.into_any(),
            Route::Dashboard => view! { <DashboardPage /> }.into_any(),
            Route::OrderCreate => view! { <OrderCreatePage /> }.into_any(),
            Route::OrderDetail(id) => view! { <OrderDetailPage order_id=id /> }.into_any(),
            Route::Admin => view! { <AdminPage /> }.into_any(),
            Route::Dealer => view! { <DealerPage /> }.into_any(),
            Route::Profile => view! { <ProfilePage /> }.into_any(),
        }
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <a class="brand" href="#/">"بازرگانی عمده"</a>
                <nav class="main-nav">
                    <a href="#/">"خانه"</a>
                    <a href="#/products">"محصولات"</a>
                    <Show when=move || session::is_logged_in(&session)>
                        <a href="#/dashboard">"داشبورد"</a>
                        <a href="#/orders/create">"سفارش جدید"</a>
                        <a href="#/profile">"پروفایل"</a>
                    </Show>
                    <Show when=move || session::is_staff(&session)>
                        <a href="#/admin">"مدیریت"</a>
                    </Show>
                    <Show when=move || session::is_dealer(&session)>
                        <a href="#/dealer">"پنل نماینده"</a>
                    </Show>
                </nav>
                <div class="session-box">
                    {move || {
                        if session::is_logged_in(&session) {
                            let name = session.user().with(|u| {
                                u.as_ref().map(|x| x.display_name().to_string()).unwrap_or_default()
                            });
                            view! {
                                <span class="user-name">{name}</span>
                                <button type="button" class="logout-btn" on:click=logout>
                                    "خروج"
                                </button>
                            }
                            .into_any()
                        } else {
                            view! { <a class="login-link" href="#/login">"ورود"</a> }.into_any()
                        }
                    }}
                </div>
            </header>

            <main class="main-content">{page}</main>

            <NoticeToast />
        </div>
    }
}
