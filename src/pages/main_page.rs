//! Landing Page
//!
//! New arrivals strip and shipment announcements for everyone,
//! logged in or not.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, abort, products};
use crate::components::ProductCard;
use crate::markdown;
use crate::models::{Product, ShipmentAnnouncement};
use crate::router::{use_router, Route};

#[component]
pub fn MainPage() -> impl IntoView {
    let router = use_router();

    let (arrivals, set_arrivals) = signal(Vec::<Product>::new());
    let (announcements, set_announcements) = signal(Vec::<ShipmentAnnouncement>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let abort_key = abort::new_scope();
    on_cleanup(move || abort::cancel_scope(abort_key));

    Effect::new(move |_| {
        spawn_local(async move {
            let abort_signal = abort::signal_for(abort_key);
            let arrivals_result = products::new_arrivals(abort_signal.as_ref()).await;
            let news_result = products::shipment_announcements(abort_signal.as_ref()).await;
            match (arrivals_result, news_result) {
                (Ok(items), Ok(news)) => {
                    set_arrivals.set(items);
                    set_announcements.set(news);
                    set_loading.set(false);
                }
                (Err(api::ApiError::Aborted), _) | (_, Err(api::ApiError::Aborted)) => {}
                (Err(e), _) | (_, Err(e)) => {
                    set_loading.set(false);
                    set_error.set(Some(e.user_message()));
                }
            }
        });
    });

    view! {
        <div class="main-page">
            <section class="hero">
                <h1>"عمده"</h1>
                <p>"سامانه سفارش عمده برای همکاران و فروشگاه‌ها"</p>
                <button type="button" on:click=move |_| router.navigate(Route::Products)>
                    "مشاهده محصولات"
                </button>
            </section>

            {move || error.get().map(|e| view! { <div class="error-banner"><div>{e}</div></div> })}

            <Show when=move || !loading.get()>
                <section class="arrivals">
                    <h2>"تازه‌رسیده‌ها"</h2>
                    <Show
                        when=move || !arrivals.get().is_empty()
                        fallback=|| view! { <p class="muted">"فعلاً کالای جدیدی ثبت نشده است."</p> }
                    >
                        <div class="product-grid">
                            <For
                                each=move || arrivals.get()
                                key=|p| p.id
                                children=move |product| view! { <ProductCard product=product /> }
                            />
                        </div>
                    </Show>
                </section>

                <section class="announcements">
                    <h2>"اعلان‌های بار"</h2>
                    <Show
                        when=move || !announcements.get().is_empty()
                        fallback=|| view! { <p class="muted">"اعلانی در کار نیست."</p> }
                    >
                        <For
                            each=move || announcements.get()
                            key=|a| a.id
                            children=move |item| {
                                let title = markdown::parse_markdown_inline(&item.title);
                                let body = markdown::parse_markdown(&item.body);
                                view! {
                                    <article class="announcement">
                                        <h3 inner_html=title></h3>
                                        <div class="announcement-body" inner_html=body></div>
                                    </article>
                                }
                            }
                        />
                    </Show>
                </section>
            </Show>

            <Show when=move || loading.get()>
                <p class="muted">"در حال بارگذاری..."</p>
            </Show>
        </div>
    }
}
