//! Toast Notice

use leptos::prelude::*;

use crate::context::{use_app_context, NoticeKind};

/// Fixed-position toast fed from the app context. The context clears
/// it again after a few seconds.
#[component]
pub fn NoticeToast() -> impl IntoView {
    let ctx = use_app_context();
    view! {
        {move || ctx.notice.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice-toast notice-success",
                NoticeKind::Error => "notice-toast notice-error",
            };
            view! {
                <div class=class>{notice.text}</div>
            }
        })}
    }
}
