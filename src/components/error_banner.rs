//! Error Banner

use leptos::prelude::*;

/// Red banner under a form or list. Renders nothing while the error
/// signal is empty; multi-line messages keep their line breaks.
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().filter(|e| !e.is_empty()).map(|text| view! {
            <div class="error-banner">
                {text.lines().map(|line| view! {
                    <div>{line.to_string()}</div>
                }).collect_view()}
            </div>
        })}
    }
}
