//! Billing Profile Fields
//!
//! The official-invoice profile inputs, shared by the profile page and
//! the order draft. State lives with the caller; this only binds the
//! seven fields.

use leptos::prelude::*;

use crate::models::CustomerInfo;

#[component]
pub fn BillingInfoFields(
    info: ReadSignal<CustomerInfo>,
    set_info: WriteSignal<CustomerInfo>,
) -> impl IntoView {
    view! {
        <div class="billing-fields">
            <label class="field">
                <span>"نام"</span>
                <input
                    type="text"
                    prop:value=move || info.get().name.unwrap_or_default()
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        set_info.update(|i| i.name = Some(v));
                    }
                />
            </label>
            <label class="field">
                <span>"تلفن"</span>
                <input
                    type="tel"
                    dir="ltr"
                    prop:value=move || info.get().phone.unwrap_or_default()
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        set_info.update(|i| i.phone = Some(v));
                    }
                />
            </label>
            <label class="field">
                <span>"نام شرکت"</span>
                <input
                    type="text"
                    prop:value=move || info.get().company_name.unwrap_or_default()
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        set_info.update(|i| i.company_name = Some(v));
                    }
                />
            </label>
            <label class="field">
                <span>"شناسه ملی"</span>
                <input
                    type="text"
                    dir="ltr"
                    prop:value=move || info.get().national_id.unwrap_or_default()
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        set_info.update(|i| i.national_id = Some(v));
                    }
                />
            </label>
            <label class="field">
                <span>"کد اقتصادی"</span>
                <input
                    type="text"
                    dir="ltr"
                    prop:value=move || info.get().economic_id.unwrap_or_default()
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        set_info.update(|i| i.economic_id = Some(v));
                    }
                />
            </label>
            <label class="field">
                <span>"کد پستی"</span>
                <input
                    type="text"
                    dir="ltr"
                    prop:value=move || info.get().postal_code.unwrap_or_default()
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        set_info.update(|i| i.postal_code = Some(v));
                    }
                />
            </label>
            <label class="field">
                <span>"آدرس کامل"</span>
                <textarea
                    prop:value=move || info.get().complete_address.unwrap_or_default()
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        set_info.update(|i| i.complete_address = Some(v));
                    }
                ></textarea>
            </label>
        </div>
    }
}
