//! Receipt Upload Modal
//!
//! Stages up to ten files per batch, previews them, then sends one
//! multipart request. Images preview through data URLs; PDFs get
//! object URLs tracked in a ledger and revoked on removal, close,
//! success and unmount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, abort, receipts};
use crate::components::error_banner::ErrorBanner;
use crate::format::format_file_size;
use crate::models::ReceiptFileType;
use crate::router::use_router;
use crate::session::{self, use_session};
use crate::upload::{self, PreviewUrls};

#[derive(Clone)]
enum Preview {
    /// Data URL still being read
    Pending,
    /// Data URL for an inline <img>
    Image(String),
    /// Object URL, tracked in the ledger
    Pdf(String),
}

#[derive(Clone)]
struct StagedFile {
    file: web_sys::File,
    name: String,
    size: u64,
    kind: ReceiptFileType,
    preview: Preview,
}

#[component]
pub fn ReceiptUploadModal(
    order_id: u32,
    open: ReadSignal<bool>,
    on_close: Callback<()>,
    on_uploaded: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    // Staged files hold browser File handles, so this signal is local
    let staged = RwSignal::new_local(Vec::<StagedFile>::new());
    let (rejections, set_rejections) = signal(Vec::<String>::new());
    let (submit_error, set_submit_error) = signal(None::<String>);
    let (uploading, set_uploading) = signal(false);

    let previews = PreviewUrls::new();
    let ledger_key = previews.key();
    on_cleanup(move || upload::revoke_ledger(ledger_key));

    let abort_key = abort::new_scope();
    on_cleanup(move || abort::cancel_scope(abort_key));

    let stage_list = move |list: web_sys::FileList| {
        let mut messages = Vec::new();
        for i in 0..list.length() {
            let Some(file) = list.item(i) else { continue };
            if staged.with_untracked(|v| v.len()) >= upload::MAX_FILES_PER_BATCH {
                messages.push(upload::batch_full_message());
                break;
            }
            let name = file.name();
            let size = file.size() as u64;
            match upload::validate_file(&name, &file.type_(), size) {
                Err(msg) => messages.push(msg),
                Ok(ReceiptFileType::Pdf) => {
                    match previews.create_for(&file) {
                        Ok(url) => staged.update(|v| {
                            v.push(StagedFile {
                                file,
                                name,
                                size,
                                kind: ReceiptFileType::Pdf,
                                preview: Preview::Pdf(url),
                            })
                        }),
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("[UPLOAD] preview url failed: {e}").into(),
                            );
                        }
                    }
                }
                Ok(ReceiptFileType::Image) => {
                    staged.update(|v| {
                        v.push(StagedFile {
                            file: file.clone(),
                            name: name.clone(),
                            size,
                            kind: ReceiptFileType::Image,
                            preview: Preview::Pending,
                        })
                    });
                    spawn_local(async move {
                        match upload::read_as_data_url(&file).await {
                            Ok(data_url) => staged.update(|v| {
                                if let Some(entry) = v.iter_mut().find(|f| f.name == name) {
                                    entry.preview = Preview::Image(data_url);
                                }
                            }),
                            Err(e) => {
                                web_sys::console::error_1(
                                    &format!("[UPLOAD] read failed: {e}").into(),
                                );
                            }
                        }
                    });
                }
            }
        }
        set_rejections.set(messages);
    };

    let on_pick = move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        if let Some(list) = input.files() {
            stage_list(list);
        }
        // Allow re-picking the same file after removal
        input.set_value("");
    };

    let remove_at = move |idx: usize| {
        staged.update(|v| {
            if idx < v.len() {
                let removed = v.remove(idx);
                if let Preview::Pdf(url) = &removed.preview {
                    previews.revoke(url);
                }
            }
        });
    };

    let reset_and_close = move || {
        staged.update(|v| v.clear());
        previews.revoke_all();
        set_rejections.set(Vec::new());
        set_submit_error.set(None);
        on_close.run(());
    };

    let submit = move |_| {
        if uploading.get() || staged.with(|v| v.is_empty()) {
            return;
        }
        set_submit_error.set(None);
        set_uploading.set(true);
        let files: Vec<web_sys::File> = staged.with(|v| v.iter().map(|f| f.file.clone()).collect());
        spawn_local(async move {
            let abort_signal = abort::signal_for(abort_key);
            match receipts::upload_receipts(order_id, &files, abort_signal.as_ref()).await {
                Ok(()) => {
                    set_uploading.set(false);
                    staged.update(|v| v.clear());
                    previews.revoke_all();
                    set_rejections.set(Vec::new());
                    on_uploaded.run(());
                    on_close.run(());
                }
                Err(api::ApiError::Aborted) => {}
                Err(e) => {
                    set_uploading.set(false);
                    set_submit_error.set(Some(session::handle_api_error(&e, session, router)));
                }
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay">
                <div class="modal">
                    <div class="modal-header">
                        <h3>"ارسال رسید پرداخت"</h3>
                        <button type="button" class="close-btn" on:click=move |_| reset_and_close()>
                            "✕"
                        </button>
                    </div>

                    <p class="modal-hint">
                        "حداکثر ۱۰ فایل در هر نوبت، هر فایل تا ۱۵ مگابایت. تصویر یا PDF."
                    </p>

                    <label class="file-pick-btn" for="receipt-file-input">"انتخاب فایل"</label>
                    <input
                        id="receipt-file-input"
                        type="file"
                        multiple
                        accept="image/jpeg,image/png,image/gif,image/webp,application/pdf"
                        style="display: none;"
                        on:change=on_pick
                    />

                    {move || {
                        let msgs = rejections.get();
                        (!msgs.is_empty()).then(|| view! {
                            <div class="error-banner">
                                {msgs.into_iter().map(|m| view! { <div>{m}</div> }).collect_view()}
                            </div>
                        })
                    }}

                    <div class="staged-grid">
                        {move || staged.get().into_iter().enumerate().map(|(idx, f)| {
                            let size_text = format_file_size(f.size);
                            let name = f.name.clone();
                            view! {
                                <div class="staged-file">
                                    {match f.preview {
                                        Preview::Image(data_url) => view! {
                                            <img class="staged-thumb" src=data_url />
                                        }.into_any(),
                                        Preview::Pdf(_) => view! {
                                            <div class="staged-pdf">"PDF"</div>
                                        }.into_any(),
                                        Preview::Pending => view! {
                                            <div class="staged-pdf">"..."</div>
                                        }.into_any(),
                                    }}
                                    <div class="staged-name">{name}</div>
                                    <div class="staged-size muted">{size_text}</div>
                                    <button
                                        type="button"
                                        class="remove-btn"
                                        on:click=move |_| remove_at(idx)
                                    >
                                        "حذف"
                                    </button>
                                </div>
                            }
                        }).collect_view()}
                    </div>

                    <ErrorBanner error=submit_error />

                    <div class="modal-actions">
                        <button
                            type="button"
                            prop:disabled=move || uploading.get() || staged.with(|v| v.is_empty())
                            on:click=submit
                        >
                            {move || if uploading.get() { "در حال ارسال..." } else { "ارسال رسیدها" }}
                        </button>
                        <button type="button" class="secondary" on:click=move |_| reset_and_close()>
                            "انصراف"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
