//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

/// How long a toast stays on screen
const NOTICE_TTL_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after any order mutation so every order view re-fetches - read
    pub orders_version: ReadSignal<u32>,
    set_orders_version: WriteSignal<u32>,
    /// Current toast, if any - read
    pub notice: ReadSignal<Option<Notice>>,
    set_notice: WriteSignal<Option<Notice>>,
}

impl AppContext {
    pub fn new(
        orders_version: (ReadSignal<u32>, WriteSignal<u32>),
        notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>),
    ) -> Self {
        Self {
            orders_version: orders_version.0,
            set_orders_version: orders_version.1,
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Make every mounted order list and detail view re-fetch
    pub fn refresh_orders(&self) {
        self.set_orders_version.update(|v| *v += 1);
    }

    pub fn notify_success(&self, text: impl Into<String>) {
        self.show(Notice {
            kind: NoticeKind::Success,
            text: text.into(),
        });
    }

    pub fn notify_error(&self, text: impl Into<String>) {
        self.show(Notice {
            kind: NoticeKind::Error,
            text: text.into(),
        });
    }

    fn show(&self, notice: Notice) {
        self.set_notice.set(Some(notice));
        let set_notice = self.set_notice;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TTL_MS).await;
            set_notice.set(None);
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
