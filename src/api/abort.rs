//! Request Abort Scopes
//!
//! Each page creates one scope and aborts it in `on_cleanup`, so
//! responses landing after unmount are dropped instead of writing to a
//! disposed view. Controllers live in a thread-local registry keyed by
//! integer; cleanup closures only capture the key.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use web_sys::{AbortController, AbortSignal};

thread_local! {
    static CONTROLLERS: RefCell<HashMap<u32, AbortController>> = RefCell::new(HashMap::new());
}

static NEXT_KEY: AtomicU32 = AtomicU32::new(1);

/// Register a new abort scope. Returns its key.
pub fn new_scope() -> u32 {
    let key = NEXT_KEY.fetch_add(1, Ordering::Relaxed);
    if let Ok(ctrl) = AbortController::new() {
        CONTROLLERS.with(|map| {
            map.borrow_mut().insert(key, ctrl);
        });
    }
    key
}

/// Signal to attach to requests issued under this scope.
pub fn signal_for(key: u32) -> Option<AbortSignal> {
    CONTROLLERS.with(|map| map.borrow().get(&key).map(|c| c.signal()))
}

/// Abort all in-flight requests under the scope and drop it.
pub fn cancel_scope(key: u32) {
    let ctrl = CONTROLLERS.with(|map| map.borrow_mut().remove(&key));
    if let Some(ctrl) = ctrl {
        ctrl.abort();
    }
}
