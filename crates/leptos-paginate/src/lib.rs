//! Leptos Pagination Utilities
//!
//! Cursor state for limit/offset list endpoints plus an infinite-scroll
//! handler. A generation counter makes stale responses detectable after
//! a filter reset.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Scroll distance from the bottom at which the next page is requested
const LOAD_MORE_THRESHOLD_PX: i32 = 200;

/// What a page fetch should ask the server for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub offset: u32,
    pub limit: u32,
    /// Cursor generation this request belongs to
    pub generation: u64,
}

/// Pagination cursor. At most one request is in flight at a time;
/// responses from an older generation are ignored.
#[derive(Clone, Copy, Debug)]
pub struct Pager {
    page: u32,
    page_size: u32,
    has_more: bool,
    in_flight: bool,
    generation: u64,
}

impl Pager {
    pub fn new(page_size: u32) -> Self {
        Pager {
            page: 1,
            page_size,
            has_more: true,
            in_flight: false,
            generation: 0,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Begin the next page fetch. Returns `None` while a fetch is in
    /// flight or after the final page was received.
    pub fn try_begin(&mut self) -> Option<PageRequest> {
        if self.in_flight || !self.has_more {
            return None;
        }
        self.in_flight = true;
        Some(PageRequest {
            page: self.page,
            offset: (self.page - 1) * self.page_size,
            limit: self.page_size,
            generation: self.generation,
        })
    }

    /// Record a successful response. Returns `false` when the response
    /// belongs to an older generation and must be discarded.
    pub fn complete(&mut self, req: &PageRequest, received: usize) -> bool {
        if req.generation != self.generation {
            return false;
        }
        self.in_flight = false;
        self.has_more = received as u32 >= self.page_size;
        self.page += 1;
        true
    }

    /// Record a failed response. The cursor stays on the same page so a
    /// later scroll can try again. Returns `false` for stale generations.
    pub fn fail(&mut self, req: &PageRequest) -> bool {
        if req.generation != self.generation {
            return false;
        }
        self.in_flight = false;
        true
    }

    /// Reset to page 1. Bumps the generation so any in-flight response
    /// is dropped when it lands.
    pub fn reset(&mut self) {
        self.page = 1;
        self.has_more = true;
        self.in_flight = false;
        self.generation += 1;
    }
}

/// Create a scroll handler that calls `load_more` when the container is
/// scrolled near its bottom edge.
pub fn make_on_scroll<F>(load_more: F) -> impl Fn(web_sys::Event) + Clone + 'static
where
    F: Fn() + Clone + 'static,
{
    move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let Some(el) = target.dyn_ref::<web_sys::Element>().map(|e| e.clone()) else {
            return;
        };
        let remaining = el.scroll_height() - el.scroll_top() - el.client_height();
        if remaining <= LOAD_MORE_THRESHOLD_PX {
            load_more();
        }
    }
}

/// Pager wrapped in a signal, for sharing between a scroll handler and
/// the effect that resets on filter changes.
pub fn create_pager(page_size: u32) -> RwSignal<Pager> {
    RwSignal::new(Pager::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_is_page_one() {
        let mut p = Pager::new(20);
        let req = p.try_begin().unwrap();
        assert_eq!(req.page, 1);
        assert_eq!(req.offset, 0);
        assert_eq!(req.limit, 20);
    }

    #[test]
    fn overlapping_begin_is_refused() {
        let mut p = Pager::new(20);
        let _req = p.try_begin().unwrap();
        assert!(p.try_begin().is_none());
    }

    #[test]
    fn full_page_advances_cursor() {
        let mut p = Pager::new(20);
        let req = p.try_begin().unwrap();
        assert!(p.complete(&req, 20));
        assert!(p.has_more());
        let next = p.try_begin().unwrap();
        assert_eq!(next.page, 2);
        assert_eq!(next.offset, 20);
    }

    #[test]
    fn short_page_ends_pagination() {
        let mut p = Pager::new(20);
        let req = p.try_begin().unwrap();
        assert!(p.complete(&req, 7));
        assert!(!p.has_more());
        assert!(p.try_begin().is_none());
    }

    #[test]
    fn failure_allows_retry_of_same_page() {
        let mut p = Pager::new(20);
        let req = p.try_begin().unwrap();
        assert!(p.fail(&req));
        let retry = p.try_begin().unwrap();
        assert_eq!(retry.page, 1);
    }

    #[test]
    fn reset_returns_to_page_one() {
        let mut p = Pager::new(20);
        let req = p.try_begin().unwrap();
        p.complete(&req, 20);
        let req = p.try_begin().unwrap();
        p.complete(&req, 20);
        p.reset();
        let req = p.try_begin().unwrap();
        assert_eq!(req.page, 1);
        assert_eq!(req.offset, 0);
    }

    #[test]
    fn response_from_before_reset_is_stale() {
        let mut p = Pager::new(20);
        let old = p.try_begin().unwrap();
        p.reset();
        assert!(!p.complete(&old, 20));
        assert!(!p.fail(&old));
        // The reset cursor is still usable
        let req = p.try_begin().unwrap();
        assert_eq!(req.page, 1);
        assert!(p.complete(&req, 20));
    }

    #[test]
    fn reset_clears_in_flight_so_new_fetch_can_start() {
        let mut p = Pager::new(20);
        let _old = p.try_begin().unwrap();
        p.reset();
        assert!(!p.in_flight());
        assert!(p.try_begin().is_some());
    }
}
