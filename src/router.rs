//! Hash Router
//!
//! Routes live in the URL fragment (`#/orders/42`), so the app works
//! from any static file server without rewrite rules. Navigation sets
//! the fragment; a `hashchange` listener keeps the route signal in sync
//! with back/forward buttons and hand-edited URLs.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Main,
    Products,
    Login,
    Register,
    Dashboard,
    OrderCreate,
    OrderDetail(u32),
    Admin,
    Dealer,
    Profile,
}

impl Route {
    /// Parse a `location.hash` value or a full URL (what
    /// `HashChangeEvent::new_url` yields). Unknown paths land on `Main`.
    pub fn parse(hash: &str) -> Route {
        let path = match hash.split_once('#') {
            Some((_, fragment)) => fragment,
            None => hash,
        };
        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        match segments.as_slice() {
            [] => Route::Main,
            ["products"] => Route::Products,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["dashboard"] => Route::Dashboard,
            ["orders", "create"] => Route::OrderCreate,
            ["orders", id] => match id.parse::<u32>() {
                Ok(id) => Route::OrderDetail(id),
                Err(_) => Route::Main,
            },
            ["admin"] => Route::Admin,
            ["dealer"] => Route::Dealer,
            ["profile"] => Route::Profile,
            _ => Route::Main,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::Main => "#/".to_string(),
            Route::Products => "#/products".to_string(),
            Route::Login => "#/login".to_string(),
            Route::Register => "#/register".to_string(),
            Route::Dashboard => "#/dashboard".to_string(),
            Route::OrderCreate => "#/orders/create".to_string(),
            Route::OrderDetail(id) => format!("#/orders/{id}"),
            Route::Admin => "#/admin".to_string(),
            Route::Dealer => "#/dealer".to_string(),
            Route::Profile => "#/profile".to_string(),
        }
    }
}

/// Where a guarded route should send the visitor instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    Allow,
    /// Needs a login first
    ToLogin,
    /// Logged in but lacking the role
    ToMain,
}

/// Access rules per route. Role checks only gate what is rendered;
/// the backend enforces the real permissions.
pub fn guard(route: Route, logged_in: bool, staff: bool, dealer: bool) -> Guard {
    match route {
        Route::Main | Route::Products | Route::Login | Route::Register => Guard::Allow,
        Route::Dashboard | Route::OrderCreate | Route::OrderDetail(_) | Route::Profile => {
            if logged_in {
                Guard::Allow
            } else {
                Guard::ToLogin
            }
        }
        Route::Admin => {
            if !logged_in {
                Guard::ToLogin
            } else if staff {
                Guard::Allow
            } else {
                Guard::ToMain
            }
        }
        Route::Dealer => {
            if !logged_in {
                Guard::ToLogin
            } else if dealer {
                Guard::Allow
            } else {
                Guard::ToMain
            }
        }
    }
}

#[derive(Clone, Copy)]
pub struct RouterContext {
    pub route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
}

impl RouterContext {
    pub fn navigate(&self, route: Route) {
        if self.route.get_untracked() == route {
            return;
        }
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_hash(&route.to_hash());
        }
        self.set_route.set(route);
    }
}

/// Get the router from context
pub fn use_router() -> RouterContext {
    expect_context::<RouterContext>()
}

/// Build the router from the current hash and start listening for
/// changes. Called once from the app root; the listener lives for the
/// whole page.
pub fn init_router() -> RouterContext {
    let initial = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|h| Route::parse(&h))
        .unwrap_or(Route::Main);
    let (route, set_route) = signal(initial);

    // navigate() already set the signal, so the echo from its own
    // set_hash is dropped here; back/forward still comes through.
    let on_hashchange = Closure::<dyn FnMut(web_sys::HashChangeEvent)>::new(
        move |ev: web_sys::HashChangeEvent| {
            let next = Route::parse(&ev.new_url());
            if route.get_untracked() != next {
                set_route.set(next);
            }
        },
    );
    if let Some(win) = web_sys::window() {
        let _ = win
            .add_event_listener_with_callback("hashchange", on_hashchange.as_ref().unchecked_ref());
    }
    on_hashchange.forget();

    RouterContext { route, set_route }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_parse() {
        assert_eq!(Route::parse("#/"), Route::Main);
        assert_eq!(Route::parse(""), Route::Main);
        assert_eq!(Route::parse("#/products"), Route::Products);
        assert_eq!(Route::parse("#/login"), Route::Login);
        assert_eq!(Route::parse("#/register"), Route::Register);
        assert_eq!(Route::parse("#/dashboard"), Route::Dashboard);
        assert_eq!(Route::parse("#/orders/create"), Route::OrderCreate);
        assert_eq!(Route::parse("#/orders/42"), Route::OrderDetail(42));
        assert_eq!(Route::parse("#/admin"), Route::Admin);
        assert_eq!(Route::parse("#/dealer"), Route::Dealer);
        assert_eq!(Route::parse("#/profile"), Route::Profile);
    }

    #[test]
    fn full_urls_from_hashchange_events_parse() {
        // new_url() hands over the whole URL, not just the fragment
        assert_eq!(
            Route::parse("https://omdeh.ir/app#/orders/7"),
            Route::OrderDetail(7)
        );
        assert_eq!(Route::parse("https://omdeh.ir/app"), Route::Main);
    }

    #[test]
    fn garbage_falls_back_to_main() {
        assert_eq!(Route::parse("#/orders/abc"), Route::Main);
        assert_eq!(Route::parse("#/nope"), Route::Main);
        assert_eq!(Route::parse("#/orders/1/extra"), Route::Main);
        assert_eq!(Route::parse("#//"), Route::Main);
    }

    #[test]
    fn hashes_round_trip() {
        for route in [
            Route::Main,
            Route::Products,
            Route::Login,
            Route::Register,
            Route::Dashboard,
            Route::OrderCreate,
            Route::OrderDetail(13),
            Route::Admin,
            Route::Dealer,
            Route::Profile,
        ] {
            assert_eq!(Route::parse(&route.to_hash()), route);
        }
    }

    #[test]
    fn anonymous_visitors_are_sent_to_login() {
        assert_eq!(guard(Route::Dashboard, false, false, false), Guard::ToLogin);
        assert_eq!(guard(Route::OrderDetail(1), false, false, false), Guard::ToLogin);
        assert_eq!(guard(Route::Admin, false, false, false), Guard::ToLogin);
        assert_eq!(guard(Route::Products, false, false, false), Guard::Allow);
        assert_eq!(guard(Route::Main, false, false, false), Guard::Allow);
    }

    #[test]
    fn role_routes_need_their_role() {
        assert_eq!(guard(Route::Admin, true, false, false), Guard::ToMain);
        assert_eq!(guard(Route::Admin, true, true, false), Guard::Allow);
        assert_eq!(guard(Route::Dealer, true, false, false), Guard::ToMain);
        assert_eq!(guard(Route::Dealer, true, false, true), Guard::Allow);
    }

    #[test]
    fn customers_reach_their_own_pages() {
        assert_eq!(guard(Route::Dashboard, true, false, false), Guard::Allow);
        assert_eq!(guard(Route::OrderCreate, true, false, false), Guard::Allow);
        assert_eq!(guard(Route::Profile, true, false, false), Guard::Allow);
    }
}
