use std::ops::Deref;
use std::rc::Rc;

use gloo::utils::window;
use shared::{Navigator, Route, SessionManager};
use tracing::{debug, warn};

use super::api::ApiClient;
use super::storage::BrowserStore;

/// Navigation through the URL fragment (`#/agendamento`)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HashNavigator;

impl Navigator for HashNavigator {
    fn navigate(&self, route: Route) {
        debug!(component = "navigation", path = route.path(), "Navigating");
        set_hash(route);
    }
}

/// Screen named by the current fragment
pub fn current_route() -> Route {
    let hash = window().location().hash().unwrap_or_default();
    Route::from_path(&hash)
}

/// Point the fragment at `route`; a no-op when it already does
pub fn set_hash(route: Route) {
    let location = window().location();
    let current = location.hash().unwrap_or_default();
    if current.trim_start_matches('#') == route.path() {
        return;
    }

    if let Err(err) = location.set_hash(route.path()) {
        warn!(component = "navigation", error = ?err, "Failed to update location hash");
    }
}

pub type Session = SessionManager<BrowserStore, ApiClient, HashNavigator>;

/// Shared handle to the one session of the page, plus the API client the
/// screens use for everything else.
#[derive(Clone)]
pub struct SessionHandle {
    session: Rc<Session>,
    api: ApiClient,
}

impl SessionHandle {
    pub fn new(api: ApiClient) -> Self {
        let session = SessionManager::new(BrowserStore, api.clone(), HashNavigator);
        Self {
            session: Rc::new(session),
            api,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session)
    }
}

impl Deref for SessionHandle {
    type Target = Session;

    fn deref(&self) -> &Self::Target {
        &self.session
    }
}
