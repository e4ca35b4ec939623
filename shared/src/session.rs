//! # Session
//!
//! Client-side record of who is logged in. The token and a JSON snapshot of
//! the user live in durable storage; the manager keeps a cached copy of the
//! derived [`SessionState`] and tells subscribers whenever it changes.
//!
//! The three outside concerns (storage, the remote API and navigation) are
//! traits so the browser implementations can be swapped for in-memory ones.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::error::ApiError;
use crate::routes::Route;
use crate::{LoginRequest, LoginResponse, RegisterRequest, RegisteredUser, User};

pub const TOKEN_KEY: &str = "auth_token";
pub const USER_KEY: &str = "user_data";

/// Durable string storage (the browser's `localStorage` in production)
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The slice of the remote API the session needs
#[async_trait(?Send)]
pub trait AuthBackend {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    async fn register(&self, request: &RegisterRequest) -> Result<RegisteredUser, ApiError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;
}

pub trait Navigator {
    fn navigate(&self, route: Route);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub authenticated: bool,
    pub current_user: Option<User>,
    /// A login or registration request is in flight
    pub loading: bool,
}

impl SessionState {
    pub fn is_barber(&self) -> bool {
        self.current_user.as_ref().is_some_and(|user| user.is_barber)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationResult {
    Success(RegisteredUser),
    Failure { message: String },
}

impl RegistrationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, RegistrationResult::Success(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(&SessionState)>;

pub struct SessionManager<S, A, N> {
    store: S,
    api: A,
    navigator: N,
    state: RefCell<SessionState>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_listener: Cell<u64>,
}

impl<S, A, N> SessionManager<S, A, N>
where
    S: SessionStore,
    A: AuthBackend,
    N: Navigator,
{
    /// Restore the session from storage.
    ///
    /// An unreadable user snapshot is treated as corruption and ends the
    /// session (which also navigates to the login screen).
    pub fn new(store: S, api: A, navigator: N) -> Self {
        let manager = Self {
            store,
            api,
            navigator,
            state: RefCell::new(SessionState::default()),
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
        };

        let authenticated = manager.has_token();
        manager.state.borrow_mut().authenticated = authenticated;
        manager.load_user_data();
        manager
    }

    fn load_user_data(&self) {
        let Some(raw) = self.store.get(USER_KEY).filter(|raw| !raw.is_empty()) else {
            return;
        };

        match serde_json::from_str::<Option<User>>(&raw) {
            Ok(user) => self.state.borrow_mut().current_user = user,
            Err(err) => {
                error!(component = "session", error = %err, "Failed to load stored user data");
                self.logout();
            }
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().authenticated
    }

    /// True while a login or registration request is in flight
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().current_user.clone()
    }

    /// Reads storage on every call
    pub fn has_token(&self) -> bool {
        self.token().is_some_and(|token| !token.is_empty())
    }

    /// Reads storage on every call
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// Name from the stored snapshot. Unlike startup, an unreadable snapshot
    /// here is just "no name".
    pub fn user_name(&self) -> Option<String> {
        self.stored_user()?.name.filter(|name| !name.is_empty())
    }

    /// Id from the stored snapshot, `None` when absent or unreadable
    pub fn user_id(&self) -> Option<String> {
        self.stored_user()?.id.filter(|id| !id.is_empty())
    }

    fn stored_user(&self) -> Option<User> {
        let raw = self.store.get(USER_KEY)?;
        serde_json::from_str::<Option<User>>(&raw).ok().flatten()
    }

    /// Log in and load the user's record.
    ///
    /// Resolves to `false` on any failure, leaving the session logged out.
    /// On success navigates to the booking screen.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        self.update(|state| state.loading = true);
        let success = self.authenticate(email, password).await;
        self.update(|state| state.loading = false);

        if success {
            info!(component = "session", "Login succeeded");
            self.navigator.navigate(Route::Booking);
        }
        success
    }

    async fn authenticate(&self, email: &str, password: &str) -> bool {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let token = match self.api.login(&request).await {
            Ok(response) => match response.usable_token() {
                Some(token) => token.to_string(),
                None => {
                    warn!(component = "session", "Login response carried no token");
                    return false;
                }
            },
            Err(err) => {
                error!(component = "session", error = %err, "Login request failed");
                return false;
            }
        };

        self.store.set(TOKEN_KEY, &token);
        self.update(|state| state.authenticated = true);

        match self.api.find_user_by_email(email).await {
            Ok(Some(user)) => {
                self.store_user(&user);
                self.update(|state| state.current_user = Some(user));
                true
            }
            Ok(None) => {
                warn!(component = "session", "No user record matches the login email");
                true
            }
            Err(err) => {
                error!(component = "session", error = %err, "Failed to load user after login");
                self.store.remove(TOKEN_KEY);
                self.update(|state| state.authenticated = false);
                false
            }
        }
    }

    fn store_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => self.store.set(USER_KEY, &json),
            Err(err) => error!(component = "session", error = %err, "Failed to serialize user"),
        }
    }

    /// Forget the token and user, then go to the login screen
    pub fn logout(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
        self.update(|state| {
            state.current_user = None;
            state.authenticated = false;
        });
        debug!(component = "session", "Logged out");
        self.navigator.navigate(Route::Login);
    }

    /// Register a new account. Failures come back as
    /// [`RegistrationResult::Failure`] with a message fit for display.
    pub async fn register(&self, request: &RegisterRequest) -> RegistrationResult {
        self.update(|state| state.loading = true);
        let result = match self.api.register(request).await {
            Ok(user) => RegistrationResult::Success(user),
            Err(err) => {
                error!(component = "session", error = %err, "Registration failed");
                RegistrationResult::Failure {
                    message: err.registration_message(),
                }
            }
        };
        self.update(|state| state.loading = false);
        result
    }

    /// Call `listener` with the new state after every change
    pub fn subscribe(&self, listener: impl Fn(&SessionState) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(listener_id, _)| *listener_id != id);
    }

    fn update(&self, change: impl FnOnce(&mut SessionState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            change(&mut state);
            state.clone()
        };

        // Listeners may subscribe or read state, so no borrow is held here
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in listeners {
            listener(&snapshot);
        }
    }
}

/// In-memory [`SessionStore`]. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        for (key, value) in entries {
            store.set(key, value);
        }
        store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
