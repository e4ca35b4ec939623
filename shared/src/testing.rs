//! Test doubles for the session seams and a couple of canned users.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::routes::Route;
use crate::session::{AuthBackend, Navigator};
use crate::{LoginRequest, LoginResponse, RegisterRequest, RegisteredUser, User};

pub fn client() -> User {
    User {
        id: Some("client-1".to_string()),
        name: Some("Ana Cliente".to_string()),
        email: Some("ana@example.com".to_string()),
        is_barber: false,
        appointments: None,
    }
}

pub fn barber() -> User {
    User {
        id: Some("barber-1".to_string()),
        name: Some("Peri".to_string()),
        email: Some("peri@barbearia.com".to_string()),
        is_barber: true,
        appointments: None,
    }
}

/// Backend that answers every call with a canned result and records requests
pub struct FakeBackend {
    pub login: Result<LoginResponse, ApiError>,
    pub register: Result<RegisteredUser, ApiError>,
    pub users: Result<Vec<User>, ApiError>,
    pub login_requests: RefCell<Vec<LoginRequest>>,
    pub register_requests: RefCell<Vec<RegisterRequest>>,
    pub user_lookups: Cell<u32>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            login: Ok(LoginResponse {
                token: Some("token-123".to_string()),
            }),
            register: Ok(RegisteredUser {
                id: Some("client-1".to_string()),
                name: Some("Ana Cliente".to_string()),
                email: Some("ana@example.com".to_string()),
                is_barber: false,
            }),
            users: Ok(vec![barber(), client()]),
            login_requests: RefCell::new(Vec::new()),
            register_requests: RefCell::new(Vec::new()),
            user_lookups: Cell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl AuthBackend for FakeBackend {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.login_requests.borrow_mut().push(request.clone());
        self.login.clone()
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisteredUser, ApiError> {
        self.register_requests.borrow_mut().push(request.clone());
        self.register.clone()
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        self.user_lookups.set(self.user_lookups.get() + 1);
        self.users
            .clone()
            .map(|users| User::find_by_email(users, email))
    }
}

/// Navigator that remembers every route it was sent to
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    routes: Rc<RefCell<Vec<Route>>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }
}
