use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::config::requires_api_auth;
use shared::slots::availability_query_timestamp;
use shared::{
    ApiError, AppConfig, Appointment, AuthBackend, BarberAvailability, ErrorBody, LoginRequest,
    LoginResponse, NewAppointment, RegisterRequest, RegisteredUser, User,
};

/// API client for the barbershop REST service
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    authorization: String,
}

impl ApiClient {
    /// Create a client from the runtime configuration
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url(!cfg!(debug_assertions)),
            authorization: config.authorization_header(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Outbound transformer: API requests carry the Basic credentials
    fn authorize(&self, builder: RequestBuilder, url: &str) -> RequestBuilder {
        if requires_api_auth(url) {
            builder.header("Authorization", &self.authorization)
        } else {
            builder
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let url = self.url(path);
        self.authorize(Request::get(&url), &url)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        let url = self.url(path);
        self.authorize(Request::post(&url), &url)
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        let url = self.url(path);
        self.authorize(Request::delete(&url), &url)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self
            .post(path)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .get(path)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    /// All registered users
    pub async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/Usuarios").await
    }

    /// Users flagged as barbers
    pub async fn get_barbers(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/Usuarios/barbeiros").await
    }

    /// Free slots of every barber on `date`
    pub async fn fetch_available_times(&self, date: NaiveDate) -> Result<Vec<BarberAvailability>, ApiError> {
        let path = format!(
            "/Agendamentos/horarios-disponiveis?data={}",
            availability_query_timestamp(date, &Local)
        );
        self.get_json(&path).await
    }

    pub async fn create_appointment(&self, appointment: &NewAppointment) -> Result<(), ApiError> {
        let request = self
            .post("/Agendamentos")
            .json(appointment)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await.map(|_| ())
    }

    pub async fn fetch_user_appointments(&self, user_id: &str) -> Result<Vec<Appointment>, ApiError> {
        self.get_json(&format!("/Agendamentos/usuario/{}", user_id)).await
    }

    pub async fn cancel_appointment(&self, appointment_id: &str) -> Result<(), ApiError> {
        let response = self
            .delete(&format!("/Agendamentos/{}", appointment_id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await.map(|_| ())
    }
}

#[async_trait(?Send)]
impl AuthBackend for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json("/Auth/login", request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisteredUser, ApiError> {
        self.post_json("/Auth/registro", request).await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let users = self.get_users().await?;
        Ok(User::find_by_email(users, email))
    }
}

/// Turn a non-2xx response into [`ApiError::Status`] with its body
async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response
        .text()
        .await
        .map(|text| ErrorBody::from_text(&text))
        .unwrap_or(ErrorBody::Empty);
    Err(ApiError::Status { status, body })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
