use serde::{Deserialize, Serialize};

pub mod appointments;
pub mod booking;
pub mod clock;
pub mod config;
pub mod error;
pub mod routes;
pub mod session;
pub mod slots;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use appointments::{format_appointment_time, order_appointments};
pub use booking::{BookingDraft, BookingError};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ApiCredentials, AppConfig, ConfigError};
pub use error::{ApiError, ErrorBody};
pub use routes::{resolve_route, Route};
pub use session::{
    AuthBackend, ListenerId, MemoryStore, Navigator, RegistrationResult, SessionManager,
    SessionState, SessionStore,
};
pub use slots::{combine_date_time, filter_elapsed_slots, SlotError, TimeSlot};
pub use validation::{FieldError, LoginForm, RegistrationForm};

/// A registered user of the shop. Clients and barbers share this shape and
/// are told apart by `is_barber`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "ehBarbeiro", default)]
    pub is_barber: bool,
    /// Only populated by endpoints that expand the relation
    #[serde(rename = "agendamentos", default, skip_serializing_if = "Option::is_none")]
    pub appointments: Option<Vec<Appointment>>,
}

impl User {
    /// First user whose email matches exactly
    pub fn find_by_email(users: Vec<User>, email: &str) -> Option<User> {
        users
            .into_iter()
            .find(|user| user.email.as_deref() == Some(email))
    }

    /// Name for greetings and listings, falling back to the email
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.email.as_deref())
            .unwrap_or("")
    }
}

/// An appointment as returned by the API. Whether it is upcoming or past is
/// never stored; see [`Appointment::has_passed`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "clienteId", default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(rename = "barbeiroId", default, skip_serializing_if = "Option::is_none")]
    pub barber_id: Option<String>,
    /// Timestamp as sent by the server, naive local or RFC 3339
    #[serde(rename = "dataHora", default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(rename = "cliente", default, skip_serializing_if = "Option::is_none")]
    pub client: Option<User>,
    #[serde(rename = "barbeiro", default, skip_serializing_if = "Option::is_none")]
    pub barber: Option<User>,
}

/// Payload for `POST /Agendamentos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAppointment {
    /// Client-generated UUID v4
    pub id: String,
    #[serde(rename = "clienteId")]
    pub client_id: String,
    #[serde(rename = "barbeiroId")]
    pub barber_id: String,
    /// `YYYY-MM-DDTHH:MM:00.000`, no offset
    #[serde(rename = "dataHora")]
    pub date_time: String,
    #[serde(rename = "cliente")]
    pub client: User,
    #[serde(rename = "barbeiro")]
    pub barber: User,
}

/// Free slots of one barber for the queried date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarberAvailability {
    #[serde(rename = "barbeiroId")]
    pub barber_id: String,
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(rename = "horariosDisponiveis", default)]
    pub available_slots: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

impl LoginResponse {
    /// The token, unless it is missing or empty
    pub fn usable_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
    #[serde(rename = "ehBarbeiro")]
    pub is_barber: bool,
}

/// Body of a successful registration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisteredUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "ehBarbeiro", default)]
    pub is_barber: bool,
}
