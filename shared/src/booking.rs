use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::slots::{combine_date_time, SlotError};
use crate::{NewAppointment, User};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("barber, date and time slot must all be selected")]
    Incomplete,
    #[error("no authenticated client with an identifier")]
    NotAuthenticated,
    #[error("selected barber has no identifier")]
    MissingBarberId,
    #[error(transparent)]
    Slot(#[from] SlotError),
}

impl BookingError {
    /// Notification text for the booking screen
    pub fn user_message(&self) -> &'static str {
        match self {
            BookingError::Incomplete => "Selecione o barbeiro, a data e o horário.",
            BookingError::NotAuthenticated => {
                "Erro de autenticação. Por favor, faça login novamente."
            }
            BookingError::MissingBarberId | BookingError::Slot(_) => {
                "Não foi possível realizar o agendamento. Tente novamente."
            }
        }
    }
}

/// Selection state of the booking screen.
///
/// Choosing a barber clears the date and slot; choosing a date clears the
/// slot. Slots are always relative to the current barber and date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDraft {
    barber: Option<User>,
    date: Option<NaiveDate>,
    slot: Option<String>,
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn barber(&self) -> Option<&User> {
        self.barber.as_ref()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn slot(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    pub fn select_barber(&mut self, barber: User) {
        self.barber = Some(barber);
        self.date = None;
        self.slot = None;
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
        self.slot = None;
    }

    pub fn select_slot(&mut self, slot: impl Into<String>) {
        self.slot = Some(slot.into());
    }

    pub fn is_complete(&self) -> bool {
        self.barber.is_some() && self.date.is_some() && self.slot.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply the outcome of submitting this draft. A booked draft starts
    /// over; a failed one keeps every choice so the user can retry.
    ///
    /// Returns `true` when the draft was cleared.
    pub fn after_submit(&mut self, succeeded: bool) -> bool {
        if succeeded {
            self.reset();
        }
        succeeded
    }

    /// Build the creation payload for `client` with a fresh UUID
    pub fn build_request(&self, client: Option<&User>) -> Result<NewAppointment, BookingError> {
        let (Some(barber), Some(date), Some(slot)) = (&self.barber, self.date, &self.slot) else {
            return Err(BookingError::Incomplete);
        };

        let client = client.ok_or(BookingError::NotAuthenticated)?;
        let client_id = client
            .id
            .clone()
            .filter(|id| !id.is_empty())
            .ok_or(BookingError::NotAuthenticated)?;
        let barber_id = barber
            .id
            .clone()
            .filter(|id| !id.is_empty())
            .ok_or(BookingError::MissingBarberId)?;

        Ok(NewAppointment {
            id: Uuid::new_v4().to_string(),
            client_id,
            barber_id,
            date_time: combine_date_time(date, slot)?,
            client: client.clone(),
            barber: barber.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{barber, client};

    fn june_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn complete_draft() -> BookingDraft {
        let mut draft = BookingDraft::new();
        draft.select_barber(barber());
        draft.select_date(june_15());
        draft.select_slot("09:05");
        draft
    }

    #[test]
    fn test_failed_submit_keeps_choices() {
        let mut draft = complete_draft();
        assert!(!draft.after_submit(false));

        assert_eq!(draft.barber(), Some(&barber()));
        assert_eq!(draft.date(), Some(june_15()));
        assert_eq!(draft.slot(), Some("09:05"));
        assert!(draft.is_complete());
    }

    #[test]
    fn test_successful_submit_clears_choices() {
        let mut draft = complete_draft();
        assert!(draft.after_submit(true));

        assert_eq!(draft, BookingDraft::new());
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_selection_resets_downstream_choices() {
        let mut draft = complete_draft();
        assert!(draft.is_complete());

        draft.select_date(NaiveDate::from_ymd_opt(2025, 6, 16).unwrap());
        assert_eq!(draft.slot(), None);
        assert!(draft.barber().is_some());

        draft.select_slot("10:00");
        draft.select_barber(barber());
        assert_eq!(draft.date(), None);
        assert_eq!(draft.slot(), None);
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_build_request_requires_every_selection() {
        let mut draft = BookingDraft::new();
        assert_eq!(draft.build_request(Some(&client())), Err(BookingError::Incomplete));

        draft.select_barber(barber());
        draft.select_date(june_15());
        assert_eq!(draft.build_request(Some(&client())), Err(BookingError::Incomplete));
    }

    #[test]
    fn test_build_request_requires_client_with_id() {
        let draft = complete_draft();
        assert_eq!(draft.build_request(None), Err(BookingError::NotAuthenticated));

        let anonymous = User { id: None, ..client() };
        assert_eq!(draft.build_request(Some(&anonymous)), Err(BookingError::NotAuthenticated));
    }

    #[test]
    fn test_build_request_requires_barber_id() {
        let mut draft = BookingDraft::new();
        draft.select_barber(User { id: None, ..barber() });
        draft.select_date(june_15());
        draft.select_slot("09:05");
        assert_eq!(draft.build_request(Some(&client())), Err(BookingError::MissingBarberId));
    }

    #[test]
    fn test_build_request_rejects_malformed_slot() {
        let mut draft = complete_draft();
        draft.select_slot("9h");
        assert!(matches!(
            draft.build_request(Some(&client())),
            Err(BookingError::Slot(SlotError::InvalidSlot(_)))
        ));
    }

    #[test]
    fn test_build_request_composes_payload() {
        let draft = complete_draft();
        let request = draft.build_request(Some(&client())).unwrap();

        assert!(Uuid::parse_str(&request.id).is_ok());
        assert_eq!(request.client_id, "client-1");
        assert_eq!(request.barber_id, "barber-1");
        assert_eq!(request.date_time, "2025-06-15T09:05:00.000");
        assert_eq!(request.client, client());
        assert_eq!(request.barber, barber());

        let again = draft.build_request(Some(&client())).unwrap();
        assert_ne!(request.id, again.id);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut draft = complete_draft();
        draft.reset();
        assert_eq!(draft, BookingDraft::default());
    }
}
