use chrono::{DateTime, Local, NaiveDateTime};

use crate::Appointment;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a server timestamp into local wall time.
///
/// Naive timestamps are taken as local already; RFC 3339 values are converted
/// into the local zone.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

impl Appointment {
    pub fn scheduled_at(&self) -> Option<NaiveDateTime> {
        self.date_time.as_deref().and_then(parse_timestamp)
    }

    /// Computed at read time; unknown dates never count as passed
    pub fn has_passed(&self, now: NaiveDateTime) -> bool {
        self.scheduled_at().is_some_and(|at| at < now)
    }
}

/// Upcoming appointments soonest first, then past ones most recent first.
/// Appointments without a readable date are left out.
pub fn order_appointments(appointments: Vec<Appointment>, now: NaiveDateTime) -> Vec<Appointment> {
    let (mut upcoming, mut past): (Vec<_>, Vec<_>) = appointments
        .into_iter()
        .filter_map(|appointment| appointment.scheduled_at().map(|at| (at, appointment)))
        .partition(|(at, _)| *at >= now);

    upcoming.sort_by_key(|(at, _)| *at);
    past.sort_by(|(a, _), (b, _)| b.cmp(a));

    upcoming
        .into_iter()
        .chain(past)
        .map(|(_, appointment)| appointment)
        .collect()
}

/// `dd/MM/yyyy HH:mm`
pub fn format_appointment_time(at: NaiveDateTime) -> String {
    at.format("%d/%m/%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, FixedClock};

    fn appointment(id: &str, date_time: Option<&str>) -> Appointment {
        Appointment {
            id: Some(id.to_string()),
            date_time: date_time.map(str::to_string),
            ..Appointment::default()
        }
    }

    fn ids(appointments: &[Appointment]) -> Vec<&str> {
        appointments.iter().filter_map(|a| a.id.as_deref()).collect()
    }

    #[test]
    fn test_parse_naive_timestamps() {
        let expected = FixedClock::at(2025, 6, 15, 9, 5).unwrap().now();
        assert_eq!(parse_timestamp("2025-06-15T09:05:00.000"), Some(expected));
        assert_eq!(parse_timestamp("2025-06-15T09:05:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-06-15T09:05"), Some(expected));
        assert_eq!(parse_timestamp("15/06/2025"), None);
    }

    #[test]
    fn test_parse_rfc3339_converts_to_local() {
        let parsed = parse_timestamp("2025-06-15T12:00:00Z").unwrap();
        let expected = DateTime::parse_from_rfc3339("2025-06-15T12:00:00Z")
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_has_passed() {
        let now = FixedClock::at(2025, 6, 15, 12, 0).unwrap().now();
        assert!(appointment("a", Some("2025-06-15T11:59:00")).has_passed(now));
        assert!(!appointment("b", Some("2025-06-15T12:00:00")).has_passed(now));
        assert!(!appointment("c", None).has_passed(now));
        assert!(!appointment("d", Some("not a date")).has_passed(now));
    }

    #[test]
    fn test_order_appointments() {
        let now = FixedClock::at(2025, 6, 15, 12, 0).unwrap().now();
        let appointments = vec![
            appointment("past-old", Some("2025-05-01T10:00:00")),
            appointment("future-late", Some("2025-07-01T10:00:00")),
            appointment("undated", None),
            appointment("past-recent", Some("2025-06-15T11:00:00")),
            appointment("future-soon", Some("2025-06-15T12:00:00")),
        ];

        let ordered = order_appointments(appointments, now);
        assert_eq!(
            ids(&ordered),
            vec!["future-soon", "future-late", "past-recent", "past-old"]
        );
    }

    #[test]
    fn test_format_appointment_time() {
        let at = FixedClock::at(2025, 6, 5, 9, 5).unwrap().now();
        assert_eq!(format_appointment_time(at), "05/06/2025 09:05");
    }
}
