//! Time slots: parsing `HH:MM` labels, dropping the ones already gone by,
//! and turning a chosen slot into the timestamps the API expects.

use std::fmt;

use chrono::{Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use thiserror::Error;

use crate::clock::Clock;
use crate::BarberAvailability;

/// How far ahead a client may book
pub const BOOKING_WINDOW_MONTHS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("invalid time slot '{0}', expected HH:MM")]
    InvalidSlot(String),
}

/// A bookable `HH:MM` label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    hour: u32,
    minute: u32,
}

impl TimeSlot {
    pub fn parse(label: &str) -> Result<Self, SlotError> {
        let invalid = || SlotError::InvalidSlot(label.to_string());

        let (hour, minute) = label.trim().split_once(':').ok_or_else(invalid)?;
        let hour = parse_component(hour).ok_or_else(invalid)?;
        let minute = parse_component(minute).ok_or_else(invalid)?;

        if hour > 23 || minute > 59 {
            return Err(invalid());
        }

        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Strictly later than `time`, at minute resolution
    pub fn is_after(&self, time: NaiveTime) -> bool {
        self.hour > time.hour() || (self.hour == time.hour() && self.minute > time.minute())
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

fn parse_component(raw: &str) -> Option<u32> {
    if raw.is_empty() || raw.len() > 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Drop the slots that have already started.
///
/// Only applies when `selected_date` is today by calendar day; any other date
/// gets the list back untouched. On today a slot survives only if it is
/// strictly after the current minute, and labels that are not `HH:MM` are
/// dropped.
pub fn filter_elapsed_slots<C>(slots: &[String], selected_date: NaiveDate, clock: &C) -> Vec<String>
where
    C: Clock + ?Sized,
{
    let now = clock.now();
    if selected_date != now.date() {
        return slots.to_vec();
    }

    let current = now.time();
    slots
        .iter()
        .filter(|label| {
            TimeSlot::parse(label)
                .map(|slot| slot.is_after(current))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// `YYYY-MM-DDTHH:MM:00.000`, a naive local timestamp without offset
pub fn combine_date_time(date: NaiveDate, slot: &str) -> Result<String, SlotError> {
    let slot = TimeSlot::parse(slot)?;
    Ok(format!(
        "{}T{:02}:{:02}:00.000",
        date.format("%Y-%m-%d"),
        slot.hour(),
        slot.minute()
    ))
}

/// Slots offered by one barber, empty when the barber is not listed
pub fn slots_for_barber(availability: &[BarberAvailability], barber_id: &str) -> Vec<String> {
    availability
        .iter()
        .find(|entry| entry.barber_id == barber_id)
        .map(|entry| entry.available_slots.clone())
        .unwrap_or_default()
}

/// Value of the `data` query parameter: local midnight of `date` in `tz`
/// expressed as a UTC instant, e.g. `2025-06-15T03:00:00.000Z` for UTC-3.
///
/// When midnight does not exist locally (DST gap) the first existing hour of
/// the day is used.
pub fn availability_query_timestamp<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> String {
    let instant = (0..=2)
        .filter_map(|hour| date.and_hms_opt(hour, 0, 0))
        .find_map(|local| tz.from_local_datetime(&local).earliest())
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));

    instant.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// First and last bookable day
pub fn booking_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let last = today
        .checked_add_months(Months::new(BOOKING_WINDOW_MONTHS))
        .unwrap_or(NaiveDate::MAX);
    (today, last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::FixedOffset;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_time_slot() {
        let slot = TimeSlot::parse("09:05").unwrap();
        assert_eq!((slot.hour(), slot.minute()), (9, 5));
        assert_eq!(slot.to_string(), "09:05");
        assert_eq!(TimeSlot::parse("9:05").unwrap().to_string(), "09:05");

        for bad in ["", "0905", "24:00", "12:60", "ab:cd", "12:5a", "123:00", "-1:00", "+1:00"] {
            assert_eq!(TimeSlot::parse(bad), Err(SlotError::InvalidSlot(bad.to_string())), "{bad}");
        }
    }

    #[test]
    fn test_filter_keeps_only_future_slots_today() {
        let clock = FixedClock::at(2025, 6, 15, 12, 10).unwrap();
        let slots = labels(&["09:00", "10:00", "12:00", "12:15"]);
        assert_eq!(filter_elapsed_slots(&slots, date(2025, 6, 15), &clock), labels(&["12:15"]));
    }

    #[test]
    fn test_filter_excludes_the_current_minute() {
        let clock = FixedClock::at(2025, 6, 15, 12, 15).unwrap();
        let slots = labels(&["12:15", "12:16", "13:00"]);
        assert_eq!(
            filter_elapsed_slots(&slots, date(2025, 6, 15), &clock),
            labels(&["12:16", "13:00"])
        );
    }

    #[test]
    fn test_filter_preserves_order() {
        let clock = FixedClock::at(2025, 6, 15, 8, 0).unwrap();
        let slots = labels(&["17:00", "09:00", "07:30", "12:00"]);
        assert_eq!(
            filter_elapsed_slots(&slots, date(2025, 6, 15), &clock),
            labels(&["17:00", "09:00", "12:00"])
        );
    }

    #[test]
    fn test_filter_is_identity_on_other_days() {
        let clock = FixedClock::at(2025, 6, 15, 23, 59).unwrap();
        let slots = labels(&["09:00", "garbage", "23:30"]);
        for day in [date(2025, 6, 16), date(2025, 7, 15), date(2026, 6, 15)] {
            assert_eq!(filter_elapsed_slots(&slots, day, &clock), slots);
        }
    }

    #[test]
    fn test_filter_compares_calendar_days() {
        // 00:30 tomorrow is less than 24h away but is not today
        let clock = FixedClock::at(2025, 6, 15, 23, 50).unwrap();
        let slots = labels(&["00:30"]);
        assert_eq!(filter_elapsed_slots(&slots, date(2025, 6, 16), &clock), slots);
        assert!(filter_elapsed_slots(&slots, date(2025, 6, 15), &clock).is_empty());
    }

    #[test]
    fn test_filter_drops_unparsable_labels_today() {
        let clock = FixedClock::at(2025, 6, 15, 8, 0).unwrap();
        let slots = labels(&["nope", "09:00"]);
        assert_eq!(filter_elapsed_slots(&slots, date(2025, 6, 15), &clock), labels(&["09:00"]));
    }

    #[test]
    fn test_combine_date_time() {
        assert_eq!(
            combine_date_time(date(2025, 6, 15), "09:05").unwrap(),
            "2025-06-15T09:05:00.000"
        );
        assert_eq!(
            combine_date_time(date(2025, 1, 2), "23:59").unwrap(),
            "2025-01-02T23:59:00.000"
        );
        assert!(combine_date_time(date(2025, 1, 2), "25:00").is_err());
    }

    #[test]
    fn test_slots_for_barber() {
        let availability = vec![
            BarberAvailability {
                barber_id: "b1".into(),
                name: Some("Peri".into()),
                available_slots: labels(&["09:00"]),
            },
            BarberAvailability {
                barber_id: "b2".into(),
                name: None,
                available_slots: labels(&["10:00", "11:00"]),
            },
        ];
        assert_eq!(slots_for_barber(&availability, "b2"), labels(&["10:00", "11:00"]));
        assert!(slots_for_barber(&availability, "b3").is_empty());
    }

    #[test]
    fn test_availability_query_timestamp() {
        let brasilia = FixedOffset::west_opt(3 * 3600).unwrap();
        assert_eq!(
            availability_query_timestamp(date(2025, 6, 15), &brasilia),
            "2025-06-15T03:00:00.000Z"
        );
        assert_eq!(
            availability_query_timestamp(date(2025, 6, 15), &Utc),
            "2025-06-15T00:00:00.000Z"
        );
    }

    #[test]
    fn test_booking_window() {
        assert_eq!(booking_window(date(2025, 6, 15)), (date(2025, 6, 15), date(2025, 8, 15)));
        assert_eq!(booking_window(date(2025, 12, 31)), (date(2025, 12, 31), date(2026, 2, 28)));
    }
}
