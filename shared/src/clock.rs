use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of the local wall-clock time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the machine's local time. In the browser this is the user's zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_opt(hour, minute, 0)
            .map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_reports_its_instant() {
        let clock = FixedClock::at(2025, 6, 15, 12, 10).unwrap();
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert_eq!(clock.now().format("%H:%M").to_string(), "12:10");
    }

    #[test]
    fn test_fixed_clock_rejects_impossible_dates() {
        assert!(FixedClock::at(2025, 2, 30, 0, 0).is_none());
        assert!(FixedClock::at(2025, 1, 1, 24, 0).is_none());
    }
}
