use chrono::{Datelike, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho",
    "Julho", "Agosto", "Setembro", "Outubro", "Novembro", "Dezembro",
];

/// Sunday first, matching the grid from [`calendar_days`]
pub const WEEKDAY_LABELS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

/// Six weeks, enough for any month
const GRID_DAYS: usize = 42;

/// Portuguese month name for 1-12
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or(MONTH_NAMES[0])
}

/// Year and month `delta` months away
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 + delta;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

/// e.g. "15 de Junho de 2025"
pub fn format_date_for_display(date: NaiveDate) -> String {
    format!("{} de {} de {}", date.day(), month_name(date.month()), date.year())
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_current_month: bool,
    /// Inside the bookable window
    pub is_selectable: bool,
}

impl CalendarDay {
    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

/// 42-day grid for `month`, padded with the surrounding months' days.
/// Days outside `window` (inclusive) are not selectable.
pub fn calendar_days(year: i32, month: u32, window: (NaiveDate, NaiveDate)) -> Vec<CalendarDay> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let leading = first.weekday().num_days_from_sunday() as i64;
    let (min, max) = window;

    first
        .checked_sub_signed(chrono::Duration::days(leading))
        .map(|start| {
            start
                .iter_days()
                .take(GRID_DAYS)
                .map(|date| CalendarDay {
                    date,
                    is_current_month: date.month() == month && date.year() == year,
                    is_selectable: date >= min && date <= max,
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_shift_month_wraps_years() {
        assert_eq!(shift_month(2025, 1, -1), (2024, 12));
        assert_eq!(shift_month(2025, 12, 1), (2026, 1));
        assert_eq!(shift_month(2025, 6, 2), (2025, 8));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(3), "Março");
        assert_eq!(month_name(12), "Dezembro");
        assert_eq!(format_date_for_display(date(2025, 6, 15)), "15 de Junho de 2025");
    }

    #[test]
    fn test_calendar_grid_layout() {
        // June 2025 starts on a Sunday
        let days = calendar_days(2025, 6, (date(2025, 6, 10), date(2025, 8, 10)));
        assert_eq!(days.len(), 42);
        assert_eq!(days[0].date, date(2025, 6, 1));
        assert!(days[0].is_current_month);
        assert!(!days[0].is_selectable);
        assert!(days[9].is_selectable);
        assert_eq!(days[41].date, date(2025, 7, 12));
        assert!(!days[41].is_current_month);
    }

    #[test]
    fn test_calendar_grid_pads_previous_month() {
        // October 2025 starts on a Wednesday
        let window = (date(2025, 10, 1), date(2025, 12, 1));
        let days = calendar_days(2025, 10, window);
        assert_eq!(days[0].date, date(2025, 9, 28));
        assert!(!days[0].is_current_month);
        assert_eq!(days[3].date, date(2025, 10, 1));
        assert_eq!(days[3].day(), 1);
        assert!(days[3].is_selectable);
    }
}
