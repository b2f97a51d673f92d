//! Calendar name lookups and the short due-date form shown next to a task.

use chrono::{Datelike, NaiveDate};

use crate::config::Locale;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DAY_NAMES_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const DAY_NAMES_ZH: [&str; 7] = ["周日", "周一", "周二", "周三", "周四", "周五", "周六"];

pub fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

pub fn short_month_name(date: NaiveDate) -> &'static str {
    &month_name(date)[..3]
}

/// Weekday name in `locale`, Sunday first.
pub fn day_name(date: NaiveDate, locale: Locale) -> &'static str {
    let index = date.weekday().num_days_from_sunday() as usize;
    match locale {
        Locale::Zh => DAY_NAMES_ZH[index],
        Locale::En => DAY_NAMES_EN[index],
    }
}

/// Abbreviated weekday name. Chinese names are already short.
pub fn short_day_name(date: NaiveDate, locale: Locale) -> &'static str {
    match locale {
        Locale::Zh => day_name(date, locale),
        Locale::En => &day_name(date, locale)[..3],
    }
}

/// Due-date suffix for a task line, e.g. ` -- 10月14日 (周三)`.
pub fn short_formatted_due_date(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::Zh => format!(
            " -- {}月{}日 ({})",
            date.month(),
            date.day(),
            day_name(date, locale)
        ),
        Locale::En => format!(
            " -- {}, {} {}",
            short_day_name(date, locale),
            date.day(),
            short_month_name(date)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_names_are_calendar_ordered() {
        assert_eq!(month_name(date(2026, 1, 1)), "January");
        assert_eq!(month_name(date(2026, 12, 31)), "December");
        assert_eq!(short_month_name(date(2026, 10, 14)), "Oct");
    }

    #[test]
    fn day_names_start_on_sunday() {
        // 2026-10-11 is a Sunday.
        assert_eq!(day_name(date(2026, 10, 11), Locale::Zh), "周日");
        assert_eq!(day_name(date(2026, 10, 14), Locale::Zh), "周三");
        assert_eq!(day_name(date(2026, 10, 14), Locale::En), "Wednesday");
        assert_eq!(short_day_name(date(2026, 10, 14), Locale::En), "Wed");
        assert_eq!(short_day_name(date(2026, 10, 14), Locale::Zh), "周三");
    }

    #[test]
    fn chinese_short_form_uses_calendar_month() {
        assert_eq!(
            short_formatted_due_date(date(2026, 10, 14), Locale::Zh),
            " -- 10月14日 (周三)"
        );
        assert_eq!(
            short_formatted_due_date(date(2026, 1, 3), Locale::Zh),
            " -- 1月3日 (周六)"
        );
    }

    #[test]
    fn english_short_form() {
        assert_eq!(
            short_formatted_due_date(date(2026, 10, 14), Locale::En),
            " -- Wed, 14 Oct"
        );
    }
}
