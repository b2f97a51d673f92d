use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::Locale;
use crate::dates::short_formatted_due_date;

/// A task record as the API returns it. Unknown fields are dropped; null
/// and missing fields are tolerated.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTask {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub starred: Option<bool>,
    #[serde(default)]
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub starred: bool,
    pub due_date: Option<NaiveDate>,
}

impl From<RawTask> for Task {
    fn from(raw: RawTask) -> Self {
        Self {
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            starred: raw.starred.unwrap_or_default(),
            due_date: raw.due_date.as_deref().and_then(parse_due_date),
        }
    }
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp (taken in local time).
fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => Some(ts.with_timezone(&Local).date_naive()),
        Err(err) => {
            tracing::debug!(raw, %err, "unparseable due_date");
            None
        }
    }
}

impl Task {
    /// Whole days from `today` to the due date; negative once past.
    pub fn days_to_task(&self, today: NaiveDate) -> Option<i64> {
        self.due_date.map(|due| (due - today).num_days())
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.days_to_task(today).is_some_and(|days| days <= 0)
    }

    pub fn formatted_due_date(&self, locale: Locale) -> String {
        self.due_date
            .map(|due| short_formatted_due_date(due, locale))
            .unwrap_or_default()
    }

    pub fn display_line(&self, today: NaiveDate, locale: Locale) -> String {
        let star = if self.starred { '*' } else { ' ' };
        let suffix = match self.days_to_task(today) {
            Some(days) if days <= 0 => overdue_suffix(days.unsigned_abs(), locale),
            _ => " ".to_owned(),
        };
        format!(
            "  {star}  {}  {} {suffix}",
            self.title,
            self.formatted_due_date(locale)
        )
    }
}

fn overdue_suffix(days: u64, locale: Locale) -> String {
    match locale {
        Locale::Zh => format!("(过期 {days} 天)"),
        Locale::En => format!("(overdue {days} days)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn task(title: &str, starred: bool, due: Option<&str>) -> Task {
        Task::from(RawTask {
            id: 1,
            title: Some(title.into()),
            starred: Some(starred),
            due_date: due.map(str::to_owned),
        })
    }

    #[test]
    fn projection_drops_unknown_fields() {
        let raw: RawTask = serde_json::from_value(serde_json::json!({
            "id": 9,
            "title": "Buy milk",
            "starred": true,
            "due_date": "2026-10-20",
            "created_at": "2026-01-01T00:00:00Z",
            "list_id": 3
        }))
        .unwrap();
        let task = Task::from(raw);
        assert_eq!(task.id, 9);
        assert_eq!(task.title, "Buy milk");
        assert!(task.starred);
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2026, 10, 20));
    }

    #[test]
    fn missing_optional_fields_default() {
        let raw: RawTask =
            serde_json::from_value(serde_json::json!({"id": 1, "title": "x"})).unwrap();
        let task = Task::from(raw);
        assert!(!task.starred);
        assert!(task.due_date.is_none());
    }

    #[test]
    fn null_fields_project_to_defaults() {
        let raw: RawTask = serde_json::from_value(serde_json::json!({
            "id": 2,
            "title": null,
            "starred": null,
            "due_date": null
        }))
        .unwrap();
        let task = Task::from(raw);
        assert_eq!(task.title, "");
        assert!(!task.starred);
        assert!(task.due_date.is_none());
    }

    #[test]
    fn missing_title_projects_to_empty() {
        let raw: RawTask =
            serde_json::from_value(serde_json::json!({"id": 3, "starred": true})).unwrap();
        let task = Task::from(raw);
        assert_eq!(task.title, "");
        assert!(task.starred);
    }

    #[test]
    fn unparseable_due_date_is_absent() {
        assert!(task("x", false, Some("tomorrow")).due_date.is_none());
    }

    #[test]
    fn rfc3339_due_date_accepted() {
        assert!(task("x", false, Some("2026-10-20T12:00:00Z")).due_date.is_some());
    }

    #[test]
    fn no_due_date_is_never_overdue() {
        let t = task("Someday", false, None);
        assert_eq!(t.days_to_task(today()), None);
        assert!(!t.is_overdue(today()));
        assert_eq!(t.formatted_due_date(Locale::Zh), "");
    }

    #[test]
    fn due_today_counts_as_overdue() {
        let t = task("Now", false, Some("2026-10-14"));
        assert_eq!(t.days_to_task(today()), Some(0));
        assert!(t.is_overdue(today()));
        assert!(t.display_line(today(), Locale::Zh).contains("(过期 0 天)"));
    }

    #[test]
    fn past_due_reports_absolute_day_count() {
        for days_ago in [1_i64, 3, 30, 400] {
            let due = today() - chrono::Duration::days(days_ago);
            let t = Task {
                id: 1,
                title: "Late".into(),
                starred: false,
                due_date: Some(due),
            };
            assert!(t.is_overdue(today()));
            let line = t.display_line(today(), Locale::Zh);
            assert!(line.contains(&format!("(过期 {days_ago} 天)")), "{line}");
        }
    }

    #[test]
    fn future_due_date_is_not_overdue() {
        let t = task("Later", false, Some("2026-10-16"));
        assert_eq!(t.days_to_task(today()), Some(2));
        assert!(!t.is_overdue(today()));
    }

    #[test]
    fn display_line_layout() {
        let t = task("Plan", true, Some("2026-10-16"));
        assert_eq!(
            t.display_line(today(), Locale::Zh),
            "  *  Plan   -- 10月16日 (周五)  "
        );
        let t = task("Plan", false, None);
        assert_eq!(t.display_line(today(), Locale::Zh), "     Plan    ");
    }

    #[test]
    fn english_overdue_suffix() {
        let t = task("Late", false, Some("2026-10-12"));
        assert!(t
            .display_line(today(), Locale::En)
            .ends_with("(overdue 2 days)"));
    }
}
