//! Turns aggregated lists, or a cached record, into widget text.

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::cache::CacheRecord;
use crate::config::Locale;
use crate::list::TaskList;
use crate::output::{Emphasis, OutputBuilder};
use crate::task::Task;

pub const INVALID_REQUEST_MESSAGE: &str =
    "Invalid Request. It is possible that lack of data - Access Token or Client Id";

pub fn task_emphasis(task: &Task, today: NaiveDate) -> Option<Emphasis> {
    if task.is_overdue(today) {
        Some(Emphasis::Alarm)
    } else if task.starred {
        Some(Emphasis::Starred)
    } else {
        None
    }
}

/// Render the live view. Lists without tasks are skipped.
pub fn render_lists(
    output: &mut OutputBuilder,
    lists: &[TaskList],
    now: DateTime<Local>,
    locale: Locale,
) {
    let today = now.date_naive();

    for list in lists.iter().filter(|list| list.task_count() > 0) {
        output.add_line(&format!("{} ( {} )", list.title, list.task_count()), None);
        for task in list.tasks() {
            output.add_line(&task.display_line(today, locale), task_emphasis(task, today));
        }
    }

    output.add_separator();
    output.add_separator();
    output.add_line(&updated_footer(now, locale), None);
}

fn updated_footer(now: DateTime<Local>, locale: Locale) -> String {
    let time = now.format("%H:%M:%S");
    match locale {
        Locale::Zh => format!("更新于:  {time}"),
        Locale::En => format!("Updated:  {time}"),
    }
}

pub fn render_invalid_request(output: &mut OutputBuilder) {
    output.add_line(INVALID_REQUEST_MESSAGE, None).add_separator();
}

/// Append a cached rendering followed by its original render time.
pub fn render_cached(output: &mut OutputBuilder, record: &CacheRecord) {
    output
        .add_line(&record.result, None)
        .add_separator()
        .add_line(
            &format!("Information from cache ( {} )", http_date(record.date)),
            None,
        );
}

/// RFC 1123 form, e.g. `Wed, 14 Oct 2026 08:30:00 GMT`.
pub fn http_date(date: DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
