//! Render cycle: aggregate, print, cache; or fall back to the cached output.

use std::io::Write;

use chrono::{Local, Utc};

use crate::aggregate::fetch_lists_with_tasks;
use crate::cache::{CacheRecord, FileCache, OUTPUT_RECORD};
use crate::config::Locale;
use crate::error::RequestError;
use crate::http::Transport;
use crate::list::TaskList;
use crate::output::OutputBuilder;
use crate::ui;

pub struct App<T> {
    client: T,
    cache: FileCache,
    locale: Locale,
}

impl<T: Transport> App<T> {
    pub fn new(client: T, cache: FileCache, locale: Locale) -> Self {
        Self {
            client,
            cache,
            locale,
        }
    }

    /// Run one render cycle, writing the widget text to `sink`.
    ///
    /// Never fails: request errors fall back to the cache, and sink or cache
    /// write errors are only logged.
    pub async fn run<W: Write>(&self, sink: &mut W) {
        match fetch_lists_with_tasks(&self.client).await {
            Ok(lists) => self.render_fresh(&lists, sink).await,
            Err(err) => self.render_fallback(&err, sink).await,
        }
    }

    async fn render_fresh<W: Write>(&self, lists: &[TaskList], sink: &mut W) {
        let mut output = OutputBuilder::new();
        ui::render_lists(&mut output, lists, Local::now(), self.locale);
        emit(&output, sink);

        // Written after the output is emitted and awaited only so the process
        // does not exit first; a failed write leaves the previous record.
        let record = CacheRecord {
            result: output.into_result(),
            date: Utc::now(),
        };
        if let Err(err) = self.cache.save_value(OUTPUT_RECORD, &record).await {
            tracing::debug!(error = %err, "cache write failed");
        }
    }

    async fn render_fallback<W: Write>(&self, err: &RequestError, sink: &mut W) {
        tracing::warn!(error = %err, "aggregation failed, falling back to cache");

        let mut output = OutputBuilder::new();
        if err.is_invalid_request() {
            ui::render_invalid_request(&mut output);
        }

        match self.cache.get_value(OUTPUT_RECORD).await {
            Ok(record) => {
                ui::render_cached(&mut output, &record);
                emit(&output, sink);
            }
            Err(cache_err) => {
                tracing::debug!(error = %cache_err, "no cached output");
                if !output.is_empty() {
                    emit(&output, sink);
                }
            }
        }
    }
}

fn emit<W: Write>(output: &OutputBuilder, sink: &mut W) {
    if let Err(err) = output.print(sink) {
        tracing::warn!(error = %err, "failed to write output");
    }
}
