//! # wunderlist-geektool
//!
//! Prints Wunderlist lists and tasks as plain text for a desktop widget
//! (GeekTool, Übersicht, conky and friends).
//!
//! Each run fetches all lists, then the tasks of every list concurrently,
//! renders them, and stores the rendering on disk. When the API cannot be
//! reached the last stored rendering is shown instead, labelled with the time
//! it was produced.

pub mod aggregate;
pub mod app;
pub mod cache;
pub mod config;
pub mod dates;
pub mod error;
pub mod http;
pub mod list;
pub mod output;
pub mod task;
pub mod ui;

pub use app::App;
pub use cache::{CacheRecord, FileCache};
pub use config::{Config, Locale};
pub use error::{CacheError, RequestError, Result};
pub use http::{ApiClient, Transport};
pub use list::TaskList;
pub use task::Task;
