//! Two-level fetch: all lists, then the tasks of every list concurrently.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::RequestError;
use crate::http::{tasks_path, Transport, LISTS_PATH};
use crate::list::{RawList, TaskList};
use crate::task::{RawTask, Task};

/// Fetch every list and attach its tasks.
///
/// # Pipeline
///
/// 1. One GET for the list collection; a failure here is returned as is.
/// 2. One GET per list, all dispatched at once with
///    [`futures::future::join_all`]. Every fetch runs to completion, even
///    after another one has failed.
/// 3. If any fetch failed, the first error in list order is returned and no
///    list data escapes. Otherwise each list gets its tasks in API order.
///
/// Output order is the order of the list collection, whatever order the
/// per-list fetches complete in.
pub async fn fetch_lists_with_tasks<T: Transport>(
    client: &T,
) -> Result<Vec<TaskList>, RequestError> {
    let mut lists = fetch_lists(client).await?;

    let fetches = lists.iter().map(|list| fetch_tasks_for_list(client, list.id));
    let outcomes = futures::future::join_all(fetches).await;

    let task_sets = outcomes.into_iter().collect::<Result<Vec<_>, _>>()?;
    for (list, tasks) in lists.iter_mut().zip(task_sets) {
        tracing::debug!(list_id = list.id, count = tasks.len(), "tasks attached");
        list.tasks = Some(tasks);
    }

    Ok(lists)
}

async fn fetch_lists<T: Transport>(client: &T) -> Result<Vec<TaskList>, RequestError> {
    let raw: Vec<RawList> = decode(client.get(LISTS_PATH).await?)?;
    tracing::debug!(count = raw.len(), "lists fetched");
    Ok(raw.into_iter().map(TaskList::from).collect())
}

async fn fetch_tasks_for_list<T: Transport>(
    client: &T,
    list_id: u64,
) -> Result<Vec<Task>, RequestError> {
    let path = tasks_path(list_id);
    let raw: Vec<RawTask> = decode(client.get(&path).await?)?;
    Ok(raw.into_iter().map(Task::from).collect())
}

fn decode<R: DeserializeOwned>(value: Value) -> Result<R, RequestError> {
    serde_json::from_value(value)
        .map_err(|e| RequestError::Transport(format!("unexpected response shape: {e}")))
}
