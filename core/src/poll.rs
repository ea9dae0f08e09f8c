//! Fixed-interval refresh of the todo list.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, trace};

use crate::app::{Dialogs, TodoApp, ViewContext};
use crate::http::Transport;

/// Shortest accepted poll period; a zero `every` is raised to this.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Refresh `app` now and then every `every`, until the handle is aborted.
///
/// Each tick runs its `list()` on its own task, so a slow response never
/// delays the next poll. Overlapping polls are resolved by the app's ticket
/// check, not here.
pub fn spawn_poller<T, V, D>(app: Arc<TodoApp<T, V, D>>, every: Duration) -> JoinHandle<()>
where
    T: Transport,
    V: ViewContext,
    D: Dialogs,
{
    let every = every.max(MIN_POLL_INTERVAL);
    tokio::spawn(async move {
        info!(interval_ms = every.as_millis() as u64, "polling todos");
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            trace!("poll tick");
            let app = Arc::clone(&app);
            tokio::spawn(async move { app.list().await });
        }
    })
}
