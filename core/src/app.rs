//! The todo controller: user actions and polls in, requests and renders out.
//!
//! # Design
//! `TodoApp` owns its `ViewContext` and `Dialogs` for its whole lifetime;
//! hosts build them once and hand them over at construction. Every action is
//! a single request followed, on success, by a full `list()` refresh. Failures
//! are logged and swallowed, except a failed create, which also alerts.
//!
//! Overlapping `list()` calls are allowed. Each takes a ticket before its
//! request goes out, and a response is only rendered if its ticket is newer
//! than the last one rendered, so a slow stale response cannot overwrite a
//! fresher snapshot.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use tracing::{debug, error};

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, Transport};
use crate::types::{CreateTodo, Todo, TodoId};
use crate::view::{render, TodoListView, UiEvent};

pub const CONFIRM_DELETE: &str = "Are you sure?";
pub const CREATE_FAILED: &str = "Error adding task. Check logs for details.";

/// The surface a host renders into.
pub trait ViewContext: Send + Sync + 'static {
    /// Current contents of the new-todo input field.
    fn input_value(&self) -> String;

    fn clear_input(&self);

    /// Replace everything displayed with `view`.
    fn show(&self, view: &TodoListView);
}

/// Modal prompts provided by the host.
pub trait Dialogs: Send + Sync + 'static {
    /// Blocks until the user answers.
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);
}

pub struct TodoApp<T, V, D> {
    client: TodoClient,
    transport: T,
    view: V,
    dialogs: D,
    issued: AtomicU64,
    rendered: Mutex<u64>,
}

impl<T, V, D> TodoApp<T, V, D>
where
    T: Transport,
    V: ViewContext,
    D: Dialogs,
{
    pub fn new(client: TodoClient, transport: T, view: V, dialogs: D) -> Self {
        Self {
            client,
            transport,
            view,
            dialogs,
            issued: AtomicU64::new(0),
            rendered: Mutex::new(0),
        }
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    /// Fetch the full collection and render it.
    pub async fn list(&self) {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let request = self.client.build_list_todos();
        let result = self
            .transport
            .execute(request)
            .await
            .and_then(|response| self.client.parse_list_todos(response));

        match result {
            Ok(todos) => {
                self.apply(ticket, todos);
            }
            Err(err) => error!(%err, "failed to fetch todos"),
        }
    }

    /// Create a todo from `title`. Blank titles are dropped without a request.
    pub async fn create(&self, title: &str) {
        let Some(input) = CreateTodo::from_input(title) else {
            return;
        };

        let result = match self.client.build_create_todo(&input) {
            Ok(request) => self.send(request).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(()) => {
                self.view.clear_input();
                self.list().await;
            }
            Err(err) => {
                error!(%err, title = %input.title, "failed to add todo");
                self.dialogs.alert(CREATE_FAILED);
            }
        }
    }

    /// Create a todo from whatever is in the view's input field.
    pub async fn submit_input(&self) {
        let title = self.view.input_value();
        self.create(&title).await;
    }

    pub async fn complete(&self, id: TodoId) {
        match self.send(self.client.build_mark_done(id)).await {
            Ok(()) => self.list().await,
            Err(err) => error!(%err, %id, "failed to mark todo done"),
        }
    }

    /// Delete a todo after the user confirms. Declining sends nothing.
    pub async fn remove(&self, id: TodoId) {
        if !self.dialogs.confirm(CONFIRM_DELETE) {
            debug!(%id, "delete cancelled");
            return;
        }

        match self.send(self.client.build_delete_todo(id)).await {
            Ok(()) => self.list().await,
            Err(err) => error!(%err, %id, "failed to delete todo"),
        }
    }

    pub async fn dispatch(&self, event: UiEvent) {
        match event {
            UiEvent::Submit => self.submit_input().await,
            UiEvent::MarkDone(id) => self.complete(id).await,
            UiEvent::Delete(id) => self.remove(id).await,
        }
    }

    /// Execute a request whose response body is not needed.
    async fn send(&self, request: HttpRequest) -> Result<(), ApiError> {
        let method = request.method.as_str();
        let response = self.transport.execute(request).await?;
        debug!(method, status = response.status, "request completed");
        Ok(())
    }

    /// Render `todos` unless a newer snapshot has already been rendered.
    fn apply(&self, ticket: u64, todos: Vec<Todo>) -> bool {
        let mut rendered = self.rendered.lock().unwrap_or_else(PoisonError::into_inner);
        if ticket <= *rendered {
            debug!(ticket, latest = *rendered, "discarding stale todo list");
            return false;
        }
        *rendered = ticket;
        self.view.show(&render(todos));
        true
    }
}
