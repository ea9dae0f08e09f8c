//! Pure view model: counters and rows derived from a fetched snapshot.
//!
//! `render` never looks at previous state. Hosts receive a complete
//! `TodoListView` and replace whatever they showed before with it.

use crate::types::{Todo, TodoId};

/// User interactions a host forwards to `TodoApp::dispatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Add button clicked or Enter pressed in the input field.
    Submit,
    MarkDone(TodoId),
    Delete(TodoId),
}

/// Summary counts shown above the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub total: usize,
    pub active: usize,
    pub done: usize,
}

/// One displayed todo with the events bound to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
    /// `None` once the todo is done; the host shows a checkmark instead.
    pub mark_done: Option<UiEvent>,
    pub delete: UiEvent,
}

impl TodoRow {
    pub fn shows_checkmark(&self) -> bool {
        self.mark_done.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoListView {
    pub counters: Counters,
    pub rows: Vec<TodoRow>,
}

/// Build the view for a freshly fetched snapshot.
///
/// Rows come out in reverse of the received order, so the last todo the
/// backend returned is displayed first.
pub fn render(todos: Vec<Todo>) -> TodoListView {
    let done = todos.iter().filter(|t| t.done).count();
    let counters = Counters {
        total: todos.len(),
        active: todos.len() - done,
        done,
    };

    let rows = todos
        .into_iter()
        .rev()
        .map(|todo| TodoRow {
            id: todo.id,
            mark_done: (!todo.done).then_some(UiEvent::MarkDone(todo.id)),
            delete: UiEvent::Delete(todo.id),
            title: todo.title,
            done: todo.done,
        })
        .collect();

    TodoListView { counters, rows }
}
