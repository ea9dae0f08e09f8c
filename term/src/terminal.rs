//! Terminal implementations of the app's view and dialog seams.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use todo_core::{Dialogs, TodoId, TodoListView, TodoRow, ViewContext};
use tracing::warn;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Read one line from stdin without stalling the runtime's workers.
///
/// Returns `None` at end of input. Must run on a multi-thread runtime.
pub fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    let read = tokio::task::block_in_place(|| io::stdin().lock().read_line(&mut line))?;
    Ok((read > 0).then_some(line))
}

/// Prints the list to `out` and holds the pending input line.
///
/// A snapshot identical to the last one drawn is not printed again, so
/// steady polling does not scroll the terminal.
pub struct TerminalView<W> {
    input: Mutex<String>,
    drawn: Mutex<Option<TodoListView>>,
    out: Mutex<W>,
}

impl<W: Write + Send + 'static> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            input: Mutex::new(String::new()),
            drawn: Mutex::new(None),
            out: Mutex::new(out),
        }
    }

    pub fn set_input(&self, text: &str) {
        *lock(&self.input) = text.to_string();
    }

    /// Forget the last drawn snapshot so the next `show` always prints.
    pub fn invalidate(&self) {
        *lock(&self.drawn) = None;
    }

    /// The row for `id` as last drawn, with its bound events.
    pub fn row(&self, id: TodoId) -> Option<TodoRow> {
        lock(&self.drawn)
            .as_ref()
            .and_then(|view| view.rows.iter().find(|row| row.id == id).cloned())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send + 'static> ViewContext for TerminalView<W> {
    fn input_value(&self) -> String {
        lock(&self.input).clone()
    }

    fn clear_input(&self) {
        lock(&self.input).clear();
    }

    fn show(&self, view: &TodoListView) {
        let mut drawn = lock(&self.drawn);
        if drawn.as_ref() == Some(view) {
            return;
        }
        let mut out = lock(&self.out);
        let result = out
            .write_all(format_view(view).as_bytes())
            .and_then(|()| out.flush());
        if let Err(err) = result {
            warn!(%err, "failed to draw todo list");
        }
        *drawn = Some(view.clone());
    }
}

pub fn format_view(view: &TodoListView) -> String {
    let c = view.counters;
    let mut text = format!("\nTotal: {}  Active: {}  Done: {}\n", c.total, c.active, c.done);
    if view.rows.is_empty() {
        text.push_str("  (nothing to do)\n");
    }
    for row in &view.rows {
        let mark = if row.shows_checkmark() { '✓' } else { ' ' };
        let _ = writeln!(text, "  [{mark}] #{:<4} {}", row.id, row.title);
    }
    text
}

/// Confirmations read y/N from stdin; alerts go to stderr.
pub struct TerminalDialogs;

impl Dialogs for TerminalDialogs {
    fn confirm(&self, message: &str) -> bool {
        print!("{message} [y/N] ");
        let _ = io::stdout().flush();
        match read_line() {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(err) => {
                warn!(%err, "failed to read confirmation");
                false
            }
        }
    }

    fn alert(&self, message: &str) {
        let _ = writeln!(io::stderr(), "\x07! {message}");
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
