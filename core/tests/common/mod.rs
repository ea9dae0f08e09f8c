//! Scripted transport and recording host seams shared by the test suites.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use tokio::sync::oneshot;
use todo_core::{ApiError, Dialogs, HttpRequest, HttpResponse, TodoListView, Transport, ViewContext};

pub enum Reply {
    Ok(HttpResponse),
    Fail(&'static str),
    /// Held until the sender side delivers the response.
    Gated(oneshot::Receiver<HttpResponse>),
}

pub fn ok(body: &str) -> Reply {
    Reply::Ok(HttpResponse::new(200, body))
}

/// Replays scripted replies in order and records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    requests: Mutex<Vec<HttpRequest>>,
    replies: Mutex<VecDeque<Reply>>,
}

impl ScriptedTransport {
    pub fn with(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            replies: Mutex::new(replies.into_iter().collect()),
        }
    }

    pub fn push(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// `"METHOD path"` for each request, in order.
    pub fn calls(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| format!("{} {}", r.method.as_str(), r.path))
            .collect()
    }
}

impl Transport for ScriptedTransport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, ApiError>> + Send {
        self.requests.lock().unwrap().push(request);
        let reply = self.replies.lock().unwrap().pop_front();
        async move {
            match reply {
                Some(Reply::Ok(response)) => Ok(response),
                Some(Reply::Fail(msg)) => Err(ApiError::Transport(msg.to_string())),
                Some(Reply::Gated(rx)) => rx
                    .await
                    .map_err(|_| ApiError::Transport("gate dropped".to_string())),
                None => Err(ApiError::Transport("no scripted reply".to_string())),
            }
        }
    }
}

/// Input field plus every view it was asked to show.
#[derive(Default)]
pub struct RecordingView {
    input: Mutex<String>,
    shown: Mutex<Vec<TodoListView>>,
}

impl RecordingView {
    pub fn type_input(&self, text: &str) {
        *self.input.lock().unwrap() = text.to_string();
    }

    pub fn input(&self) -> String {
        self.input.lock().unwrap().clone()
    }

    pub fn shown(&self) -> Vec<TodoListView> {
        self.shown.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<TodoListView> {
        self.shown.lock().unwrap().last().cloned()
    }
}

impl ViewContext for RecordingView {
    fn input_value(&self) -> String {
        self.input()
    }

    fn clear_input(&self) {
        self.input.lock().unwrap().clear();
    }

    fn show(&self, view: &TodoListView) {
        self.shown.lock().unwrap().push(view.clone());
    }
}

/// Answers every confirmation with a fixed value and records all prompts.
pub struct ScriptedDialogs {
    answer: bool,
    confirms: Mutex<Vec<String>>,
    alerts: Mutex<Vec<String>>,
}

impl ScriptedDialogs {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            confirms: Mutex::new(Vec::new()),
            alerts: Mutex::new(Vec::new()),
        }
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.lock().unwrap().push(message.to_string());
        self.answer
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
