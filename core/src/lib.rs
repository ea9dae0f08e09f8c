//! Client core for the todo service.
//!
//! # Overview
//! Keeps a view in sync with a backend-owned `/todos` collection through four
//! operations (list, create, mark done, delete) plus an unconditional poll.
//!
//! # Design
//! - `TodoClient` is stateless: it builds `HttpRequest` values and parses
//!   `HttpResponse` values without touching the network.
//! - A `Transport` performs the I/O (`UreqTransport` in production, scripted
//!   fakes in tests), so the controller is deterministic under test.
//! - `TodoApp` owns the host's `ViewContext` and `Dialogs` and re-renders the
//!   whole list through the pure `render` after every successful action.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod poll;
pub mod transport;
pub mod types;
pub mod view;

pub use app::{Dialogs, TodoApp, ViewContext};
pub use client::TodoClient;
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use poll::spawn_poller;
pub use transport::UreqTransport;
pub use types::{CreateTodo, Todo, TodoId};
pub use view::{render, Counters, TodoListView, TodoRow, UiEvent};
