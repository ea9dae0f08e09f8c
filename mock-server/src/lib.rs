//! In-memory backend for the `/todos` collection.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, warn};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub done: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

#[derive(Debug, Default)]
pub struct Store {
    last_id: i64,
    todos: BTreeMap<i64, Todo>,
}

impl Store {
    fn insert(&mut self, title: String) -> Todo {
        self.last_id += 1;
        let todo = Todo {
            id: self.last_id,
            title,
            done: false,
        };
        self.todos.insert(todo.id, todo.clone());
        todo
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", delete(delete_todo))
        .route("/todos/{id}/done", put(mark_done))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

struct NotFound(i64);

impl IntoResponse for NotFound {
    fn into_response(self) -> Response {
        warn!("todo {} not found", self.0);
        (StatusCode::NOT_FOUND, Json(json!({ "detail": "Todo not found" }))).into_response()
    }
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    info!("fetching todos list");
    let store = db.read().await;
    let todos: Vec<Todo> = store.todos.values().cloned().collect();
    let done = todos.iter().filter(|t| t.done).count();
    info!("found {} todos, {} completed", todos.len(), done);
    Json(todos)
}

async fn create_todo(State(db): State<Db>, Json(input): Json<CreateTodo>) -> Json<Todo> {
    info!("creating todo: {}", input.title);
    Json(db.write().await.insert(input.title))
}

async fn mark_done(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Todo>, NotFound> {
    info!("marking todo {id} as done");
    let mut store = db.write().await;
    let todo = store.todos.get_mut(&id).ok_or(NotFound(id))?;
    todo.done = true;
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, NotFound> {
    info!("deleting todo {id}");
    let mut store = db.write().await;
    store.todos.remove(&id).ok_or(NotFound(id))?;
    Ok(Json(json!({ "ok": true })))
}
