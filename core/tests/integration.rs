//! Full todo lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `TodoApp` over real
//! HTTP through `UreqTransport`. Validates request building, the transport
//! and response parsing end-to-end with the actual server.

mod common;

use std::time::Duration;

use common::{RecordingView, ScriptedDialogs};
use todo_core::app::CREATE_FAILED;
use todo_core::{Counters, TodoApp, TodoClient, TodoId, UreqTransport};

type LiveApp = TodoApp<UreqTransport, RecordingView, ScriptedDialogs>;

fn start_mock_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn live_app(base_url: &str, confirm: bool) -> LiveApp {
    TodoApp::new(
        TodoClient::new(base_url),
        UreqTransport::new(Duration::from_secs(5)),
        RecordingView::default(),
        ScriptedDialogs::answering(confirm),
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn todo_lifecycle() {
    let addr = start_mock_server();
    let base_url = format!("http://{addr}");

    // Step 1: initial list is empty.
    let app = live_app(&base_url, true);
    app.list().await;
    assert_eq!(app.view().last().unwrap().counters, Counters::default());

    // Step 2: create two todos through the input field.
    app.view().type_input("  Buy milk ");
    app.submit_input().await;
    app.view().type_input("Walk dog");
    app.submit_input().await;
    assert_eq!(app.view().input(), "");

    let view = app.view().last().unwrap();
    assert_eq!(view.counters.total, 2);
    assert_eq!(view.rows[0].title, "Walk dog");
    assert_eq!(view.rows[1].title, "Buy milk");
    assert_eq!(view.rows[1].id, TodoId(1));

    // Step 3: mark the first one done.
    app.complete(TodoId(1)).await;
    let view = app.view().last().unwrap();
    assert_eq!(
        view.counters,
        Counters {
            total: 2,
            active: 1,
            done: 1,
        }
    );
    assert!(view.rows[1].shows_checkmark());

    // Step 4: declined delete leaves both.
    let declining = live_app(&base_url, false);
    declining.remove(TodoId(2)).await;
    declining.list().await;
    assert_eq!(declining.view().last().unwrap().counters.total, 2);

    // Step 5: confirmed delete.
    app.remove(TodoId(2)).await;
    let view = app.view().last().unwrap();
    assert_eq!(view.counters.total, 1);
    assert_eq!(view.rows[0].id, TodoId(1));

    // Step 6: operations on a missing id still refresh without alerting.
    app.complete(TodoId(99)).await;
    app.remove(TodoId(99)).await;
    assert_eq!(app.view().last().unwrap().counters.total, 1);
    assert!(app.dialogs().alerts().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_backend() {
    // Bind then drop to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let app = live_app(&format!("http://{addr}"), true);

    app.list().await;
    assert!(app.view().shown().is_empty());
    assert!(app.dialogs().alerts().is_empty());

    app.view().type_input("Buy milk");
    app.submit_input().await;
    assert_eq!(app.dialogs().alerts(), vec![CREATE_FAILED.to_string()]);
    assert_eq!(app.view().input(), "Buy milk");
}
