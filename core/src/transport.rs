//! Blocking `ureq` transport driven from tokio's blocking pool.
//!
//! The agent is configured so 4xx/5xx responses come back as data rather
//! than `Err`; only failed round-trips are errors.

use std::time::Duration;

use tracing::trace;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.request_timeout)
    }
}

impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || execute_blocking(&agent, request))
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn execute_blocking(agent: &ureq::Agent, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    trace!(method = req.method.as_str(), path = %req.path, "sending request");

    let result = match (req.method, req.body) {
        (HttpMethod::Get, _) => with_headers(agent.get(&req.path), &req.headers).call(),
        (HttpMethod::Delete, _) => with_headers(agent.delete(&req.path), &req.headers).call(),
        (HttpMethod::Post, Some(body)) => {
            with_headers(agent.post(&req.path), &req.headers).send(body.as_bytes())
        }
        (HttpMethod::Post, None) => with_headers(agent.post(&req.path), &req.headers).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            with_headers(agent.put(&req.path), &req.headers).send(body.as_bytes())
        }
        (HttpMethod::Put, None) => with_headers(agent.put(&req.path), &req.headers).send_empty(),
    };
    let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}
