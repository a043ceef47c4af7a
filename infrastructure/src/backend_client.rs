use anyhow::Context;
use domain::identity::SessionStart;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::types::Result;
use std::sync::Arc;
use tracing::debug;

#[derive(Serialize)]
struct StartRequest<'a> {
    // Serialized as an explicit null on first contact so the backend
    // knows to mint a user id.
    user_id: Option<&'a str>,
}

#[derive(Deserialize)]
struct StartResponse {
    user_id: String,
    session_id: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    session_id: &'a str,
    user_id: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    response: String,
}

/// HTTP client for the chat backend's `/start` and `/chat` endpoints.
#[derive(Clone)]
pub struct BackendClient {
    client: Arc<Client>,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Arc::new(Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Bootstrap a session, offering the previously issued user id when
    /// one exists. The backend always returns a fresh session id.
    pub async fn start_session(&self, user_id: Option<&str>) -> Result<SessionStart> {
        let url = format!("{}/start", self.base_url);
        debug!(%url, known_user = user_id.is_some(), "bootstrapping session");

        let response = self
            .client
            .post(&url)
            .json(&StartRequest { user_id })
            .send()
            .await
            .context("Failed contacting the chat backend for /start")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("/start returned {}: {}", status, body);
        }

        let start: StartResponse = response
            .json()
            .await
            .context("Malformed /start response body")?;
        debug!(user_id = %start.user_id, session_id = %start.session_id, "session started");

        Ok(SessionStart {
            user_id: start.user_id,
            session_id: start.session_id,
        })
    }

    /// Send one chat turn and return the bot's markdown reply.
    pub async fn send_message(
        &self,
        message: &str,
        session_id: &str,
        user_id: &str,
    ) -> Result<String> {
        let url = format!("{}/chat", self.base_url);
        debug!(%url, %session_id, "sending chat message");

        let response = self
            .client
            .post(&url)
            .json(&ChatRequest {
                message,
                session_id,
                user_id,
            })
            .send()
            .await
            .context("Failed contacting the chat backend for /chat")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("/chat returned {}: {}", status, body);
        }

        let reply: ChatResponse = response
            .json()
            .await
            .context("Malformed /chat response body")?;
        Ok(reply.response)
    }
}
