//! The chat widget controller.
//!
//! `ChatWidget` owns the identity pair, the open/closed state, and the
//! one-shot bootstrap flag. It talks to the outside world only through
//! two ports: `ChatBackend` for the network and `RenderPort` for the
//! chat surface, so the session logic is testable without either.

use anyhow::Context;
use async_trait::async_trait;
use domain::identity::{Identity, SessionStart};
use domain::message::ChatMessage;
use infrastructure::backend_client::BackendClient;
use infrastructure::identity_store::IdentityStore;
use shared::types::Result;
use std::sync::Arc;
use tracing::warn;

/// Greeting bubble shown once after the session bootstrap.
pub const GREETING: &str = "👋 Hello! Say \"hi\" to start chatting.";

/// The single user-visible failure bubble. Network and decode failures
/// collapse into this one literal, with no retry.
pub const FALLBACK_ERROR: &str = "❌ Error contacting the bot.";

/// Network port of the widget.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn start_session(&self, user_id: Option<&str>) -> Result<SessionStart>;

    async fn send_message(
        &self,
        message: &str,
        session_id: &str,
        user_id: &str,
    ) -> Result<String>;
}

#[async_trait]
impl ChatBackend for BackendClient {
    async fn start_session(&self, user_id: Option<&str>) -> Result<SessionStart> {
        BackendClient::start_session(self, user_id).await
    }

    async fn send_message(
        &self,
        message: &str,
        session_id: &str,
        user_id: &str,
    ) -> Result<String> {
        BackendClient::send_message(self, message, session_id, user_id).await
    }
}

/// Rendering port of the widget. Implementations own their output
/// medium; all methods take `&self` so the clock task can share one.
pub trait RenderPort: Send + Sync {
    fn append_message(&self, message: &ChatMessage);
    fn show_typing(&self);
    fn hide_typing(&self);
    fn set_clock(&self, time: &str);
}

pub struct ChatWidget<B: ChatBackend, R: RenderPort> {
    backend: B,
    render: Arc<R>,
    store: IdentityStore,
    identity: Identity,
    initialized: bool,
    visible: bool,
}

impl<B: ChatBackend, R: RenderPort> ChatWidget<B, R> {
    /// Build a widget, loading any previously persisted identity pair.
    pub fn new(backend: B, render: Arc<R>, store: IdentityStore) -> Result<Self> {
        let identity = store.load()?;
        Ok(Self {
            backend,
            render,
            store,
            identity,
            initialized: false,
            visible: false,
        })
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Toggle the chat surface. The first open of a run bootstraps the
    /// session: the persisted user id (if any) is offered to the
    /// backend, the returned pair replaces both stored values, and a
    /// greeting bubble is rendered. Bootstrap failure propagates;
    /// nothing is rendered for it.
    pub async fn open(&mut self) -> Result<bool> {
        self.visible = !self.visible;

        if self.visible && !self.initialized {
            let start = self
                .backend
                .start_session(self.identity.user_id.as_deref())
                .await?;
            self.identity.establish(start);
            self.store.save(&self.identity)?;
            self.render.append_message(&ChatMessage::bot_plain(GREETING));
            self.initialized = true;
        }

        Ok(self.visible)
    }

    /// Send one chat turn. Whitespace-only input is a no-op: no
    /// request, no log entry. The outgoing message is appended
    /// optimistically before the request is issued.
    pub async fn send(&mut self, text: &str) -> Result<()> {
        let message = text.trim();
        if message.is_empty() {
            return Ok(());
        }

        let (user_id, session_id) = {
            let (u, s) = self
                .identity
                .pair()
                .context("chat attempted before session bootstrap")?;
            (u.to_string(), s.to_string())
        };

        self.render.append_message(&ChatMessage::user(message));
        self.render.show_typing();

        match self
            .backend
            .send_message(message, &session_id, &user_id)
            .await
        {
            Ok(reply) => {
                self.render.hide_typing();
                self.render.append_message(&ChatMessage::bot(reply));
            }
            Err(err) => {
                warn!(error = %err, "chat request failed");
                self.render.hide_typing();
                self.render
                    .append_message(&ChatMessage::bot_plain(FALLBACK_ERROR));
            }
        }

        Ok(())
    }
}
