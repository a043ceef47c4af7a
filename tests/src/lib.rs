//! Test doubles for the widget's ports.

use application::widget::{ChatBackend, RenderPort};
use async_trait::async_trait;
use domain::identity::SessionStart;
use domain::message::{ChatMessage, Sender};
use shared::types::Result;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Message(ChatMessage),
    ShowTyping,
    HideTyping,
    Clock(String),
}

/// Render port that records every call instead of drawing anything.
#[derive(Default)]
pub struct RecordingPort {
    events: Mutex<Vec<RenderEvent>>,
}

impl RecordingPort {
    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                RenderEvent::Message(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn bot_messages(&self) -> Vec<ChatMessage> {
        self.messages()
            .into_iter()
            .filter(|message| message.sender == Sender::Bot)
            .collect()
    }

    pub fn clock_updates(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                RenderEvent::Clock(time) => Some(time),
                _ => None,
            })
            .collect()
    }
}

impl RenderPort for RecordingPort {
    fn append_message(&self, message: &ChatMessage) {
        self.events
            .lock()
            .unwrap()
            .push(RenderEvent::Message(message.clone()));
    }

    fn show_typing(&self) {
        self.events.lock().unwrap().push(RenderEvent::ShowTyping);
    }

    fn hide_typing(&self) {
        self.events.lock().unwrap().push(RenderEvent::HideTyping);
    }

    fn set_clock(&self, time: &str) {
        self.events
            .lock()
            .unwrap()
            .push(RenderEvent::Clock(time.to_string()));
    }
}

struct FakeBackendInner {
    issued: SessionStart,
    reply: std::result::Result<String, String>,
    start_calls: AtomicUsize,
    chat_calls: AtomicUsize,
    offered_user_ids: Mutex<Vec<Option<String>>>,
    seen_chats: Mutex<Vec<(String, String, String)>>,
}

/// Scripted chat backend. Clones share state, so a test can keep one
/// handle for assertions after moving another into the widget.
#[derive(Clone)]
pub struct FakeBackend {
    inner: Arc<FakeBackendInner>,
}

impl FakeBackend {
    pub fn replying(reply: &str) -> Self {
        Self::with_outcome(Ok(reply.to_string()))
    }

    pub fn failing() -> Self {
        Self::with_outcome(Err("connection refused".to_string()))
    }

    fn with_outcome(reply: std::result::Result<String, String>) -> Self {
        Self {
            inner: Arc::new(FakeBackendInner {
                issued: SessionStart {
                    user_id: "u1".to_string(),
                    session_id: "u1_abcd1234".to_string(),
                },
                reply,
                start_calls: AtomicUsize::new(0),
                chat_calls: AtomicUsize::new(0),
                offered_user_ids: Mutex::new(Vec::new()),
                seen_chats: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn issued(&self) -> SessionStart {
        self.inner.issued.clone()
    }

    pub fn start_count(&self) -> usize {
        self.inner.start_calls.load(Ordering::SeqCst)
    }

    pub fn chat_count(&self) -> usize {
        self.inner.chat_calls.load(Ordering::SeqCst)
    }

    /// User ids offered to `/start`, in call order.
    pub fn offered_user_ids(&self) -> Vec<Option<String>> {
        self.inner.offered_user_ids.lock().unwrap().clone()
    }

    /// `(message, session_id, user_id)` triples seen by `/chat`.
    pub fn seen_chats(&self) -> Vec<(String, String, String)> {
        self.inner.seen_chats.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for FakeBackend {
    async fn start_session(&self, user_id: Option<&str>) -> Result<SessionStart> {
        self.inner.start_calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .offered_user_ids
            .lock()
            .unwrap()
            .push(user_id.map(str::to_string));
        Ok(self.inner.issued.clone())
    }

    async fn send_message(
        &self,
        message: &str,
        session_id: &str,
        user_id: &str,
    ) -> Result<String> {
        self.inner.chat_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.seen_chats.lock().unwrap().push((
            message.to_string(),
            session_id.to_string(),
            user_id.to_string(),
        ));
        match &self.inner.reply {
            Ok(reply) => Ok(reply.clone()),
            Err(reason) => Err(anyhow::anyhow!("{reason}")),
        }
    }
}
