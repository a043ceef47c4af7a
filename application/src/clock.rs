//! Wall-clock ticker, independent of chat state.

use crate::widget::RenderPort;
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Locale time trimmed to hour:minute:second.
pub fn format_clock(now: DateTime<Local>) -> String {
    now.format("%H:%M:%S").to_string()
}

/// Pushes the current time through the render port once per second for
/// the lifetime of the process. The first update fires immediately.
pub struct ClockTicker {
    handle: JoinHandle<()>,
}

impl ClockTicker {
    pub fn spawn<R: RenderPort + 'static>(render: Arc<R>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            loop {
                interval.tick().await;
                render.set_clock(&format_clock(Local::now()));
            }
        });
        Self { handle }
    }

    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
