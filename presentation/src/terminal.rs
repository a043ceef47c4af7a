//! Terminal implementation of the widget's render port.
//!
//! Bot markdown goes through termimad after fence stripping, the typing
//! indicator is an indicatif spinner, and the clock lives in the
//! terminal window title so it never disturbs the scrolling chat log.

use application::widget::RenderPort;
use colored::*;
use crossterm::terminal::SetTitle;
use domain::message::{ChatMessage, Sender};
use indicatif::{ProgressBar, ProgressStyle};
use shared::telemetry::Telemetry;
use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;
use termimad::MadSkin;

use crate::markdown::strip_code_fences;

pub struct TerminalRenderer {
    skin: MadSkin,
    typing: Mutex<Option<ProgressBar>>,
    round_trip: Mutex<Option<Telemetry>>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        skin.inline_code
            .set_fg(termimad::crossterm::style::Color::Yellow);
        Self {
            skin,
            typing: Mutex::new(None),
            round_trip: Mutex::new(None),
        }
    }

    fn print_bot_reply(&self, text: &str, markdown: bool) {
        println!("{}", Sender::Bot.label().cyan().bold());
        if markdown {
            let stripped = strip_code_fences(text);
            print!("{}", self.skin.term_text(&stripped));
        } else {
            println!("{text}");
        }
        if let Some(timer) = self.round_trip.lock().unwrap().take() {
            let seconds = timer.elapsed().as_secs_f64();
            println!("{}", console::style(format!("  | {seconds:.1}s")).dim());
        }
        println!();
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPort for TerminalRenderer {
    fn append_message(&self, message: &ChatMessage) {
        match message.sender {
            Sender::User => {
                println!("{} {}", Sender::User.label().green().bold(), message.text);
            }
            Sender::Bot => {
                self.print_bot_reply(&message.text, message.markdown);
            }
        }
    }

    fn show_typing(&self) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Bot is typing...");
        spinner.enable_steady_tick(Duration::from_millis(120));
        *self.typing.lock().unwrap() = Some(spinner);
        *self.round_trip.lock().unwrap() = Some(Telemetry::new());
    }

    fn hide_typing(&self) {
        if let Some(spinner) = self.typing.lock().unwrap().take() {
            spinner.finish_and_clear();
        }
    }

    fn set_clock(&self, time: &str) {
        let mut stdout = std::io::stdout();
        let _ = crossterm::queue!(stdout, SetTitle(format!("chatbox · {time}")));
        let _ = stdout.flush();
    }
}
