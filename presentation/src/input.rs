use anyhow::Context;
use dialoguer::Input;
use shared::types::Result;

/// Read one chat turn from the terminal. Empty input is allowed; the
/// widget treats it as a no-op.
pub fn ask_chat_turn() -> Result<String> {
    let line: String = Input::new()
        .with_prompt("you")
        .allow_empty(true)
        .interact_text()
        .context("Failed reading chat input")?;
    Ok(line)
}
