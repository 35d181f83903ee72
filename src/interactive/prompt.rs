//
//  community-sdk
//  interactive/prompt.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Terminal prompts built on `dialoguer`.
//!
//! Every prompt refuses to run without an attached terminal, so scripted
//! invocations fail fast with a message naming what to use instead.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Editor, Password};

/// Returns `true` when a user is attending the terminal.
pub fn is_interactive() -> bool {
    console::user_attended()
}

fn require_terminal(alternative: &str) -> Result<()> {
    if !is_interactive() {
        bail!("Not running in a terminal. Use {} instead.", alternative);
    }
    Ok(())
}

/// Asks a yes/no question with a default answer.
///
/// `alternative` names what scripts should use instead of the prompt.
pub fn prompt_confirm_with_default(message: &str, default: bool, alternative: &str) -> Result<bool> {
    require_terminal(alternative)?;
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact()?;
    Ok(confirmed)
}

/// Reads a password without echoing it.
pub fn prompt_password(message: &str, alternative: &str) -> Result<String> {
    require_terminal(alternative)?;
    let password = Password::new().with_prompt(message).interact()?;
    Ok(password)
}

/// Opens `$VISUAL`/`$EDITOR` for multi-line text.
///
/// Returns `None` when the editor exits without saving.
pub fn prompt_editor(initial: Option<&str>, alternative: &str) -> Result<Option<String>> {
    require_terminal(alternative)?;
    let result = Editor::new().edit(initial.unwrap_or(""))?;
    Ok(result)
}
