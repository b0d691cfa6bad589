use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};
use std::io::{self, IsTerminal, Write};

use crate::core::traits::Prompter;
use crate::utils::error::{AppError, AppResult};

pub fn prompt_input(prompt: &str) -> AppResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

pub fn prompt_yes_no(prompt: &str) -> AppResult<bool> {
    loop {
        let input = prompt_input(&format!("{} [y/N]: ", prompt))?;
        match input.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "" => return Ok(false),
            _ => println!("Please enter 'y' or 'n'"),
        }
    }
}

/// Read a line without echoing it. Falls back to a plain read when stdin is
/// not a terminal (piped input).
pub fn prompt_hidden(prompt: &str) -> AppResult<String> {
    if !io::stdin().is_terminal() {
        return prompt_input(prompt);
    }

    print!("{}", prompt);
    io::stdout().flush()?;

    terminal::enable_raw_mode()?;

    let result = (|| -> AppResult<String> {
        let mut input = String::new();
        loop {
            match event::read()? {
                Event::Key(KeyEvent { kind, .. }) if kind != KeyEventKind::Press => {}
                Event::Key(KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers,
                    ..
                }) if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Err(AppError::Io("Input cancelled by user".to_string()));
                }
                Event::Key(KeyEvent { code: KeyCode::Char(c), .. }) => input.push(c),
                Event::Key(KeyEvent { code: KeyCode::Backspace, .. }) => {
                    input.pop();
                }
                Event::Key(KeyEvent { code: KeyCode::Enter, .. }) => break,
                Event::Key(KeyEvent { code: KeyCode::Esc, .. }) => {
                    return Err(AppError::Io("Input cancelled by user".to_string()));
                }
                Event::Paste(text) => input.push_str(&text),
                _ => {}
            }
        }
        Ok(input.trim().to_string())
    })();

    let _ = terminal::disable_raw_mode();

    println!();
    result
}

/// Prompter backed by the process terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, question: &str) -> AppResult<bool> {
        prompt_yes_no(question)
    }

    fn secret(&self, label: &str) -> AppResult<String> {
        prompt_hidden(&format!("{}: ", label))
    }
}
