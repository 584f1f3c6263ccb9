//! termfolio console entry point.
//!
//! A thin presentation layer over the session state machine: reads command
//! lines from stdin, drives the typewriter reveal with real sleeps, and
//! renders the prompt from the session's current directory. The session is
//! the interesting part; anything here is replaceable by a richer UI.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;

use termfolio_session::{Reveal, RevealPacing, Session};
use termfolio_types::config::TerminalConfig;

/// Reveal tick granularity.
const STEP_MS: u32 = 16;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    log::info!(
        "Starting termfolio (user: {}, theme: {})",
        config.user,
        config.theme
    );

    let welcome = config.welcome.clone();
    let pacing = RevealPacing::from_config(&config);
    let mut session = Session::new(config)?;

    reveal_text(&welcome, pacing)?;
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "{}", prompt(&session))?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let trimmed = line.trim();
        if trimmed == "exit" || trimmed == "quit" {
            break;
        }

        run_line(&mut session, trimmed)?;
    }

    log::info!("termfolio session ended ({} commands)", session.command_count());
    Ok(())
}

/// Print `text` at typewriter pace, standalone (used for the welcome banner;
/// command output goes through the session's own reveal).
fn reveal_text(text: &str, pacing: RevealPacing) -> Result<()> {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;
    let mut reveal = Reveal::new(text, pacing, seed);
    let mut printed = 0;
    let mut stdout = io::stdout();
    while !reveal.is_finished() {
        let revealed = reveal.tick(STEP_MS);
        if revealed.len() > printed {
            write!(stdout, "{}", &revealed[printed..])?;
            stdout.flush()?;
            printed = revealed.len();
        }
        thread::sleep(Duration::from_millis(STEP_MS as u64));
    }
    writeln!(stdout, "{}", &text[printed..])?;
    Ok(())
}

/// Load config from the `TERMFOLIO_CONFIG` path if set, defaults otherwise.
fn load_config() -> Result<TerminalConfig> {
    match std::env::var_os("TERMFOLIO_CONFIG") {
        Some(path) => {
            let path = std::path::PathBuf::from(path);
            log::info!("Loading config from {}", path.display());
            Ok(TerminalConfig::load(&path)?)
        },
        None => Ok(TerminalConfig::default()),
    }
}

/// Prompt rendered from session state, e.g. `guest@portfolio:/portfolio$ `.
fn prompt(session: &Session) -> String {
    format!(
        "{}@{}:{}$ ",
        session.config().user,
        session.config().host,
        session.current_path().display_path()
    )
}

/// Execute one line and print its output at reveal pace.
fn run_line(session: &mut Session, line: &str) -> Result<()> {
    let count_before = session.command_count();
    let len_before = session.scrollback().len();
    session.execute(line);

    if session.command_count() == count_before {
        return Ok(()); // Empty input: nothing happened.
    }
    if session.scrollback().len() <= len_before {
        // The screen was cleared; mirror it on the real terminal.
        print!("\x1b[2J\x1b[H");
        io::stdout().flush()?;
        return Ok(());
    }

    let mut printed = 0;
    let mut stdout = io::stdout();
    while session.input_locked() {
        session.tick(STEP_MS);
        if let Some(text) = session.revealed_text() {
            let fresh = &text[printed..];
            if !fresh.is_empty() {
                write!(stdout, "{fresh}")?;
                stdout.flush()?;
                printed = text.len();
            }
        }
        thread::sleep(Duration::from_millis(STEP_MS as u64));
    }

    // The reveal is done; print whatever the last ticks disclosed beyond
    // what we already echoed.
    if let Some(record) = session.scrollback().last()
        && printed <= record.result.len()
    {
        writeln!(stdout, "{}", &record.result[printed..])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_shows_user_host_and_path() {
        let session = Session::new(TerminalConfig::default()).unwrap();
        assert_eq!(prompt(&session), "guest@portfolio:/portfolio$ ");
    }

    #[test]
    fn prompt_follows_directory_changes() {
        let mut session = Session::new(TerminalConfig {
            char_delay_ms: 0,
            char_jitter_ms: 0,
            newline_delay_ms: 0,
            ..TerminalConfig::default()
        })
        .unwrap();
        session.execute("cd skills");
        while session.tick(10_000) {}
        assert_eq!(prompt(&session), "guest@portfolio:/portfolio/skills$ ");
    }
}
