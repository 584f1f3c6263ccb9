//! The terminal session state machine.
//!
//! Owns everything the presentation layer observes: scrollback, command
//! history, the current virtual directory, the active theme, and the
//! exclusive reveal lock. Two states: idle (accepting input) and locked (a
//! command's output is being revealed). Submissions while locked are
//! refused, not queued.

use termfolio_content::ContentStore;
use termfolio_shell::{Clock, CommandRegistry, Environment, SystemClock};
use termfolio_types::config::TerminalConfig;
use termfolio_types::error::Result;
use termfolio_types::outcome::{OutcomeKind, OutputRecord};
use termfolio_types::path::Directory;
use termfolio_types::theme::Theme;

use crate::reveal::{Reveal, RevealPacing};

/// One interactive terminal session. Created fresh per UI session; nothing
/// persists when it is dropped.
pub struct Session {
    registry: CommandRegistry,
    content: ContentStore,
    config: TerminalConfig,
    clock: Box<dyn Clock>,
    scrollback: Vec<OutputRecord>,
    history: Vec<String>,
    history_cursor: Option<usize>,
    current_path: Directory,
    input_buffer: String,
    theme: Theme,
    command_count: u64,
    reveal: Option<Reveal>,
    reveal_seed: u64,
}

impl Session {
    /// A session with the built-in registry and content, on the system clock.
    pub fn new(config: TerminalConfig) -> Result<Self> {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        Self::with_parts(
            config,
            CommandRegistry::with_builtins(),
            ContentStore::builtin(),
            Box::new(SystemClock),
            seed,
        )
    }

    /// A session from explicit parts. `reveal_seed` pins the jitter schedule.
    pub fn with_parts(
        config: TerminalConfig,
        registry: CommandRegistry,
        content: ContentStore,
        clock: Box<dyn Clock>,
        reveal_seed: u64,
    ) -> Result<Self> {
        let theme = config.startup_theme()?;
        Ok(Self {
            registry,
            content,
            config,
            clock,
            scrollback: Vec::new(),
            history: Vec::new(),
            history_cursor: None,
            current_path: Directory::Root,
            input_buffer: String::new(),
            theme,
            command_count: 0,
            reveal: None,
            reveal_seed,
        })
    }

    // -- Command execution --

    /// Execute a raw input line.
    ///
    /// No-ops: a line that trims to nothing (no record, no history entry),
    /// and any submission while a reveal is in flight. Side-effect order:
    /// history is recorded before dispatch; the current path updates after
    /// the handler returns, before the record lands in the scrollback.
    pub fn execute(&mut self, raw: &str) {
        if self.input_locked() {
            log::debug!("input locked, refusing: {raw:?}");
            return;
        }
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }

        self.history.push(trimmed.to_string());
        self.history_cursor = None;
        self.command_count += 1;

        let env = Environment {
            cwd: self.current_path,
            content: &self.content,
            clock: &*self.clock,
        };
        let Some(reply) = self.registry.interpret(trimmed, &env) else {
            return;
        };

        // Theme is presentation-side state: a validated `theme <name>`
        // switches it here, on top of the handler's confirmation text.
        self.apply_theme_switch(trimmed, reply.kind);

        if reply.kind == OutcomeKind::Clear {
            // Hard reset: truncate, append nothing, release the lock.
            self.scrollback.clear();
            self.reveal = None;
            return;
        }

        if let Some(dir) = reply.path {
            self.current_path = dir;
        }

        self.scrollback.push(OutputRecord {
            command: trimmed.to_string(),
            result: reply.output.clone(),
            timestamp: self.clock.now(),
            kind: reply.kind.into(),
        });

        if !reply.output.is_empty() {
            self.reveal_seed = self.reveal_seed.wrapping_add(1);
            self.reveal = Some(Reveal::new(
                reply.output,
                RevealPacing::from_config(&self.config),
                self.reveal_seed,
            ));
        }
    }

    fn apply_theme_switch(&mut self, line: &str, kind: OutcomeKind) {
        if kind != OutcomeKind::Success {
            return;
        }
        let mut tokens = line.split_whitespace();
        if tokens.next().is_some_and(|t| t.eq_ignore_ascii_case("theme"))
            && let Some(theme) = tokens.next().and_then(Theme::parse)
        {
            log::debug!("theme switched to {theme}");
            self.theme = theme;
        }
    }

    // -- Reveal driving --

    /// Advance an in-flight reveal by `dt_ms`. Returns `true` while output
    /// is still being revealed; on completion the lock is released.
    pub fn tick(&mut self, dt_ms: u32) -> bool {
        let Some(reveal) = self.reveal.as_mut() else {
            return false;
        };
        reveal.tick(dt_ms);
        if reveal.is_finished() {
            self.reveal = None;
            return false;
        }
        true
    }

    /// Cancel any in-flight reveal and release the lock.
    pub fn cancel_reveal(&mut self) {
        if self.reveal.take().is_some() {
            log::debug!("reveal cancelled");
        }
    }

    /// Truncate the scrollback and cancel any reveal (the explicit clear
    /// hotkey; the `clear` command goes through `execute`).
    pub fn clear_screen(&mut self) {
        self.scrollback.clear();
        self.cancel_reveal();
    }

    /// The partially revealed text of the newest record, while locked.
    pub fn revealed_text(&self) -> Option<&str> {
        self.reveal.as_ref().map(Reveal::revealed)
    }

    // -- Input buffer, recall, completion --

    /// Replace the input buffer (the presentation layer's keystrokes land
    /// here).
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input_buffer = text.into();
    }

    /// Submit the current input buffer as a command line.
    pub fn submit(&mut self) {
        let line = std::mem::take(&mut self.input_buffer);
        self.execute(&line);
    }

    /// Recall the previous history entry into the input buffer. From the
    /// idle cursor this selects the newest entry; repeated calls walk
    /// backward, clamped at the oldest. Ignored while locked.
    pub fn recall_previous(&mut self) {
        if self.input_locked() || self.history.is_empty() {
            return;
        }
        let idx = match self.history_cursor {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.history_cursor = Some(idx);
        self.input_buffer = self.history[idx].clone();
    }

    /// Walk forward through history. Past the newest entry the buffer
    /// empties and the cursor resets. Ignored while locked.
    pub fn recall_next(&mut self) {
        if self.input_locked() {
            return;
        }
        let Some(i) = self.history_cursor else {
            return;
        };
        let next = i + 1;
        if next >= self.history.len() {
            self.history_cursor = None;
            self.input_buffer.clear();
        } else {
            self.history_cursor = Some(next);
            self.input_buffer = self.history[next].clone();
        }
    }

    /// Tab completion: replace the buffer with the unique command-name
    /// prefix match, when exactly one exists.
    pub fn complete(&mut self) {
        if self.input_locked() {
            return;
        }
        let prefix = self.input_buffer.trim().to_ascii_lowercase();
        if prefix.is_empty() {
            return;
        }
        if let [only] = self.registry.completions(&prefix).as_slice() {
            self.input_buffer = only.clone();
        }
    }

    // -- Read accessors --

    pub fn scrollback(&self) -> &[OutputRecord] {
        &self.scrollback
    }

    pub fn history_entries(&self) -> &[String] {
        &self.history
    }

    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    pub fn current_path(&self) -> Directory {
        self.current_path
    }

    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    pub fn input_locked(&self) -> bool {
        self.reveal.is_some()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn command_count(&self) -> u64 {
        self.command_count
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}
