//! Typewriter reveal: time-sliced disclosure of command output.
//!
//! A cancellable timed-step state machine. Each character waits a small
//! randomized delay; line breaks wait longer. The owner drives it with
//! `tick(dt_ms)` and may abandon it at any point -- there is no timer state
//! outside this struct.

use termfolio_types::config::TerminalConfig;

/// Per-character timing for a reveal.
#[derive(Debug, Clone, Copy)]
pub struct RevealPacing {
    /// Base delay per character, in milliseconds.
    pub char_delay_ms: u32,
    /// Upper bound of the random extra delay added per character.
    pub char_jitter_ms: u32,
    /// Pause inserted before each line break.
    pub newline_delay_ms: u32,
}

impl RevealPacing {
    pub fn new(char_delay_ms: u32, char_jitter_ms: u32, newline_delay_ms: u32) -> Self {
        Self {
            char_delay_ms,
            char_jitter_ms,
            newline_delay_ms,
        }
    }

    /// Pacing taken from a terminal config.
    pub fn from_config(config: &TerminalConfig) -> Self {
        Self::new(
            config.char_delay_ms,
            config.char_jitter_ms,
            config.newline_delay_ms,
        )
    }

    /// Zero delays: the whole text appears on the first tick.
    pub fn instant() -> Self {
        Self::new(0, 0, 0)
    }
}

/// Small xorshift PRNG for per-character jitter. Seedable so reveals are
/// deterministic under test.
#[derive(Debug, Clone)]
struct SimpleRng(u64);

impl SimpleRng {
    fn new(seed: u64) -> Self {
        // Xorshift must not start at zero.
        Self(seed.max(1))
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        (x >> 32) as u32
    }

    /// Uniform-ish value in `0..=bound`.
    fn next_up_to(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32() % (bound + 1)
    }
}

/// An in-progress reveal of one output text.
#[derive(Debug, Clone)]
pub struct Reveal {
    text: String,
    revealed_bytes: usize,
    wait_ms: u32,
    pacing: RevealPacing,
    rng: SimpleRng,
}

impl Reveal {
    pub fn new(text: impl Into<String>, pacing: RevealPacing, seed: u64) -> Self {
        let mut reveal = Self {
            text: text.into(),
            revealed_bytes: 0,
            wait_ms: 0,
            pacing,
            rng: SimpleRng::new(seed),
        };
        reveal.wait_ms = reveal.delay_for_next();
        reveal
    }

    fn next_char(&self) -> Option<char> {
        self.text[self.revealed_bytes..].chars().next()
    }

    fn delay_for_next(&mut self) -> u32 {
        match self.next_char() {
            None => 0,
            Some('\n') => self.pacing.newline_delay_ms,
            Some(_) => self.pacing.char_delay_ms + self.rng.next_up_to(self.pacing.char_jitter_ms),
        }
    }

    /// Advance by `dt_ms` and return the revealed prefix.
    pub fn tick(&mut self, dt_ms: u32) -> &str {
        let mut budget = dt_ms;
        while !self.is_finished() {
            if budget < self.wait_ms {
                self.wait_ms -= budget;
                break;
            }
            budget -= self.wait_ms;
            if let Some(c) = self.next_char() {
                self.revealed_bytes += c.len_utf8();
            }
            self.wait_ms = self.delay_for_next();
        }
        self.revealed()
    }

    /// The prefix disclosed so far.
    pub fn revealed(&self) -> &str {
        &self.text[..self.revealed_bytes]
    }

    /// The full target text.
    pub fn full_text(&self) -> &str {
        &self.text
    }

    pub fn is_finished(&self) -> bool {
        self.revealed_bytes >= self.text.len()
    }

    /// Disclose everything immediately.
    pub fn skip_to_end(&mut self) {
        self.revealed_bytes = self.text.len();
    }
}
