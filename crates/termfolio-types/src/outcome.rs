//! Command outcomes and scrollback records.

use crate::path::Directory;
use crate::timestamp::Timestamp;

/// Classification of a command's outcome.
///
/// `Clear` is a signal, not output: it carries no text and tells the session
/// to truncate the scrollback instead of appending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    Error,
    Info,
    Warning,
    Clear,
}

impl OutcomeKind {
    /// Lowercase name, used by presentation layers for styling classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::Success => "success",
            OutcomeKind::Error => "error",
            OutcomeKind::Info => "info",
            OutcomeKind::Warning => "warning",
            OutcomeKind::Clear => "clear",
        }
    }
}

/// What a command handler returns.
///
/// `path`, when set, must name a member of the fixed directory set and is the
/// only way the session's current directory changes.
#[derive(Debug, Clone)]
pub struct CommandReply {
    pub output: String,
    pub kind: OutcomeKind,
    pub path: Option<Directory>,
}

impl CommandReply {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            kind: OutcomeKind::Success,
            path: None,
        }
    }

    pub fn error(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            kind: OutcomeKind::Error,
            path: None,
        }
    }

    pub fn info(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            kind: OutcomeKind::Info,
            path: None,
        }
    }

    pub fn warning(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            kind: OutcomeKind::Warning,
            path: None,
        }
    }

    /// The clear signal: empty output, scrollback truncation.
    pub fn clear() -> Self {
        Self {
            output: String::new(),
            kind: OutcomeKind::Clear,
            path: None,
        }
    }

    /// Attach a directory change to this reply.
    pub fn with_path(mut self, dir: Directory) -> Self {
        self.path = Some(dir);
        self
    }
}

/// Styling class of a scrollback record.
///
/// The same set as [`OutcomeKind`] plus `Command` for echoed command lines.
/// `Clear` never reaches the scrollback; the session truncates instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Success,
    Error,
    Info,
    Warning,
    Clear,
    Command,
}

impl From<OutcomeKind> for RecordKind {
    fn from(kind: OutcomeKind) -> Self {
        match kind {
            OutcomeKind::Success => RecordKind::Success,
            OutcomeKind::Error => RecordKind::Error,
            OutcomeKind::Info => RecordKind::Info,
            OutcomeKind::Warning => RecordKind::Warning,
            OutcomeKind::Clear => RecordKind::Clear,
        }
    }
}

/// One entry in the session scrollback: the command line as typed, the
/// handler's output, and when it ran. Append-only; cleared only wholesale.
#[derive(Debug, Clone)]
pub struct OutputRecord {
    pub command: String,
    pub result: String,
    pub timestamp: Timestamp,
    pub kind: RecordKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind() {
        assert_eq!(CommandReply::success("ok").kind, OutcomeKind::Success);
        assert_eq!(CommandReply::error("no").kind, OutcomeKind::Error);
        assert_eq!(CommandReply::info("hi").kind, OutcomeKind::Info);
        assert_eq!(CommandReply::warning("hm").kind, OutcomeKind::Warning);
    }

    #[test]
    fn clear_has_empty_output() {
        let reply = CommandReply::clear();
        assert_eq!(reply.kind, OutcomeKind::Clear);
        assert!(reply.output.is_empty());
        assert!(reply.path.is_none());
    }

    #[test]
    fn with_path_sets_directory() {
        let reply = CommandReply::success("moved").with_path(Directory::Skills);
        assert_eq!(reply.path, Some(Directory::Skills));
    }

    #[test]
    fn record_kind_from_outcome() {
        assert_eq!(RecordKind::from(OutcomeKind::Success), RecordKind::Success);
        assert_eq!(RecordKind::from(OutcomeKind::Error), RecordKind::Error);
        assert_eq!(RecordKind::from(OutcomeKind::Clear), RecordKind::Clear);
    }

    #[test]
    fn outcome_kind_names() {
        assert_eq!(OutcomeKind::Success.as_str(), "success");
        assert_eq!(OutcomeKind::Warning.as_str(), "warning");
    }
}
