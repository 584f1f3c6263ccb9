//! The virtual directory model.
//!
//! The terminal exposes a single-level tree rooted at `/portfolio`. Paths are
//! a closed enum rather than free-form strings so an invalid current
//! directory is unrepresentable; `cd` is the only operation that produces
//! one, and only by parsing a token against this set.

use std::fmt;
use std::str::FromStr;

/// A directory the session can be "in".
///
/// `Root` displays as `/portfolio`; every other variant is one of the fixed
/// section directories directly under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Directory {
    #[default]
    Root,
    Summary,
    Bio,
    Skills,
    Experience,
    Projects,
    Education,
    Certifications,
    Contact,
}

impl Directory {
    /// The eight section directories under the root, in sidebar order.
    pub const SECTIONS: [Directory; 8] = [
        Directory::Summary,
        Directory::Bio,
        Directory::Skills,
        Directory::Experience,
        Directory::Projects,
        Directory::Education,
        Directory::Certifications,
        Directory::Contact,
    ];

    /// The bare directory name as typed (`"portfolio"` for the root).
    pub fn name(&self) -> &'static str {
        match self {
            Directory::Root => "portfolio",
            Directory::Summary => "summary",
            Directory::Bio => "bio",
            Directory::Skills => "skills",
            Directory::Experience => "experience",
            Directory::Projects => "projects",
            Directory::Education => "education",
            Directory::Certifications => "certifications",
            Directory::Contact => "contact",
        }
    }

    /// The full display path: `/portfolio` or `/portfolio/<name>`.
    pub fn display_path(&self) -> String {
        match self {
            Directory::Root => "/portfolio".to_string(),
            other => format!("/portfolio/{}", other.name()),
        }
    }

    /// Parse a `cd` target token. Accepts the section names, the literal
    /// `portfolio`, and the root aliases `..` and `/`.
    pub fn parse(token: &str) -> Option<Directory> {
        match token {
            ".." | "/" | "portfolio" => Some(Directory::Root),
            "summary" => Some(Directory::Summary),
            "bio" => Some(Directory::Bio),
            "skills" => Some(Directory::Skills),
            "experience" => Some(Directory::Experience),
            "projects" => Some(Directory::Projects),
            "education" => Some(Directory::Education),
            "certifications" => Some(Directory::Certifications),
            "contact" => Some(Directory::Contact),
            _ => None,
        }
    }

    /// Comma-separated list of the valid section names, for error hints.
    pub fn section_list() -> String {
        Self::SECTIONS
            .iter()
            .map(|d| d.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_path())
    }
}

impl FromStr for Directory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Directory::parse(s).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_root() {
        assert_eq!(Directory::default(), Directory::Root);
    }

    #[test]
    fn root_display_path() {
        assert_eq!(Directory::Root.display_path(), "/portfolio");
    }

    #[test]
    fn section_display_path() {
        assert_eq!(Directory::Projects.display_path(), "/portfolio/projects");
    }

    #[test]
    fn parse_section_names() {
        for dir in Directory::SECTIONS {
            assert_eq!(Directory::parse(dir.name()), Some(dir));
        }
    }

    #[test]
    fn parse_root_aliases() {
        assert_eq!(Directory::parse(".."), Some(Directory::Root));
        assert_eq!(Directory::parse("/"), Some(Directory::Root));
        assert_eq!(Directory::parse("portfolio"), Some(Directory::Root));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(Directory::parse("Projects"), None);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(Directory::parse("nowhere"), None);
        assert_eq!(Directory::parse(""), None);
    }

    #[test]
    fn from_str_round_trip() {
        let d: Directory = "skills".parse().unwrap();
        assert_eq!(d, Directory::Skills);
        assert!("void".parse::<Directory>().is_err());
    }

    #[test]
    fn section_list_names_all_eight() {
        let list = Directory::section_list();
        for dir in Directory::SECTIONS {
            assert!(list.contains(dir.name()));
        }
        assert!(!list.contains("portfolio"));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn parse_never_panics(token in ".{0,40}") {
                let _ = Directory::parse(&token);
            }

            #[test]
            fn parsed_directories_round_trip(token in "[a-z./]{1,20}") {
                if let Some(dir) = Directory::parse(&token) {
                    // Whatever parses maps back to a name that parses to the
                    // same variant.
                    prop_assert_eq!(Directory::parse(dir.name()), Some(dir));
                }
            }

            #[test]
            fn display_path_is_absolute(token in "[a-z]{1,20}") {
                if let Some(dir) = Directory::parse(&token) {
                    prop_assert!(dir.display_path().starts_with("/portfolio"));
                }
            }
        }
    }
}
