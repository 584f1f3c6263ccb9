//! Read-only portfolio content store.
//!
//! A fixed mapping from topic to pre-formatted text blocks, built once at
//! startup and never mutated. The topic set is closed, so lookups are total:
//! `get` has no failure mode. Operators can replace the compiled-in text
//! with their own via a TOML table keyed by topic name.

mod builtin;

use std::collections::HashMap;

use serde::Deserialize;

use termfolio_types::error::{Result, TermError};

/// The closed set of content topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Summary,
    Bio,
    Skills,
    Experience,
    Projects,
    Education,
    Certifications,
    Contact,
}

impl Topic {
    /// All topics, in sidebar order.
    pub const ALL: [Topic; 8] = [
        Topic::Summary,
        Topic::Bio,
        Topic::Skills,
        Topic::Experience,
        Topic::Projects,
        Topic::Education,
        Topic::Certifications,
        Topic::Contact,
    ];

    /// The topic name as typed at the prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Summary => "summary",
            Topic::Bio => "bio",
            Topic::Skills => "skills",
            Topic::Experience => "experience",
            Topic::Projects => "projects",
            Topic::Education => "education",
            Topic::Certifications => "certifications",
            Topic::Contact => "contact",
        }
    }

    /// Parse a topic name.
    pub fn parse(name: &str) -> Option<Topic> {
        Topic::ALL.iter().copied().find(|t| t.as_str() == name)
    }
}

/// Raw TOML shape for operator-provided content. All eight topics required.
#[derive(Debug, Deserialize)]
struct ContentSource {
    summary: String,
    bio: String,
    skills: String,
    experience: String,
    projects: String,
    education: String,
    certifications: String,
    contact: String,
}

/// The topic-to-text mapping. Read-only after construction.
#[derive(Debug)]
pub struct ContentStore {
    texts: HashMap<Topic, String>,
}

impl ContentStore {
    /// The compiled-in portfolio content.
    pub fn builtin() -> Self {
        let mut texts = HashMap::new();
        texts.insert(Topic::Summary, builtin::SUMMARY.to_string());
        texts.insert(Topic::Bio, builtin::BIO.to_string());
        texts.insert(Topic::Skills, builtin::SKILLS.to_string());
        texts.insert(Topic::Experience, builtin::EXPERIENCE.to_string());
        texts.insert(Topic::Projects, builtin::PROJECTS.to_string());
        texts.insert(Topic::Education, builtin::EDUCATION.to_string());
        texts.insert(Topic::Certifications, builtin::CERTIFICATIONS.to_string());
        texts.insert(Topic::Contact, builtin::CONTACT.to_string());
        Self { texts }
    }

    /// Build a store from a TOML table with one string per topic name.
    ///
    /// All eight topics must be present and non-empty.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let source: ContentSource = toml::from_str(text)?;
        let mut texts = HashMap::new();
        texts.insert(Topic::Summary, source.summary);
        texts.insert(Topic::Bio, source.bio);
        texts.insert(Topic::Skills, source.skills);
        texts.insert(Topic::Experience, source.experience);
        texts.insert(Topic::Projects, source.projects);
        texts.insert(Topic::Education, source.education);
        texts.insert(Topic::Certifications, source.certifications);
        texts.insert(Topic::Contact, source.contact);

        for topic in Topic::ALL {
            if texts[&topic].trim().is_empty() {
                return Err(TermError::Content(format!(
                    "topic '{}' is empty",
                    topic.as_str()
                )));
            }
        }
        log::debug!("loaded operator content ({} topics)", texts.len());
        Ok(Self { texts })
    }

    /// The text for a topic. Total: every topic is always populated.
    pub fn get(&self, topic: Topic) -> &str {
        self.texts
            .get(&topic)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_populates_every_topic() {
        let store = ContentStore::builtin();
        for topic in Topic::ALL {
            assert!(
                !store.get(topic).trim().is_empty(),
                "topic {topic:?} must have text"
            );
        }
    }

    #[test]
    fn topic_parse_round_trip() {
        for topic in Topic::ALL {
            assert_eq!(Topic::parse(topic.as_str()), Some(topic));
        }
        assert_eq!(Topic::parse("blog"), None);
    }

    #[test]
    fn from_toml_requires_all_topics() {
        let err = ContentStore::from_toml_str(r#"summary = "hi""#).unwrap_err();
        assert!(format!("{err}").contains("TOML parse error"));
    }

    #[test]
    fn from_toml_rejects_empty_topic() {
        let toml = r#"
            summary = "s"
            bio = "b"
            skills = "sk"
            experience = "e"
            projects = "p"
            education = "ed"
            certifications = "  "
            contact = "c"
        "#;
        let err = ContentStore::from_toml_str(toml).unwrap_err();
        assert!(format!("{err}").contains("certifications"));
    }

    #[test]
    fn from_toml_full_table() {
        let toml = r#"
            summary = "s"
            bio = "b"
            skills = "sk"
            experience = "e"
            projects = "p"
            education = "ed"
            certifications = "ce"
            contact = "c"
        "#;
        let store = ContentStore::from_toml_str(toml).unwrap();
        assert_eq!(store.get(Topic::Skills), "sk");
        assert_eq!(store.get(Topic::Contact), "c");
    }
}
