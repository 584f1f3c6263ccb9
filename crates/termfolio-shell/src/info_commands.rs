//! Portfolio content lookup commands.
//!
//! One command per content topic. Handlers ignore arguments and the current
//! path and serve the store text verbatim.

use termfolio_content::Topic;
use termfolio_types::outcome::{CommandReply, OutcomeKind};

use crate::interpreter::{Command, CommandRegistry, Environment};

/// Register the eight content lookup commands.
pub fn register_info_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(ContentCmd::new(
        Topic::Summary,
        "Professional summary and overview",
        OutcomeKind::Success,
    )));
    reg.register(Box::new(ContentCmd::new(
        Topic::Bio,
        "Personal biography and background",
        OutcomeKind::Success,
    )));
    reg.register(Box::new(ContentCmd::new(
        Topic::Skills,
        "Technical skills and expertise",
        OutcomeKind::Info,
    )));
    reg.register(Box::new(ContentCmd::new(
        Topic::Experience,
        "Work experience and achievements",
        OutcomeKind::Info,
    )));
    reg.register(Box::new(ContentCmd::new(
        Topic::Projects,
        "Featured projects and implementations",
        OutcomeKind::Info,
    )));
    reg.register(Box::new(ContentCmd::new(
        Topic::Education,
        "Educational background and courses",
        OutcomeKind::Info,
    )));
    reg.register(Box::new(ContentCmd::new(
        Topic::Certifications,
        "Professional certifications and training",
        OutcomeKind::Info,
    )));
    reg.register(Box::new(ContentCmd::new(
        Topic::Contact,
        "Contact information and availability",
        OutcomeKind::Info,
    )));
}

/// A lookup command bound to one content topic.
struct ContentCmd {
    topic: Topic,
    description: &'static str,
    kind: OutcomeKind,
}

impl ContentCmd {
    fn new(topic: Topic, description: &'static str, kind: OutcomeKind) -> Self {
        Self {
            topic,
            description,
            kind,
        }
    }
}

impl Command for ContentCmd {
    fn name(&self) -> &str {
        self.topic.as_str()
    }
    fn description(&self) -> &str {
        self.description
    }
    fn usage(&self) -> &str {
        self.topic.as_str()
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> CommandReply {
        CommandReply {
            output: env.content.get(self.topic).to_string(),
            kind: self.kind,
            path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Clock;
    use termfolio_content::ContentStore;
    use termfolio_types::path::Directory;
    use termfolio_types::timestamp::Timestamp;

    struct FixedClock;
    impl Clock for FixedClock {
        fn now(&self) -> Timestamp {
            Timestamp::from_unix_secs(0)
        }
    }

    fn make_env(content: &ContentStore) -> Environment<'_> {
        Environment {
            cwd: Directory::Root,
            content,
            clock: &FixedClock,
        }
    }

    #[test]
    fn every_topic_serves_store_text() {
        let mut reg = CommandRegistry::new();
        register_info_commands(&mut reg);
        let content = ContentStore::builtin();
        let env = make_env(&content);
        for topic in Topic::ALL {
            let reply = reg.dispatch(topic.as_str(), &[], &env);
            assert_eq!(reply.output, content.get(topic));
            assert!(reply.path.is_none());
        }
    }

    #[test]
    fn summary_and_bio_are_success_kind() {
        let mut reg = CommandRegistry::new();
        register_info_commands(&mut reg);
        let content = ContentStore::builtin();
        let env = make_env(&content);
        assert_eq!(
            reg.dispatch("summary", &[], &env).kind,
            OutcomeKind::Success
        );
        assert_eq!(reg.dispatch("bio", &[], &env).kind, OutcomeKind::Success);
        assert_eq!(reg.dispatch("skills", &[], &env).kind, OutcomeKind::Info);
    }

    #[test]
    fn arguments_are_ignored() {
        let mut reg = CommandRegistry::new();
        register_info_commands(&mut reg);
        let content = ContentStore::builtin();
        let env = make_env(&content);
        let plain = reg.dispatch("skills", &[], &env);
        let with_args = reg.dispatch("skills", &["--verbose", "x"], &env);
        assert_eq!(plain.output, with_args.output);
    }
}
