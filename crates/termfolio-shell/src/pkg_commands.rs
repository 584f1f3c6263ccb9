//! Package-manager flavored aliases: npm, yarn, pip.
//!
//! Each parses a sub-verb (`install <name>` or bare `<name>`) and, when the
//! target is itself a registered command, re-invokes that command's handler
//! with empty arguments at the root path, embedding its output inside a
//! decorated message. Delegation is exactly one level deep: package-manager
//! names are never eligible targets.

use termfolio_content::Topic;
use termfolio_types::outcome::CommandReply;

use crate::interpreter::{CommandRegistry, Environment};

/// Which package-manager personality is speaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PkgFlavor {
    Npm,
    Yarn,
    Pip,
}

/// Whether `name` is one of the intercepted package-manager commands.
pub(crate) fn is_pkg_name(name: &str) -> bool {
    matches!(name, "npm" | "yarn" | "pip")
}

/// Dispatch entry point called by the registry interception.
pub(crate) fn execute_pkg(
    reg: &CommandRegistry,
    flavor: PkgFlavor,
    args: &[&str],
    env: &Environment<'_>,
) -> CommandReply {
    let target = match flavor {
        // npm install <name> / pip install <name>
        PkgFlavor::Npm | PkgFlavor::Pip => match args {
            ["install", name, ..] => Some(*name),
            _ => None,
        },
        // yarn <name>
        PkgFlavor::Yarn => args.first().copied(),
    };

    match target {
        Some(name) => match reg.delegate_output(name, env) {
            Some(output) => CommandReply::success(decorate(flavor, name, &output)),
            None => CommandReply::error(format!(
                "Package '{name}' not found\nAvailable packages: {}",
                package_list()
            )),
        },
        None => CommandReply::info(usage(flavor)),
    }
}

/// Wrap a delegated command's output in the flavor's install banter.
fn decorate(flavor: PkgFlavor, name: &str, output: &str) -> String {
    match flavor {
        PkgFlavor::Npm => format!(
            "Installing {name}@latest...\n\
             Successfully installed {name}\n\n{output}"
        ),
        PkgFlavor::Yarn => format!(
            "yarn {name} v1.22.19\n\
             Done in 0.84s\n\n{output}"
        ),
        PkgFlavor::Pip => format!(
            "Collecting {name}...\n\
             Installing collected packages: {name}\n\
             Successfully installed {name}\n\n{output}"
        ),
    }
}

fn usage(flavor: PkgFlavor) -> String {
    match flavor {
        PkgFlavor::Npm => format!(
            "NPM Portfolio Manager v8.19.0\n\n\
             Usage: npm install <package>\n\
             Available packages: {}",
            package_list()
        ),
        PkgFlavor::Yarn => format!(
            "Yarn Portfolio Manager v1.22.19\n\n\
             Usage: yarn <command>\n\
             Available commands: {}",
            package_list()
        ),
        PkgFlavor::Pip => format!(
            "pip 23.2.1 from Portfolio PyPI\n\n\
             Usage: pip install <package>\n\
             Available packages: {}",
            package_list()
        ),
    }
}

/// The advertised package set: the content topics.
fn package_list() -> String {
    Topic::ALL
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
