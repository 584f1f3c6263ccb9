//! Easter-egg commands.

use termfolio_types::outcome::CommandReply;

use crate::interpreter::{Command, CommandRegistry, Environment};

/// Register the fun command set.
pub fn register_fun_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(MatrixCmd));
}

// ---------------------------------------------------------------------------
// matrix
// ---------------------------------------------------------------------------

struct MatrixCmd;
impl Command for MatrixCmd {
    fn name(&self) -> &str {
        "matrix"
    }
    fn description(&self) -> &str {
        "Digital rain easter egg"
    }
    fn usage(&self) -> &str {
        "matrix [rain]"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> CommandReply {
        if args.first().copied() == Some("rain") {
            return CommandReply::success(
                "Matrix rain effect activated.\n\
                 Digital rain falling... remember: there is no spoon.",
            );
        }
        CommandReply::info(
            "Matrix Portfolio System v1.0\n\
             Commands:\n  \
             matrix rain - activate the digital rain effect\n\
             \n\
             \"Welcome to the real world.\" - Morpheus",
        )
    }
}
