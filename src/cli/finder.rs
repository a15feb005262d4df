//! Locates the command token in a raw argument list
//!
//! The split is purely structural: tokens before the first positional are
//! global flags, the positional is the command candidate, and everything
//! after it belongs to the command. Nothing here fails.

use tracing::{debug, instrument};

/// Global flags that consume the following token as their value
pub const VALUE_FLAGS: &[&str] = &["state-dir"];

/// Outcome of splitting the raw arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandFinderResult {
    /// Command candidate, empty when every token looked like a flag
    pub command: String,
    /// Tokens before the command candidate
    pub global_flags: Vec<String>,
    /// Tokens after the command candidate
    pub other_args: Vec<String>,
}

/// Whether `token` is flag-shaped (`-x`, `--name`, `--name=value`)
///
/// A lone `-` is treated as a value.
pub fn looks_like_flag(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}

/// Whether `token` is a value-taking global flag whose value is the next token
///
/// Accepts both `-state-dir` and `--state-dir`; the `--state-dir=path` form
/// carries its value inline and does not consume the next token.
pub fn takes_value(token: &str) -> bool {
    let Some(name) = token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))
    else {
        return false;
    };

    VALUE_FLAGS.contains(&name)
}

/// Splits raw arguments into global flags, command and command arguments
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandFinder;

impl CommandFinder {
    /// Create a new command finder
    pub fn new() -> Self {
        Self
    }

    /// Find the command candidate in `arguments`
    #[instrument(skip(self))]
    pub fn find_command(&self, arguments: &[String]) -> CommandFinderResult {
        match self.command_index(arguments) {
            Some(index) => {
                let result = CommandFinderResult {
                    command: arguments[index].clone(),
                    global_flags: arguments[..index].to_vec(),
                    other_args: arguments[index + 1..].to_vec(),
                };
                debug!("Found command candidate '{}' at {}", result.command, index);
                result
            }
            None => {
                debug!("No command candidate found");
                CommandFinderResult {
                    command: String::new(),
                    global_flags: arguments.to_vec(),
                    other_args: Vec::new(),
                }
            }
        }
    }

    fn command_index(&self, arguments: &[String]) -> Option<usize> {
        let mut expecting_value = false;

        for (index, token) in arguments.iter().enumerate() {
            if expecting_value {
                expecting_value = false;
                continue;
            }

            if looks_like_flag(token) {
                expecting_value = takes_value(token);
                continue;
            }

            return Some(index);
        }

        None
    }
}
