use serde::Serialize;
use std::fmt;

/// How the executable token was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutableSource {
    /// Project-local wrapper script
    Wrapper,
    /// `<home>/bin/gradle` from an explicit home or `GRADLE_HOME`
    GradleHome,
    /// First match on `PATH`
    SearchPath,
    /// Bare binary name, left for the process launcher to find
    Bare,
}

/// The ordered tokens of a Gradle invocation: executable, options, then tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradleCommand {
    pub source: ExecutableSource,
    pub args: Vec<String>,
}

impl GradleCommand {
    pub fn new(source: ExecutableSource, executable: String) -> Self {
        Self {
            source,
            args: vec![executable],
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn executable(&self) -> &str {
        &self.args[0]
    }

    /// Everything after the executable
    pub fn arguments(&self) -> &[String] {
        &self.args[1..]
    }

    pub fn into_args(self) -> Vec<String> {
        self.args
    }

    /// Render the tokens as a POSIX shell line, single-quoting any token that
    /// the shell would otherwise split or expand
    pub fn to_shell_command(&self) -> String {
        self.args
            .iter()
            .map(|arg| shell_quote(arg))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,+@%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

impl fmt::Display for GradleCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_shell_command())
    }
}
