//! Where output is going

use std::io::IsTerminal;

/// Whether output goes to a person at a terminal or to an editor task
#[derive(Debug, Clone)]
pub struct UiContext {
    widgets: bool,
}

impl UiContext {
    /// Inspect stdout and the environment
    pub fn detect() -> Self {
        Self {
            widgets: stdout_is_a_person(),
        }
    }

    /// Plain line output regardless of environment
    pub fn non_interactive() -> Self {
        Self { widgets: false }
    }

    /// Spinners and styled blocks instead of `hostrun:` lines
    pub fn use_fancy_output(&self) -> bool {
        self.widgets
    }
}

fn stdout_is_a_person() -> bool {
    // Editor tasks pipe stdout
    if !std::io::stdout().is_terminal() {
        return false;
    }

    if std::env::var("TERM").is_ok_and(|term| term == "dumb") {
        return false;
    }

    let ci_vars = ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "BUILDKITE", "TF_BUILD"];
    !ci_vars.iter().any(|var| std::env::var(var).is_ok())
}
