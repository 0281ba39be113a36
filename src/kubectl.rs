//! kubectl invocations: enumerate contexts and switch the active one

use crate::context::{self, Context};
use crate::error::{KswitchError, Result};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::{Command as ProcCommand, Output};
use tracing::{debug, info};

/// Anything able to make a context the active one
pub trait ContextSwitcher {
    fn use_context(&self, name: &str) -> Result<()>;
}

/// Runner for a kubectl binary
#[derive(Debug, Clone)]
pub struct Kubectl {
    program: PathBuf,
}

impl Kubectl {
    /// Use an explicit program instead of searching PATH
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Locate kubectl on PATH
    pub fn discover() -> Result<Self> {
        let binary = crate::config::load().kubectl;
        let program = which::which(binary).map_err(|_| KswitchError::NoKubectl)?;
        debug!("using {}", program.display());
        Ok(Self::new(program))
    }

    /// List configured contexts (`config get-contexts --no-headers=true`)
    pub fn list_contexts(&self) -> Result<Vec<Context>> {
        use indicatif::{ProgressBar, ProgressStyle};

        // Show spinner if interactive
        let spinner = if std::io::stderr().is_terminal() {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
                pb.set_style(style);
            }
            pb.set_message("Loading contexts...");
            pb.enable_steady_tick(std::time::Duration::from_millis(100));
            Some(pb)
        } else {
            None
        };

        let output = self.run(&["config", "get-contexts", "--no-headers=true"]);

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        let stdout = output?;
        let contexts = context::parse_contexts(&stdout);
        info!("found {} contexts", contexts.len());
        Ok(contexts)
    }

    /// Run kubectl with `args`, returning stdout on a zero exit status
    fn run(&self, args: &[&str]) -> Result<String> {
        debug!("running {} {}", self.program.display(), args.join(" "));
        let output = ProcCommand::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| {
                KswitchError::CommandFailed(format!(
                    "failed to run {}: {}",
                    self.program.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            return Err(KswitchError::CommandFailed(failure_message(&output)));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl ContextSwitcher for Kubectl {
    fn use_context(&self, name: &str) -> Result<()> {
        self.run(&["config", "use-context", name])?;
        info!("switched to context {}", name);
        Ok(())
    }
}

/// Best message for a failed run: stderr, then stdout, then the exit status
fn failure_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        return stderr.trim().to_string();
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.trim().is_empty() {
        return stdout.trim().to_string();
    }
    output.status.to_string()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_list_contexts_fails_on_nonzero_exit() {
        let err = Kubectl::new("false").list_contexts().unwrap_err();
        assert!(matches!(err, KswitchError::CommandFailed(_)));
        assert!(err.to_string().contains("exit status"));
    }

    #[test]
    fn test_list_contexts_fails_when_program_missing() {
        let err = Kubectl::new("/nonexistent/kubectl")
            .list_contexts()
            .unwrap_err();
        assert!(err.to_string().starts_with("failed to run /nonexistent/kubectl"));
    }

    #[test]
    fn test_list_contexts_empty_output() {
        let contexts = Kubectl::new("true").list_contexts().unwrap();
        assert!(contexts.is_empty());
    }

    #[test]
    fn test_use_context_success() {
        assert!(Kubectl::new("true").use_context("ctx-a").is_ok());
    }

    #[test]
    fn test_use_context_captures_stderr() {
        // `sh config ...` fails trying to open a script named "config"
        let err = Kubectl::new("sh").use_context("ctx-a").unwrap_err();
        match err {
            KswitchError::CommandFailed(message) => assert!(message.contains("config")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
