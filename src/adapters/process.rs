use crate::domain::model::ToolInvocation;
use crate::domain::ports::CommandRunner;
use crate::utils::error::{Result, ScaffoldError};
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs tools with `std::process::Command`, child output discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &ToolInvocation, working_dir: &Path) -> Result<()> {
        tracing::debug!(
            "exec `{} {}` in {}",
            invocation.program,
            invocation.args.join(" "),
            working_dir.display()
        );

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| ScaffoldError::ToolSpawn {
                program: invocation.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(ScaffoldError::ToolFailed {
                program: invocation.program.clone(),
                args: invocation.args.clone(),
                status,
            });
        }
        Ok(())
    }
}
