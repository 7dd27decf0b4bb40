use crate::error::{Error, Result};
use std::{
    path::Path,
    process::{Command, Stdio},
};

/// Captured result of an external tool run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, `None` if the process was terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs an external tool to completion
pub trait ToolRunner {
    fn execute(&self, program: &Path, args: &[&str], cwd: &Path) -> Result<ToolOutput>;
}

/// Runs the tool as a child process, blocking until it exits.
///
/// There is no timeout, a hanging tool blocks the caller.
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
    fn execute(&self, program: &Path, args: &[&str], cwd: &Path) -> Result<ToolOutput> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .current_dir(cwd)
            .stdin(Stdio::null());

        log::debug!("Running command `{cmd:?}` in {}", cwd.display());

        let output = cmd.output().map_err(|source| Error::ToolLaunch {
            tool: program.to_path_buf(),
            cwd: cwd.to_path_buf(),
            source,
        })?;

        let output = ToolOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        log::info!("Tool exited with: {:?}", output.code);
        for line in output.stderr.lines() {
            log::debug!("stderr: {line}");
        }

        Ok(output)
    }
}

#[cfg(all(test, unix))]
mod test {
    use super::*;

    #[test]
    fn test_captures_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = ProcessRunner
            .execute(
                Path::new("/bin/sh"),
                &["-c", "pwd; echo oops >&2; exit 3"],
                dir.path(),
            )
            .unwrap();

        assert_eq!(output.code, Some(3));
        assert!(!output.success());
        assert_eq!(
            Path::new(output.stdout.trim()).canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
        assert_eq!(output.stderr, "oops\n");
    }

    #[test]
    fn test_missing_tool() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProcessRunner
            .execute(&dir.path().join("missing.exe"), &[], dir.path())
            .unwrap_err();
        assert!(matches!(err, Error::ToolLaunch { .. }));
    }

    #[test]
    fn test_missing_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = dir.path().join("no-such-workspace");
        let err = ProcessRunner
            .execute(Path::new("/bin/sh"), &["-c", "true"], &workspace)
            .unwrap_err();

        assert!(matches!(&err, Error::ToolLaunch { cwd, .. } if cwd == &workspace));
        assert!(err.to_string().contains("no-such-workspace"));
    }
}
