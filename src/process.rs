//! Process spawning with captured output.

use std::ffi::OsStr;
use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{ExtensionError, ExtensionResult};

/// Captured result of a finished process.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Exit code; `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    /// Captured stdout, lossily decoded as UTF-8.
    pub stdout: String,
    /// Captured stderr, lossily decoded as UTF-8.
    pub stderr: String,
}

impl ProcessOutput {
    /// Returns whether the process exited with code 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs the program to completion with the given arguments, capturing both
/// output streams. A spawn failure (e.g. program not found) surfaces as an
/// IO error; a non-zero exit is reported in the output, not as an error.
pub fn run<I, S>(program: impl AsRef<OsStr>, args: I) -> ExtensionResult<ProcessOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let program = program.as_ref();
    debug!(program = %program.to_string_lossy(), "spawning process");
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()?;

    Ok(ProcessOutput {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Like [`run`], additionally feeding `input` to the child's stdin while its
/// output is drained.
///
/// Stdin is written from a dedicated thread, so a filter-style child that
/// interleaves reading and writing cannot deadlock against the pipe buffers
/// however large `input` is. A child that exits without consuming all of its
/// input is not an error.
pub fn run_with_input<I, S>(
    program: impl AsRef<OsStr>,
    args: I,
    input: &[u8],
) -> ExtensionResult<ProcessOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let program = program.as_ref();
    debug!(program = %program.to_string_lossy(), "spawning process with piped stdin");
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| ExtensionError::Process("stdin handle unavailable".into()))?;
    let input = input.to_vec();
    let writer = std::thread::spawn(move || match stdin.write_all(&input) {
        // The child closed stdin early; whatever it produced still counts.
        Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    });

    let output = child.wait_with_output()?;
    writer
        .join()
        .map_err(|_| ExtensionError::Process("stdin writer thread panicked".into()))??;
    Ok(ProcessOutput {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
