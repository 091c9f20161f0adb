//! Spawner: runs an external program over in-memory input.

use std::io::{self, Write};
use std::process::{ChildStdin, Command, Stdio};
use std::thread;

/// Captured result of a program that ran to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` if the process was terminated by a signal.
    pub code: Option<i32>,
    /// Captured standard output.
    pub stdout: Vec<u8>,
    /// Captured standard error.
    pub stderr: Vec<u8>,
}

/// Something that can run a program with the given standard input.
///
/// An `Err` means the program could not be launched at all.
pub trait Spawner {
    /// Run `program` with `args`, feeding `input` on standard input.
    fn spawn(&self, program: &str, args: &[String], input: &[u8]) -> io::Result<ProcessOutput>;
}

/// Runs programs as child processes of this one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpawner;

impl Spawner for SystemSpawner {
    fn spawn(&self, program: &str, args: &[String], input: &[u8]) -> io::Result<ProcessOutput> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Feed stdin from a second thread so a child that fills its output
        // pipe before reading all input cannot deadlock us.
        let stdin = child.stdin.take();
        let output = thread::scope(|scope| {
            let writer = stdin.map(|pipe| scope.spawn(move || write_input(pipe, input)));
            let output = child.wait_with_output()?;
            if let Some(writer) = writer {
                writer
                    .join()
                    .map_err(|_| io::Error::other("stdin writer panicked"))??;
            }
            Ok::<_, io::Error>(output)
        })?;

        Ok(ProcessOutput {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// Write all of `input` and close the pipe.
///
/// A child may exit without reading everything (`head -1`); the resulting
/// broken pipe is not an error.
fn write_input(mut pipe: ChildStdin, input: &[u8]) -> io::Result<()> {
    match pipe.write_all(input) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}
