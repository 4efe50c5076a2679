//! Subprocess executor for command-line model backends.
//!
//! The prompt is written to the child's stdin and its stdout is streamed back
//! line by line. The child is killed when the stream is dropped, so a
//! dispatch timeout also stops the underlying process.

use crate::agents::base::AgentError;
use std::pin::Pin;
use std::process::Stdio;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncWriteExt;
use tokio::io::BufReader;
use tokio::process::Command;
use tokio_stream::Stream;

/// CLI executor for model backends.
pub struct CliExecutor;

impl CliExecutor {
    /// Execute a command and stream its stdout lines.
    ///
    /// # Arguments
    ///
    /// * `command` - The command to execute (e.g., "ollama")
    /// * `args` - Command line arguments
    /// * `stdin_payload` - Text written to the child's stdin before it is closed
    ///
    /// # Returns
    ///
    /// A stream of stdout lines. A spawn failure or a non-zero exit status is
    /// yielded as `AgentError::ExecutionError` and ends the stream.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ol_core::agents::cli_executor::CliExecutor;
    /// use tokio_stream::StreamExt;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let stream = CliExecutor::execute(
    ///         "cat".to_string(),
    ///         vec![],
    ///         Some("hello".to_string()),
    ///     );
    ///
    ///     let lines: Vec<_> = stream.collect().await;
    ///     assert_eq!(lines.len(), 1);
    /// }
    /// ```
    pub fn execute(
        command: String,
        args: Vec<String>,
        stdin_payload: Option<String>,
    ) -> Pin<Box<dyn Stream<Item = Result<String, AgentError>> + Send>> {
        let stream = async_stream::stream! {
            let mut cmd = Command::new(&command);
            cmd.args(&args);
            cmd.stdin(if stdin_payload.is_some() { Stdio::piped() } else { Stdio::null() });
            cmd.stdout(Stdio::piped());
            cmd.stderr(Stdio::null());
            cmd.kill_on_drop(true);

            let mut child = match cmd.spawn() {
                Ok(child) => child,
                Err(e) => {
                    yield Err(AgentError::ExecutionError(format!(
                        "Failed to spawn command '{command}': {e}"
                    )));
                    return;
                }
            };

            // The prompt is written while stdout is being read.
            let writer = match (stdin_payload, child.stdin.take()) {
                (Some(payload), Some(mut stdin)) => Some(tokio::spawn(async move {
                    let written = stdin.write_all(payload.as_bytes()).await;
                    // Dropping stdin signals end of prompt.
                    drop(stdin);
                    written
                })),
                _ => None,
            };

            let stdout = match child.stdout.take() {
                Some(stdout) => stdout,
                None => {
                    yield Err(AgentError::ExecutionError(
                        "Failed to capture stdout".to_string()
                    ));
                    return;
                }
            };

            let mut lines = BufReader::new(stdout).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        yield Ok(line);
                    }
                    Ok(None) => break,
                    Err(e) => {
                        yield Err(AgentError::ParseError(format!(
                            "Failed to read output of '{command}': {e}"
                        )));
                        return;
                    }
                }
            }

            if let Some(writer) = writer {
                match writer.await {
                    Ok(Ok(())) => {}
                    // The child may exit without reading all of its input.
                    Ok(Err(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
                    Ok(Err(e)) => {
                        yield Err(AgentError::ExecutionError(format!(
                            "Failed to write prompt to '{command}': {e}"
                        )));
                        return;
                    }
                    Err(e) => {
                        yield Err(AgentError::ExecutionError(format!(
                            "Prompt writer for '{command}' failed: {e}"
                        )));
                        return;
                    }
                }
            }

            match child.wait().await {
                Ok(status) if status.success() => {}
                Ok(status) => {
                    yield Err(AgentError::ExecutionError(format!(
                        "'{command}' exited with {status}"
                    )));
                }
                Err(e) => {
                    yield Err(AgentError::ExecutionError(format!(
                        "Failed to wait for '{command}': {e}"
                    )));
                }
            }
        };

        Box::pin(stream)
    }
}
