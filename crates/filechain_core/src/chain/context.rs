//! Shared mutable context threaded through a task chain.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::Settings;
use crate::logging::MessagePrefix;

/// Shared mutable record carrying one run's state through every task.
///
/// The driver creates one context per run, initialized with the initial
/// source name, passes it by `&mut` to each task in order, and discards
/// it when the run ends. No task owns it; all tasks mutate it in place,
/// strictly sequentially. Reusing one context across two overlapping runs
/// is not supported; `&mut` exclusivity makes that unrepresentable.
///
/// After a task completes, `target` and `buffer` hold exactly what that
/// task left behind. Nothing carries over implicitly from fields a task
/// did not touch, except `collected`, which is cumulative by design.
pub struct TaskContext {
    /// Artifact name as it entered the current task.
    pub source: String,
    /// Artifact name as produced by the current task.
    ///
    /// Every task that changes artifact identity rewrites this, so it is
    /// never stale after a successful task.
    pub target: String,
    /// Content produced by the most recent task.
    ///
    /// A task that produces no new content clears this rather than leaving
    /// bytes that no longer correspond to `target`.
    pub buffer: Vec<u8>,
    /// Write-only sink for normal output.
    ///
    /// Tasks alone write here; the context never flushes on their behalf.
    pub out: Box<dyn Write + Send>,
    /// Write-only sink for diagnostics and recoverable errors.
    pub err: Box<dyn Write + Send>,
    /// Ordered, append-only history of artifact names touched across the
    /// whole chain. Later tasks never remove earlier entries.
    pub collected: Vec<String>,
    /// Read by tasks to decide whether to emit extra diagnostics.
    pub verbose: bool,
}

impl TaskContext {
    /// Create a context for a new run, writing to stdout/stderr.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: String::new(),
            buffer: Vec::new(),
            out: Box::new(io::stdout()),
            err: Box::new(io::stderr()),
            collected: Vec::new(),
            verbose: false,
        }
    }

    /// Replace the output sink.
    pub fn with_output(mut self, sink: impl Write + Send + 'static) -> Self {
        self.out = Box::new(sink);
        self
    }

    /// Replace the error sink.
    pub fn with_error(mut self, sink: impl Write + Send + 'static) -> Self {
        self.err = Box::new(sink);
        self
    }

    /// Enable or disable verbose diagnostics.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Apply run-relevant settings (currently the verbose flag).
    pub fn with_settings(mut self, settings: &Settings) -> Self {
        self.verbose = settings.run.verbose;
        self
    }

    /// Append an artifact name to the processed-name history.
    pub fn collect(&mut self, name: impl Into<String>) {
        self.collected.push(name.into());
    }

    /// Drop the previous task's content.
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    /// Replace the buffer with this task's output.
    pub fn replace_buffer(&mut self, content: impl Into<Vec<u8>>) {
        self.buffer = content.into();
    }

    /// Write a line to the output sink.
    pub fn write_out(&mut self, line: &str) {
        let _ = writeln!(self.out, "{}", line);
    }

    /// Write a line to the error sink.
    pub fn write_err(&mut self, line: &str) {
        let _ = writeln!(self.err, "{}", line);
    }

    /// Write a `[WARNING]` line to the error sink.
    ///
    /// The conventional destination for a problem a task handled itself
    /// and chose not to halt the chain over.
    pub fn warn(&mut self, message: &str) {
        let line = MessagePrefix::Warning.format(message);
        self.write_err(&line);
    }

    /// Write a `[DEBUG]` line to the output sink, if verbose.
    pub fn debug(&mut self, message: &str) {
        if self.verbose {
            let line = MessagePrefix::Debug.format(message);
            self.write_out(&line);
        }
    }
}

/// Cloneable in-memory sink.
///
/// Every clone shares the same underlying buffer, so a driver can hand
/// one clone to a context as a sink and read the other after the run
/// ends. Useful for tests and for callers that surface task output in
/// their own UI.
#[derive(Clone)]
pub struct SharedSink {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Current contents as a lossy UTF-8 string.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    /// Whether anything has been written yet.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl Default for SharedSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
