//! Workflow driver that executes tasks in sequence.

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::logging::{self, MessagePrefix};

use super::context::TaskContext;
use super::errors::{ChainError, ChainResult};
use super::task::Task;

/// Ordered task sequence sharing one context per run.
///
/// Tasks run strictly in order; no task begins before the previous one
/// returns. The instant a task returns a fatal error, later tasks never
/// run and the failure is reported to the caller with workflow and task
/// context attached. There is no retry at this layer; a task that wants
/// retries performs them inside its own run function.
///
/// A workflow holds no per-run state (that all lives in the context), so
/// one instance can drive any number of sequential runs.
pub struct Workflow {
    /// Workflow name for diagnostics and failure reports.
    name: String,
    /// Tasks to execute in order.
    tasks: Vec<Box<dyn Task>>,
    /// Stamp emitted diagnostic lines with a local timestamp.
    stamp_lines: bool,
}

impl Workflow {
    /// Create a new empty workflow.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
            stamp_lines: false,
        }
    }

    /// Add a task to the workflow.
    pub fn add_task<T: Task + 'static>(&mut self, task: T) -> &mut Self {
        self.tasks.push(Box::new(task));
        self
    }

    /// Add a task (builder pattern).
    pub fn with_task<T: Task + 'static>(mut self, task: T) -> Self {
        self.add_task(task);
        self
    }

    /// Apply diagnostic settings (currently line timestamps).
    pub fn with_settings(mut self, settings: &Settings) -> Self {
        self.stamp_lines = settings.logging.show_timestamps;
        self
    }

    /// Get the workflow name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of tasks in the workflow.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Get task names in order.
    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.name()).collect()
    }

    /// Run every task in order against `ctx`.
    ///
    /// When the context is verbose, a phase marker is written to its
    /// output sink before each task. Returns the completed task names on
    /// success, or the first fatal failure wrapped with the name of the
    /// task that returned it. The failing task's own diagnostics are
    /// echoed to the context's error sink before returning.
    pub fn run(&self, ctx: &mut TaskContext) -> ChainResult<RunReport> {
        let mut report = RunReport::default();

        for task in &self.tasks {
            let task_name = task.name();
            tracing::debug!(workflow = %self.name, task = %task_name, "executing task");

            if ctx.verbose {
                let marker = MessagePrefix::Phase.format(task_name);
                ctx.write_out(&self.line(&marker));
            }

            if let Err(e) = task.execute(ctx) {
                let line = MessagePrefix::Error.format(&e.to_string());
                ctx.write_err(&self.line(&line));
                return Err(ChainError::halted(&self.name, task_name, e));
            }

            report.tasks_completed.push(task_name.to_string());
        }

        if ctx.verbose {
            let done = MessagePrefix::Success.format("workflow completed");
            ctx.write_out(&self.line(&done));
        }
        tracing::debug!(
            workflow = %self.name,
            completed = report.tasks_completed.len(),
            "workflow completed"
        );

        Ok(report)
    }

    /// Format a diagnostic line, stamping it if configured.
    fn line(&self, message: &str) -> String {
        if self.stamp_lines {
            logging::stamp(message)
        } else {
            message.to_string()
        }
    }
}

/// Result of a completed workflow run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    /// Names of tasks that completed, in execution order.
    pub tasks_completed: Vec<String>,
}

impl RunReport {
    /// Number of tasks that ran to completion.
    pub fn total(&self) -> usize {
        self.tasks_completed.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::super::context::SharedSink;
    use super::super::errors::{TaskError, TaskResult};
    use super::super::task::{NoopTask, TransformTask};
    use super::super::transform::identity;
    use super::*;

    // Task that counts executions and optionally fails.
    struct CountingTask {
        name: &'static str,
        execute_count: Arc<AtomicUsize>,
        fail: bool,
    }

    impl CountingTask {
        fn new(name: &'static str, count: &Arc<AtomicUsize>, fail: bool) -> Self {
            Self {
                name,
                execute_count: Arc::clone(count),
                fail,
            }
        }
    }

    impl Task for CountingTask {
        fn execute(&self, ctx: &mut TaskContext) -> TaskResult<()> {
            self.execute_count.fetch_add(1, Ordering::SeqCst);
            ctx.collect(self.name);
            if self.fail {
                Err(TaskError::other("induced failure"))
            } else {
                Ok(())
            }
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    #[test]
    fn workflow_builds_correctly() {
        let workflow = Workflow::new("styles")
            .with_task(NoopTask::new())
            .with_task(
                TransformTask::new(identity(), |_: &mut TaskContext| Ok(())).named("copy"),
            );

        assert_eq!(workflow.name(), "styles");
        assert_eq!(workflow.task_count(), 2);
        assert_eq!(workflow.task_names(), vec!["noop", "copy"]);
    }

    #[test]
    fn halts_on_first_fatal_failure() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let third = Arc::new(AtomicUsize::new(0));

        let workflow = Workflow::new("styles")
            .with_task(CountingTask::new("one", &first, false))
            .with_task(CountingTask::new("two", &second, true))
            .with_task(CountingTask::new("three", &third, false));

        let err_sink = SharedSink::new();
        let mut ctx = TaskContext::new("style.scss").with_error(err_sink.clone());
        let err = workflow.run(&mut ctx).unwrap_err();

        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 1);
        assert_eq!(third.load(Ordering::SeqCst), 0);

        assert_eq!(err.workflow, "styles");
        assert_eq!(err.task, "two");
        assert!(err_sink.contents().contains("[ERROR] induced failure"));
    }

    #[test]
    fn recoverable_problems_keep_chain_running() {
        let workflow = Workflow::new("styles")
            .with_task(
                TransformTask::new(identity(), |ctx: &mut TaskContext| {
                    // Handled internally: log and keep going.
                    ctx.warn("optional map file missing");
                    Ok(())
                })
                .named("maps"),
            )
            .with_task(NoopTask::new());

        let err_sink = SharedSink::new();
        let mut ctx = TaskContext::new("style.scss").with_error(err_sink.clone());
        let report = workflow.run(&mut ctx).unwrap();

        assert_eq!(report.tasks_completed, vec!["maps", "noop"]);
        assert!(err_sink.contents().contains("[WARNING]"));
    }

    #[test]
    fn collected_history_is_append_only() {
        let count = Arc::new(AtomicUsize::new(0));
        let workflow = Workflow::new("styles")
            .with_task(CountingTask::new("one", &count, false))
            .with_task(CountingTask::new("two", &count, false))
            .with_task(CountingTask::new("three", &count, false));

        let mut ctx = TaskContext::new("style.scss");
        ctx.collect("seed");
        workflow.run(&mut ctx).unwrap();

        assert_eq!(ctx.collected, vec!["seed", "one", "two", "three"]);
    }

    #[test]
    fn empty_workflow_completes() {
        let workflow = Workflow::new("empty");
        let mut ctx = TaskContext::new("style.scss");

        let report = workflow.run(&mut ctx).unwrap();
        assert_eq!(report.total(), 0);
    }

    #[test]
    fn workflow_reusable_across_runs() {
        let count = Arc::new(AtomicUsize::new(0));
        let workflow = Workflow::new("styles").with_task(CountingTask::new("one", &count, false));

        let mut first = TaskContext::new("a.scss");
        workflow.run(&mut first).unwrap();
        let mut second = TaskContext::new("b.scss");
        workflow.run(&mut second).unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn phase_markers_only_when_verbose() {
        let quiet = SharedSink::new();
        let workflow = Workflow::new("styles").with_task(NoopTask::new());
        let mut ctx = TaskContext::new("a.scss").with_output(quiet.clone());
        workflow.run(&mut ctx).unwrap();
        assert!(quiet.is_empty());

        let chatty = SharedSink::new();
        let mut ctx = TaskContext::new("a.scss")
            .with_output(chatty.clone())
            .with_verbose(true);
        workflow.run(&mut ctx).unwrap();
        assert!(chatty.contents().contains("=== noop ==="));
        assert!(chatty.contents().contains("[SUCCESS] workflow completed"));
    }

    #[test]
    fn timestamps_stamp_diagnostic_lines() {
        let mut settings = Settings::default();
        settings.logging.show_timestamps = true;

        let sink = SharedSink::new();
        let workflow = Workflow::new("styles")
            .with_task(NoopTask::new())
            .with_settings(&settings);
        let mut ctx = TaskContext::new("a.scss")
            .with_output(sink.clone())
            .with_verbose(true);
        workflow.run(&mut ctx).unwrap();

        // Lines look like "[12:30:45] === noop ===".
        let contents = sink.contents();
        assert!(contents.starts_with('['));
        assert!(contents.contains("] === noop ==="));
    }

    #[test]
    fn report_serializes() {
        let report = RunReport {
            tasks_completed: vec!["compile-css".to_string()],
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"tasks_completed\":[\"compile-css\"]"));
    }
}
