//! Task trait and its two canonical implementations.

use super::context::TaskContext;
use super::errors::TaskResult;
use super::transform::NameTransform;

/// Run function type: the behavior a task performs against the context.
pub type RunFn = Box<dyn Fn(&mut TaskContext) -> TaskResult<()> + Send + Sync>;

/// Trait for a unit of work in a chain.
///
/// A task picks up where the previous task left off: `ctx.target` names
/// the artifact it is handed and `ctx.buffer` holds that artifact's
/// content. On success the task must leave `ctx.target` naming what it
/// actually produced and `ctx.buffer` holding its output (cleared if it
/// produced none). Downstream tasks read exactly what it left behind.
///
/// A problem the task can recover from is written to `ctx.err` and
/// swallowed, so the chain continues. A problem that must stop the chain
/// is returned as the error; the driver halts and reports it. Either way
/// a fatal condition is never dropped silently.
///
/// Implementations hold no per-run state, so one instance may be shared
/// and reused across any number of sequential runs.
pub trait Task: Send + Sync {
    /// Execute against the shared context, returning the fatal-failure
    /// signal if the chain must halt.
    fn execute(&self, ctx: &mut TaskContext) -> TaskResult<()>;

    /// Task name for diagnostics and failure reports.
    fn name(&self) -> &str {
        "task"
    }
}

/// Task that does nothing beyond resetting the context.
///
/// `execute` points `target` back at `source` and clears the buffer, so
/// downstream tasks never observe leftovers from an earlier task. Useful
/// as a placeholder when testing compositions without a real transform.
pub struct NoopTask;

impl NoopTask {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoopTask {
    fn default() -> Self {
        Self::new()
    }
}

impl Task for NoopTask {
    fn execute(&self, ctx: &mut TaskContext) -> TaskResult<()> {
        ctx.target = ctx.source.clone();
        ctx.buffer.clear();
        Ok(())
    }

    fn name(&self) -> &str {
        "noop"
    }
}

/// Task composed from a name transform and a run function.
///
/// `execute` first rewrites `ctx.target` with the transform applied to
/// `ctx.source`, so the run function observes the intended target name,
/// then hands the context to the run function and returns its result
/// untouched. The run function is free to retarget further if its actual
/// output differs from the transform's guess.
pub struct TransformTask {
    name: String,
    transform: NameTransform,
    run: RunFn,
}

impl TransformTask {
    /// Compose a task from a pure name transform and a run function.
    pub fn new<T, R>(transform: T, run: R) -> Self
    where
        T: Fn(&str) -> String + Send + Sync + 'static,
        R: Fn(&mut TaskContext) -> TaskResult<()> + Send + Sync + 'static,
    {
        Self {
            name: "transform".to_string(),
            transform: Box::new(transform),
            run: Box::new(run),
        }
    }

    /// Set the name used in diagnostics and failure reports.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Task for TransformTask {
    fn execute(&self, ctx: &mut TaskContext) -> TaskResult<()> {
        ctx.target = (self.transform)(&ctx.source);
        (self.run)(ctx)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
