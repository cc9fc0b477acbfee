//! Task chaining for file-processing pipelines.
//!
//! This module provides the unit of work (`Task`), the shared mutable
//! record threaded through a run (`TaskContext`), and the `Workflow`
//! driver that executes an ordered task sequence, halting on the first
//! fatal failure.
//!
//! # Architecture
//!
//! ```text
//! Workflow
//!     ├── Task: rename    (TransformTask)
//!     ├── Task: compile   (TransformTask)
//!     └── Task: passthru  (NoopTask)
//!            │
//!            └── all share one &mut TaskContext
//! ```
//!
//! # Example
//!
//! ```
//! use filechain_core::chain::{replace_extension, TaskContext, TransformTask, Workflow};
//!
//! let workflow = Workflow::new("styles").with_task(
//!     TransformTask::new(replace_extension("css"), |ctx: &mut TaskContext| {
//!         let produced = ctx.target.clone();
//!         ctx.collect(produced);
//!         ctx.clear_buffer();
//!         Ok(())
//!     })
//!     .named("compile-css"),
//! );
//!
//! let mut ctx = TaskContext::new("style.scss");
//! let report = workflow.run(&mut ctx).unwrap();
//! assert_eq!(ctx.target, "style.css");
//! assert_eq!(report.tasks_completed, vec!["compile-css"]);
//! ```

mod context;
mod errors;
mod task;
mod transform;
mod workflow;

pub use context::{SharedSink, TaskContext};
pub use errors::{ChainError, ChainResult, TaskError, TaskResult};
pub use task::{NoopTask, RunFn, Task, TransformTask};
pub use transform::{add_suffix, identity, replace_extension, NameTransform};
pub use workflow::{RunReport, Workflow};
