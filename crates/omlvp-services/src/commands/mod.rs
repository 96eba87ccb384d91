//! Edit command handlers with boundary logging.
//!
//! ## Logging Ownership
//!
//! This layer owns lifecycle logging for every edit:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure, at `warn` for edit rejections
//!
//! The core emits only `debug`/`warn` detail events.

pub mod instance;
pub mod property;
pub mod relation;

use omlvp_core::{apply, log_op_end, log_op_error, log_op_start};
use omlvp_core::{CascadePolicy, Command, EditOutcome, OntologyGraph, Result};

pub use instance::{delete_link, delete_named_instance};
pub use property::{get_annotation, set_property};
pub use relation::{set_forward_relation_name, set_reverse_relation_name};

/// Run a queued editor command
///
/// # Errors
///
/// Returns whatever `apply` returns; the graph is unchanged on error.
pub fn execute(
    graph: &mut OntologyGraph,
    cmd: Command,
    policy: &dyn CascadePolicy,
) -> Result<EditOutcome> {
    let op = cmd.op_name();
    log_op_start!(op);
    let start = std::time::Instant::now();

    let outcome = apply(graph, cmd, policy).map_err(|e| {
        log_op_error!(op, e.clone(), duration_ms = start.elapsed().as_millis() as u64);
        e
    })?;

    log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64);
    Ok(outcome)
}
