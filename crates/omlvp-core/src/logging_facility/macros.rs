//! Lifecycle logging macros
//!
//! Every macro stamps `component` with the calling module and `event` with
//! one of the `schema::EVENT_*` names.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use omlvp_core::log_op_start;
/// log_op_start!("set_property");
/// log_op_start!("set_property", property_id = "v:weight");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use omlvp_core::log_op_end;
/// log_op_end!("delete_named_instance", duration_ms = 3);
/// log_op_end!("delete_named_instance", duration_ms = 3, deleted_count = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log a failed operation
///
/// `$err` is anything convertible into `ExError`. Edit rejections the editor
/// can move past are logged at `warn`, everything else at `error`.
///
/// # Example
///
/// ```
/// # use omlvp_core::{log_op_error, OmlEditError};
/// let err = OmlEditError::UnknownProperty { property_id: "v:mass".to_string() };
/// log_op_error!("set_property", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        if ex_err.kind().is_recoverable() {
            tracing::warn!(
                component = module_path!(),
                op = $op,
                event = $crate::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err_kind = ?ex_err.kind(),
                err_code = ex_err.code(),
                message = %ex_err,
                $($field)*
            );
        } else {
            tracing::error!(
                component = module_path!(),
                op = $op,
                event = $crate::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err_kind = ?ex_err.kind(),
                err_code = ex_err.code(),
                message = %ex_err,
                $($field)*
            );
        }
    }};
}
