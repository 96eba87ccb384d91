//! Structured logging facility for the viewpoint services
//!
//! This module provides:
//! - A single initialization point via `init(profile)`
//! - Lifecycle macros (`log_op_start!`, `log_op_end!`, `log_op_error!`) that
//!   emit the canonical fields from `schema`
//! - A test capture layer for asserting on emitted events
//!
//! Lifecycle events belong to the service boundary. Core operations only
//! emit `debug`/`warn` detail events.
//!
//! # Usage
//!
//! ```rust
//! use omlvp_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
