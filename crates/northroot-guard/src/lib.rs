//! Guard clauses for argument preconditions.
//!
//! Each guard checks one precondition on a parameter (present, non-empty,
//! not white-space) and returns a [`GuardError`] naming the parameter when the
//! precondition does not hold. Guards are pure and keep no state.
//!
//! ```
//! use northroot_guard::{against_null_or_white_space_string, GuardResult};
//!
//! fn greet(name: Option<&str>) -> GuardResult<String> {
//!     let name = against_null_or_white_space_string("name", name)?;
//!     Ok(format!("hello, {name}"))
//! }
//!
//! assert_eq!(greet(Some("ada")).unwrap(), "hello, ada");
//! assert_eq!(greet(Some("  ")).unwrap_err().to_string(), "name is an empty or white-space string.");
//! ```
#![deny(missing_docs)]

/// Error types returned by guards.
pub mod errors;
/// The guard clauses.
pub mod guard;
/// Guard macros that derive the parameter name from the guarded expression.
mod macros;
/// Nullability of arbitrary values.
pub mod nullable;
/// Serializable snapshots of guard failures.
pub mod report;

pub use errors::{GuardError, GuardErrorKind, GuardResult};
pub use guard::{
    against_empty_string, against_null_argument, against_null_argument_if_nullable,
    against_null_argument_property, against_null_argument_property_if_nullable,
    against_null_or_empty_string, against_null_or_white_space_string,
};
pub use nullable::Nullable;
pub use report::GuardReport;
