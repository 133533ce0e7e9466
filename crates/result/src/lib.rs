//! # Nebula Result
//!
//! Railway-style error handling: [`Outcome`] is a plain two-variant value
//! for success or failure, with combinators for transforming, chaining,
//! extracting and aggregating it without unwinding.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_result::prelude::*;
//!
//! fn parse(raw: &str) -> Outcome<i64, String> {
//!     Outcome::from(raw.trim().parse::<i64>()).map_err(|e| format!("{raw:?}: {e}"))
//! }
//!
//! fn sum(lines: &[&str]) -> Outcome<i64, String> {
//!     let values = get_or_return!(lines.iter().map(|line| parse(line)).collect_outcomes());
//!     ensure!(!values.is_empty(), "nothing to sum".to_owned());
//!     Outcome::Ok(values.iter().sum())
//! }
//!
//! assert_eq!(sum(&["1", " 2", "3 "]), Outcome::Ok(6));
//! assert!(sum(&["1", "two"]).is_err());
//! ```
//!
//! ## Faults
//!
//! Combinators never catch panics raised by their callbacks. The only bridge
//! from unwinding to values is [`result_try`], which classifies each payload
//! with a [`FaultPolicy`]:
//!
//! - recoverable payloads become `Outcome::Err(Fault)`
//! - [`Interrupted`] notifies the interruption handler and keeps unwinding
//! - [`Fatal`] and failed `assert!`/`unreachable!` keep unwinding untouched
//!
//! [`Outcome::unwrap`] goes the other way, raising the failure value itself.

// === Core Type ===
pub mod outcome;

// === Aggregation ===
pub mod collect;

// === Fault Adapter ===
pub mod adapter;
pub mod fault;

// === Early Return ===
pub mod macros;

// === Public API Exports ===

/// Success-or-failure value
pub use outcome::Outcome;

/// Short-circuiting aggregation
pub use collect::{OutcomeIteratorExt, collect};

/// Panic payload wrapper and classification
pub use fault::{DefaultPolicy, Fatal, Fault, FaultKind, FaultPolicy, Interrupted, Payload, raise};

/// Fault-to-outcome adapter
pub use adapter::{TryAdapter, result_try, result_try_with};

/// Convenient prelude with everything you need
pub mod prelude {
    pub use super::{
        DefaultPolicy, Fatal, Fault, FaultKind, FaultPolicy, Interrupted, Outcome,
        OutcomeIteratorExt, TryAdapter, collect, result_try, result_try_with,
    };

    pub use crate::{ensure, get_or_return};
}
