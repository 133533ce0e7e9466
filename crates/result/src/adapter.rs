//! Turning unwinding faults into [`Outcome`] values
//!
//! This is the only place where a panic crosses into the value world, and
//! only recoverable faults do. Cancellation is reported to the interruption
//! handler and keeps unwinding; catastrophic faults pass straight through.

use std::panic::{self, AssertUnwindSafe};

use crate::fault::{DefaultPolicy, Fault, FaultKind, FaultPolicy};
use crate::outcome::Outcome;

/// Run `f`, wrapping its value in `Ok` and any recoverable fault in `Err`.
///
/// Uses [`DefaultPolicy`] and ignores interruptions (they are still
/// re-raised).
///
/// ```rust
/// use nebula_result::result_try;
///
/// assert_eq!(result_try(|| 11).ok(), Some(11));
///
/// let failed = result_try(|| -> u32 { panic!("config missing") });
/// assert_eq!(failed.err().map(|fault| fault.to_string()).as_deref(), Some("config missing"));
/// ```
///
/// # Panic hook
///
/// The process panic hook runs before unwinding starts, so a fault that ends
/// up as an `Err` still prints the usual `thread '…' panicked at` line on
/// stderr. Wrap the hook to silence payloads you expect to recover from:
///
/// ```rust
/// use std::panic;
/// use nebula_result::{raise, result_try};
///
/// struct QuotaExceeded;
///
/// let default_hook = panic::take_hook();
/// panic::set_hook(Box::new(move |info| {
///     if !info.payload().is::<QuotaExceeded>() {
///         default_hook(info);
///     }
/// }));
///
/// let quiet = result_try::<(), _>(|| raise(QuotaExceeded));
/// assert!(quiet.is_err());
/// ```
pub fn result_try<T, F>(f: F) -> Outcome<T, Fault>
where
    F: FnOnce() -> T,
{
    TryAdapter::new().run(f)
}

/// Like [`result_try`], calling `on_interrupted` once before a cancellation
/// fault is re-raised.
pub fn result_try_with<T, H, F>(on_interrupted: H, f: F) -> Outcome<T, Fault>
where
    H: FnOnce(&Fault),
    F: FnOnce() -> T,
{
    TryAdapter::new().on_interrupted(on_interrupted).run(f)
}

fn ignore_interrupt(_: &Fault) {}

/// Configurable fault adapter
///
/// # Examples
///
/// ```rust
/// use std::any::Any;
/// use nebula_result::{FaultKind, TryAdapter};
///
/// struct Shutdown;
///
/// let policy = |payload: &(dyn Any + Send)| {
///     if payload.is::<Shutdown>() { FaultKind::Cancellation } else { FaultKind::Recoverable }
/// };
///
/// let outcome = TryAdapter::new().with_policy(policy).run(|| "ready");
/// assert!(outcome.is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
#[must_use = "a TryAdapter does nothing until `run` is called"]
pub struct TryAdapter<P = DefaultPolicy, H = fn(&Fault)> {
    policy: P,
    on_interrupted: H,
}

impl TryAdapter {
    /// Default policy, no-op interruption handler
    pub fn new() -> Self {
        Self {
            policy: DefaultPolicy,
            on_interrupted: ignore_interrupt,
        }
    }
}

impl Default for TryAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, H> TryAdapter<P, H> {
    /// Replace the fault classifier
    pub fn with_policy<Q: FaultPolicy>(self, policy: Q) -> TryAdapter<Q, H> {
        TryAdapter {
            policy,
            on_interrupted: self.on_interrupted,
        }
    }

    /// Set the handler called before a cancellation fault is re-raised
    pub fn on_interrupted<G>(self, handler: G) -> TryAdapter<P, G>
    where
        G: FnOnce(&Fault),
    {
        TryAdapter {
            policy: self.policy,
            on_interrupted: handler,
        }
    }
}

impl<P, H> TryAdapter<P, H>
where
    P: FaultPolicy,
    H: FnOnce(&Fault),
{
    /// Run `f` under this adapter.
    ///
    /// Returns `Ok` with the value of `f`, or `Err` with the fault if it
    /// unwound with a recoverable payload. Cancellation and catastrophic
    /// faults resume unwinding with their original payload.
    pub fn run<T, F>(self, f: F) -> Outcome<T, Fault>
    where
        F: FnOnce() -> T,
    {
        let payload = match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => return Outcome::Ok(value),
            Err(payload) => payload,
        };

        let fault = Fault::new(payload);
        let kind = self.policy.classify(fault.payload_ref());
        match kind {
            FaultKind::Recoverable => {
                tracing::trace!(fault = %fault, "recoverable fault converted into Err");
                Outcome::Err(fault)
            }
            FaultKind::Cancellation => {
                tracing::debug!(fault = %fault, "computation interrupted, re-raising");
                (self.on_interrupted)(&fault);
                fault.raise()
            }
            FaultKind::Catastrophic => {
                tracing::warn!(fault = %fault, "catastrophic fault passing through");
                fault.raise()
            }
        }
    }
}
