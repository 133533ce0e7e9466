//! Unwinding faults and how they are classified
//!
//! A fault is whatever payload a panic unwinds with. [`FaultPolicy`] sorts
//! payloads into three [`FaultKind`]s; [`result_try`](crate::result_try)
//! converts only the recoverable ones into values.
//!
//! Faults that never unwind (stack overflow, allocation failure, any panic
//! under `panic = "abort"`) terminate the process before a policy is
//! consulted.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::panic;

/// Raw panic payload
pub type Payload = Box<dyn Any + Send>;

const OPAQUE_MESSAGE: &str = "opaque fault payload";

/// Category of an unwinding fault
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// Ordinary failure, may be turned into an `Err` value
    Recoverable,
    /// Cooperative cancellation, must keep unwinding
    Cancellation,
    /// Unrecoverable program state, must keep unwinding
    Catastrophic,
}

/// Classifier deciding which [`FaultKind`] a payload belongs to
///
/// Any `Fn(&(dyn Any + Send)) -> FaultKind` closure is a policy.
pub trait FaultPolicy {
    /// Classify a panic payload
    fn classify(&self, payload: &(dyn Any + Send)) -> FaultKind;
}

/// Prefixes of the messages std's `assert!`, `assert_eq!`, `assert_ne!` and
/// `unreachable!` panic with.
const BROKEN_INVARIANT_PREFIXES: [&str; 3] = [
    "assertion failed",
    "assertion `",
    "internal error: entered unreachable code",
];

/// [`Interrupted`] is cancellation. [`Fatal`] and failed assertions are
/// catastrophic. Everything else is recoverable.
///
/// A payload that is itself a [`Fault`] (an `Outcome<_, Fault>` raised by
/// `unwrap`) is classified by the payload it wraps.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPolicy;

impl FaultPolicy for DefaultPolicy {
    fn classify(&self, payload: &(dyn Any + Send)) -> FaultKind {
        if let Some(fault) = payload.downcast_ref::<Fault>() {
            return self.classify(fault.payload_ref());
        }

        if payload.is::<Interrupted>() {
            FaultKind::Cancellation
        } else if payload.is::<Fatal>() || message_of(payload).is_some_and(is_broken_invariant) {
            FaultKind::Catastrophic
        } else {
            FaultKind::Recoverable
        }
    }
}

fn is_broken_invariant(message: &str) -> bool {
    BROKEN_INVARIANT_PREFIXES
        .iter()
        .any(|prefix| message.starts_with(prefix))
}

fn message_of(payload: &(dyn Any + Send)) -> Option<&str> {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        Some(*message)
    } else {
        payload.downcast_ref::<String>().map(String::as_str)
    }
}

impl<F> FaultPolicy for F
where
    F: Fn(&(dyn Any + Send)) -> FaultKind,
{
    fn classify(&self, payload: &(dyn Any + Send)) -> FaultKind {
        self(payload)
    }
}

/// A caught panic payload together with a readable message
#[derive(thiserror::Error)]
#[error("{message}")]
pub struct Fault {
    message: String,
    payload: Payload,
}

impl Fault {
    /// Wrap a payload, extracting its message when the type is known.
    ///
    /// A payload that already is a `Fault` is taken as-is, so re-raising a
    /// caught fault and catching it again yields the same payload.
    pub fn new(payload: Payload) -> Self {
        match payload.downcast::<Self>() {
            Ok(fault) => *fault,
            Err(payload) => {
                let message = describe(&*payload);
                Self { message, payload }
            }
        }
    }

    pub(crate) fn payload_ref(&self) -> &(dyn Any + Send) {
        &*self.payload
    }

    /// Human-readable description of the payload
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the payload is a `P`
    pub fn is<P: Any>(&self) -> bool {
        self.payload.is::<P>()
    }

    /// Borrow the payload as a `P`
    pub fn downcast_ref<P: Any>(&self) -> Option<&P> {
        self.payload.downcast_ref::<P>()
    }

    /// Take the payload out as a `P`, or get the fault back unchanged
    pub fn downcast<P: Any>(self) -> Result<P, Self> {
        match self.payload.downcast::<P>() {
            Ok(value) => Ok(*value),
            Err(payload) => Err(Self {
                message: self.message,
                payload,
            }),
        }
    }

    /// Raw payload, suitable for `std::panic::resume_unwind`
    pub fn into_payload(self) -> Payload {
        self.payload
    }

    /// Resume unwinding with the original payload
    pub fn raise(self) -> ! {
        panic::resume_unwind(self.payload)
    }
}

impl From<Payload> for Fault {
    fn from(payload: Payload) -> Self {
        Self::new(payload)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

fn describe(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = message_of(payload) {
        message.to_owned()
    } else if let Some(interrupted) = payload.downcast_ref::<Interrupted>() {
        interrupted.to_string()
    } else if let Some(fatal) = payload.downcast_ref::<Fatal>() {
        fatal.to_string()
    } else {
        OPAQUE_MESSAGE.to_owned()
    }
}

/// Cooperative cancellation signal
///
/// Raise it from a blocking wait that was told to stop. It is never turned
/// into a value by [`result_try`](crate::result_try).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[error("operation interrupted")]
pub struct Interrupted;

impl Interrupted {
    /// Unwind with an `Interrupted` payload
    #[track_caller]
    pub fn raise() -> ! {
        panic::panic_any(Self)
    }
}

/// Unrecoverable fault that must not be converted into a value
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("fatal fault: {reason}")]
pub struct Fatal {
    reason: Cow<'static, str>,
}

impl Fatal {
    /// Create a fatal fault with a reason
    pub fn new(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Why the program cannot continue
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Unwind with a `Fatal` payload
    #[track_caller]
    pub fn raise(reason: impl Into<Cow<'static, str>>) -> ! {
        panic::panic_any(Self::new(reason))
    }
}

/// Unwind with an arbitrary payload
#[track_caller]
pub fn raise<P: Any + Send>(payload: P) -> ! {
    panic::panic_any(payload)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct QuotaExceeded(u32);

    #[rstest]
    #[case::message(Box::new("boom"), FaultKind::Recoverable)]
    #[case::owned_message(Box::new(String::from("boom")), FaultKind::Recoverable)]
    #[case::host_payload(Box::new(QuotaExceeded(3)), FaultKind::Recoverable)]
    #[case::interrupted(Box::new(Interrupted), FaultKind::Cancellation)]
    #[case::fatal(Box::new(Fatal::new("heap corrupted")), FaultKind::Catastrophic)]
    #[case::assert(Box::new("assertion failed: len > 0"), FaultKind::Catastrophic)]
    #[case::assert_eq(
        Box::new(String::from("assertion `left == right` failed: invariant")),
        FaultKind::Catastrophic
    )]
    #[case::unreachable(
        Box::new("internal error: entered unreachable code"),
        FaultKind::Catastrophic
    )]
    #[case::wrapped_message(Box::new(Fault::new(Box::new("boom"))), FaultKind::Recoverable)]
    #[case::wrapped_interrupted(Box::new(Fault::new(Box::new(Interrupted))), FaultKind::Cancellation)]
    fn default_policy_classification(#[case] payload: Payload, #[case] expected: FaultKind) {
        assert_eq!(DefaultPolicy.classify(&*payload), expected);
    }

    #[rstest]
    #[case::static_str(Box::new("disk full"), "disk full")]
    #[case::string(Box::new(format!("retry {}", 3)), "retry 3")]
    #[case::interrupted(Box::new(Interrupted), "operation interrupted")]
    #[case::fatal(Box::new(Fatal::new("stack guard hit")), "fatal fault: stack guard hit")]
    #[case::opaque(Box::new(QuotaExceeded(1)), OPAQUE_MESSAGE)]
    fn message_extraction(#[case] payload: Payload, #[case] expected: &str) {
        let fault = Fault::new(payload);
        assert_eq!(fault.message(), expected);
        assert_eq!(fault.to_string(), expected);
    }

    #[test]
    fn downcast_recovers_payload() {
        let fault = Fault::new(Box::new(QuotaExceeded(7)));
        assert!(fault.is::<QuotaExceeded>());
        assert_eq!(fault.downcast_ref::<QuotaExceeded>(), Some(&QuotaExceeded(7)));

        let fault = fault.downcast::<String>().unwrap_err();
        assert_eq!(fault.downcast::<QuotaExceeded>().unwrap(), QuotaExceeded(7));
    }

    #[test]
    fn rewrapping_a_fault_keeps_its_payload() {
        let inner = Fault::new(Box::new(QuotaExceeded(4)));
        let outer = Fault::new(Box::new(inner));

        assert!(!outer.is::<Fault>());
        assert_eq!(outer.message(), OPAQUE_MESSAGE);
        assert_eq!(outer.downcast::<QuotaExceeded>().unwrap(), QuotaExceeded(4));
    }

    #[test]
    fn real_assertion_payloads_are_catastrophic() {
        let payload = payload_of(|| std::assert_eq!(2, 3, "invariant"));
        assert_eq!(DefaultPolicy.classify(&*payload), FaultKind::Catastrophic);

        let payload = payload_of(|| assert!(Vec::<u8>::new().len() > 1));
        assert_eq!(DefaultPolicy.classify(&*payload), FaultKind::Catastrophic);

        let payload = payload_of(|| unreachable!("mode {}", 3));
        assert_eq!(DefaultPolicy.classify(&*payload), FaultKind::Catastrophic);
    }

    #[test]
    fn closures_are_policies() {
        let everything_cancels = |_: &(dyn Any + Send)| FaultKind::Cancellation;
        assert_eq!(everything_cancels.classify(&"boom"), FaultKind::Cancellation);
    }

    fn payload_of(f: impl FnOnce() + panic::UnwindSafe) -> Payload {
        panic::catch_unwind(f).unwrap_err()
    }

    #[test]
    fn raise_helpers_unwind_with_their_payload() {
        assert!(payload_of(|| Interrupted::raise()).is::<Interrupted>());

        let payload = payload_of(|| Fatal::raise("corrupt"));
        assert_eq!(payload.downcast_ref::<Fatal>().map(Fatal::reason), Some("corrupt"));

        let payload = payload_of(|| raise(QuotaExceeded(2)));
        assert_eq!(payload.downcast_ref::<QuotaExceeded>(), Some(&QuotaExceeded(2)));

        let fault = Fault::new(Box::new(QuotaExceeded(5)));
        let payload = payload_of(panic::AssertUnwindSafe(|| fault.raise()));
        assert_eq!(payload.downcast_ref::<QuotaExceeded>(), Some(&QuotaExceeded(5)));
    }
}
