//! The [`Outcome`] type and its combinators

use std::fmt;

/// Success or failure of an operation, as a plain value.
///
/// Every combinator consumes the receiver and produces a new outcome; nothing
/// is mutated in place. Callbacks run at most once and only for the matching
/// variant. A panic raised inside a callback is never caught here, it unwinds
/// to the caller (see [`result_try`](crate::result_try) for the one place
/// faults become values).
///
/// # Examples
///
/// ```rust
/// use nebula_result::Outcome;
///
/// let parsed: Outcome<u16, String> = Outcome::Ok(8080);
/// let url = parsed
///     .map(|port| format!("http://localhost:{port}"))
///     .get_or(|_| "http://localhost".to_owned());
/// assert_eq!(url, "http://localhost:8080");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
pub enum Outcome<T, E> {
    /// Success value
    Ok(T),
    /// Failure value
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if this is [`Outcome::Ok`]
    #[inline]
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is [`Outcome::Err`]
    #[inline]
    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Success value as an `Option`, discarding any failure
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Failure value as an `Option`, discarding any success
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(err) => Some(err),
        }
    }

    /// Borrow both channels without consuming the outcome
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(err) => Outcome::Err(err),
        }
    }

    /// Transform the success value, leaving a failure untouched
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(err) => Outcome::Err(err),
        }
    }

    /// Transform the failure value, leaving a success untouched
    #[inline]
    pub fn map_err<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(err) => Outcome::Err(f(err)),
        }
    }

    /// Call `f` with the success value by reference and pass the outcome on
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Call `f` with the failure value by reference and pass the outcome on
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(err) = &self {
            f(err);
        }
        self
    }

    /// Sequence a fallible step that depends on the success value.
    ///
    /// A failure short-circuits and `f` is never called.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(err) => Outcome::Err(err),
        }
    }

    /// Recover from a failure by producing an alternative outcome.
    ///
    /// The failure type may change. A success passes through and `f` is
    /// never called.
    #[inline]
    pub fn or_else<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> Outcome<T, F2>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(err) => f(err),
        }
    }

    /// Run a second fallible step on the success value, then combine both
    /// success values with `g`.
    ///
    /// Equivalent to `self.and_then(|x| f(&x).map(|y| g(x, y)))`. If either
    /// step fails, the failure is returned and `g` is never called.
    ///
    /// ```rust
    /// use nebula_result::Outcome;
    ///
    /// let total: Outcome<i32, ()> = Outcome::Ok(2).then_map(|x| Outcome::Ok(x * 3), |x, y| x + y);
    /// assert_eq!(total, Outcome::Ok(8));
    /// ```
    pub fn then_map<U, V, F, G>(self, f: F, g: G) -> Outcome<V, E>
    where
        F: FnOnce(&T) -> Outcome<U, E>,
        G: FnOnce(T, U) -> V,
    {
        match self {
            Self::Ok(first) => match f(&first) {
                Outcome::Ok(second) => Outcome::Ok(g(first, second)),
                Outcome::Err(err) => Outcome::Err(err),
            },
            Self::Err(err) => Outcome::Err(err),
        }
    }

    /// Success value, or whatever `on_err` produces from the failure.
    ///
    /// `on_err` is never called on success. For an early return from the
    /// enclosing function use [`get_or_return!`](crate::get_or_return) or
    /// `outcome.into_result()?`.
    #[inline]
    pub fn get_or<F>(self, on_err: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(err) => on_err(err),
        }
    }

    /// Success value, or raise the failure value itself as a panic payload.
    ///
    /// The payload is `E` as-is, so [`result_try`](crate::result_try) can
    /// catch it back and [`Fault::downcast`](crate::Fault::downcast) recovers
    /// the original failure. When `E` is [`Fault`](crate::Fault), catching it
    /// again yields the payload that fault wrapped, not a fault of a fault.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Send + 'static,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(err) => std::panic::panic_any(err),
        }
    }

    /// Failure value, or raise the success value as a panic payload
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: Send + 'static,
    {
        match self {
            Self::Ok(value) => std::panic::panic_any(value),
            Self::Err(err) => err,
        }
    }

    /// Convert into a std `Result`, typically to apply `?`
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(err) => Self::Err(err),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(err) => Err(err),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "Ok({value})"),
            Self::Err(err) => write!(f, "Err({err})"),
        }
    }
}
