//! Early-return macros for functions returning [`Outcome`](crate::Outcome)

/// Unwrap a success value or return the failure from the enclosing function
///
/// The one-argument form returns `Outcome::Err(err.into())`, so the failure
/// type of the enclosing function only needs a `From` conversion. The
/// two-argument form returns whatever the handler builds from the failure.
///
/// # Examples
///
/// ```rust
/// use nebula_result::{Outcome, get_or_return};
///
/// fn parse_port(raw: &str) -> Outcome<u16, String> {
///     Outcome::from(raw.parse::<u16>()).map_err(|e| e.to_string())
/// }
///
/// fn endpoint(raw: &str) -> Outcome<String, String> {
///     let port = get_or_return!(parse_port(raw));
///     Outcome::Ok(format!("localhost:{port}"))
/// }
///
/// fn port_or_default(raw: &str) -> u16 {
///     get_or_return!(parse_port(raw), |_| 80)
/// }
///
/// assert_eq!(endpoint("8080"), Outcome::Ok("localhost:8080".to_owned()));
/// assert!(endpoint("http").is_err());
/// assert_eq!(port_or_default("http"), 80);
/// ```
#[macro_export]
macro_rules! get_or_return {
    ($outcome:expr $(,)?) => {
        match $outcome {
            $crate::Outcome::Ok(value) => value,
            $crate::Outcome::Err(err) => {
                return $crate::Outcome::Err(::core::convert::From::from(err));
            }
        }
    };
    ($outcome:expr, $on_err:expr $(,)?) => {
        match $outcome {
            $crate::Outcome::Ok(value) => value,
            $crate::Outcome::Err(err) => return ($on_err)(err),
        }
    };
}

/// Ensure a condition is true or return a failure
///
/// # Examples
///
/// ```rust
/// use nebula_result::{Outcome, ensure};
///
/// fn validate_age(age: u32) -> Outcome<u32, &'static str> {
///     ensure!(age >= 18, "Age must be at least 18");
///     ensure!(age <= 120, "Invalid age");
///     Outcome::Ok(age)
/// }
///
/// assert_eq!(validate_age(30), Outcome::Ok(30));
/// assert_eq!(validate_age(16), Outcome::Err("Age must be at least 18"));
/// ```
#[macro_export]
macro_rules! ensure {
    ($condition:expr, $error:expr $(,)?) => {
        if !($condition) {
            return $crate::Outcome::Err(::core::convert::From::from($error));
        }
    };
}
