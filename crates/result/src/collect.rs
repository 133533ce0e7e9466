//! Aggregating many outcomes into one
//!
//! All entry points pull lazily and stop at the first failure, so they are
//! safe on infinite iterators and on iterators whose elements have side
//! effects.

use crate::outcome::Outcome;

/// Collect the success values of `outcomes` in order.
///
/// Returns the first failure as soon as it is pulled; no further element is
/// requested from the iterator. An empty input yields `Ok(vec![])`.
///
/// ```rust
/// use nebula_result::{Outcome, collect};
///
/// let all: Outcome<Vec<u8>, &str> = collect([Outcome::Ok(1), Outcome::Ok(2)]);
/// assert_eq!(all, Outcome::Ok(vec![1, 2]));
///
/// let first_failure = collect((0u8..).map(|n| if n < 3 { Outcome::Ok(n) } else { Outcome::Err("stop") }));
/// assert_eq!(first_failure, Outcome::Err("stop"));
/// ```
pub fn collect<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes.into_iter().collect()
}

/// Iterator extension for collecting outcomes without naming the target type
pub trait OutcomeIteratorExt<T, E>: Iterator<Item = Outcome<T, E>> + Sized {
    /// Same as [`collect`]
    fn collect_outcomes(self) -> Outcome<Vec<T>, E> {
        collect(self)
    }
}

impl<I, T, E> OutcomeIteratorExt<T, E> for I where I: Iterator<Item = Outcome<T, E>> {}

impl<T, E, V> FromIterator<Outcome<T, E>> for Outcome<V, E>
where
    V: FromIterator<T>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        let mut failure = None;
        let values = Shunt {
            iter: iter.into_iter(),
            failure: &mut failure,
        }
        .collect();

        match failure {
            Some(err) => Self::Err(err),
            None => Self::Ok(values),
        }
    }
}

/// Yields success values and parks the first failure in `failure`.
///
/// Once a failure is parked the inner iterator is never polled again, even if
/// the consuming collection keeps calling `next`.
struct Shunt<'a, I, E> {
    iter: I,
    failure: &'a mut Option<E>,
}

impl<I, T, E> Iterator for Shunt<'_, I, E>
where
    I: Iterator<Item = Outcome<T, E>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.failure.is_some() {
            return None;
        }
        match self.iter.next()? {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(err) => {
                *self.failure = Some(err);
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failure.is_some() {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}
