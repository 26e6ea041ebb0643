//! Operations over collections of [`Maybe`] and [`Outcome`] values.
//!
//! Each operation is available as a free function taking any [`IntoIterator`], and as a method of the
//! [`MaybeIterExt`] / [`OutcomeIterExt`] extension traits on iterators.

use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// `Some` of all payloads in order if every element is `Some`; `None` as soon as a `None` is found.
///
/// Elements after the first `None` are not pulled from the iterator.
pub fn sequence_maybes<T>(maybes: impl IntoIterator<Item=Maybe<T>>) -> Maybe<Vec<T>> {
  let collected: Option<Vec<T>> = maybes.into_iter().map(Maybe::into_std).collect();
  Maybe::wrap(collected)
}

/// The payloads of the `Some` elements, in order; `None`s are dropped.
pub fn maybe_values<T>(maybes: impl IntoIterator<Item=Maybe<T>>) -> Vec<T> {
  maybes.into_iter().flatten().collect()
}

/// Splits into the payloads of the `Some` elements, in order, and the number of `None` elements.
pub fn partition_maybes<T>(maybes: impl IntoIterator<Item=Maybe<T>>) -> (Vec<T>, usize) {
  let mut values = Vec::new();
  let mut none_count = 0;
  for maybe in maybes {
    match maybe.into_std() {
      Some(value) => values.push(value),
      None => none_count += 1,
    }
  }
  (values, none_count)
}

/// `Ok` of all values in order if every element is `Ok`; the first `Err` otherwise.
///
/// Elements after the first `Err` are not pulled from the iterator.
pub fn sequence_outcomes<T, E>(outcomes: impl IntoIterator<Item=Outcome<T, E>>) -> Outcome<Vec<T>, E> {
  let collected: Result<Vec<T>, E> = outcomes.into_iter().map(Outcome::into_std).collect();
  Outcome::wrap(collected)
}

/// The values of the `Ok` elements, in order.
pub fn outcome_oks<T, E>(outcomes: impl IntoIterator<Item=Outcome<T, E>>) -> Vec<T> {
  outcomes.into_iter().flatten().collect()
}

/// The errors of the `Err` elements, in order.
pub fn outcome_errs<T, E>(outcomes: impl IntoIterator<Item=Outcome<T, E>>) -> Vec<E> {
  outcomes.into_iter().filter_map(|outcome| outcome.into_std().err()).collect()
}

/// Splits into all `Ok` values and all `Err` errors, each in order.
pub fn partition_outcomes<T, E>(outcomes: impl IntoIterator<Item=Outcome<T, E>>) -> (Vec<T>, Vec<E>) {
  let mut oks = Vec::new();
  let mut errs = Vec::new();
  for outcome in outcomes {
    match outcome.into_std() {
      Ok(value) => oks.push(value),
      Err(error) => errs.push(error),
    }
  }
  (oks, errs)
}


pub trait MaybeIterExt<T>: Iterator<Item=Maybe<T>> + Sized {
  #[inline]
  fn sequence(self) -> Maybe<Vec<T>> { sequence_maybes(self) }

  #[inline]
  fn values(self) -> Vec<T> { maybe_values(self) }

  #[inline]
  fn partition_maybes(self) -> (Vec<T>, usize) { partition_maybes(self) }
}

impl<T, I: Iterator<Item=Maybe<T>>> MaybeIterExt<T> for I {}

pub trait OutcomeIterExt<T, E>: Iterator<Item=Outcome<T, E>> + Sized {
  #[inline]
  fn sequence_outcomes(self) -> Outcome<Vec<T>, E> { sequence_outcomes(self) }

  #[inline]
  fn oks(self) -> Vec<T> { outcome_oks(self) }

  #[inline]
  fn errs(self) -> Vec<E> { outcome_errs(self) }

  #[inline]
  fn partition_outcomes(self) -> (Vec<T>, Vec<E>) { partition_outcomes(self) }
}

impl<T, E, I: Iterator<Item=Outcome<T, E>>> OutcomeIterExt<T, E> for I {}
