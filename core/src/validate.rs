//! Running validators against a candidate value, under two policies.
//!
//! - Fail-fast ([`validate_first`], [`Checks::first`]): validators run in order and the first error stops the run,
//!   like chaining with [`Outcome::and_then`].
//! - Accumulate ([`validate_all`], [`Checks::all`]): every validator runs and every error is reported, in validator
//!   order.
//!
//! A validator inspects the candidate by reference and returns `Outcome<Unit, E>`; [`ensure`] builds one from a
//! condition.

use crate::outcome::Outcome;
use crate::unit::Unit;

/// `Ok(Unit)` if `condition` holds, otherwise `Err` of the lazily created error.
#[inline]
pub fn ensure<E>(condition: bool, error: impl FnOnce() -> E) -> Outcome<Unit, E> {
  if condition { Outcome::success(Unit) } else { Outcome::failure(error()) }
}

/// Runs `validators` against `value` in order, stopping at the first error.
pub fn validate_first<T, E, V>(value: T, validators: impl IntoIterator<Item=V>) -> Outcome<T, E> where
  V: FnOnce(&T) -> Outcome<Unit, E>,
{
  for validator in validators {
    if let Err(error) = validator(&value).into_std() {
      return Outcome::failure(error);
    }
  }
  Outcome::success(value)
}

/// Runs every validator against `value`, collecting all errors in validator order.
///
/// Returns `Ok(value)` only if no validator failed.
pub fn validate_all<T, E, V>(value: T, validators: impl IntoIterator<Item=V>) -> Outcome<T, Vec<E>> where
  V: FnOnce(&T) -> Outcome<Unit, E>,
{
  let mut errors = Vec::new();
  let mut count = 0usize;
  for validator in validators {
    count += 1;
    if let Err(error) = validator(&value).into_std() {
      errors.push(error);
    }
  }
  tracing::trace!(validators = count, failed = errors.len(), "validated candidate");
  if errors.is_empty() { Outcome::success(value) } else { Outcome::failure(errors) }
}


type Check<'a, T, E> = Box<dyn Fn(&T) -> Outcome<Unit, E> + 'a>;

/// A reusable, ordered set of validators for values of type `T`.
///
/// ```
/// use vessel_core::validate::{ensure, Checks};
///
/// let username = Checks::new()
///   .with(|name: &String| ensure(!name.is_empty(), || "must not be empty"))
///   .with(|name: &String| ensure(name.len() <= 8, || "must be at most 8 characters"))
///   .with(|name: &String| ensure(name.chars().all(char::is_alphanumeric), || "must be alphanumeric"));
///
/// assert!(username.all("alice".to_owned()).is_ok());
/// assert_eq!(username.all("bad name!!".to_owned()).unwrap_err().len(), 2);
/// assert_eq!(username.first("bad name!!".to_owned()).unwrap_err(), "must be at most 8 characters");
/// ```
pub struct Checks<'a, T, E> {
  checks: Vec<Check<'a, T, E>>,
}

impl<'a, T, E> Default for Checks<'a, T, E> {
  #[inline]
  fn default() -> Self { Self { checks: Vec::new() } }
}

impl<'a, T, E> Checks<'a, T, E> {
  #[inline]
  pub fn new() -> Self { Self::default() }

  #[inline]
  pub fn with(mut self, check: impl Fn(&T) -> Outcome<Unit, E> + 'a) -> Self {
    self.checks.push(Box::new(check));
    self
  }

  #[inline]
  pub fn add(&mut self, check: impl Fn(&T) -> Outcome<Unit, E> + 'a) -> &mut Self {
    self.checks.push(Box::new(check));
    self
  }


  #[inline]
  pub fn len(&self) -> usize { self.checks.len() }

  #[inline]
  pub fn is_empty(&self) -> bool { self.checks.is_empty() }


  /// Fail-fast: see [`validate_first`].
  #[inline]
  pub fn first(&self, value: T) -> Outcome<T, E> {
    validate_first(value, self.checks.iter())
  }

  /// Accumulate: see [`validate_all`].
  #[inline]
  pub fn all(&self, value: T) -> Outcome<T, Vec<E>> {
    validate_all(value, self.checks.iter())
  }
}
