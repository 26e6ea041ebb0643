use std::fmt::{self, Debug, Formatter};

use crate::absent::Absent;
use crate::error::{raise, ContractError, ErrorDetail};

/// A value of type `T`, or an error of type `E`.
///
/// An `Outcome` is either `Ok` or `Err`. Like [`Maybe`](crate::Maybe), it can only be built through its factories:
/// [`ok`](Self::ok) and [`err`](Self::err) refuse an [absent](Absent) payload, and [`try_run`](Self::try_run) turns a
/// panicking computation into an `Err`.
///
/// Failure is data: combinators pass an `Err` through untouched. Only the extraction methods ([`unwrap`](Self::unwrap),
/// [`expect`](Self::expect), and their `_err` counterparts) raise, with a [`ContractError`] naming the misuse.
///
/// Every `Ok` orders before every `Err`; within a variant, outcomes order by payload.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Outcome<T, E> {
  inner: Result<T, E>,
}

// Construction

impl<T, E> Outcome<T, E> {
  /// Creates an `Ok` holding `value`.
  ///
  /// # Panics
  ///
  /// Raises [`ContractError::InvalidOkConstruction`] when `value` is absent.
  #[inline]
  #[track_caller]
  pub fn ok(value: T) -> Self where
    T: Absent
  {
    match Self::try_ok(value) {
      Ok(outcome) => outcome,
      Err(error) => raise(error),
    }
  }

  #[inline]
  pub fn try_ok(value: T) -> Result<Self, ContractError> where
    T: Absent
  {
    if value.is_absent() {
      Err(ContractError::InvalidOkConstruction)
    } else {
      Ok(Self::success(value))
    }
  }

  /// Creates an `Err` holding `error`.
  ///
  /// # Panics
  ///
  /// Raises [`ContractError::InvalidErrConstruction`] when `error` is absent.
  #[inline]
  #[track_caller]
  pub fn err(error: E) -> Self where
    E: Absent
  {
    match Self::try_err(error) {
      Ok(outcome) => outcome,
      Err(contract_error) => raise(contract_error),
    }
  }

  #[inline]
  pub fn try_err(error: E) -> Result<Self, ContractError> where
    E: Absent
  {
    if error.is_absent() {
      Err(ContractError::InvalidErrConstruction)
    } else {
      Ok(Self::failure(error))
    }
  }

  /// Converts from a `std` result, checking the payload like [`ok`](Self::ok) and [`err`](Self::err) do.
  #[inline]
  #[track_caller]
  pub fn from_std(result: Result<T, E>) -> Self where
    T: Absent,
    E: Absent,
  {
    match result {
      Ok(value) => Self::ok(value),
      Err(error) => Self::err(error),
    }
  }

  #[inline]
  pub(crate) const fn success(value: T) -> Self { Self { inner: Ok(value) } }

  #[inline]
  pub(crate) const fn failure(error: E) -> Self { Self { inner: Err(error) } }

  #[inline]
  pub(crate) fn wrap(inner: Result<T, E>) -> Self { Self { inner } }
}

// Inspection

impl<T, E> Outcome<T, E> {
  #[inline]
  pub const fn is_ok(&self) -> bool { self.inner.is_ok() }

  #[inline]
  pub const fn is_err(&self) -> bool { self.inner.is_err() }

  #[inline]
  pub fn is_ok_and(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
    self.inner.as_ref().is_ok_and(predicate)
  }

  #[inline]
  pub fn is_err_and(&self, predicate: impl FnOnce(&E) -> bool) -> bool {
    self.inner.as_ref().is_err_and(predicate)
  }

  /// Non-failing accessor: a reference to the value if `Ok`.
  #[inline]
  pub fn when_ok(&self) -> Option<&T> { self.inner.as_ref().ok() }

  /// Non-failing accessor: a reference to the error if `Err`.
  #[inline]
  pub fn when_err(&self) -> Option<&E> { self.inner.as_ref().err() }

  #[inline]
  pub fn into_std(self) -> Result<T, E> { self.inner }

  #[inline]
  pub fn as_std(&self) -> &Result<T, E> { &self.inner }

  #[inline]
  pub fn as_ref(&self) -> Outcome<&T, &E> { Outcome::wrap(self.inner.as_ref()) }

  #[inline]
  pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> { Outcome::wrap(self.inner.as_mut()) }

  /// Iterates over the value: one item if `Ok`, none if `Err`.
  #[inline]
  pub fn iter(&self) -> std::result::Iter<'_, T> { self.inner.iter() }
}

// Extraction

impl<T, E> Outcome<T, E> {
  /// Returns the value.
  ///
  /// # Panics
  ///
  /// Raises [`ContractError::ResultUnwrap`] when `Err`. A fault error is chained as the source of the raised error,
  /// any other error is described in its message.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T where
    E: ErrorDetail
  {
    match self.inner {
      Ok(value) => value,
      Err(error) => raise(ContractError::unwrap_failed(error)),
    }
  }

  #[inline]
  pub fn try_unwrap(self) -> Result<T, ContractError> where
    E: ErrorDetail
  {
    self.inner.map_err(ContractError::unwrap_failed)
  }

  /// Returns the error.
  ///
  /// # Panics
  ///
  /// Raises [`ContractError::ResultUnwrapErr`] when `Ok`.
  #[inline]
  #[track_caller]
  pub fn unwrap_err(self) -> E where
    T: Debug
  {
    match self.inner {
      Ok(value) => raise(ContractError::unwrap_err_failed(value)),
      Err(error) => error,
    }
  }

  #[inline]
  pub fn try_unwrap_err(self) -> Result<E, ContractError> where
    T: Debug
  {
    match self.inner {
      Ok(value) => Err(ContractError::unwrap_err_failed(value)),
      Err(error) => Ok(error),
    }
  }

  /// Returns the value.
  ///
  /// # Panics
  ///
  /// Raises [`ContractError::ResultExpect`], prefixed with `message`, when `Err`.
  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> T where
    E: ErrorDetail
  {
    match self.inner {
      Ok(value) => value,
      Err(error) => raise(ContractError::expect_failed(message, error)),
    }
  }

  #[inline]
  pub fn try_expect(self, message: &str) -> Result<T, ContractError> where
    E: ErrorDetail
  {
    self.inner.map_err(|error| ContractError::expect_failed(message, error))
  }

  /// Returns the error.
  ///
  /// # Panics
  ///
  /// Raises [`ContractError::ResultExpectErr`], prefixed with `message`, when `Ok`.
  #[inline]
  #[track_caller]
  pub fn expect_err(self, message: &str) -> E where
    T: Debug
  {
    match self.inner {
      Ok(value) => raise(ContractError::expect_err_failed(message, value)),
      Err(error) => error,
    }
  }

  #[inline]
  pub fn try_expect_err(self, message: &str) -> Result<E, ContractError> where
    T: Debug
  {
    match self.inner {
      Ok(value) => Err(ContractError::expect_err_failed(message, value)),
      Err(error) => Ok(error),
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T { self.inner.unwrap_or(default) }

  /// Returns the value, or computes one from the error.
  #[inline]
  pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T { self.inner.unwrap_or_else(f) }

  #[inline]
  pub fn unwrap_or_default(self) -> T where
    T: Default
  {
    self.inner.unwrap_or_default()
  }
}

// Transformation

impl<T, E> Outcome<T, E> {
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> { Outcome::wrap(self.inner.map(f)) }

  #[inline]
  pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> { Outcome::wrap(self.inner.map_err(f)) }

  #[inline]
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U { self.inner.map_or(default, f) }

  #[inline]
  pub fn map_or_else<U>(self, default: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
    self.inner.map_or_else(default, f)
  }

  /// Chains a fallible step; an `Err` short-circuits and `f` is not called.
  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
    match self.inner {
      Ok(value) => f(value),
      Err(error) => Outcome::failure(error),
    }
  }

  /// Discards the `Ok` value of `self` in favour of `other`; an `Err` in `self` is kept.
  #[inline]
  pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
    match self.inner {
      Ok(_) => other,
      Err(error) => Outcome::failure(error),
    }
  }

  #[inline]
  pub fn or<F>(self, alternative: Outcome<T, F>) -> Outcome<T, F> {
    match self.inner {
      Ok(value) => Outcome::success(value),
      Err(_) => alternative,
    }
  }

  /// Recovers from an `Err` by computing a new outcome from the error; the error type may change.
  #[inline]
  pub fn or_else<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
    match self.inner {
      Ok(value) => Outcome::success(value),
      Err(error) => f(error),
    }
  }

  #[inline]
  pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
    if let Ok(value) = &self.inner {
      f(value);
    }
    self
  }

  #[inline]
  pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
    if let Err(error) = &self.inner {
      f(error);
    }
    self
  }

  /// Exhaustive match: `ok` is applied to the value, or `err` to the error.
  ///
  /// Handlers returning `()` make this the side-effect-only form.
  #[inline]
  pub fn match_with<R>(self, ok: impl FnOnce(T) -> R, err: impl FnOnce(E) -> R) -> R {
    match self.inner {
      Ok(value) => ok(value),
      Err(error) => err(error),
    }
  }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
  #[inline]
  pub fn flatten(self) -> Outcome<T, E> { self.and_then(|inner| inner) }
}

impl<T: Clone, E: Clone> Outcome<&T, &E> {
  #[inline]
  pub fn cloned(self) -> Outcome<T, E> {
    Outcome::wrap(self.inner.map(Clone::clone).map_err(Clone::clone))
  }
}


impl<T, E> Absent for Outcome<T, E> {}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
  #[inline]
  fn from(outcome: Outcome<T, E>) -> Self { outcome.inner }
}

impl<T, E> IntoIterator for Outcome<T, E> {
  type Item = T;
  type IntoIter = std::result::IntoIter<T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.inner.into_iter() }
}
impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
  type Item = &'a T;
  type IntoIter = std::result::Iter<'a, T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.inner.iter() }
}

impl<T: Debug, E: Debug> Debug for Outcome<T, E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.inner {
      Ok(value) => f.debug_tuple("Ok").field(value).finish(),
      Err(error) => f.debug_tuple("Err").field(error).finish(),
    }
  }
}
